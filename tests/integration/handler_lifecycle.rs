// End-to-end handler lifecycle: defaults -> settings change -> colorformat ->
// properties -> update -> log, the order the encoder factory drives it in.

use ffhandlers::engine::codec::{DNXHD, temporary_contexts_in_flight};
use ffhandlers::engine::dnxhr::{PROFILES, S_CODEC_DNXHR_PROFILE};
use ffhandlers::engine::{
    CodecInfo, DnxhdHandler, EncodingContext, Handler, OptionError, PixelFormat, SettingsBag,
    handler_for,
};
use ffhandlers::ui::Properties;

fn dnxhd() -> &'static dyn Handler {
    handler_for("dnxhd").expect("dnxhd handler registered")
}

#[test]
fn full_lifecycle_commits_selected_profile() {
    let handler = dnxhd();

    let mut info = CodecInfo::for_codec(&DNXHD);
    handler.adjust_info(&DNXHD, &mut info);
    assert_eq!(info.name, "Avid DNxHR (via FFmpeg)");

    let mut settings = SettingsBag::new();
    handler.get_defaults(&mut settings, &DNXHD, None, false);
    settings.set_string(S_CODEC_DNXHR_PROFILE, "dnxhr_hqx");

    let mut fmt = PixelFormat::Yuv420p;
    handler.override_colorformat(&mut fmt, &settings, &DNXHD, None);
    assert_eq!(fmt, PixelFormat::Yuv422p10le);

    let mut ctx = EncodingContext::alloc(&DNXHD);
    ctx.pix_fmt = Some(fmt);

    let mut props = Properties::new();
    handler.get_properties(&mut props, &DNXHD, Some(&ctx), false);
    let list = props.get(S_CODEC_DNXHR_PROFILE).unwrap();
    assert_eq!(list.index_of("dnxhr_hqx"), 3);

    handler.update(&settings, &DNXHD, &mut ctx).unwrap();
    handler.log_options(&settings, &DNXHD, &ctx);

    assert_eq!(ctx.option_string("profile").unwrap(), "dnxhr_hqx");
    assert_eq!(
        ctx.ffmpeg_args(),
        vec![
            "-c:v",
            "dnxhd",
            "-profile:v",
            "dnxhr_hqx",
            "-pix_fmt",
            "yuv422p10le"
        ]
    );
}

#[test]
fn every_catalog_profile_maps_and_reads_back() {
    let handler = dnxhd();
    for entry in PROFILES.iter() {
        let mut settings = SettingsBag::new();
        settings.set_string(S_CODEC_DNXHR_PROFILE, entry.id);

        let mut fmt = PixelFormat::Nv12;
        handler.override_colorformat(&mut fmt, &settings, &DNXHD, None);
        assert_eq!(fmt, entry.pix_fmt, "profile {}", entry.id);

        let mut ctx = EncodingContext::alloc(&DNXHD);
        handler.update(&settings, &DNXHD, &mut ctx).unwrap();
        assert_eq!(ctx.option_string("profile").unwrap(), entry.id);
    }
}

#[test]
fn defaults_resolve_to_eight_bit_422() {
    let handler = dnxhd();
    let mut settings = SettingsBag::new();
    handler.get_defaults(&mut settings, &DNXHD, None, false);

    let mut fmt = PixelFormat::Yuv420p;
    handler.override_colorformat(&mut fmt, &settings, &DNXHD, None);
    assert_eq!(fmt, PixelFormat::Yuv422p);
}

#[test]
fn colorformat_without_defaults_still_sets_fallback() {
    let mut fmt = PixelFormat::P010le;
    DnxhdHandler.override_colorformat(&mut fmt, &SettingsBag::new(), &DNXHD, None);
    assert_eq!(fmt, PixelFormat::Yuv422p);
}

#[test]
fn update_without_profile_reports_invalid_value() {
    let mut ctx = EncodingContext::alloc(&DNXHD);
    let err = dnxhd()
        .update(&SettingsBag::new(), &DNXHD, &mut ctx)
        .unwrap_err();
    assert!(matches!(err, OptionError::InvalidValue { .. }));
}

#[test]
fn introspection_never_leaks_temporary_contexts() {
    let handler = dnxhd();
    let mut props = Properties::new();
    handler.get_properties(&mut props, &DNXHD, None, false);
    let _ = DnxhdHandler.profile_choices(&DNXHD, None);
    assert_eq!(temporary_contexts_in_flight(), 0);
}
