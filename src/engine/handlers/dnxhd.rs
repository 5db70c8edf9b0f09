//! Avid DNxHR through the ffmpeg `dnxhd` (VC-3) encoder.

use tracing::{debug, info};

use super::{CodecInfo, Handler};
use crate::engine::codec::{
    Codec, EncodingContext, OptionError, PrivData, ScopedContext, for_each_const,
};
use crate::engine::dnxhr::{
    DEFAULT_PROFILE, LEGACY_PROFILE, PROFILE_OPTION, S_CODEC_DNXHR_PROFILE, find_profile,
    pix_fmt_for_profile, profile_label_key,
};
use crate::engine::pix_fmt::PixelFormat;
use crate::engine::settings::SettingsBag;
use crate::ui::locale::translate;
use crate::ui::properties::{ComboFormat, ComboType, ListItem, ListProperty, Properties};

/// Most people know VC-3 only as DNx
pub const DISPLAY_NAME: &str = "Avid DNxHR (via FFmpeg)";

#[derive(Debug, Clone, Copy, Default)]
pub struct DnxhdHandler;

/// Fill `list` with the profile choices of `data`.
///
/// libavcodec declares the profiles highest tier first; each one is inserted
/// at the front so the list runs from the lowest tier up. The legacy DNxHD
/// profile is skipped.
fn fill_profile_list(list: &mut ListProperty, data: &PrivData) {
    for_each_const(data.class(), PROFILE_OPTION, |opt| {
        if opt.name == LEGACY_PROFILE {
            return;
        }
        list.insert_string(0, translate(&profile_label_key(opt.name)), opt.name);
    });
}

impl DnxhdHandler {
    /// Profile choices for `codec`, inspecting a temporary context when no live
    /// one is given. Empty when the codec exposes no private options.
    pub fn profile_choices(&self, codec: &Codec, context: Option<&EncodingContext>) -> Vec<ListItem> {
        let mut props = Properties::new();
        self.get_properties(&mut props, codec, context, false);
        props
            .get(S_CODEC_DNXHR_PROFILE)
            .map(|list| list.items().to_vec())
            .unwrap_or_default()
    }

    /// The audit line written by `log_options`
    pub fn options_summary(&self, codec: &Codec, context: &EncodingContext) -> String {
        let profile = context
            .option_string(PROFILE_OPTION)
            .unwrap_or_else(|_| "<unknown>".to_string());
        format!("[{}]   Avid DNxHR: Profile: {}", codec.name, profile)
    }
}

impl Handler for DnxhdHandler {
    fn adjust_info(&self, _codec: &Codec, info: &mut CodecInfo) {
        info.name = DISPLAY_NAME.to_string();
    }

    fn override_colorformat(
        &self,
        target: &mut PixelFormat,
        settings: &SettingsBag,
        _codec: &Codec,
        _context: Option<&EncodingContext>,
    ) {
        let profile = settings.get_string(S_CODEC_DNXHR_PROFILE);
        if find_profile(profile).is_none() {
            debug!(profile, "unknown DNxHR profile, using fallback pixel format");
        }
        *target = pix_fmt_for_profile(profile);
    }

    fn get_defaults(
        &self,
        settings: &mut SettingsBag,
        _codec: &Codec,
        _context: Option<&EncodingContext>,
        _hw_encode: bool,
    ) {
        settings.set_default_string(S_CODEC_DNXHR_PROFILE, DEFAULT_PROFILE);
    }

    // Profiles fix the GOP structure
    fn has_keyframe_support(&self) -> bool {
        false
    }

    // Profiles fix the pixel format
    fn has_pixel_format_support(&self) -> bool {
        false
    }

    fn get_properties(
        &self,
        props: &mut Properties,
        codec: &Codec,
        context: Option<&EncodingContext>,
        _hw_encode: bool,
    ) {
        let ctx = ScopedContext::acquire(codec, context);
        let Some(data) = ctx.priv_data() else {
            debug!(
                codec = codec.name,
                temporary = ctx.is_temporary(),
                "no private data, skipping profile list"
            );
            return;
        };

        let Some(list) = props.add_list(
            S_CODEC_DNXHR_PROFILE,
            translate(S_CODEC_DNXHR_PROFILE),
            ComboType::List,
            ComboFormat::String,
        ) else {
            return;
        };

        fill_profile_list(list, data);
    }

    fn update(
        &self,
        settings: &SettingsBag,
        _codec: &Codec,
        context: &mut EncodingContext,
    ) -> Result<(), OptionError> {
        let profile = settings.get_string(S_CODEC_DNXHR_PROFILE);
        context.set_option(PROFILE_OPTION, profile)
    }

    fn log_options(&self, _settings: &SettingsBag, codec: &Codec, context: &EncodingContext) {
        info!("{}", self.options_summary(codec, context));
    }
}
