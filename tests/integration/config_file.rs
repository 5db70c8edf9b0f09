// Config files on disk feeding handler settings.

use ffhandlers::config::Config;
use ffhandlers::engine::dnxhr::S_CODEC_DNXHR_PROFILE;
use ffhandlers::engine::{PixelFormat, RegisteredEncoder};
use std::fs;
use tempfile::tempdir;

#[test]
fn save_and_load_roundtrip() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.logging.level = "debug".to_string();
    config
        .defaults
        .settings
        .insert(S_CODEC_DNXHR_PROFILE.to_string(), "dnxhr_444".to_string());
    config.save_to(&path)?;

    let loaded = Config::load_from(&path)?;
    assert_eq!(loaded.logging.level, "debug");
    assert_eq!(
        loaded.defaults.settings.get(S_CODEC_DNXHR_PROFILE).map(String::as_str),
        Some("dnxhr_444")
    );
    Ok(())
}

#[test]
fn configured_profile_overrides_handler_default() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[defaults]\ncodec = \"dnxhd\"\n\n[defaults.settings]\n\"Codec.DNxHR.Profile\" = \"dnxhr_hqx\"\n",
    )?;

    let config = Config::load_from(&path)?;
    let encoder = RegisteredEncoder::lookup(&config.defaults.codec).unwrap();
    let mut settings = encoder.defaults();
    config.defaults.apply_to(&mut settings);

    assert_eq!(
        encoder.resolve_pix_fmt(&settings, PixelFormat::Yuv420p),
        PixelFormat::Yuv422p10le
    );
    Ok(())
}

#[test]
fn malformed_config_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[defaults\ncodec = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
}

#[test]
fn missing_config_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(Config::load_from(&dir.path().join("absent.toml")).is_err());
}
