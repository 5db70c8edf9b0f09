//! Codec-specific handlers for the generic encoder factory.
//!
//! The factory drives every encoder through the same lifecycle; a handler
//! supplies the codec-specific pieces so the factory never special-cases a
//! codec itself. Call order per encoder instance:
//!
//! 1. `adjust_info` once at registration
//! 2. `get_defaults` to seed settings
//! 3. `override_colorformat` after settings change
//! 4. `get_properties` when the UI is built
//! 5. `update` right before encoding starts
//! 6. `log_options` to record what was applied

mod dnxhd;

pub use dnxhd::DnxhdHandler;

use crate::engine::codec::{Codec, EncodingContext, OptionError};
use crate::engine::pix_fmt::PixelFormat;
use crate::engine::settings::SettingsBag;
use crate::ui::properties::Properties;

/// User-facing identity of a registered encoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecInfo {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl CodecInfo {
    /// Identity the factory derives before any handler adjusts it
    pub fn for_codec(codec: &Codec) -> Self {
        Self {
            id: format!("ffmpeg-{}", codec.name),
            name: format!("{} (via FFmpeg)", codec.long_name),
            description: codec.long_name.to_string(),
        }
    }
}

/// Codec-specific behavior plugged into the encoder factory.
///
/// Every method has a neutral default so a codec without quirks needs no
/// overrides at all.
pub trait Handler: Send + Sync {
    fn adjust_info(&self, _codec: &Codec, _info: &mut CodecInfo) {}

    fn override_colorformat(
        &self,
        _target: &mut PixelFormat,
        _settings: &SettingsBag,
        _codec: &Codec,
        _context: Option<&EncodingContext>,
    ) {
    }

    fn get_defaults(
        &self,
        _settings: &mut SettingsBag,
        _codec: &Codec,
        _context: Option<&EncodingContext>,
        _hw_encode: bool,
    ) {
    }

    /// Whether keyframe interval controls have any effect
    fn has_keyframe_support(&self) -> bool {
        true
    }

    /// Whether the pixel format can be chosen independently
    fn has_pixel_format_support(&self) -> bool {
        true
    }

    fn get_properties(
        &self,
        _props: &mut Properties,
        _codec: &Codec,
        _context: Option<&EncodingContext>,
        _hw_encode: bool,
    ) {
    }

    /// Push settings into the live context. Failures from the option system
    /// are returned unchanged.
    fn update(
        &self,
        _settings: &SettingsBag,
        _codec: &Codec,
        _context: &mut EncodingContext,
    ) -> Result<(), OptionError> {
        Ok(())
    }

    fn log_options(&self, _settings: &SettingsBag, _codec: &Codec, _context: &EncodingContext) {}
}

static DNXHD_HANDLER: DnxhdHandler = DnxhdHandler;

/// Handler registered for `codec_name`, if the codec needs one
pub fn handler_for(codec_name: &str) -> Option<&'static dyn Handler> {
    match codec_name {
        "dnxhd" => Some(&DNXHD_HANDLER),
        _ => None,
    }
}
