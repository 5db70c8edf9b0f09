//! Drives a codec and its handler through the encoder lifecycle in the
//! documented order. Codecs without a handler get the factory's neutral
//! behavior.

use tracing::debug;

use super::codec::{Codec, EncodingContext, OptionError, find_encoder};
use super::handlers::{CodecInfo, Handler, handler_for};
use super::pix_fmt::PixelFormat;
use super::settings::SettingsBag;
use crate::ui::properties::Properties;

/// A codec paired with its handler and adjusted display identity
pub struct RegisteredEncoder {
    pub codec: &'static Codec,
    pub info: CodecInfo,
    handler: Option<&'static dyn Handler>,
}

impl RegisteredEncoder {
    pub fn new(codec: &'static Codec) -> Self {
        let handler = handler_for(codec.name);
        let mut info = CodecInfo::for_codec(codec);
        if let Some(handler) = handler {
            handler.adjust_info(codec, &mut info);
        }
        Self {
            codec,
            info,
            handler,
        }
    }

    pub fn lookup(codec_name: &str) -> Option<Self> {
        find_encoder(codec_name).map(Self::new)
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    pub fn has_keyframe_support(&self) -> bool {
        self.handler.is_none_or(|h| h.has_keyframe_support())
    }

    pub fn has_pixel_format_support(&self) -> bool {
        self.handler.is_none_or(|h| h.has_pixel_format_support())
    }

    /// Fresh settings seeded with the handler's defaults
    pub fn defaults(&self) -> SettingsBag {
        let mut settings = SettingsBag::new();
        if let Some(handler) = self.handler {
            handler.get_defaults(&mut settings, self.codec, None, false);
        }
        settings
    }

    /// Output pixel format for `settings`, starting from `requested`
    pub fn resolve_pix_fmt(&self, settings: &SettingsBag, requested: PixelFormat) -> PixelFormat {
        let mut target = requested;
        if let Some(handler) = self.handler {
            handler.override_colorformat(&mut target, settings, self.codec, None);
        }
        target
    }

    pub fn properties(&self, context: Option<&EncodingContext>) -> Properties {
        let mut props = Properties::new();
        if let Some(handler) = self.handler {
            handler.get_properties(&mut props, self.codec, context, false);
        }
        props
    }

    /// Allocate a live context, commit `settings` into it and log the result
    pub fn start(
        &self,
        settings: &SettingsBag,
        requested: PixelFormat,
    ) -> Result<EncoderSession, OptionError> {
        let mut context = EncodingContext::alloc(self.codec);
        context.pix_fmt = Some(self.resolve_pix_fmt(settings, requested));

        if let Some(handler) = self.handler {
            handler.update(settings, self.codec, &mut context)?;
            handler.log_options(settings, self.codec, &context);
        }
        debug!(codec = self.codec.name, "encoder session ready");

        Ok(EncoderSession { context })
    }
}

/// Live state for one encode
#[derive(Debug)]
pub struct EncoderSession {
    pub context: EncodingContext,
}

impl EncoderSession {
    pub fn ffmpeg_args(&self) -> Vec<String> {
        self.context.ffmpeg_args()
    }
}
