//! Encoding contexts and the scoped temporary context guard.

use std::cell::Cell;
use std::ops::Deref;
use tracing::debug;

use super::options::{OptionError, PrivData};
use super::Codec;
use crate::engine::pix_fmt::PixelFormat;

/// Live, per-instance codec state owned by the encoder factory
#[derive(Debug, Clone)]
pub struct EncodingContext {
    codec_name: &'static str,
    pub pix_fmt: Option<PixelFormat>,
    priv_data: Option<PrivData>,
}

impl EncodingContext {
    /// Allocate a context for `codec`. Private data only exists when the codec
    /// declares a private option class.
    pub fn alloc(codec: &Codec) -> Self {
        Self {
            codec_name: codec.name,
            pix_fmt: None,
            priv_data: codec.priv_class.map(PrivData::new),
        }
    }

    pub fn codec_name(&self) -> &'static str {
        self.codec_name
    }

    pub fn priv_data(&self) -> Option<&PrivData> {
        self.priv_data.as_ref()
    }

    /// Set a named option, searching the codec-private options
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), OptionError> {
        match self.priv_data.as_mut() {
            Some(data) if data.has_option(name) => data.set(name, value),
            _ => Err(OptionError::NotFound(name.to_string())),
        }
    }

    pub fn option_string(&self, name: &str) -> Result<String, OptionError> {
        match self.priv_data.as_ref() {
            Some(data) if data.has_option(name) => data.get_string(name),
            _ => Err(OptionError::NotFound(name.to_string())),
        }
    }

    /// ffmpeg command-line arguments for the committed state of this context
    pub fn ffmpeg_args(&self) -> Vec<String> {
        let mut args = vec!["-c:v".to_string(), self.codec_name.to_string()];

        if let Some(data) = &self.priv_data {
            for opt in data.explicit() {
                if let Ok(value) = data.get_string(opt.name) {
                    args.push(format!("-{}:v", opt.name));
                    args.push(value);
                }
            }
        }

        if let Some(fmt) = self.pix_fmt {
            args.push("-pix_fmt".to_string());
            args.push(fmt.ffmpeg_name().to_string());
        }

        args
    }
}

/// Shell-quoted rendering of ffmpeg arguments for display
pub fn format_args(args: &[String]) -> String {
    shlex::try_join(args.iter().map(String::as_str)).unwrap_or_else(|_| args.join(" "))
}

thread_local! {
    static TEMPORARIES: Cell<usize> = const { Cell::new(0) };
}

/// Number of temporary inspection contexts alive on this thread
pub fn temporary_contexts_in_flight() -> usize {
    TEMPORARIES.with(Cell::get)
}

/// A context created only for inspection; released when dropped
#[derive(Debug)]
pub struct TemporaryContext {
    ctx: EncodingContext,
}

impl TemporaryContext {
    fn alloc(codec: &Codec) -> Self {
        TEMPORARIES.with(|n| n.set(n.get() + 1));
        debug!(codec = codec.name, "allocated temporary inspection context");
        Self {
            ctx: EncodingContext::alloc(codec),
        }
    }
}

impl Drop for TemporaryContext {
    fn drop(&mut self) {
        TEMPORARIES.with(|n| n.set(n.get().saturating_sub(1)));
        debug!(
            codec = self.ctx.codec_name,
            "released temporary inspection context"
        );
    }
}

/// Either the caller's live context or a temporary one made for this call
#[derive(Debug)]
pub enum ScopedContext<'a> {
    Live(&'a EncodingContext),
    Temporary(TemporaryContext),
}

impl<'a> ScopedContext<'a> {
    pub fn acquire(codec: &Codec, live: Option<&'a EncodingContext>) -> Self {
        match live {
            Some(ctx) => ScopedContext::Live(ctx),
            None => ScopedContext::Temporary(TemporaryContext::alloc(codec)),
        }
    }

    pub fn is_temporary(&self) -> bool {
        matches!(self, ScopedContext::Temporary(_))
    }
}

impl Deref for ScopedContext<'_> {
    type Target = EncodingContext;

    fn deref(&self) -> &EncodingContext {
        match self {
            ScopedContext::Live(ctx) => ctx,
            ScopedContext::Temporary(tmp) => &tmp.ctx,
        }
    }
}
