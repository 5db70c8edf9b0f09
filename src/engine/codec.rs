//! Codec library model consumed by the handlers: codec descriptors, declared
//! options, and encoding contexts.

mod builtin;
mod context;
mod options;

pub use builtin::{DNXHD, DNXHD_OPTIONS, ENCODERS, RAWVIDEO, find_encoder};
pub use context::{
    EncodingContext, ScopedContext, TemporaryContext, format_args, temporary_contexts_in_flight,
};
pub use options::{CodecOption, OptionError, OptionKind, PrivData, find_option, for_each_const};

/// Immutable description of one codec implementation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Codec {
    pub name: &'static str,
    pub long_name: &'static str,
    /// Private option class; `None` when the codec has no private options
    pub priv_class: Option<&'static [CodecOption]>,
}
