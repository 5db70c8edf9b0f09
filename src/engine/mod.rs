// Encoder handler engine - independent of UI rendering

pub mod codec;
pub mod dnxhr;
pub mod handlers;
pub mod lifecycle;
pub mod pix_fmt;
pub mod settings;

pub use codec::{Codec, EncodingContext, OptionError, find_encoder};
pub use handlers::{CodecInfo, DnxhdHandler, Handler, handler_for};
pub use lifecycle::{EncoderSession, RegisteredEncoder};
pub use pix_fmt::PixelFormat;
pub use settings::{SettingsBag, Value};
