//! Avid DNxHR profile catalog.
//!
//! Each DNxHR profile dictates the pixel format the encoder accepts. The
//! legacy DNxHD profile is deliberately absent: it only works for a fixed set
//! of frame size and frame rate combinations and is hidden from the UI.

use crate::engine::pix_fmt::PixelFormat;

/// Settings key holding the selected profile identifier
pub const S_CODEC_DNXHR_PROFILE: &str = "Codec.DNxHR.Profile";

/// Name of the encoder's private option that selects the profile
pub const PROFILE_OPTION: &str = "profile";

pub const DEFAULT_PROFILE: &str = "dnxhr_sq";

/// Still settable by editing settings directly, never offered in the UI
pub const LEGACY_PROFILE: &str = "dnxhd";

/// Used for sq/lb/hq and for any profile a newer libavcodec adds
pub const FALLBACK_PIX_FMT: PixelFormat = PixelFormat::Yuv422p;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileEntry {
    pub id: &'static str,
    pub pix_fmt: PixelFormat,
}

pub static PROFILES: [ProfileEntry; 5] = [
    ProfileEntry {
        id: "dnxhr_lb",
        pix_fmt: PixelFormat::Yuv422p,
    },
    ProfileEntry {
        id: "dnxhr_sq",
        pix_fmt: PixelFormat::Yuv422p,
    },
    ProfileEntry {
        id: "dnxhr_hq",
        pix_fmt: PixelFormat::Yuv422p,
    },
    ProfileEntry {
        id: "dnxhr_hqx",
        pix_fmt: PixelFormat::Yuv422p10le,
    },
    ProfileEntry {
        id: "dnxhr_444",
        pix_fmt: PixelFormat::Yuv444p10le,
    },
];

pub fn find_profile(id: &str) -> Option<&'static ProfileEntry> {
    PROFILES.iter().find(|entry| entry.id == id)
}

/// Pixel format required by `id`, or the fallback for unknown profiles
pub fn pix_fmt_for_profile(id: &str) -> PixelFormat {
    find_profile(id)
        .map(|entry| entry.pix_fmt)
        .unwrap_or(FALLBACK_PIX_FMT)
}

/// Localization key for a profile's display label
pub fn profile_label_key(id: &str) -> String {
    format!("{}.{}", S_CODEC_DNXHR_PROFILE, id)
}
