//! Pixel formats understood by the encoder handlers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// In-memory frame layout, named the way ffmpeg names it (`-pix_fmt`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    Yuv420p,
    Yuv420p10le,
    Yuv422p,
    Yuv422p10le,
    Yuv444p10le,
    Nv12,
    P010le,
}

impl PixelFormat {
    pub const ALL: [PixelFormat; 7] = [
        PixelFormat::Yuv420p,
        PixelFormat::Yuv420p10le,
        PixelFormat::Yuv422p,
        PixelFormat::Yuv422p10le,
        PixelFormat::Yuv444p10le,
        PixelFormat::Nv12,
        PixelFormat::P010le,
    ];

    pub fn ffmpeg_name(self) -> &'static str {
        match self {
            PixelFormat::Yuv420p => "yuv420p",
            PixelFormat::Yuv420p10le => "yuv420p10le",
            PixelFormat::Yuv422p => "yuv422p",
            PixelFormat::Yuv422p10le => "yuv422p10le",
            PixelFormat::Yuv444p10le => "yuv444p10le",
            PixelFormat::Nv12 => "nv12",
            PixelFormat::P010le => "p010le",
        }
    }

    pub fn bit_depth(self) -> u8 {
        match self {
            PixelFormat::Yuv420p | PixelFormat::Yuv422p | PixelFormat::Nv12 => 8,
            PixelFormat::Yuv420p10le
            | PixelFormat::Yuv422p10le
            | PixelFormat::Yuv444p10le
            | PixelFormat::P010le => 10,
        }
    }

    /// Chroma subsampling as the usual J:a:b notation
    pub fn chroma(self) -> &'static str {
        match self {
            PixelFormat::Yuv420p
            | PixelFormat::Yuv420p10le
            | PixelFormat::Nv12
            | PixelFormat::P010le => "4:2:0",
            PixelFormat::Yuv422p | PixelFormat::Yuv422p10le => "4:2:2",
            PixelFormat::Yuv444p10le => "4:4:4",
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ffmpeg_name())
    }
}

impl FromStr for PixelFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PixelFormat::ALL
            .iter()
            .copied()
            .find(|fmt| fmt.ffmpeg_name() == s)
            .ok_or_else(|| format!("Unknown pixel format: {}", s))
    }
}
