//! Encoders known to the handler layer, with their declared private options.

use super::options::CodecOption;
use super::Codec;

// libavcodec/dnxhdenc.c declares the DNxHR profiles highest tier first,
// with the legacy DNxHD profile as the option default.
pub static DNXHD_OPTIONS: [CodecOption; 9] = [
    CodecOption::boolean("nitris_compat", "encode with Avid Nitris compatibility", false),
    CodecOption::int("ibias", "intra quant bias", 0, 0, 1000, None),
    CodecOption::int("profile", "", 0, 0, 5, Some("profile")),
    CodecOption::constant("dnxhr_444", "", 5, "profile"),
    CodecOption::constant("dnxhr_hqx", "", 4, "profile"),
    CodecOption::constant("dnxhr_hq", "", 3, "profile"),
    CodecOption::constant("dnxhr_sq", "", 2, "profile"),
    CodecOption::constant("dnxhr_lb", "", 1, "profile"),
    CodecOption::constant("dnxhd", "", 0, "profile"),
];

pub static DNXHD: Codec = Codec {
    name: "dnxhd",
    long_name: "VC3/DNxHD",
    priv_class: Some(&DNXHD_OPTIONS),
};

pub static RAWVIDEO: Codec = Codec {
    name: "rawvideo",
    long_name: "raw video",
    priv_class: None,
};

pub static ENCODERS: [&Codec; 2] = [&DNXHD, &RAWVIDEO];

pub fn find_encoder(name: &str) -> Option<&'static Codec> {
    ENCODERS.iter().copied().find(|codec| codec.name == name)
}
