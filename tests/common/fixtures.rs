//! Codec fixtures with hand-written option tables.

use ffhandlers::engine::codec::{Codec, CodecOption};

/// Three tiers declared highest first, like libavcodec does
pub static TIERED_OPTIONS: [CodecOption; 4] = [
    CodecOption::int("profile", "", 0, 0, 2, Some("profile")),
    CodecOption::constant("tier_a", "", 2, "profile"),
    CodecOption::constant("tier_b", "", 1, "profile"),
    CodecOption::constant("tier_c", "", 0, "profile"),
];

pub static TIERED: Codec = Codec {
    name: "tiered",
    long_name: "Tiered test codec",
    priv_class: Some(&TIERED_OPTIONS),
};

/// Private options exist but none of them is a profile
pub static NO_PROFILE_OPTIONS: [CodecOption; 1] =
    [CodecOption::boolean("fast", "Fast mode", false)];

pub static NO_PROFILE: Codec = Codec {
    name: "noprofile",
    long_name: "Codec without profiles",
    priv_class: Some(&NO_PROFILE_OPTIONS),
};

pub static OPAQUE: Codec = Codec {
    name: "opaque",
    long_name: "Codec without private options",
    priv_class: None,
};

/// Build a codec whose profile option enumerates `names` in the given order.
/// Leaks the tables, which is fine for tests.
pub fn codec_with_profiles(names: &[String]) -> Codec {
    let max = names.len().saturating_sub(1) as i64;
    let mut class = vec![CodecOption::int("profile", "", 0, 0, max, Some("profile"))];
    for (i, name) in names.iter().enumerate() {
        let name: &'static str = Box::leak(name.clone().into_boxed_str());
        class.push(CodecOption::constant(name, "", (names.len() - 1 - i) as i64, "profile"));
    }

    Codec {
        name: "generated",
        long_name: "Generated test codec",
        priv_class: Some(Box::leak(class.into_boxed_slice())),
    }
}
