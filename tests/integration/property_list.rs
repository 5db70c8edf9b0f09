// Profile list ordering and filtering against hand-written option tables.

use crate::common::fixtures::{NO_PROFILE, OPAQUE, TIERED, codec_with_profiles};
use ffhandlers::engine::codec::{DNXHD, temporary_contexts_in_flight};
use ffhandlers::engine::dnxhr::S_CODEC_DNXHR_PROFILE;
use ffhandlers::engine::{DnxhdHandler, EncodingContext, Handler};
use ffhandlers::ui::Properties;

#[test]
fn enumeration_order_is_reversed() {
    let values: Vec<_> = DnxhdHandler
        .profile_choices(&TIERED, None)
        .into_iter()
        .map(|item| item.value)
        .collect();
    assert_eq!(values, vec!["tier_c", "tier_b", "tier_a"]);
}

#[test]
fn dnxhd_scenario_lists_five_profiles_lowest_first() {
    let mut props = Properties::new();
    DnxhdHandler.get_properties(&mut props, &DNXHD, None, false);

    let list = props.get(S_CODEC_DNXHR_PROFILE).unwrap();
    assert_eq!(
        list.values(),
        vec!["dnxhr_lb", "dnxhr_sq", "dnxhr_hq", "dnxhr_hqx", "dnxhr_444"]
    );
    assert!(!list.values().contains(&"dnxhd"));
}

#[test]
fn legacy_profile_hidden_wherever_it_is_declared() {
    let names: Vec<String> = ["dnxhd", "hi", "mid", "dnxhd", "lo"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let codec = codec_with_profiles(&names);

    let values: Vec<_> = DnxhdHandler
        .profile_choices(&codec, None)
        .into_iter()
        .map(|item| item.value)
        .collect();
    assert_eq!(values, vec!["lo", "mid", "hi"]);
}

#[test]
fn untranslated_profiles_show_their_key() {
    let items = DnxhdHandler.profile_choices(&TIERED, None);
    assert_eq!(items[0].label, "Codec.DNxHR.Profile.tier_c");
}

#[test]
fn no_private_data_adds_no_control() {
    let mut props = Properties::new();
    DnxhdHandler.get_properties(&mut props, &OPAQUE, None, false);
    assert!(props.is_empty());
    assert!(DnxhdHandler.profile_choices(&OPAQUE, None).is_empty());
    assert_eq!(temporary_contexts_in_flight(), 0);
}

#[test]
fn private_data_without_profile_option_adds_empty_control() {
    let mut props = Properties::new();
    DnxhdHandler.get_properties(&mut props, &NO_PROFILE, None, false);
    let list = props.get(S_CODEC_DNXHR_PROFILE).unwrap();
    assert!(list.is_empty());
}

#[test]
fn live_context_private_data_is_used() {
    let live = EncodingContext::alloc(&TIERED);
    let mut props = Properties::new();
    DnxhdHandler.get_properties(&mut props, &TIERED, Some(&live), false);
    assert_eq!(props.lists()[0].len(), 3);
    assert_eq!(temporary_contexts_in_flight(), 0);
}

#[test]
fn properties_are_rebuilt_on_every_request() {
    let mut first = Properties::new();
    let mut second = Properties::new();
    DnxhdHandler.get_properties(&mut first, &DNXHD, None, false);
    DnxhdHandler.get_properties(&mut second, &DNXHD, None, false);
    assert_eq!(
        first.get(S_CODEC_DNXHR_PROFILE).unwrap().items(),
        second.get(S_CODEC_DNXHR_PROFILE).unwrap().items()
    );

    // a second build into the same collection is refused rather than duplicated
    DnxhdHandler.get_properties(&mut first, &DNXHD, None, false);
    assert_eq!(first.lists().len(), 1);
}
