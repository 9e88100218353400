// src/tests/templater_tests.rs
// … ≤ ≥ ≠ ≟

//! tests for `templater.rs`: rendering scenarios, strip, configuration,
//! and the single-pass replacement scanner

#![allow(non_snake_case)]

use crate::common::TemplaterError;
use crate::data::datetime::{DateInput, DateTimeL};
use crate::data::token::{token_catalog_dt, Token};
use crate::templater::templater::{
    fuzzy_equals,
    render,
    replace_once,
    strip,
    TagConfig,
    TagConfigUpdate,
    Templater,
    TAG_CLOSE_DEFAULT,
    TAG_OPEN_DEFAULT,
};
use crate::tests::common::{dt_1992_04_06, dt_2001_11_17};

use ::test_case::test_case;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// render `template` against the snapshot with default tags
fn render_dt(
    template: &str,
    dt: DateTimeL,
) -> String {
    Templater::new()
        .render(template, &DateInput::DateTime(dt))
        .unwrap()
}

#[test]
fn test_render_general() {
    assert_eq!(
        render_dt("It is {h:mm A} on the {Do} day of {MMMM YYYY}", dt_2001_11_17()),
        "It is 1:37 PM on the 17th day of November 2001",
    );
}

#[test_case("Month formats: {MMMM MMM MM Mo M}", "Month formats: April Apr 04 4th 4"; "month")]
#[test_case("Day of Year formats: {DDDD DDDo DDD}", "Day of Year formats: 097 97th 97"; "day of year")]
#[test_case("Day of Month formats: {DD Do D}", "Day of Month formats: 06 6th 6"; "day of month")]
#[test_case("Day of Week formats: {dddd ddd dd do d}", "Day of Week formats: Monday Mon Mo 1st 1"; "day of week")]
#[test_case("Hour formats: {kk k hh h HH H}", "Hour formats: 24 24 11 11 23 23"; "hour")]
#[test_case("Minute formats: {mm m}", "Minute formats: 48 48"; "minute")]
#[test_case("Second formats: {ss s}", "Second formats: 07 7"; "second")]
fn test_render_families_1992(template: &str, expect: &str) {
    assert_eq!(render_dt(template, dt_1992_04_06()), expect);
}

#[test_case("Quarter formats: {Qo Q}", "Quarter formats: 4th 4"; "quarter")]
#[test_case("Week of Year formats: {ww wo w}", "Week of Year formats: 47 47th 47"; "week of year")]
#[test_case("Year formats: {YYYY YY}", "Year formats: 2001 01"; "year")]
#[test_case("AM/PM formats: {A a}", "AM/PM formats: PM pm"; "meridiem")]
fn test_render_families_2001(template: &str, expect: &str) {
    assert_eq!(render_dt(template, dt_2001_11_17()), expect);
}

/// every catalog code substitutes to its own value when rendered alone
#[test]
fn test_render_each_code_alone() {
    let dt: DateTimeL = dt_1992_04_06();
    let templater = Templater::new();
    for token in token_catalog_dt(&dt).iter() {
        let template: String = format!("{{{}}}", token.code);
        let rendered: String = templater
            .render(&template, &DateInput::DateTime(dt))
            .unwrap();
        assert_eq!(rendered, token.value.to_string(), "code {:?}", token.code);
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn test_render_longest_match_wins() {
    // `{MMMM}` is the month name, never four single-`M` substitutions
    assert_eq!(render_dt("{MMMM}", dt_1992_04_06()), "April");
    assert_ne!(render_dt("{MMMM}", dt_1992_04_06()), "4444");
}

#[test]
fn test_render_substituted_values_not_rescanned() {
    // `D` for 1992-04-06 is `6`; the emitted `6` must not match further
    // codes, and a five-`M` run is `MMMM` then `M`
    assert_eq!(render_dt("{MMMMM}", dt_1992_04_06()), "April4");
}

#[test]
fn test_render_literal_text_inside_placeholder_kept() {
    assert_eq!(render_dt("{h:mm A}", dt_1992_04_06()), "11:48 PM");
}

#[test]
fn test_render_no_placeholder_unchanged() {
    assert_eq!(render_dt("MMMM plain text 42", dt_1992_04_06()), "MMMM plain text 42");
}

#[test]
fn test_render_unclosed_tag_left_literal() {
    assert_eq!(render_dt("It is {h:mm", dt_1992_04_06()), "It is {h:mm");
}

#[test]
fn test_render_unclosed_after_closed_region() {
    assert_eq!(render_dt("{D} then {dangling", dt_1992_04_06()), "6 then {dangling");
}

#[test]
fn test_render_empty_placeholder_removed() {
    assert_eq!(render_dt("a{}b", dt_1992_04_06()), "ab");
}

#[test]
fn test_render_multiple_regions_left_to_right() {
    assert_eq!(render_dt("{D}-{M}-{YYYY}", dt_1992_04_06()), "6-4-1992");
}

#[test]
fn test_render_text_outside_regions_untouched() {
    // code-looking text outside a region is not substituted
    assert_eq!(render_dt("MMMM {D} ss", dt_1992_04_06()), "MMMM 6 ss");
}

#[test]
fn test_render_rejects_bad_date_string() {
    match Templater::new().render("{D}", &DateInput::Str("not a date")) {
        Err(TemplaterError::DateInput(input)) => assert_eq!(input, "not a date"),
        result => panic!("expected TemplaterError::DateInput, got {:?}", result),
    }
}

#[test]
fn test_replace_once_scanner() {
    let tokens: Vec<Token> = token_catalog_dt(&dt_1992_04_06());
    assert_eq!(replace_once("h:mm A", &tokens), "11:48 PM");
    assert_eq!(replace_once("Do D", &tokens), "6th 6");
    assert_eq!(replace_once("", &tokens), "");
    // characters belonging to no code pass through verbatim
    assert_eq!(replace_once("::xyz 123 --", &tokens), "::xyz 123 --");
}

#[test]
fn test_replace_once_single_letter_codes_match_inside_words() {
    // every occurrence inside a region is a candidate, even mid-word:
    // `d`, `s`, `h` are codes (1, 7, 11 for this snapshot)
    let tokens: Vec<Token> = token_catalog_dt(&dt_1992_04_06());
    assert_eq!(replace_once("no codes here!", &tokens), "no co1e7 11ere!");
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn test_strip() {
    let templater = Templater::new();
    assert_eq!(
        templater.strip("It is {h:mm A} on the {Do} day of {MMMM YYYY}"),
        "It is  on the  day of ",
    );
}

#[test]
fn test_strip_idempotent() {
    let templater = Templater::new();
    for template in [
        "It is {h:mm A} on the {Do} day of {MMMM YYYY}",
        "no placeholders",
        "{}{}{}",
        "dangling {open",
        "",
    ] {
        let once: String = templater.strip(template);
        assert_eq!(templater.strip(&once), once, "template {:?}", template);
    }
}

#[test]
fn test_strip_no_date_needed_is_pure() {
    let templater = Templater::new();
    assert_eq!(templater.strip("a {D} b"), templater.strip("a {D} b"));
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn test_TagConfig_default() {
    let config: TagConfig = TagConfig::default();
    assert_eq!(config.open_tag, TAG_OPEN_DEFAULT);
    assert_eq!(config.close_tag, TAG_CLOSE_DEFAULT);
}

#[test]
fn test_set_config_square_brackets() {
    let mut templater = Templater::new();
    templater
        .set_config(TagConfigUpdate {
            open_tag: Some(String::from(r"\[")),
            close_tag: Some(String::from(r"\]")),
        })
        .unwrap();
    let rendered: String = templater
        .render(
            "It is [h:mm A] on the [Do] day of [MMMM YYYY]",
            &DateInput::DateTime(dt_2001_11_17()),
        )
        .unwrap();
    assert_eq!(rendered, "It is 1:37 PM on the 17th day of November 2001");
    // the old tags are no longer recognized
    assert_eq!(
        templater
            .render("{D}", &DateInput::DateTime(dt_2001_11_17()))
            .unwrap(),
        "{D}",
    );
}

#[test]
fn test_set_config_partial_merge() {
    let mut templater = Templater::new();
    let config: &TagConfig = templater
        .set_config(TagConfigUpdate {
            open_tag: Some(String::from(r"<")),
            close_tag: None,
        })
        .unwrap();
    assert_eq!(config.open_tag, "<");
    assert_eq!(config.close_tag, TAG_CLOSE_DEFAULT);
    assert_eq!(
        templater
            .render("<D} and {D}", &DateInput::DateTime(dt_1992_04_06()))
            .unwrap(),
        "6 and {D}",
    );
}

#[test]
fn test_set_config_persists_across_calls() {
    let mut templater = Templater::new();
    templater
        .set_config(TagConfigUpdate {
            open_tag: Some(String::from(r"\[")),
            close_tag: Some(String::from(r"\]")),
        })
        .unwrap();
    assert_eq!(templater.strip("a [D] b"), "a  b");
    assert_eq!(templater.strip("c [ss] d"), "c  d");
    assert_eq!(templater.config().open_tag, r"\[");
}

#[test]
fn test_set_config_invalid_fragment_fails_eagerly_and_keeps_prior() {
    let mut templater = Templater::new();
    match templater.set_config(TagConfigUpdate {
        open_tag: Some(String::from(r"(unclosed")),
        close_tag: None,
    }) {
        Err(TemplaterError::TagPattern(_)) => {}
        result => panic!("expected TemplaterError::TagPattern, got {:?}", result),
    }
    // prior configuration still in effect
    assert_eq!(templater.config().open_tag, TAG_OPEN_DEFAULT);
    assert_eq!(templater.strip("a {D} b"), "a  b");
}

#[test]
fn test_with_config_invalid_fragment_fails() {
    // a bare `*` has no repetition target; the pattern cannot compile
    let config = TagConfig {
        open_tag: String::from("*"),
        close_tag: String::from(TAG_CLOSE_DEFAULT),
    };
    match Templater::with_config(config) {
        Err(TemplaterError::TagPattern(_)) => {}
        result => panic!("expected TemplaterError::TagPattern, got {:?}", result),
    }
}

#[test]
fn test_with_config_valid() {
    let templater = Templater::with_config(TagConfig {
        open_tag: String::from("<<"),
        close_tag: String::from(">>"),
    })
    .unwrap();
    assert_eq!(
        templater
            .render("<<D>> {D}", &DateInput::DateTime(dt_1992_04_06()))
            .unwrap(),
        "6 {D}",
    );
}

#[test]
fn test_templater_instances_are_independent() {
    let mut bracketed = Templater::new();
    bracketed
        .set_config(TagConfigUpdate {
            open_tag: Some(String::from(r"\[")),
            close_tag: Some(String::from(r"\]")),
        })
        .unwrap();
    let plain = Templater::new();
    // reconfiguring one instance leaves the other untouched
    assert_eq!(bracketed.strip("a [D] b {D} c"), "a  b {D} c");
    assert_eq!(plain.strip("a [D] b {D} c"), "a [D] b  c");
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn test_free_functions_default_tags() {
    assert_eq!(
        render("{MMMM}", &DateInput::DateTime(dt_1992_04_06())).unwrap(),
        "April",
    );
    assert_eq!(strip("a {D} b"), "a  b");
    assert!(fuzzy_equals("a {D} b", "a 6 b"));
}

#[test]
fn test_render_now_round_trips() {
    let template: &str = "It is {h:mm A} on the {Do} day of {MMMM YYYY}";
    let rendered: String = render(template, &DateInput::Now).unwrap();
    assert!(fuzzy_equals(template, &rendered));
}
