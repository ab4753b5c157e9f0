//! Integration tests for the case conversion family

use pretty_assertions::assert_eq;
use stdkit::case;

#[test]
fn test_underscore_to_camel() {
    assert_eq!(case::to_camel_case("first_name", false), "firstName");
    assert_eq!(case::to_camel_case("first_name", true), "FirstName");
}

#[test]
fn test_hyphen_to_camel() {
    assert_eq!(case::camel_case("first-second", false), "firstSecond");
    assert_eq!(case::camel_case("-first-second-", true), "FirstSecond");
}

#[test]
fn test_camel_to_snake() {
    assert_eq!(case::to_snake_case("CMSCategories"), "cms_categories");
    assert_eq!(case::to_snake_case("RangePrice"), "range_price");
}

#[test]
fn test_name_change_round_trip() {
    assert_eq!(case::name_change("first_name", true), "firstName");
    assert_eq!(case::name_change("firstName", false), "first_name");
}

#[test]
fn test_snake_algorithms_diverge_on_acronyms() {
    // the two snake-case operations use different boundary rules and agree
    // only when no consecutive capitals are involved
    assert_eq!(case::to_snake_case("firstName"), "first_name");
    assert_eq!(case::name_change("firstName", false), "first_name");

    assert_eq!(case::to_snake_case("ABCName"), "abc_name");
    assert_eq!(case::name_change("ABCName", false), "abcname");
}

#[test]
fn test_lower_idempotent_upper_first_stable() {
    for s in ["Hello World", "ÉTÉ", "mIxEd", ""] {
        let once = case::to_lower(s);
        assert_eq!(case::to_lower(&once), once);

        let first = case::upper_first(s);
        assert_eq!(case::upper_first(&first), first);
    }
}

#[test]
fn test_nl2br_handles_all_line_endings() {
    // \r\n is consumed as one pair, never substituted twice
    assert_eq!(case::nl2br("a\r\nb\rc\nd"), "a<br />b<br />c<br />d");
}

#[test]
fn test_case_functions_are_total() {
    // no input panics or errors, including non-identifier text
    for s in ["", "   ", "123", "汉字_test", "a-b_c D"] {
        let _ = case::to_camel_case(s, true);
        let _ = case::camel_case(s, true);
        let _ = case::to_snake_case(s);
        let _ = case::name_change(s, false);
        let _ = case::title_case(s);
        let _ = case::nl2br(s);
    }
}
