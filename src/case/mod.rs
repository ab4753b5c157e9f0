//! String case conversion helpers
//!
//! All functions are total over `&str`: they never fail and never allocate
//! more than one output string. Case folding is full Unicode and
//! locale-independent (`str::to_lowercase` / `str::to_uppercase`), not
//! byte-wise ASCII folding. Word-boundary detection in the camel/snake
//! converters is ASCII on purpose: identifiers are the intended input.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Underscore run followed by a lowercase letter, the camel-case shift point
static UNDERSCORE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+([a-z])").unwrap());

/// Start of a capitalized word: a capital directly followed by a lowercase.
/// A capital followed by another capital does NOT match, so acronym runs
/// like `CMS` stay glued to the word they prefix.
static WORD_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([A-Z][a-z])").unwrap());

/// Lowercase the whole string, full Unicode case folding.
pub fn to_lower(s: &str) -> String {
    s.to_lowercase()
}

/// Uppercase the whole string, full Unicode case folding.
pub fn to_upper(s: &str) -> String {
    s.to_uppercase()
}

/// Uppercase only the first character, leaving the remainder untouched.
///
/// Operates on the first Unicode scalar, not the first byte; uppercasing
/// may expand it to multiple characters (e.g. `ß` -> `SS`).
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase only the first character, leaving the remainder untouched.
fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the string, then uppercase the first character of every
/// whitespace-separated word.
pub fn title_case(s: &str) -> String {
    let lowered = to_lower(s);
    let mut out = String::with_capacity(lowered.len());
    let mut at_word_start = true;

    for c in lowered.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Translate an underscored string into camel case (`first_name` -> `firstName`).
///
/// The whole string is lowercased first, then each run of one or more
/// underscores followed by a lowercase letter collapses into that letter
/// uppercased (`a__b` and `a_b` both become `aB`). A leading underscore run
/// is treated the same way: `_first_name` -> `FirstName`.
pub fn to_camel_case(s: &str, upper_first_char: bool) -> String {
    let mut lowered = to_lower(s);
    if upper_first_char {
        lowered = upper_first(&lowered);
    }

    UNDERSCORE_RUN
        .replace_all(&lowered, |caps: &Captures<'_>| caps[1].to_uppercase())
        .into_owned()
}

/// Camel-case a hyphenated name (`first-second` -> `firstSecond`).
///
/// Distinct from [`to_camel_case`]: this operates on hyphens, not
/// underscores. Leading/trailing `-` and `_` are trimmed; a string without
/// hyphens passes through otherwise unchanged.
pub fn camel_case(name: &str, upper_first_char: bool) -> String {
    let name = name.trim_matches(|c| c == '-' || c == '_');

    let joined = if name.contains('-') {
        let worded = name
            .replace('-', " ")
            .split(' ')
            .map(upper_first)
            .collect::<Vec<_>>()
            .join(" ");
        lower_first(&worded).replace(' ', "")
    } else {
        name.to_string()
    };

    if upper_first_char {
        upper_first(&joined)
    } else {
        joined
    }
}

/// Transform a CamelCase string into `underscore_case` with the default
/// `_` separator. See [`to_snake_case_with`].
pub fn to_snake_case(s: &str) -> String {
    to_snake_case_with(s, '_')
}

/// Transform a CamelCase string into separator-delimited lowercase.
///
/// A separator is inserted before each capital-followed-by-lowercase pair,
/// so acronym runs collapse into one word:
/// `CMSCategories` -> `cms_categories`, `RangePrice` -> `range_price`.
pub fn to_snake_case_with(s: &str, sep: char) -> String {
    let marked = WORD_START.replace_all(s, |caps: &Captures<'_>| format!("{sep}{}", &caps[1]));
    to_lower(marked.trim_matches(sep))
}

/// Bidirectional snake <-> camel rename using `_` as the sole delimiter.
///
/// With `to_camel` the lowercased input is split on `_`, the first piece
/// kept as-is and each following piece upper-firsted. Without it, a `_` is
/// inserted at every lowercase-to-uppercase boundary and the result
/// lowercased.
///
/// The reverse branch uses a different boundary rule than
/// [`to_snake_case`]: it requires a lowercase on the left, so consecutive
/// capitals never split (`ABCName` -> `abcname` here, `abc_name` there).
/// Both rules are kept as distinct operations.
pub fn name_change(s: &str, to_camel: bool) -> String {
    let s = s.trim();

    if to_camel {
        if !s.contains('_') {
            return s.to_string();
        }

        let lowered = to_lower(s);
        let mut pieces = lowered.split('_');
        let mut out = pieces.next().unwrap_or("").to_string();
        for piece in pieces {
            out.push_str(&upper_first(piece));
        }
        return out;
    }

    let mut marked = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for c in s.chars() {
        if prev_lower && c.is_ascii_uppercase() {
            marked.push('_');
        }
        prev_lower = c.is_ascii_lowercase();
        marked.push(c);
    }
    to_lower(&marked)
}

/// Replace `\r\n`, `\r` and `\n` with `<br />`.
///
/// The three variants are replaced in that order, so a `\r\n` pair becomes
/// a single tag rather than two.
pub fn nl2br(s: &str) -> String {
    s.replace("\r\n", "<br />")
        .replace('\r', "<br />")
        .replace('\n', "<br />")
}
