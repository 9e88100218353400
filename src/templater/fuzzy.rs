// src/templater/fuzzy.rs

//! Character-level common-subsequence extraction backing
//! [`Templater::fuzzy_equals`].
//!
//! [`Templater::fuzzy_equals`]: crate::templater::templater::Templater::fuzzy_equals

use ::similar::{ChangeTag, TextDiff};
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Concatenation, in order, of the character segments common to `a` and
/// `b` under a character-level Myers diff (segments tagged neither
/// inserted nor deleted).
pub fn common_chars(
    a: &str,
    b: &str,
) -> String {
    defñ!("({:?}, {:?})", a, b);

    TextDiff::from_chars(a, b)
        .iter_all_changes()
        .filter(|change| change.tag() == ChangeTag::Equal)
        .map(|change| change.value())
        .collect()
}
