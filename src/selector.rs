//! The sentinel constants and the selector mapping codes to labels.
//!
//! The three recognized codes sit at the very top of the `i32` range so they
//! cannot collide with ordinary small values. Selection is a single `match`
//! with a catch-all arm; unmatched input is expected, not exceptional.

use crate::label::Label;

/// First sentinel code (`i32::MAX`).
pub const CASE_1: i32 = i32::MAX;

/// Second sentinel code (`i32::MAX - 1`).
pub const CASE_2: i32 = i32::MAX - 1;

/// Third sentinel code (`i32::MAX - 2`).
pub const CASE_3: i32 = i32::MAX - 2;

/// Maps a code to its label, if the code is one of the three sentinels.
///
/// # Examples
///
/// ```
/// use caselabel::{select, Label, CASE_2};
///
/// assert_eq!(select(CASE_2), Some(Label::Case2));
/// assert_eq!(select(0), None);
/// ```
#[must_use]
pub const fn select(code: i32) -> Option<Label> {
    match code {
        CASE_1 => Some(Label::Case1),
        CASE_2 => Some(Label::Case2),
        CASE_3 => Some(Label::Case3),
        _ => None,
    }
}

/// Maps a code to its label string, or the empty string for any other input.
///
/// Total over the `i32` domain, pure, and idempotent.
///
/// # Examples
///
/// ```
/// use caselabel::{select_label, CASE_1};
///
/// assert_eq!(select_label(CASE_1), "CASE_1");
/// assert_eq!(select_label(-1), "");
/// ```
#[must_use]
pub const fn select_label(code: i32) -> &'static str {
    match select(code) {
        Some(label) => label.as_str(),
        None => "",
    }
}

/// Invokes the selector with [`CASE_1`] and discards the result.
///
/// A smoke hook with no observable effect; it exists to exercise the
/// selection path with a fixed argument.
pub fn probe() {
    let _ = select_label(CASE_1);
}
