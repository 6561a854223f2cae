//! The fixed labels the selector can produce.
//!
//! Each label stands for one sentinel code. The serialized form equals the
//! label string, so `Label` round-trips through both serde and `FromStr`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LabelError;
use crate::selector::{CASE_1, CASE_2, CASE_3};

/// A label recognized by the selector.
///
/// # Examples
///
/// ```
/// use caselabel::Label;
///
/// assert_eq!(Label::Case1.as_str(), "CASE_1");
/// assert_eq!(Label::Case3.code(), i32::MAX - 2);
/// assert_eq!("CASE_2".parse::<Label>(), Ok(Label::Case2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// Label for [`CASE_1`].
    #[serde(rename = "CASE_1")]
    Case1,
    /// Label for [`CASE_2`].
    #[serde(rename = "CASE_2")]
    Case2,
    /// Label for [`CASE_3`].
    #[serde(rename = "CASE_3")]
    Case3,
}

impl Label {
    /// Returns the fixed label string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Case1 => "CASE_1",
            Self::Case2 => "CASE_2",
            Self::Case3 => "CASE_3",
        }
    }

    /// Returns the sentinel code this label stands for.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Case1 => CASE_1,
            Self::Case2 => CASE_2,
            Self::Case3 => CASE_3,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CASE_1" => Ok(Self::Case1),
            "CASE_2" => Ok(Self::Case2),
            "CASE_3" => Ok(Self::Case3),
            other => Err(LabelError::UnknownLabel {
                name: other.to_string(),
            }),
        }
    }
}
