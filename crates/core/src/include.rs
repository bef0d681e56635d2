//! Response shape selection from the `include` query flag.
//!
//! Every read and write endpoint renders related records either by
//! reference (the related record's key) or fully nested. The choice is made
//! once per request from the raw `include` value and then passed around as a
//! plain [`ResponseShape`].

use serde::Serialize;

/// Values of `include` that request flat rendering (compared case-insensitively).
pub const FALSY_VALUES: &[&str] = &["", "0", "false", "no", "off"];

/// How related records are rendered in a response body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseShape {
    /// Related records appear as their identifying key only.
    #[default]
    Flat,
    /// Related records appear as their full body.
    Nested,
}

impl ResponseShape {
    /// Parse the raw `include` query value.
    ///
    /// A missing value or one of [`FALSY_VALUES`] selects [`ResponseShape::Flat`];
    /// anything else selects [`ResponseShape::Nested`].
    pub fn from_include(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if is_truthy(value) => Self::Nested,
            _ => Self::Flat,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    !FALSY_VALUES
        .iter()
        .any(|falsy| value.eq_ignore_ascii_case(falsy))
}
