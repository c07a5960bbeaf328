//! Core domain types for the example index.

use std::fmt;

use serde::Deserialize;

/// Minimum number of integer digits in a link component.
pub const MIN_LINK_DIGITS: usize = 2;

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// One `[title, description]` pair from `noc-data.json`.
///
/// Deserialized from a two-element JSON array, matching the data file layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, String)")]
pub struct Record {
    /// Display title, e.g. `Example 3.07`.
    pub title: String,
    /// Free-form description shown after the title.
    pub description: String,
}

impl Record {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl From<(String, String)> for Record {
    fn from((title, description): (String, String)) -> Self {
        Self { title, description }
    }
}

// ---------------------------------------------------------------------------
// LinkNumber
// ---------------------------------------------------------------------------

/// A chapter or example number as it appears in a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkNumber {
    /// A parsed integer. `digits` has no leading zeros and is `"0"` for zero.
    Number { negative: bool, digits: String },
    /// The component had no leading digits, or was missing entirely.
    NaN,
}

impl LinkNumber {
    /// Build from a run of ASCII decimal digits, dropping leading zeros.
    ///
    /// Returns [`LinkNumber::NaN`] for an empty run.
    pub fn from_digits(negative: bool, digits: &str) -> Self {
        if digits.is_empty() {
            return Self::NaN;
        }
        let trimmed = digits.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };
        Self::Number {
            negative,
            digits: digits.to_string(),
        }
    }
}

impl fmt::Display for LinkNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { negative, digits } => {
                if *negative {
                    f.write_str("-")?;
                }
                write!(f, "{digits:0>width$}", width = MIN_LINK_DIGITS)
            }
            Self::NaN => f.write_str("NaN"),
        }
    }
}

// ---------------------------------------------------------------------------
// Link
// ---------------------------------------------------------------------------

/// Relative path of an example page: `Ch<chapter>/Eg<example>.html`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub chapter: LinkNumber,
    pub example: LinkNumber,
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ch{}/Eg{}.html", self.chapter, self.example)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_reads_from_pair() {
        let record: Record =
            serde_json::from_str(r#"["Example 1.1", "Intro"]"#).expect("deserialize record");
        assert_eq!(record, Record::new("Example 1.1", "Intro"));
    }

    #[test]
    fn record_rejects_wrong_arity() {
        assert!(serde_json::from_str::<Record>(r#"["Example 1.1"]"#).is_err());
        assert!(serde_json::from_str::<Record>(r#"["Example 1.1", "a", "b"]"#).is_err());
        assert!(serde_json::from_str::<Record>(r#"["Example 1.1", 3]"#).is_err());
    }

    #[test]
    fn link_number_padding() {
        assert_eq!(LinkNumber::from_digits(false, "1").to_string(), "01");
        assert_eq!(LinkNumber::from_digits(false, "12").to_string(), "12");
        assert_eq!(LinkNumber::from_digits(false, "123").to_string(), "123");
        assert_eq!(LinkNumber::from_digits(false, "007").to_string(), "07");
        assert_eq!(LinkNumber::from_digits(false, "000").to_string(), "00");
        assert_eq!(LinkNumber::from_digits(true, "3").to_string(), "-03");
        assert_eq!(LinkNumber::NaN.to_string(), "NaN");
    }

    #[test]
    fn link_number_keeps_long_values_exact() {
        let huge = "123456789012345678901234567890";
        assert_eq!(LinkNumber::from_digits(false, huge).to_string(), huge);
    }

    #[test]
    fn empty_digits_are_nan() {
        assert_eq!(LinkNumber::from_digits(false, ""), LinkNumber::NaN);
        assert_eq!(LinkNumber::from_digits(true, ""), LinkNumber::NaN);
    }

    #[test]
    fn link_display() {
        let link = Link {
            chapter: LinkNumber::from_digits(false, "7"),
            example: LinkNumber::NaN,
        };
        assert_eq!(link.to_string(), "Ch07/EgNaN.html");
    }
}
