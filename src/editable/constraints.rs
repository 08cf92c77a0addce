//! Input constraints for the reference text editor control.
//!
//! Constraints define which values an input considers valid. `required` is
//! not part of the constraints: it is a field property pushed onto the input
//! by the field controller.

use serde::{Deserialize, Serialize};

/// Character class an input accepts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    /// Any character
    #[default]
    Any,
    /// ASCII digits only
    Digits,
    /// Alphanumeric characters only
    Alphanumeric,
    /// Anything but whitespace
    NoWhitespace,
}

impl CharClass {
    pub fn allows(&self, ch: char) -> bool {
        match self {
            CharClass::Any => true,
            CharClass::Digits => ch.is_ascii_digit(),
            CharClass::Alphanumeric => ch.is_alphanumeric(),
            CharClass::NoWhitespace => !ch.is_whitespace(),
        }
    }
}

/// Constraints that limit which values an input accepts as valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConstraints {
    /// Minimum length in characters (None = no minimum)
    pub min_length: Option<usize>,

    /// Maximum length in characters (None = unlimited)
    pub max_length: Option<usize>,

    /// Accepted characters
    pub char_filter: CharClass,
}

/// Outcome of validating a value against constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidityState {
    Valid,
    /// Required but empty
    ValueMissing,
    TooShort { min: usize },
    TooLong { max: usize },
    /// First character rejected by the char filter
    InvalidChar(char),
}

impl ValidityState {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidityState::Valid)
    }

    /// Human-readable validation message (empty when valid)
    pub fn message(&self) -> String {
        match self {
            ValidityState::Valid => String::new(),
            ValidityState::ValueMissing => "Please fill out this field.".to_string(),
            ValidityState::TooShort { min } => {
                format!("Please use at least {} characters.", min)
            }
            ValidityState::TooLong { max } => {
                format!("Please use no more than {} characters.", max)
            }
            ValidityState::InvalidChar(ch) => format!("Character '{}' is not allowed.", ch),
        }
    }
}

impl InputConstraints {
    /// Unconstrained single-line input
    pub fn single_line() -> Self {
        Self::default()
    }

    /// Digits only, optionally bounded in length
    pub fn numeric(max_length: Option<usize>) -> Self {
        Self {
            min_length: None,
            max_length,
            char_filter: CharClass::Digits,
        }
    }

    /// Check if a character passes the filter
    pub fn is_char_allowed(&self, ch: char) -> bool {
        self.char_filter.allows(ch)
    }

    /// Validate `value`. An empty value is only invalid when `required`;
    /// length and character checks apply to non-empty values.
    pub fn validate(&self, value: &str, required: bool) -> ValidityState {
        if value.is_empty() {
            return if required {
                ValidityState::ValueMissing
            } else {
                ValidityState::Valid
            };
        }

        if let Some(ch) = value.chars().find(|&ch| !self.is_char_allowed(ch)) {
            return ValidityState::InvalidChar(ch);
        }

        let len = value.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return ValidityState::TooShort { min };
            }
        }
        if let Some(max) = self.max_length {
            if len > max {
                return ValidityState::TooLong { max };
            }
        }

        ValidityState::Valid
    }
}
