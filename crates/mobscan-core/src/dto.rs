use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidEntry {
    pub name: String,
    pub phone: String,
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    Invalid,
}

impl InvalidReason {
    pub fn as_str(self) -> &'static str {
        match self {
            InvalidReason::Invalid => "invalid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidEntry {
    pub name: String,
    pub phone: String,
    pub reason: InvalidReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationResult {
    Valid(ValidEntry),
    Invalid(InvalidEntry),
}

impl ValidationResult {
    pub fn phone(&self) -> &str {
        match self {
            ValidationResult::Valid(entry) => &entry.phone,
            ValidationResult::Invalid(entry) => &entry.phone,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }
}

/// Valid and invalid numbers of one extraction run, each in scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub valid: Vec<ValidEntry>,
    pub invalid: Vec<InvalidEntry>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.valid.is_empty() && self.invalid.is_empty()
    }

    pub fn total(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }

    pub fn push(&mut self, result: ValidationResult) {
        match result {
            ValidationResult::Valid(entry) => self.valid.push(entry),
            ValidationResult::Invalid(entry) => self.invalid.push(entry),
        }
    }

    /// Appends the results of a later shard.
    pub fn extend(&mut self, other: Extraction) {
        self.valid.extend(other.valid);
        self.invalid.extend(other.invalid);
    }
}
