use serde::{Deserialize, Serialize};

use stockmgr_core::{DomainError, DomainResult, ValueObject};

/// User-facing product key.
///
/// Stored as typed (trimmed); comparisons are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCode(String);

impl ProductCode {
    pub fn new(raw: &str) -> DomainResult<Self> {
        let code = raw.trim();
        if code.is_empty() {
            return Err(DomainError::validation("product code cannot be empty"));
        }
        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive exact match (surrounding whitespace in `other` ignored).
    pub fn matches(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.trim().to_lowercase()
    }
}

impl ValueObject for ProductCode {}

impl core::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
