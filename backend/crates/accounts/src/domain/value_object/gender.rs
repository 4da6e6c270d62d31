//! Gender Value Object
//!
//! Free-form gender string, normalized to uppercase before storage
//! regardless of input case.

use kernel::error::app_error::{AppError, AppResult};

/// Gender value object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gender(String);

impl Gender {
    /// Create a new gender value, uppercasing the input
    pub fn new(gender: impl Into<String>) -> AppResult<Self> {
        let gender = gender.into().trim().to_uppercase();

        if gender.is_empty() {
            return Err(AppError::bad_request("Gender cannot be empty"));
        }

        Ok(Self(gender))
    }

    /// Create from database value (assumed already uppercase)
    pub fn from_db(gender: impl Into<String>) -> Self {
        Self(gender.into())
    }

    /// Get the gender as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_uppercased() {
        assert_eq!(Gender::new("male").unwrap().as_str(), "MALE");
        assert_eq!(Gender::new("Female").unwrap().as_str(), "FEMALE");
        assert_eq!(Gender::new("OTHER").unwrap().as_str(), "OTHER");
    }

    #[test]
    fn test_gender_trimmed() {
        assert_eq!(Gender::new("  male ").unwrap().as_str(), "MALE");
    }

    #[test]
    fn test_gender_empty() {
        assert!(Gender::new("").is_err());
        assert!(Gender::new("   ").is_err());
    }
}
