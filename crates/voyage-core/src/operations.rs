//! Common input operations shared by every interface.
//!
//! Small validation helpers used when turning raw parameters into validated
//! requests, so that the CLI and the MCP server reject bad input the same way.

use std::str::FromStr;

use crate::{ItineraryError, Result};

/// Validates a title and returns it trimmed.
///
/// # Errors
///
/// * `ItineraryError::InvalidInput` - When the title is empty or whitespace
///
/// # Examples
///
/// ```rust
/// # use voyage_core::operations::validate_title;
/// assert_eq!(validate_title("  Paris  ").unwrap(), "Paris");
/// assert!(validate_title("   ").is_err());
/// ```
pub fn validate_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ItineraryError::invalid_input("title").with_reason("Title cannot be empty"));
    }
    Ok(trimmed.to_string())
}

/// Parses an optional string field into an enumeration.
///
/// `None` passes through; a present but unknown value is an input error
/// naming the field.
///
/// # Examples
///
/// ```rust
/// # use voyage_core::{operations::parse_optional, models::Category};
/// let category = parse_optional::<Category>("category", Some("hotel")).unwrap();
/// assert_eq!(category, Some(Category::Accommodation));
///
/// let missing = parse_optional::<Category>("category", None).unwrap();
/// assert_eq!(missing, None);
/// ```
pub fn parse_optional<T>(field: &str, value: Option<&str>) -> Result<Option<T>>
where
    T: FromStr<Err = String>,
{
    value
        .map(|raw| {
            T::from_str(raw).map_err(|reason| ItineraryError::invalid_input(field).with_reason(reason))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, TripStatus};

    #[test]
    fn test_validate_title_trims() {
        assert_eq!(validate_title("\tDay trip\n").unwrap(), "Day trip");
    }

    #[test]
    fn test_validate_title_rejects_blank() {
        match validate_title("").unwrap_err() {
            ItineraryError::InvalidInput { field, reason } => {
                assert_eq!(field, "title");
                assert!(reason.contains("cannot be empty"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_optional_valid_priority() {
        let priority = parse_optional::<Priority>("priority", Some("HIGH")).unwrap();
        assert_eq!(priority, Some(Priority::High));
    }

    #[test]
    fn test_parse_optional_invalid_value_names_field() {
        let result = parse_optional::<TripStatus>("status", Some("cancelled"));

        match result.unwrap_err() {
            ItineraryError::InvalidInput { field, reason } => {
                assert_eq!(field, "status");
                assert!(reason.contains("cancelled"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }
}
