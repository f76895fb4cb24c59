//! Error handling utilities for MCP server

use rmcp::ErrorData;
use voyage_core::ItineraryError;

/// Converts planner errors to MCP errors.
///
/// Bad input and unknown records are the caller's to fix, so they come back
/// as invalid parameters; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &ItineraryError) -> ErrorData {
    let message = format!("{message}: {error}");
    match error {
        ItineraryError::InvalidInput { .. }
        | ItineraryError::TripNotFound { .. }
        | ItineraryError::ItemNotFound { .. }
        | ItineraryError::IdeaNotFound { .. } => ErrorData::invalid_params(message, None),
        _ => ErrorData::internal_error(message, None),
    }
}
