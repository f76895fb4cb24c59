//! MCP tool handlers implementation

use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use voyage_core::{display::CreateResult, params as core, Planner};

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper
// ============================================================================
//
// Core parameter types derive `JsonSchema` only behind the `schema` feature.
// The wrapper is transparent to serde and forwards the schema, so tool
// signatures can take core types directly.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type CreateTrip = McpParams<core::CreateTrip>;
pub type ItemCreate = McpParams<core::ItemCreate>;
pub type IdeaCreate = McpParams<core::IdeaCreate>;
pub type MoveItem = McpParams<core::MoveItem>;
pub type PromoteIdea = McpParams<core::PromoteIdea>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(output: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(output.into())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Planner,
}

impl McpHandlers {
    pub fn new(planner: Planner) -> Self {
        Self { planner }
    }

    pub async fn list_trips(&self) -> McpResult {
        debug!("list_trips");

        let trips = self
            .planner
            .list_trips()
            .await
            .map_err(|e| to_mcp_error("Failed to list trips", &e))?;

        text(format!("# Trips\n\n{trips}"))
    }

    pub async fn create_trip(&self, Parameters(params): Parameters<CreateTrip>) -> McpResult {
        debug!("create_trip: {params:?}");

        let trip = self
            .planner
            .create_trip(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create trip", &e))?;

        text(CreateResult::new(trip).to_string())
    }

    pub async fn show_trip(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_trip: {params:?}");

        let trip = self
            .planner
            .get_trip(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get trip", &e))?
            .ok_or_else(|| {
                ErrorData::invalid_params(
                    format!("Trip with ID {} not found", params.as_ref().id),
                    None,
                )
            })?;

        text(trip.to_string())
    }

    pub async fn add_item(&self, Parameters(params): Parameters<ItemCreate>) -> McpResult {
        debug!("add_item: {params:?}");

        let item = self
            .planner
            .add_item(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to add item", &e))?;

        text(CreateResult::new(item).to_string())
    }

    pub async fn add_idea(&self, Parameters(params): Parameters<IdeaCreate>) -> McpResult {
        debug!("add_idea: {params:?}");

        let idea = self
            .planner
            .add_idea(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to add idea", &e))?;

        text(CreateResult::new(idea).to_string())
    }

    pub async fn list_ideas(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("list_ideas: {params:?}");

        let ideas = self
            .planner
            .list_ideas(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list ideas", &e))?;

        text(format!("# Ideas\n\n{ideas}"))
    }

    /// Unsaved writes are reported in the text rather than as an error.
    pub async fn move_item(&self, Parameters(params): Parameters<MoveItem>) -> McpResult {
        debug!("move_item: {params:?}");

        let result = self
            .planner
            .move_item(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to move item", &e))?;

        text(result.to_string())
    }

    pub async fn promote_idea(&self, Parameters(params): Parameters<PromoteIdea>) -> McpResult {
        debug!("promote_idea: {params:?}");

        let result = self
            .planner
            .promote_idea(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to promote idea", &e))?;

        text(result.to_string())
    }
}
