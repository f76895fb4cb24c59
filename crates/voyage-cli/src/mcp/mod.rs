//! MCP server implementation for Voyage
//!
//! Exposes trips, itineraries and the drag-and-drop operations over the
//! Model Context Protocol on stdio. Tool output is the same markdown the CLI
//! prints.

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};
use voyage_core::Planner;

pub mod errors;
pub mod handlers;

pub use handlers::{CreateTrip, Id, IdeaCreate, ItemCreate, McpResult, MoveItem, PromoteIdea};

const INSTRUCTIONS: &str = r#"Voyage keeps a day-by-day itinerary for each trip plus a list of unscheduled ideas.

## Core Concepts
- **Trips**: title, optional destination and date range
- **Items**: scheduled entries with a day and a time; items without a time are "Flexible" and sort as midday
- **Ideas**: unscheduled candidates with a priority (high/medium/low)

## Rearranging
- `move_item` drops an item onto another item. The item takes the target's day, keeps its own time of day and duration, and the day is re-sorted by time. Dropping an item onto itself changes nothing.
- `promote_idea` drops an idea onto an item. The idea becomes a flexible item on that item's day and leaves the idea list.

## Typical Workflow
1. `list_trips` or `create_trip`
2. `show_trip` to see the days and ideas with their IDs
3. `add_item` / `add_idea`
4. `move_item` / `promote_idea` to rearrange"#;

/// MCP server for Voyage
#[derive(Clone)]
pub struct VoyageMcpServer {
    planner: Planner,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl VoyageMcpServer {
    pub fn new(planner: Planner) -> Self {
        Self {
            planner,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.planner.clone())
    }

    #[tool(
        name = "list_trips",
        description = "List all trips, soonest first, with their IDs, destinations, dates and status."
    )]
    async fn list_trips(&self) -> McpResult {
        self.handlers().list_trips().await
    }

    #[tool(
        name = "create_trip",
        description = "Create a trip. Requires a title; optionally destination, description, start_date and end_date (YYYY-MM-DD) and status ('planning', 'upcoming' or 'completed'). Returns the new trip ID."
    )]
    async fn create_trip(&self, params: Parameters<CreateTrip>) -> McpResult {
        self.handlers().create_trip(params).await
    }

    #[tool(
        name = "show_trip",
        description = "Show a trip's itinerary day by day, including empty days in its date range, followed by its ideas. Item and idea IDs shown here are what move_item and promote_idea take."
    )]
    async fn show_trip(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_trip(params).await
    }

    #[tool(
        name = "add_item",
        description = "Add an item to a trip's itinerary. Requires trip_id, title and date (YYYY-MM-DD). Leave out time (HH:MM) for a flexible item. Optional: end_date/end_time, category ('flight', 'accommodation', 'activity', 'restaurant', 'transport', 'other'), description, location, notes, confirmation_number, cost."
    )]
    async fn add_item(&self, params: Parameters<ItemCreate>) -> McpResult {
        self.handlers().add_item(params).await
    }

    #[tool(
        name = "add_idea",
        description = "Capture an unscheduled idea for a trip. Requires trip_id and title. Optional: description, category, location, notes, url, estimated_duration_hours and priority ('high', 'medium' or 'low', default 'medium')."
    )]
    async fn add_idea(&self, params: Parameters<IdeaCreate>) -> McpResult {
        self.handlers().add_idea(params).await
    }

    #[tool(
        name = "list_ideas",
        description = "List a trip's ideas, highest priority first. Takes the trip ID as 'id'."
    )]
    async fn list_ideas(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().list_ideas(params).await
    }

    #[tool(
        name = "move_item",
        description = "Drag the item item_id onto the item target_id. The item moves to the target's day keeping its time of day and duration, then the day is re-sorted by time. Returns the resulting day. Items of different trips, unknown IDs and dropping an item on itself change nothing."
    )]
    async fn move_item(&self, params: Parameters<MoveItem>) -> McpResult {
        self.handlers().move_item(params).await
    }

    #[tool(
        name = "promote_idea",
        description = "Drag the idea idea_id onto the item target_id. The idea becomes a flexible item (no set time) on the target's day, keeping its title, description, location and category, and is removed from the idea list. Returns the resulting day."
    )]
    async fn promote_idea(&self, params: Parameters<PromoteIdea>) -> McpResult {
        self.handlers().promote_idea(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for VoyageMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "voyage".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: VoyageMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Voyage MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(reason) => info!("MCP server stopped: {reason:?}"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
