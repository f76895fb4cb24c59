//! Command execution for the Voyage CLI
//!
//! [`Cli`] turns parsed arguments into planner calls and prints each result
//! through the same `Display` implementations the MCP server returns.

use anyhow::{anyhow, Context, Result};
use log::debug;
use voyage_core::{
    display::{CreateResult, DeleteResult, OperationStatus},
    params::{DeleteTrip, Id, IdeaCreate, ItemCreate, MoveItem, PromoteIdea, UpdateItem},
    Planner,
};

use crate::{
    args::{IdeaCommands, ItemCommands, TripCommands},
    renderer::TerminalRenderer,
};

pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_trip_command(&self, command: TripCommands) -> Result<()> {
        match command {
            TripCommands::Create(args) => {
                let trip = self
                    .planner
                    .create_trip(&args.into())
                    .await
                    .context("Failed to create trip")?;
                self.renderer.render(&CreateResult::new(trip).to_string())
            }
            TripCommands::List => self.list_trips().await,
            TripCommands::Show(args) => self.show_trip(&args.into()).await,
            TripCommands::Delete(args) => self.delete_trip(&args.into()).await,
            TripCommands::Export(args) => {
                let json = self
                    .planner
                    .export_trip_json(&args.into())
                    .await
                    .context("Failed to export trip")?;
                // JSON goes out untouched so it can be piped
                println!("{json}");
                Ok(())
            }
        }
    }

    pub async fn handle_item_command(&self, command: ItemCommands) -> Result<()> {
        match command {
            ItemCommands::Add(args) => self.add_item(&args.into()).await,
            ItemCommands::Show(args) => {
                let id: Id = args.into();
                let item = self
                    .planner
                    .get_item(&id)
                    .await
                    .context("Failed to get item")?
                    .ok_or_else(|| anyhow!("Item with ID {} not found", id.id))?;
                self.renderer.render(&item.to_string())
            }
            ItemCommands::Update(args) => self.update_item(&args.into()).await,
            ItemCommands::Delete(args) => {
                let id: Id = args.into();
                let output = match self
                    .planner
                    .delete_item(&id)
                    .await
                    .context("Failed to delete item")?
                {
                    Some(item) => DeleteResult::new(item).to_string(),
                    None => OperationStatus::failure(format!("Item {} not found", id.id)).to_string(),
                };
                self.renderer.render(&output)
            }
        }
    }

    pub async fn handle_idea_command(&self, command: IdeaCommands) -> Result<()> {
        match command {
            IdeaCommands::Add(args) => self.add_idea(&args.into()).await,
            IdeaCommands::List(args) => {
                let ideas = self
                    .planner
                    .list_ideas(&args.into())
                    .await
                    .context("Failed to list ideas")?;
                self.renderer.render(&format!("# Ideas\n\n{ideas}"))
            }
            IdeaCommands::Delete(args) => {
                let id: Id = args.into();
                let output = match self
                    .planner
                    .delete_idea(&id)
                    .await
                    .context("Failed to delete idea")?
                {
                    Some(idea) => DeleteResult::new(idea).to_string(),
                    None => OperationStatus::failure(format!("Idea {} not found", id.id)).to_string(),
                };
                self.renderer.render(&output)
            }
        }
    }

    pub async fn list_trips(&self) -> Result<()> {
        let trips = self
            .planner
            .list_trips()
            .await
            .context("Failed to list trips")?;
        self.renderer.render(&format!("# Trips\n\n{trips}"))
    }

    async fn show_trip(&self, params: &Id) -> Result<()> {
        let trip = self
            .planner
            .get_trip(params)
            .await
            .context("Failed to get trip")?
            .ok_or_else(|| anyhow!("Trip with ID {} not found", params.id))?;
        self.renderer.render(&trip.to_string())
    }

    async fn delete_trip(&self, params: &DeleteTrip) -> Result<()> {
        let output = match self
            .planner
            .delete_trip(params)
            .await
            .context("Failed to delete trip")?
        {
            Some(trip) => DeleteResult::new(trip).to_string(),
            None => OperationStatus::failure(format!("Trip {} not found", params.id)).to_string(),
        };
        self.renderer.render(&output)
    }

    async fn add_item(&self, params: &ItemCreate) -> Result<()> {
        let item = self
            .planner
            .add_item(params)
            .await
            .context("Failed to add item")?;
        self.renderer.render(&CreateResult::new(item).to_string())
    }

    async fn update_item(&self, params: &UpdateItem) -> Result<()> {
        let result = self
            .planner
            .update_item(params)
            .await
            .context("Failed to update item")?;
        self.renderer.render(&result.to_string())
    }

    async fn add_idea(&self, params: &IdeaCreate) -> Result<()> {
        let idea = self
            .planner
            .add_idea(params)
            .await
            .context("Failed to add idea")?;
        self.renderer.render(&CreateResult::new(idea).to_string())
    }

    pub async fn move_item(&self, params: &MoveItem) -> Result<()> {
        debug!("move: {params:?}");
        let result = self
            .planner
            .move_item(params)
            .await
            .context("Failed to move item")?;
        self.renderer.render(&result.to_string())
    }

    pub async fn promote_idea(&self, params: &PromoteIdea) -> Result<()> {
        debug!("promote: {params:?}");
        let result = self
            .planner
            .promote_idea(params)
            .await
            .context("Failed to promote idea")?;
        self.renderer.render(&result.to_string())
    }
}
