//! Voyage CLI Application
//!
//! Command-line interface and MCP server for the Voyage itinerary planner.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, VoyageMcpServer};
use renderer::TerminalRenderer;
use voyage_core::PlannerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Voyage started");

    match command {
        Some(Trip { command }) => {
            Cli::new(planner, renderer)
                .handle_trip_command(command)
                .await
        }
        Some(Item { command }) => {
            Cli::new(planner, renderer)
                .handle_item_command(command)
                .await
        }
        Some(Idea { command }) => {
            Cli::new(planner, renderer)
                .handle_idea_command(command)
                .await
        }
        Some(Move(args)) => Cli::new(planner, renderer).move_item(&args.into()).await,
        Some(Promote(args)) => {
            Cli::new(planner, renderer)
                .promote_idea(&args.into())
                .await
        }
        Some(Serve) => {
            info!("Starting Voyage MCP server");
            run_stdio_server(VoyageMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(planner, renderer).list_trips().await,
    }
}
