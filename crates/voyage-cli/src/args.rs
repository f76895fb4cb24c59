//! Command-line argument definitions using clap
//!
//! Each command has a clap `Args` struct that converts into the matching
//! interface-agnostic parameter type from [`voyage_core::params`]:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```
//!
//! Dates and times stay strings here. Parsing and validation happen in the
//! core so the CLI and the MCP server reject bad input the same way.

use std::{fmt, path::PathBuf};

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use voyage_core::params::{
    CreateTrip, DeleteTrip, Id, IdeaCreate, ItemCreate, MoveItem, PromoteIdea, UpdateItem,
};

/// Collaborative trip itinerary planner
///
/// Voyage keeps a day-by-day itinerary for each trip together with a list of
/// unscheduled ideas. Items are reordered by dropping them onto other items,
/// and ideas are scheduled by dropping them onto an item of the day they
/// belong to.
#[derive(Parser)]
#[command(version, about, name = "voyage")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/voyage/voyage.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Voyage CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage trips
    #[command(alias = "t")]
    Trip {
        #[command(subcommand)]
        command: TripCommands,
    },
    /// Manage itinerary items
    #[command(alias = "i")]
    Item {
        #[command(subcommand)]
        command: ItemCommands,
    },
    /// Manage unscheduled ideas
    Idea {
        #[command(subcommand)]
        command: IdeaCommands,
    },
    /// Drag an item onto another item
    #[command(alias = "mv")]
    Move(MoveArgs),
    /// Drag an idea onto an item to schedule it on that day
    Promote(PromoteArgs),
    /// Start the MCP server
    Serve,
}

#[derive(Subcommand)]
pub enum TripCommands {
    /// Create a new trip
    #[command(alias = "c")]
    Create(CreateTripArgs),
    /// List all trips
    #[command(alias = "l")]
    List,
    /// Show a trip's day-by-day itinerary and ideas
    #[command(alias = "s")]
    Show(ShowTripArgs),
    /// Delete a trip with all of its items and ideas
    Delete(DeleteTripArgs),
    /// Print a trip with its items and ideas as JSON
    Export(ShowTripArgs),
}

#[derive(Subcommand)]
pub enum ItemCommands {
    /// Add an item to a trip's itinerary
    #[command(alias = "a")]
    Add(AddItemArgs),
    /// Show a single item
    #[command(alias = "s")]
    Show(ItemIdArgs),
    /// Edit an item's details or timing
    #[command(alias = "u")]
    Update(UpdateItemArgs),
    /// Remove an item from the itinerary
    Delete(ItemIdArgs),
}

#[derive(Subcommand)]
pub enum IdeaCommands {
    /// Capture an idea for later
    #[command(alias = "a")]
    Add(AddIdeaArgs),
    /// List a trip's ideas, highest priority first
    #[command(alias = "l")]
    List(ListIdeasArgs),
    /// Discard an idea
    Delete(IdeaIdArgs),
}

// ============================================================================
// Trip arguments
// ============================================================================

#[derive(ClapArgs)]
pub struct CreateTripArgs {
    /// Title of the trip
    pub title: String,
    /// Where the trip goes
    #[arg(long)]
    pub destination: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
    /// First day (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,
    /// Last day, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<String>,
    #[arg(long, value_enum)]
    pub status: Option<TripStatusArg>,
}

impl From<CreateTripArgs> for CreateTrip {
    fn from(val: CreateTripArgs) -> Self {
        CreateTrip {
            title: val.title,
            destination: val.destination,
            description: val.description,
            start_date: val.start,
            end_date: val.end,
            status: val.status.map(|s| s.to_string()),
        }
    }
}

#[derive(ClapArgs)]
pub struct ShowTripArgs {
    /// ID of the trip
    pub id: u64,
}

impl From<ShowTripArgs> for Id {
    fn from(val: ShowTripArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(ClapArgs)]
pub struct DeleteTripArgs {
    /// ID of the trip to delete
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteTripArgs> for DeleteTrip {
    fn from(val: DeleteTripArgs) -> Self {
        DeleteTrip {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

// ============================================================================
// Item arguments
// ============================================================================

#[derive(ClapArgs)]
pub struct AddItemArgs {
    /// ID of the trip
    pub trip_id: u64,
    /// Title of the item
    pub title: String,
    /// Day of the item (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,
    /// Start time (HH:MM); leave out for a flexible item
    #[arg(long)]
    pub time: Option<String>,
    /// Day the item ends (YYYY-MM-DD); defaults to the start day
    #[arg(long)]
    pub end_date: Option<String>,
    /// End time (HH:MM)
    #[arg(long)]
    pub end_time: Option<String>,
    /// flight, accommodation, activity, restaurant, transport or other
    #[arg(short, long)]
    pub category: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
    #[arg(short, long)]
    pub location: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    /// Booking or reservation reference
    #[arg(long)]
    pub confirmation: Option<String>,
    #[arg(long)]
    pub cost: Option<f64>,
}

impl From<AddItemArgs> for ItemCreate {
    fn from(val: AddItemArgs) -> Self {
        ItemCreate {
            trip_id: val.trip_id,
            title: val.title,
            category: val.category,
            date: val.date,
            time: val.time,
            end_date: val.end_date,
            end_time: val.end_time,
            description: val.description,
            location: val.location,
            notes: val.notes,
            confirmation_number: val.confirmation,
            cost: val.cost,
        }
    }
}

#[derive(ClapArgs)]
pub struct ItemIdArgs {
    /// ID of the item
    pub id: u64,
}

impl From<ItemIdArgs> for Id {
    fn from(val: ItemIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Edit an item
///
/// Only the given fields change. A new `--date` keeps the item's time of day
/// unless `--time` is given as well.
#[derive(ClapArgs)]
pub struct UpdateItemArgs {
    /// ID of the item to update
    pub id: u64,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub category: Option<String>,
    /// New day (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
    /// New start time (HH:MM)
    #[arg(long)]
    pub time: Option<String>,
    #[arg(long)]
    pub end_date: Option<String>,
    #[arg(long)]
    pub end_time: Option<String>,
    /// Remove the item's end time
    #[arg(long, conflicts_with_all = ["end_date", "end_time"])]
    pub clear_end: bool,
    #[arg(short, long)]
    pub description: Option<String>,
    #[arg(short, long)]
    pub location: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    #[arg(long)]
    pub confirmation: Option<String>,
    #[arg(long)]
    pub cost: Option<f64>,
}

impl From<UpdateItemArgs> for UpdateItem {
    fn from(val: UpdateItemArgs) -> Self {
        UpdateItem {
            id: val.id,
            title: val.title,
            category: val.category,
            date: val.date,
            time: val.time,
            end_date: val.end_date,
            end_time: val.end_time,
            clear_end: val.clear_end,
            description: val.description,
            location: val.location,
            notes: val.notes,
            confirmation_number: val.confirmation,
            cost: val.cost,
        }
    }
}

// ============================================================================
// Idea arguments
// ============================================================================

#[derive(ClapArgs)]
pub struct AddIdeaArgs {
    /// ID of the trip
    pub trip_id: u64,
    /// Title of the idea
    pub title: String,
    #[arg(short, long)]
    pub description: Option<String>,
    /// Category the idea gets once scheduled
    #[arg(short, long)]
    pub category: Option<String>,
    #[arg(short, long)]
    pub location: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    #[arg(long)]
    pub url: Option<String>,
    /// Rough duration estimate in hours
    #[arg(long)]
    pub hours: Option<f64>,
    #[arg(short, long, value_enum)]
    pub priority: Option<PriorityArg>,
}

impl From<AddIdeaArgs> for IdeaCreate {
    fn from(val: AddIdeaArgs) -> Self {
        IdeaCreate {
            trip_id: val.trip_id,
            title: val.title,
            description: val.description,
            category: val.category,
            location: val.location,
            notes: val.notes,
            url: val.url,
            estimated_duration_hours: val.hours,
            priority: val.priority.map(|p| p.to_string()),
        }
    }
}

#[derive(ClapArgs)]
pub struct ListIdeasArgs {
    /// ID of the trip
    pub trip_id: u64,
}

impl From<ListIdeasArgs> for Id {
    fn from(val: ListIdeasArgs) -> Self {
        Id { id: val.trip_id }
    }
}

#[derive(ClapArgs)]
pub struct IdeaIdArgs {
    /// ID of the idea
    pub id: u64,
}

impl From<IdeaIdArgs> for Id {
    fn from(val: IdeaIdArgs) -> Self {
        Id { id: val.id }
    }
}

// ============================================================================
// Drag and drop
// ============================================================================

/// Drop an item onto another item
///
/// The item takes the target's day, keeping its own time of day and
/// duration. The day is then re-sorted by time.
#[derive(ClapArgs)]
pub struct MoveArgs {
    /// ID of the item being dragged
    pub item_id: u64,
    /// ID of the item it is dropped on
    pub target_id: u64,
}

impl From<MoveArgs> for MoveItem {
    fn from(val: MoveArgs) -> Self {
        MoveItem {
            item_id: val.item_id,
            target_id: val.target_id,
        }
    }
}

/// Drop an idea onto an item
///
/// The idea becomes a flexible item on the target's day and leaves the idea
/// list.
#[derive(ClapArgs)]
pub struct PromoteArgs {
    /// ID of the idea being dragged
    pub idea_id: u64,
    /// ID of the item it is dropped on
    pub target_id: u64,
}

impl From<PromoteArgs> for PromoteIdea {
    fn from(val: PromoteArgs) -> Self {
        PromoteIdea {
            idea_id: val.idea_id,
            target_id: val.target_id,
        }
    }
}

/// Command-line representation of trip status values
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum TripStatusArg {
    Planning,
    Upcoming,
    Completed,
}

impl fmt::Display for TripStatusArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripStatusArg::Planning => write!(f, "planning"),
            TripStatusArg::Upcoming => write!(f, "upcoming"),
            TripStatusArg::Completed => write!(f, "completed"),
        }
    }
}

/// Command-line representation of idea priorities
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    High,
    Medium,
    Low,
}

impl fmt::Display for PriorityArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityArg::High => write!(f, "high"),
            PriorityArg::Medium => write!(f, "medium"),
            PriorityArg::Low => write!(f, "low"),
        }
    }
}
