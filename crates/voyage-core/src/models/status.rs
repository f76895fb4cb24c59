//! Enumerations for item categories, idea priorities and trip statuses.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of a schedulable itinerary item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Flight,
    /// Hotel stays and other lodging
    Accommodation,
    #[default]
    Activity,
    Restaurant,
    Transport,
    Other,
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flight" => Ok(Category::Flight),
            "accommodation" | "hotel" => Ok(Category::Accommodation),
            "activity" => Ok(Category::Activity),
            "restaurant" => Ok(Category::Restaurant),
            "transport" | "car" => Ok(Category::Transport),
            "other" => Ok(Category::Other),
            _ => Err(format!("Invalid category: {s}")),
        }
    }
}

impl Category {
    /// Database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Flight => "flight",
            Category::Accommodation => "accommodation",
            Category::Activity => "activity",
            Category::Restaurant => "restaurant",
            Category::Transport => "transport",
            Category::Other => "other",
        }
    }
}

/// Display priority of an unscheduled idea.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl Priority {
    /// Database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Sort rank used by idea lists, highest priority first.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

/// Planning status of a trip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    #[default]
    Planning,
    Upcoming,
    Completed,
}

impl FromStr for TripStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "planning" => Ok(TripStatus::Planning),
            "upcoming" => Ok(TripStatus::Upcoming),
            "completed" => Ok(TripStatus::Completed),
            _ => Err(format!("Invalid trip status: {s}")),
        }
    }
}

impl TripStatus {
    /// Database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Planning => "planning",
            TripStatus::Upcoming => "upcoming",
            TripStatus::Completed => "completed",
        }
    }
}
