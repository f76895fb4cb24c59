//! Display implementations for domain models.
//!
//! Output is markdown so the CLI can render it with termimad and the MCP
//! server can hand it to clients unchanged.

use std::fmt;

use super::{
    collections::Ideas,
    datetime::{DayLabel, ItemSpan, LocalDateTime},
};
use crate::models::{trip, Category, DayPlan, Idea, Priority, ScheduleItem, Trip, TripStatus};

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        if let Some(destination) = &self.destination {
            writeln!(f, "- Destination: {destination}")?;
        }
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => writeln!(
                f,
                "- Dates: {start} → {end} ({} days)",
                trip::day_count(start, end)
            )?,
            (Some(start), None) => writeln!(f, "- Starts: {start}")?,
            (None, Some(end)) => writeln!(f, "- Ends: {end}")?,
            (None, None) => {}
        }
        writeln!(f, "- Status: {}", self.status)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        writeln!(f, "\n## Itinerary")?;
        writeln!(f)?;
        let days = DayPlan::for_trip(self, &self.items);
        if days.is_empty() {
            writeln!(f, "Nothing scheduled yet.")?;
        } else {
            for day in &days {
                write!(f, "{day}")?;
            }
        }

        writeln!(f, "\n## Ideas")?;
        writeln!(f)?;
        write!(f, "{}", Ideas(self.ideas.clone()))
    }
}

impl fmt::Display for DayPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.number {
            Some(number) => writeln!(f, "### Day {number} · {}", DayLabel(self.date))?,
            None => writeln!(f, "### {}", DayLabel(self.date))?,
        }
        writeln!(f)?;

        if self.items.is_empty() {
            writeln!(f, "No plans for this day.")?;
            return writeln!(f);
        }

        let categories: Vec<&str> = self.categories().iter().map(Category::as_str).collect();
        let noun = if self.items.len() == 1 { "item" } else { "items" };
        writeln!(f, "{} {noun} · {}", self.items.len(), categories.join(", "))?;
        writeln!(f)?;

        for item in &self.items {
            writeln!(
                f,
                "- {} **{}** ({}) [#{}]",
                ItemSpan(item),
                item.title,
                item.category,
                item.id
            )?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ScheduleItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {} ({})", self.id, self.title, self.category)?;
        writeln!(f)?;
        writeln!(f, "- When: {} {}", DayLabel(self.day()), ItemSpan(self))?;
        if let Some(location) = &self.location {
            writeln!(f, "- Location: {location}")?;
        }
        if let Some(confirmation) = &self.confirmation_number {
            writeln!(f, "- Confirmation: {confirmation}")?;
        }
        if let Some(cost) = self.cost {
            writeln!(f, "- Cost: {cost:.2}")?;
        }
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "{desc}")?;
            writeln!(f)?;
        }

        if let Some(notes) = &self.notes {
            writeln!(f, "#### Notes")?;
            writeln!(f)?;
            writeln!(f, "{notes}")?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Idea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- **{}** ({} priority", self.title, self.priority)?;
        if let Some(category) = self.category {
            write!(f, ", {category}")?;
        }
        if let Some(hours) = self.estimated_duration_hours {
            write!(f, ", ~{hours}h")?;
        }
        writeln!(f, ") [#{}]", self.id)?;

        if let Some(desc) = &self.description {
            writeln!(f, "  {desc}")?;
        }
        if let Some(location) = &self.location {
            writeln!(f, "  Location: {location}")?;
        }
        if let Some(url) = &self.url {
            writeln!(f, "  Link: {url}")?;
        }
        Ok(())
    }
}
