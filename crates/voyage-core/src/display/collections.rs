//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::{DayPlan, Idea, Trip};

/// Trips shown as a summary list, without their itineraries.
pub struct Trips(pub Vec<Trip>);

impl Trips {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.0.iter()
    }
}

impl IntoIterator for Trips {
    type Item = Trip;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Trips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No trips found.");
        }

        for trip in &self.0 {
            writeln!(f, "## {} (ID: {})", trip.title, trip.id)?;
            writeln!(f)?;
            if let Some(destination) = &trip.destination {
                writeln!(f, "- **Destination**: {destination}")?;
            }
            if let (Some(start), Some(end)) = (trip.start_date, trip.end_date) {
                writeln!(f, "- **Dates**: {start} → {end}")?;
            }
            writeln!(f, "- **Status**: {}", trip.status)?;
            writeln!(
                f,
                "- **Items**: {} · **Ideas**: {}",
                trip.items.len(),
                trip.ideas.len()
            )?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// An idea backlog, shown high priority first and newest first within a
/// priority.
pub struct Ideas(pub Vec<Idea>);

impl Ideas {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Idea> {
        self.0.iter()
    }
}

impl fmt::Display for Ideas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No ideas yet.");
        }

        let mut ideas: Vec<&Idea> = self.0.iter().collect();
        ideas.sort_by(|a, b| Idea::display_order(a, b));
        for idea in ideas {
            write!(f, "{idea}")?;
        }
        Ok(())
    }
}

/// A day-by-day itinerary.
pub struct Days(pub Vec<DayPlan>);

impl fmt::Display for Days {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "Nothing scheduled yet.");
        }
        for day in &self.0 {
            write!(f, "{day}")?;
        }
        Ok(())
    }
}
