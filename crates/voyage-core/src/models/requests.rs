//! Validated request types built from interface parameters.

use jiff::civil::{Date, DateTime};

use super::{
    schedule::{self, ItemTiming},
    trip, Category, Priority, ScheduleItem, TripStatus,
};
use crate::{
    error::{ItineraryError, Result},
    operations::{parse_optional, validate_title},
    params::{CreateTrip, IdeaCreate, ItemCreate, UpdateItem},
};

/// A trip ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrip {
    pub title: String,
    pub destination: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub status: TripStatus,
}

impl TryFrom<&CreateTrip> for NewTrip {
    type Error = ItineraryError;

    fn try_from(params: &CreateTrip) -> Result<Self> {
        let title = validate_title(&params.title)?;
        let start_date = params
            .start_date
            .as_deref()
            .map(|s| schedule::parse_date("start_date", s))
            .transpose()?;
        let end_date = params
            .end_date
            .as_deref()
            .map(|s| schedule::parse_date("end_date", s))
            .transpose()?;

        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                return Err(ItineraryError::invalid_input("end_date")
                    .with_reason(format!("Trip ends ({end}) before it starts ({start})")));
            }
            if trip::day_count(start, end) > trip::MAX_TRIP_DAYS {
                return Err(ItineraryError::invalid_input("end_date").with_reason(format!(
                    "Trip from {start} to {end} is longer than {} days",
                    trip::MAX_TRIP_DAYS
                )));
            }
        }

        Ok(Self {
            title,
            destination: params.destination.clone(),
            description: params.description.clone(),
            start_date,
            end_date,
            status: parse_optional("status", params.status.as_deref())?.unwrap_or_default(),
        })
    }
}

/// A schedule item ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewScheduleItem {
    pub trip_id: u64,
    pub category: Category,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub confirmation_number: Option<String>,
    pub cost: Option<f64>,
    pub timing: ItemTiming,
}

impl TryFrom<&ItemCreate> for NewScheduleItem {
    type Error = ItineraryError;

    fn try_from(params: &ItemCreate) -> Result<Self> {
        let title = validate_title(&params.title)?;
        let category = parse_optional::<Category>("category", params.category.as_deref())?
            .unwrap_or_default();

        let date = schedule::parse_date("date", &params.date)?;
        let time = params
            .time
            .as_deref()
            .map(|s| schedule::parse_time("time", s))
            .transpose()?;
        let start_at = schedule::combine(date, time);

        let end_at = match params.end_date.as_deref() {
            Some(end_date) => {
                let end_date = schedule::parse_date("end_date", end_date)?;
                let end_time = params
                    .end_time
                    .as_deref()
                    .map(|s| schedule::parse_time("end_time", s))
                    .transpose()?;
                Some(schedule::combine(end_date, end_time))
            }
            // An end time alone ends on the start day
            None => params
                .end_time
                .as_deref()
                .map(|s| schedule::parse_time("end_time", s))
                .transpose()?
                .map(|t| date.to_datetime(t)),
        };

        Ok(Self {
            trip_id: params.trip_id,
            category,
            title,
            description: params.description.clone(),
            location: params.location.clone(),
            notes: params.notes.clone(),
            confirmation_number: params.confirmation_number.clone(),
            cost: params.cost,
            timing: ItemTiming::new(start_at, end_at)?,
        })
    }
}

/// An idea ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIdea {
    pub trip_id: u64,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub url: Option<String>,
    pub estimated_duration_hours: Option<f64>,
    pub priority: Priority,
}

impl TryFrom<&IdeaCreate> for NewIdea {
    type Error = ItineraryError;

    fn try_from(params: &IdeaCreate) -> Result<Self> {
        if let Some(hours) = params.estimated_duration_hours {
            if !(hours.is_finite() && hours >= 0.0) {
                return Err(ItineraryError::invalid_input("estimated_duration_hours")
                    .with_reason("Duration must be a non-negative number of hours"));
            }
        }

        Ok(Self {
            trip_id: params.trip_id,
            title: validate_title(&params.title)?,
            description: params.description.clone(),
            category: parse_optional("category", params.category.as_deref())?,
            location: params.location.clone(),
            notes: params.notes.clone(),
            url: params.url.clone(),
            estimated_duration_hours: params.estimated_duration_hours,
            priority: parse_optional("priority", params.priority.as_deref())?.unwrap_or_default(),
        })
    }
}

/// Field changes for a schedule item edit. `None` keeps the stored value.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UpdateItemRequest {
    pub title: Option<String>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub confirmation_number: Option<String>,
    pub cost: Option<f64>,
    pub start_at: Option<DateTime>,
    /// `Some(None)` clears the end
    pub end_at: Option<Option<DateTime>>,
}

impl UpdateItemRequest {
    /// Resolves edit parameters against the item's current values.
    ///
    /// A new date keeps the current time-of-day unless a time is also given,
    /// and the resulting start/end pair is validated as a whole.
    pub fn resolve(params: &UpdateItem, current: &ScheduleItem) -> Result<Self> {
        let title = params.title.as_deref().map(validate_title).transpose()?;
        let category = parse_optional::<Category>("category", params.category.as_deref())?;

        let date = params
            .date
            .as_deref()
            .map(|s| schedule::parse_date("date", s))
            .transpose()?;
        let time = params
            .time
            .as_deref()
            .map(|s| schedule::parse_time("time", s))
            .transpose()?;
        let start_at = match (date, time) {
            (None, None) => None,
            (date, time) => Some(
                date.unwrap_or(current.start_at.date())
                    .to_datetime(time.unwrap_or(current.start_at.time())),
            ),
        };

        let end_date = params
            .end_date
            .as_deref()
            .map(|s| schedule::parse_date("end_date", s))
            .transpose()?;
        let end_time = params
            .end_time
            .as_deref()
            .map(|s| schedule::parse_time("end_time", s))
            .transpose()?;
        let end_at = if params.clear_end {
            Some(None)
        } else {
            match (end_date, end_time, current.end_at) {
                (None, None, _) => None,
                (Some(day), time, _) => Some(Some(schedule::combine(day, time))),
                (None, Some(time), Some(end)) => Some(Some(end.date().to_datetime(time))),
                (None, Some(time), None) => {
                    let day = start_at.unwrap_or(current.start_at).date();
                    Some(Some(day.to_datetime(time)))
                }
            }
        };

        ItemTiming::new(
            start_at.unwrap_or(current.start_at),
            end_at.unwrap_or(current.end_at),
        )?;

        Ok(Self {
            title,
            category,
            description: params.description.clone(),
            location: params.location.clone(),
            notes: params.notes.clone(),
            confirmation_number: params.confirmation_number.clone(),
            cost: params.cost,
            start_at,
            end_at,
        })
    }

    /// True when the request changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
