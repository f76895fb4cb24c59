//! Day buckets: items sharing one local calendar date.

use std::collections::BTreeMap;

use jiff::civil::Date;
use serde::Serialize;

use super::{Category, ScheduleItem, Trip};

/// The items of one calendar day, in itinerary order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DayPlan {
    /// 1-based day number within the trip's date span, if inside it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    pub date: Date,
    pub items: Vec<ScheduleItem>,
}

impl DayPlan {
    /// Groups already-ordered items into ascending day buckets.
    ///
    /// Item order inside each bucket is preserved.
    pub fn group(items: &[ScheduleItem]) -> Vec<DayPlan> {
        let mut by_day: BTreeMap<Date, Vec<ScheduleItem>> = BTreeMap::new();
        for item in items {
            by_day.entry(item.day()).or_default().push(item.clone());
        }
        by_day
            .into_iter()
            .map(|(date, items)| DayPlan {
                number: None,
                date,
                items,
            })
            .collect()
    }

    /// Lays items out over every day of the trip, including empty days.
    ///
    /// Items dated outside the trip span keep their own unnumbered buckets.
    /// Trips without a full date span fall back to [`DayPlan::group`].
    pub fn for_trip(trip: &Trip, items: &[ScheduleItem]) -> Vec<DayPlan> {
        let days = trip.days();
        if days.is_empty() {
            return Self::group(items);
        }

        let mut plans: BTreeMap<Date, DayPlan> = days
            .into_iter()
            .zip(1u32..)
            .map(|(date, number)| {
                (
                    date,
                    DayPlan {
                        number: Some(number),
                        date,
                        items: Vec::new(),
                    },
                )
            })
            .collect();

        for item in items {
            plans
                .entry(item.day())
                .or_insert_with(|| DayPlan {
                    number: None,
                    date: item.day(),
                    items: Vec::new(),
                })
                .items
                .push(item.clone());
        }

        plans.into_values().collect()
    }

    /// Distinct categories present on this day, in first-seen order.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category) {
                seen.push(item.category);
            }
        }
        seen
    }
}
