use std::collections::HashMap;

use uuid::Uuid;

use crate::activity::Activity;
use crate::time::{TimeOfDay, Weekday};

/// Lane assignment for one day's activities.
///
/// Greedy first-fit interval partitioning: activities that pass the day
/// filter are stable-sorted by start time (ties keep input order) and each
/// is placed in the first lane whose last end time is `<=` its start; a new
/// lane is appended when none fits. Scanning in start order this way yields
/// the minimum number of lanes, equal to the maximum number of activities
/// overlapping at any instant.
///
/// The assignment is a side mapping from activity id to lane index; the
/// caller-owned activities are never mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaneLayout {
    lane_of: HashMap<Uuid, usize>,
    lane_count: usize,
}

impl LaneLayout {
    pub fn assign<'a, I>(activities: I, day: Weekday) -> Self
    where
        I: IntoIterator<Item = &'a Activity>,
    {
        let mut relevant: Vec<&Activity> = activities
            .into_iter()
            .filter(|a| a.applies_on(day))
            .collect();
        relevant.sort_by_key(|a| a.start);

        // Each lane only remembers the end time of its last-placed activity.
        let mut lane_ends: Vec<TimeOfDay> = Vec::new();
        let mut lane_of = HashMap::with_capacity(relevant.len());

        for activity in relevant {
            let lane = match lane_ends.iter().position(|&end| end <= activity.start) {
                Some(i) => i,
                None => {
                    lane_ends.push(activity.start);
                    lane_ends.len() - 1
                }
            };
            lane_ends[lane] = activity.end;
            lane_of.insert(activity.id, lane);
        }

        Self {
            lane_count: lane_ends.len(),
            lane_of,
        }
    }

    /// Lane index for an activity, or `None` if the day filter excluded it.
    pub fn lane_of(&self, id: Uuid) -> Option<usize> {
        self.lane_of.get(&id).copied()
    }

    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    pub fn is_empty(&self) -> bool {
        self.lane_of.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lane_of.len()
    }
}
