use dayline_core::activity::{Activity, ActivityStatus};
use dayline_core::schedule::Schedule;
use dayline_core::time::{TimeOfDay, Weekday};

/// Builder for test activities with sensible defaults (09:00–10:00,
/// every day, planned).
pub struct ActivityBuilder {
    title: String,
    start: TimeOfDay,
    end: TimeOfDay,
    days: Vec<Weekday>,
    status: ActivityStatus,
    notes: String,
}

impl ActivityBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.into(),
            start: TimeOfDay::parse("09:00"),
            end: TimeOfDay::parse("10:00"),
            days: Vec::new(),
            status: ActivityStatus::Planned,
            notes: String::new(),
        }
    }

    pub fn times(mut self, start: &str, end: &str) -> Self {
        self.start = TimeOfDay::parse(start);
        self.end = TimeOfDay::parse(end);
        self
    }

    pub fn days(mut self, days: &[Weekday]) -> Self {
        self.days = days.to_vec();
        self
    }

    pub fn status(mut self, status: ActivityStatus) -> Self {
        self.status = status;
        self
    }

    pub fn notes(mut self, notes: &str) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn build(self) -> Activity {
        let mut activity = Activity::new(self.title, self.start, self.end);
        activity.days = self.days;
        activity.status = self.status;
        activity.notes = self.notes;
        activity
    }
}

/// Builder for test schedules.
pub struct ScheduleBuilder {
    name: String,
    activities: Vec<Activity>,
}

impl ScheduleBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            activities: Vec::new(),
        }
    }

    pub fn activity(mut self, activity: Activity) -> Self {
        self.activities.push(activity);
        self
    }

    pub fn build(self) -> Schedule {
        let mut schedule = Schedule::new(self.name);
        schedule.activities = self.activities;
        schedule
    }
}
