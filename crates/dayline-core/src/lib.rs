pub mod activity;
pub mod clock;
pub mod error;
pub mod lanes;
pub mod schedule;
pub mod time;
pub mod viewport;
