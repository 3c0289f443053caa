pub mod app;
pub mod message;
pub mod views;
pub mod widgets;
