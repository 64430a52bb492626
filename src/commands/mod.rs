pub mod calendar;
pub mod config;
pub mod events;
pub mod open;
pub mod share;
