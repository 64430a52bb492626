//! Core logic for the plic cultural events calendar.
//!
//! The crate glues an externally supplied event list to calendar navigation
//! and shareable URLs:
//! - `event_id` derives short, stable ids used in deep links
//! - `heatmap` buckets events per calendar day and classifies intensity
//! - `selection` keeps the selected day and open event in sync with the URL
//! - `filter` produces the list shown for the selected day
//!
//! Everything else (`event`, `catalog`, `config`, `month_view`) supports
//! those four at the input and rendering boundaries.

pub mod calendar_day;
pub mod catalog;
pub mod config;
pub mod error;
pub mod event;
pub mod event_id;
pub mod filter;
pub mod heatmap;
pub mod month_view;
pub mod selection;

pub use calendar_day::CalendarDay;
pub use catalog::EventCatalog;
pub use event::{Category, Event, EventRecord};
pub use event_id::{EventId, identify, resolve};
pub use filter::visible_events;
pub use heatmap::{HeatTier, Heatmap, aggregate, tier};
pub use selection::{AutoOpen, OpenEvent, SelectionState};
