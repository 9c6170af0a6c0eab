pub mod calendar;
pub mod cli;
pub mod config;
pub mod error;
pub mod startup;

pub use calendar::{CalendarEvent, ContentEntity, EntityRow, EventBuilder, Stripe, StripePalette};
pub use error::{Error, EventResult};
