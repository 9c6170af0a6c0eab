pub mod builder;
pub mod entity;
pub mod models;
pub mod stripes;

pub use builder::EventBuilder;
pub use entity::{ContentEntity, EntityRow};
pub use models::CalendarEvent;
pub use stripes::{Stripe, StripePalette};
