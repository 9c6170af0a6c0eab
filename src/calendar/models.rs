use chrono::DateTime;
use chrono_tz::Tz;
use schemars::JsonSchema;
use serde::Serialize;

use super::stripes::Stripe;

/// A single calendar event derived from a content entity.
///
/// Every field starts out unset and is filled in one setter at a time by
/// whatever builds the event. Setters overwrite unconditionally; nothing here
/// checks that the values make sense together.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Id of the content entity behind this event
    entity_id: Option<u64>,
    /// Type id of the content entity, e.g. `node`
    entity_type_id: Option<String>,
    /// Secondary type label, usually the entity bundle
    #[serde(rename = "type")]
    event_type: Option<String>,
    #[schemars(with = "Option<String>")]
    start_date: Option<DateTime<Tz>>,
    #[schemars(with = "Option<String>")]
    end_date: Option<DateTime<Tz>>,
    /// IANA name of the zone the dates are meant to be read in
    #[schemars(with = "Option<String>")]
    timezone: Option<Tz>,
    title: Option<String>,
    /// Public url of the event's canonical page
    url: Option<String>,
    stripe_label: Option<String>,
    /// Stripe color, e.g. `#ff0000`
    stripe_hex: Option<String>,
}

impl CalendarEvent {
    /// Create an event with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entity_id(&self) -> Option<u64> {
        self.entity_id
    }

    pub fn set_entity_id(&mut self, entity_id: u64) {
        self.entity_id = Some(entity_id);
    }

    pub fn entity_type_id(&self) -> Option<&str> {
        self.entity_type_id.as_deref()
    }

    pub fn set_entity_type_id(&mut self, entity_type_id: impl Into<String>) {
        self.entity_type_id = Some(entity_type_id.into());
    }

    pub fn event_type(&self) -> Option<&str> {
        self.event_type.as_deref()
    }

    pub fn set_event_type(&mut self, event_type: impl Into<String>) {
        self.event_type = Some(event_type.into());
    }

    pub fn start_date(&self) -> Option<DateTime<Tz>> {
        self.start_date
    }

    pub fn set_start_date(&mut self, start_date: DateTime<Tz>) {
        self.start_date = Some(start_date);
    }

    pub fn end_date(&self) -> Option<DateTime<Tz>> {
        self.end_date
    }

    pub fn set_end_date(&mut self, end_date: DateTime<Tz>) {
        self.end_date = Some(end_date);
    }

    pub fn timezone(&self) -> Option<Tz> {
        self.timezone
    }

    pub fn set_timezone(&mut self, timezone: Tz) {
        self.timezone = Some(timezone);
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = Some(url.into());
    }

    pub fn stripe_label(&self) -> Option<&str> {
        self.stripe_label.as_deref()
    }

    pub fn set_stripe_label(&mut self, stripe_label: impl Into<String>) {
        self.stripe_label = Some(stripe_label.into());
    }

    pub fn stripe_hex(&self) -> Option<&str> {
        self.stripe_hex.as_deref()
    }

    pub fn set_stripe_hex(&mut self, stripe_hex: impl Into<String>) {
        self.stripe_hex = Some(stripe_hex.into());
    }

    /// Stripe made from the label and hex fields, if both are set
    pub fn stripe(&self) -> Option<Stripe> {
        match (self.stripe_label.as_ref(), self.stripe_hex.as_ref()) {
            (Some(label), Some(hex)) => Some(Stripe::new(label.clone(), hex.clone())),
            _ => None,
        }
    }

    /// Set both stripe fields from a palette entry
    pub fn set_stripe(&mut self, stripe: &Stripe) {
        self.set_stripe_label(stripe.label.clone());
        self.set_stripe_hex(stripe.hex.clone());
    }
}
