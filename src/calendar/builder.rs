use crate::config::Config;
use crate::error::EventResult;
use chrono_tz::Tz;
use tracing::debug;

use super::entity::ContentEntity;
use super::models::CalendarEvent;
use super::stripes::StripePalette;

/// Fills calendar events from content entities
#[derive(Debug, Clone)]
pub struct EventBuilder {
    default_timezone: Tz,
    palette: StripePalette,
}

impl EventBuilder {
    pub fn new(default_timezone: Tz, palette: StripePalette) -> Self {
        Self {
            default_timezone,
            palette,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.timezone, config.stripes.clone())
    }

    pub fn default_timezone(&self) -> Tz {
        self.default_timezone
    }

    pub fn palette(&self) -> &StripePalette {
        &self.palette
    }

    /// Build one event. Fields the entity can't provide stay unset.
    pub fn build<E: ContentEntity + ?Sized>(&self, entity: &E) -> EventResult<CalendarEvent> {
        let mut event = CalendarEvent::new();
        event.set_entity_id(entity.id());
        event.set_entity_type_id(entity.entity_type_id());

        if let Some(bundle) = entity.bundle() {
            event.set_event_type(bundle);
        }
        if let Some(label) = entity.label() {
            event.set_title(label);
        }
        if let Some(url) = entity.url() {
            event.set_url(url.as_str());
        }
        if let Some(start) = entity.start_date()? {
            event.set_start_date(start);
        }
        if let Some(end) = entity.end_date()? {
            event.set_end_date(end);
        }

        event.set_timezone(entity.timezone().unwrap_or(self.default_timezone));
        self.palette.apply(&mut event);

        debug!(
            "Built event for {}:{} ({:?})",
            entity.entity_type_id(),
            entity.id(),
            event.title()
        );

        Ok(event)
    }

    /// Build events in order, stopping at the first entity that fails
    pub fn build_all<E: ContentEntity>(&self, entities: &[E]) -> EventResult<Vec<CalendarEvent>> {
        entities.iter().map(|entity| self.build(entity)).collect()
    }
}
