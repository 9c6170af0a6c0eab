use crate::error::{entity_error, EventResult};
use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use url::Url;

/// Content entity an event can be derived from.
///
/// Implemented by whatever owns the entities. Dates come back already placed
/// in a zone; the event builder never converts them.
pub trait ContentEntity {
    fn id(&self) -> u64;

    fn entity_type_id(&self) -> &str;

    /// Bundle of the entity, e.g. `article`
    fn bundle(&self) -> Option<&str>;

    /// Human-readable label, used as the event title
    fn label(&self) -> Option<&str>;

    /// Canonical public url
    fn url(&self) -> Option<Url>;

    /// Zone the entity's dates are stored in, if it has its own
    fn timezone(&self) -> Option<Tz>;

    fn start_date(&self) -> EventResult<Option<DateTime<Tz>>>;

    fn end_date(&self) -> EventResult<Option<DateTime<Tz>>>;
}

/// Plain entity row, as exported by a content query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRow {
    pub id: u64,
    pub entity_type_id: String,
    #[serde(default)]
    pub bundle: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub url: Option<Url>,
    #[serde(default)]
    pub timezone: Option<Tz>,
    /// Wall-clock start in the row's zone
    #[serde(default)]
    pub start: Option<NaiveDateTime>,
    /// Wall-clock end in the row's zone
    #[serde(default)]
    pub end: Option<NaiveDateTime>,
}

impl EntityRow {
    pub fn new(id: u64, entity_type_id: impl Into<String>) -> Self {
        Self {
            id,
            entity_type_id: entity_type_id.into(),
            bundle: None,
            label: None,
            url: None,
            timezone: None,
            start: None,
            end: None,
        }
    }

    fn resolve(&self, local: Option<NaiveDateTime>) -> EventResult<Option<DateTime<Tz>>> {
        let Some(local) = local else {
            return Ok(None);
        };
        let tz = self.timezone.unwrap_or(Tz::UTC);
        resolve_local(&tz, &local).map(Some)
    }
}

impl ContentEntity for EntityRow {
    fn id(&self) -> u64 {
        self.id
    }

    fn entity_type_id(&self) -> &str {
        &self.entity_type_id
    }

    fn bundle(&self) -> Option<&str> {
        self.bundle.as_deref()
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn url(&self) -> Option<Url> {
        self.url.clone()
    }

    fn timezone(&self) -> Option<Tz> {
        self.timezone
    }

    fn start_date(&self) -> EventResult<Option<DateTime<Tz>>> {
        self.resolve(self.start)
    }

    fn end_date(&self) -> EventResult<Option<DateTime<Tz>>> {
        self.resolve(self.end)
    }
}

/// Place a wall-clock time in a zone
pub fn resolve_local(tz: &Tz, local: &NaiveDateTime) -> EventResult<DateTime<Tz>> {
    match tz.from_local_datetime(local) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(_, _) => Err(entity_error(&format!(
            "Ambiguous local time {} in {}",
            local,
            tz.name()
        ))),
        LocalResult::None => Err(entity_error(&format!(
            "Invalid local time {} in {}",
            local,
            tz.name()
        ))),
    }
}
