use crate::error::EventResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::models::CalendarEvent;

/// Colored category marker shown next to an event in the rendered calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stripe {
    pub label: String,
    pub hex: String,
}

impl Stripe {
    pub fn new(label: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            hex: hex.into(),
        }
    }
}

/// Stripes keyed by entity bundle, with an optional fallback.
///
/// Loaded from a TOML file:
///
/// ```toml
/// [default]
/// label = "Other"
/// hex = "#999999"
///
/// [types.article]
/// label = "Article"
/// hex = "#3366ff"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StripePalette {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Stripe>,
    #[serde(default)]
    pub types: BTreeMap<String, Stripe>,
}

impl StripePalette {
    /// Create an empty palette
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a palette from TOML
    pub fn from_toml_str(content: &str) -> EventResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a palette file
    pub fn load(path: &Path) -> EventResult<Self> {
        let content = fs::read_to_string(path)?;
        let palette = Self::from_toml_str(&content)?;
        info!(
            "Loaded {} stripe(s) from {}",
            palette.len(),
            path.display()
        );
        Ok(palette)
    }

    /// Save the palette as TOML, creating parent directories as needed
    pub fn save(&self, path: &Path) -> EventResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let toml_str = toml::to_string(self)?;
        fs::write(path, toml_str)?;

        Ok(())
    }

    /// Add or replace the stripe for a bundle
    pub fn insert(&mut self, bundle: impl Into<String>, stripe: Stripe) -> Option<Stripe> {
        self.types.insert(bundle.into(), stripe)
    }

    /// Stripe configured for exactly this bundle
    pub fn get(&self, bundle: &str) -> Option<&Stripe> {
        self.types.get(bundle)
    }

    /// Stripe for the bundle, falling back to the default
    pub fn resolve(&self, bundle: Option<&str>) -> Option<&Stripe> {
        bundle
            .and_then(|b| self.types.get(b))
            .or(self.default.as_ref())
    }

    /// Set the event's stripe from its type. Leaves the event alone when nothing matches.
    pub fn apply(&self, event: &mut CalendarEvent) -> bool {
        match self.resolve(event.event_type()) {
            Some(stripe) => {
                debug!(
                    "Applying stripe '{}' ({}) to event type {:?}",
                    stripe.label,
                    stripe.hex,
                    event.event_type()
                );
                event.set_stripe(stripe);
                true
            }
            None => false,
        }
    }

    /// Number of stripes, the default included
    pub fn len(&self) -> usize {
        self.types.len() + usize::from(self.default.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.default.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PALETTE: &str = r##"
[default]
label = "Other"
hex = "#999999"

[types.article]
label = "Article"
hex = "#3366ff"

[types.meeting]
label = "Meetings"
hex = "#ff0000"
"##;

    #[test]
    fn test_parse_palette() {
        let palette = StripePalette::from_toml_str(PALETTE).unwrap();

        assert_eq!(palette.len(), 3);
        assert_eq!(palette.default, Some(Stripe::new("Other", "#999999")));
        assert_eq!(
            palette.get("meeting"),
            Some(&Stripe::new("Meetings", "#ff0000"))
        );
        assert_eq!(palette.get("page"), None);
    }

    #[test]
    fn test_empty_palette() {
        let palette = StripePalette::from_toml_str("").unwrap();
        assert!(palette.is_empty());
        assert_eq!(palette.len(), 0);
        assert_eq!(palette.resolve(Some("article")), None);
    }

    #[test]
    fn test_default_only_palette() {
        let palette =
            StripePalette::from_toml_str("[default]\nlabel = \"Other\"\nhex = \"#999999\"\n")
                .unwrap();

        assert_eq!(palette.len(), 1);
        assert!(!palette.is_empty());
        assert_eq!(palette.is_empty(), palette.len() == 0);
        assert_eq!(palette.resolve(Some("page")).unwrap().label, "Other");
    }

    #[test]
    fn test_malformed_palette_is_a_serialization_error() {
        let result = StripePalette::from_toml_str("[types.article]\nlabel = 3\n");
        assert!(matches!(result, Err(crate::error::Error::Serialization(_))));
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let palette = StripePalette::from_toml_str(PALETTE).unwrap();

        assert_eq!(palette.resolve(Some("article")).unwrap().label, "Article");
        assert_eq!(palette.resolve(Some("page")).unwrap().label, "Other");
        assert_eq!(palette.resolve(None).unwrap().label, "Other");
    }

    #[test_log::test]
    fn test_apply_sets_both_stripe_fields() {
        let palette = StripePalette::from_toml_str(PALETTE).unwrap();
        let mut event = CalendarEvent::new();
        event.set_event_type("meeting");

        assert!(palette.apply(&mut event));
        assert_eq!(event.stripe_label(), Some("Meetings"));
        assert_eq!(event.stripe_hex(), Some("#ff0000"));
    }

    #[test_log::test]
    fn test_apply_without_match_leaves_event_alone() {
        let mut palette = StripePalette::new();
        palette.insert("article", Stripe::new("Article", "#3366ff"));

        let mut event = CalendarEvent::new();
        event.set_event_type("page");
        event.set_stripe_label("Custom");

        assert!(!palette.apply(&mut event));
        assert_eq!(event.stripe_label(), Some("Custom"));
        assert_eq!(event.stripe_hex(), None);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("stripes.toml");

        let mut palette = StripePalette::new();
        palette.default = Some(Stripe::new("Other", "#999999"));
        palette.insert("article", Stripe::new("Article", "#3366ff"));
        palette.save(&path).unwrap();

        let loaded = StripePalette::load(&path).unwrap();
        assert_eq!(loaded, palette);
        assert_eq!(loaded.len(), 2);
    }
}
