use crate::calendar::stripes::StripePalette;
use crate::error::{config_error, env_error, EventResult};
use chrono_tz::Tz;
use dotenvy::dotenv;
use std::env::{self, VarError};
use std::path::PathBuf;
use tracing::{info, warn};

/// Default location of the stripe palette
pub const DEFAULT_STRIPES_PATH: &str = "config/stripes.toml";

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Zone for events whose entity has none of its own
    pub timezone: Tz,
    /// Where the stripe palette was looked up
    pub stripes_path: PathBuf,
    /// Stripe colors per entity bundle
    pub stripes: StripePalette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: Tz::UTC,
            stripes_path: PathBuf::from(DEFAULT_STRIPES_PATH),
            stripes: StripePalette::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment and the stripe palette file
    pub fn load() -> EventResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let timezone = match optional_var("CALENDAR_TIMEZONE")? {
            Some(name) => Self::parse_timezone(&name)?,
            None => Tz::UTC,
        };

        let stripes_path = optional_var("CALENDAR_STRIPES")?
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STRIPES_PATH));

        Self::with_stripes_from(timezone, stripes_path)
    }

    /// Build a config, reading the palette at `stripes_path` if it exists
    pub fn with_stripes_from(timezone: Tz, stripes_path: PathBuf) -> EventResult<Self> {
        let stripes = if stripes_path.exists() {
            StripePalette::load(&stripes_path)?
        } else {
            warn!(
                "No stripe palette at {}, events will have no stripes",
                stripes_path.display()
            );
            StripePalette::default()
        };

        info!("Using default timezone {}", timezone.name());

        Ok(Config {
            timezone,
            stripes_path,
            stripes,
        })
    }

    /// Parse an IANA timezone name such as `Europe/Helsinki`
    pub fn parse_timezone(name: &str) -> EventResult<Tz> {
        name.trim()
            .parse::<Tz>()
            .map_err(|_| config_error(&format!("Unknown timezone: {}", name)))
    }

    /// Save the stripe palette back to where it was loaded from
    pub fn save_stripes(&self) -> EventResult<()> {
        self.stripes.save(&self.stripes_path)
    }
}

fn optional_var(name: &str) -> EventResult<Option<String>> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(env_error(name)),
    }
}
