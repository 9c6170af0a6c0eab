use crate::calendar::{CalendarEvent, EntityRow, EventBuilder};
use crate::config::Config;
use crate::error::{Error, EventResult};
use clap::Parser;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Turn content entity rows into calendar event records
#[derive(Debug, Parser)]
#[command(name = "calendar-events", version)]
pub struct Cli {
    /// Print the JSON schema of an event record and exit
    #[arg(long, conflicts_with = "rows")]
    pub schema: bool,

    /// JSON array of entity rows, read from stdin when omitted
    pub rows: Option<PathBuf>,
}

/// Read entity rows from a file, or stdin when no path is given
pub fn read_rows(path: Option<&Path>) -> EventResult<Vec<EntityRow>> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| Error::Read {
                path: path.to_path_buf(),
                source,
            })?;
            parse_rows(BufReader::new(file))
        }
        None => parse_rows(io::stdin().lock()),
    }
}

/// Parse a JSON array of entity rows
pub fn parse_rows<R: Read>(reader: R) -> EventResult<Vec<EntityRow>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Pretty-print a value as JSON followed by a newline
pub fn write_json<W: Write, T: Serialize>(mut writer: W, value: &T) -> EventResult<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// Write the JSON schema of an event record
pub fn write_schema<W: Write>(writer: W) -> EventResult<()> {
    let schema = schemars::schema_for!(CalendarEvent);
    write_json(writer, &schema)
}

/// Build events for the rows and write them as a JSON array
pub fn export_events<W: Write>(
    config: &Config,
    rows: &[EntityRow],
    writer: W,
) -> EventResult<usize> {
    info!("Building events from {} entity row(s)", rows.len());
    let events = EventBuilder::from_config(config).build_all(rows)?;
    write_json(writer, &events)?;
    Ok(events.len())
}
