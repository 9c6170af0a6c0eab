use calendar_events::cli::{self, Cli};
use calendar_events::startup;
use clap::Parser;
use std::io;

fn main() -> miette::Result<()> {
    let args = Cli::parse();

    // Initialize logging
    startup::init_logging()?;

    if args.schema {
        cli::write_schema(io::stdout().lock())?;
        return Ok(());
    }

    let config = startup::load_config()?;
    let rows = cli::read_rows(args.rows.as_deref())?;
    cli::export_events(&config, &rows, io::stdout().lock())?;

    Ok(())
}
