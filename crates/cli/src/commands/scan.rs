use anyhow::{Context, Result, anyhow};
use luascope_core::{Bindings, HaltReason, Position, ScanConfig, Scanner};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

use crate::display::print_scan_report;
use crate::utils::parse_filepath_with_location;

#[derive(Debug, Serialize)]
struct ScanReport<'a> {
    file: &'a str,
    offset: usize,
    position: Position,
    halt: HaltReason,
    steps: usize,
    bindings: &'a Bindings,
}

pub fn scan_command(
    filepath_arg: &str,
    offset: Option<usize>,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let (filepath, location) = parse_filepath_with_location(filepath_arg);
    debug!("Scanning file: {} (offset {:?}, location {:?})", filepath, offset, location);

    let path = Path::new(&filepath);
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let config = match config_path {
        Some(config_path) => ScanConfig::load_from_file(config_path)
            .with_context(|| format!("Failed to load config {}", config_path.display()))?,
        None => ScanConfig::discover(path)?,
    };

    let cursor = resolve_cursor(&source, offset, location)?;
    let outcome = Scanner::with_config(&source, &config).run_with_outcome(cursor);
    let position = Position::from_offset(&source, cursor);

    if json {
        let report = ScanReport {
            file: &filepath,
            offset: cursor,
            position,
            halt: outcome.halt,
            steps: outcome.steps,
            bindings: &outcome.bindings,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_scan_report(&filepath, cursor, position, &outcome);
    }

    Ok(())
}

/// An explicit offset wins, then a location, then the end of the file
fn resolve_cursor(source: &str, offset: Option<usize>, location: Option<Position>) -> Result<usize> {
    if let Some(offset) = offset {
        return Ok(offset);
    }

    match location {
        Some(position) => position.to_offset(source).ok_or_else(|| {
            anyhow!(luascope_core::Error::InvalidPosition {
                line: position.line + 1,
                character: position.character + 1,
            })
        }),
        None => Ok(source.len()),
    }
}
