//! Ls command implementation.

use super::{CommandResult, OutputFormat};
use podstore_core::{DataAccessor, ResourceIdentifier};
use std::io::Write;

/// Lists the children of a container.
pub fn run(
    accessor: &dyn DataAccessor,
    container: &ResourceIdentifier,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CommandResult {
    let children: Vec<String> = accessor
        .get_children(container)?
        .map(|child| child.identifier().to_string())
        .collect();

    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&children)?)?,
        OutputFormat::Text => {
            for child in &children {
                writeln!(out, "{child}")?;
            }
        }
    }
    Ok(())
}
