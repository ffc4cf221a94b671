//! Meta command implementation.

use super::{ntriples_line, CommandResult, OutputFormat, Statement};
use podstore_core::{DataAccessor, ResourceIdentifier};
use serde::Serialize;
use std::io::Write;

/// Metadata of one resource.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataOutput {
    /// Resource identifier.
    pub identifier: String,
    /// Declared content type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Every metadata statement.
    pub statements: Vec<Statement>,
}

/// Prints a resource's metadata.
pub fn run(
    accessor: &dyn DataAccessor,
    id: &ResourceIdentifier,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CommandResult {
    let metadata = accessor.get_metadata(id)?;

    match format {
        OutputFormat::Json => {
            let result = MetadataOutput {
                identifier: id.to_string(),
                content_type: metadata.content_type().map(str::to_string),
                statements: metadata.quads().iter().map(Statement::from).collect(),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
        }
        OutputFormat::Text => {
            for quad in metadata.quads() {
                writeln!(out, "{}", ntriples_line(quad))?;
            }
        }
    }
    Ok(())
}
