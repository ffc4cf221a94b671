//! Get command implementation.

use super::{ntriples_line, CommandResult};
use podstore_core::{DataAccessor, DataStream, ResourceIdentifier};
use std::io::{self, Write};

/// Writes a document's payload to `out`: raw bytes, or one N-Triples line
/// per statement.
pub fn run(accessor: &dyn DataAccessor, id: &ResourceIdentifier, out: &mut dyn Write) -> CommandResult {
    match accessor.get_data(id)? {
        DataStream::Quads(quads) => {
            for quad in quads {
                writeln!(out, "{}", ntriples_line(&quad))?;
            }
        }
        DataStream::Bytes(mut reader) => {
            io::copy(&mut reader, out)?;
        }
    }
    Ok(())
}
