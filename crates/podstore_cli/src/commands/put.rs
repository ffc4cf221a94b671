//! Put command implementation.

use super::CommandResult;
use podstore_codec::decode_triple;
use podstore_core::{
    DataAccessor, DataStream, RepresentationMetadata, ResourceIdentifier, INTERNAL_QUADS,
};
use std::io::Read;
use tracing::info;

/// Content type used when none is given.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Stores a document read from `input`.
///
/// With content type `internal/quads` every non-blank input line is one
/// encoded triple (`subject|predicate|object`); otherwise the input is
/// stored as bytes.
pub fn run(
    accessor: &dyn DataAccessor,
    id: &ResourceIdentifier,
    content_type: &str,
    mut input: impl Read + Send + 'static,
) -> CommandResult {
    if id.is_container() {
        return Err(format!("{id} is a container; use mkdir").into());
    }

    let data = if content_type == INTERNAL_QUADS {
        let mut text = String::new();
        input.read_to_string(&mut text)?;
        let quads = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(decode_triple)
            .collect::<Result<Vec<_>, _>>()?;
        DataStream::from_quads(quads)
    } else {
        DataStream::from_reader(input)
    };

    let metadata = RepresentationMetadata::for_resource(id).with_content_type(content_type);
    accessor.write_document(id, data, &metadata)?;
    info!(identifier = %id, content_type, "stored document");
    Ok(())
}
