//! Rm command implementation.

use super::CommandResult;
use podstore_core::{DataAccessor, ResourceIdentifier};
use tracing::info;

/// Deletes a resource and unlinks it from its parent.
pub fn run(accessor: &dyn DataAccessor, id: &ResourceIdentifier) -> CommandResult {
    accessor.delete_resource(id)?;
    info!(identifier = %id, "deleted resource");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{accessor, BASE};
    use podstore_core::{DataStream, RepresentationMetadata};

    #[test]
    fn rm_removes_document() {
        let accessor = accessor();
        let id = ResourceIdentifier::new(format!("{BASE}a"));
        accessor
            .write_document(
                &id,
                DataStream::from_bytes("x"),
                &RepresentationMetadata::for_resource(&id).with_content_type("text/plain"),
            )
            .unwrap();

        run(&accessor, &id).unwrap();
        assert!(accessor.get_data(&id).unwrap_err().is_not_found());
        assert_eq!(accessor.get_children(&BASE.into()).unwrap().len(), 0);
    }
}
