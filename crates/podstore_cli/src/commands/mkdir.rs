//! Mkdir command implementation.

use super::CommandResult;
use podstore_core::{DataAccessor, RepresentationMetadata, ResourceIdentifier};
use tracing::info;

/// Creates a container and links it into its parent.
pub fn run(accessor: &dyn DataAccessor, container: &ResourceIdentifier) -> CommandResult {
    if !container.is_container() {
        return Err(format!("{container} is not a container; container paths end in '/'").into());
    }
    accessor.write_container(container, &RepresentationMetadata::for_resource(container))?;
    info!(identifier = %container, "created container");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{accessor, BASE};

    #[test]
    fn mkdir_links_into_parent() {
        let accessor = accessor();
        let id = ResourceIdentifier::new(format!("{BASE}photos/"));
        run(&accessor, &id).unwrap();

        let children: Vec<_> = accessor.get_children(&BASE.into()).unwrap().collect();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].identifier().to_string(), id.path());
    }

    #[test]
    fn mkdir_requires_trailing_slash() {
        let id = ResourceIdentifier::new(format!("{BASE}photos"));
        assert!(run(&accessor(), &id).is_err());
    }
}
