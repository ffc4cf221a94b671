//! Resource identifiers and their container hierarchy.

use crate::error::{StoreError, StoreResult};
use std::fmt;

/// Identifies a resource by its absolute path.
///
/// A path ending in `/` names a container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceIdentifier {
    path: String,
}

impl ResourceIdentifier {
    /// Creates an identifier from a path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns true if this identifier names a container.
    #[must_use]
    pub fn is_container(&self) -> bool {
        self.path.ends_with('/')
    }
}

impl fmt::Display for ResourceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl From<&str> for ResourceIdentifier {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for ResourceIdentifier {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

/// Maps identifiers onto a container hierarchy.
pub trait IdentifierStrategy: Send + Sync {
    /// Returns true if `identifier` belongs to this namespace.
    fn supports_identifier(&self, identifier: &ResourceIdentifier) -> bool;

    /// Returns true if `identifier` is the root container.
    fn is_root_container(&self, identifier: &ResourceIdentifier) -> bool;

    /// Returns the container directly holding `identifier`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidIdentifier`] for unsupported identifiers
    /// and for the root container.
    fn parent_container(&self, identifier: &ResourceIdentifier)
        -> StoreResult<ResourceIdentifier>;

    /// Returns the parent container, or `None` for the root.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidIdentifier`] for unsupported identifiers.
    fn parent_of(&self, identifier: &ResourceIdentifier) -> StoreResult<Option<ResourceIdentifier>> {
        if self.is_root_container(identifier) {
            Ok(None)
        } else {
            self.parent_container(identifier).map(Some)
        }
    }
}

/// A single namespace rooted at one base URL.
///
/// The base URL is the root container; every other identifier under it has
/// the container formed by dropping its last path segment as parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleRootIdentifierStrategy {
    base_url: String,
}

impl SingleRootIdentifierStrategy {
    /// Creates a strategy rooted at `base_url`. A trailing `/` is added if
    /// missing.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    /// Returns the root container URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the root container identifier.
    #[must_use]
    pub fn root(&self) -> ResourceIdentifier {
        ResourceIdentifier::new(self.base_url.clone())
    }
}

impl IdentifierStrategy for SingleRootIdentifierStrategy {
    fn supports_identifier(&self, identifier: &ResourceIdentifier) -> bool {
        identifier.path().starts_with(&self.base_url)
    }

    fn is_root_container(&self, identifier: &ResourceIdentifier) -> bool {
        identifier.path() == self.base_url
    }

    fn parent_container(
        &self,
        identifier: &ResourceIdentifier,
    ) -> StoreResult<ResourceIdentifier> {
        if !self.supports_identifier(identifier) {
            return Err(StoreError::invalid_identifier(
                identifier,
                format!("not within {}", self.base_url),
            ));
        }
        if self.is_root_container(identifier) {
            return Err(StoreError::invalid_identifier(
                identifier,
                "the root container has no parent",
            ));
        }

        let path = identifier.path();
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        let cut = trimmed
            .rfind('/')
            .ok_or_else(|| StoreError::invalid_identifier(identifier, "no parent segment"))?;
        Ok(ResourceIdentifier::new(&trimmed[..=cut]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy() -> SingleRootIdentifierStrategy {
        SingleRootIdentifierStrategy::new("http://test.com/")
    }

    #[test]
    fn container_detection() {
        assert!(ResourceIdentifier::new("http://test.com/container/").is_container());
        assert!(!ResourceIdentifier::new("http://test.com/container").is_container());
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let strategy = SingleRootIdentifierStrategy::new("http://test.com");
        assert_eq!(strategy.base_url(), "http://test.com/");
        assert!(strategy.is_root_container(&"http://test.com/".into()));
    }

    #[test]
    fn supports_identifiers_under_base() {
        let strategy = strategy();
        assert!(strategy.supports_identifier(&"http://test.com/".into()));
        assert!(strategy.supports_identifier(&"http://test.com/a/b".into()));
        assert!(!strategy.supports_identifier(&"http://other.com/a".into()));
    }

    #[test]
    fn parent_of_document_and_container() {
        let strategy = strategy();
        assert_eq!(
            strategy.parent_container(&"http://test.com/resource".into()).unwrap(),
            ResourceIdentifier::new("http://test.com/")
        );
        assert_eq!(
            strategy.parent_container(&"http://test.com/a/b/".into()).unwrap(),
            ResourceIdentifier::new("http://test.com/a/")
        );
        assert_eq!(
            strategy.parent_container(&"http://test.com/a/b".into()).unwrap(),
            ResourceIdentifier::new("http://test.com/a/")
        );
    }

    #[test]
    fn root_has_no_parent() {
        let strategy = strategy();
        let root = strategy.root();
        assert!(strategy.parent_of(&root).unwrap().is_none());
        assert!(matches!(
            strategy.parent_container(&root),
            Err(StoreError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn foreign_identifier_is_rejected() {
        let result = strategy().parent_of(&"http://other.com/doc".into());
        assert!(matches!(result, Err(StoreError::InvalidIdentifier { .. })));
    }
}
