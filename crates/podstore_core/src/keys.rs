//! Derived storage keys.

use crate::identifier::ResourceIdentifier;
use podstore_codec::DELIMITER;

/// Suffix of the metadata set key.
pub const META_SUFFIX: &str = "meta";

/// Suffix of the child-path set key.
pub const CHILDREN_SUFFIX: &str = "children";

/// Suffix of the content-type key.
pub const CONTENT_TYPE_SUFFIX: &str = "contentType";

/// The four keys one resource occupies.
///
/// For identifier `id`: the payload lives at `id`, the metadata set at
/// `id|meta`, the child paths at `id|children` and the content type at
/// `id|contentType`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceKeys {
    data: String,
    meta: String,
    children: String,
    content_type: String,
}

impl ResourceKeys {
    /// Derives the keys for `identifier`.
    #[must_use]
    pub fn for_identifier(identifier: &ResourceIdentifier) -> Self {
        let path = identifier.path();
        Self {
            data: path.to_string(),
            meta: suffixed(path, META_SUFFIX),
            children: suffixed(path, CHILDREN_SUFFIX),
            content_type: suffixed(path, CONTENT_TYPE_SUFFIX),
        }
    }

    /// Key of the payload.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Key of the metadata set.
    pub fn meta(&self) -> &str {
        &self.meta
    }

    /// Key of the child-path set.
    pub fn children(&self) -> &str {
        &self.children
    }

    /// Key of the content type.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// All four keys, for deletion.
    pub fn all(&self) -> Vec<String> {
        vec![
            self.meta.clone(),
            self.children.clone(),
            self.content_type.clone(),
            self.data.clone(),
        ]
    }
}

fn suffixed(path: &str, suffix: &str) -> String {
    format!("{path}{DELIMITER}{suffix}")
}
