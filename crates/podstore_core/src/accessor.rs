//! Data accessors and the key-value implementation.

use crate::config::AccessorConfig;
use crate::error::{StoreError, StoreResult};
use crate::identifier::{IdentifierStrategy, ResourceIdentifier};
use crate::init::ClientInit;
use crate::keys::ResourceKeys;
use crate::metadata::{RepresentationMetadata, INTERNAL_QUADS};
use crate::payload::{DataStream, Payload};
use podstore_codec::{decode_set, encode_set, CodecError, NamedNode};
use podstore_kv::KeyValueClient;
use std::sync::Arc;
use tracing::debug;

/// Storage for resource data and metadata.
///
/// Implementations must be `Send + Sync`; a store shares one accessor
/// between all requests.
pub trait DataAccessor: Send + Sync {
    /// Checks whether this accessor can store a resource with `metadata`.
    ///
    /// # Errors
    ///
    /// Returns an error describing why the resource is not supported.
    fn can_handle(&self, metadata: &RepresentationMetadata) -> StoreResult<()>;

    /// Returns the payload of the document at `identifier`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if there is no payload.
    fn get_data(&self, identifier: &ResourceIdentifier) -> StoreResult<DataStream>;

    /// Returns the metadata of the resource at `identifier`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no metadata is stored.
    fn get_metadata(&self, identifier: &ResourceIdentifier)
        -> StoreResult<RepresentationMetadata>;

    /// Lists the children of the container at `identifier`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails.
    fn get_children(&self, identifier: &ResourceIdentifier) -> StoreResult<Children>;

    /// Writes a document: metadata, parent link, content type, then payload.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotImplemented`] if a statement payload names a
    /// graph other than the default one. Steps before the payload write are
    /// not rolled back.
    fn write_document(
        &self,
        identifier: &ResourceIdentifier,
        data: DataStream,
        metadata: &RepresentationMetadata,
    ) -> StoreResult<()>;

    /// Writes a container: metadata and parent link.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails.
    fn write_container(
        &self,
        identifier: &ResourceIdentifier,
        metadata: &RepresentationMetadata,
    ) -> StoreResult<()>;

    /// Deletes a resource and unlinks it from its parent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails.
    fn delete_resource(&self, identifier: &ResourceIdentifier) -> StoreResult<()>;
}

/// Children of a container, one lightweight metadata record per child path.
#[derive(Debug)]
pub struct Children {
    paths: std::vec::IntoIter<String>,
}

impl Children {
    fn new(mut paths: Vec<String>) -> Self {
        paths.sort();
        Self {
            paths: paths.into_iter(),
        }
    }
}

impl Iterator for Children {
    type Item = RepresentationMetadata;

    fn next(&mut self) -> Option<Self::Item> {
        self.paths
            .next()
            .map(|path| RepresentationMetadata::new(NamedNode::new(path)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.paths.size_hint()
    }
}

impl ExactSizeIterator for Children {}

/// A [`DataAccessor`] over a Redis-style key-value client.
///
/// Each resource occupies the keys described by [`ResourceKeys`]. The
/// client is connected on first use; see [`ClientInit`].
///
/// # Example
///
/// ```rust
/// use podstore_core::{
///     DataAccessor, DataStream, KvDataAccessor, RepresentationMetadata,
///     ResourceIdentifier, SingleRootIdentifierStrategy,
/// };
/// use podstore_kv::InMemoryClient;
///
/// let accessor = KvDataAccessor::new(
///     InMemoryClient::new(),
///     SingleRootIdentifierStrategy::new("http://test.com/"),
/// );
/// let id = ResourceIdentifier::new("http://test.com/hello");
/// let metadata = RepresentationMetadata::for_resource(&id).with_content_type("text/plain");
///
/// accessor
///     .write_document(&id, DataStream::from_bytes("hi"), &metadata)
///     .unwrap();
/// let data = accessor.get_data(&id).unwrap().into_bytes().unwrap();
/// assert_eq!(data, b"hi");
/// ```
pub struct KvDataAccessor<C: KeyValueClient> {
    client: C,
    identifier_strategy: Arc<dyn IdentifierStrategy>,
    init: ClientInit,
}

impl<C: KeyValueClient> KvDataAccessor<C> {
    /// Creates an accessor with the default configuration.
    pub fn new(client: C, identifier_strategy: impl IdentifierStrategy + 'static) -> Self {
        Self::with_config(client, identifier_strategy, &AccessorConfig::default())
    }

    /// Creates an accessor with a custom configuration.
    pub fn with_config(
        client: C,
        identifier_strategy: impl IdentifierStrategy + 'static,
        config: &AccessorConfig,
    ) -> Self {
        Self::with_shared_strategy(client, Arc::new(identifier_strategy), config)
    }

    /// Creates an accessor sharing an identifier strategy with its host.
    pub fn with_shared_strategy(
        client: C,
        identifier_strategy: Arc<dyn IdentifierStrategy>,
        config: &AccessorConfig,
    ) -> Self {
        Self {
            client,
            identifier_strategy,
            init: ClientInit::new(config),
        }
    }

    /// Returns the backing client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Returns true once the backing client has been connected.
    pub fn is_initialized(&self) -> bool {
        self.init.is_initialized()
    }

    fn ensure_client(&self) -> StoreResult<()> {
        self.init.ensure(|| self.client.connect())
    }

    fn get_string(&self, key: &str) -> StoreResult<Option<String>> {
        let Some(bytes) = self.client.get(key)? else {
            return Ok(None);
        };
        String::from_utf8(bytes).map(Some).map_err(|e| {
            CodecError::malformed(
                String::from_utf8_lossy(e.as_bytes()),
                format!("value at {key} is not valid UTF-8"),
            )
            .into()
        })
    }

    fn write_metadata(
        &self,
        keys: &ResourceKeys,
        metadata: &RepresentationMetadata,
    ) -> StoreResult<()> {
        let members = encode_set(metadata.quads())?;
        self.client.replace_members(keys.meta(), &members)?;
        Ok(())
    }

    fn link_to_parent(
        &self,
        identifier: &ResourceIdentifier,
        parent: Option<&ResourceIdentifier>,
    ) -> StoreResult<()> {
        if let Some(parent) = parent {
            let parent_keys = ResourceKeys::for_identifier(parent);
            self.client
                .add_member(parent_keys.children(), identifier.path())?;
        }
        Ok(())
    }
}

impl<C: KeyValueClient> std::fmt::Debug for KvDataAccessor<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KvDataAccessor")
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}

impl<C: KeyValueClient> DataAccessor for KvDataAccessor<C> {
    fn can_handle(&self, _metadata: &RepresentationMetadata) -> StoreResult<()> {
        Ok(())
    }

    fn get_data(&self, identifier: &ResourceIdentifier) -> StoreResult<DataStream> {
        self.ensure_client()?;
        let keys = ResourceKeys::for_identifier(identifier);
        let content_type = self.get_string(keys.content_type())?;
        debug!(%identifier, content_type = ?content_type, "reading data");

        if content_type.as_deref() == Some(INTERNAL_QUADS) {
            let members = self.client.members(keys.data())?;
            // A present set holding only the sentinel is an empty document.
            if !members.is_empty() {
                return Ok(DataStream::from_quads(decode_set(&members)?));
            }
        } else if let Some(bytes) = self.client.get(keys.data())? {
            return Ok(DataStream::from_bytes(bytes));
        }
        Err(StoreError::not_found(identifier))
    }

    fn get_metadata(
        &self,
        identifier: &ResourceIdentifier,
    ) -> StoreResult<RepresentationMetadata> {
        self.ensure_client()?;
        let keys = ResourceKeys::for_identifier(identifier);
        debug!(%identifier, "reading metadata");

        let members = self.client.members(keys.meta())?;
        if members.is_empty() {
            return Err(StoreError::not_found(identifier));
        }
        let mut metadata =
            RepresentationMetadata::for_resource(identifier).with_quads(decode_set(&members)?);

        if !identifier.is_container() {
            if let Some(content_type) = self.get_string(keys.content_type())? {
                metadata.set_content_type(Some(content_type));
            }
        }
        Ok(metadata)
    }

    fn get_children(&self, identifier: &ResourceIdentifier) -> StoreResult<Children> {
        self.ensure_client()?;
        let keys = ResourceKeys::for_identifier(identifier);
        let paths = self.client.members(keys.children())?;
        debug!(%identifier, count = paths.len(), "listing children");
        Ok(Children::new(paths))
    }

    fn write_document(
        &self,
        identifier: &ResourceIdentifier,
        data: DataStream,
        metadata: &RepresentationMetadata,
    ) -> StoreResult<()> {
        self.ensure_client()?;
        let keys = ResourceKeys::for_identifier(identifier);
        let parent = self.identifier_strategy.parent_of(identifier)?;
        let content_type = metadata.content_type();
        debug!(%identifier, content_type = ?content_type, "writing document");

        self.write_metadata(&keys, metadata)?;
        self.link_to_parent(identifier, parent.as_ref())?;
        match content_type {
            Some(content_type) => self
                .client
                .set(keys.content_type(), content_type.as_bytes())?,
            None => self
                .client
                .delete_keys(&[keys.content_type().to_string()])?,
        }

        match Payload::materialize(content_type, data)? {
            Payload::Statements(quads) => {
                let members = encode_set(&quads)?;
                self.client.replace_members(keys.data(), &members)?;
            }
            Payload::Bytes(bytes) => self.client.set(keys.data(), &bytes)?,
        }
        Ok(())
    }

    fn write_container(
        &self,
        identifier: &ResourceIdentifier,
        metadata: &RepresentationMetadata,
    ) -> StoreResult<()> {
        self.ensure_client()?;
        let keys = ResourceKeys::for_identifier(identifier);
        let parent = self.identifier_strategy.parent_of(identifier)?;
        debug!(%identifier, "writing container");

        self.write_metadata(&keys, metadata)?;
        self.link_to_parent(identifier, parent.as_ref())
    }

    fn delete_resource(&self, identifier: &ResourceIdentifier) -> StoreResult<()> {
        self.ensure_client()?;
        let keys = ResourceKeys::for_identifier(identifier);
        let parent = self.identifier_strategy.parent_of(identifier)?;
        debug!(%identifier, "deleting resource");

        self.client.delete_keys(&keys.all())?;
        if let Some(parent) = parent {
            let parent_keys = ResourceKeys::for_identifier(&parent);
            self.client
                .remove_member(parent_keys.children(), identifier.path())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::SingleRootIdentifierStrategy;
    use crate::metadata::CONTENT_TYPE;
    use podstore_codec::{GraphName, Literal, Quad, EMPTY_SET_MEMBER};
    use podstore_kv::{InMemoryClient, KvError, KvResult};
    use std::time::Duration;

    const BASE: &str = "http://test.com/";

    fn accessor() -> KvDataAccessor<Arc<InMemoryClient>> {
        KvDataAccessor::new(
            Arc::new(InMemoryClient::new()),
            SingleRootIdentifierStrategy::new(BASE),
        )
    }

    fn id(path: &str) -> ResourceIdentifier {
        ResourceIdentifier::new(path)
    }

    fn quad() -> Quad {
        Quad::new(
            NamedNode::new("http://name"),
            "http://pred",
            Literal::simple("value"),
        )
    }

    fn metadata(path: &str, content_type: Option<&str>) -> RepresentationMetadata {
        let metadata = RepresentationMetadata::for_resource(&id(path));
        match content_type {
            Some(content_type) => metadata.with_content_type(content_type),
            None => metadata,
        }
    }

    #[test]
    fn can_handle_everything() {
        assert!(accessor().can_handle(&metadata(BASE, None)).is_ok());
    }

    #[test]
    fn connects_on_first_use_only() {
        let accessor = accessor();
        assert!(!accessor.is_initialized());
        assert_eq!(accessor.client().connect_count(), 0);

        let _ = accessor.get_data(&id("http://test.com/a"));
        let _ = accessor.get_metadata(&id("http://test.com/a"));
        assert!(accessor.is_initialized());
        assert_eq!(accessor.client().connect_count(), 1);
    }

    #[test]
    fn missing_data_is_not_found() {
        let err = accessor().get_data(&id("http://identifier")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn missing_metadata_is_not_found() {
        let err = accessor().get_metadata(&id("http://identifier")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn binary_document_round_trip() {
        let accessor = accessor();
        let path = "http://test.com/resource";
        accessor
            .write_document(
                &id(path),
                DataStream::from_bytes("data"),
                &metadata(path, Some("text/plain")),
            )
            .unwrap();

        let client = accessor.client();
        assert_eq!(client.get(path).unwrap(), Some(b"data".to_vec()));
        assert_eq!(
            client.get("http://test.com/resource|contentType").unwrap(),
            Some(b"text/plain".to_vec())
        );
        assert_eq!(
            client.members("http://test.com/|children").unwrap(),
            vec![path.to_string()]
        );
        assert_eq!(client.members("http://test.com/resource|meta").unwrap().len(), 1);

        let data = accessor.get_data(&id(path)).unwrap();
        assert_eq!(data.into_bytes().unwrap(), b"data");

        let read = accessor.get_metadata(&id(path)).unwrap();
        assert_eq!(read.content_type(), Some("text/plain"));
        assert_eq!(read.len(), 1);
    }

    #[test]
    fn statement_document_round_trip() {
        let accessor = accessor();
        let path = "http://test.com/resource";
        accessor
            .write_document(
                &id(path),
                DataStream::from_quads(vec![quad()]),
                &metadata(path, Some(INTERNAL_QUADS)),
            )
            .unwrap();

        assert_eq!(
            accessor.client().members(path).unwrap(),
            vec!["http://name|http://pred|\"value\"".to_string()]
        );
        let data = accessor.get_data(&id(path)).unwrap();
        assert!(data.is_quads());
        assert_eq!(data.into_quads().unwrap(), vec![quad()]);
    }

    #[test]
    fn empty_statement_document_exists() {
        let accessor = accessor();
        let path = "http://test.com/empty";
        accessor
            .write_document(
                &id(path),
                DataStream::from_quads(vec![]),
                &metadata(path, Some(INTERNAL_QUADS)),
            )
            .unwrap();

        assert_eq!(
            accessor.client().members(path).unwrap(),
            vec![EMPTY_SET_MEMBER.to_string()]
        );
        let data = accessor.get_data(&id(path)).unwrap();
        assert!(data.into_quads().unwrap().is_empty());
    }

    #[test]
    fn rewriting_replaces_statements() {
        let accessor = accessor();
        let path = "http://test.com/resource";
        let other = Quad::new(
            NamedNode::new("http://name"),
            "http://pred",
            Literal::simple("other"),
        );
        for quads in [vec![quad()], vec![other.clone()]] {
            accessor
                .write_document(
                    &id(path),
                    DataStream::from_quads(quads),
                    &metadata(path, Some(INTERNAL_QUADS)),
                )
                .unwrap();
        }
        let data = accessor.get_data(&id(path)).unwrap().into_quads().unwrap();
        assert_eq!(data, vec![other]);
    }

    #[test]
    fn switching_payload_kind() {
        let accessor = accessor();
        let path = "http://test.com/resource";
        accessor
            .write_document(
                &id(path),
                DataStream::from_quads(vec![quad()]),
                &metadata(path, Some(INTERNAL_QUADS)),
            )
            .unwrap();
        accessor
            .write_document(&id(path), DataStream::from_bytes("plain"), &metadata(path, None))
            .unwrap();

        assert!(!accessor
            .client()
            .contains_key("http://test.com/resource|contentType"));
        let data = accessor.get_data(&id(path)).unwrap();
        assert_eq!(data.into_bytes().unwrap(), b"plain");
        assert_eq!(accessor.get_metadata(&id(path)).unwrap().content_type(), None);
    }

    #[test]
    fn named_graph_payload_is_not_implemented() {
        let accessor = accessor();
        let path = "http://test.com/resource";
        let named = Quad::in_graph(
            NamedNode::new("http://name"),
            "http://pred",
            Literal::simple("value"),
            GraphName::NamedNode(NamedNode::new("http://graph")),
        );
        let err = accessor
            .write_document(
                &id(path),
                DataStream::from_quads(vec![named]),
                &metadata(path, Some(INTERNAL_QUADS)),
            )
            .unwrap_err();
        assert!(err.is_not_implemented());

        // Metadata, parent link and content type are already written.
        let client = accessor.client();
        assert!(!client.contains_key(path));
        assert!(client.contains_key("http://test.com/resource|meta"));
        assert!(client.contains_key("http://test.com/resource|contentType"));
        assert_eq!(
            client.members("http://test.com/|children").unwrap(),
            vec![path.to_string()]
        );
    }

    #[test]
    fn container_metadata_ignores_content_type_key() {
        let accessor = accessor();
        let path = "http://test.com/container/";
        accessor.write_container(&id(path), &metadata(path, None)).unwrap();
        accessor
            .client()
            .set("http://test.com/container/|contentType", b"text/turtle")
            .unwrap();

        let read = accessor.get_metadata(&id(path)).unwrap();
        assert_eq!(read.content_type(), None);
    }

    #[test]
    fn container_with_metadata_round_trip() {
        let accessor = accessor();
        let path = "http://test.com/container/";
        let title = Quad::new(
            NamedNode::new(path),
            "http://purl.org/dc/terms/title",
            Literal::lang("Box", "en"),
        );
        accessor
            .write_container(&id(path), &metadata(path, None).with_quads([title.clone()]))
            .unwrap();

        let read = accessor.get_metadata(&id(path)).unwrap();
        assert_eq!(read.quads(), &[title]);
        let children: Vec<_> = accessor.get_children(&id(BASE)).unwrap().collect();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].identifier().to_string(), path);
        assert!(children[0].is_empty());
    }

    #[test]
    fn empty_metadata_reads_back_empty() {
        let accessor = accessor();
        let path = "http://test.com/container/";
        accessor.write_container(&id(path), &metadata(path, None)).unwrap();

        // Only the sentinel is stored; the resource still exists.
        assert_eq!(
            accessor.client().members("http://test.com/container/|meta").unwrap(),
            vec![EMPTY_SET_MEMBER.to_string()]
        );
        assert!(accessor.get_metadata(&id(path)).unwrap().is_empty());

        accessor.delete_resource(&id(path)).unwrap();
        assert!(accessor.get_metadata(&id(path)).unwrap_err().is_not_found());
    }

    #[test]
    fn undecodable_metadata_is_rejected_before_writing() {
        let accessor = accessor();
        let path = "http://test.com/doc";
        let mut metadata = metadata(path, Some("text/plain"));
        metadata.add_quad(Quad::new(
            NamedNode::new(path),
            "http://p",
            NamedNode::new(""),
        ));

        let err = accessor
            .write_document(&id(path), DataStream::from_bytes("x"), &metadata)
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Codec(CodecError::UndecodableTerm { .. })
        ));
        assert!(accessor.client().keys().is_empty());
        assert!(accessor.get_metadata(&id(path)).unwrap_err().is_not_found());
    }

    #[test]
    fn invalid_utf8_content_type_is_an_error() {
        let accessor = accessor();
        let path = "http://test.com/doc";
        accessor
            .write_document(&id(path), DataStream::from_bytes("x"), &metadata(path, None))
            .unwrap();
        accessor
            .client()
            .set("http://test.com/doc|contentType", b"text/\xffplain")
            .unwrap();

        assert!(matches!(
            accessor.get_data(&id(path)),
            Err(StoreError::Codec(CodecError::Malformed { .. }))
        ));
        assert!(matches!(
            accessor.get_metadata(&id(path)),
            Err(StoreError::Codec(CodecError::Malformed { .. }))
        ));
    }

    #[test]
    fn empty_document_metadata_keeps_content_type() {
        let accessor = accessor();
        let path = "http://test.com/doc";
        accessor
            .write_document(&id(path), DataStream::from_bytes("x"), &metadata(path, None))
            .unwrap();
        assert!(accessor.get_metadata(&id(path)).unwrap().is_empty());

        accessor
            .client()
            .set("http://test.com/doc|contentType", b"text/plain")
            .unwrap();
        let read = accessor.get_metadata(&id(path)).unwrap();
        assert_eq!(read.content_type(), Some("text/plain"));
        assert_eq!(read.len(), 1);
    }

    #[test]
    fn root_container_has_no_parent_link() {
        let accessor = accessor();
        accessor
            .write_container(&id(BASE), &metadata(BASE, Some("text/turtle")))
            .unwrap();
        let keys = accessor.client().keys();
        assert_eq!(keys, vec!["http://test.com/|meta".to_string()]);
    }

    #[test]
    fn children_of_missing_container_is_empty() {
        let children = accessor().get_children(&id("http://test.com/none/")).unwrap();
        assert_eq!(children.len(), 0);
    }

    #[test]
    fn children_are_listed() {
        let accessor = accessor();
        for path in ["http://test.com/b", "http://test.com/a"] {
            accessor
                .write_document(&id(path), DataStream::from_bytes("x"), &metadata(path, None))
                .unwrap();
        }
        let children: Vec<String> = accessor
            .get_children(&id(BASE))
            .unwrap()
            .map(|child| child.identifier().to_string())
            .collect();
        assert_eq!(children, vec!["http://test.com/a", "http://test.com/b"]);
    }

    #[test]
    fn delete_document() {
        let accessor = accessor();
        let path = "http://test.com/resource";
        accessor
            .write_document(
                &id(path),
                DataStream::from_bytes("data"),
                &metadata(path, Some("text/plain")),
            )
            .unwrap();
        accessor.delete_resource(&id(path)).unwrap();

        assert!(accessor.client().keys().is_empty());
        assert!(accessor.get_metadata(&id(path)).unwrap_err().is_not_found());
        assert!(accessor.get_data(&id(path)).unwrap_err().is_not_found());
        assert_eq!(accessor.get_children(&id(BASE)).unwrap().len(), 0);
    }

    #[test]
    fn delete_root_container() {
        let accessor = accessor();
        accessor
            .write_container(&id(BASE), &metadata(BASE, Some("text/turtle")))
            .unwrap();
        accessor.delete_resource(&id(BASE)).unwrap();
        assert!(accessor.client().keys().is_empty());
    }

    #[test]
    fn delete_missing_resource_succeeds() {
        accessor().delete_resource(&id("http://test.com/ghost")).unwrap();
    }

    #[test]
    fn identifier_outside_namespace_is_rejected() {
        let accessor = accessor();
        let path = "http://other.com/doc";
        let err = accessor
            .write_document(&id(path), DataStream::from_bytes("x"), &metadata(path, None))
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidIdentifier { .. }));
        assert!(accessor.client().keys().is_empty());
    }

    #[test]
    fn delimiter_in_subject_is_rejected_before_writing() {
        let accessor = accessor();
        let path = "http://test.com/doc";
        let bad = Quad::new(
            NamedNode::new("http://test.com/a|b"),
            CONTENT_TYPE,
            Literal::simple("x"),
        );
        let err = accessor
            .write_container(&id(path), &metadata(path, None).with_quads([bad]))
            .unwrap_err();
        assert!(matches!(err, StoreError::Codec(_)));
        assert!(accessor.client().keys().is_empty());
    }

    #[test]
    fn wrong_type_surfaces_as_backend_error() {
        let accessor = accessor();
        let path = "http://test.com/resource";
        accessor.ensure_client().unwrap();
        accessor
            .client()
            .set("http://test.com/resource|meta", b"not a set")
            .unwrap();
        let err = accessor.get_metadata(&id(path)).unwrap_err();
        assert!(err.is_backend_unavailable());
    }

    struct RefusingClient;

    impl KeyValueClient for RefusingClient {
        fn connect(&self) -> KvResult<()> {
            Err(KvError::Connection("connection refused".into()))
        }
        fn get(&self, _: &str) -> KvResult<Option<Vec<u8>>> {
            Err(KvError::NotConnected)
        }
        fn set(&self, _: &str, _: &[u8]) -> KvResult<()> {
            Err(KvError::NotConnected)
        }
        fn members(&self, _: &str) -> KvResult<Vec<String>> {
            Err(KvError::NotConnected)
        }
        fn replace_members(&self, _: &str, _: &[String]) -> KvResult<()> {
            Err(KvError::NotConnected)
        }
        fn add_member(&self, _: &str, _: &str) -> KvResult<()> {
            Err(KvError::NotConnected)
        }
        fn remove_member(&self, _: &str, _: &str) -> KvResult<()> {
            Err(KvError::NotConnected)
        }
        fn delete_keys(&self, _: &[String]) -> KvResult<()> {
            Err(KvError::NotConnected)
        }
    }

    #[test]
    fn connect_failure_is_backend_unavailable() {
        let accessor = KvDataAccessor::with_config(
            RefusingClient,
            SingleRootIdentifierStrategy::new(BASE),
            &AccessorConfig::new().max_init_wait(Duration::ZERO),
        );
        let err = accessor.get_data(&id("http://test.com/a")).unwrap_err();
        assert!(err.is_backend_unavailable());
        assert!(err.to_string().contains("connection refused"));
        assert!(!accessor.is_initialized());
    }
}
