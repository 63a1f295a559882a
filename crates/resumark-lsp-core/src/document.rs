//! Document abstraction for language analysis.
//!
//! A simple document representation for editor sessions. Documents may
//! come from the editor (in-memory) or the filesystem; either way each
//! edit triggers a full, stateless re-parse of the content.

/// A document for language analysis.
#[derive(Debug, Clone)]
pub struct Document {
    /// The document's URI or path.
    uri: String,
    /// The document content.
    content: String,
    /// Version number for tracking changes (optional, used by LSP).
    version: Option<i32>,
}

impl Document {
    /// Create a new document with the given URI and content.
    pub fn new(uri: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            content: content.into(),
            version: None,
        }
    }

    /// Create a new document with a version number.
    pub fn with_version(uri: impl Into<String>, content: impl Into<String>, version: i32) -> Self {
        Self {
            uri: uri.into(),
            content: content.into(),
            version: Some(version),
        }
    }

    /// Get the document's URI.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Get the document's content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the document's version, if set.
    pub fn version(&self) -> Option<i32> {
        self.version
    }

    /// Get the filename from the URI (for display purposes).
    pub fn filename(&self) -> &str {
        self.uri.rsplit(['/', '\\']).next().unwrap_or(&self.uri)
    }

    /// Update the document content.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Update the document content with a new version.
    pub fn set_content_with_version(&mut self, content: impl Into<String>, version: i32) {
        self.content = content.into();
        self.version = Some(version);
    }
}

/// A simple in-memory store for open documents.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: std::collections::HashMap<String, Document>,
}

impl DocumentStore {
    /// Create a new empty document store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open or update a document in the store.
    pub fn open(&mut self, uri: impl Into<String>, content: impl Into<String>, version: i32) {
        let uri = uri.into();
        self.documents
            .insert(uri.clone(), Document::with_version(uri, content, version));
    }

    /// Update a document's content.
    pub fn change(&mut self, uri: &str, content: impl Into<String>, version: i32) {
        if let Some(doc) = self.documents.get_mut(uri) {
            doc.set_content_with_version(content, version);
        }
    }

    /// Close a document (remove from store).
    pub fn close(&mut self, uri: &str) {
        self.documents.remove(uri);
    }

    /// Get a document by URI.
    pub fn get(&self, uri: &str) -> Option<&Document> {
        self.documents.get(uri)
    }

    /// Check if a document is in the store.
    pub fn contains(&self, uri: &str) -> bool {
        self.documents.contains_key(uri)
    }

    /// Get the number of documents in the store.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_creation() {
        let doc = Document::new("file:///cv.md", "# Experience");
        assert_eq!(doc.uri(), "file:///cv.md");
        assert_eq!(doc.content(), "# Experience");
        assert_eq!(doc.filename(), "cv.md");
        assert_eq!(doc.version(), None);
    }

    #[test]
    fn document_update() {
        let mut doc = Document::with_version("cv.md", "old", 1);
        doc.set_content_with_version("new", 2);
        assert_eq!(doc.content(), "new");
        assert_eq!(doc.version(), Some(2));
    }

    #[test]
    fn document_store_lifecycle() {
        let mut store = DocumentStore::new();

        store.open("file:///a.md", "content a", 1);
        store.open("file:///b.md", "content b", 1);
        assert_eq!(store.len(), 2);

        store.change("file:///a.md", "updated a", 2);
        assert_eq!(store.get("file:///a.md").unwrap().content(), "updated a");
        assert_eq!(store.get("file:///a.md").unwrap().version(), Some(2));

        store.close("file:///a.md");
        assert_eq!(store.len(), 1);
        assert!(!store.contains("file:///a.md"));
        assert!(store.contains("file:///b.md"));
    }
}
