//! Registry of live object URLs and the blobs behind them.
//!
//! The store owns frame bytes for as long as their [`ObjectUrl`] is live.
//! Revoking a URL drops the bytes; a URL can be revoked only once.

use std::collections::HashMap;

use bytes::Bytes;
use chrono::{DateTime, Utc};

use super::ObjectUrl;

/// MIME type of every frame blob.
pub const JPEG_MIME: &str = "image/jpeg";

/// Immutable binary object with a content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    data: Bytes,
    mime: &'static str,
    created_at: DateTime<Utc>,
}

impl Blob {
    /// Wraps `data` as a blob of type `mime`.
    #[must_use]
    pub fn new(data: Bytes, mime: &'static str) -> Self {
        Self {
            data,
            mime,
            created_at: Utc::now(),
        }
    }

    /// Wraps `data` as an `image/jpeg` blob.
    #[must_use]
    pub fn jpeg(data: Bytes) -> Self {
        Self::new(data, JPEG_MIME)
    }

    /// Blob bytes. Cloning is a reference-count bump.
    #[must_use]
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Content type.
    #[must_use]
    pub const fn mime(&self) -> &'static str {
        self.mime
    }

    /// Size in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// When the blob was created.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Origin-scoped table of object URLs.
#[derive(Debug)]
pub struct BlobStore {
    origin: String,
    entries: HashMap<ObjectUrl, Blob>,
    created: u64,
    revoked: u64,
}

impl BlobStore {
    /// Creates an empty store for URLs under `origin`.
    #[must_use]
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            entries: HashMap::new(),
            created: 0,
            revoked: 0,
        }
    }

    /// Registers `blob` and returns a fresh handle for it.
    pub fn create_object_url(&mut self, blob: Blob) -> ObjectUrl {
        let url = ObjectUrl::new(&self.origin);
        self.entries.insert(url.clone(), blob);
        self.created += 1;
        url
    }

    /// Releases the blob behind `url`.
    ///
    /// Returns `false` if the URL was never issued here or has already been
    /// revoked; the store is left unchanged in that case.
    pub fn revoke_object_url(&mut self, url: &ObjectUrl) -> bool {
        if self.entries.remove(url).is_some() {
            self.revoked += 1;
            true
        } else {
            false
        }
    }

    /// Looks up the blob behind a live URL.
    #[must_use]
    pub fn resolve(&self, url: &ObjectUrl) -> Option<&Blob> {
        self.entries.get(url)
    }

    /// Number of URLs currently live.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.entries.len()
    }

    /// Total URLs ever created.
    #[must_use]
    pub const fn created_count(&self) -> u64 {
        self.created
    }

    /// Total URLs successfully revoked.
    #[must_use]
    pub const fn revoked_count(&self) -> u64 {
        self.revoked
    }

    /// Origin the URLs are minted under.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn store() -> BlobStore {
        BlobStore::new("http://127.0.0.1:8080")
    }

    #[test]
    fn create_then_resolve() {
        let mut store = store();
        let url = store.create_object_url(Blob::jpeg(Bytes::from_static(b"\xff\xd8jpeg")));
        let Some(blob) = store.resolve(&url) else {
            panic!("url should resolve");
        };
        assert_eq!(blob.mime(), "image/jpeg");
        assert_eq!(blob.size(), 6);
        assert_eq!(store.live_count(), 1);
    }

    #[test]
    fn revoke_releases_exactly_once() {
        let mut store = store();
        let url = store.create_object_url(Blob::jpeg(Bytes::from_static(b"a")));
        assert!(store.revoke_object_url(&url));
        assert!(!store.revoke_object_url(&url));
        assert_eq!(store.revoked_count(), 1);
        assert_eq!(store.live_count(), 0);
        assert!(store.resolve(&url).is_none());
    }

    #[test]
    fn foreign_url_is_not_revoked() {
        let mut store = store();
        let other = ObjectUrl::new("http://elsewhere");
        assert!(!store.revoke_object_url(&other));
        assert_eq!(store.revoked_count(), 0);
    }

    #[test]
    fn urls_use_store_origin() {
        let mut store = store();
        let url = store.create_object_url(Blob::jpeg(Bytes::new()));
        assert!(url.as_str().starts_with("blob:http://127.0.0.1:8080/"));
        assert_eq!(store.created_count(), 1);
    }
}
