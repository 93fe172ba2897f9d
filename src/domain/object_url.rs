//! Displayable handle for frame bytes.
//!
//! [`ObjectUrl`] mirrors a browser `blob:` URL: an opaque, origin-scoped
//! reference to a blob that can be assigned as an image source and must
//! be revoked once superseded.

use std::fmt;

use serde::{Deserialize, Serialize};

/// URL scheme prefix of every object URL.
pub const BLOB_SCHEME: &str = "blob:";

/// Opaque handle to a blob held by a [`super::BlobStore`].
///
/// Formatted as `blob:<origin>/<uuid>`. Each call to
/// [`super::BlobStore::create_object_url`] mints a fresh one, so two
/// handles never compare equal even when they point at identical bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    /// Mints a new random handle under `origin`.
    #[must_use]
    pub fn new(origin: &str) -> Self {
        Self(format!("{BLOB_SCHEME}{origin}/{}", uuid::Uuid::new_v4()))
    }

    /// Returns the full URL string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ObjectUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
