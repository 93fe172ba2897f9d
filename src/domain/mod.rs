//! Domain layer: page location, displayable handles, blob storage and the
//! image element.

pub mod blob_store;
pub mod image_element;
pub mod location;
pub mod object_url;

pub use blob_store::{Blob, BlobStore, JPEG_MIME};
pub use image_element::{DEFAULT_ELEMENT_ID, ImageElement};
pub use location::{PageLocation, STREAM_PATH};
pub use object_url::ObjectUrl;
