//! The image element whose `src` attribute is the viewer's output surface.

use super::ObjectUrl;

/// Default element identifier of the viewer page.
pub const DEFAULT_ELEMENT_ID: &str = "video";

/// An image element identified by a fixed id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageElement {
    id: String,
    src: Option<ObjectUrl>,
}

impl ImageElement {
    /// Creates an element with no source.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            src: None,
        }
    }

    /// Element identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current source, if any.
    #[must_use]
    pub const fn src(&self) -> Option<&ObjectUrl> {
        self.src.as_ref()
    }

    /// Installs `src` and hands back the source it replaced.
    pub fn set_src(&mut self, src: ObjectUrl) -> Option<ObjectUrl> {
        self.src.replace(src)
    }

    /// Clears the source, returning it.
    pub fn clear_src(&mut self) -> Option<ObjectUrl> {
        self.src.take()
    }
}

impl Default for ImageElement {
    fn default() -> Self {
        Self::new(DEFAULT_ELEMENT_ID)
    }
}
