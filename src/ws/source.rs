//! Replay frame source.
//!
//! Holds a fixed sequence of JPEG frames, loaded from a directory, that the
//! replay server streams to every connected viewer.

use std::path::{Path, PathBuf};

use bytes::Bytes;

use crate::error::ViewerError;

/// File extensions picked up by [`FrameSource::load_dir`].
const FRAME_EXTENSIONS: [&str; 2] = ["jpg", "jpeg"];

/// Ordered, immutable set of frames.
#[derive(Debug, Clone)]
pub struct FrameSource {
    frames: Vec<Bytes>,
}

impl FrameSource {
    /// Builds a source from in-memory frames.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::FrameSource`] if `frames` is empty.
    pub fn from_frames(frames: Vec<Bytes>) -> Result<Self, ViewerError> {
        if frames.is_empty() {
            return Err(ViewerError::FrameSource("no frames to replay".to_string()));
        }
        Ok(Self { frames })
    }

    /// Loads every `*.jpg` / `*.jpeg` file in `dir`, ordered by file name.
    ///
    /// File contents are not inspected.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Io`] if the directory or a file cannot be
    /// read, and [`ViewerError::FrameSource`] if it holds no JPEG files.
    pub async fn load_dir(dir: &Path) -> Result<Self, ViewerError> {
        let mut paths: Vec<PathBuf> = Vec::new();
        let mut entries = tokio::fs::read_dir(dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if entry.file_type().await?.is_file() && is_frame_file(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        let mut frames = Vec::with_capacity(paths.len());
        for path in &paths {
            frames.push(Bytes::from(tokio::fs::read(path).await?));
        }

        tracing::info!(dir = %dir.display(), frames = frames.len(), "frame source loaded");
        Self::from_frames(frames).map_err(|_| {
            ViewerError::FrameSource(format!("no jpeg files in {}", dir.display()))
        })
    }

    /// The frames in replay order.
    #[must_use]
    pub fn frames(&self) -> &[Bytes] {
        &self.frames
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always `false`; a source is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

fn is_frame_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            FRAME_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("camview-{name}-{}", uuid::Uuid::new_v4()));
        if let Err(e) = std::fs::create_dir_all(&dir) {
            panic!("create {}: {e}", dir.display());
        }
        dir
    }

    fn write(dir: &Path, name: &str, data: &[u8]) {
        if let Err(e) = std::fs::write(dir.join(name), data) {
            panic!("write {name}: {e}");
        }
    }

    #[test]
    fn empty_source_is_rejected() {
        assert!(matches!(
            FrameSource::from_frames(Vec::new()),
            Err(ViewerError::FrameSource(_))
        ));
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert!(is_frame_file(Path::new("a.jpg")));
        assert!(is_frame_file(Path::new("b.JPEG")));
        assert!(!is_frame_file(Path::new("c.png")));
        assert!(!is_frame_file(Path::new("jpg")));
    }

    #[tokio::test]
    async fn load_dir_orders_by_name_and_skips_other_files() {
        let dir = temp_dir("order");
        write(&dir, "002.jpg", b"second");
        write(&dir, "001.jpg", b"first");
        write(&dir, "003.JPEG", b"third");
        write(&dir, "notes.txt", b"skip me");

        let source = match FrameSource::load_dir(&dir).await {
            Ok(source) => source,
            Err(e) => panic!("load failed: {e}"),
        };
        let frames: Vec<&[u8]> = source.frames().iter().map(AsRef::as_ref).collect();
        assert_eq!(frames, vec![&b"first"[..], &b"second"[..], &b"third"[..]]);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn load_dir_without_jpegs_fails() {
        let dir = temp_dir("empty");
        write(&dir, "readme.md", b"nothing here");
        let result = FrameSource::load_dir(&dir).await;
        assert!(matches!(result, Err(ViewerError::FrameSource(_))));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn missing_dir_is_io_error() {
        let dir = std::env::temp_dir().join(format!("camview-missing-{}", uuid::Uuid::new_v4()));
        let result = FrameSource::load_dir(&dir).await;
        assert!(matches!(result, Err(ViewerError::Io(_))));
    }
}
