//! Bundled static assets for the verification widget.

use std::path::{Path, PathBuf};

use crate::error::{Result, TaggingError};

/// Widget markup, rendered as a tera template.
pub const WIDGET_MARKUP: &str = "tagging.html";
/// Widget stylesheet, inlined into a `<style>` block.
pub const WIDGET_STYLE: &str = "tagging.css";
/// Client-side verify handler, inlined into a `<script>` block.
pub const WIDGET_SCRIPT: &str = "tagging.js";
/// Illustration embedded inline in the markup.
pub const WIDGET_IMAGE: &str = "brainstorming.svg";

/// Read-only access to the assets packaged with this crate.
///
/// Reads are uncached: every call hits the filesystem, so a replaced
/// asset is picked up on the next render.
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    /// Store rooted at the crate's bundled `static/` directory.
    pub fn bundled() -> Self {
        Self {
            root: Path::new(env!("CARGO_MANIFEST_DIR")).join("static"),
        }
    }

    /// Store rooted at an arbitrary directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Load one asset as UTF-8 text.
    pub fn read(&self, name: &str) -> Result<String> {
        std::fs::read_to_string(self.root.join(name)).map_err(|source| {
            TaggingError::ResourceLoad {
                name: name.to_string(),
                source,
            }
        })
    }
}

impl Default for AssetStore {
    fn default() -> Self {
        Self::bundled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_store_reads_every_widget_asset() {
        let store = AssetStore::bundled();
        for name in [WIDGET_MARKUP, WIDGET_STYLE, WIDGET_SCRIPT, WIDGET_IMAGE] {
            let body = store.read(name).unwrap();
            assert!(!body.is_empty(), "{name} should not be empty");
        }
    }

    #[test]
    fn missing_asset_is_a_resource_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = AssetStore::with_root(dir.path());
        let err = store.read(WIDGET_MARKUP).unwrap_err();
        assert!(matches!(
            err,
            TaggingError::ResourceLoad { ref name, .. } if name == WIDGET_MARKUP
        ));
    }
}
