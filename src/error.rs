use thiserror::Error;

// ─── Error taxonomy ──────────────────────────────────────────────────────────

/// Failures surfaced by the skill verification pipeline step.
///
/// The step performs no local recovery: every variant propagates to the
/// host pipeline, which owns the decision to abort the render or degrade
/// via its own silent-failure configuration.
#[derive(Debug, Error)]
pub enum TaggingError {
    /// A bundled static asset is missing or unreadable.
    #[error("failed to load bundled asset `{name}`: {source}")]
    ResourceLoad {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// A host capability (skill fetch or handler URL resolution) failed.
    #[error("host capability failed: {0}")]
    Capability(String),

    /// The widget template failed to render.
    #[error("widget render failed: {0}")]
    Template(#[from] tera::Error),
}

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, TaggingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_load_names_the_asset() {
        let err = TaggingError::ResourceLoad {
            name: "tagging.html".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("tagging.html"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn capability_message_passes_through() {
        let err = TaggingError::Capability("fetch_skill_tags raised".to_string());
        assert_eq!(
            err.to_string(),
            "host capability failed: fetch_skill_tags raised"
        );
    }
}
