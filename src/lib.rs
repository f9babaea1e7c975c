#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

//! Render-pipeline step for skill tag verification.
//!
//! When the host's content-rendering pipeline finishes a vertical block,
//! this step inspects the block for unverified skill tags and, when some
//! exist, appends an HTML/CSS/JS widget to the rendered fragment that lets
//! the learner confirm the suggested tags. Blocks whose tags are already
//! verified, or whose verification state is unknown, pass through untouched.
//!
//! The host registers [`SkillVerificationSection`] as a step in its render
//! filter chain and drives it through [`SkillVerificationSection::run_filter`]:
//!
//! ```
//! use skill_tagging::{
//!     Fragment, Result, SkillFetcher, SkillVerificationSection,
//!     TagVerificationStatus, VerticalBlock,
//! };
//!
//! struct DemoBlock;
//!
//! impl VerticalBlock for DemoBlock {
//!     fn verification_status(&self) -> TagVerificationStatus {
//!         TagVerificationStatus::Unverified
//!     }
//!
//!     fn skill_fetcher(&self) -> Option<&dyn SkillFetcher> {
//!         None
//!     }
//!
//!     fn handler_url(&self, action: &str) -> Result<String> {
//!         Ok(format!("/xblock/demo/handler/{action}"))
//!     }
//! }
//!
//! let step = SkillVerificationSection::new();
//! let out = step.run_filter(
//!     DemoBlock,
//!     Fragment::new("<p>rendered block</p>"),
//!     tera::Context::new(),
//!     "student_view".to_string(),
//! )?;
//!
//! // No fetch capability, so the fragment passes through unchanged.
//! assert_eq!(out.fragment.content, "<p>rendered block</p>");
//! # Ok::<(), skill_tagging::TaggingError>(())
//! ```

pub mod assets;
pub mod block;
pub mod error;
pub mod fragment;
pub mod pipeline;
mod widget;

pub use assets::AssetStore;
pub use block::{SkillFetcher, SkillRecord, TagVerificationStatus, VerticalBlock};
pub use error::{Result, TaggingError};
pub use fragment::{Fragment, RenderedStep};
pub use pipeline::{SkillVerificationSection, VERIFY_TAGS_ACTION};
