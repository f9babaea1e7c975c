//! The vertical-block render filter step.

use tracing::debug;

use crate::assets::AssetStore;
use crate::block::{SkillRecord, TagVerificationStatus, VerticalBlock};
use crate::error::Result;
use crate::fragment::{Fragment, RenderedStep};
use crate::widget::{self, WidgetAssets};

/// Handler action the widget posts verified tags to. The endpoint itself
/// is owned by the host block implementation.
pub const VERIFY_TAGS_ACTION: &str = "verify_tags";

/// Pipeline step that appends a skill verification section to a rendered
/// vertical block.
///
/// Stateless across invocations; the only configuration is where the
/// bundled widget assets live.
#[derive(Debug, Clone, Default)]
pub struct SkillVerificationSection {
    assets: AssetStore,
}

impl SkillVerificationSection {
    pub fn new() -> Self {
        Self {
            assets: AssetStore::bundled(),
        }
    }

    /// Use a custom asset root instead of the bundled `static/` directory.
    pub fn with_assets(assets: AssetStore) -> Self {
        Self { assets }
    }

    /// Fetch the skills awaiting verification on this block.
    ///
    /// An unknown verification state suppresses the widget exactly like a
    /// verified one; only an explicitly unverified block with a fetch
    /// capability yields records. Fetcher failures propagate untouched.
    pub fn fetch_related_skills<B: VerticalBlock>(&self, block: &B) -> Result<Vec<SkillRecord>> {
        match block.verification_status() {
            TagVerificationStatus::Unknown | TagVerificationStatus::Verified => Ok(Vec::new()),
            TagVerificationStatus::Unverified => match block.skill_fetcher() {
                None => Ok(Vec::new()),
                Some(fetcher) => fetcher.fetch(),
            },
        }
    }

    /// Run the filter step: pass the inputs through untouched, or append
    /// the verification widget to the fragment.
    ///
    /// On the augmentation path the returned context is the freshly built
    /// templating context (`skills`, `verify_tags_url`, `image`), replacing
    /// the inbound render context.
    pub fn run_filter<B: VerticalBlock>(
        &self,
        block: B,
        mut fragment: Fragment,
        context: tera::Context,
        view: String,
    ) -> Result<RenderedStep<B>> {
        let skills = self.fetch_related_skills(&block)?;
        if skills.is_empty() {
            debug!("no unverified skill tags, passing fragment through");
            return Ok(RenderedStep {
                block,
                fragment,
                context,
                view,
            });
        }

        let verify_tags_url = block.handler_url(VERIFY_TAGS_ACTION)?;
        let assets = WidgetAssets::load(&self.assets)?;
        let widget_context = widget::widget_context(&skills, &verify_tags_url, assets.image());
        let rendered = widget::render(&assets, &widget_context)?;
        fragment.content.push_str(&rendered);
        debug!(
            skills = skills.len(),
            %verify_tags_url,
            "appended skill verification section"
        );

        Ok(RenderedStep {
            block,
            fragment,
            context: widget_context,
            view,
        })
    }
}
