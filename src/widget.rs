//! Widget template assembly and rendering.

use tera::{Context, Tera};

use crate::assets::{AssetStore, WIDGET_IMAGE, WIDGET_MARKUP, WIDGET_SCRIPT, WIDGET_STYLE};
use crate::block::SkillRecord;
use crate::error::Result;

/// The four raw asset pieces the widget is assembled from.
///
/// All assets are loaded before the fragment is touched, so a missing file
/// fails the render with no partial output.
#[derive(Debug)]
pub(crate) struct WidgetAssets {
    markup: String,
    style: String,
    script: String,
    image: String,
}

impl WidgetAssets {
    pub(crate) fn load(store: &AssetStore) -> Result<Self> {
        Ok(Self {
            markup: store.read(WIDGET_MARKUP)?,
            style: store.read(WIDGET_STYLE)?,
            script: store.read(WIDGET_SCRIPT)?,
            image: store.read(WIDGET_IMAGE)?,
        })
    }

    pub(crate) fn image(&self) -> &str {
        &self.image
    }

    /// Inline the stylesheet and script around the markup.
    fn template(&self) -> String {
        format!(
            "<style type=\"text/css\">{}</style>{}<script>{}</script>",
            self.style, self.markup, self.script
        )
    }
}

/// Build the templating context the widget is rendered against.
///
/// This same context is handed back to the host in place of the inbound
/// render context.
pub(crate) fn widget_context(
    skills: &[SkillRecord],
    verify_tags_url: &str,
    image: &str,
) -> Context {
    let mut ctx = Context::new();
    ctx.insert("skills", skills);
    ctx.insert("verify_tags_url", verify_tags_url);
    ctx.insert("image", image);
    ctx
}

/// Render the widget HTML for the given context.
pub(crate) fn render(assets: &WidgetAssets, ctx: &Context) -> Result<String> {
    let html = Tera::one_off(&assets.template(), ctx, false)?;
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assets() -> WidgetAssets {
        WidgetAssets {
            markup: "<div>{{ verify_tags_url }}:{% for skill in skills %}{{ skill.name }};{% endfor %}{{ image }}</div>".to_string(),
            style: ".tag { color: red }".to_string(),
            script: "console.log('hi');".to_string(),
            image: "<svg/>".to_string(),
        }
    }

    fn records(names: &[&str]) -> Vec<SkillRecord> {
        names
            .iter()
            .map(|name| SkillRecord(serde_json::json!({ "name": name })))
            .collect()
    }

    #[test]
    fn template_wraps_markup_with_style_and_script() {
        let assets = assets();
        let template = assets.template();
        assert!(template.starts_with("<style type=\"text/css\">.tag { color: red }</style>"));
        assert!(template.ends_with("<script>console.log('hi');</script>"));
        let style_end = template.find("</style>").unwrap();
        let script_start = template.find("<script>").unwrap();
        assert!(style_end < script_start, "markup sits between style and script");
    }

    #[test]
    fn render_interpolates_skills_url_and_image() {
        let assets = assets();
        let ctx = widget_context(&records(&["Python", "Django"]), "/handler/verify_tags", assets.image());
        let html = render(&assets, &ctx).unwrap();
        assert!(html.contains("/handler/verify_tags"));
        assert!(html.contains("Python;"));
        assert!(html.contains("Django;"));
        assert!(html.contains("<svg/>"));
    }

    #[test]
    fn widget_context_carries_the_three_keys() {
        let ctx = widget_context(&records(&["Rust"]), "/u", "<svg/>");
        assert!(ctx.get("skills").is_some());
        assert!(ctx.get("verify_tags_url").is_some());
        assert!(ctx.get("image").is_some());
    }
}
