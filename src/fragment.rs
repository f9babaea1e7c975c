//! Rendered-output accumulator passed along the render filter chain.

use tera::Context;

/// A unit of partially assembled rendered output.
///
/// Owned by the host pipeline. This crate never removes or reorders
/// existing content; it only appends the widget markup to `content`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    pub content: String,
}

impl Fragment {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Output bundle of a render filter step, mirroring its four inputs.
///
/// On the pass-through path all four values are the inputs, untouched. On
/// the augmentation path `fragment` carries the appended widget and
/// `context` is the freshly built templating context, not the inbound one.
#[derive(Debug)]
pub struct RenderedStep<B> {
    pub block: B,
    pub fragment: Fragment,
    pub context: Context,
    pub view: String,
}
