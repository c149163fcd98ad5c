use crate::scene::model::{Overlay, Position, Size, TextStyle, VisualElement};

/// Logo name used when an element does not carry one.
pub const DEFAULT_LOGO_NAME: &str = "defaultName";
/// Highlighting language used when a code element does not name one.
pub const DEFAULT_CODE_LANGUAGE: &str = "javascript";

/// Drawing layer of a [`RenderItem`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Primary visual element.
    Primary,
    /// Overlay, drawn after every primary element of the scene.
    Overlay,
}

/// One resolved item of a scene's render order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RenderItem {
    /// Layer the item draws on.
    pub layer: Layer,
    /// Index of the owning element in the scene's element list.
    pub owner: usize,
    /// Resolved payload with defaults applied.
    pub kind: RenderKind,
}

/// Resolved payload of a [`RenderItem`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderKind {
    /// Code block.
    Code {
        /// Source text.
        content: String,
        /// Highlighting language.
        language: String,
        /// Reveal the text one character per frame.
        typing: bool,
        /// 1-based highlighted lines.
        highlight_lines: Vec<u32>,
    },
    /// Logo, either a primary element or an overlay.
    Logo {
        /// Logo name.
        name: String,
        /// Anchor on the canvas.
        position: Position,
        /// Size class.
        size: Size,
    },
    /// Illustration.
    Image {
        /// Image path, relative to the asset base URL.
        image_url: String,
        /// Optional caption.
        prompt: Option<String>,
    },
    /// Caption-only stand-in for an image that was never produced.
    Caption {
        /// Caption text.
        prompt: String,
    },
    /// Text overlay.
    Text {
        /// Text to draw.
        content: String,
        /// Placement and typography.
        style: TextStyle,
    },
}

/// Flatten a scene's elements into draw order.
///
/// Primary elements come first in element order, followed by every overlay (element order,
/// then overlay order). Unknown element and overlay kinds are skipped.
pub fn resolve_render_order(elements: &[VisualElement]) -> Vec<RenderItem> {
    let mut items = Vec::with_capacity(elements.len());

    for (owner, element) in elements.iter().enumerate() {
        if let Some(kind) = resolve_element(element) {
            items.push(RenderItem {
                layer: Layer::Primary,
                owner,
                kind,
            });
        } else {
            tracing::debug!(owner, "skipping unknown visual element type");
        }
    }

    for (owner, element) in elements.iter().enumerate() {
        for overlay in element.overlays() {
            if let Some(kind) = resolve_overlay(overlay) {
                items.push(RenderItem {
                    layer: Layer::Overlay,
                    owner,
                    kind,
                });
            } else {
                tracing::debug!(owner, "skipping unknown overlay type");
            }
        }
    }

    items
}

fn resolve_element(element: &VisualElement) -> Option<RenderKind> {
    match element {
        VisualElement::Code(code) => Some(RenderKind::Code {
            content: code.content.clone(),
            language: code
                .language
                .clone()
                .unwrap_or_else(|| DEFAULT_CODE_LANGUAGE.to_owned()),
            typing: code.animation.as_deref() == Some("typing"),
            highlight_lines: code.highlight_lines.clone(),
        }),
        VisualElement::Logo(logo) => {
            Some(logo_kind(logo.name.as_deref(), logo.position, logo.size))
        }
        VisualElement::Image(image) => Some(match &image.image_url {
            Some(url) if !url.is_empty() => RenderKind::Image {
                image_url: url.clone(),
                prompt: image.prompt.clone(),
            },
            _ => RenderKind::Caption {
                prompt: image.prompt.clone().unwrap_or_default(),
            },
        }),
        VisualElement::Unknown => None,
    }
}

fn resolve_overlay(overlay: &Overlay) -> Option<RenderKind> {
    match overlay {
        Overlay::Text(text) => Some(RenderKind::Text {
            content: text.content.clone(),
            style: text.style,
        }),
        Overlay::Logo(logo) => Some(logo_kind(logo.name.as_deref(), logo.position, logo.size)),
        Overlay::Unknown => None,
    }
}

fn logo_kind(name: Option<&str>, position: Option<Position>, size: Option<Size>) -> RenderKind {
    RenderKind::Logo {
        name: name.unwrap_or(DEFAULT_LOGO_NAME).to_owned(),
        position: position.unwrap_or_default(),
        size: size.unwrap_or_default(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/elements.rs"]
mod tests;
