use serde::{Deserialize, Serialize};

/// Input document: the ordered scenes of one video.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoDocument {
    /// Scenes in authoring order.
    pub scenes: Vec<Scene>,
}

/// One narrated segment of the video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// `"<start>-<end>"` in seconds.
    pub timing: String,
    /// Narration text shown with the scene.
    #[serde(default)]
    pub script: String,
    /// Narration audio path, relative to the asset base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_audio: Option<String>,
    /// Visual elements, drawn in order.
    #[serde(default)]
    pub visual_elements: Vec<VisualElement>,
}

/// Closed set of visual element kinds, discriminated by `type`.
///
/// Any unrecognised `type` lands in [`VisualElement::Unknown`] and renders nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VisualElement {
    /// Syntax-highlighted source code.
    Code(CodeElement),
    /// A technology logo.
    Logo(LogoElement),
    /// An illustration, or a caption when no image was produced.
    Image(ImageElement),
    /// Unrecognised element kind.
    #[serde(other)]
    Unknown,
}

impl VisualElement {
    /// Overlays attached to this element.
    pub fn overlays(&self) -> &[Overlay] {
        match self {
            Self::Code(e) => &e.overlays,
            Self::Logo(e) => &e.overlays,
            Self::Image(e) => &e.overlays,
            Self::Unknown => &[],
        }
    }
}

/// Code block element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeElement {
    /// Source text.
    #[serde(default)]
    pub content: String,
    /// Highlighting language.
    #[serde(default)]
    pub language: Option<String>,
    /// Reveal animation; only `"typing"` is recognised.
    #[serde(default)]
    pub animation: Option<String>,
    /// 1-based line numbers to highlight.
    #[serde(default)]
    pub highlight_lines: Vec<u32>,
    /// Overlays drawn above the scene's primary elements.
    #[serde(default)]
    pub overlays: Vec<Overlay>,
}

/// Logo element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogoElement {
    /// Logo name, used to build the logo URL.
    #[serde(default)]
    pub name: Option<String>,
    /// Corner or edge to pin the logo to.
    #[serde(default)]
    pub position: Option<Position>,
    /// Logo size class.
    #[serde(default)]
    pub size: Option<Size>,
    /// Overlays drawn above the scene's primary elements.
    #[serde(default)]
    pub overlays: Vec<Overlay>,
}

/// Image element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageElement {
    /// Image path, relative to the asset base URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Prompt the image was generated from; doubles as its caption.
    #[serde(default)]
    pub prompt: Option<String>,
    /// Overlays drawn above the scene's primary elements.
    #[serde(default)]
    pub overlays: Vec<Overlay>,
}

/// Secondary annotation layered over a scene, discriminated by `type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Overlay {
    /// Styled text.
    Text(TextOverlay),
    /// A logo badge.
    Logo(LogoOverlay),
    /// Unrecognised overlay kind.
    #[serde(other)]
    Unknown,
}

/// Text overlay payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextOverlay {
    /// Text to draw.
    #[serde(default)]
    pub content: String,
    /// Placement and typography.
    #[serde(default)]
    pub style: TextStyle,
}

/// Logo overlay payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogoOverlay {
    /// Logo name.
    #[serde(default)]
    pub name: Option<String>,
    /// Corner or edge to pin the logo to.
    #[serde(default)]
    pub position: Option<Position>,
    /// Logo size class.
    #[serde(default)]
    pub size: Option<Size>,
}

/// Typography for text overlays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Corner or edge to pin the text to.
    #[serde(default)]
    pub position: Position,
    /// Font size class.
    #[serde(default)]
    pub font_size: FontSize,
    /// Font weight.
    #[serde(default)]
    pub emphasis: Emphasis,
}

/// Position on a 2x3 grid of canvas anchors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    /// Horizontal anchor.
    pub x: HAlign,
    /// Vertical anchor.
    pub y: VAlign,
}

/// Horizontal anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HAlign {
    /// Left edge.
    #[default]
    Left,
    /// Right edge.
    Right,
}

/// Vertical anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VAlign {
    /// Top edge.
    #[default]
    Top,
    /// Vertically centered.
    Middle,
    /// Bottom edge.
    Bottom,
}

/// Logo size class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    /// 64 px.
    Small,
    /// 96 px.
    #[default]
    Medium,
    /// 128 px.
    Large,
}

impl Size {
    /// Edge length of a square logo box in pixels.
    pub fn px(self) -> f64 {
        match self {
            Self::Small => 64.0,
            Self::Medium => 96.0,
            Self::Large => 128.0,
        }
    }
}

/// Text size class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSize {
    /// 18 px.
    Small,
    /// 24 px.
    #[default]
    Medium,
    /// 36 px.
    Large,
}

impl FontSize {
    /// Font size in pixels.
    pub fn px(self) -> f64 {
        match self {
            Self::Small => 18.0,
            Self::Medium => 24.0,
            Self::Large => 36.0,
        }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    /// Bold weight.
    Bold,
    /// Regular weight.
    #[default]
    Normal,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
