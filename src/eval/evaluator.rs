use crate::animation::anim::{Entrance, scene_fade, typed_prefix};
use crate::foundation::core::{Canvas, FrameIndex, Vec2};
use crate::foundation::error::{ReelError, ReelResult};
use crate::resolve::elements::{Layer, RenderItem, RenderKind};
use crate::scene::composition::Composition;
use crate::scene::model::{Emphasis, HAlign, Position, VAlign};
use crate::timing::scheduler::RenderWindow;

/// Distance in pixels between anchored items and the canvas edge.
const EDGE_INSET_PX: f64 = 16.0;
/// Starting scale of images and text overlays before they settle to 1.
const ENTRANCE_SCALE_FROM: f64 = 0.8;

/// Declarative state of one output frame, handed to the host renderer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameState {
    /// Absolute frame index.
    pub frame: FrameIndex,
    /// Output canvas.
    pub canvas: Canvas,
    /// Active scenes in scene order; later scenes draw on top.
    pub scenes: Vec<SceneFrame>,
}

/// One active scene within a frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneFrame {
    /// Index of the scene in document order.
    pub scene_index: usize,
    /// Frame offset inside the scene window.
    pub local_frame: u64,
    /// Scene window length.
    pub duration_frames: u64,
    /// Scene fade opacity in `[0, 1]`.
    pub opacity: f64,
    /// Narration text.
    pub script: String,
    /// Narration audio to start with the scene.
    pub audio: Option<AudioCue>,
    /// Items in draw order.
    pub items: Vec<ItemFrame>,
}

/// Narration audio placement.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AudioCue {
    /// Resolved audio URL.
    pub src: String,
    /// Absolute frame the audio starts at.
    pub from_frame: FrameIndex,
}

/// One item of a scene with its per-frame style.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ItemFrame {
    /// Drawing layer.
    pub layer: Layer,
    /// Index of the owning element.
    pub owner: usize,
    /// What to draw.
    pub visual: Visual,
    /// Item opacity in `[0, 1]`, before the scene opacity is applied.
    pub opacity: f64,
    /// Uniform scale factor around the item center.
    pub scale: f64,
}

/// Renderer-facing description of an item.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Visual {
    /// Code block.
    Code {
        /// Text revealed so far.
        text: String,
        /// Highlighting language.
        language: String,
        /// 1-based highlighted lines.
        highlight_lines: Vec<u32>,
        /// Draw a typing cursor after the text.
        cursor: bool,
    },
    /// Square logo pinned to a canvas anchor.
    Logo {
        /// Logo URL.
        src: String,
        /// Top-left corner in canvas pixels.
        origin: Vec2,
        /// Edge length in pixels.
        size_px: f64,
    },
    /// Illustration with an optional caption.
    Image {
        /// Image URL.
        src: String,
        /// Caption.
        prompt: Option<String>,
    },
    /// Caption box standing in for a missing image.
    Caption {
        /// Caption text.
        text: String,
    },
    /// Text overlay.
    Text {
        /// Text to draw.
        content: String,
        /// Canvas anchor the text is aligned to.
        position: Position,
        /// Anchor point in canvas pixels.
        anchor: Vec2,
        /// Font size in pixels.
        font_size_px: f64,
        /// Bold weight.
        bold: bool,
    },
}

/// Frame evaluator over a built [`Composition`].
pub struct Evaluator;

impl Evaluator {
    /// Evaluate every scene active at `frame`.
    #[tracing::instrument(skip(comp))]
    pub fn eval_frame(comp: &Composition, frame: FrameIndex) -> ReelResult<FrameState> {
        let timeline = comp.timeline();
        if frame.0 >= timeline.total_duration {
            return Err(ReelError::evaluation(format!(
                "frame {} is out of bounds (duration {})",
                frame.0, timeline.total_duration
            )));
        }

        let scenes = timeline
            .active_at(frame)
            .map(|w| eval_scene(comp, *w, frame))
            .collect::<ReelResult<Vec<_>>>()?;

        Ok(FrameState {
            frame,
            canvas: comp.opts().canvas,
            scenes,
        })
    }
}

fn eval_scene(
    comp: &Composition,
    window: RenderWindow,
    frame: FrameIndex,
) -> ReelResult<SceneFrame> {
    let local = window.local_frame(frame).ok_or_else(|| {
        ReelError::evaluation(format!(
            "frame {} outside window of scene {}",
            frame.0, window.scene_index
        ))
    })?;
    let scene = comp
        .document()
        .scenes
        .get(window.scene_index)
        .ok_or_else(|| ReelError::evaluation("timeline references a missing scene"))?;
    let items = comp.render_items(window.scene_index).unwrap_or_default();

    let opts = comp.opts();
    let opacity = scene_fade(window.duration_frames, opts.fade_frames, opts.fade_ease)
        .sample(local)
        .clamp(0.0, 1.0);

    let audio = scene
        .script_audio
        .as_deref()
        .map(|path| comp.assets().asset_url(path))
        .filter(|src| !src.is_empty())
        .map(|src| AudioCue {
            src,
            from_frame: window.from_frame,
        });

    let items = items
        .iter()
        .map(|item| eval_item(comp, item, local))
        .collect();

    Ok(SceneFrame {
        scene_index: window.scene_index,
        local_frame: local,
        duration_frames: window.duration_frames,
        opacity,
        script: scene.script.clone(),
        audio,
        items,
    })
}

fn eval_item(comp: &Composition, item: &RenderItem, local: u64) -> ItemFrame {
    let opts = comp.opts();
    let assets = comp.assets();
    let (frames, ease) = (opts.entrance_frames, opts.entrance_ease);
    let settle_scale = Entrance::new(ENTRANCE_SCALE_FROM, 1.0, frames, ease);
    let fade_in = Entrance::new(0.0, 1.0, frames, ease);

    let (visual, opacity, scale) = match &item.kind {
        RenderKind::Code {
            content,
            language,
            typing,
            highlight_lines,
        } => {
            let text = if *typing {
                typed_prefix(content, local)
            } else {
                content.as_str()
            };
            let visual = Visual::Code {
                text: text.to_owned(),
                language: language.clone(),
                highlight_lines: highlight_lines.clone(),
                cursor: *typing,
            };
            (visual, 1.0, 1.0)
        }
        RenderKind::Logo {
            name,
            position,
            size,
        } => {
            let size_px = size.px();
            let visual = Visual::Logo {
                src: assets.logo_url(name),
                origin: anchor_origin(opts.canvas, *position, size_px),
                size_px,
            };
            (visual, 1.0, 1.0)
        }
        RenderKind::Image { image_url, prompt } => {
            let visual = Visual::Image {
                src: assets.asset_url(image_url),
                prompt: prompt.clone(),
            };
            (visual, fade_in.sample(local), settle_scale.sample(local))
        }
        RenderKind::Caption { prompt } => (
            Visual::Caption {
                text: prompt.clone(),
            },
            1.0,
            1.0,
        ),
        RenderKind::Text { content, style } => {
            let visual = Visual::Text {
                content: content.clone(),
                position: style.position,
                anchor: anchor_origin(opts.canvas, style.position, 0.0),
                font_size_px: style.font_size.px(),
                bold: style.emphasis == Emphasis::Bold,
            };
            (visual, 1.0, settle_scale.sample(local))
        }
    };

    ItemFrame {
        layer: item.layer,
        owner: item.owner,
        visual,
        opacity: opacity.clamp(0.0, 1.0),
        scale,
    }
}

/// Top-left corner of a `box_px` square pinned to `position`, inset from the canvas edges.
fn anchor_origin(canvas: Canvas, position: Position, box_px: f64) -> Vec2 {
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);
    let x = match position.x {
        HAlign::Left => EDGE_INSET_PX,
        HAlign::Right => w - EDGE_INSET_PX - box_px,
    };
    let y = match position.y {
        VAlign::Top => EDGE_INSET_PX,
        VAlign::Middle => (h - box_px) / 2.0,
        VAlign::Bottom => h - EDGE_INSET_PX - box_px,
    };
    Vec2::new(x, y)
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
