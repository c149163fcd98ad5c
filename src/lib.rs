//! reelcast turns declarative scene documents into frame-indexed compositions for short-form
//! video.
//!
//! A document is a list of scenes, each with a `"<start>-<end>"` timing in seconds, narration
//! and a list of visual elements. Building a [`Composition`]:
//!
//! - parses every timing at an explicit [`Fps`] and lays scenes out as [`RenderWindow`]s
//! - resolves each scene's elements into a flat draw order (primaries, then overlays)
//!
//! After that, [`Composition::eval_frame`] yields a serialisable [`FrameState`] per frame with
//! the opacity, scale and content the host renderer should draw.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod eval;
pub(crate) mod resolve;
pub(crate) mod scene;
pub(crate) mod timing;

pub use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Vec2};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::animation::anim::{Entrance, Keyframe, Keyframes, scene_fade, typed_prefix};
pub use crate::animation::ease::Ease;
pub use crate::eval::evaluator::{AudioCue, Evaluator, FrameState, ItemFrame, SceneFrame, Visual};
pub use crate::resolve::assets::AssetResolver;
pub use crate::resolve::elements::{
    DEFAULT_CODE_LANGUAGE, DEFAULT_LOGO_NAME, Layer, RenderItem, RenderKind, resolve_render_order,
};
pub use crate::scene::composition::Composition;
pub use crate::scene::model::{
    CodeElement, Emphasis, FontSize, HAlign, ImageElement, LogoElement, LogoOverlay, Overlay,
    Position, Scene, Size, TextOverlay, TextStyle, VAlign, VideoDocument, VisualElement,
};
pub use crate::scene::opts::RenderOpts;
pub use crate::timing::parse::{FrameBounds, TimingSpec, parse_timing};
pub use crate::timing::scheduler::{
    Placement, RenderWindow, Timeline, build_timeline, build_timeline_with,
};
