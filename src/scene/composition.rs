use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::eval::evaluator::{Evaluator, FrameState};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ReelError, ReelResult};
use crate::resolve::assets::AssetResolver;
use crate::resolve::elements::{RenderItem, resolve_render_order};
use crate::scene::model::VideoDocument;
use crate::scene::opts::RenderOpts;
use crate::timing::scheduler::{Timeline, build_timeline_with};

/// A validated, ready-to-render video.
///
/// Construction parses every timing, builds the timeline and resolves each scene's render
/// order once. After that the composition is immutable and frames can be evaluated in any
/// order, from any thread.
#[derive(Debug, Clone)]
pub struct Composition {
    doc: VideoDocument,
    opts: RenderOpts,
    timeline: Timeline,
    items: Vec<Vec<RenderItem>>,
    assets: AssetResolver,
}

impl Composition {
    /// Build a composition from an already parsed document.
    #[tracing::instrument(skip_all, fields(scene_count = doc.scenes.len()))]
    pub fn new(doc: VideoDocument, opts: RenderOpts) -> ReelResult<Self> {
        opts.validate()?;

        let timeline = build_timeline_with(&doc.scenes, opts.fps, opts.placement)?;
        if timeline.total_duration == 0 {
            return Err(ReelError::validation(
                "composition has no scenes (total duration is 0 frames)",
            ));
        }

        let items = doc
            .scenes
            .iter()
            .map(|scene| resolve_render_order(&scene.visual_elements))
            .collect();
        let assets = opts.asset_resolver();

        tracing::info!(
            total_duration = timeline.total_duration,
            "composition ready"
        );
        Ok(Self {
            doc,
            opts,
            timeline,
            items,
            assets,
        })
    }

    /// Parse a scene document from a JSON reader and build it.
    pub fn from_reader<R: std::io::Read>(r: R, opts: RenderOpts) -> ReelResult<Self> {
        let doc: VideoDocument = serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse scene document JSON: {e}")))?;
        Self::new(doc, opts)
    }

    /// Parse a scene document from a JSON string and build it.
    pub fn from_json_str(s: &str, opts: RenderOpts) -> ReelResult<Self> {
        let doc: VideoDocument = serde_json::from_str(s)
            .map_err(|e| ReelError::serde(format!("parse scene document JSON: {e}")))?;
        Self::new(doc, opts)
    }

    /// Parse a scene document from a JSON file on disk and build it.
    pub fn from_path(path: impl AsRef<Path>, opts: RenderOpts) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::validation(format!("open scene document '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f), opts)
    }

    /// Source document.
    pub fn document(&self) -> &VideoDocument {
        &self.doc
    }

    /// Options the composition was built with.
    pub fn opts(&self) -> &RenderOpts {
        &self.opts
    }

    /// Scene windows and total length.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Composition length in frames.
    pub fn duration_frames(&self) -> u64 {
        self.timeline.total_duration
    }

    /// Resolved draw order of one scene.
    pub fn render_items(&self, scene_index: usize) -> Option<&[RenderItem]> {
        self.items.get(scene_index).map(Vec::as_slice)
    }

    /// Evaluate the declarative state of one frame.
    pub fn eval_frame(&self, frame: FrameIndex) -> ReelResult<FrameState> {
        Evaluator::eval_frame(self, frame)
    }

    pub(crate) fn assets(&self) -> &AssetResolver {
        &self.assets
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/composition.rs"]
mod tests;
