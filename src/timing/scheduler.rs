use crate::foundation::core::{Fps, FrameIndex, FrameRange};
use crate::foundation::error::{ReelError, ReelResult};
use crate::scene::model::Scene;
use crate::timing::parse::parse_timing;

/// How scene windows are positioned on the timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Each scene starts at its own timing start; gaps and overlaps are kept as authored.
    #[default]
    Explicit,
    /// Scenes play back-to-back in document order, each keeping its own duration.
    Series,
}

/// Resolved time window of one scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct RenderWindow {
    /// Index of the scene in document order.
    pub scene_index: usize,
    /// First frame of the window.
    pub from_frame: FrameIndex,
    /// Window length in frames, always `> 0`.
    pub duration_frames: u64,
}

impl RenderWindow {
    /// Window as a half-open frame range.
    pub fn range(self) -> FrameRange {
        FrameRange {
            start: self.from_frame,
            end: FrameIndex(self.from_frame.0.saturating_add(self.duration_frames)),
        }
    }

    /// Frame offset inside the window, or `None` when `frame` lies outside it.
    pub fn local_frame(self, frame: FrameIndex) -> Option<u64> {
        self.range()
            .contains(frame)
            .then(|| frame.0 - self.from_frame.0)
    }
}

/// Scene windows plus overall composition length.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Timeline {
    /// Frame rate every window was computed at.
    pub fps: Fps,
    /// One window per scene, in scene order.
    pub windows: Vec<RenderWindow>,
    /// Composition length in frames: the latest window end.
    pub total_duration: u64,
}

impl Timeline {
    /// Windows containing `frame`, in scene order.
    pub fn active_at(&self, frame: FrameIndex) -> impl Iterator<Item = &RenderWindow> + '_ {
        self.windows
            .iter()
            .filter(move |w| w.range().contains(frame))
    }
}

/// Build a timeline honouring each scene's own timing.
pub fn build_timeline(scenes: &[Scene], fps: Fps) -> ReelResult<Timeline> {
    build_timeline_with(scenes, fps, Placement::Explicit)
}

/// Build a timeline with an explicit [`Placement`] policy.
///
/// Every scene's timing is parsed and checked before anything is returned, so a bad scene
/// fails the whole build.
#[tracing::instrument(skip(scenes), fields(scene_count = scenes.len()))]
pub fn build_timeline_with(
    scenes: &[Scene],
    fps: Fps,
    placement: Placement,
) -> ReelResult<Timeline> {
    let mut windows = Vec::with_capacity(scenes.len());
    let mut cursor = 0u64;
    let mut total_duration = 0u64;

    for (scene_index, scene) in scenes.iter().enumerate() {
        let bounds = parse_timing(&scene.timing, fps)?;
        let duration_frames = match bounds.len_frames() {
            Some(len) if len > 0 => len,
            _ => {
                return Err(ReelError::InvalidSceneDuration {
                    scene_index,
                    timing: scene.timing.clone(),
                });
            }
        };

        let from_frame = match placement {
            Placement::Explicit => bounds.start,
            Placement::Series => FrameIndex(cursor),
        };
        let end = from_frame.0.checked_add(duration_frames).ok_or_else(|| {
            ReelError::validation(format!(
                "scene {scene_index} ends past the last representable frame"
            ))
        })?;
        cursor = end;
        total_duration = total_duration.max(end);

        windows.push(RenderWindow {
            scene_index,
            from_frame,
            duration_frames,
        });
    }

    tracing::debug!(total_duration, "timeline built");
    Ok(Timeline {
        fps,
        windows,
        total_duration,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/timing/scheduler.rs"]
mod tests;
