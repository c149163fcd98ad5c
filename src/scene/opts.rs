use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::ease::Ease;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{ReelError, ReelResult};
use crate::resolve::assets::AssetResolver;
use crate::timing::scheduler::Placement;

/// Composition-wide settings.
///
/// This is the only place a default frame rate exists; everything downstream receives the
/// chosen [`Fps`] explicitly.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderOpts {
    /// Timeline frame rate.
    pub fps: Fps,
    /// Output canvas in pixels.
    pub canvas: Canvas,
    /// Scene window placement policy.
    pub placement: Placement,
    /// Scene fade-in/fade-out length in frames.
    pub fade_frames: u64,
    /// Curve of the scene fade-in and fade-out.
    pub fade_ease: Ease,
    /// Length of image and overlay entrance animations in frames.
    pub entrance_frames: u64,
    /// Curve of image and overlay entrances.
    pub entrance_ease: Ease,
    /// Base URL prepended to image and audio paths.
    pub asset_base_url: String,
    /// Base URL logo SVGs are served from.
    pub logo_base_url: String,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            fps: Fps::default(),
            canvas: Canvas::default(),
            placement: Placement::Explicit,
            fade_frames: 15,
            fade_ease: Ease::Linear,
            entrance_frames: 30,
            entrance_ease: Ease::EaseOut,
            asset_base_url: "http://localhost:9000/assets/".to_owned(),
            logo_base_url: "https://abrudz.github.io/logos/".to_owned(),
        }
    }
}

impl RenderOpts {
    /// Load options from a JSON file; missing keys keep their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::validation(format!("open render options '{}': {e}", path.display()))
        })?;
        serde_json::from_reader(BufReader::new(f))
            .map_err(|e| ReelError::serde(format!("parse render options JSON: {e}")))
    }

    /// Check invariants serde cannot express.
    pub fn validate(&self) -> ReelResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ReelError::validation("canvas width and height must be > 0"));
        }
        Ok(())
    }

    pub(crate) fn asset_resolver(&self) -> AssetResolver {
        AssetResolver::new(self.asset_base_url.clone(), self.logo_base_url.clone())
    }
}
