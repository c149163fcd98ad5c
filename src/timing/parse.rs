use std::fmt;
use std::str::FromStr;

use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{ReelError, ReelResult};

/// Scene timing in seconds, parsed from the compact `"<start>-<end>"` form.
///
/// Parsing only checks the shape and the numbers; `end > start` is the scheduler's concern.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingSpec {
    /// Start offset in seconds.
    pub start_secs: f64,
    /// End offset in seconds.
    pub end_secs: f64,
}

/// Frame bounds produced from a [`TimingSpec`] at a given frame rate.
///
/// Unlike [`crate::FrameRange`] the bounds are not ordered; a reversed spec survives parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FrameBounds {
    /// First frame of the interval.
    pub start: FrameIndex,
    /// Exclusive end frame of the interval.
    pub end: FrameIndex,
}

impl FrameBounds {
    /// Frame count `end - start`, or `None` when the bounds are reversed.
    pub fn len_frames(self) -> Option<u64> {
        self.end.0.checked_sub(self.start.0)
    }
}

impl TimingSpec {
    /// Convert both bounds to frame indices.
    ///
    /// Returns `None` when either bound does not fit the frame index range at `fps`.
    pub fn to_frames(self, fps: Fps) -> Option<FrameBounds> {
        Some(FrameBounds {
            start: FrameIndex(fps.secs_to_frames(self.start_secs)?),
            end: FrameIndex(fps.secs_to_frames(self.end_secs)?),
        })
    }
}

impl FromStr for TimingSpec {
    type Err = ReelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('-');
        let (Some(start), Some(end), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ReelError::malformed_timing(s));
        };

        let start_secs = parse_secs(start).ok_or_else(|| ReelError::malformed_timing(s))?;
        let end_secs = parse_secs(end).ok_or_else(|| ReelError::malformed_timing(s))?;
        Ok(Self {
            start_secs,
            end_secs,
        })
    }
}

impl fmt::Display for TimingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start_secs, self.end_secs)
    }
}

fn parse_secs(part: &str) -> Option<f64> {
    let v = part.trim().parse::<f64>().ok()?;
    (v.is_finite() && v >= 0.0).then_some(v)
}

/// Parse `"<start>-<end>"` (seconds) into frame bounds at `fps`.
pub fn parse_timing(spec: &str, fps: Fps) -> ReelResult<FrameBounds> {
    spec.parse::<TimingSpec>()?
        .to_frames(fps)
        .ok_or_else(|| ReelError::malformed_timing(spec))
}

#[cfg(test)]
#[path = "../../tests/unit/timing/parse.rs"]
mod tests;
