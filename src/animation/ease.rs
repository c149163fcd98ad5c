/// Progress curve for scene fades and item entrances.
///
/// The three non-linear curves share one cubic: `EaseOut` mirrors it, `EaseInOut` runs it
/// over each half of the interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant rate.
    #[default]
    Linear,
    /// Starts slow, ends fast.
    EaseIn,
    /// Starts fast and settles into the target.
    EaseOut,
    /// Slow at both ends.
    EaseInOut,
}

impl Ease {
    /// Map progress `t` to eased progress. `t` is clamped to `[0, 1]` first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => cubic(t),
            Self::EaseOut => 1.0 - cubic(1.0 - t),
            Self::EaseInOut if t < 0.5 => cubic(2.0 * t) / 2.0,
            Self::EaseInOut => 1.0 - cubic(2.0 * (1.0 - t)) / 2.0,
        }
    }
}

fn cubic(t: f64) -> f64 {
    t * t * t
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
