use crate::animation::ease::Ease;

/// One keyframe of a scalar track, in window-local frames.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe {
    /// Window-local frame index for this key.
    pub frame: u64,
    /// Value at `frame`.
    pub value: f64,
    /// Easing function applied toward the next keyframe.
    pub ease: Ease, // ease applied toward next key
}

/// Piecewise scalar track. Values hold flat before the first and after the last key.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframes {
    /// Keyframes sorted by `frame`.
    pub keys: Vec<Keyframe>,
}

impl Keyframes {
    /// Track that always yields `value`.
    pub fn constant(value: f64) -> Self {
        Self {
            keys: vec![Keyframe {
                frame: 0,
                value,
                ease: Ease::Linear,
            }],
        }
    }

    /// Sample the track at window-local frame `f`.
    pub fn sample(&self, f: u64) -> f64 {
        let Some(first) = self.keys.first() else {
            return 0.0;
        };

        let idx = self.keys.partition_point(|k| k.frame <= f);
        if idx == 0 {
            return first.value;
        }
        if idx >= self.keys.len() {
            return self.keys[self.keys.len() - 1].value;
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.frame.saturating_sub(a.frame);
        if denom == 0 {
            return a.value;
        }

        let t = ((f - a.frame) as f64) / (denom as f64);
        let te = a.ease.apply(t);
        a.value + (b.value - a.value) * te
    }
}

/// Fade-in / hold / fade-out opacity track for a window of `duration` frames.
///
/// Keys sit at `0`, `fade`, `duration - fade` and `duration`. The fade length is capped at
/// half the window so short scenes still reach full opacity at their midpoint. `ease`
/// shapes both the fade-in and the fade-out.
pub fn scene_fade(duration: u64, fade: u64, ease: Ease) -> Keyframes {
    let fade = fade.min(duration / 2);
    if fade == 0 {
        return Keyframes::constant(1.0);
    }

    let key = |frame, value| Keyframe { frame, value, ease };
    Keyframes {
        keys: vec![
            key(0, 0.0),
            key(fade, 1.0),
            key(duration - fade, 1.0),
            key(duration, 0.0),
        ],
    }
}

/// One-shot entrance tween from `from` to `to` over `duration_frames`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Entrance {
    /// Value at local frame 0.
    pub from: f64,
    /// Value once the entrance has finished.
    pub to: f64,
    /// Entrance length in frames.
    pub duration_frames: u64,
    /// Progress curve.
    pub ease: Ease,
}

impl Entrance {
    /// Tween from `from` to `to` over `duration_frames` along `ease`.
    pub fn new(from: f64, to: f64, duration_frames: u64, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration_frames,
            ease,
        }
    }

    /// Value at window-local frame `f`; holds `to` once finished.
    pub fn sample(self, f: u64) -> f64 {
        if f >= self.duration_frames {
            return self.to;
        }
        let t = self.ease.apply(f as f64 / self.duration_frames as f64);
        self.from + (self.to - self.from) * t
    }
}

/// Prefix of `text` revealed after `frame` frames of one-character-per-frame typing.
pub fn typed_prefix(text: &str, frame: u64) -> &str {
    let visible = usize::try_from(frame).unwrap_or(usize::MAX);
    match text.char_indices().nth(visible) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
