//! Keyframe tracks sampled by normalized cycle phase

use crate::error::{AnimError, Result};

/// Segments per track; every track carries `SEGMENTS + 1` samples
pub const SEGMENTS: usize = 6;

/// Samples per track including the explicit wrap sample
pub const SAMPLE_COUNT: usize = SEGMENTS + 1;

/// One degree of freedom over a full motion cycle
///
/// Samples are evenly spaced in phase: sample `i` sits at `i / SEGMENTS`.
/// The last sample is the wrap value. For periodic quantities it equals the
/// first sample; for continuous rotations it may differ by whole turns so the
/// joint keeps turning the same way instead of snapping back.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JointTrack {
    samples: [f32; SAMPLE_COUNT],
}

impl JointTrack {
    /// Create a track from a fixed sample table
    pub const fn new(samples: [f32; SAMPLE_COUNT]) -> Self {
        Self { samples }
    }

    /// Create a track from a slice, checking its length
    pub fn from_slice(samples: &[f32]) -> Result<Self> {
        let samples: [f32; SAMPLE_COUNT] =
            samples.try_into().map_err(|_| AnimError::TrackLength {
                expected: SAMPLE_COUNT,
                actual: samples.len(),
            })?;
        Ok(Self { samples })
    }

    /// Raw sample table
    pub fn samples(&self) -> &[f32; SAMPLE_COUNT] {
        &self.samples
    }

    /// Difference between the wrap sample and the first sample
    pub fn wrap_offset(&self) -> f32 {
        self.samples[SEGMENTS] - self.samples[0]
    }

    /// Whether the wrap sample repeats the first sample exactly
    pub fn is_periodic(&self) -> bool {
        self.wrap_offset() == 0.0
    }

    /// Interpolated value at `phase`
    ///
    /// See [`sample`].
    pub fn sample(&self, phase: f32) -> f32 {
        sample(self, phase)
    }
}

/// Find the segment containing `phase` and the blend factor within it
///
/// Returns `(i, u)` such that the value lies between samples `i` and `i + 1`.
/// Phases outside `[0, 1]` are clamped into range first, and NaN maps to 0.
pub fn segment_at(phase: f32) -> (usize, f32) {
    let phase = if phase.is_nan() {
        0.0
    } else {
        phase.clamp(0.0, 1.0)
    };

    let seg = phase * SEGMENTS as f32;
    let index = seg.floor().clamp(0.0, (SEGMENTS - 1) as f32);
    (index as usize, seg - index)
}

/// Linearly interpolate a track at a phase in `[0, 1)`
///
/// `track[i] * (1 - u) + track[i + 1] * u` with `i = floor(phase * K)` held to
/// `0..K` and `u` the remainder. Phase 0 returns the first sample exactly; as
/// phase approaches 1 the value approaches the wrap sample.
pub fn sample(track: &JointTrack, phase: f32) -> f32 {
    let (i, u) = segment_at(phase);
    let a = track.samples[i];
    let b = track.samples[i + 1];
    a * (1.0 - u) + b * u
}
