//! Linear scaling of scalar data for heights and color lookups.
//!
//! A [`Scale`] turns raw samples into a scaled copy. Autoscaled and manual scales map
//! onto `[0, 1]` so the result can be fed straight into a color map; linear scales apply
//! a fixed gradient and offset (used for z heights); null scales flatten everything to
//! one value.
//!
//! Scales computed from data keep their parameters until [`Scale::reset`] is called, so
//! a range established on one build carries over to the next.

use serde::{Deserialize, Serialize};

use crate::error::{MeshplotError, Result};

/// How a [`Scale`] derives its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum ScaleMode {
    /// Map `[min, max]` of the data onto `[0, 1]`.
    #[default]
    Autoscale,
    /// Clamp to `[low, high]`, then map that range onto `[0, 1]`.
    Manual { low: f32, high: f32 },
    /// Fixed affine map `gradient * x + offset`.
    Linear { gradient: f32, offset: f32 },
    /// Every sample becomes `constant`.
    Null { constant: f32 },
}

/// A linear scaling with lazily computed parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    mode: ScaleMode,
    /// `(gradient, offset)` once computed.
    #[serde(default)]
    params: Option<(f32, f32)>,
}

impl Default for Scale {
    fn default() -> Self {
        Self::autoscale()
    }
}

impl Scale {
    /// Creates a scale that takes its range from the data.
    #[must_use]
    pub fn autoscale() -> Self {
        Self {
            mode: ScaleMode::Autoscale,
            params: None,
        }
    }

    /// Creates a scale over a caller-supplied range.
    pub fn manual(low: f32, high: f32) -> Result<Self> {
        if low > high || !low.is_finite() || !high.is_finite() {
            return Err(MeshplotError::InvalidRange { low, high });
        }
        let mut scale = Self {
            mode: ScaleMode::Manual { low, high },
            params: None,
        };
        scale.compute_scaling(low, high);
        Ok(scale)
    }

    /// Creates a fixed `gradient * x + offset` scale.
    #[must_use]
    pub fn linear(gradient: f32, offset: f32) -> Self {
        Self {
            mode: ScaleMode::Linear { gradient, offset },
            params: Some((gradient, offset)),
        }
    }

    /// The identity scale.
    #[must_use]
    pub fn identity() -> Self {
        Self::linear(1.0, 0.0)
    }

    /// Creates a scale that maps everything to `constant`.
    #[must_use]
    pub fn null(constant: f32) -> Self {
        Self {
            mode: ScaleMode::Null { constant },
            params: Some((0.0, constant)),
        }
    }

    /// Returns the scaling mode.
    #[must_use]
    pub fn mode(&self) -> ScaleMode {
        self.mode
    }

    /// Returns `(gradient, offset)` if the parameters have been computed.
    #[must_use]
    pub fn params(&self) -> Option<(f32, f32)> {
        self.params
    }

    /// Returns whether the parameters are fixed.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.params.is_some()
    }

    /// Forgets parameters derived from data so the next transform recomputes them.
    ///
    /// Linear and null scales are unaffected.
    pub fn reset(&mut self) {
        if self.mode == ScaleMode::Autoscale {
            self.params = None;
        }
    }

    /// Fixes the parameters so that `min` maps to 0 and `max` maps to 1.
    ///
    /// A zero-width range gets a zero gradient, so every sample maps to 0.
    pub fn compute_scaling(&mut self, min: f32, max: f32) {
        match self.mode {
            ScaleMode::Autoscale | ScaleMode::Manual { .. } => {
                let span = max - min;
                self.params = if span > 0.0 && span.is_finite() {
                    Some((1.0 / span, -min / span))
                } else {
                    Some((0.0, 0.0))
                };
            }
            ScaleMode::Linear { .. } | ScaleMode::Null { .. } => {}
        }
    }

    /// Returns the finite min and max of `data`, or `None` if there are none.
    #[must_use]
    pub fn range_of(data: &[f32]) -> Option<(f32, f32)> {
        data.iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Scales a whole sequence, computing autoscale parameters first if needed.
    ///
    /// An empty input yields an empty output and leaves the scale untouched.
    pub fn transform(&mut self, data: &[f32]) -> Vec<f32> {
        if data.is_empty() {
            return Vec::new();
        }
        if !self.is_ready() {
            // Parameters are absent after deserialization as well as before autoscaling
            match self.mode {
                ScaleMode::Autoscale => {
                    let (min, max) = Self::range_of(data).unwrap_or((0.0, 0.0));
                    self.compute_scaling(min, max);
                }
                ScaleMode::Manual { low, high } => self.compute_scaling(low, high),
                ScaleMode::Linear { gradient, offset } => self.params = Some((gradient, offset)),
                ScaleMode::Null { constant } => self.params = Some((0.0, constant)),
            }
        }
        data.iter().map(|&v| self.transform_one(v)).collect()
    }

    /// Scales one sample with the current parameters.
    ///
    /// Before the parameters are computed the sample passes through unchanged.
    #[must_use]
    pub fn transform_one(&self, value: f32) -> f32 {
        let value = match self.mode {
            ScaleMode::Null { constant } => return constant,
            ScaleMode::Linear { gradient, offset } => return gradient * value + offset,
            ScaleMode::Manual { low, high } => value.clamp(low, high),
            ScaleMode::Autoscale => value,
        };
        match self.params {
            Some((gradient, offset)) => gradient * value + offset,
            None => value,
        }
    }
}
