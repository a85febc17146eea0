use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq))]
#[error("InvalidBounds: width and height must be finite and positive. width={width}, height={height}")]
pub struct BoundsError {
    width: f64,
    height: f64,
}

/// The 2D extent random points are drawn from: `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
        }
    }
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Result<Self, BoundsError> {
        let bounds = Self { width, height };
        bounds.validate()?;

        Ok(bounds)
    }

    pub(crate) fn validate(&self) -> Result<(), BoundsError> {
        let valid = |side: f64| side.is_finite() && side > 0.0;
        if !valid(self.width) || !valid(self.height) {
            return Err(BoundsError {
                width: self.width,
                height: self.height,
            });
        }

        Ok(())
    }
}
