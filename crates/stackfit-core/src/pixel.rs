//! Rounding to the device pixel grid.

use crate::errors::LayoutError;

/// The device pixel grid: coordinates snap to multiples of `precision`,
/// the reciprocal of the display scale.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelGrid {
    precision: f64,
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self { precision: 1.0 }
    }
}

impl PixelGrid {
    /// Create a grid for a display scale factor (2.0 for a @2x display).
    pub fn new(scale: f64) -> Result<Self, LayoutError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(LayoutError::InvalidScale { scale });
        }
        Ok(Self { precision: 1.0 / scale })
    }

    /// Create a grid for an optional display scale. Without a display the
    /// grid falls back to whole units.
    pub fn from_scale(scale: Option<f64>) -> Result<Self, LayoutError> {
        match scale {
            Some(scale) => Self::new(scale),
            None => Ok(Self::default()),
        }
    }

    /// Size of one device pixel.
    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// Round to the nearest pixel.
    pub fn round(&self, value: f64) -> f64 {
        self.snap(value, f64::round)
    }

    /// Round down to a whole pixel.
    pub fn floor(&self, value: f64) -> f64 {
        self.snap(value, f64::floor)
    }

    fn snap(&self, value: f64, function: fn(f64) -> f64) -> f64 {
        function(value / self.precision) * self.precision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_is_whole_units() {
        let grid = PixelGrid::from_scale(None).unwrap();
        assert!((grid.precision() - 1.0).abs() < 0.001);
        assert!((grid.round(10.4) - 10.0).abs() < 0.001);
        assert!((grid.floor(10.9) - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_retina_grid() {
        let grid = PixelGrid::new(2.0).unwrap();
        assert!((grid.round(10.3) - 10.5).abs() < 0.001);
        assert!((grid.floor(10.4) - 10.0).abs() < 0.001);
        assert!((grid.floor(94.67) - 94.5).abs() < 0.001);
    }

    #[test]
    fn test_invalid_scale() {
        assert_eq!(
            PixelGrid::new(0.0),
            Err(LayoutError::InvalidScale { scale: 0.0 })
        );
        assert!(PixelGrid::new(f64::NAN).is_err());
    }
}
