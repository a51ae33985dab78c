//! Fixed chart geometry.

use serde::{Deserialize, Serialize};

/// Space reserved around the plotting area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 50.0,
            right: 50.0,
            bottom: 50.0,
            left: 60.0,
        }
    }
}

/// Plotting area size plus margins. Constant for a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub margin: Margin,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
            margin: Margin::default(),
        }
    }
}

impl Dimensions {
    /// Width of the drawing surface including margins.
    pub fn outer_width(&self) -> f64 {
        self.width + self.margin.left + self.margin.right
    }

    /// Height of the drawing surface including margins.
    pub fn outer_height(&self) -> f64 {
        self.height + self.margin.top + self.margin.bottom
    }

    /// Horizontal center of the plotting area.
    pub fn center_x(&self) -> f64 {
        self.width / 2.0 + self.margin.left
    }

    /// Y coordinate of the plotting area's bottom edge.
    pub fn plot_bottom(&self) -> f64 {
        self.height + self.margin.top
    }

    /// X coordinate of the plotting area's right edge.
    pub fn plot_right(&self) -> f64 {
        self.width + self.margin.left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_surface_size() {
        let dims = Dimensions::default();
        assert_eq!(dims.outer_width(), 910.0);
        assert_eq!(dims.outer_height(), 600.0);
        assert_eq!(dims.center_x(), 460.0);
        assert_eq!(dims.plot_bottom(), 550.0);
    }

    #[test]
    fn test_margin_defaults_when_omitted() {
        let dims: Dimensions = serde_json::from_str(r#"{"width": 400, "height": 300}"#).unwrap();
        assert_eq!(dims.margin, Margin::default());
        assert_eq!(dims.plot_right(), 460.0);
    }
}
