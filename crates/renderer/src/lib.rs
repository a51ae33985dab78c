//! SVG rendering of the monthly temperature variance heatmap.
//!
//! Pieces, leaves first:
//! - Scales (quantized colors, linear years, month bands)
//! - SVG element tree and serialization
//! - Axes and the color legend
//! - Hover tooltip
//! - Chart assembly, HTML page and PNG export

pub mod axis;
pub mod chart;
pub mod color;
pub mod document;
pub mod legend;
pub mod png;
pub mod scales;
pub mod svg;
pub mod tooltip;

pub use chart::{Cell, ChartRenderer, RenderedChart, ScaleSet};
pub use color::{palette, Color};
pub use document::{render_document, Container};
pub use svg::Element;
pub use tooltip::{ContainerBox, PointerEvent, Tooltip};
