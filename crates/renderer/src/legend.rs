//! Color legend under the chart.
//!
//! The legend geometry is fixed: one 30px swatch per palette color and a row
//! of literal labels that does not follow the data's actual variance range.

use crate::color::Color;
use crate::svg::{translate, Element};

/// Labels printed under the swatches, in swatch-edge order.
pub const LEGEND_TICKS: [f64; 10] = [2.8, 3.9, 5.0, 6.1, 7.2, 8.3, 9.5, 10.6, 11.7, 12.8];

#[derive(Debug, Clone, PartialEq)]
pub struct LegendSpec {
    pub id: String,
    pub origin: (f64, f64),
    pub colors: Vec<Color>,
    pub labels: Vec<f64>,
    pub swatch_width: f64,
    pub swatch_height: f64,
    /// Baseline of the label row.
    pub label_y: f64,
    /// Top of the bar/tick row drawn between swatches and labels.
    pub rule_y: f64,
    pub tick_length: f64,
}

impl LegendSpec {
    pub fn new(colors: Vec<Color>, origin: (f64, f64)) -> Self {
        Self {
            id: "legend".to_string(),
            origin,
            colors,
            labels: LEGEND_TICKS.to_vec(),
            swatch_width: 30.0,
            swatch_height: 18.0,
            label_y: 30.0,
            rule_y: 17.0,
            tick_length: 3.0,
        }
    }

    fn slot_x(&self, index: usize) -> f64 {
        index as f64 * self.swatch_width
    }

    /// Label text, one decimal place.
    pub fn label_texts(&self) -> Vec<String> {
        self.labels.iter().map(|v| format!("{:.1}", v)).collect()
    }

    pub fn to_element(&self) -> Element {
        let swatches = self.colors.iter().enumerate().map(|(i, color)| {
            Element::new("rect")
                .attr("x", self.slot_x(i))
                .attr("y", 0)
                .attr("width", self.swatch_width)
                .attr("height", self.swatch_height)
                .attr("fill", color)
        });

        let labels = self.label_texts().into_iter().enumerate().map(|(i, text)| {
            Element::new("text")
                .attr("x", self.slot_x(i))
                .attr("y", self.label_y)
                .attr("style", "text-anchor: middle;")
                .text(text)
        });

        // one bar per gap between adjacent labels
        let bar_count = self.labels.len().saturating_sub(1);
        let bars = (0..bar_count).map(|i| {
            Element::new("rect")
                .attr("class", "bar")
                .attr("x", self.slot_x(i) - 1.0)
                .attr("y", self.rule_y)
                .attr("width", self.swatch_width)
                .attr("height", 1)
                .attr("fill", "black")
        });

        let ticks = (0..self.labels.len()).map(|i| {
            Element::new("line")
                .attr("class", "tick")
                .attr("x1", self.slot_x(i))
                .attr("y1", self.rule_y)
                .attr("x2", self.slot_x(i))
                .attr("y2", self.rule_y + self.tick_length)
                .attr("stroke", "black")
        });

        Element::new("g")
            .attr("id", &self.id)
            .attr("transform", translate(self.origin.0, self.origin.1))
            .children(swatches)
            .children(labels)
            .children(bars)
            .children(ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::palette;

    #[test]
    fn test_label_texts_one_decimal() {
        let legend = LegendSpec::new(palette(), (0.0, 0.0));
        assert_eq!(legend.label_texts()[2], "5.0");
        assert_eq!(legend.label_texts()[9], "12.8");
    }

    #[test]
    fn test_swatches_follow_palette_order() {
        let legend = LegendSpec::new(palette(), (60.0, 570.0)).to_element();
        let fills: Vec<&str> = legend
            .child_elements()
            .filter(|e| e.name() == "rect" && !e.has_class("bar"))
            .filter_map(|e| e.get_attr("fill"))
            .collect();
        assert_eq!(fills.first(), Some(&"#4575B4"));
        assert_eq!(fills.last(), Some(&"#D73027"));
        assert_eq!(legend.get_attr("transform"), Some("translate(60,570)"));
    }
}
