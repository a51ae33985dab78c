//! Hover tooltip shared by every cell.
//!
//! There is exactly one tooltip per chart. Each hover overwrites its content,
//! position and visibility; the last event wins. Leaving a cell only hides it,
//! the content stays until the next hover.

use heatmap_common::{month_name, Observation};

use crate::svg::Element;

/// Pixels between the pointer and the tooltip's left edge.
const POINTER_OFFSET_X: f64 = 30.0;
/// Added to the pointer y after lifting the tooltip by its own height.
const POINTER_OFFSET_Y: f64 = 50.0;

/// Pointer location in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub page_x: f64,
    pub page_y: f64,
}

/// Page-space origin of the chart container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerBox {
    pub left: f64,
    pub top: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub id: String,
    pub opacity: f64,
    pub lines: Vec<String>,
    /// Year of the last hovered cell.
    pub year: Option<i32>,
    /// Reserved `data-date` slot. Never filled in.
    pub date: String,
    pub left: Option<f64>,
    pub top: Option<f64>,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self {
            id: "tooltip".to_string(),
            opacity: 0.0,
            lines: Vec::new(),
            year: None,
            date: String::new(),
            left: None,
            top: None,
        }
    }
}

/// `"<year> - <Month>"` and `"Temperature: <t>℃"` for one reading.
pub fn tooltip_lines(observation: &Observation, base_temperature: f64) -> [String; 2] {
    let month = month_name(observation.month).unwrap_or_default();
    [
        format!("{} - {}", observation.year, month),
        format!(
            "Temperature: {}℃",
            to_fixed(observation.temperature(base_temperature), 2)
        ),
    ]
}

/// Fixed-point text with `digits` decimals, rounding exact ties away from
/// zero the way the page script's `toFixed` does. Negative zero prints
/// unsigned.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value == 0.0 {
        return format!("{:.*}", digits, 0.0);
    }
    if !value.is_finite() || !is_exact_tie(value, digits) {
        return format!("{:.*}", digits, value);
    }
    // one ulp further from zero is past the tie but nowhere near the next boundary
    let nudged = f64::from_bits(value.to_bits() + 1);
    format!("{:.*}", digits, nudged)
}

/// True when the exact decimal expansion of `value` is a 5 right after the
/// kept digits followed only by zeros.
fn is_exact_tie(value: f64, digits: usize) -> bool {
    // f64 fractions terminate within 1074 decimal places
    let exact = format!("{:.1100}", value.abs());
    let Some(point) = exact.find('.') else {
        return false;
    };
    let tail = exact[point + 1..].trim_end_matches('0');
    tail.len() == digits + 1 && tail.ends_with('5')
}

impl Tooltip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered a cell: fill in, move next to the pointer, show.
    pub fn on_enter(
        &mut self,
        observation: &Observation,
        base_temperature: f64,
        pointer: PointerEvent,
        container: ContainerBox,
        tooltip_height: f64,
    ) {
        self.lines = tooltip_lines(observation, base_temperature).to_vec();
        self.year = Some(observation.year);
        self.left = Some(pointer.page_x - container.left + POINTER_OFFSET_X);
        self.top = Some(pointer.page_y - container.top - tooltip_height + POINTER_OFFSET_Y);
        self.opacity = 1.0;
    }

    /// Pointer left a cell: hide, keep content.
    pub fn on_leave(&mut self) {
        self.opacity = 0.0;
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    fn style(&self) -> String {
        let mut style = String::new();
        if let Some(left) = self.left {
            style.push_str(&format!("left: {}px; ", left));
        }
        if let Some(top) = self.top {
            style.push_str(&format!("top: {}px; ", top));
        }
        style.push_str(&format!("opacity: {};", self.opacity));
        style
    }

    /// The tooltip as an HTML `div`, lines separated by `<br/>`.
    pub fn to_element(&self) -> Element {
        let mut div = Element::new("div")
            .attr("id", &self.id)
            .attr("style", self.style())
            .attr("data-date", &self.date);
        if let Some(year) = self.year {
            div.set_attr("data-year", year);
        }

        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                div.push(Element::new("br"));
            }
            div.push(Element::new("span").text(line.clone()));
        }
        div
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden_and_empty() {
        let tooltip = Tooltip::new();
        assert!(!tooltip.is_visible());
        assert_eq!(
            tooltip.to_element().to_markup().unwrap(),
            r#"<div id="tooltip" style="opacity: 0;" data-date=""></div>"#
        );
    }

    #[test]
    fn test_enter_positions_relative_to_container() {
        let mut tooltip = Tooltip::new();
        tooltip.on_enter(
            &Observation::new(1900, 1, -0.5),
            8.0,
            PointerEvent { page_x: 300.0, page_y: 200.0 },
            ContainerBox { left: 100.0, top: 20.0 },
            40.0,
        );
        assert_eq!(tooltip.left, Some(230.0));
        assert_eq!(tooltip.top, Some(190.0));
        assert_eq!(tooltip.text(), "1900 - January\nTemperature: 7.50℃");
    }

    #[test]
    fn test_temperature_ties_round_up() {
        let lines = tooltip_lines(&Observation::new(1900, 1, 0.125), 8.0);
        assert_eq!(lines[1], "Temperature: 8.13℃");

        let lines = tooltip_lines(&Observation::new(1900, 1, -8.125), 0.0);
        assert_eq!(lines[1], "Temperature: -8.13℃");
    }

    #[test]
    fn test_to_fixed_matches_page_script() {
        assert_eq!(to_fixed(8.125, 2), "8.13");
        assert_eq!(to_fixed(0.375, 2), "0.38");
        assert_eq!(to_fixed(2.5, 0), "3");
        // 1.005 is stored just below the tie
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(7.5, 2), "7.50");
        assert_eq!(to_fixed(8.66 - 1.366, 2), "7.29");
        assert_eq!(to_fixed(-0.0, 2), "0.00");
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
    }
}
