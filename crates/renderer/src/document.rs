//! Standalone HTML page hosting the chart.
//!
//! The page holds one container `div` (named by the selector) with the SVG
//! surface and the tooltip inside it. A small inline script wires the hover
//! handlers in the browser, reading each cell's `data-*` attributes, and
//! positions the tooltip exactly as `Tooltip::on_enter` does.

use heatmap_common::{HeatmapError, HeatmapResult, MONTH_NAMES};

use crate::chart::RenderedChart;
use crate::svg::Element;

pub const DEFAULT_SELECTOR: &str = "#chart";

/// Mount point for the chart, identified by an id selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    id: String,
}

impl Container {
    /// Accepts `#name` where name is ASCII alphanumerics, `-` or `_`.
    pub fn from_selector(selector: &str) -> HeatmapResult<Self> {
        let id = selector
            .trim()
            .strip_prefix('#')
            .filter(|id| {
                !id.is_empty()
                    && id
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            })
            .ok_or_else(|| HeatmapError::InvalidSelector(selector.to_string()))?;

        Ok(Self { id: id.to_string() })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn selector(&self) -> String {
        format!("#{}", self.id)
    }

    /// The container `div` with the chart surface and tooltip mounted in it.
    pub fn mount(&self, chart: &RenderedChart) -> Element {
        Element::new("div")
            .attr("id", &self.id)
            .child(chart.svg.clone())
            .child(chart.tooltip.to_element())
    }
}

impl Default for Container {
    fn default() -> Self {
        Self {
            id: "chart".to_string(),
        }
    }
}

const PAGE_STYLE: &str = "\
body { font-family: sans-serif; }
#{id} { position: relative; display: inline-block; }
#tooltip { position: absolute; pointer-events: none; padding: 6px 10px; \
background: rgba(0, 0, 0, 0.8); color: #fff; border-radius: 4px; font-size: 12px; }
.cell:hover { stroke: #000; stroke-width: 1; }";

const HOVER_SCRIPT: &str = r#"(function () {
  var container = document.querySelector(SELECTOR);
  var tooltip = document.getElementById("tooltip");
  container.querySelectorAll(".cell").forEach(function (cell) {
    cell.addEventListener("mouseover", function (event) {
      var year = cell.getAttribute("data-year");
      var month = MONTHS[Number(cell.getAttribute("data-month"))];
      var temp = BASE + Number(cell.getAttribute("data-temp"));
      tooltip.innerHTML = year + " - " + month + "<br/>Temperature: " + temp.toFixed(2) + "℃";
      tooltip.setAttribute("data-year", year);
      var box = container.getBoundingClientRect();
      tooltip.style.left = (event.pageX - box.left + 30) + "px";
      tooltip.style.top = (event.pageY - box.top - tooltip.offsetHeight + 50) + "px";
      tooltip.style.opacity = 1;
    });
    cell.addEventListener("mouseout", function () {
      tooltip.style.opacity = 0;
    });
  });
})();"#;

/// Render the full HTML page for `chart` mounted at `container`.
pub fn render_document(chart: &RenderedChart, container: &Container) -> HeatmapResult<String> {
    let body = container.mount(chart).to_markup()?;
    let title = chart
        .svg
        .find_by_id("title")
        .map(|t| t.text_content())
        .unwrap_or_default();
    let months = MONTH_NAMES
        .iter()
        .map(|m| format!("\"{}\"", m))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>\n{style}\n</style>\n</head>\n<body>\n{body}\n\
         <script>\nvar SELECTOR = \"{selector}\";\nvar BASE = {base};\nvar MONTHS = [{months}];\n{script}\n</script>\n\
         </body>\n</html>\n",
        title = escape_html(&title),
        style = PAGE_STYLE.replace("{id}", container.id()),
        body = body,
        selector = container.selector(),
        base = chart.base_temperature,
        months = months,
        script = HOVER_SCRIPT,
    ))
}

fn escape_html(text: &str) -> String {
    quick_xml::escape::escape(text).into_owned()
}
