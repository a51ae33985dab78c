//! Axis rendering.
//!
//! An `AxisSpec` is a plain value describing one axis: where its ticks sit,
//! what they say and how the axis line looks. `to_element` turns it into an
//! SVG group with the usual structure:
//!
//! ```text
//! <g id=".." transform=".." fill="none" font-size="10" ...>
//!   <path class="domain" .../>
//!   <g class="tick" transform="translate(..)"><line/><text>label</text></g>
//!   ...
//! </g>
//! ```

use crate::scales::Scale;
use crate::svg::{translate, Element};

/// Shifts marks half a pixel so one-pixel strokes land on whole pixels.
const CRISP_OFFSET: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

impl Orient {
    /// Direction ticks point away from the plot: +1 down, -1 left.
    fn k(self) -> f64 {
        match self {
            Orient::Bottom => 1.0,
            Orient::Left => -1.0,
        }
    }

    fn text_anchor(self) -> &'static str {
        match self {
            Orient::Bottom => "middle",
            Orient::Left => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    /// Tick position along the axis, already centered within bands.
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub id: String,
    pub orient: Orient,
    /// Offset of the whole axis group.
    pub origin: (f64, f64),
    pub range: (f64, f64),
    pub ticks: Vec<AxisTick>,
    pub tick_size_inner: f64,
    pub tick_size_outer: f64,
    pub tick_padding: f64,
    /// Draw the domain line without a stroke.
    pub hide_domain: bool,
    /// Inline `text-anchor` style forced on every label.
    pub label_anchor: Option<&'static str>,
}

impl AxisSpec {
    /// Build an axis from a scale, explicit tick values and a label format.
    ///
    /// Values the scale cannot place are dropped.
    pub fn new<S, I, F>(id: &str, orient: Orient, scale: &S, values: I, format: F) -> Self
    where
        S: Scale,
        I: IntoIterator<Item = S::Domain>,
        F: Fn(&S::Domain, usize) -> String,
    {
        let band_offset = (scale.bandwidth() - CRISP_OFFSET * 2.0).max(0.0) / 2.0;
        let ticks = values
            .into_iter()
            .enumerate()
            .filter_map(|(i, value)| {
                scale.position(&value).map(|p| AxisTick {
                    position: p + band_offset,
                    label: format(&value, i),
                })
            })
            .collect();

        Self {
            id: id.to_string(),
            orient,
            origin: (0.0, 0.0),
            range: scale.range(),
            ticks,
            tick_size_inner: 6.0,
            tick_size_outer: 6.0,
            tick_padding: 3.0,
            hide_domain: false,
            label_anchor: None,
        }
    }

    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin = (x, y);
        self
    }

    pub fn with_tick_size_outer(mut self, size: f64) -> Self {
        self.tick_size_outer = size;
        self
    }

    pub fn with_hidden_domain(mut self) -> Self {
        self.hide_domain = true;
        self
    }

    pub fn with_label_anchor(mut self, anchor: &'static str) -> Self {
        self.label_anchor = Some(anchor);
        self
    }

    pub fn labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|t| t.label.as_str()).collect()
    }

    /// Path data for the axis line.
    pub fn domain_path(&self) -> String {
        let k = self.orient.k();
        let outer = self.tick_size_outer;
        let r0 = self.range.0 + CRISP_OFFSET;
        let r1 = self.range.1 + CRISP_OFFSET;
        let o = CRISP_OFFSET;

        match (self.orient, outer != 0.0) {
            (Orient::Bottom, true) => {
                format!("M{},{}V{}H{}V{}", r0, k * outer, o, r1, k * outer)
            }
            (Orient::Bottom, false) => format!("M{},{}H{}", r0, o, r1),
            (Orient::Left, true) => {
                format!("M{},{}H{}V{}H{}", k * outer, r0, o, r1, k * outer)
            }
            (Orient::Left, false) => format!("M{},{}V{}", o, r0, r1),
        }
    }

    pub fn to_element(&self) -> Element {
        let k = self.orient.k();
        let spacing = self.tick_size_inner.max(0.0) + self.tick_padding;

        let mut domain = Element::new("path")
            .attr("class", "domain")
            .attr("stroke", "currentColor")
            .attr("d", self.domain_path());
        if self.hide_domain {
            domain.set_attr("style", "stroke: none;");
        }

        let mut group = Element::new("g")
            .attr("id", &self.id)
            .attr("transform", translate(self.origin.0, self.origin.1))
            .attr("fill", "none")
            .attr("font-size", 10)
            .attr("font-family", "sans-serif")
            .attr("text-anchor", self.orient.text_anchor())
            .child(domain);

        for tick in &self.ticks {
            let at = tick.position + CRISP_OFFSET;
            let (transform, line, mut text) = match self.orient {
                Orient::Bottom => (
                    translate(at, 0.0),
                    Element::new("line")
                        .attr("stroke", "currentColor")
                        .attr("y2", k * self.tick_size_inner),
                    Element::new("text")
                        .attr("fill", "currentColor")
                        .attr("y", k * spacing)
                        .attr("dy", "0.71em"),
                ),
                Orient::Left => (
                    translate(0.0, at),
                    Element::new("line")
                        .attr("stroke", "currentColor")
                        .attr("x2", k * self.tick_size_inner),
                    Element::new("text")
                        .attr("fill", "currentColor")
                        .attr("x", k * spacing)
                        .attr("dy", "0.32em"),
                ),
            };
            if let Some(anchor) = self.label_anchor {
                text.set_attr("style", format!("text-anchor: {};", anchor));
            }

            group.push(
                Element::new("g")
                    .attr("class", "tick")
                    .attr("opacity", 1)
                    .attr("transform", transform)
                    .child(line)
                    .child(text.text(tick.label.clone())),
            );
        }

        group
    }
}

/// Year labels: rounded, no grouping separators.
pub fn format_year(value: &f64, _index: usize) -> String {
    format!("{}", value.round() as i64)
}
