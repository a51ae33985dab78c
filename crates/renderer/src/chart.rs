//! Heatmap chart assembly.
//!
//! `ScaleSet::from_dataset` derives every scale from the dataset extent, and
//! `ChartRenderer::render` draws, in order: title and subtitle, tooltip,
//! legend, one cell per observation, bottom axis, left axis.

use heatmap_common::{
    Dataset, Dimensions, Extent, HeatmapError, HeatmapResult, Observation, MONTHS, MONTH_NAMES,
};
use tracing::{debug, instrument};

use crate::axis::{format_year, AxisSpec, Orient};
use crate::color::{palette, Color};
use crate::legend::LegendSpec;
use crate::scales::{BandScale, LinearScale, QuantizeScale};
use crate::svg::{Element, SVG_NAMESPACE};
use crate::tooltip::{ContainerBox, PointerEvent, Tooltip};

pub const DEFAULT_TITLE: &str = "Monthly Global Land-Surface Temperature";

/// Width of every cell in pixels.
pub const CELL_WIDTH: f64 = 6.0;

/// Tick count requested from the year scale.
const YEAR_TICK_COUNT: usize = 10;

/// Gap between the plot's bottom edge and the legend.
const LEGEND_GAP: f64 = 20.0;

/// All scales of one chart. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleSet {
    pub color: QuantizeScale<Color>,
    pub x: LinearScale,
    pub y: BandScale<u32>,
    /// Variance → legend x. Kept alongside the others; the legend itself is
    /// laid out on fixed 30px slots.
    pub legend: LinearScale,
}

impl ScaleSet {
    pub fn from_dataset(dataset: &Dataset, dims: &Dimensions) -> HeatmapResult<Self> {
        let (years, variance) = dataset.extents()?;
        Ok(Self::from_extents(years, variance, dims))
    }

    pub fn from_extents(years: Extent<i32>, variance: Extent<f64>, dims: &Dimensions) -> Self {
        let variance_domain = (variance.min, variance.max);
        Self {
            color: QuantizeScale::new(variance_domain, palette()),
            x: LinearScale::new(
                (years.min as f64, years.max as f64),
                (dims.margin.left, dims.plot_right()),
            ),
            y: BandScale::new(MONTHS.to_vec(), (dims.margin.top, dims.plot_bottom())),
            legend: LinearScale::new(variance_domain, (0.0, dims.width)),
        }
    }
}

/// One drawn rectangle and the reading behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub observation: Observation,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Option<Color>,
}

impl Cell {
    pub fn to_element(&self) -> Element {
        let fill = self
            .fill
            .map(|c| c.to_string())
            .unwrap_or_else(|| "none".to_string());
        // -0 prints as "-0"; the page reads it back as 0
        let variance = if self.observation.variance == 0.0 {
            0.0
        } else {
            self.observation.variance
        };
        Element::new("rect")
            .attr("class", "cell")
            .attr("width", self.width)
            .attr("height", self.height)
            .attr("x", self.x)
            .attr("y", self.y)
            .attr("data-month", self.observation.month_index())
            .attr("data-year", self.observation.year)
            .attr("data-temp", variance)
            .attr("fill", fill)
    }
}

/// Output of one render: the drawing surface plus the state hover events act on.
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub svg: Element,
    pub tooltip: Tooltip,
    pub cells: Vec<Cell>,
    pub scales: ScaleSet,
    pub base_temperature: f64,
    pub years: Extent<i32>,
    pub variance: Extent<f64>,
}

impl RenderedChart {
    /// Pointer entered the cell at `index`.
    pub fn hover(
        &mut self,
        index: usize,
        pointer: PointerEvent,
        container: ContainerBox,
        tooltip_height: f64,
    ) -> HeatmapResult<()> {
        let cell = self
            .cells
            .get(index)
            .ok_or_else(|| HeatmapError::Render(format!("no cell at index {}", index)))?;
        self.tooltip.on_enter(
            &cell.observation,
            self.base_temperature,
            pointer,
            container,
            tooltip_height,
        );
        Ok(())
    }

    /// Pointer left whichever cell it was over.
    pub fn leave(&mut self) {
        self.tooltip.on_leave();
    }

    pub fn to_svg_string(&self) -> HeatmapResult<String> {
        self.svg.to_markup()
    }
}

#[derive(Debug, Clone)]
pub struct ChartRenderer {
    dimensions: Dimensions,
    title: String,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new(Dimensions::default())
    }
}

impl ChartRenderer {
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            title: DEFAULT_TITLE.to_string(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    #[instrument(skip(self, dataset), fields(observations = dataset.len()))]
    pub fn render(&self, dataset: &Dataset) -> HeatmapResult<RenderedChart> {
        let dims = &self.dimensions;
        let (years, variance) = dataset.extents()?;
        let scales = ScaleSet::from_extents(years, variance, dims);

        let cells = self.layout_cells(dataset, &scales)?;
        debug!(
            cells = cells.len(),
            min_year = years.min,
            max_year = years.max,
            "Laid out cells"
        );

        let mut svg = Element::new("svg")
            .attr("xmlns", SVG_NAMESPACE)
            .attr("width", dims.outer_width())
            .attr("height", dims.outer_height());

        svg.push(
            Element::new("text")
                .attr("x", dims.center_x())
                .attr("y", dims.margin.top - 30.0)
                .attr("text-anchor", "middle")
                .attr("style", "font-size: 20px;")
                .attr("id", "title")
                .text(self.title.clone()),
        );
        svg.push(
            Element::new("text")
                .attr("x", dims.center_x())
                .attr("y", dims.margin.top - 5.0)
                .attr("text-anchor", "middle")
                .attr("style", "font-size: 16px;")
                .attr("id", "description")
                .text(dataset.description()?),
        );

        // lives in the container next to the svg, not inside it
        let tooltip = Tooltip::new();

        let legend = LegendSpec::new(
            scales.color.outputs().to_vec(),
            (dims.margin.left, dims.plot_bottom() + LEGEND_GAP),
        );
        svg.push(legend.to_element());

        svg.push(
            Element::new("g")
                .attr("class", "squares")
                .children(cells.iter().map(Cell::to_element)),
        );

        let x_axis = AxisSpec::new(
            "x-axis",
            Orient::Bottom,
            &scales.x,
            scales.x.ticks(YEAR_TICK_COUNT),
            format_year,
        )
        .with_tick_size_outer(0.0)
        .with_origin(0.0, dims.plot_bottom())
        .with_label_anchor("middle");
        svg.push(x_axis.to_element());

        let y_axis = AxisSpec::new("y-axis", Orient::Left, &scales.y, MONTHS, |_, i| {
            MONTH_NAMES[i].to_string()
        })
        .with_tick_size_outer(0.0)
        .with_origin(dims.margin.left, 0.0)
        .with_hidden_domain();
        svg.push(y_axis.to_element());

        Ok(RenderedChart {
            svg,
            tooltip,
            cells,
            scales,
            base_temperature: dataset.base_temperature,
            years,
            variance,
        })
    }

    /// Position and color every observation, in input order.
    fn layout_cells(&self, dataset: &Dataset, scales: &ScaleSet) -> HeatmapResult<Vec<Cell>> {
        let height = scales.y.step();
        dataset
            .observations
            .iter()
            .map(|obs| {
                let y = scales
                    .y
                    .apply(&obs.month)
                    .ok_or(HeatmapError::InvalidObservation {
                        year: obs.year,
                        month: obs.month,
                    })?;
                Ok(Cell {
                    observation: *obs,
                    x: scales.x.apply(obs.year as f64),
                    y,
                    width: CELL_WIDTH,
                    height,
                    fill: scales.color.apply(obs.variance),
                })
            })
            .collect()
    }
}
