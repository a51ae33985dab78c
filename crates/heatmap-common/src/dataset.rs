//! Monthly temperature variance dataset.
//!
//! The document shape follows the published reference data:
//!
//! ```json
//! {
//!   "baseTemperature": 8.66,
//!   "monthlyVariance": [{ "year": 1753, "month": 1, "variance": -1.366 }]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{HeatmapError, HeatmapResult};

/// A single monthly reading: deviation from the base temperature in °C.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub year: i32,
    /// Calendar month, 1 = January.
    pub month: u32,
    pub variance: f64,
}

impl Observation {
    pub fn new(year: i32, month: u32, variance: f64) -> Self {
        Self { year, month, variance }
    }

    /// Zero-based month index, as tagged on drawn cells.
    pub fn month_index(&self) -> u32 {
        self.month.saturating_sub(1)
    }

    /// Absolute temperature for this reading.
    pub fn temperature(&self, base_temperature: f64) -> f64 {
        base_temperature + self.variance
    }
}

/// The full document returned by the data source. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub base_temperature: f64,
    #[serde(rename = "monthlyVariance")]
    pub observations: Vec<Observation>,
}

/// Inclusive `[min, max]` pair of a numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent<T> {
    pub min: T,
    pub max: T,
}

impl<T: Copy + PartialOrd> Extent<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Compute the extent of an iterator, `None` when it is empty.
    ///
    /// Incomparable values (NaN) are skipped.
    pub fn of<I: IntoIterator<Item = T>>(values: I) -> Option<Self> {
        values.into_iter().fold(None, |acc, v| {
            if v.partial_cmp(&v).is_none() {
                return acc;
            }
            Some(match acc {
                None => Extent::new(v, v),
                Some(e) => Extent::new(
                    if v < e.min { v } else { e.min },
                    if v > e.max { v } else { e.max },
                ),
            })
        })
    }
}

impl Dataset {
    pub fn new(base_temperature: f64, observations: Vec<Observation>) -> Self {
        Self {
            base_temperature,
            observations,
        }
    }

    /// Parse the JSON document as delivered by the data source.
    pub fn from_json(json_str: &str) -> HeatmapResult<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Parse from raw response bytes.
    pub fn from_slice(bytes: &[u8]) -> HeatmapResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn year_extent(&self) -> Option<Extent<i32>> {
        Extent::of(self.observations.iter().map(|o| o.year))
    }

    pub fn variance_extent(&self) -> Option<Extent<f64>> {
        Extent::of(self.observations.iter().map(|o| o.variance))
    }

    /// Both extents, or `EmptyDataset` when there is nothing to draw.
    pub fn extents(&self) -> HeatmapResult<(Extent<i32>, Extent<f64>)> {
        match (self.year_extent(), self.variance_extent()) {
            (Some(years), Some(variance)) => Ok((years, variance)),
            _ => Err(HeatmapError::EmptyDataset),
        }
    }

    /// Subtitle line shown under the chart title.
    pub fn description(&self) -> HeatmapResult<String> {
        let (years, _) = self.extents()?;
        Ok(format!(
            "{} - {}: base temperature {}℃",
            years.min, years.max, self.base_temperature
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reference_document() {
        let json = r#"{
            "baseTemperature": 8.66,
            "monthlyVariance": [
                {"year": 1753, "month": 1, "variance": -1.366},
                {"year": 1753, "month": 2, "variance": -2.223}
            ]
        }"#;

        let dataset = Dataset::from_json(json).unwrap();
        assert_eq!(dataset.base_temperature, 8.66);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.observations[1], Observation::new(1753, 2, -2.223));
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let err = Dataset::from_json(r#"{"monthlyVariance": []}"#).unwrap_err();
        assert!(matches!(err, HeatmapError::Parse(_)));
    }

    #[test]
    fn test_extent_skips_nan() {
        let extent = Extent::of([3.0, f64::NAN, -1.0, 2.0]).unwrap();
        assert_eq!(extent, Extent::new(-1.0, 3.0));
    }

    #[test]
    fn test_extent_of_empty_is_none() {
        assert!(Extent::<f64>::of(Vec::new()).is_none());
    }

    #[test]
    fn test_description_keeps_base_temperature_as_given() {
        let dataset = Dataset::new(
            8.0,
            vec![Observation::new(2015, 3, 0.1), Observation::new(1753, 1, 0.2)],
        );
        assert_eq!(
            dataset.description().unwrap(),
            "1753 - 2015: base temperature 8℃"
        );
    }

    #[test]
    fn test_empty_dataset_has_no_extents() {
        let dataset = Dataset::new(8.66, vec![]);
        assert!(matches!(dataset.extents(), Err(HeatmapError::EmptyDataset)));
    }
}
