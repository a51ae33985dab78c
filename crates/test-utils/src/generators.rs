//! Generators for synthetic monthly variance datasets.
//!
//! These generators create predictable, verifiable readings that can be
//! used across the test suite.

use heatmap_common::{Dataset, Observation};

/// Creates a dataset with one reading per month for `years` years.
///
/// Each variance is calculated as: `(year - first_year) * 0.01 + (month - 6.5) * 0.1`
///
/// Readings warm steadily over the years and across each year, so the
/// coldest reading is January of the first year and the warmest is
/// December of the last.
///
/// # Example
///
/// ```
/// use test_utils::create_linear_dataset;
///
/// let dataset = create_linear_dataset(1900, 3, 8.66);
/// assert_eq!(dataset.len(), 36);
/// assert_eq!(dataset.observations[0].year, 1900);
/// assert_eq!(dataset.observations[35].month, 12);
/// ```
pub fn create_linear_dataset(first_year: i32, years: usize, base_temperature: f64) -> Dataset {
    let mut observations = Vec::with_capacity(years * 12);
    for offset in 0..years {
        let year = first_year + offset as i32;
        for month in 1..=12u32 {
            let variance = offset as f64 * 0.01 + (month as f64 - 6.5) * 0.1;
            observations.push(Observation::new(year, month, variance));
        }
    }
    Dataset::new(base_temperature, observations)
}

/// Creates a dataset with a seasonal cycle on top of a warming trend.
///
/// Values swing by roughly ±2℃ through the year with a 1℃ rise over the
/// whole period, similar in shape to the published readings.
pub fn create_seasonal_dataset(first_year: i32, years: usize, base_temperature: f64) -> Dataset {
    let mut observations = Vec::with_capacity(years * 12);
    for offset in 0..years {
        let year = first_year + offset as i32;
        let trend = offset as f64 / years.max(1) as f64;
        for month in 1..=12u32 {
            let phase = (month as f64 - 1.0) / 12.0 * std::f64::consts::TAU;
            let variance = -2.0 * phase.cos() + trend;
            observations.push(Observation::new(year, month, variance));
        }
    }
    Dataset::new(base_temperature, observations)
}

/// Creates readings spread evenly across `[min, max]`, all in one year.
///
/// Handy for checking color bucket boundaries.
pub fn create_variance_sweep(min: f64, max: f64, steps: usize) -> Vec<Observation> {
    let steps = steps.max(2);
    (0..steps)
        .map(|i| {
            let t = i as f64 / (steps - 1) as f64;
            let month = (i % 12) as u32 + 1;
            Observation::new(2000, month, min + (max - min) * t)
        })
        .collect()
}
