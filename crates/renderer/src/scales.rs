//! Scales mapping data values to pixels and colors.
//!
//! Three kinds are needed by the chart:
//! - `LinearScale`: continuous domain → continuous range (years, legend)
//! - `BandScale`: ordered discrete domain → evenly spaced bands (months)
//! - `QuantizeScale`: continuous domain → fixed set of outputs (colors)
//!
//! All scales are immutable values; build a new one to change a domain.

/// Positional scale an axis can be drawn from.
pub trait Scale {
    type Domain;

    /// Pixel position for a domain value, `None` if the value has no position.
    fn position(&self, value: &Self::Domain) -> Option<f64>;

    /// Output range as `(start, end)`.
    fn range(&self) -> (f64, f64);

    /// Width of each band; zero for continuous scales.
    fn bandwidth(&self) -> f64 {
        0.0
    }
}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Linear interpolation between two numeric intervals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Map a domain value into the range.
    ///
    /// Values outside the domain extrapolate. A zero-width domain maps
    /// everything to the middle of the range.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span != 0.0 {
            (value - d0) / span
        } else if span.is_nan() {
            f64::NAN
        } else {
            0.5
        };
        r0 + t * (r1 - r0)
    }

    /// Roughly `count` human-friendly values spanning the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }
}

impl Scale for LinearScale {
    type Domain = f64;

    fn position(&self, value: &f64) -> Option<f64> {
        let x = self.apply(*value);
        x.is_finite().then_some(x)
    }

    fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Evenly spaced bands, one per domain value, with no padding.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<T> {
    domain: Vec<T>,
    range: (f64, f64),
}

impl<T: PartialEq> BandScale<T> {
    pub fn new(domain: Vec<T>, range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    /// Distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        let (r0, r1) = self.range;
        (r1 - r0) / self.domain.len().max(1) as f64
    }

    /// Start of the band for `value`, `None` when it is not in the domain.
    pub fn apply(&self, value: &T) -> Option<f64> {
        let index = self.domain.iter().position(|d| d == value)?;
        Some(self.range.0 + self.step() * index as f64)
    }
}

impl<T: PartialEq> Scale for BandScale<T> {
    type Domain = T;

    fn position(&self, value: &T) -> Option<f64> {
        self.apply(value)
    }

    fn range(&self) -> (f64, f64) {
        self.range
    }

    fn bandwidth(&self) -> f64 {
        self.step()
    }
}

/// Splits `[min, max]` into equal-width buckets, one per output.
///
/// A value sitting exactly on a threshold belongs to the upper bucket.
/// Values outside the domain clamp to the first or last output.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizeScale<T> {
    domain: (f64, f64),
    thresholds: Vec<f64>,
    outputs: Vec<T>,
}

impl<T: Clone> QuantizeScale<T> {
    /// Build a scale over `[min, max]`. `outputs` must not be empty.
    pub fn new(domain: (f64, f64), outputs: Vec<T>) -> Self {
        let (x0, x1) = domain;
        let n = outputs.len().saturating_sub(1);
        let thresholds = (0..n)
            .map(|i| {
                let i = i as f64;
                let n = n as f64;
                ((i + 1.0) * x1 - (i - n) * x0) / (n + 1.0)
            })
            .collect();

        Self {
            domain,
            thresholds,
            outputs,
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn outputs(&self) -> &[T] {
        &self.outputs
    }

    /// Bucket index for a value, `None` for NaN.
    pub fn index(&self, value: f64) -> Option<usize> {
        if value.is_nan() {
            return None;
        }
        Some(self.thresholds.partition_point(|&t| t <= value))
    }

    pub fn apply(&self, value: f64) -> Option<T> {
        self.index(value)
            .and_then(|i| self.outputs.get(i))
            .cloned()
    }

    /// Domain interval `[lo, hi)` covered by the output at `index`.
    pub fn invert_extent(&self, index: usize) -> Option<(f64, f64)> {
        if index >= self.outputs.len() {
            return None;
        }
        let lo = if index == 0 {
            self.domain.0
        } else {
            self.thresholds[index - 1]
        };
        let hi = self
            .thresholds
            .get(index)
            .copied()
            .unwrap_or(self.domain.1);
        Some((lo, hi))
    }
}

/// Nicely rounded tick values covering `[start, stop]`.
///
/// Picks a step of 1, 2 or 5 times a power of ten so that about `count`
/// ticks fit, and returns only ticks inside the interval. Reversed
/// intervals produce descending ticks.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };

    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if i2 < i1 {
        return Vec::new();
    }

    let mut values: Vec<f64> = (i1..=i2)
        .map(|i| {
            let i = i as f64;
            if inc < 0.0 {
                i / -inc
            } else {
                i * inc
            }
        })
        .collect();

    if reverse {
        values.reverse();
    }
    values
}

/// Returns `(first index, last index, increment)`; a negative increment
/// means "divide by its magnitude" to keep small steps exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> (i64, i64, f64) {
    let step = (stop - start) / count;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let scale = 10f64.powf(-power) / factor;
        i1 = round_half_up(start * scale);
        i2 = round_half_up(stop * scale);
        if i1 / scale < start {
            i1 += 1.0;
        }
        if i2 / scale > stop {
            i2 -= 1.0;
        }
        inc = -scale;
    } else {
        let scale = 10f64.powf(power) * factor;
        i1 = round_half_up(start / scale);
        i2 = round_half_up(stop / scale);
        if i1 * scale < start {
            i1 += 1.0;
        }
        if i2 * scale > stop {
            i2 -= 1.0;
        }
        inc = scale;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }

    (i1 as i64, i2 as i64, inc)
}

/// Ties round toward +∞ so tick indices agree on both sides of zero.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let scale = LinearScale::new((1753.0, 2015.0), (60.0, 860.0));
        assert_eq!(scale.apply(1753.0), 60.0);
        assert_eq!(scale.apply(2015.0), 860.0);
    }

    #[test]
    fn test_linear_degenerate_domain_maps_to_midpoint() {
        let scale = LinearScale::new((1900.0, 1900.0), (60.0, 860.0));
        assert_eq!(scale.apply(1900.0), 460.0);
        assert_eq!(scale.apply(1950.0), 460.0);
    }

    #[test]
    fn test_band_positions() {
        let scale = BandScale::new((1..=12u32).collect(), (50.0, 550.0));
        assert_eq!(scale.apply(&1), Some(50.0));
        assert_eq!(scale.apply(&13), None);
        assert!((scale.bandwidth() - 500.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_quantize_threshold_goes_up() {
        let scale = QuantizeScale::new((0.0, 9.0), (0..9).collect::<Vec<u8>>());
        assert_eq!(scale.thresholds(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(scale.apply(0.999), Some(0));
        assert_eq!(scale.apply(1.0), Some(1));
        assert_eq!(scale.apply(9.0), Some(8));
        assert_eq!(scale.apply(f64::NAN), None);
    }

    #[test]
    fn test_ticks_small_step() {
        assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn test_ticks_reversed() {
        assert_eq!(ticks(10.0, 0.0, 2), vec![10.0, 5.0, 0.0]);
    }
}
