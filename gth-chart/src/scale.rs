//! Scales mapping data values to pixel positions and colors.
//!
//! - `BandScale`: discrete values to contiguous, equal-width bands (no padding)
//! - `QuantizeScale`: continuous range to a small fixed set of outputs via equal-width bins
//! - `LinearScale`: continuous domain to continuous range

use std::collections::BTreeSet;

/// Maps distinct ordered values to equal-width pixel bands.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<T> {
    domain: Vec<T>,
    range: (f64, f64),
    step: f64,
}

impl<T: Ord + Clone> BandScale<T> {
    /// Build a band scale over the distinct values, ascending.
    pub fn new<I: IntoIterator<Item = T>>(values: I, range: (f64, f64)) -> Self {
        let domain: Vec<T> = values.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
        let step = if domain.is_empty() {
            0.0
        } else {
            (range.1 - range.0) / domain.len() as f64
        };
        Self { domain, range, step }
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Width of each band. Zero for an empty domain.
    pub fn bandwidth(&self) -> f64 {
        self.step
    }

    /// Start of the band for `value`, or `None` if it is not in the domain.
    pub fn position(&self, value: &T) -> Option<f64> {
        self.domain
            .binary_search(value)
            .ok()
            .map(|index| self.range.0 + self.step * index as f64)
    }

    /// Center of the band for `value`.
    pub fn center(&self, value: &T) -> Option<f64> {
        self.position(value).map(|start| start + self.step / 2.0)
    }
}

/// Maps a continuous domain onto `k` outputs through `k - 1` equally spaced thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizeScale<R> {
    domain: (f64, f64),
    thresholds: Vec<f64>,
    range: Vec<R>,
}

impl<R> QuantizeScale<R> {
    pub fn new(domain: (f64, f64), range: Vec<R>) -> Self {
        let (x0, x1) = domain;
        let n = range.len().saturating_sub(1);
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
            range,
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Boundaries between adjacent output bins, ascending.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn range(&self) -> &[R] {
        &self.range
    }

    /// Output for `x`. A value equal to a threshold falls in the upper bin;
    /// values outside the domain clamp to the first or last output.
    pub fn apply(&self, x: f64) -> Option<&R> {
        if x.is_nan() {
            return None;
        }
        let index = self.thresholds.partition_point(|t| *t <= x);
        self.range.get(index)
    }
}

/// Linear interpolation from a numeric domain onto a pixel range.
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

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// A degenerate domain maps everything to the middle of the range.
    pub fn apply(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (x - d0) / span };
        r0 + t * (r1 - r0)
    }
}
