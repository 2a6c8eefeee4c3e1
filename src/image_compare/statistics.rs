//! Population standard deviation of element-wise differences.
//!
//! Uses the naive single-pass formulation: accumulate the sum and the sum
//! of squares of `left[i] - right[i]`, then
//! `variance = (sum_sq - sum * sum / n) / n`.

use crate::image_compare::common::error::{ComparisonError, Result};

/// Index at which difference accumulation begins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AccumulationStart {
    /// Include every sample pair.
    #[default]
    FirstSample,
    /// Skip the pair at index 0, as older fixture scripts did.
    SkipFirst,
}

impl AccumulationStart {
    fn index(self) -> usize {
        match self {
            AccumulationStart::FirstSample => 0,
            AccumulationStart::SkipFirst => 1,
        }
    }
}

/// Moments of the difference distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifferenceSummary {
    /// Number of differences accumulated
    pub terms: usize,
    pub mean: f64,
    /// Population variance, never negative
    pub variance: f64,
}

impl DifferenceSummary {
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}

pub fn summarize_differences<T>(
    left: &[T],
    right: &[T],
    start: AccumulationStart,
) -> Result<DifferenceSummary>
where
    T: Copy + Into<f64>,
{
    if left.len() != right.len() {
        return Err(ComparisonError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    let first = start.index();
    if left.len() <= first {
        return Err(ComparisonError::InsufficientSamples);
    }

    let mut sum = 0.0f64;
    let mut sum_sq = 0.0f64;
    for (&l, &r) in left[first..].iter().zip(&right[first..]) {
        let (l, r): (f64, f64) = (l.into(), r.into());
        let dif = l - r;
        sum += dif;
        sum_sq += dif * dif;
    }

    let n = (left.len() - first) as f64;
    // Cancellation in `sum_sq - sum^2 / n` can dip just below zero.
    let variance = ((sum_sq - sum * sum / n) / n).max(0.0);

    Ok(DifferenceSummary {
        terms: left.len() - first,
        mean: sum / n,
        variance,
    })
}

pub fn population_std_dev_of_differences<T>(
    left: &[T],
    right: &[T],
    start: AccumulationStart,
) -> Result<f64>
where
    T: Copy + Into<f64>,
{
    summarize_differences(left, right, start).map(|summary| summary.std_dev())
}
