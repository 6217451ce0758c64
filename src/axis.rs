use anyhow::{ensure, Result};
use std::ops::Index;

/// Slack used when deciding whether `stop` lies on the grid, to absorb the
/// rounding of `(stop - start) / step`.
const STOP_TOLERANCE: f64 = 1e-9;

/// Largest number of points a single axis may hold.
pub const MAX_POINTS: usize = 10_000;

/// An ordered, fixed-step sequence of sample points over a closed interval.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinateAxis {
    start: f64,
    step: f64,
    points: Vec<f64>,
}

impl CoordinateAxis {
    /// Points `start, start + step, ...` up to and including `stop` when it
    /// falls on the grid. Each point is computed as `start + i * step`, so
    /// long axes do not accumulate rounding error.
    pub fn new(start: f64, stop: f64, step: f64) -> Result<Self> {
        ensure!(
            start.is_finite() && stop.is_finite(),
            "axis bounds must be finite, got [{}, {}]",
            start,
            stop
        );
        ensure!(
            step.is_finite() && step > 0.0,
            "axis step must be a positive number, got {}",
            step
        );
        ensure!(
            start <= stop,
            "axis start {} is larger than its stop {}",
            start,
            stop
        );

        let intervals = ((stop - start) / step + STOP_TOLERANCE).floor();
        ensure!(
            intervals.is_finite() && intervals < MAX_POINTS as f64,
            "axis from {} to {} with step {} would have more than {} points",
            start,
            stop,
            step,
            MAX_POINTS
        );
        let n = intervals as usize + 1;
        let points = (0..n).map(|i| start + i as f64 * step).collect();
        Ok(Self {
            start,
            step,
            points,
        })
    }

    /// The axis used by both regressors in the default configuration:
    /// `-5` to `5` with step `0.5`, 21 points.
    pub fn reference() -> Self {
        Self::new(-5.0, 5.0, 0.5).expect("the reference axis is valid")
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn first(&self) -> f64 {
        self.points[0]
    }

    pub fn last(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.points.iter()
    }

    /// Index of the grid point closest to `value`, if `value` lies within
    /// half a step of the axis.
    pub fn position(&self, value: f64) -> Option<usize> {
        let offset = ((value - self.start) / self.step).round();
        if offset < 0.0 || offset >= self.len() as f64 {
            return None;
        }
        let i = offset as usize;
        if (self.points[i] - value).abs() <= self.step / 2.0 {
            Some(i)
        } else {
            None
        }
    }
}

impl Index<usize> for CoordinateAxis {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.points[i]
    }
}

impl<'a> IntoIterator for &'a CoordinateAxis {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
