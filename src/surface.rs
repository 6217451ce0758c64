//// # Probability surfaces
////
//// A probability surface holds the model probability at every intersection
//// of two coordinate axes. Rows follow the X2 axis and columns follow the X1
//// axis, so that `surface.get(i, j)` is the probability at
//// `(x_axis[j], y_axis[i])`, which is the layout plotting libraries expect
//// for the `z` values of a surface trace.

use crate::axis::CoordinateAxis;
use crate::model::Coefficients;
use crate::stats::Family;
use anyhow::{ensure, Result};
use std::io::Write;

#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilitySurface {
    rows: usize,
    cols: usize,
    /// Row-major cell values.
    cells: Vec<f64>,
}

impl ProbabilitySurface {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(col < self.cols, "column {} out of {}", col, self.cols);
        self.cells[row * self.cols + col]
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // `chunks_exact` panics on a zero chunk size
        self.cells.chunks_exact(self.cols.max(1))
    }

    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    pub fn min(&self) -> f64 {
        self.cells.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.cells.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        self.iter_rows().map(|r| r.to_vec()).collect()
    }

    /// Writes one `x1,x2,probability` line per cell, preceded by a header.
    pub fn write_csv<W: Write>(
        &self,
        output: &mut W,
        x_axis: &CoordinateAxis,
        y_axis: &CoordinateAxis,
    ) -> Result<()> {
        ensure!(
            x_axis.len() == self.cols && y_axis.len() == self.rows,
            "axes of {}x{} points do not match a {}x{} surface",
            y_axis.len(),
            x_axis.len(),
            self.rows,
            self.cols
        );
        writeln!(output, "x1,x2,probability")?;
        for (x2, row) in y_axis.iter().zip(self.iter_rows()) {
            for (x1, p) in x_axis.iter().zip(row) {
                writeln!(output, "{},{},{}", x1, x2, p)?;
            }
        }
        Ok(())
    }
}

impl From<ProbabilitySurface> for Vec<Vec<f64>> {
    fn from(surface: ProbabilitySurface) -> Self {
        surface.to_nested()
    }
}

/// Evaluates the linear predictor `intercept + slope1 * x1 + slope2 * x2`
/// and its CDF under `family` at every grid intersection. Row `i` matches
/// `y_axis[i]`, column `j` matches `x_axis[j]`.
pub fn sample(
    coefficients: &Coefficients,
    family: Family,
    x_axis: &CoordinateAxis,
    y_axis: &CoordinateAxis,
) -> ProbabilitySurface {
    let rows = y_axis.len();
    let cols = x_axis.len();
    let mut cells = Vec::with_capacity(rows * cols);
    for &x2 in y_axis {
        for &x1 in x_axis {
            cells.push(family.cdf(coefficients.linear_predictor(x1, x2)));
        }
    }
    ProbabilitySurface { rows, cols, cells }
}
