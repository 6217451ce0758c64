//// # Model parameters
////
//// The coefficients and link of a two-regressor binary response model, and
//// the [`Explorer`], which owns the current parameters and redraws the
//// surface on every change.

use crate::axis::CoordinateAxis;
use crate::describe::Description;
use crate::render::{Frame, Renderer};
use crate::stats::Family;
use crate::surface::{sample, ProbabilitySurface};
use anyhow::{ensure, Context, Result};

/// Largest surface, in cells, an [`Explorer`] will compute.
pub const MAX_CELLS: usize = 4_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Coefficients {
    pub intercept: f64,
    pub slope1: f64,
    pub slope2: f64,
}

impl Coefficients {
    pub fn new(intercept: f64, slope1: f64, slope2: f64) -> Self {
        Self {
            intercept,
            slope1,
            slope2,
        }
    }

    #[inline]
    pub fn linear_predictor(&self, x1: f64, x2: f64) -> f64 {
        self.intercept + self.slope1 * x1 + self.slope2 * x2
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Params {
    pub coefficients: Coefficients,
    pub family: Family,
}

impl Params {
    pub fn new(coefficients: Coefficients, family: Family) -> Self {
        Self {
            coefficients,
            family,
        }
    }
}

/// Recomputes the whole surface for a new set of parameters.
pub fn on_parameter_change(
    params: &Params,
    x_axis: &CoordinateAxis,
    y_axis: &CoordinateAxis,
) -> ProbabilitySurface {
    let surface = sample(&params.coefficients, params.family, x_axis, y_axis);
    log::debug!(
        "Recomputed {} surface for {:?}: {}x{}, probabilities in [{:.4}, {:.4}]",
        params.family,
        params.coefficients,
        surface.rows(),
        surface.cols(),
        surface.min(),
        surface.max()
    );
    surface
}

/// Holds the current parameters and pushes a fresh surface to its renderer
/// every time one of them changes. Each setter returns the regenerated
/// description of the model.
pub struct Explorer<R: Renderer> {
    x_axis: CoordinateAxis,
    y_axis: CoordinateAxis,
    params: Params,
    surface: ProbabilitySurface,
    renderer: R,
}

impl<R: Renderer> Explorer<R> {
    /// Computes and renders the initial surface. Fails if the grid spanned by
    /// the two axes has more than [`MAX_CELLS`] cells.
    pub fn new(
        x_axis: CoordinateAxis,
        y_axis: CoordinateAxis,
        params: Params,
        mut renderer: R,
    ) -> Result<Self> {
        let cells = x_axis.len().checked_mul(y_axis.len());
        ensure!(
            cells.map_or(false, |c| c <= MAX_CELLS),
            "a {}x{} grid exceeds the limit of {} cells",
            y_axis.len(),
            x_axis.len(),
            MAX_CELLS
        );
        let surface = on_parameter_change(&params, &x_axis, &y_axis);
        renderer
            .render(&Frame {
                surface: &surface,
                x_axis: &x_axis,
                y_axis: &y_axis,
                params: &params,
            })
            .context("rendering the initial surface")?;
        Ok(Self {
            x_axis,
            y_axis,
            params,
            surface,
            renderer,
        })
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn surface(&self) -> &ProbabilitySurface {
        &self.surface
    }

    pub fn x_axis(&self) -> &CoordinateAxis {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &CoordinateAxis {
        &self.y_axis
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn description(&self) -> Description {
        Description::new(&self.params)
    }

    pub fn set_coefficients(&mut self, coefficients: Coefficients) -> Result<Description> {
        self.update(Params {
            coefficients,
            ..self.params
        })
    }

    pub fn set_intercept(&mut self, intercept: f64) -> Result<Description> {
        self.set_coefficients(Coefficients {
            intercept,
            ..self.params.coefficients
        })
    }

    pub fn set_slope1(&mut self, slope1: f64) -> Result<Description> {
        self.set_coefficients(Coefficients {
            slope1,
            ..self.params.coefficients
        })
    }

    pub fn set_slope2(&mut self, slope2: f64) -> Result<Description> {
        self.set_coefficients(Coefficients {
            slope2,
            ..self.params.coefficients
        })
    }

    pub fn select_family(&mut self, family: Family) -> Result<Description> {
        self.update(Params {
            family,
            ..self.params
        })
    }

    /// Switches between probit and logit, keeping the coefficients.
    pub fn toggle_family(&mut self) -> Result<Description> {
        self.select_family(self.params.family.other())
    }

    fn update(&mut self, params: Params) -> Result<Description> {
        let surface = on_parameter_change(&params, &self.x_axis, &self.y_axis);
        self.renderer
            .render(&Frame {
                surface: &surface,
                x_axis: &self.x_axis,
                y_axis: &self.y_axis,
                params: &params,
            })
            .with_context(|| format!("rendering the {} surface", params.family))?;
        self.params = params;
        self.surface = surface;
        Ok(self.description())
    }
}
