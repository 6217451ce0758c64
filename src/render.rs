//// # Rendering
////
//// A [`Renderer`] receives every freshly computed surface together with the
//// axes and parameters it was computed from, and replaces whatever it was
//// displaying before. Two renderers are provided: an interactive plotly
//// surface plot and a plain CSV dump.

use crate::axis::CoordinateAxis;
use crate::model::Params;
use crate::surface::ProbabilitySurface;
use anyhow::{Context, Result};
use plotly::common::{ColorBar, ColorScale, ColorScalePalette, Title};
use plotly::layout::{Axis, Camera, Eye, LayoutScene, Margin};
use plotly::{Layout, Plot, Surface};
use std::io::Write;
use std::path::Path;

/// Everything a renderer needs to draw one surface.
pub struct Frame<'a> {
    pub surface: &'a ProbabilitySurface,
    pub x_axis: &'a CoordinateAxis,
    pub y_axis: &'a CoordinateAxis,
    pub params: &'a Params,
}

pub trait Renderer {
    /// Replaces the displayed data with the given frame.
    fn render(&mut self, frame: &Frame) -> Result<()>;
}

/// Keeps the plot of the last rendered frame, which can be written to an HTML
/// file or opened in the browser.
#[derive(Default)]
pub struct PlotlyRenderer {
    plot: Option<Plot>,
}

impl PlotlyRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plot(&self) -> Option<&Plot> {
        self.plot.as_ref()
    }

    fn current(&self) -> Result<&Plot> {
        self.plot
            .as_ref()
            .context("no surface has been rendered yet")
    }

    pub fn to_html(&self) -> Result<String> {
        Ok(self.current()?.to_html())
    }

    /// The plotly.js figure (`data`, `layout`, `config`) as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(self.current()?.to_json())
    }

    pub fn write_html<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let html = self.to_html()?;
        std::fs::write(path.as_ref(), html)
            .with_context(|| format!("writing plot to {:?}", path.as_ref()))?;
        log::info!("Plot written to {:?}", path.as_ref());
        Ok(())
    }

    /// Opens the last rendered plot in the default browser.
    pub fn show(&self) -> Result<()> {
        self.current()?.show();
        Ok(())
    }
}

impl Renderer for PlotlyRenderer {
    fn render(&mut self, frame: &Frame) -> Result<()> {
        let trace = Surface::new(frame.surface.to_nested())
            .x(frame.x_axis.points().to_vec())
            .y(frame.y_axis.points().to_vec())
            .name(frame.params.family.to_string())
            .color_scale(ColorScale::Palette(ColorScalePalette::Viridis))
            .color_bar(ColorBar::new().title("Probability"));

        // viewed from the (-, -) corner, slightly above
        let camera = Camera::new().eye(Eye::from((-1.5, -1.5, 1.0)));
        let scene = LayoutScene::new()
            .x_axis(Axis::new().title("Variable X1"))
            .y_axis(Axis::new().title("Variable X2"))
            .z_axis(Axis::new().title("P(Y=1)").range(vec![0.0, 1.0]))
            .camera(camera);
        let layout = Layout::new()
            .title(Title::with_text(format!(
                "Probit/Logit Probability Surface ({})",
                frame.params.family
            )))
            .scene(scene)
            .margin(Margin::new().left(0).right(0).bottom(20).top(40));

        let mut plot = Plot::new();
        plot.set_layout(layout);
        plot.add_trace(trace);
        log::trace!(
            "Built {} surface plot with {}x{} cells",
            frame.params.family,
            frame.surface.rows(),
            frame.surface.cols()
        );
        self.plot = Some(plot);
        Ok(())
    }
}

/// Writes every rendered frame as CSV to the wrapped writer.
pub struct CsvRenderer<W: Write> {
    output: W,
}

impl<W: Write> CsvRenderer<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> Renderer for CsvRenderer<W> {
    fn render(&mut self, frame: &Frame) -> Result<()> {
        frame
            .surface
            .write_csv(&mut self.output, frame.x_axis, frame.y_axis)?;
        self.output.flush()?;
        log::trace!("Wrote {} csv rows", frame.surface.cells().len());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{Coefficients, Explorer};
    use crate::stats::Family;
    use serde_json::{json, Value};

    #[test]
    fn test_plotly_replaces_plot() {
        let axis = CoordinateAxis::new(-1.0, 1.0, 0.5).unwrap();
        let mut explorer = Explorer::new(
            axis.clone(),
            axis,
            Params::new(Coefficients::new(0.0, 1.0, 1.0), Family::Probit),
            PlotlyRenderer::new(),
        )
        .unwrap();
        let html = explorer.renderer().to_html().unwrap();
        assert!(html.contains("surface"));
        assert!(html.contains("Probit/Logit Probability Surface (probit)"));
        assert!(html.contains("Viridis"));
        assert!(html.contains("Variable X1"));
        assert!(html.contains("Variable X2"));
        assert!(html.contains("P(Y=1)"));

        let figure: Value = serde_json::from_str(&explorer.renderer().to_json().unwrap()).unwrap();
        let scene = &figure["layout"]["scene"];
        assert_eq!(scene["xaxis"]["title"]["text"], json!("Variable X1"));
        assert_eq!(scene["yaxis"]["title"]["text"], json!("Variable X2"));
        assert_eq!(scene["zaxis"]["title"]["text"], json!("P(Y=1)"));
        assert_eq!(scene["zaxis"]["range"], json!([0.0, 1.0]));
        assert_eq!(scene["camera"]["eye"], json!({"x": -1.5, "y": -1.5, "z": 1.0}));
        assert_eq!(figure["data"][0]["type"], json!("surface"));
        assert_eq!(figure["data"][0]["colorbar"]["title"]["text"], json!("Probability"));
        assert_eq!(figure["data"][0]["x"], json!([-1.0, -0.5, 0.0, 0.5, 1.0]));

        explorer.select_family(Family::Logit).unwrap();
        let html = explorer.renderer().to_html().unwrap();
        assert!(html.contains("Probit/Logit Probability Surface (logit)"));
        assert!(!html.contains("Probit/Logit Probability Surface (probit)"));
    }

    #[test]
    fn test_plotly_without_frames() {
        let renderer = PlotlyRenderer::new();
        assert!(renderer.plot().is_none());
        assert!(renderer.to_html().is_err());
        assert!(renderer.to_json().is_err());
    }

    #[test]
    fn test_csv_renderer() {
        let x = CoordinateAxis::new(0.0, 1.0, 1.0).unwrap();
        let y = CoordinateAxis::new(0.0, 1.0, 1.0).unwrap();
        let explorer = Explorer::new(
            x,
            y,
            Params::new(Coefficients::default(), Family::Logit),
            CsvRenderer::new(Vec::new()),
        )
        .unwrap();
        let out = String::from_utf8(explorer.into_renderer().into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "x1,x2,probability",
                "0,0,0.5",
                "1,0,0.5",
                "0,1,0.5",
                "1,1,0.5"
            ]
        );
    }
}
