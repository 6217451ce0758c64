use anyhow::{Context, Result};
use argh::FromArgs;
use probsurf::render::{CsvRenderer, Frame, PlotlyRenderer, Renderer};
use probsurf::{Coefficients, CoordinateAxis, Explorer, Family, Params};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(FromArgs)]
/// PROBSURF draws the probability surface of a probit or logit model with two regressors.
struct Config {
    #[argh(option, default = "0.0")]
    /// intercept (beta 0)
    pub intercept: f64,

    #[argh(option, default = "0.0")]
    /// coefficient of X1 (beta 1)
    pub slope1: f64,

    #[argh(option, default = "0.0")]
    /// coefficient of X2 (beta 2)
    pub slope2: f64,

    #[argh(option, short = 'm', default = "Family::Probit")]
    /// link function, either `probit` or `logit`
    pub model: Family,

    #[argh(option, default = "default_start()")]
    /// first grid point of both axes
    pub start: f64,

    #[argh(option, default = "default_stop()")]
    /// last grid point of both axes
    pub stop: f64,

    #[argh(option, default = "default_step()")]
    /// distance between grid points
    pub step: f64,

    #[argh(option, short = 'o', default = "default_output()")]
    /// path of the HTML file with the plot
    pub output: PathBuf,

    #[argh(option)]
    /// also write the surface as CSV to this path
    pub csv: Option<PathBuf>,

    #[argh(switch)]
    /// open a browser window with the plot
    pub show: bool,
}

fn default_start() -> f64 {
    -5.0
}

fn default_stop() -> f64 {
    5.0
}

fn default_step() -> f64 {
    0.5
}

fn default_output() -> PathBuf {
    PathBuf::from("probability_surface.html")
}

fn main() -> Result<()> {
    env_logger::init();

    // read configuration
    let config: Config = argh::from_env();
    let axis = CoordinateAxis::new(config.start, config.stop, config.step)
        .context("building the grid")?;
    log::info!(
        "Grid from {} to {} with step {}: {} points per axis",
        axis.first(),
        axis.last(),
        axis.step(),
        axis.len()
    );
    let params = Params::new(
        Coefficients::new(config.intercept, config.slope1, config.slope2),
        config.model,
    );
    log::info!("Model {} with {:?}", params.family, params.coefficients);

    let explorer = Explorer::new(axis.clone(), axis, params, PlotlyRenderer::new())?;
    println!("{}", explorer.description());

    if let Some(csv_path) = config.csv {
        let file = File::create(&csv_path).with_context(|| format!("creating {:?}", csv_path))?;
        CsvRenderer::new(BufWriter::new(file)).render(&Frame {
            surface: explorer.surface(),
            x_axis: explorer.x_axis(),
            y_axis: explorer.y_axis(),
            params: explorer.params(),
        })?;
        log::info!("Surface written to {:?}", csv_path);
    }

    let plot = explorer.into_renderer();
    plot.write_html(&config.output)?;
    if config.show {
        plot.show()?;
    }
    Ok(())
}
