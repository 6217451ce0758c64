pub mod axis;
pub mod describe;
pub mod model;
pub mod render;
pub mod stats;
pub mod surface;

pub use axis::CoordinateAxis;
pub use model::{on_parameter_change, Coefficients, Explorer, Params};
pub use stats::{cdf, Family};
pub use surface::{sample, ProbabilitySurface};
