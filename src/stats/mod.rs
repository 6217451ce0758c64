//// # Link functions
////
//// The cumulative distribution functions that map a linear predictor to a
//// probability: the standard normal one for probit models, the logistic one
//// for logit models.

mod erf;

use anyhow::{bail, Error};
use std::fmt::Display;
use std::str::FromStr;

pub use erf::erf;

/// The distribution family whose CDF turns a linear score into a probability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Family {
    /// Standard normal CDF.
    #[default]
    Probit,
    /// Standard logistic CDF.
    Logit,
}

impl Family {
    pub const ALL: [Family; 2] = [Family::Probit, Family::Logit];

    pub fn cdf(&self, x: f64) -> f64 {
        match self {
            Family::Probit => normal_cdf(x),
            Family::Logit => logistic_cdf(x),
        }
    }

    /// Capitalized name, as used in titles and descriptions.
    pub fn title(&self) -> &'static str {
        match self {
            Family::Probit => "Probit",
            Family::Logit => "Logit",
        }
    }

    pub fn other(&self) -> Family {
        match self {
            Family::Probit => Family::Logit,
            Family::Logit => Family::Probit,
        }
    }
}

impl Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Family::Probit => write!(f, "probit"),
            Family::Logit => write!(f, "logit"),
        }
    }
}

impl FromStr for Family {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "probit" | "gaussian" | "normal" => Ok(Family::Probit),
            "logit" | "logistic" => Ok(Family::Logit),
            other => bail!("unknown model family {:?}, expected `probit` or `logit`", other),
        }
    }
}

/// Probability of `score` under the given family. Free-function form of
/// [`Family::cdf`].
pub fn cdf(score: f64, family: Family) -> f64 {
    family.cdf(score)
}

pub fn normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

pub fn logistic_cdf(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
