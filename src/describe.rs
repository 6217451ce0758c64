//// # Descriptions
////
//// Plain-language explanations of the current model and of the effect of
//// each coefficient on the probability surface.

use crate::model::Params;
use std::fmt::Display;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Description {
    pub model: String,
    pub intercept: String,
    pub slope1: String,
    pub slope2: String,
}

impl Description {
    pub fn new(params: &Params) -> Self {
        let c = &params.coefficients;
        Self {
            model: format!(
                "You are viewing the **{} model**. Notice the subtle difference in the tails \
                 of the surface compared to the other model.",
                params.family.title()
            ),
            intercept: describe_intercept(c.intercept),
            slope1: describe_slope(1, c.slope1),
            slope2: describe_slope(2, c.slope2),
        }
    }
}

impl Display for Description {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.model)?;
        writeln!(f, "{}", self.intercept)?;
        writeln!(f, "{}", self.slope1)?;
        write!(f, "{}", self.slope2)
    }
}

// Zero falls on the "negative" side, there is no neutral wording for the intercept.
fn describe_intercept(b0: f64) -> String {
    let (sign, effect) = if b0 > 0.0 {
        ("positive", "shifts the surface up")
    } else {
        ("negative", "shifts the surface down")
    };
    format!(
        "β0 ({:.1}): a {} value of β0 {}, changing the base probability.",
        b0, sign, effect
    )
}

fn describe_slope(k: usize, b: f64) -> String {
    let (slope, effect) = if b > 0.0 {
        ("a positive slope", "increases")
    } else if b < 0.0 {
        ("a negative slope", "decreases")
    } else {
        ("a null slope", "is unaffected")
    };
    format!(
        "β{k} ({:.1}): {} means that as X{k} increases, the probability {}.",
        b,
        slope,
        effect,
        k = k
    )
}
