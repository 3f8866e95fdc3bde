use std::fmt;
use std::sync::Arc;

use num::Float;
use serde::Deserialize;

/// A binary operator on degrees of truth.
///
/// Used both to aggregate antecedent degrees into a firing strength (a t-norm
/// or t-conorm) and to implicate a consequent degree with that strength.
/// Aggregation is a left fold, so a non-associative operator gives results
/// that depend on the input order.
pub trait Combinator: Send + Sync {
    fn combine(&self, u: f64, v: f64) -> f64;
}

impl<F> Combinator for F
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    fn combine(&self, u: f64, v: f64) -> f64 {
        self(u, v)
    }
}

/// A combinator together with the name it is displayed with in rules.
#[derive(Clone)]
pub struct Operator {
    func: Arc<dyn Combinator>,
    name: String,
}

impl Operator {
    pub fn new(func: impl Combinator + 'static, name: impl Into<String>) -> Self {
        Self {
            func: Arc::new(func),
            name: name.into(),
        }
    }

    pub fn and_min() -> Self {
        Self::new(AndOp::Min, "AND")
    }

    pub fn or_max() -> Self {
        Self::new(OrOp::Max, "OR")
    }

    pub fn implication_min() -> Self {
        Self::new(ImplicationOp::Min, "MIN")
    }

    pub fn implication_prod() -> Self {
        Self::new(ImplicationOp::Prod, "PROD")
    }

    pub fn combine(&self, u: f64, v: f64) -> f64 {
        self.func.combine(u, v)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Operator").field(&self.name).finish()
    }
}

/// And operator method for combining the compositions of propositions
/// in a fuzzy rule premise.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AndOp {
    #[default]
    Min,
    Prod,
    BoundedProd,
    DrasticProd,
}

impl AndOp {
    pub fn call<F: Float>(self, u: F, v: F) -> F {
        match self {
            Self::Min => F::min(u, v),
            Self::Prod => u * v,
            Self::BoundedProd => F::max(F::zero(), u + v - F::one()),
            Self::DrasticProd => {
                if v == F::one() {
                    u
                } else if u == F::one() {
                    v
                } else {
                    F::zero()
                }
            },
        }
    }
}

impl Combinator for AndOp {
    fn combine(&self, u: f64, v: f64) -> f64 {
        self.call(u, v)
    }
}

/// Or operator method for combining the compositions of propositions
/// in a fuzzy rule premise.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrOp {
    #[default]
    Max,
    ProbOr,
    BoundedSum,
    DrasticSum,
}

impl OrOp {
    pub fn call<F: Float>(self, u: F, v: F) -> F {
        match self {
            Self::Max => F::max(u, v),
            Self::ProbOr => u + v - u * v,
            Self::BoundedSum => F::min(F::one(), u + v),
            Self::DrasticSum => {
                if v == F::zero() {
                    u
                } else if u == F::zero() {
                    v
                } else {
                    F::one()
                }
            },
        }
    }
}

impl Combinator for OrOp {
    fn combine(&self, u: f64, v: f64) -> f64 {
        self.call(u, v)
    }
}

/// Implication operator computing a consequent degree given the rule's
/// firing strength.
///
/// `call(u, v)` evaluates the relation `R(u, v)` with `u` the firing strength
/// and `v` the consequent degree. As a `Combinator` the arguments arrive the
/// other way around, `(degree, strength)`, and are swapped accordingly.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ImplicationOp {
    /// Mamdani
    #[default]
    Min,
    /// Larsen
    Prod,
    Ra,
    Rm,
    Rb,
    Rs,
    Rg,
    Rsg,
    Rgs,
    Rgg,
    Rss,
}

impl ImplicationOp {
    pub fn call<F: Float>(self, u: F, v: F) -> F {
        let one = F::one();

        match self {
            Self::Min => F::min(u, v),
            Self::Prod => u * v,
            Self::Ra => F::min(one, one - u + v),
            Self::Rm => F::max(F::min(u, v), one - u),
            Self::Rb => F::max(one - u, v),
            Self::Rs => {
                if u <= v {
                    one
                } else {
                    F::zero()
                }
            },
            Self::Rg => {
                if u <= v {
                    one
                } else {
                    v
                }
            },
            Self::Rsg => F::min(Self::Rs.call(u, v), Self::Rg.call(one - u, one - v)),
            Self::Rgs => F::min(Self::Rg.call(u, v), Self::Rs.call(one - u, one - v)),
            Self::Rgg => F::min(Self::Rg.call(u, v), Self::Rg.call(one - u, one - v)),
            Self::Rss => F::min(Self::Rs.call(u, v), Self::Rs.call(one - u, one - v)),
        }
    }
}

impl Combinator for ImplicationOp {
    fn combine(&self, degree: f64, strength: f64) -> f64 {
        self.call(strength, degree)
    }
}

/// Aggregation of antecedent degrees: either a t-norm or a t-conorm.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AggregationOp {
    And(AndOp),
    Or(OrOp),
}

impl Default for AggregationOp {
    fn default() -> Self {
        Self::And(AndOp::Min)
    }
}

impl AggregationOp {
    /// Display name used in rule text
    pub fn name(self) -> &'static str {
        match self {
            Self::And(_) => "AND",
            Self::Or(_) => "OR",
        }
    }

    pub fn into_operator(self) -> Operator {
        match self {
            Self::And(op) => Operator::new(op, self.name()),
            Self::Or(op) => Operator::new(op, self.name()),
        }
    }
}

impl ImplicationOp {
    pub fn into_operator(self) -> Operator {
        let name = match self {
            Self::Min => "MIN",
            Self::Prod => "PROD",
            Self::Ra => "RA",
            Self::Rm => "RM",
            Self::Rb => "RB",
            Self::Rs => "RS",
            Self::Rg => "RG",
            Self::Rsg => "RSG",
            Self::Rgs => "RGS",
            Self::Rgg => "RGG",
            Self::Rss => "RSS",
        };

        Operator::new(self, name)
    }
}

#[test]
fn test_t_norms() {
    assert_eq!(AndOp::Min.call(0.2, 0.9), 0.2);
    assert_eq!(AndOp::Prod.call(0.5, 0.5), 0.25);
    assert_eq!(AndOp::BoundedProd.call(0.5, 0.25), 0.);
    assert_eq!(AndOp::BoundedProd.call(0.75, 0.5), 0.25);
    assert_eq!(AndOp::DrasticProd.call(0.3, 1.), 0.3);
    assert_eq!(AndOp::DrasticProd.call(1., 0.3), 0.3);
    assert_eq!(AndOp::DrasticProd.call(0.3, 0.9), 0.);
}

#[test]
fn test_t_conorms() {
    assert_eq!(OrOp::Max.call(0.2, 0.9), 0.9);
    assert_eq!(OrOp::ProbOr.call(0.5, 0.5), 0.75);
    assert_eq!(OrOp::BoundedSum.call(0.75, 0.5), 1.);
    assert_eq!(OrOp::DrasticSum.call(0.3, 0.), 0.3);
    assert_eq!(OrOp::DrasticSum.call(0., 0.3), 0.3);
    assert_eq!(OrOp::DrasticSum.call(0.3, 0.9), 1.);
}

#[test]
fn test_implications() {
    // (degree, strength) through the combinator, R(strength, degree) underneath
    assert_eq!(ImplicationOp::Min.combine(1., 0.6), 0.6);
    assert_eq!(ImplicationOp::Prod.combine(0.5, 0.6), 0.3);
    assert_eq!(ImplicationOp::Rb.combine(0.25, 1.), 0.25);
    assert_eq!(ImplicationOp::Rb.combine(0.25, 0.), 1.);
    assert_eq!(ImplicationOp::Rs.combine(0.5, 0.75), 0.);
    assert_eq!(ImplicationOp::Rg.combine(0.5, 0.75), 0.5);
    assert_eq!(ImplicationOp::Rg.combine(0.75, 0.5), 1.);
    assert_eq!(ImplicationOp::Ra.combine(0.25, 0.5), 0.75);
}

#[test]
fn test_operator_from_closure() {
    let avg = Operator::new(|u: f64, v: f64| (u + v) / 2., "AVG");

    assert_eq!(avg.name(), "AVG");
    assert_eq!(avg.combine(0.25, 0.75), 0.5);
    assert_eq!(format!("{avg:?}"), "Operator(\"AVG\")");
    assert_eq!(Operator::and_min().combine(0.2, 0.6), 0.2);
    assert_eq!(Operator::or_max().combine(0.2, 0.6), 0.6);
    assert_eq!(Operator::implication_prod().combine(0.5, 0.5), 0.25);
    assert_eq!(AggregationOp::Or(OrOp::ProbOr).into_operator().name(), "OR");
    assert_eq!(ImplicationOp::Rgg.into_operator().name(), "RGG");
}
