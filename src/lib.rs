//! Evaluation core of a Mamdani fuzzy inference system.
//!
//! Linguistic variables group named membership functions. A [`FuzzyRule`]
//! references them through its antecedents and consequents and is evaluated
//! per sample in three steps:
//!
//! ```
//! use std::sync::Arc;
//!
//! use fuzzy_rules::{Antecedent, Consequent, FuzzyRule, Inputs, Operator, ThreePointsLV, TwoPointsPDLV};
//!
//! let temperature = Arc::new(ThreePointsLV::new("temperature", 10., 20., 30.).build()?);
//! let power = Arc::new(TwoPointsPDLV::new("power", 0., 100.).build()?);
//!
//! let rule = FuzzyRule::new(
//!     vec![Antecedent::new(temperature, "high")?],
//!     Operator::and_min(),
//!     vec![Consequent::new(power, "high")?],
//!     Operator::implication_min(),
//! );
//!
//! let fuzzified = rule.fuzzify(&Inputs::new().with("temperature", 25.));
//! let activation = rule.activate(&fuzzified)?;
//! let implicated = rule.implicate(activation);
//!
//! assert_eq!(activation, 0.5);
//! assert_eq!(implicated.get("power").unwrap()[0].mf_values(), &[0., 0.5]);
//! # Ok::<(), fuzzy_rules::FuzzyError>(())
//! ```
//!
//! Defuzzification and rule-base aggregation are left to the caller.

mod builders;
pub mod config;
mod error;
mod inputs;
mod math;
mod membership;
pub mod ops;
mod outputs;
mod rules;
mod variable;

pub use builders::{ThreePointsLV, TwoPointsPDLV};
pub use error::{FuzzyError, Result};
pub use inputs::Inputs;
pub use membership::{FreeShapeMF, LinPWMF, MembershipFunction, SingletonMF};
pub use ops::{Combinator, Operator};
pub use outputs::ImplicatedConsequents;
pub use rules::{Antecedent, Consequent, FuzzyRule};
pub use variable::LinguisticVariable;
