//! Operator selection from TOML.
//!
//! ```
//! use fuzzy_rules::config::OperatorConfig;
//!
//! let config = OperatorConfig::from_toml_str(r#"
//!     implication = "prod"
//!
//!     [aggregation]
//!     or = "prob_or"
//! "#).unwrap();
//! let (aggregation, implication) = config.operators();
//!
//! assert_eq!(aggregation.name(), "OR");
//! assert_eq!(implication.name(), "PROD");
//! ```

use serde::Deserialize;

use crate::error::Result;
use crate::ops::{AggregationOp, ImplicationOp, Operator};

/// Aggregation and implication operators of a rule. Defaults to AND-min with
/// Mamdani (min) implication.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OperatorConfig {
    pub aggregation: AggregationOp,
    pub implication: ImplicationOp,
}

impl OperatorConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// `(aggregation, implication)`, in the order `FuzzyRule::new` takes them
    pub fn operators(self) -> (Operator, Operator) {
        (self.aggregation.into_operator(), self.implication.into_operator())
    }
}

#[test]
fn test_defaults() {
    let config = OperatorConfig::from_toml_str("").unwrap();

    assert_eq!(config, OperatorConfig::default());

    let (aggregation, implication) = config.operators();

    assert_eq!(aggregation.name(), "AND");
    assert_eq!(aggregation.combine(0.3, 0.6), 0.3);
    assert_eq!(implication.name(), "MIN");
}

#[test]
fn test_and_variant() {
    let config = OperatorConfig::from_toml_str("aggregation = { and = \"bounded_prod\" }\nimplication = \"rgg\"").unwrap();

    assert_eq!(config.aggregation, AggregationOp::And(crate::ops::AndOp::BoundedProd));
    assert_eq!(config.implication, ImplicationOp::Rgg);
}

#[test]
fn test_invalid() {
    use crate::error::FuzzyError;

    assert!(matches!(OperatorConfig::from_toml_str("implication = \"maybe\""), Err(FuzzyError::Config(_))));
    assert!(matches!(OperatorConfig::from_toml_str("defuzzification = \"cog\""), Err(FuzzyError::Config(_))));
}
