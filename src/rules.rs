use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{FuzzyError, Result};
use crate::inputs::Inputs;
use crate::membership::MembershipFunction;
use crate::ops::Operator;
use crate::outputs::ImplicatedConsequents;
use crate::variable::LinguisticVariable;

/// "variable IS [NOT] label" in a rule premise.
#[derive(Clone, Debug)]
pub struct Antecedent {
    lv: Arc<LinguisticVariable>,
    lv_value: String,
    is_not: bool,
}

impl Antecedent {
    /// Fails if `lv` has no such label
    pub fn new(lv: Arc<LinguisticVariable>, lv_value: impl Into<String>) -> Result<Self> {
        Self::with_negation(lv, lv_value, false)
    }

    /// "variable IS NOT label"
    pub fn negated(lv: Arc<LinguisticVariable>, lv_value: impl Into<String>) -> Result<Self> {
        Self::with_negation(lv, lv_value, true)
    }

    pub fn with_negation(lv: Arc<LinguisticVariable>, lv_value: impl Into<String>, is_not: bool) -> Result<Self> {
        let lv_value = lv_value.into();

        lv.require(&lv_value)?;

        Ok(Self { lv, lv_value, is_not })
    }

    pub fn variable(&self) -> &LinguisticVariable {
        &self.lv
    }

    pub fn label(&self) -> &str {
        &self.lv_value
    }

    pub fn is_not(&self) -> bool {
        self.is_not
    }

    pub(crate) fn membership(&self) -> &MembershipFunction {
        // Label checked on construction
        &self.lv[self.lv_value.as_str()]
    }

    /// Degree of `value`, complemented for a negated antecedent
    pub fn fuzzify(&self, value: f64) -> f64 {
        let degree = self.membership().fuzzify(value);

        if self.is_not {
            1. - degree
        } else {
            degree
        }
    }
}

impl fmt::Display for Antecedent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {}", self.lv.name(), self.lv_value)
    }
}

/// "variable IS label" in a rule conclusion.
#[derive(Clone, Debug)]
pub struct Consequent {
    lv: Arc<LinguisticVariable>,
    lv_value: String,
}

impl Consequent {
    /// Fails if `lv` has no such label
    pub fn new(lv: Arc<LinguisticVariable>, lv_value: impl Into<String>) -> Result<Self> {
        let lv_value = lv_value.into();

        lv.require(&lv_value)?;

        Ok(Self { lv, lv_value })
    }

    pub fn variable(&self) -> &LinguisticVariable {
        &self.lv
    }

    pub fn label(&self) -> &str {
        &self.lv_value
    }

    pub(crate) fn membership(&self) -> &MembershipFunction {
        // Label checked on construction
        &self.lv[self.lv_value.as_str()]
    }
}

impl fmt::Display for Consequent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {}", self.lv.name(), self.lv_value)
    }
}

/// A fuzzy rule: `IF <antecedents> THEN <consequents>`.
///
/// All antecedents are aggregated with the same operator, and every consequent
/// is implicated with the same firing strength. Evaluation is split in three
/// steps, `fuzzify`, `activate` and `implicate`, none of which keeps state
/// on the rule.
#[derive(Clone, Debug)]
pub struct FuzzyRule {
    ants: Vec<Antecedent>,
    ant_act_func: Operator,
    cons: Vec<Consequent>,
    impl_func: Operator,
}

impl FuzzyRule {
    pub fn new(ants: Vec<Antecedent>, ant_act_func: Operator, cons: Vec<Consequent>, impl_func: Operator) -> Self {
        Self {
            ants,
            ant_act_func,
            cons,
            impl_func,
        }
    }

    pub fn antecedents(&self) -> &[Antecedent] {
        &self.ants
    }

    pub fn consequents(&self) -> &[Consequent] {
        &self.cons
    }

    pub fn aggregation(&self) -> &Operator {
        &self.ant_act_func
    }

    pub fn implication(&self) -> &Operator {
        &self.impl_func
    }

    /// Output variable name of every consequent, in declaration order
    pub fn output_variable_names(&self) -> Vec<&str> {
        self.cons.iter().map(|con| con.lv.name()).collect()
    }

    /// Fuzzifies every crisp input against this rule's antecedents.
    ///
    /// Degrees come out in the order of `crisp_inputs`. An input is matched to
    /// the first antecedent on a variable of the same name only; inputs for
    /// variables the rule doesn't mention are skipped.
    pub fn fuzzify(&self, crisp_inputs: &Inputs) -> Vec<f64> {
        let mut fuzzified = Vec::with_capacity(self.ants.len().min(crisp_inputs.len()));

        for (lv_name, crisp_input) in crisp_inputs.iter() {
            let Some(ant) = self.ants.iter().find(|ant| ant.lv.name() == lv_name) else {
                trace!(variable = lv_name, "no antecedent for input, skipped");
                continue;
            };
            let degree = ant.fuzzify(crisp_input);

            trace!(variable = lv_name, label = %ant.lv_value, negated = ant.is_not, crisp_input, degree, "fuzzified");

            fuzzified.push(degree);
        }

        fuzzified
    }

    /// Firing strength: left fold of the degrees with the aggregation operator.
    pub fn activate(&self, fuzzified_inputs: &[f64]) -> Result<f64> {
        let (&first, rest) = fuzzified_inputs.split_first().ok_or(FuzzyError::EmptyActivation)?;
        let activation = rest
            .iter()
            .fold(first, |acc, &degree| self.ant_act_func.combine(acc, degree));

        debug!(operator = self.ant_act_func.name(), n_inputs = fuzzified_inputs.len(), activation, "rule activated");

        Ok(activation)
    }

    /// Implicated membership function of every consequent, grouped by output
    /// variable.
    pub fn implicate(&self, antecedents_activation: f64) -> ImplicatedConsequents {
        let mut implicated = ImplicatedConsequents::new();

        for con in &self.cons {
            let mf = con
                .membership()
                .samples()
                .map_degrees(|degree| self.impl_func.combine(degree, antecedents_activation));

            implicated.push(con.lv.name(), mf);
        }

        debug!(
            operator = self.impl_func.name(),
            antecedents_activation,
            n_consequents = self.cons.len(),
            "rule implicated"
        );

        implicated
    }

    /// `fuzzify`, `activate` and `implicate` for one sample.
    ///
    /// Fails with `EmptyActivation` when no input matches an antecedent.
    pub fn fire(&self, crisp_inputs: &Inputs) -> Result<ImplicatedConsequents> {
        let fuzzified = self.fuzzify(crisp_inputs);
        let activation = self.activate(&fuzzified)?;

        Ok(self.implicate(activation))
    }
}

// NOT is left out of the antecedents here
impl fmt::Display for FuzzyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ant_sep = format!(" {} ", self.ant_act_func.name());
        let ants: Vec<String> = self.ants.iter().map(ToString::to_string).collect();
        let cons: Vec<String> = self.cons.iter().map(ToString::to_string).collect();

        write!(f, "IF ({}), THEN ({})", ants.join(ant_sep.as_str()), cons.join(" , "))
    }
}

#[cfg(test)]
fn ramp(name: &str) -> Arc<LinguisticVariable> {
    use crate::membership::LinPWMF;

    let lv = LinguisticVariable::new(
        name,
        [
            ("up", LinPWMF::new([(0., 0.), (10., 1.)]).unwrap()),
            ("down", LinPWMF::new([(0., 1.), (10., 0.)]).unwrap()),
        ],
    )
    .unwrap();

    Arc::new(lv)
}

#[test]
fn test_unknown_label() {
    let lv = ramp("x");

    assert!(matches!(
        Antecedent::new(lv.clone(), "sideways"),
        Err(FuzzyError::UnknownLabel { variable, label }) if variable == "x" && label == "sideways"
    ));
    assert!(Consequent::new(lv, "sideways").is_err());
}

#[test]
fn test_negation() {
    let lv = ramp("x");
    let rule = FuzzyRule::new(
        vec![Antecedent::negated(lv.clone(), "up").unwrap()],
        Operator::and_min(),
        vec![Consequent::new(lv, "down").unwrap()],
        Operator::implication_min(),
    );

    assert_eq!(rule.antecedents()[0].membership().fuzzify(3.), 0.3);
    assert_eq!(rule.fuzzify(&Inputs::new().with("x", 3.)), vec![0.7]);
}

#[test]
fn test_fuzzify_follows_input_order_and_skips_unknown() {
    let a = ramp("a");
    let b = ramp("b");
    let rule = FuzzyRule::new(
        vec![Antecedent::new(a.clone(), "up").unwrap(), Antecedent::new(b, "down").unwrap()],
        Operator::and_min(),
        vec![Consequent::new(a, "up").unwrap()],
        Operator::implication_min(),
    );
    let inputs = Inputs::new().with("b", 2.5).with("unrelated", 1.).with("a", 5.);

    assert_eq!(rule.fuzzify(&inputs), vec![0.75, 0.5]);
    assert!(rule.fuzzify(&Inputs::new().with("unrelated", 1.)).is_empty());
}

#[test]
fn test_activate_fold() {
    let lv = ramp("x");
    let rule = |op: Operator| {
        FuzzyRule::new(
            vec![Antecedent::new(lv.clone(), "up").unwrap()],
            op,
            vec![Consequent::new(lv.clone(), "up").unwrap()],
            Operator::implication_min(),
        )
    };

    assert_eq!(rule(Operator::and_min()).activate(&[0.2, 0.9, 0.5]).unwrap(), 0.2);
    assert_eq!(rule(Operator::or_max()).activate(&[0.2, 0.9, 0.5]).unwrap(), 0.9);
    assert_eq!(rule(Operator::and_min()).activate(&[0.4]).unwrap(), 0.4);
    assert!(matches!(rule(Operator::and_min()).activate(&[]), Err(FuzzyError::EmptyActivation)));

    // Non-associative operators see the inputs left to right
    let sub = rule(Operator::new(|u: f64, v: f64| u - v, "MINUS"));

    assert_eq!(sub.activate(&[1., 0.5, 0.25]).unwrap(), 0.25);
}

#[test]
fn test_display() {
    let temperature = ramp("temperature");
    let sunshine = ramp("sunshine");
    let power = ramp("power");
    let rule = FuzzyRule::new(
        vec![
            Antecedent::new(temperature, "up").unwrap(),
            Antecedent::negated(sunshine, "down").unwrap(),
        ],
        Operator::and_min(),
        vec![Consequent::new(power.clone(), "up").unwrap(), Consequent::new(power, "down").unwrap()],
        Operator::implication_min(),
    );

    assert_eq!(
        rule.to_string(),
        "IF (temperature is up AND sunshine is down), THEN (power is up , power is down)"
    );
    assert_eq!(rule.output_variable_names(), vec!["power", "power"]);
}

#[test]
fn test_rule_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<FuzzyRule>();
    assert_send_sync::<LinguisticVariable>();
}
