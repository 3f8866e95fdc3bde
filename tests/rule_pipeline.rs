use std::sync::Arc;

use fuzzy_rules::config::OperatorConfig;
use fuzzy_rules::ops::{AndOp, OrOp};
use fuzzy_rules::{
    Antecedent, Consequent, FreeShapeMF, FuzzyRule, Inputs, LinPWMF, LinguisticVariable, Operator, SingletonMF,
    ThreePointsLV, TwoPointsPDLV,
};
use proptest::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn heating() -> (Arc<LinguisticVariable>, Arc<LinguisticVariable>, Arc<LinguisticVariable>) {
    let temperature = ThreePointsLV::new("temperature", 10., 20., 30.).build().unwrap();
    let sunshine = TwoPointsPDLV::new("sunshine", 20., 40.).build().unwrap();
    let power = LinguisticVariable::new(
        "power",
        [
            ("off", LinPWMF::new([(0., 1.), (50., 0.)]).unwrap()),
            ("half", LinPWMF::new([(0., 0.), (50., 1.), (100., 0.)]).unwrap()),
            ("full", LinPWMF::new([(50., 0.), (100., 1.)]).unwrap()),
        ],
    )
    .unwrap();

    (Arc::new(temperature), Arc::new(sunshine), Arc::new(power))
}

#[test]
fn test_mamdani_pipeline() {
    init_tracing();

    let (temperature, sunshine, power) = heating();
    let rule = FuzzyRule::new(
        vec![
            Antecedent::new(temperature, "low").unwrap(),
            Antecedent::new(sunshine, "low").unwrap(),
        ],
        Operator::and_min(),
        vec![Consequent::new(power, "full").unwrap()],
        Operator::implication_min(),
    );
    let inputs = Inputs::new().with("sunshine", 30.).with("temperature", 15.);

    // sunshine first: degrees follow the inputs, not the antecedents
    let fuzzified = rule.fuzzify(&inputs);

    assert_eq!(fuzzified, vec![0.75, 0.5]);

    let activation = rule.activate(&fuzzified).unwrap();

    assert_eq!(activation, 0.5);

    let implicated = rule.implicate(activation);
    let full = &implicated.get("power").unwrap()[0];

    assert_eq!(full.in_values(), &[50., 100.]);
    assert_eq!(full.mf_values(), &[0., 0.5]);
    assert_eq!(full.fuzzify(75.), 0.25);
    assert_eq!(rule.fire(&inputs).unwrap(), implicated);
}

#[test]
fn test_implication_shape_preservation() {
    let (temperature, _, power) = heating();
    let consequent_mf = power["half"].clone();
    let rule = |implication: Operator| {
        FuzzyRule::new(
            vec![Antecedent::new(temperature.clone(), "medium").unwrap()],
            Operator::and_min(),
            vec![Consequent::new(power.clone(), "half").unwrap()],
            implication,
        )
    };

    let by_min = rule(Operator::implication_min()).implicate(0.6);
    let implicated = &by_min.get("power").unwrap()[0];

    assert_eq!(implicated.in_values(), consequent_mf.in_values());
    assert_eq!(implicated.mf_values(), &[0., 0.6, 0.]);

    let by_prod = rule(Operator::implication_prod()).implicate(0.5);

    assert_eq!(by_prod.get("power").unwrap()[0].mf_values(), &[0., 0.5, 0.]);

    // The variable itself is untouched
    assert_eq!(power["half"], consequent_mf);
}

#[test]
fn test_first_matching_antecedent_wins() {
    let (temperature, _, power) = heating();
    let rule = FuzzyRule::new(
        vec![
            Antecedent::new(temperature.clone(), "low").unwrap(),
            Antecedent::new(temperature.clone(), "high").unwrap(),
        ],
        Operator::or_max(),
        vec![Consequent::new(power, "off").unwrap()],
        Operator::implication_min(),
    );
    let fuzzified = rule.fuzzify(&Inputs::new().with("temperature", 18.));

    assert_eq!(fuzzified, vec![temperature["low"].fuzzify(18.)]);
    assert_ne!(fuzzified[0], temperature["high"].fuzzify(18.));
}

#[test]
fn test_consequents_grouped_by_variable() {
    let (temperature, sunshine, power) = heating();
    let rule = FuzzyRule::new(
        vec![Antecedent::new(temperature, "high").unwrap()],
        Operator::and_min(),
        vec![
            Consequent::new(power.clone(), "half").unwrap(),
            Consequent::new(sunshine, "high").unwrap(),
            Consequent::new(power, "off").unwrap(),
        ],
        Operator::implication_min(),
    );
    let implicated = rule.implicate(0.25);

    assert_eq!(implicated.len(), 2);
    assert_eq!(implicated.variables().collect::<Vec<_>>(), vec!["power", "sunshine"]);

    let power_mfs = implicated.get("power").unwrap();

    assert_eq!(power_mfs.len(), 2);
    assert_eq!(power_mfs[0].mf_values(), &[0., 0.25, 0.]);
    assert_eq!(power_mfs[1].in_values(), &[0., 50.]);
    assert_eq!(power_mfs[1].mf_values(), &[0.25, 0.]);
}

#[test]
fn test_negated_singleton_antecedent() {
    let mode = Arc::new(
        LinguisticVariable::new(
            "mode",
            [("eco", SingletonMF::new(1.)), ("boost", SingletonMF::new(2.))],
        )
        .unwrap(),
    );
    let (_, _, power) = heating();
    let rule = FuzzyRule::new(
        vec![Antecedent::negated(mode, "eco").unwrap()],
        Operator::and_min(),
        vec![Consequent::new(power, "full").unwrap()],
        Operator::implication_min(),
    );

    assert_eq!(rule.fuzzify(&Inputs::new().with("mode", 1.)), vec![0.]);
    assert_eq!(rule.fuzzify(&Inputs::new().with("mode", 1.5)), vec![1.]);
    assert!(rule.fire(&Inputs::new().with("wind", 3.)).is_err());
}

#[test]
fn test_configured_operators() {
    let (temperature, sunshine, power) = heating();
    let (aggregation, implication) = OperatorConfig::from_toml_str(
        r#"
        implication = "prod"

        [aggregation]
        or = "max"
        "#,
    )
    .unwrap()
    .operators();
    let rule = FuzzyRule::new(
        vec![
            Antecedent::new(temperature, "medium").unwrap(),
            Antecedent::new(sunshine, "high").unwrap(),
        ],
        aggregation,
        vec![Consequent::new(power, "full").unwrap()],
        implication,
    );
    let implicated = rule
        .fire(&Inputs::new().with("temperature", 20.).with("sunshine", 40.))
        .unwrap();

    assert_eq!(implicated.get("power").unwrap()[0].mf_values(), &[0., 1.]);
    assert_eq!(
        rule.to_string(),
        "IF (temperature is medium OR sunshine is high), THEN (power is full)"
    );
}

proptest! {
    #[test]
    fn interpolation_stays_within_sampled_degrees(x in -50.0f64..150.0, peak in 0.0f64..=1.0) {
        let mf = FreeShapeMF::new(vec![0., 40., 60., 100.], vec![0., peak, peak, 0.]).unwrap();
        let degree = mf.fuzzify(x);

        prop_assert!(degree >= -1e-12 && degree <= peak + 1e-12);
    }

    #[test]
    fn associative_aggregation_ignores_order(degrees in prop::collection::vec(0.0f64..=1.0, 1..8)) {
        let (temperature, _, power) = heating();
        let mut degrees = degrees;

        for op in [
            Operator::new(AndOp::Min, "AND"),
            Operator::new(AndOp::Prod, "AND"),
            Operator::new(OrOp::Max, "OR"),
        ] {
            let rule = FuzzyRule::new(
                vec![Antecedent::new(temperature.clone(), "low").unwrap()],
                op,
                vec![Consequent::new(power.clone(), "off").unwrap()],
                Operator::implication_min(),
            );
            let forward = rule.activate(&degrees).unwrap();

            degrees.reverse();

            let backward = rule.activate(&degrees).unwrap();

            prop_assert!((forward - backward).abs() < 1e-12);
        }
    }
}
