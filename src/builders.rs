//! Shortcuts for the two common variable layouts: three overlapping
//! low/medium/high ramps, and two complementary low/high ramps.

use crate::error::{FuzzyError, Result};
use crate::membership::LinPWMF;
use crate::variable::LinguisticVariable;

/// ```text
///   ^
///   | low      medium           high
/// 1 |XXXXX       X          XXXXXXXXXXXX
///   |     X     X  X       XX
///   |      X   X    X    XX
///   |       X X      XX X
///   |       XX        XXX
///   |      X  X     XX   XX
///   |     X    X XX       XX
///   |    X       X          XX
/// 0 +-------------------------------------->
///        p1     p2          p3
/// ```
///
/// At `p1` only "low" is 1, at `p2` only "medium", at `p3` only "high".
#[derive(Clone, Debug)]
pub struct ThreePointsLV {
    name: String,
    points: [f64; 3],
    labels: [String; 3],
}

impl ThreePointsLV {
    pub fn new(name: impl Into<String>, p1: f64, p2: f64, p3: f64) -> Self {
        Self {
            name: name.into(),
            points: [p1, p2, p3],
            labels: ["low".into(), "medium".into(), "high".into()],
        }
    }

    pub fn labels(mut self, n1: impl Into<String>, n2: impl Into<String>, n3: impl Into<String>) -> Self {
        self.labels = [n1.into(), n2.into(), n3.into()];
        self
    }

    pub fn build(self) -> Result<LinguisticVariable> {
        let [p1, p2, p3] = self.points;

        if !(p1 < p2 && p2 < p3) {
            return Err(FuzzyError::PointsNotIncreasing(self.points.to_vec()));
        }

        let [n1, n2, n3] = self.labels;

        LinguisticVariable::new(
            self.name,
            [
                (n1, LinPWMF::new([(p1, 1.), (p2, 0.)])?),
                (n2, LinPWMF::new([(p1, 0.), (p2, 1.), (p3, 0.)])?),
                (n3, LinPWMF::new([(p2, 0.), (p3, 1.)])?),
            ],
        )
    }
}

/// ```text
///   ^
/// 1 |XXXXXXXXX                 XXXXXXXXXXX
///   |        XX               XX
///   |         XXX            XX
///   |           XXX        XX
///   |             XXX    XXX
///   |               XXXXX
///   |             XXX    XXX
///   |          XX           XX
///   |        XX              XXX
/// 0 +------------------------------------>
///           P<------ d ------>
/// ```
///
/// "low" is 1 at `p` and 0 at `p + d`, "high" is its complement.
#[derive(Clone, Debug)]
pub struct TwoPointsPDLV {
    name: String,
    p: f64,
    d: f64,
    labels: [String; 2],
}

impl TwoPointsPDLV {
    pub fn new(name: impl Into<String>, p: f64, d: f64) -> Self {
        Self {
            name: name.into(),
            p,
            d,
            labels: ["low".into(), "high".into()],
        }
    }

    pub fn labels(mut self, n1: impl Into<String>, n2: impl Into<String>) -> Self {
        self.labels = [n1.into(), n2.into()];
        self
    }

    pub fn build(self) -> Result<LinguisticVariable> {
        let (p, d) = (self.p, self.d);
        let [n1, n2] = self.labels;

        LinguisticVariable::new(
            self.name,
            [
                (n1, LinPWMF::new([(p, 1.), (p + d, 0.)])?),
                (n2, LinPWMF::new([(p, 0.), (p + d, 1.)])?),
            ],
        )
    }
}

#[test]
fn test_three_points_shape() {
    let var = ThreePointsLV::new("T", 0., 10., 20.).build().unwrap();

    assert_eq!(var.labels().collect::<Vec<_>>(), vec!["low", "medium", "high"]);
    assert_eq!(var["low"].fuzzify(0.), 1.);
    assert_eq!(var["low"].fuzzify(10.), 0.);
    assert_eq!(var["medium"].fuzzify(0.), 0.);
    assert_eq!(var["medium"].fuzzify(10.), 1.);
    assert_eq!(var["medium"].fuzzify(20.), 0.);
    assert_eq!(var["high"].fuzzify(10.), 0.);
    assert_eq!(var["high"].fuzzify(20.), 1.);
    assert_eq!(var["medium"].fuzzify(15.), 0.5);
}

#[test]
fn test_three_points_not_increasing() {
    assert!(matches!(
        ThreePointsLV::new("T", 10., 5., 20.).build(),
        Err(FuzzyError::PointsNotIncreasing(points)) if points == vec![10., 5., 20.]
    ));
    assert!(ThreePointsLV::new("T", 0., 0., 20.).build().is_err());
    assert!(ThreePointsLV::new("T", 0., f64::NAN, 20.).build().is_err());
}

#[test]
fn test_three_points_custom_labels() {
    let var = ThreePointsLV::new("temperature", 17., 20., 26.)
        .labels("cold", "warm", "hot")
        .build()
        .unwrap();

    assert_eq!(var.labels().collect::<Vec<_>>(), vec!["cold", "warm", "hot"]);
    assert_eq!(var["hot"].fuzzify(30.), 1.);
}

#[test]
fn test_two_points_shape() {
    let var = TwoPointsPDLV::new("sunshine", 20., 60.).build().unwrap();

    assert_eq!(var["low"].fuzzify(20.), 1.);
    assert_eq!(var["high"].fuzzify(20.), 0.);
    assert_eq!(var["low"].fuzzify(80.), 0.);
    assert_eq!(var["high"].fuzzify(80.), 1.);
    assert_eq!(var["low"].fuzzify(50.), 0.5);
    assert_eq!(var["high"].fuzzify(50.), 0.5);
}
