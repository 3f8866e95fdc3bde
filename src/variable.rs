use std::ops::Index;

use indexmap::IndexMap;

use crate::error::{FuzzyError, Result};
use crate::membership::MembershipFunction;

/// A named variable whose values are labels, each backed by a membership
/// function. Labels keep their insertion order.
///
/// Rule elements share variables through an `Arc` rather than copying them, so
/// a variable should not change once rules have been built against it.
#[derive(Clone, Debug, PartialEq)]
pub struct LinguisticVariable {
    name: String,
    ling_values: IndexMap<String, MembershipFunction>,
}

impl LinguisticVariable {
    pub fn new<L, M>(name: impl Into<String>, ling_values: impl IntoIterator<Item = (L, M)>) -> Result<Self>
    where
        L: Into<String>,
        M: Into<MembershipFunction>,
    {
        let name = name.into();
        let iter = ling_values.into_iter();
        let mut map = IndexMap::with_capacity(iter.size_hint().0);

        for (label, mf) in iter {
            let label = label.into();

            if map.contains_key(&label) {
                return Err(FuzzyError::DuplicateLabel { variable: name, label });
            }

            map.insert(label, mf.into());
        }

        Ok(Self { name, ling_values: map })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ling_values(&self) -> &IndexMap<String, MembershipFunction> {
        &self.ling_values
    }

    pub fn get(&self, label: &str) -> Option<&MembershipFunction> {
        self.ling_values.get(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.ling_values.contains_key(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.ling_values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ling_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ling_values.is_empty()
    }

    pub(crate) fn require(&self, label: &str) -> Result<()> {
        if self.contains(label) {
            Ok(())
        } else {
            Err(FuzzyError::UnknownLabel {
                variable: self.name.clone(),
                label: label.to_owned(),
            })
        }
    }
}

impl Index<&str> for LinguisticVariable {
    type Output = MembershipFunction;

    /// Panics if the label doesn't exist, use `get` otherwise.
    fn index(&self, label: &str) -> &MembershipFunction {
        &self.ling_values[label]
    }
}

#[test]
fn test_labels_keep_insertion_order() {
    use crate::membership::{LinPWMF, SingletonMF};

    let var = LinguisticVariable::new(
        "sunshine",
        [
            ("cloudy", MembershipFunction::from(LinPWMF::new([(30., 1.), (50., 0.)]).unwrap())),
            ("part_sunny", LinPWMF::new([(30., 0.), (50., 1.), (100., 0.)]).unwrap().into()),
            ("sunny", SingletonMF::new(100.).into()),
        ],
    )
    .unwrap();

    assert_eq!(var.name(), "sunshine");
    assert_eq!(var.labels().collect::<Vec<_>>(), vec!["cloudy", "part_sunny", "sunny"]);
    assert_eq!(var.len(), 3);
    assert_eq!(var["part_sunny"].fuzzify(40.), 0.5);
    assert_eq!(var.get("sunny").map(|mf| mf.fuzzify(100.)), Some(1.));
    assert!(var.get("rainy").is_none());
    assert!(var.require("cloudy").is_ok());
    assert!(matches!(var.require("rainy"), Err(FuzzyError::UnknownLabel { .. })));
}

#[test]
fn test_duplicate_label() {
    use crate::membership::SingletonMF;

    let result = LinguisticVariable::new("t", [("a", SingletonMF::new(1.)), ("a", SingletonMF::new(2.))]);

    match result {
        Err(FuzzyError::DuplicateLabel { variable, label }) => {
            assert_eq!(variable, "t");
            assert_eq!(label, "a");
        },
        other => panic!("unexpected {other:?}"),
    }
}
