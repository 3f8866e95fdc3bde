use indexmap::IndexMap;

/// Crisp input values of one sample, keyed by variable name. Iterates in
/// insertion order, which is also the order of the fuzzified degrees.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Inputs(pub(crate) IndexMap<String, f64>);

impl Inputs {
    pub fn new() -> Self {
        Inputs(IndexMap::new())
    }

    /// Setting a variable twice overwrites the value but keeps its first position
    pub fn add(&mut self, var: impl Into<String>, val: f64) {
        self.0.insert(var.into(), val);
    }

    pub fn with(mut self, var: impl Into<String>, val: f64) -> Self {
        self.add(var, val);
        self
    }

    pub fn get(&self, var: &str) -> Option<f64> {
        self.0.get(var).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.0.iter().map(|(name, val)| (name.as_str(), *val))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Inputs {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        Inputs(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[test]
fn test_insertion_order() {
    let mut inputs = Inputs::new().with("temperature", 18.).with("sunshine", 55.);

    inputs.add("temperature", 21.);

    assert_eq!(inputs.iter().collect::<Vec<_>>(), vec![("temperature", 21.), ("sunshine", 55.)]);
    assert_eq!(inputs.get("sunshine"), Some(55.));
    assert_eq!(inputs.get("wind"), None);
    assert_eq!(inputs.len(), 2);
}
