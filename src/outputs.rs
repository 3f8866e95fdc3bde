use indexmap::IndexMap;

use crate::membership::FreeShapeMF;

/// Implicated membership functions of one rule, grouped by output variable
/// name. Within a variable they follow the rule's consequent order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImplicatedConsequents(IndexMap<String, Vec<FreeShapeMF>>);

impl ImplicatedConsequents {
    pub(crate) fn new() -> Self {
        Self(IndexMap::new())
    }

    pub(crate) fn push(&mut self, var: &str, mf: FreeShapeMF) {
        match self.0.get_mut(var) {
            Some(mfs) => mfs.push(mf),
            None => {
                self.0.insert(var.to_owned(), vec![mf]);
            },
        }
    }

    pub fn get(&self, var: &str) -> Option<&[FreeShapeMF]> {
        self.0.get(var).map(Vec::as_slice)
    }

    pub fn variables(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FreeShapeMF])> + '_ {
        self.0.iter().map(|(name, mfs)| (name.as_str(), mfs.as_slice()))
    }

    /// Number of output variables
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> IndexMap<String, Vec<FreeShapeMF>> {
        self.0
    }
}
