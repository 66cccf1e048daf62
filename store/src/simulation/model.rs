//! Brute-force reference model of a triple store.
//!
//! Holds the expected contents as plain tuples and answers patterns with a
//! full scan, so store results can be compared against it.

use std::collections::BTreeSet;

/// An (entity, relation, property) tuple.
pub type Triple = (String, String, String);

/// Expected store contents.
#[derive(Debug, Default)]
pub struct ReferenceModel {
    triples: BTreeSet<Triple>,
}

impl ReferenceModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a triple. Returns `false` if it was already present.
    pub fn add(&mut self, entity: &str, relation: &str, property: &str) -> bool {
        self.triples
            .insert((entity.to_owned(), relation.to_owned(), property.to_owned()))
    }

    /// Triples matching the pattern, sorted by entity, relation, property.
    #[must_use]
    pub fn matching(&self, wildcard: &str, entity: &str, relation: &str, property: &str) -> Vec<Triple> {
        let accepts = |pattern: &str, value: &str| pattern == wildcard || pattern == value;
        self.triples
            .iter()
            .filter(|(e, r, p)| {
                accepts(entity, e.as_str())
                    && accepts(relation, r.as_str())
                    && accepts(property, p.as_str())
            })
            .cloned()
            .collect()
    }

    /// Remove triples matching the pattern. Returns how many were removed.
    pub fn remove(&mut self, wildcard: &str, entity: &str, relation: &str, property: &str) -> usize {
        let doomed = self.matching(wildcard, entity, relation, property);
        for triple in &doomed {
            self.triples.remove(triple);
        }
        doomed.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_add_and_match() {
        let mut model = ReferenceModel::new();
        assert!(model.add("a", "r", "p"));
        assert!(!model.add("a", "r", "p"));
        assert!(model.add("a", "s", "p"));
        assert_eq!(model.matching("*", "a", "*", "p").len(), 2);
        assert_eq!(model.matching("*", "*", "s", "*").len(), 1);
        assert!(model.matching("?", "*", "s", "*").is_empty());
    }

    #[test]
    fn test_model_remove() {
        let mut model = ReferenceModel::new();
        model.add("a", "r", "p");
        model.add("b", "r", "p");
        assert_eq!(model.remove("*", "*", "r", "*"), 2);
        assert!(model.is_empty());
    }
}
