//! Ordering strategies for the three record indexes.
//!
//! Each [`IndexOrder`] is a lexicographic order over a permutation of the
//! record fields. Within a field, wild sorts before every literal value and two
//! wild fields compare equal. Wild therefore acts as the minimum of its field,
//! which lets a pattern serve as the lower bound of the sub-range holding all
//! records that share its leading literal fields.
//!
//! # Key Format
//!
//! Indexes do not call [`IndexOrder::compare`] directly; they are keyed by an
//! [`IndexKey`], the record's fields already permuted into the order's
//! priority. `IndexKey`'s derived `Ord` agrees with `compare` field for field.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::record::{Field, Record};

/// One of the three index orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexOrder {
    /// Entity, then relation, then property.
    EntityRelationProperty,
    /// Relation, then property, then entity.
    RelationPropertyEntity,
    /// Property, then entity, then relation.
    PropertyEntityRelation,
}

impl IndexOrder {
    /// All orders, in the position each index occupies in the store.
    pub const ALL: [Self; 3] = [
        Self::EntityRelationProperty,
        Self::RelationPropertyEntity,
        Self::PropertyEntityRelation,
    ];

    /// Position of this order's index in the store.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::EntityRelationProperty => 0,
            Self::RelationPropertyEntity => 1,
            Self::PropertyEntityRelation => 2,
        }
    }

    /// Field priority, most significant first.
    #[must_use]
    pub const fn fields(self) -> [Field; 3] {
        match self {
            Self::EntityRelationProperty => [Field::Entity, Field::Relation, Field::Property],
            Self::RelationPropertyEntity => [Field::Relation, Field::Property, Field::Entity],
            Self::PropertyEntityRelation => [Field::Property, Field::Entity, Field::Relation],
        }
    }

    /// Pick the order that puts the pattern's literal fields first.
    ///
    /// - entity literal: entity-led
    /// - entity wild, relation literal: relation-led
    /// - otherwise: property-led
    ///
    /// A pattern like `(e, *, p)` is served entity-led with only the entity
    /// bound, so the scan covers every record for `e` rather than just the
    /// matches.
    #[must_use]
    pub const fn for_pattern(pattern: &Record) -> Self {
        if !pattern.entity_wild() {
            Self::EntityRelationProperty
        } else if !pattern.relation_wild() {
            Self::RelationPropertyEntity
        } else {
            Self::PropertyEntityRelation
        }
    }

    /// Compare two records under this order.
    #[must_use]
    pub fn compare(self, a: &Record, b: &Record) -> Ordering {
        self.fields()
            .into_iter()
            .map(|field| compare_field(a, b, field))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Build the index key for a record.
    #[must_use]
    pub fn key(self, record: &Record) -> IndexKey {
        IndexKey(self.fields().map(|field| {
            if record.is_wild(field) {
                KeyPart::Wild
            } else {
                KeyPart::Literal(Arc::clone(record.shared_value(field)))
            }
        }))
    }

    /// Build the key of a literal record given its values in field order.
    #[must_use]
    pub fn literal_key(self, entity: &str, relation: &str, property: &str) -> IndexKey {
        let values = [entity, relation, property];
        IndexKey(
            self.fields()
                .map(|field| KeyPart::Literal(Arc::from(values[field.index()]))),
        )
    }

    /// Dash-separated field names, e.g. `entity-relation-property`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::EntityRelationProperty => "entity-relation-property",
            Self::RelationPropertyEntity => "relation-property-entity",
            Self::PropertyEntityRelation => "property-entity-relation",
        }
    }
}

impl fmt::Display for IndexOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn compare_field(a: &Record, b: &Record, field: Field) -> Ordering {
    match (a.is_wild(field), b.is_wild(field)) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.value(field).cmp(b.value(field)),
    }
}

/// One component of an [`IndexKey`].
///
/// Variant order matters: `Wild` sorts before any `Literal`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyPart {
    Wild,
    Literal(Arc<str>),
}

/// A record's fields permuted into an order's priority.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexKey([KeyPart; 3]);

impl IndexKey {
    /// Number of leading literal parts.
    #[must_use]
    pub fn prefix_len(&self) -> usize {
        self.0
            .iter()
            .take_while(|part| matches!(part, KeyPart::Literal(_)))
            .count()
    }

    /// The smallest key sharing this key's first `len` parts.
    #[must_use]
    pub fn lower_bound(&self, len: usize) -> Self {
        let mut parts = self.0.clone();
        for part in parts.iter_mut().skip(len) {
            *part = KeyPart::Wild;
        }
        Self(parts)
    }

    /// Whether the first `len` parts of both keys are equal.
    #[must_use]
    pub fn shares_prefix(&self, other: &Self, len: usize) -> bool {
        self.0[..len] == other.0[..len]
    }

    /// The key parts, most significant first.
    #[must_use]
    pub const fn parts(&self) -> &[KeyPart; 3] {
        &self.0
    }
}
