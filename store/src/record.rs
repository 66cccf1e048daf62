//! Immutable (entity, relation, property) records.
//!
//! A record is either a *literal* record, which is what the store holds, or a
//! *pattern* record, whose fields may be individually marked wild. Patterns
//! exist only for the duration of a query or removal and are never stored.
//!
//! # Matching
//!
//! Two fields match if their text is identical or at least one side is wild
//! for that field. Two records match if all three fields match pairwise. The
//! rule is applied per field and is symmetric, so a wild entity on one side and
//! a wild relation on the other still match when the remaining property agrees.

use std::fmt::{self, Write as _};
use std::sync::Arc;

use crate::error::RecordError;
use crate::ids::{IdGenerator, RecordId};

/// Default width each field is right-justified to when rendered.
pub const DEFAULT_FIELD_WIDTH: usize = 8;

/// One of the three record columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Entity,
    Relation,
    Property,
}

impl Field {
    /// All fields in declaration order.
    pub const ALL: [Self; 3] = [Self::Entity, Self::Relation, Self::Property];

    /// Position of this field in a record's arrays.
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Entity => 0,
            Self::Relation => 1,
            Self::Property => 2,
        }
    }

    /// Lower-case column name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Relation => "relation",
            Self::Property => "property",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable triple, readonly once built.
///
/// INVARIANT: fields and wild flags never change after construction. Equality
/// compares fields and wild flags only; the id is ignored.
#[derive(Debug, Clone)]
pub struct Record {
    id: RecordId,
    values: [Arc<str>; 3],
    wild: [bool; 3],
}

impl Record {
    /// Build a literal record. No field is wild, whatever its text.
    #[must_use]
    pub fn literal(ids: &IdGenerator, entity: &str, relation: &str, property: &str) -> Self {
        Self {
            id: ids.next_id(),
            values: [entity.into(), relation.into(), property.into()],
            wild: [false; 3],
        }
    }

    /// Build a pattern record. Each field equal to `wildcard` is wild.
    #[must_use]
    pub fn pattern(
        ids: &IdGenerator,
        wildcard: &str,
        entity: &str,
        relation: &str,
        property: &str,
    ) -> Self {
        Self {
            id: ids.next_id(),
            values: [entity.into(), relation.into(), property.into()],
            wild: [entity == wildcard, relation == wildcard, property == wildcard],
        }
    }

    /// Build a literal record from possibly absent fields.
    ///
    /// No id is consumed when a field is missing.
    pub fn try_literal(
        ids: &IdGenerator,
        entity: Option<&str>,
        relation: Option<&str>,
        property: Option<&str>,
    ) -> Result<Self, RecordError> {
        let [entity, relation, property] = require_fields(entity, relation, property)?;
        Ok(Self::literal(ids, entity, relation, property))
    }

    /// Build a pattern record from possibly absent fields and placeholder.
    pub fn try_pattern(
        ids: &IdGenerator,
        wildcard: Option<&str>,
        entity: Option<&str>,
        relation: Option<&str>,
        property: Option<&str>,
    ) -> Result<Self, RecordError> {
        let wildcard = wildcard.ok_or(RecordError::MissingWildcard)?;
        let [entity, relation, property] = require_fields(entity, relation, property)?;
        Ok(Self::pattern(ids, wildcard, entity, relation, property))
    }

    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    #[must_use]
    pub fn entity(&self) -> &str {
        &self.values[0]
    }

    #[must_use]
    pub fn relation(&self) -> &str {
        &self.values[1]
    }

    #[must_use]
    pub fn property(&self) -> &str {
        &self.values[2]
    }

    #[must_use]
    pub const fn entity_wild(&self) -> bool {
        self.wild[0]
    }

    #[must_use]
    pub const fn relation_wild(&self) -> bool {
        self.wild[1]
    }

    #[must_use]
    pub const fn property_wild(&self) -> bool {
        self.wild[2]
    }

    /// Text of the given field.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Shared handle to the given field's text.
    pub(crate) const fn shared_value(&self, field: Field) -> &Arc<str> {
        &self.values[field.index()]
    }

    /// Whether the given field is wild.
    #[must_use]
    pub const fn is_wild(&self, field: Field) -> bool {
        self.wild[field.index()]
    }

    /// True if any field is wild.
    #[must_use]
    pub const fn is_pattern(&self) -> bool {
        self.wild[0] || self.wild[1] || self.wild[2]
    }

    /// Whether `field` matches between the two records.
    #[must_use]
    pub fn field_matches(&self, other: &Self, field: Field) -> bool {
        self.is_wild(field) || other.is_wild(field) || self.value(field) == other.value(field)
    }

    /// Whether all three fields match pairwise.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        Field::ALL
            .into_iter()
            .all(|field| self.field_matches(other, field))
    }

    /// Render the fields right-justified to `width`, each followed by a space.
    #[must_use]
    pub fn render(&self, width: usize) -> String {
        let mut out = String::with_capacity(3 * (width + 1));
        for value in &self.values {
            // Writing into a String cannot fail.
            let _ = write!(out, "{value:>width$} ");
        }
        out
    }
}

fn require_fields<'a>(
    entity: Option<&'a str>,
    relation: Option<&'a str>,
    property: Option<&'a str>,
) -> Result<[&'a str; 3], RecordError> {
    let entity = entity.ok_or(RecordError::MissingField(Field::Entity))?;
    let relation = relation.ok_or(RecordError::MissingField(Field::Relation))?;
    let property = property.ok_or(RecordError::MissingField(Field::Property))?;
    Ok([entity, relation, property])
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.wild == other.wild && self.values == other.values
    }
}

impl Eq for Record {}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_FIELD_WIDTH))
    }
}
