//! The three-index triple store.
//!
//! Records live in a slot arena. Three ordered indexes, one per
//! [`IndexOrder`], map each record's [`IndexKey`] to its slot. Every mutation
//! goes through [`TripleStore::link`] or [`TripleStore::unlink`], which touch
//! the arena and all three indexes together, so the indexes always hold the
//! same set of records.
//!
//! # Complexity
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `add`     | O(log N) |
//! | `query`   | O(log N + M) |
//! | `remove`  | O(log N + M + K log N) |
//! | render    | O(N) |
//!
//! M is the size of the scanned sub-range: the records sharing the pattern's
//! leading literal fields under the chosen order. M equals the number of
//! matches K whenever every wild field trails the literal ones in that order.
//! The only pattern shape where it does not is `(e, *, p)`, which is served
//! entity-led and scans every record of `e`.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::ids::IdGenerator;
use crate::order::{IndexKey, IndexOrder};
use crate::record::Record;

/// Position of a record in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot(usize);

/// How a pattern was, or would be, evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryPlan {
    /// Index the scan runs over.
    pub order: IndexOrder,
    /// Leading literal fields of the pattern under `order`.
    pub bound_fields: usize,
    /// Index entries visited.
    pub scanned: usize,
    /// Entries that matched the pattern.
    pub matched: usize,
}

/// In-memory three-column database.
///
/// Not internally synchronized. Callers sharing a store across threads must
/// hold one exclusive lock around each whole operation.
#[derive(Debug)]
pub struct TripleStore {
    ids: Arc<IdGenerator>,
    config: StoreConfig,
    slots: Vec<Option<Record>>,
    free: Vec<Slot>,
    indexes: [BTreeMap<IndexKey, Slot>; 3],
}

impl Default for TripleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TripleStore {
    /// Create an empty store with its own id sequence and default config.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an empty store with the given configuration.
    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        Self::with_parts(config, Arc::new(IdGenerator::new()))
    }

    /// Create an empty store drawing record ids from a shared generator.
    #[must_use]
    pub fn with_id_generator(ids: Arc<IdGenerator>) -> Self {
        Self::with_parts(StoreConfig::default(), ids)
    }

    /// Create an empty store from a configuration and an id generator.
    #[must_use]
    pub const fn with_parts(config: StoreConfig, ids: Arc<IdGenerator>) -> Self {
        Self {
            ids,
            config,
            slots: Vec::new(),
            free: Vec::new(),
            indexes: [BTreeMap::new(), BTreeMap::new(), BTreeMap::new()],
        }
    }

    /// The id generator records are drawn from.
    #[must_use]
    pub const fn id_generator(&self) -> &Arc<IdGenerator> {
        &self.ids
    }

    /// Current wildcard placeholder.
    #[must_use]
    pub fn wildcard(&self) -> &str {
        &self.config.wildcard
    }

    /// Replace the wildcard placeholder.
    ///
    /// Affects only later queries and removals. Stored records are literal and
    /// keep no memory of the placeholder in force when they were added.
    pub fn set_wildcard(&mut self, wildcard: impl Into<String>) {
        self.config.wildcard = wildcard.into();
        tracing::debug!(wildcard = %self.config.wildcard, "wildcard changed");
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.primary().len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primary().is_empty()
    }

    /// Whether a literal record with exactly these fields is stored.
    #[must_use]
    pub fn contains(&self, entity: &str, relation: &str, property: &str) -> bool {
        let key = IndexOrder::EntityRelationProperty.literal_key(entity, relation, property);
        self.primary().contains_key(&key)
    }

    /// Stored records in entity, relation, property order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.primary().values().map(|&slot| self.record(slot))
    }

    /// Add a record if it is not already present.
    ///
    /// Any text is accepted, including text equal to the current wildcard.
    /// Returns `false` for duplicates and for absent fields.
    pub fn add<'a>(
        &mut self,
        entity: impl Into<Option<&'a str>>,
        relation: impl Into<Option<&'a str>>,
        property: impl Into<Option<&'a str>>,
    ) -> bool {
        match self.try_add(entity, relation, property) {
            Ok(added) => added,
            Err(e) => {
                tracing::warn!("rejected add: {e}");
                false
            }
        }
    }

    /// Add a record, reporting absent fields as an error.
    ///
    /// `Ok(false)` means an equal record was already stored.
    pub fn try_add<'a>(
        &mut self,
        entity: impl Into<Option<&'a str>>,
        relation: impl Into<Option<&'a str>>,
        property: impl Into<Option<&'a str>>,
    ) -> Result<bool, StoreError> {
        let record = Record::try_literal(&self.ids, entity.into(), relation.into(), property.into())?;

        if self
            .primary()
            .contains_key(&IndexOrder::EntityRelationProperty.key(&record))
        {
            tracing::debug!(record = %record, "duplicate not added");
            return Ok(false);
        }

        tracing::debug!(id = %record.id(), record = %record, "added");
        self.link(record);
        Ok(true)
    }

    /// Records matching the pattern, in the chosen index's order.
    ///
    /// Fields equal to the current wildcard are wild.
    #[must_use]
    pub fn query(&self, entity: &str, relation: &str, property: &str) -> Vec<Record> {
        let pattern = self.pattern(entity, relation, property);
        let (_, slots) = self.scan(&pattern);
        slots.into_iter().map(|slot| self.record(slot).clone()).collect()
    }

    /// Remove every record matching the pattern. Returns how many were removed.
    pub fn remove(&mut self, entity: &str, relation: &str, property: &str) -> usize {
        let pattern = self.pattern(entity, relation, property);
        // The sub-range is collected before any unlink so removals cannot
        // disturb the walk.
        let (plan, slots) = self.scan(&pattern);
        for slot in slots {
            let record = self.unlink(slot);
            tracing::debug!(id = %record.id(), record = %record, "removed");
        }
        plan.matched
    }

    /// Describe how a query or removal with this pattern is evaluated.
    ///
    /// Runs the bounded scan without collecting records.
    #[must_use]
    pub fn explain(&self, entity: &str, relation: &str, property: &str) -> QueryPlan {
        let pattern = self.pattern(entity, relation, property);
        self.scan(&pattern).0
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        for index in &mut self.indexes {
            index.clear();
        }
        tracing::debug!("cleared");
    }

    /// Check that all three indexes hold exactly the arena's live records.
    pub fn verify_indexes(&self) -> Result<(), StoreError> {
        let records = self.slots.iter().filter(|slot| slot.is_some()).count();

        for order in IndexOrder::ALL {
            let index = &self.indexes[order.index()];
            let agreeing = index
                .iter()
                .filter(|(key, slot)| {
                    matches!(
                        self.slots.get(slot.0),
                        Some(Some(record)) if order.key(record) == **key
                    )
                })
                .count();

            if agreeing != records || index.len() != records {
                return Err(StoreError::IndexMismatch {
                    order,
                    records,
                    entries: index.len(),
                    agreeing,
                });
            }
        }
        Ok(())
    }

    const fn primary(&self) -> &BTreeMap<IndexKey, Slot> {
        &self.indexes[IndexOrder::EntityRelationProperty.index()]
    }

    fn pattern(&self, entity: &str, relation: &str, property: &str) -> Record {
        Record::pattern(&self.ids, &self.config.wildcard, entity, relation, property)
    }

    fn record(&self, slot: Slot) -> &Record {
        match self.slots.get(slot.0) {
            Some(Some(record)) => record,
            _ => panic!("index entry points at empty slot {}", slot.0),
        }
    }

    /// Walk the sub-range of the best index for `pattern`, returning the plan
    /// and the slots of every match in index order.
    fn scan(&self, pattern: &Record) -> (QueryPlan, Vec<Slot>) {
        let order = IndexOrder::for_pattern(pattern);
        let key = order.key(pattern);
        let bound_fields = key.prefix_len();

        let mut scanned = 0;
        let mut slots = Vec::new();
        for (_, &slot) in self.indexes[order.index()]
            .range(key.lower_bound(bound_fields)..)
            .take_while(|(stored, _)| stored.shares_prefix(&key, bound_fields))
        {
            scanned += 1;
            if self.record(slot).matches(pattern) {
                slots.push(slot);
            }
        }

        let plan = QueryPlan {
            order,
            bound_fields,
            scanned,
            matched: slots.len(),
        };
        tracing::trace!(
            order = %plan.order,
            bound = plan.bound_fields,
            scanned = plan.scanned,
            matched = plan.matched,
            "scan"
        );
        (plan, slots)
    }

    /// Place a record in the arena and all three indexes.
    fn link(&mut self, record: Record) -> Slot {
        let keys = IndexOrder::ALL.map(|order| order.key(&record));

        let slot = if let Some(slot) = self.free.pop() {
            self.slots[slot.0] = Some(record);
            slot
        } else {
            self.slots.push(Some(record));
            Slot(self.slots.len() - 1)
        };

        for (index, key) in self.indexes.iter_mut().zip(keys) {
            let previous = index.insert(key, slot);
            assert!(previous.is_none(), "index already held this record");
        }
        slot
    }

    /// Take a record out of the arena and all three indexes.
    fn unlink(&mut self, slot: Slot) -> Record {
        let Some(record) = self.slots.get_mut(slot.0).and_then(Option::take) else {
            panic!("unlink of empty slot {}", slot.0);
        };

        for order in IndexOrder::ALL {
            let removed = self.indexes[order.index()].remove(&order.key(&record));
            assert_eq!(removed, Some(slot), "{order} index out of sync with arena");
        }
        self.free.push(slot);
        record
    }
}

impl fmt::Display for TripleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in self.iter() {
            writeln!(f, "{}", record.render(self.config.field_width))?;
        }
        Ok(())
    }
}
