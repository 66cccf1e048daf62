// An in-memory triple store.
//
// Life of a call:
// 1. Caller passes three text fields to `TripleStore`
// 2. The store turns them into a `Record`:
//     - literal for `add`
//     - pattern for `query` / `remove`, wild where a field equals the wildcard
// 3. For `add`: insert into all three indexes as one unit
//    For `query` / `remove`:
//     - Pick the index whose order leads with the pattern's literal fields
//     - Walk only the sub-range sharing that literal prefix
//     - Keep the entries the pattern matches
//
// System components:
//  - Records and their match rule
//  - Three index orders
//  - The store: slot arena + three ordered indexes

pub mod config;
pub mod error;
pub mod ids;
pub mod order;
pub mod record;
mod store;


pub use config::{ConfigError, StoreConfig};
pub use error::{RecordError, StoreError};
pub use ids::{IdGenerator, RecordId};
pub use order::{IndexKey, IndexOrder, KeyPart};
pub use record::{DEFAULT_FIELD_WIDTH, Field, Record};
pub use store::{QueryPlan, TripleStore};
