//! People document store.
//!
//! # Data Flow
//! ```text
//! NewPerson ──validate──▶ PersonStore (DashMap<Uuid, Person>)
//!                              │
//!      find(filter) ──▶ PersonQuery ──sort──▶ limit ──▶ select ──▶ exec ──▶ JSON documents
//! ```
//!
//! # Design Decisions
//! - Records are validated on every write, including edits made through `update_by_id`
//! - Natural order is insertion order; `find_one_*` returns the earliest match
//! - Query results are projected JSON documents, so excluded fields are absent, not defaulted

mod error;
mod model;
mod query;
mod store;

pub use error::StoreError;
pub use model::{NewPerson, Person, PersonUpdate};
pub use query::{PersonFilter, PersonQuery, Projection, SortKey, SortOrder};
pub use store::PersonStore;
