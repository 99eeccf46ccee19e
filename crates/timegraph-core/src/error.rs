// File: crates/timegraph-core/src/error.rs
// Summary: Library error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    /// The dynamically-typed container handed to `set_items_dyn` was neither
    /// a `DataSet` nor a `DataView`. The previous container stays assigned.
    #[error("items container must be a DataSet or a DataView")]
    InvalidContainer,
}
