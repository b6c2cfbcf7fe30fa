pub mod categories;
pub mod tasks;

pub use categories::CategoryService;
pub use tasks::TaskService;

use serde::Deserialize;

/// The backend wraps every collection/resource response in this envelope.
/// Only `data` is consumed; the accompanying `message` is ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}
