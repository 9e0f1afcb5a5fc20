pub mod contacts;
pub mod error;
pub mod sql;

pub use contacts::{read_records, write_json, write_records, write_sample};
pub use error::{Result, StoreError, StoreErrorKind};
pub use sql::DeleteScript;
