pub mod error;
pub mod validity;

pub use error::{Result, SyncError};
pub use validity::{
    load_validity, locate_validity_file, parse_validity, ValidityFormat, ValidityLoad,
};
