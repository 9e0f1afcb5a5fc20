pub mod batch;
pub mod domain;
pub mod dto;
pub mod error;
pub mod names;
pub mod validity;

pub use batch::{normalize_batch, NormalizedBatch, UnrecoverablePolicy};
pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use names::{normalize, NormalizationOutcome, Normalizer, NormalizerBuilder};
pub use validity::{partition_by_validity, ListMode, Partition, PhoneSet};
