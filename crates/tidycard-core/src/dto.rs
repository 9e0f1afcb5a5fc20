use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameChangeDto {
    pub original: String,
    pub cleaned: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnrecoverableNameDto {
    pub phone: String,
    pub original: Option<String>,
    pub date_fragment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeReportDto {
    pub total: usize,
    pub written: usize,
    pub changed: usize,
    pub date_fragments: usize,
    pub dropped: usize,
    pub unrecoverable: Vec<UnrecoverableNameDto>,
    // First changes in input order.
    pub examples: Vec<NameChangeDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryCount {
    pub country: String,
    pub count: usize,
    pub percent: f64,
}
