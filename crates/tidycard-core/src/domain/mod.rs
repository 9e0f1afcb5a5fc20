pub mod country;
pub mod phone;
pub mod record;

pub use country::{country_breakdown, country_for_phone};
pub use phone::phone_match_key;
pub use record::{merge_note, sort_by_name, ContactRecord};
