pub mod contact;
pub mod search;
mod validate;

pub use contact::{Contact, ContactFields, ContactId};
pub use search::SearchCriteria;
pub use validate::validate_number;
