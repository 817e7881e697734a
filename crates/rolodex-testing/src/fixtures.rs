//! Deterministic sample contacts for seeding tests. Stable across runs so
//! tests can assert on concrete names and numbers.

use rolodex_types::{Contact, ContactFields};

const FIRST_NAMES: &[&str] = &["Marina", "Mary", "Viktor", "Anna", "Pavel", "Olga"];
const LAST_NAMES: &[&str] = &["Ivanova", "Smith", "Petrov", "Karenina", "Sokolov", "Orlova"];
const COMPANIES: &[&str] = &["Albatross Ltd", "Binary Forge", "Cobalt Works", "Delta Freight"];

/// Fields for the i-th sample contact. Work numbers use the 6-digit short
/// form, mobiles the 11-digit form; both pass `validate_number`.
pub fn sample_fields(i: usize) -> ContactFields {
    ContactFields {
        first_name: FIRST_NAMES[i % FIRST_NAMES.len()].to_string(),
        last_name: LAST_NAMES[i % LAST_NAMES.len()].to_string(),
        patronymic: String::new(),
        company: COMPANIES[i % COMPANIES.len()].to_string(),
        work: format!("{}", 443300 + (i % 100)),
        mobile: format!("8911201{:04}", i % 10000),
    }
}

/// The first `count` sample contacts with freshly generated ids
pub fn sample_contacts(count: usize) -> Vec<Contact> {
    (0..count).map(|i| Contact::new(sample_fields(i))).collect()
}
