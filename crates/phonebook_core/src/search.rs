use shared::domain::{Contact, SearchField};

/// Case-insensitive substring match, keeping collection order. An empty term
/// matches every contact.
pub fn matching<'a>(contacts: &'a [Contact], term: &str, field: SearchField) -> Vec<&'a Contact> {
    let needle = term.to_lowercase();
    contacts
        .iter()
        .filter(|contact| matches(contact, &needle, field))
        .collect()
}

fn matches(contact: &Contact, needle: &str, field: SearchField) -> bool {
    contact
        .searchable(field)
        .iter()
        .any(|value| value.to_lowercase().contains(needle))
}

#[cfg(test)]
#[path = "tests/search_tests.rs"]
mod tests;
