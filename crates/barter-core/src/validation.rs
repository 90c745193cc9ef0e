//! Upload form checks.
//!
//! `ItemCatalog::add_item` accepts whatever it is given; front ends run
//! these checks first, matching the upload form's required fields and its
//! five-digit zipcode pattern.

use crate::error::ValidationError;
use crate::types::NewItem;

pub fn validate_new_item(item: &NewItem) -> Result<(), ValidationError> {
    if item.name.trim().is_empty() {
        return Err(ValidationError::MissingField("name"));
    }
    if item.description.trim().is_empty() {
        return Err(ValidationError::MissingField("description"));
    }
    validate_zipcode(&item.zipcode)
}

pub fn validate_zipcode(zipcode: &str) -> Result<(), ValidationError> {
    let zipcode = zipcode.trim();
    if zipcode.is_empty() {
        return Err(ValidationError::MissingField("zipcode"));
    }
    if zipcode.len() != 5 || !zipcode.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidZipcode(zipcode.to_string()));
    }
    Ok(())
}
