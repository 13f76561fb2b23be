//! Base shape shared by every record kind
//!
//! `Person` carries the identity fields (`id`, `name`, `created`) and is
//! embedded by composition in each concrete record. The embedding types
//! flatten it with serde so stored mappings stay flat.

use serde::Deserialize;

use crate::error::{Result, RosterError};
use crate::utils::{generate_uuid, iso_date};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Person {
    id: String,
    name: String,
    created: String,
}

impl Person {
    /// Construct with a freshly generated id and creation timestamp
    pub(crate) fn new(name: &str) -> Result<Self> {
        let person = Person {
            id: generate_uuid(),
            name: name.trim().to_string(),
            created: iso_date(),
        };
        person.validate()?;
        Ok(person)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created(&self) -> &str {
        &self.created
    }

    /// Copy with a different name; id and created are preserved
    pub(crate) fn with_name(&self, name: &str) -> Result<Self> {
        let person = Person {
            id: self.id.clone(),
            name: name.trim().to_string(),
            created: self.created.clone(),
        };
        person.validate()?;
        Ok(person)
    }

    /// Field checks shared by construction and deserialization. The caller
    /// decides whether a failure is a `Validation` or `MalformedRecord`.
    pub(crate) fn check_fields(&self) -> std::result::Result<(), String> {
        if self.id.is_empty() {
            return Err("id cannot be empty".to_string());
        }
        if self.name.trim().is_empty() {
            return Err("name cannot be empty".to_string());
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        self.check_fields().map_err(RosterError::Validation)
    }
}
