use serde::Serialize;
use std::fmt;

use super::error::{non_negative, ValidationError};

/// An access-gated named entity, checked against a record's privilege level.
///
/// The name is the lookup key; there is no other identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    name: String,
    required_level: u32,
}

impl Resource {
    /// Creates a new Resource.
    ///
    /// # Errors
    /// [`ValidationError`] if `name` is empty or `required_level` is negative.
    pub fn new(name: impl Into<String>, required_level: i64) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName { entity: "Resource" });
        }
        Ok(Self {
            name,
            required_level: non_negative("Required access level", required_level)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required_level(&self) -> u32 {
        self.required_level
    }

    /// Equality grants access.
    pub fn admits(&self, privilege_level: u32) -> bool {
        privilege_level >= self.required_level
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Resource: {}, Required Access: {}",
            self.name, self.required_level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_name_and_negative_level() {
        assert_eq!(
            Resource::new("", 1),
            Err(ValidationError::EmptyName { entity: "Resource" })
        );
        assert!(matches!(
            Resource::new("Lab", -1),
            Err(ValidationError::Negative { value: -1, .. })
        ));
    }

    #[test]
    fn admits_at_boundary() {
        let lab = Resource::new("Lab", 3).unwrap();
        assert!(lab.admits(3));
        assert!(lab.admits(4));
        assert!(!lab.admits(2));
    }
}
