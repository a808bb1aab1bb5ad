use serde::Serialize;
use std::fmt;

use super::error::{non_negative, ValidationError};

/// The concrete kind of a [`Record`] and the data only that kind carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum RecordKind {
    User,
    Student { group: i64 },
    Teacher { department: String },
    Administrator { secret: String },
}

impl RecordKind {
    /// The leading token written for this kind in the text format.
    pub fn tag(&self) -> &'static str {
        match self {
            RecordKind::User => "User",
            RecordKind::Student { .. } => "Student",
            RecordKind::Teacher { .. } => "Teacher",
            RecordKind::Administrator { .. } => "Administrator",
        }
    }
}

/// One identity-bearing entity held in the store.
///
/// # Invariants
/// - `name` is non-empty
/// - `id` and `privilege_level` are non-negative
///
/// Both are checked by the constructors; the fields are private so they cannot be
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    id: u32,
    name: String,
    privilege_level: u32,
    #[serde(flatten)]
    kind: RecordKind,
}

impl Record {
    /// Builds a record of any kind, validating the shared identity fields.
    pub fn new(
        name: impl Into<String>,
        id: i64,
        privilege_level: i64,
        kind: RecordKind,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName { entity: "User" });
        }
        Ok(Self {
            id: non_negative("User ID", id)?,
            name,
            privilege_level: non_negative("Access level", privilege_level)?,
            kind,
        })
    }

    pub fn user(name: impl Into<String>, id: i64, privilege_level: i64) -> Result<Self, ValidationError> {
        Self::new(name, id, privilege_level, RecordKind::User)
    }

    pub fn student(
        name: impl Into<String>,
        id: i64,
        privilege_level: i64,
        group: i64,
    ) -> Result<Self, ValidationError> {
        Self::new(name, id, privilege_level, RecordKind::Student { group })
    }

    pub fn teacher(
        name: impl Into<String>,
        id: i64,
        privilege_level: i64,
        department: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let department = department.into();
        Self::new(name, id, privilege_level, RecordKind::Teacher { department })
    }

    pub fn administrator(
        name: impl Into<String>,
        id: i64,
        privilege_level: i64,
        secret: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let secret = secret.into();
        Self::new(name, id, privilege_level, RecordKind::Administrator { secret })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn privilege_level(&self) -> u32 {
        self.privilege_level
    }

    pub fn kind(&self) -> &RecordKind {
        &self.kind
    }

    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, ID: {}, Access Level: {}",
            self.name, self.id, self.privilege_level
        )?;
        match &self.kind {
            RecordKind::User => Ok(()),
            RecordKind::Student { group } => write!(f, ", Group: {} (Student)", group),
            RecordKind::Teacher { department } => {
                write!(f, ", Department: {} (Teacher)", department)
            }
            // The secret stays out of display output.
            RecordKind::Administrator { .. } => write!(f, " (Administrator)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_validate_shared_fields() {
        assert_eq!(
            Record::user("", 1, 1),
            Err(ValidationError::EmptyName { entity: "User" })
        );
        assert_eq!(
            Record::student("Nick", -1, 1, 101),
            Err(ValidationError::Negative { field: "User ID", value: -1 })
        );
        assert_eq!(
            Record::teacher("Brown", 2, -3, "CS"),
            Err(ValidationError::Negative { field: "Access level", value: -3 })
        );
        assert!(Record::administrator("Smith", i64::from(u32::MAX) + 1, 5, "k1").is_err());
    }

    #[test]
    fn kind_determines_tag() {
        let admin = Record::administrator("Smith", 3, 5, "k1").unwrap();
        assert_eq!(admin.tag(), "Administrator");
        assert_eq!(admin.privilege_level(), 5);
        assert_eq!(
            admin.kind(),
            &RecordKind::Administrator { secret: "k1".into() }
        );
    }

    #[test]
    fn display_matches_kind() {
        let nick = Record::student("Nick", 1, 1, 101).unwrap();
        assert_eq!(
            nick.to_string(),
            "Name: Nick, ID: 1, Access Level: 1, Group: 101 (Student)"
        );
        let smith = Record::administrator("Smith", 3, 5, "k1").unwrap();
        assert_eq!(
            smith.to_string(),
            "Name: Smith, ID: 3, Access Level: 5 (Administrator)"
        );
    }

    #[test]
    fn serializes_flat_with_kind_tag() {
        let brown = Record::teacher("Brown", 2, 3, "CS").unwrap();
        let json = serde_json::to_value(&brown).unwrap();
        assert_eq!(json["kind"], "Teacher");
        assert_eq!(json["department"], "CS");
        assert_eq!(json["privilege_level"], 3);
        assert_eq!(json["id"], 2);
    }
}
