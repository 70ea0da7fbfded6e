//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (non-empty identifiers, a fixed
//! alphabet of form letters) so that once a value reaches the domain layer it
//! can be treated as trusted.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided letter is not one of the known survey forms.
    #[error("unknown form letter: {0}")]
    UnknownFormLetter(String),
}

/// Identifier of the account owning a set of forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, TypeConstraintError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a named project that scopes its own copy of the forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, TypeConstraintError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed set of survey forms the report pipeline knows about.
///
/// Renaming a letter is a breaking change against stored documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormLetter {
    A,
    B,
    C,
    D,
    E,
    G,
    H,
    I,
    J,
}

impl FormLetter {
    pub const ALL: [FormLetter; 9] = [
        FormLetter::A,
        FormLetter::B,
        FormLetter::C,
        FormLetter::D,
        FormLetter::E,
        FormLetter::G,
        FormLetter::H,
        FormLetter::I,
        FormLetter::J,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormLetter::A => "A",
            FormLetter::B => "B",
            FormLetter::C => "C",
            FormLetter::D => "D",
            FormLetter::E => "E",
            FormLetter::G => "G",
            FormLetter::H => "H",
            FormLetter::I => "I",
            FormLetter::J => "J",
        }
    }
}

impl FromStr for FormLetter {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(FormLetter::A),
            "B" => Ok(FormLetter::B),
            "C" => Ok(FormLetter::C),
            "D" => Ok(FormLetter::D),
            "E" => Ok(FormLetter::E),
            "G" => Ok(FormLetter::G),
            "H" => Ok(FormLetter::H),
            "I" => Ok(FormLetter::I),
            "J" => Ok(FormLetter::J),
            other => Err(TypeConstraintError::UnknownFormLetter(other.to_string())),
        }
    }
}

impl Display for FormLetter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a form document lives: the user's default forms or a project copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormScope {
    User(UserId),
    Project(UserId, ProjectId),
}

impl FormScope {
    pub fn user_id(&self) -> &UserId {
        match self {
            FormScope::User(user_id) => user_id,
            FormScope::Project(user_id, _) => user_id,
        }
    }

    pub fn project_id(&self) -> Option<&ProjectId> {
        match self {
            FormScope::User(_) => None,
            FormScope::Project(_, project_id) => Some(project_id),
        }
    }

    /// Canonical path of a form document inside the hierarchical store.
    pub fn storage_path(&self, letter: FormLetter) -> String {
        match self {
            FormScope::User(user_id) => format!("users/{user_id}/forms/{letter}"),
            FormScope::Project(user_id, project_id) => {
                format!("users/{user_id}/projectForms/{project_id}/{letter}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_rejects_blank() {
        assert_eq!(UserId::new("   "), Err(TypeConstraintError::EmptyString));
        assert_eq!(UserId::new(" uid-1 ").unwrap().as_str(), "uid-1");
    }

    #[test]
    fn test_form_letter_round_trip() {
        for letter in FormLetter::ALL {
            assert_eq!(letter.as_str().parse::<FormLetter>().unwrap(), letter);
        }
        assert!("F".parse::<FormLetter>().is_err());
    }

    #[test]
    fn test_storage_paths() {
        let user = UserId::new("u1").unwrap();
        let project = ProjectId::new("p9").unwrap();

        let scope = FormScope::User(user.clone());
        assert_eq!(scope.storage_path(FormLetter::A), "users/u1/forms/A");

        let scope = FormScope::Project(user, project);
        assert_eq!(
            scope.storage_path(FormLetter::J),
            "users/u1/projectForms/p9/J"
        );
    }
}
