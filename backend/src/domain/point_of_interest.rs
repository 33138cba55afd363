//! Point of interest entity and its write-side validation.
//!
//! Writes never touch [`PointOfInterest`] directly. Callers build a
//! [`PointOfInterestDraft`], validate it into [`PointOfInterestFields`], and
//! only validated fields reach the store.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::ValidationErrors;

/// Maximum length of a point-of-interest name, in characters.
pub const NAME_MAX: usize = 50;
/// Maximum length of a point-of-interest description, in characters.
pub const DESCRIPTION_MAX: usize = 200;

/// Message registered on `description` when it repeats the name.
pub const DESCRIPTION_EQUALS_NAME: &str =
    "The provided description should be different from the name.";

/// Store-wide unique point-of-interest identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointOfInterestId(u32);

impl PointOfInterestId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Identifier following this one in the store-wide sequence, or `None`
    /// once the id space is used up.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl fmt::Display for PointOfInterestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, described sub-resource owned by exactly one city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointOfInterest {
    id: PointOfInterestId,
    name: String,
    description: String,
}

impl PointOfInterest {
    /// Build a point of interest from validated fields.
    pub fn new(id: PointOfInterestId, fields: PointOfInterestFields) -> Self {
        let PointOfInterestFields { name, description } = fields;
        Self {
            id,
            name,
            description,
        }
    }

    /// Store-wide identifier. Never changes after creation.
    pub fn id(&self) -> PointOfInterestId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Display description.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Overwrite the mutable fields, keeping the id.
    pub fn overwrite(&mut self, fields: PointOfInterestFields) {
        let PointOfInterestFields { name, description } = fields;
        self.name = name;
        self.description = description;
    }

    /// Working copy of the mutable fields, used as a patch target.
    pub fn to_draft(&self) -> PointOfInterestDraft {
        PointOfInterestDraft::new(self.name.clone(), self.description.clone())
    }
}

/// Unvalidated name and description supplied by a client or produced by a
/// patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointOfInterestDraft {
    /// Candidate name.
    pub name: String,
    /// Candidate description.
    pub description: String,
}

impl PointOfInterestDraft {
    /// Build a draft from raw strings.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Check schema constraints and the name/description rule.
    ///
    /// All failures are collected, so a single response can report every
    /// offending field.
    ///
    /// # Examples
    /// ```
    /// use city_info::domain::PointOfInterestDraft;
    ///
    /// let err = PointOfInterestDraft::new("Atomium", "Atomium")
    ///     .validate()
    ///     .expect_err("name equals description");
    /// assert!(err.messages("description").is_some());
    /// ```
    pub fn validate(self) -> Result<PointOfInterestFields, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.name.trim().is_empty() {
            errors.add("name", "The name field is required.");
        } else if self.name.chars().count() > NAME_MAX {
            errors.add(
                "name",
                format!("The name field must be at most {NAME_MAX} characters long."),
            );
        }

        if self.description.chars().count() > DESCRIPTION_MAX {
            errors.add(
                "description",
                format!("The description field must be at most {DESCRIPTION_MAX} characters long."),
            );
        }

        if self.name == self.description {
            errors.add("description", DESCRIPTION_EQUALS_NAME);
        }

        errors.into_result(PointOfInterestFields {
            name: self.name,
            description: self.description,
        })
    }
}

/// Name and description that passed [`PointOfInterestDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointOfInterestFields {
    name: String,
    description: String,
}

impl PointOfInterestFields {
    /// Bypass validation for trusted input such as seed data.
    pub(crate) fn new_unchecked(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Validated name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Validated description.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
}
