//! Partial updates for points of interest.
//!
//! A patch document is an ordered list of operations in the JSON Patch shape
//! (`{"op": "replace", "path": "/name", "value": "..."}`), restricted to the
//! two writable fields. Operations are applied to a working copy; the store
//! is only touched once the patched copy validates.

use serde::{Deserialize, Serialize};

use crate::domain::{PointOfInterestDraft, ValidationErrors};

/// Writable fields a patch may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchField {
    /// `/name`
    Name,
    /// `/description`
    Description,
}

impl PatchField {
    fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
        }
    }

    fn slot(self, draft: &mut PointOfInterestDraft) -> &mut String {
        match self {
            Self::Name => &mut draft.name,
            Self::Description => &mut draft.description,
        }
    }
}

/// One operation of a patch document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    /// Set the field to `value`.
    Add {
        /// JSON Pointer to the target field.
        path: String,
        /// New value.
        value: String,
    },
    /// Set the field to `value`.
    Replace {
        /// JSON Pointer to the target field.
        path: String,
        /// New value.
        value: String,
    },
    /// Reset the field to the empty string.
    Remove {
        /// JSON Pointer to the target field.
        path: String,
    },
    /// Fail unless the field currently equals `value`.
    Test {
        /// JSON Pointer to the target field.
        path: String,
        /// Expected current value.
        value: String,
    },
}

impl PatchOperation {
    fn path(&self) -> &str {
        match self {
            Self::Add { path, .. }
            | Self::Replace { path, .. }
            | Self::Remove { path }
            | Self::Test { path, .. } => path.as_str(),
        }
    }
}

fn resolve(path: &str) -> Result<PatchField, (String, String)> {
    let key = path.strip_prefix('/').unwrap_or(path);
    match key.to_ascii_lowercase().as_str() {
        "name" => Ok(PatchField::Name),
        "description" => Ok(PatchField::Description),
        "id" => Err(("id".to_owned(), "The id field cannot be patched.".to_owned())),
        _ => Err((
            key.to_owned(),
            format!("The target location '{path}' does not exist."),
        )),
    }
}

/// Ordered list of patch operations.
///
/// # Examples
/// ```
/// use city_info::domain::{PatchDocument, PointOfInterestDraft};
///
/// let document: PatchDocument = serde_json::from_str(
///     r#"[{"op": "replace", "path": "/name", "value": "Grote Markt"}]"#,
/// )
/// .expect("valid patch");
/// let mut draft = PointOfInterestDraft::new("Markt", "Main square.");
/// document.apply_to(&mut draft).expect("patch applies");
/// assert_eq!(draft.name, "Grote Markt");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatchDocument(Vec<PatchOperation>);

impl PatchDocument {
    /// Wrap a list of operations.
    pub fn new(operations: Vec<PatchOperation>) -> Self {
        Self(operations)
    }

    /// Apply every operation to `target` in order.
    ///
    /// Stops at the first structural failure: an unknown or read-only path,
    /// or a failed `test`. `target` may be partially modified on error, so
    /// callers must only ever pass a working copy.
    pub fn apply_to(&self, target: &mut PointOfInterestDraft) -> Result<(), ValidationErrors> {
        for operation in &self.0 {
            let field = match resolve(operation.path()) {
                Ok(field) => field,
                Err((key, message)) => {
                    let mut errors = ValidationErrors::default();
                    errors.add(key, message);
                    return Err(errors);
                }
            };
            let slot = field.slot(target);
            match operation {
                PatchOperation::Add { value, .. } | PatchOperation::Replace { value, .. } => {
                    value.clone_into(slot);
                }
                PatchOperation::Remove { .. } => slot.clear(),
                PatchOperation::Test { value, .. } => {
                    if slot.as_str() != value.as_str() {
                        let mut errors = ValidationErrors::default();
                        errors.add(
                            field.key(),
                            format!("The current value of '{}' does not match.", field.key()),
                        );
                        return Err(errors);
                    }
                }
            }
        }
        Ok(())
    }
}
