//! Domain errors shared by every crate in the workspace.

use crate::types::RecordId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No record of kind `entity` has this id.
    #[error("{entity} '{id}' does not exist")]
    NotFound { entity: &'static str, id: RecordId },

    /// Input rejected before reaching storage or a collaborator.
    #[error("Invalid input: {0}")]
    Validation(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: impl Into<RecordId>) -> Self {
        CoreError::NotFound {
            entity,
            id: id.into(),
        }
    }
}
