use thiserror::Error;

/// Structural mismatch between an untyped value and the entity it is mapped onto.
///
/// Paths are rooted at `$`, e.g. `$.properties.extensions[1]`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContractError {
    #[error("expected a mapping at {path}, found {found}")]
    NotAMapping { path: String, found: &'static str },
    #[error("{entity} field {path} is declared as {declared}, but the mapping supplies {found}")]
    ShapeMismatch {
        path: String,
        entity: &'static str,
        declared: &'static str,
        found: &'static str,
    },
    #[error("{entity} has no field matching {path}")]
    UnknownField { path: String, entity: &'static str },
}

impl ContractError {
    /// Location of the offending value.
    pub fn path(&self) -> &str {
        match self {
            ContractError::NotAMapping { path, .. }
            | ContractError::ShapeMismatch { path, .. }
            | ContractError::UnknownField { path, .. } => path,
        }
    }
}
