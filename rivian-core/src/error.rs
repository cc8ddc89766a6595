//! Error types for registry construction and state resolution

use crate::model::Trim;
use thiserror::Error;

/// Load-time failures while assembling the descriptor registry
///
/// Any of these means the static tables are inconsistent; the registry
/// refuses to build instead of surfacing the problem during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("duplicate {platform} key `{key}` for trim {trim}")]
    DuplicateKey {
        trim: Trim,
        platform: &'static str,
        key: &'static str,
    },

    #[error("deprecated key `{alias}` of `{key}` collides with a live key for trim {trim}")]
    AliasCollision {
        trim: Trim,
        key: &'static str,
        alias: &'static str,
    },

    #[error("`{key}` for trim {trim} reads unknown field `{field}`")]
    UnknownField {
        trim: Trim,
        key: &'static str,
        field: &'static str,
    },

    #[error("auxiliary field `{0}` is not in the field registry")]
    UnknownAuxiliaryField(&'static str),

    #[error("`{key}` for trim {trim} aggregates an empty field set")]
    EmptyFieldSet { trim: Trim, key: &'static str },

    #[error("`{key}` for trim {trim} maps to `{label}` which is not one of its options")]
    OptionMismatch {
        trim: Trim,
        key: &'static str,
        label: &'static str,
    },

    #[error("tire pressure field `{0}` is not part of the full field set")]
    TirePressureFieldMissing(&'static str),
}

/// Caller errors while resolving a single entity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no {platform} `{key}` for trim {trim}")]
    UnknownKey {
        trim: Trim,
        platform: &'static str,
        key: String,
    },
}

/// Unrecognized trim tag
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown trim `{0}`, expected one of R1, R1S, R1T")]
pub struct ParseTrimError(pub String);
