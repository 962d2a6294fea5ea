use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// Deleting the last remaining profile would leave the account unusable
    #[error("cannot delete the last remaining profile")]
    LastProfile,

    #[error("account already has the maximum number of profiles")]
    ProfileLimit,

    #[error("invalid profile name: {0}")]
    InvalidProfileName(String),
}

impl StoreError {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Content,
    Profile,
    User,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Content => write!(f, "content"),
            EntityKind::Profile => write!(f, "profile"),
            EntityKind::User => write!(f, "user"),
        }
    }
}
