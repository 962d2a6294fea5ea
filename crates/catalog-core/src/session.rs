use serde::{Deserialize, Serialize};

/// Explicit viewing context threaded through every profile-scoped query.
/// Replaces the hidden "current profile" global the mock backend grew up with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub profile_id: String,
}

impl Session {
    pub fn new(profile_id: impl Into<String>) -> Self {
        Self {
            profile_id: profile_id.into(),
        }
    }
}
