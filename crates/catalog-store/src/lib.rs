pub mod error;
pub mod memory;
pub mod seed;
pub mod traits;

pub use error::{EntityKind, StoreError};
pub use memory::MemoryCatalog;
pub use traits::{
    AccountRepository, ContentRepository, EpisodePointer, NewProfile, NotificationPatch,
    PlaybackPatch, ProfilePatch, UserRepository,
};

/// Hard cap on profiles per account
pub const MAX_PROFILES: usize = 5;
