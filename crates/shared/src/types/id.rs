//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing an `EntryId` where a `UserId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(UserId, "Unique identifier for an acting user.");
typed_id!(EntryId, "Unique identifier for a fund history entry.");

impl UserId {
    /// Placeholder actor stamped on records the system creates on its own,
    /// such as the lazily bootstrapped fund record.
    #[must_use]
    pub const fn system() -> Self {
        Self(Uuid::nil())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(EntryId::new(), EntryId::new());
    }

    #[test]
    fn test_display_and_parse_round_trip() {
        let id = UserId::new();
        let parsed = UserId::from_str(&id.to_string()).expect("parse own display output");

        assert_eq!(id, parsed);
    }

    #[test]
    fn test_system_actor_is_nil_uuid() {
        assert_eq!(UserId::system().into_inner(), Uuid::nil());
        assert_eq!(UserId::system(), UserId::system());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = EntryId::from_uuid(Uuid::nil());
        let json = serde_json::to_string(&id).expect("serialize id");

        assert_eq!(json, "\"00000000-0000-0000-0000-000000000000\"");
    }
}
