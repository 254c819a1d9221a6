//! Strongly-typed identifiers for stored records
//!
//! Product codes are business keys; these identifiers are the surrogate keys
//! a store assigns to the rows it holds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates a new time-ordered identifier (v7)
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }

            /// Returns the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid_str = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(Uuid::parse_str(uuid_str)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

define_id!(WarrantyId, "WAR");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warranty_id_display() {
        let id = WarrantyId::new_v7();
        assert!(id.to_string().starts_with("WAR-"));
    }

    #[test]
    fn test_id_parsing_with_and_without_prefix() {
        let original = WarrantyId::new();
        let parsed: WarrantyId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);

        let bare: WarrantyId = original.as_uuid().to_string().parse().unwrap();
        assert_eq!(original, bare);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(WarrantyId::prefix(), "WAR");
        assert_ne!(WarrantyId::new(), WarrantyId::new());
    }
}
