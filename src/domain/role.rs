//! Role domain entity.

use serde::{Deserialize, Serialize};

use crate::domain::id::{IdProvider, UuidProvider};

/// Role domain entity: an identity plus a unique name.
///
/// The id is assigned at construction time and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
}

impl Role {
    /// Create a new role with a generated random id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_provider(&UuidProvider, name)
    }

    /// Create a new role drawing its id from the given provider.
    pub fn with_provider(ids: &dyn IdProvider, name: impl Into<String>) -> Self {
        Self {
            id: ids.generate(),
            name: name.into(),
        }
    }

    /// Create a role with an explicit id, e.g. one loaded from storage.
    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedIds;

    impl IdProvider for FixedIds {
        fn generate(&self) -> String {
            "role-1".to_string()
        }
    }

    #[test]
    fn new_assigns_a_generated_id() {
        let role = Role::new("Admin");
        assert!(!role.id.is_empty());
        assert_eq!(role.name, "Admin");
    }

    #[test]
    fn provider_substitution_is_deterministic() {
        let role = Role::with_provider(&FixedIds, "Admin");
        assert_eq!(role.id, "role-1");
    }
}
