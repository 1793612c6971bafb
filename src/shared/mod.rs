//! Shared types used across all domain modules.
//!
//! These types are serialization-transparent: they match the raw JSON the
//! backend sends, so wire structs embed them without conversion.

use serde::{Deserialize, Serialize};

// ─── Role ────────────────────────────────────────────────────────────────────

/// A role claim attached to an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Seller,
    Admin,
    /// Roles the backend may add later; never grants access to gated routes.
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Seller => "SELLER",
            Role::Admin => "ADMIN",
            Role::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Pagination ──────────────────────────────────────────────────────────────

/// One page of a paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub page: u32,
    pub size: u32,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_wire_spelling_is_screaming_snake() {
        assert_eq!(serde_json::to_value(Role::Seller).unwrap(), json!("SELLER"));
        let parsed: Role = serde_json::from_value(json!("ADMIN")).unwrap();
        assert_eq!(parsed, Role::Admin);
    }

    #[test]
    fn unfamiliar_role_parses_as_unknown() {
        let parsed: Role = serde_json::from_value(json!("AUDITOR")).unwrap();
        assert_eq!(parsed, Role::Unknown);
    }

    #[test]
    fn page_uses_camel_case_keys() {
        let page: Page<i64> = serde_json::from_value(json!({
            "items": [1, 2],
            "totalElements": 2,
            "totalPages": 1,
            "page": 0,
            "size": 20
        }))
        .unwrap();
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.total_elements, 2);
        assert!(!page.is_empty());
    }
}
