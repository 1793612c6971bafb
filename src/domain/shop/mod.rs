//! Shops — public shop browsing and the seller's own shop.

pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::products::ProductSummary;

/// Shop review lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShopStatus {
    PendingReview,
    Active,
    Suspended,
    Rejected,
}

impl ShopStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShopStatus::PendingReview => "PENDING_REVIEW",
            ShopStatus::Active => "ACTIVE",
            ShopStatus::Suspended => "SUSPENDED",
            ShopStatus::Rejected => "REJECTED",
        }
    }
}

impl std::fmt::Display for ShopStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Owner/admin view of a shop, with workload counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShopDetail {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub status: ShopStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub product_count: u32,
    pub pending_order_count: u32,
    pub completed_order_count: u32,
}

/// Public listing entry for an active shop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublicShopSummary {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub product_count: u32,
}

/// Public shop page: the shop plus its published products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublicShopDetail {
    pub shop: PublicShopSummary,
    pub products: Vec<ProductSummary>,
}

/// Body for applying for a shop or updating one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShopRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

pub type UpdateShopRequest = CreateShopRequest;

/// Query for the public shop listing.
#[derive(Debug, Clone, Default)]
pub struct ShopListQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub keyword: Option<String>,
}

impl ShopListQuery {
    pub(crate) fn to_params(&self) -> Vec<String> {
        let mut params = Vec::new();
        if let Some(p) = self.page {
            params.push(format!("page={}", p));
        }
        if let Some(s) = self.size {
            params.push(format!("size={}", s));
        }
        if let Some(k) = &self.keyword {
            params.push(format!("keyword={}", urlencoding::encode(k)));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shop_status_wire_spelling() {
        assert_eq!(
            serde_json::to_value(ShopStatus::PendingReview).unwrap(),
            json!("PENDING_REVIEW")
        );
        let parsed: ShopStatus = serde_json::from_value(json!("SUSPENDED")).unwrap();
        assert_eq!(parsed, ShopStatus::Suspended);
        assert_eq!(parsed.as_str(), "SUSPENDED");
    }
}
