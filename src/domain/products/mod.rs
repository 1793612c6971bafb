//! Products — public catalogue plus the seller's own product management.

pub mod client;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalogue listing entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: u32,
    pub category: Option<String>,
    pub origin: Option<String>,
    pub sales: u64,
    pub published_at: Option<DateTime<Utc>>,
}

/// Full product detail, including the owning shop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: u32,
    pub category: Option<String>,
    pub origin: Option<String>,
    pub sales: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub shop_id: i64,
    pub shop_name: String,
}

/// Body for creating a product in the seller's shop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

/// Update body; same shape as creation.
pub type UpdateProductRequest = CreateProductRequest;

/// Filter/sort query for the public catalogue listing.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Vec<String>,
    pub category: Option<String>,
    pub origin: Option<String>,
    pub price_min: Option<Decimal>,
    pub price_max: Option<Decimal>,
    pub shop_id: Option<i64>,
    pub keyword: Option<String>,
    pub include_inactive_shop: Option<bool>,
}

impl ProductQuery {
    pub(crate) fn to_params(&self) -> Vec<String> {
        let mut params = Vec::new();
        if let Some(p) = self.page {
            params.push(format!("page={}", p));
        }
        if let Some(s) = self.size {
            params.push(format!("size={}", s));
        }
        for sort in &self.sort {
            params.push(format!("sort={}", urlencoding::encode(sort)));
        }
        if let Some(c) = &self.category {
            params.push(format!("category={}", urlencoding::encode(c)));
        }
        if let Some(o) = &self.origin {
            params.push(format!("origin={}", urlencoding::encode(o)));
        }
        if let Some(min) = self.price_min {
            params.push(format!("price_min={}", min));
        }
        if let Some(max) = self.price_max {
            params.push(format!("price_max={}", max));
        }
        if let Some(id) = self.shop_id {
            params.push(format!("shop_id={}", id));
        }
        if let Some(k) = &self.keyword {
            params.push(format!("keyword={}", urlencoding::encode(k)));
        }
        if let Some(i) = self.include_inactive_shop {
            params.push(format!("include_inactive_shop={}", i));
        }
        params
    }
}

/// Full-text search query; `q` is mandatory, the rest mirrors [`ProductQuery`].
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub q: String,
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Vec<String>,
    pub category: Option<String>,
    pub origin: Option<String>,
    pub price_min: Option<Decimal>,
    pub price_max: Option<Decimal>,
    pub shop_id: Option<i64>,
}

impl SearchQuery {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            page: None,
            size: None,
            sort: Vec::new(),
            category: None,
            origin: None,
            price_min: None,
            price_max: None,
            shop_id: None,
        }
    }

    pub(crate) fn to_params(&self) -> Vec<String> {
        let mut params = vec![format!("q={}", urlencoding::encode(&self.q))];
        let rest = ProductQuery {
            page: self.page,
            size: self.size,
            sort: self.sort.clone(),
            category: self.category.clone(),
            origin: self.origin.clone(),
            price_min: self.price_min,
            price_max: self.price_max,
            shop_id: self.shop_id,
            keyword: None,
            include_inactive_shop: None,
        };
        params.extend(rest.to_params());
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_query_encodes_values() {
        let query = ProductQuery {
            page: Some(1),
            size: Some(20),
            category: Some("水果 蔬菜".to_string()),
            ..Default::default()
        };
        let params = query.to_params();
        assert_eq!(params[0], "page=1");
        assert_eq!(params[1], "size=20");
        assert_eq!(params[2], "category=%E6%B0%B4%E6%9E%9C%20%E8%94%AC%E8%8F%9C");
    }

    #[test]
    fn search_query_puts_q_first() {
        let query = SearchQuery::new("red apple");
        assert_eq!(query.to_params(), vec!["q=red%20apple".to_string()]);
    }
}
