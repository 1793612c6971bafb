//! Orders — buyer orders and the seller-side shop-order views.

pub mod client;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::cart::CartItem;

/// Page/size query for the order listings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PaginationQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl PaginationQuery {
    pub(crate) fn to_params(self) -> Vec<String> {
        let mut params = Vec::new();
        if let Some(p) = self.page {
            params.push(format!("page={}", p));
        }
        if let Some(s) = self.size {
            params.push(format!("size={}", s));
        }
        params
    }
}

/// One line item of a shop order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub subtotal: Decimal,
}

/// Summary of one shop's slice of a buyer order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShopOrderSummary {
    pub id: i64,
    pub shop_id: i64,
    pub shop_name: String,
    pub status: String,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub shipping_address: String,
}

/// Full seller-side view of one shop order, including shipping data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShopOrderDetail {
    pub id: i64,
    pub shop_id: i64,
    pub shop_name: String,
    pub status: String,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub shipping_address: String,
    pub updated_at: DateTime<Utc>,
    pub logistics_provider: Option<String>,
    pub tracking_number: Option<String>,
    pub shipped_at: Option<DateTime<Utc>>,
    pub items: Vec<OrderItem>,
}

/// Buyer-side order summary for the paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: i64,
    pub status: String,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub shipping_address: String,
    pub shop_orders: Vec<ShopOrderSummary>,
}

/// Full buyer-side order detail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    pub id: i64,
    pub status: String,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub shipping_address: String,
    pub shop_orders: Vec<ShopOrderSummary>,
    pub buyer_id: i64,
    pub buyer_username: String,
}

/// Body for placing an order from cart line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub items: Vec<CartItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
}

/// Body for marking a shop order shipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logistics_provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
}
