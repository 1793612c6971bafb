//! Shopping cart — per-shop sub-carts aggregated into one snapshot.
//!
//! Totals are server-authoritative: the client never computes them locally,
//! every mutating endpoint returns the full replacement snapshot.

pub mod client;
pub mod state;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line item inside a shop's sub-cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: i64,
    pub product_name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub subtotal: Decimal,
    pub stock: u32,
}

/// All line items of one shop, with the shop-level subtotal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShopCart {
    pub shop_id: i64,
    pub shop_name: String,
    pub items: Vec<CartItem>,
    pub subtotal: Decimal,
}

/// The full cart snapshot. `total_items` and `total_amount` are the
/// backend's own aggregates, not derivable sums.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartDetail {
    pub shops: Vec<ShopCart>,
    pub total_items: u32,
    pub total_amount: Decimal,
}

/// Body for adding a product to the cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub product_id: i64,
    pub quantity: u32,
}

/// Body for changing a line item's quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    pub quantity: u32,
}
