//! Orders sub-client — buyer orders plus the seller's shop-order surface.

use crate::client::AgromartClient;
use crate::domain::orders::{
    CreateOrderRequest, OrderDetail, OrderSummary, PaginationQuery, ShipRequest, ShopOrderDetail,
    ShopOrderSummary,
};
use crate::error::SdkError;
use crate::shared::Page;

pub struct Orders<'a> {
    pub(crate) client: &'a AgromartClient,
}

impl<'a> Orders<'a> {
    pub async fn create(&self, payload: &CreateOrderRequest) -> Result<OrderDetail, SdkError> {
        let url = format!("{}/api/v1/orders", self.client.http.base_url());
        Ok(self.client.http.post(&url, Some(payload)).await?)
    }

    pub async fn list_mine(
        &self,
        query: Option<PaginationQuery>,
    ) -> Result<Page<OrderSummary>, SdkError> {
        let mut url = format!("{}/api/v1/my-orders", self.client.http.base_url());
        if let Some(q) = query {
            let params = q.to_params();
            if !params.is_empty() {
                url = format!("{}?{}", url, params.join("&"));
            }
        }
        Ok(self.client.http.get(&url).await?)
    }

    pub async fn get(&self, order_id: i64) -> Result<OrderDetail, SdkError> {
        let url = format!("{}/api/v1/my-orders/{}", self.client.http.base_url(), order_id);
        Ok(self.client.http.get(&url).await?)
    }

    pub async fn cancel(&self, order_id: i64) -> Result<OrderDetail, SdkError> {
        let url = format!(
            "{}/api/v1/my-orders/{}/cancel",
            self.client.http.base_url(),
            order_id
        );
        Ok(self.client.http.put(&url, None::<&()>).await?)
    }

    pub async fn list_shop_orders(
        &self,
        query: Option<PaginationQuery>,
    ) -> Result<Page<ShopOrderSummary>, SdkError> {
        let mut url = format!("{}/api/v1/my-shop/orders", self.client.http.base_url());
        if let Some(q) = query {
            let params = q.to_params();
            if !params.is_empty() {
                url = format!("{}?{}", url, params.join("&"));
            }
        }
        Ok(self.client.http.get(&url).await?)
    }

    pub async fn get_shop_order(&self, order_id: i64) -> Result<ShopOrderDetail, SdkError> {
        let url = format!(
            "{}/api/v1/my-shop/orders/{}",
            self.client.http.base_url(),
            order_id
        );
        Ok(self.client.http.get(&url).await?)
    }

    pub async fn ship(&self, order_id: i64, payload: &ShipRequest) -> Result<ShopOrderDetail, SdkError> {
        let url = format!(
            "{}/api/v1/my-shop/orders/{}/ship",
            self.client.http.base_url(),
            order_id
        );
        Ok(self.client.http.put(&url, Some(payload)).await?)
    }
}
