//! Cart sub-client. Every endpoint returns the full replacement snapshot.

use crate::client::AgromartClient;
use crate::domain::cart::{AddItemRequest, CartDetail, UpdateItemRequest};
use crate::error::SdkError;

pub struct Cart<'a> {
    pub(crate) client: &'a AgromartClient,
}

impl<'a> Cart<'a> {
    pub async fn get(&self) -> Result<CartDetail, SdkError> {
        let url = format!("{}/api/v1/cart", self.client.http.base_url());
        Ok(self.client.http.get(&url).await?)
    }

    pub async fn add_item(&self, payload: &AddItemRequest) -> Result<CartDetail, SdkError> {
        let url = format!("{}/api/v1/cart/items", self.client.http.base_url());
        Ok(self.client.http.post(&url, Some(payload)).await?)
    }

    pub async fn update_item(
        &self,
        product_id: i64,
        payload: &UpdateItemRequest,
    ) -> Result<CartDetail, SdkError> {
        let url = format!("{}/api/v1/cart/items/{}", self.client.http.base_url(), product_id);
        Ok(self.client.http.put(&url, Some(payload)).await?)
    }

    pub async fn remove_item(&self, product_id: i64) -> Result<CartDetail, SdkError> {
        let url = format!("{}/api/v1/cart/items/{}", self.client.http.base_url(), product_id);
        Ok(self.client.http.delete(&url).await?)
    }

    pub async fn clear(&self) -> Result<CartDetail, SdkError> {
        let url = format!("{}/api/v1/cart/clear", self.client.http.base_url());
        Ok(self.client.http.post(&url, None::<&()>).await?)
    }
}
