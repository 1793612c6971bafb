//! Shop sub-client — the seller's own shop plus public browsing.

use crate::client::AgromartClient;
use crate::domain::shop::{
    CreateShopRequest, PublicShopDetail, PublicShopSummary, ShopDetail, ShopListQuery,
    UpdateShopRequest,
};
use crate::error::SdkError;
use crate::shared::Page;

pub struct Shops<'a> {
    pub(crate) client: &'a AgromartClient,
}

impl<'a> Shops<'a> {
    pub async fn my_shop(&self) -> Result<ShopDetail, SdkError> {
        let url = format!("{}/api/v1/my-shop", self.client.http.base_url());
        Ok(self.client.http.get(&url).await?)
    }

    pub async fn update_my_shop(&self, payload: &UpdateShopRequest) -> Result<ShopDetail, SdkError> {
        let url = format!("{}/api/v1/my-shop", self.client.http.base_url());
        Ok(self.client.http.put(&url, Some(payload)).await?)
    }

    /// Apply for a new shop; it starts in `PENDING_REVIEW`.
    pub async fn apply(&self, payload: &CreateShopRequest) -> Result<ShopDetail, SdkError> {
        let url = format!("{}/api/v1/shops", self.client.http.base_url());
        Ok(self.client.http.post(&url, Some(payload)).await?)
    }

    pub async fn list(&self, query: Option<&ShopListQuery>) -> Result<Page<PublicShopSummary>, SdkError> {
        let mut url = format!("{}/api/v1/shops", self.client.http.base_url());
        if let Some(q) = query {
            let params = q.to_params();
            if !params.is_empty() {
                url = format!("{}?{}", url, params.join("&"));
            }
        }
        Ok(self.client.http.get(&url).await?)
    }

    pub async fn get(&self, shop_id: i64) -> Result<PublicShopDetail, SdkError> {
        let url = format!("{}/api/v1/shops/{}", self.client.http.base_url(), shop_id);
        Ok(self.client.http.get(&url).await?)
    }
}
