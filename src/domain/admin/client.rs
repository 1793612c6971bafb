//! Admin sub-client — shop review actions. Requires the ADMIN role.

use crate::client::AgromartClient;
use crate::domain::shop::{ShopDetail, ShopStatus};
use crate::error::SdkError;

pub struct Admin<'a> {
    pub(crate) client: &'a AgromartClient,
}

impl<'a> Admin<'a> {
    pub async fn list_shops(&self, status: Option<ShopStatus>) -> Result<Vec<ShopDetail>, SdkError> {
        let mut url = format!("{}/api/v1/admin/shops", self.client.http.base_url());
        if let Some(s) = status {
            url = format!("{}?status={}", url, s.as_str());
        }
        Ok(self.client.http.get(&url).await?)
    }

    pub async fn approve(&self, shop_id: i64) -> Result<ShopDetail, SdkError> {
        self.review(shop_id, "approve").await
    }

    pub async fn reject(&self, shop_id: i64) -> Result<ShopDetail, SdkError> {
        self.review(shop_id, "reject").await
    }

    pub async fn suspend(&self, shop_id: i64) -> Result<ShopDetail, SdkError> {
        self.review(shop_id, "suspend").await
    }

    async fn review(&self, shop_id: i64, action: &str) -> Result<ShopDetail, SdkError> {
        let url = format!(
            "{}/api/v1/admin/shops/{}/{}",
            self.client.http.base_url(),
            shop_id,
            action
        );
        Ok(self.client.http.put(&url, None::<&()>).await?)
    }
}
