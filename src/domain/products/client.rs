//! Products sub-client — catalogue listing, search, seller management.

use crate::client::AgromartClient;
use crate::domain::products::{
    CreateProductRequest, ProductDetail, ProductQuery, ProductSummary, SearchQuery,
    UpdateProductRequest,
};
use crate::error::SdkError;
use crate::shared::Page;

pub struct Products<'a> {
    pub(crate) client: &'a AgromartClient,
}

impl<'a> Products<'a> {
    pub async fn list(&self, query: Option<&ProductQuery>) -> Result<Page<ProductSummary>, SdkError> {
        let mut url = format!("{}/api/v1/products", self.client.http.base_url());
        if let Some(q) = query {
            let params = q.to_params();
            if !params.is_empty() {
                url = format!("{}?{}", url, params.join("&"));
            }
        }
        Ok(self.client.http.get(&url).await?)
    }

    pub async fn get(&self, product_id: i64) -> Result<ProductDetail, SdkError> {
        let url = format!("{}/api/v1/products/{}", self.client.http.base_url(), product_id);
        Ok(self.client.http.get(&url).await?)
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<Page<ProductSummary>, SdkError> {
        let url = format!(
            "{}/api/v1/products/search?{}",
            self.client.http.base_url(),
            query.to_params().join("&")
        );
        Ok(self.client.http.get(&url).await?)
    }

    /// All products of the caller's shop, published or not. Not paginated.
    pub async fn list_mine(&self) -> Result<Vec<ProductDetail>, SdkError> {
        let url = format!("{}/api/v1/my-shop/products", self.client.http.base_url());
        Ok(self.client.http.get(&url).await?)
    }

    pub async fn create(&self, payload: &CreateProductRequest) -> Result<ProductDetail, SdkError> {
        let url = format!("{}/api/v1/my-shop/products", self.client.http.base_url());
        Ok(self.client.http.post(&url, Some(payload)).await?)
    }

    pub async fn update(
        &self,
        product_id: i64,
        payload: &UpdateProductRequest,
    ) -> Result<ProductDetail, SdkError> {
        let url = format!(
            "{}/api/v1/my-shop/products/{}",
            self.client.http.base_url(),
            product_id
        );
        Ok(self.client.http.put(&url, Some(payload)).await?)
    }

    pub async fn delete(&self, product_id: i64) -> Result<(), SdkError> {
        let url = format!(
            "{}/api/v1/my-shop/products/{}",
            self.client.http.base_url(),
            product_id
        );
        Ok(self.client.http.delete(&url).await?)
    }

    pub async fn publish(&self, product_id: i64) -> Result<ProductDetail, SdkError> {
        let url = format!(
            "{}/api/v1/my-shop/products/{}/publish",
            self.client.http.base_url(),
            product_id
        );
        Ok(self.client.http.put(&url, None::<&()>).await?)
    }

    pub async fn unpublish(&self, product_id: i64) -> Result<ProductDetail, SdkError> {
        let url = format!(
            "{}/api/v1/my-shop/products/{}/unpublish",
            self.client.http.base_url(),
            product_id
        );
        Ok(self.client.http.put(&url, None::<&()>).await?)
    }
}
