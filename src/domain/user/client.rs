//! User sub-client — profile and address book.

use crate::client::AgromartClient;
use crate::domain::user::{Address, CreateAddressRequest, Profile, UpdateProfileRequest};
use crate::error::SdkError;

pub struct Users<'a> {
    pub(crate) client: &'a AgromartClient,
}

impl<'a> Users<'a> {
    pub async fn profile(&self) -> Result<Profile, SdkError> {
        let url = format!("{}/api/v1/me/profile", self.client.http.base_url());
        Ok(self.client.http.get(&url).await?)
    }

    pub async fn update_profile(&self, payload: &UpdateProfileRequest) -> Result<Profile, SdkError> {
        let url = format!("{}/api/v1/me/profile", self.client.http.base_url());
        Ok(self.client.http.put(&url, Some(payload)).await?)
    }

    pub async fn list_addresses(&self) -> Result<Vec<Address>, SdkError> {
        let url = format!("{}/api/v1/me/addresses", self.client.http.base_url());
        Ok(self.client.http.get(&url).await?)
    }

    pub async fn create_address(&self, payload: &CreateAddressRequest) -> Result<Address, SdkError> {
        let url = format!("{}/api/v1/me/addresses", self.client.http.base_url());
        Ok(self.client.http.post(&url, Some(payload)).await?)
    }

    pub async fn update_address(
        &self,
        address_id: i64,
        payload: &CreateAddressRequest,
    ) -> Result<Address, SdkError> {
        let url = format!("{}/api/v1/me/addresses/{}", self.client.http.base_url(), address_id);
        Ok(self.client.http.put(&url, Some(payload)).await?)
    }

    pub async fn delete_address(&self, address_id: i64) -> Result<(), SdkError> {
        let url = format!("{}/api/v1/me/addresses/{}", self.client.http.base_url(), address_id);
        Ok(self.client.http.delete(&url).await?)
    }

    pub async fn set_default_address(&self, address_id: i64) -> Result<Address, SdkError> {
        let url = format!(
            "{}/api/v1/me/addresses/{}/default",
            self.client.http.base_url(),
            address_id
        );
        Ok(self.client.http.put(&url, None::<&()>).await?)
    }
}
