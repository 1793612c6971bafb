//! Auth sub-client — login, register, current identity, logout.

use crate::client::AgromartClient;
use crate::domain::auth::{LoginRequest, RegisterRequest, UserInfo};
use crate::error::SdkError;

pub struct Auth<'a> {
    pub(crate) client: &'a AgromartClient,
}

impl<'a> Auth<'a> {
    pub async fn login(&self, payload: &LoginRequest) -> Result<UserInfo, SdkError> {
        let url = format!("{}/api/v1/auth/login", self.client.http.base_url());
        Ok(self.client.http.post(&url, Some(payload)).await?)
    }

    pub async fn register(&self, payload: &RegisterRequest) -> Result<UserInfo, SdkError> {
        let url = format!("{}/api/v1/auth/register", self.client.http.base_url());
        Ok(self.client.http.post(&url, Some(payload)).await?)
    }

    /// Current identity, as the backend sees the session cookie.
    pub async fn me(&self) -> Result<UserInfo, SdkError> {
        let url = format!("{}/api/v1/auth/me", self.client.http.base_url());
        Ok(self.client.http.get(&url).await?)
    }

    /// Invalidate the server-side session. No body either way.
    pub async fn logout(&self) -> Result<(), SdkError> {
        let url = format!("{}/api/v1/auth/logout", self.client.http.base_url());
        Ok(self.client.http.post(&url, None::<&()>).await?)
    }
}
