//! Session state container — the authenticated identity and profile.
//!
//! `SessionStore` is an explicit context object: construct one per
//! application session and hand clones to whatever needs it. All clones
//! share the same snapshot. Operations mirror the backend exactly; the
//! snapshot is only ever written from server responses.
//!
//! Two coordination mechanisms close gaps the UI cannot be trusted with:
//!
//! - every operation carries a sequence stamp, and a response is dropped if a
//!   newer operation already applied, so rapid repeated triggers cannot
//!   resurrect stale state;
//! - resets bump a shared [`SessionEpoch`] that the cart store watches, so
//!   cart contents from a previous identity never survive a logout.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_lock::RwLock;

use crate::client::AgromartClient;
use crate::domain::auth::{LoginRequest, RegisterRequest, UserInfo};
use crate::domain::user::Profile;
use crate::error::SdkError;

/// Monotone counter bumped on every session reset.
///
/// Consumers holding a clone compare [`SessionEpoch::current`] against the
/// last value they acted on to learn that the identity changed.
#[derive(Debug, Clone, Default)]
pub struct SessionEpoch(Arc<AtomicU64>);

impl SessionEpoch {
    pub fn current(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Default)]
struct SessionState {
    auth_user: Option<UserInfo>,
    profile: Option<Profile>,
    inflight: u32,
    applied_seq: u64,
    error: Option<String>,
}

/// Holds the authenticated user and profile; serializes auth operations.
#[derive(Clone)]
pub struct SessionStore {
    client: AgromartClient,
    state: Arc<RwLock<SessionState>>,
    op_seq: Arc<AtomicU64>,
    epoch: SessionEpoch,
}

impl SessionStore {
    pub fn new(client: AgromartClient) -> Self {
        Self {
            client,
            state: Arc::new(RwLock::new(SessionState::default())),
            op_seq: Arc::new(AtomicU64::new(0)),
            epoch: SessionEpoch::default(),
        }
    }

    /// The epoch handle to wire into a [`crate::domain::cart::state::CartStore`].
    pub fn epoch(&self) -> SessionEpoch {
        self.epoch.clone()
    }

    // ── Snapshot views ───────────────────────────────────────────────────

    pub async fn auth_user(&self) -> Option<UserInfo> {
        self.state.read().await.auth_user.clone()
    }

    pub async fn profile(&self) -> Option<Profile> {
        self.state.read().await.profile.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.auth_user.is_some()
    }

    pub async fn loading(&self) -> bool {
        self.state.read().await.inflight > 0
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    pub async fn clear_error(&self) {
        self.state.write().await.error = None;
    }

    // ── Operations ───────────────────────────────────────────────────────

    /// Ask the backend who the session cookie belongs to.
    ///
    /// Any failure clears the identity and is absorbed: a missing session
    /// and a transport failure both leave the store logged out.
    pub async fn fetch_current_user(&self) {
        let seq = self.begin().await;
        let result = self.client.auth().me().await;

        let mut st = self.state.write().await;
        st.inflight -= 1;
        if seq <= st.applied_seq {
            return;
        }
        st.applied_seq = seq;
        match result {
            Ok(user) => st.auth_user = Some(user),
            Err(err) => {
                st.auth_user = None;
                st.error = Some(err.user_message());
            }
        }
    }

    /// Refresh the extended profile. Failure clears the profile only and is
    /// absorbed; the identity is untouched.
    pub async fn fetch_profile(&self) {
        let seq = self.begin().await;
        let result = self.client.users().profile().await;

        let mut st = self.state.write().await;
        st.inflight -= 1;
        if seq <= st.applied_seq {
            return;
        }
        st.applied_seq = seq;
        match result {
            Ok(profile) => st.profile = Some(profile),
            Err(err) => {
                st.profile = None;
                st.error = Some(err.user_message());
            }
        }
    }

    /// Authenticate, then chain a profile fetch.
    ///
    /// Failure clears the identity, records the error and re-raises it: the
    /// UI owns the reaction (message, staying on the form).
    pub async fn login(&self, payload: &LoginRequest) -> Result<(), SdkError> {
        let seq = self.begin().await;
        let result = self.client.auth().login(payload).await;
        self.finish_identity(seq, result).await
    }

    /// Same contract as [`SessionStore::login`], against the register endpoint.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<(), SdkError> {
        let seq = self.begin().await;
        let result = self.client.auth().register(payload).await;
        self.finish_identity(seq, result).await
    }

    /// End the session. The local teardown always runs, whether or not the
    /// endpoint call succeeded; a failure is recorded and re-raised after it.
    pub async fn logout(&self) -> Result<(), SdkError> {
        let seq = self.begin().await;
        let result = self.client.auth().logout().await;

        {
            let mut st = self.state.write().await;
            st.inflight -= 1;
            if seq > st.applied_seq {
                st.applied_seq = seq;
            }
            st.auth_user = None;
            st.profile = None;
            if let Err(err) = &result {
                st.error = Some(err.user_message());
            }
        }
        self.epoch.bump();

        result
    }

    /// Synchronous teardown of the local session state.
    pub async fn reset(&self) {
        {
            let mut st = self.state.write().await;
            st.auth_user = None;
            st.profile = None;
        }
        self.epoch.bump();
    }

    // ── Internals ────────────────────────────────────────────────────────

    async fn begin(&self) -> u64 {
        let seq = self.op_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let mut st = self.state.write().await;
        st.error = None;
        st.inflight += 1;
        seq
    }

    async fn finish_identity(
        &self,
        seq: u64,
        result: Result<UserInfo, SdkError>,
    ) -> Result<(), SdkError> {
        {
            let mut st = self.state.write().await;
            st.inflight -= 1;
            if seq > st.applied_seq {
                st.applied_seq = seq;
                match &result {
                    Ok(user) => st.auth_user = Some(user.clone()),
                    Err(err) => {
                        st.auth_user = None;
                        st.error = Some(err.user_message());
                    }
                }
            }
        }

        result?;
        self.fetch_profile().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_starts_at_zero_and_bumps() {
        let epoch = SessionEpoch::default();
        assert_eq!(epoch.current(), 0);
        epoch.bump();
        epoch.bump();
        assert_eq!(epoch.current(), 2);

        let shared = epoch.clone();
        shared.bump();
        assert_eq!(epoch.current(), 3);
    }
}
