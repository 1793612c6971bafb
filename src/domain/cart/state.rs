//! Cart state container — a server-authoritative snapshot with derived totals.
//!
//! Every mutation replaces the whole local snapshot with what the server
//! returned; nothing is merged or recomputed locally, so the displayed totals
//! cannot drift from edits made in other sessions.
//!
//! The store watches the [`SessionEpoch`] it was constructed with: any entry
//! point first reconciles against it and drops the snapshot if the session has
//! reset since, so a previous identity's cart is never observable.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_lock::RwLock;
use rust_decimal::Decimal;

use crate::client::AgromartClient;
use crate::domain::auth::state::SessionEpoch;
use crate::domain::cart::{AddItemRequest, CartDetail, UpdateItemRequest};
use crate::error::SdkError;

#[derive(Debug, Default)]
struct CartState {
    cart: Option<CartDetail>,
    inflight: u32,
    applied_seq: u64,
    error: Option<String>,
}

/// Holds the current cart snapshot; serializes cart mutations.
#[derive(Clone)]
pub struct CartStore {
    client: AgromartClient,
    state: Arc<RwLock<CartState>>,
    op_seq: Arc<AtomicU64>,
    session_epoch: SessionEpoch,
    seen_epoch: Arc<AtomicU64>,
}

impl CartStore {
    pub fn new(client: AgromartClient, session_epoch: SessionEpoch) -> Self {
        let seen = session_epoch.current();
        Self {
            client,
            state: Arc::new(RwLock::new(CartState::default())),
            op_seq: Arc::new(AtomicU64::new(0)),
            session_epoch,
            seen_epoch: Arc::new(AtomicU64::new(seen)),
        }
    }

    // ── Snapshot views ───────────────────────────────────────────────────

    pub async fn cart(&self) -> Option<CartDetail> {
        self.reconcile_session().await;
        self.state.read().await.cart.clone()
    }

    /// The snapshot's own item count; `0` with no cart loaded.
    pub async fn total_items(&self) -> u32 {
        self.reconcile_session().await;
        self.state
            .read()
            .await
            .cart
            .as_ref()
            .map(|c| c.total_items)
            .unwrap_or(0)
    }

    /// The snapshot's own total amount; zero with no cart loaded.
    pub async fn total_amount(&self) -> Decimal {
        self.reconcile_session().await;
        self.state
            .read()
            .await
            .cart
            .as_ref()
            .map(|c| c.total_amount)
            .unwrap_or(Decimal::ZERO)
    }

    pub async fn is_empty(&self) -> bool {
        self.total_items().await == 0
    }

    pub async fn loading(&self) -> bool {
        self.state.read().await.inflight > 0
    }

    pub async fn error(&self) -> Option<String> {
        self.reconcile_session().await;
        self.state.read().await.error.clone()
    }

    pub async fn clear_error(&self) {
        self.state.write().await.error = None;
    }

    // ── Operations ───────────────────────────────────────────────────────

    /// Load the current snapshot. All errors are absorbed into the error
    /// field; reads degrade to an empty cart plus a message.
    pub async fn fetch(&self) {
        self.reconcile_session().await;
        let seq = self.begin().await;
        let result = self.client.cart().get().await;
        let _ = self.finish(seq, result).await;
    }

    /// Add a product. Errors are recorded and re-raised so the caller can
    /// react (the same holds for all mutations below).
    pub async fn add_item(&self, payload: &AddItemRequest) -> Result<(), SdkError> {
        self.reconcile_session().await;
        let seq = self.begin().await;
        let result = self.client.cart().add_item(payload).await;
        self.finish(seq, result).await
    }

    pub async fn update_item(
        &self,
        product_id: i64,
        payload: &UpdateItemRequest,
    ) -> Result<(), SdkError> {
        self.reconcile_session().await;
        let seq = self.begin().await;
        let result = self.client.cart().update_item(product_id, payload).await;
        self.finish(seq, result).await
    }

    pub async fn remove_item(&self, product_id: i64) -> Result<(), SdkError> {
        self.reconcile_session().await;
        let seq = self.begin().await;
        let result = self.client.cart().remove_item(product_id).await;
        self.finish(seq, result).await
    }

    pub async fn clear(&self) -> Result<(), SdkError> {
        self.reconcile_session().await;
        let seq = self.begin().await;
        let result = self.client.cart().clear().await;
        self.finish(seq, result).await
    }

    /// Drop the local snapshot and error without touching the server.
    pub async fn reset(&self) {
        let mut st = self.state.write().await;
        st.cart = None;
        st.error = None;
    }

    // ── Internals ────────────────────────────────────────────────────────

    async fn reconcile_session(&self) {
        let epoch = self.session_epoch.current();
        if self.seen_epoch.swap(epoch, Ordering::SeqCst) != epoch {
            let mut st = self.state.write().await;
            st.cart = None;
            st.error = None;
        }
    }

    async fn begin(&self) -> u64 {
        let seq = self.op_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let mut st = self.state.write().await;
        st.error = None;
        st.inflight += 1;
        seq
    }

    /// Apply a server response unless a newer operation already did.
    async fn finish(&self, seq: u64, result: Result<CartDetail, SdkError>) -> Result<(), SdkError> {
        {
            let mut st = self.state.write().await;
            st.inflight -= 1;
            if seq > st.applied_seq {
                st.applied_seq = seq;
                match &result {
                    Ok(cart) => st.cart = Some(cart.clone()),
                    Err(err) => st.error = Some(err.user_message()),
                }
            }
        }
        result.map(|_| ())
    }
}
