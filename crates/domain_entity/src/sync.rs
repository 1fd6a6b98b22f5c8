//! Remote sync operations
//!
//! Fetch-by-id and save. Both go through the request executor held by a
//! [`SyncContext`], check the response envelope, and fail with an
//! [`EntityError`] when the server answers with nothing.
//!
//! Saving never writes the server-assigned id back onto the record. Callers
//! that keep using the record after a create must take the returned id (or
//! re-fetch).

use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use core_kernel::{Clock, EntityId, SystemClock};

use crate::error::EntityError;
use crate::hydrate::as_int;
use crate::kind::EntityKind;
use crate::ports::{is_empty_response, RequestExecutor, RequestMethod};
use crate::record::EntityRecord;

/// Pointer to the items collection inside a response envelope
const ITEMS_POINTER: &str = "/_embedded/items";

/// What sync operations need from their surroundings
#[derive(Clone)]
pub struct SyncContext {
    executor: Arc<dyn RequestExecutor>,
    clock: Arc<dyn Clock>,
}

impl SyncContext {
    /// Uses `executor` and the system clock
    pub fn new(executor: Arc<dyn RequestExecutor>) -> Self {
        Self {
            executor,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the clock used to stamp `updated_at`
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn executor(&self) -> &dyn RequestExecutor {
        self.executor.as_ref()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}

/// The first item of a response envelope
///
/// `Ok(None)` means the envelope is well formed but holds no items.
fn first_item(kind: EntityKind, response: &Value) -> Result<Option<&Map<String, Value>>, EntityError> {
    let items = response
        .pointer(ITEMS_POINTER)
        .and_then(Value::as_array)
        .ok_or_else(|| EntityError::malformed(kind, "missing _embedded.items"))?;

    match items.first() {
        None => Ok(None),
        Some(Value::Object(item)) => Ok(Some(item)),
        Some(other) => Err(EntityError::malformed(
            kind,
            format!("first item is not an object: {}", other),
        )),
    }
}

impl EntityRecord {
    /// Replaces this record's fields with the server's copy of record `id`
    pub async fn fill_by_id(
        &mut self,
        ctx: &SyncContext,
        id: EntityId,
    ) -> Result<&mut Self, EntityError> {
        self.fill_by_id_with(ctx, id, Map::new()).await
    }

    /// Like [`fill_by_id`](Self::fill_by_id), sending `extra` query
    /// parameters along. The `id` parameter always carries `id`.
    #[instrument(skip(self, ctx, extra), fields(kind = %self.kind(), id = %id, subdomain = ?self.subdomain))]
    pub async fn fill_by_id_with(
        &mut self,
        ctx: &SyncContext,
        id: EntityId,
        extra: Map<String, Value>,
    ) -> Result<&mut Self, EntityError> {
        let kind = self.kind();
        let mut params = extra;
        params.insert("id".to_string(), Value::from(id.get()));

        debug!("Fetching entity by ID");
        let response = ctx
            .executor()
            .request(
                kind.endpoint(),
                RequestMethod::Get,
                Value::Object(params),
                self.subdomain.as_deref(),
            )
            .await?;

        if is_empty_response(&response) {
            warn!("Empty response for entity fetch");
            return Err(EntityError::not_found(kind, id));
        }

        let item = first_item(kind, &response)?.ok_or_else(|| {
            warn!("No items in entity fetch response");
            EntityError::not_found(kind, id)
        })?;

        self.hydrate(item);
        debug!("Entity hydrated from response");
        Ok(self)
    }

    /// Creates or updates the record remotely and returns its id
    ///
    /// The id comes from the first item of the response; the record itself
    /// is left untouched.
    pub async fn save(&self, ctx: &SyncContext) -> Result<EntityId, EntityError> {
        let (payload, response) = self.submit(ctx).await?;

        let item = first_item(self.kind(), &response)?.ok_or_else(|| {
            EntityError::write_failed(self.write_action(), self.kind(), &payload)
        })?;

        item.get("id")
            .and_then(as_int)
            .map(EntityId::new)
            .ok_or_else(|| EntityError::malformed(self.kind(), "first item has no id"))
    }

    /// Creates or updates the record remotely and returns the raw response
    pub async fn save_returning_response(&self, ctx: &SyncContext) -> Result<Value, EntityError> {
        let (_, response) = self.submit(ctx).await?;
        Ok(response)
    }

    #[instrument(skip(self, ctx), fields(kind = %self.kind(), id = ?self.id, subdomain = ?self.subdomain))]
    async fn submit(&self, ctx: &SyncContext) -> Result<(Value, Value), EntityError> {
        let kind = self.kind();
        let action = self.write_action();
        let payload = serde_json::to_value(self.write_request(ctx.clock()))?;

        debug!(%action, "Submitting entity write");
        let response = ctx
            .executor()
            .request(
                kind.endpoint(),
                RequestMethod::Post,
                payload.clone(),
                self.subdomain.as_deref(),
            )
            .await?;

        if is_empty_response(&response) {
            warn!(%action, "Empty response for entity write");
            return Err(EntityError::write_failed(action, kind, &payload));
        }

        Ok((payload, response))
    }
}
