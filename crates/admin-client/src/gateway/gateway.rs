use crate::{Client, ClientError, ClientResult, Resource, normalize_key};

use admin_core::{Course, Draft, Professor, RecordId, Student};

use std::marker::PhantomData;

use log::{debug, info};
use serde_json::Value;

pub type StudentGateway = Gateway<Student>;
pub type ProfessorGateway = Gateway<Professor>;
pub type CourseGateway = Gateway<Course>;

/// Stateless request/response mapper for one record collection.
///
/// Everything returned from a gateway is keyed by `id`; the backend's own key
/// name stays inside this type.
pub struct Gateway<R: Resource> {
    client: Client,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for Gateway<R> {
    fn clone(&self) -> Self {
        Self::new(self.client.clone())
    }
}

impl<R: Resource> Gateway<R> {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    fn collection_path() -> String {
        format!("/{}", R::KIND.as_str())
    }

    fn item_path(id: RecordId) -> String {
        format!("/{}/{}", R::KIND.as_str(), id)
    }

    /// Reject ids that have no backend row before any request is sent.
    #[track_caller]
    fn require_persisted(id: RecordId) -> ClientResult<RecordId> {
        if id.is_placeholder() {
            return Err(ClientError::validation(format!(
                "{} ID is required (got temporary id {})",
                R::KIND.label(),
                id
            )));
        }
        Ok(id)
    }

    fn parse_record(value: Value) -> ClientResult<R> {
        let normalized = normalize_key(R::unwrap_one(value), R::BACKEND_KEY);
        Ok(serde_json::from_value(normalized)?)
    }

    /// Parse a create/update response when it carries the stored record.
    ///
    /// Some endpoints answer with only `{"message": ...}`; that yields `None`.
    fn parse_saved(value: Value) -> ClientResult<Option<R>> {
        let normalized = normalize_key(R::unwrap_one(value), R::BACKEND_KEY);
        if normalized.get("id").is_none() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(normalized)?))
    }

    /// Fetch the full collection.
    ///
    /// Rows keep `id: None` when the backend sent no key at all; assigning
    /// placeholders is the list controller's job.
    pub async fn list(&self) -> ClientResult<Vec<R>> {
        let body = self.client.get(&Self::collection_path()).await?;
        let rows = R::unwrap_list(body)?;
        debug!("Fetched {} {}", rows.len(), R::KIND);

        rows.into_iter()
            .map(|row| {
                serde_json::from_value(normalize_key(row, R::BACKEND_KEY))
                    .map_err(ClientError::from_json)
            })
            .collect()
    }

    /// Fetch one record.
    pub async fn get(&self, id: RecordId) -> ClientResult<R> {
        let id = Self::require_persisted(id)?;
        let body = self.client.get(&Self::item_path(id)).await?;
        let mut record = Self::parse_record(body)?;
        if record.id().is_none() {
            record.set_id(id);
        }
        Ok(record)
    }

    /// Create a record from a draft.
    pub async fn create(&self, draft: &R::Draft) -> ClientResult<Option<R>> {
        let payload = draft.normalized();
        let body = self.client.post(&Self::collection_path(), &payload).await?;
        let created = Self::parse_saved(body)?;
        info!(
            "Created {} (id: {})",
            R::KIND.label(),
            created
                .as_ref()
                .and_then(|r| r.id())
                .map_or_else(|| String::from("not returned"), |id| id.to_string())
        );
        Ok(created)
    }

    /// Update a persisted record.
    pub async fn update(&self, id: RecordId, draft: &R::Draft) -> ClientResult<Option<R>> {
        let id = Self::require_persisted(id)?;
        let payload = draft.normalized();
        let body = self.client.put(&Self::item_path(id), &payload).await?;
        info!("Updated {} {}", R::KIND.label(), id);
        Self::parse_saved(body)
    }

    /// Delete a persisted record.
    pub async fn delete(&self, id: RecordId) -> ClientResult<()> {
        let id = Self::require_persisted(id)?;
        self.client.delete(&Self::item_path(id)).await?;
        info!("Deleted {} {}", R::KIND.label(), id);
        Ok(())
    }
}
