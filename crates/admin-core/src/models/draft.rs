use crate::{CoreErrorResult, ValidationErrors};

use std::fmt::Debug;

use serde::Serialize;

/// Form-bound editable fields of a record.
pub trait Draft: Clone + Debug + Default + Serialize + Send + Sync + 'static {
    /// Field names accepted by [`Draft::set_field`]
    const FIELDS: &'static [&'static str];

    /// Update one field from its textual form value.
    fn set_field(&mut self, field: &str, value: &str) -> CoreErrorResult<()>;

    /// Check required fields and formats. Never touches the network.
    fn validate(&self) -> ValidationErrors;

    /// Payload actually sent to the backend: trimmed, defaults applied.
    fn normalized(&self) -> Self;
}
