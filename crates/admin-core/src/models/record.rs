use crate::{ColumnValue, Draft, RecordId, ResourceKind};

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A domain record the console lists and edits.
///
/// Implementors carry a canonical `id`; backend key names are reconciled
/// before a record is ever deserialized into one of these types.
pub trait Record: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Editable fields used as create/update payloads
    type Draft: Draft;

    const KIND: ResourceKind;

    /// Displayed column names, in table order
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> Option<RecordId>;

    fn set_id(&mut self, id: RecordId);

    fn to_draft(&self) -> Self::Draft;

    /// Value of a displayed column, `None` for an unknown column name
    fn column(&self, name: &str) -> Option<ColumnValue>;

    /// Short human label used in confirmation prompts
    fn display_name(&self) -> String;
}
