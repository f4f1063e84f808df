use crate::ClientResult;

/// Key/value store for the persisted session, scoped to one backend origin.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> ClientResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> ClientResult<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> ClientResult<()>;
}
