pub(crate) mod auth_api;
pub(crate) mod file_storage;
pub(crate) mod memory_storage;
pub(crate) mod session_store;
pub(crate) mod storage;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
pub use session_store::SessionStore;
pub use storage::SessionStorage;

/// Storage key of the opaque auth token
pub const AUTH_TOKEN_KEY: &str = "auth_token";
/// Storage key of the serialized current-user record
pub const ADMIN_INFO_KEY: &str = "admin_info";
