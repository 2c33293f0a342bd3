//! Local storage interface.

use crate::error::Result;

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";

/// Storage key holding the user record serialized as JSON.
pub const USER_KEY: &str = "user";

/// String key/value storage that survives restarts, in the manner of a
/// browser's `localStorage`.
///
/// Implementations must make each call durable before returning. There is no
/// batching: the session manager writes its two fields independently.
pub trait LocalStore: Send + Sync {
    /// Returns the stored value, or `None` when the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores a value, replacing any previous one.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removes a key. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}
