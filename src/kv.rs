use anyhow::Result;
use async_trait::async_trait;

/// Byte-oriented key-value backend the student collection is persisted in.
///
/// Implementations must be shareable across async handlers. Each call is
/// independent: nothing here makes a get followed by a set atomic.
#[async_trait]
pub trait KvStore: Send + Sync + 'static {
    /// Read the value stored under `key`, `None` if the key was never set
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Overwrite the value stored under `key`
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Verify the backend is reachable
    async fn health_check(&self) -> Result<()>;
}
