use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::kv::KvStore;

/// In-process key-value backend.
///
/// Used for local runs with `STORE_BACKEND=memory` and by the test suite.
/// Contents are lost when the process exits.
#[derive(Debug, Default, Clone)]
pub struct MemoryKvStore {
    inner: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let map = self.inner.read().await;
        Ok(map.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        let len = value.len();
        self.inner.write().await.insert(key.to_string(), value);
        tracing::debug!("Stored {} bytes under key: {}", len, key);
        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
