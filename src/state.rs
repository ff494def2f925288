use crate::config::Config;
use crate::students::StudentStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub students: StudentStore,
    pub config: Arc<Config>,
}
