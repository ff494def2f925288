pub mod health;
pub mod list;
pub mod get;
pub mod create;
pub mod update;
pub mod delete;
pub mod seed;

pub use health::health_handler;
pub use list::list_handler;
pub use get::get_handler;
pub use create::create_handler;
pub use update::update_handler;
pub use delete::delete_handler;
pub use seed::seed_handler;

use crate::error::ApiError;

/// Parse an `{id}` path segment as a student id
fn parse_id(id_str: &str) -> Result<i32, ApiError> {
    id_str
        .trim()
        .parse::<i32>()
        .map_err(|_| ApiError::InvalidId(id_str.to_string()))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::app::router;
    use crate::config::{Config, StoreBackend};
    use crate::memory::MemoryKvStore;
    use crate::models::Student;
    use crate::state::AppState;
    use crate::students::StudentStore;
    use axum::{
        body::Body,
        http::{Request, Response},
        Router,
    };
    use serde::de::DeserializeOwned;
    use std::sync::Arc;
    use tower::ServiceExt;

    /// Router over a fresh in-memory store, plus the raw store for inspecting state
    pub fn setup_test_app() -> (Router, MemoryKvStore) {
        let kv = MemoryKvStore::new();
        let config = Config {
            store_backend: StoreBackend::Memory,
            spanner: None,
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
        };

        let state = AppState {
            students: StudentStore::new(Arc::new(kv.clone())),
            config: Arc::new(config),
        };

        (router(state), kv)
    }

    pub fn student(id: i32, age: i32) -> Student {
        Student {
            id,
            first_name: "Noa".to_string(),
            last_name: "Levi".to_string(),
            age,
            grades_average: 91.5,
            school_name: "Hadar".to_string(),
            school_address: "Hagalil 54".to_string(),
        }
    }

    pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&Student>) -> Response<Body> {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(student) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(student).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        app.clone().oneshot(request).await.unwrap()
    }

    pub async fn body_json<T: DeserializeOwned>(response: Response<Body>) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }
}
