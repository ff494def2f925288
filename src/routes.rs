// Route path constants - single source of truth for all API paths
// Segments containing spaces are matched in their percent-encoded form.

pub const HEALTH: &str = "/health";
pub const STUDENTS: &str = "/api/student";
pub const STUDENTS_ALL: &str = "/api/student/All%20Students";
pub const STUDENTS_SEED: &str = "/api/student/Init%20Dummy%20Data";
pub const STUDENT_ITEM: &str = "/api/student/{id}";

pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
