use serde::{Deserialize, Serialize};

/// Highest age accepted when a student is created
pub const MAX_AGE: i32 = 18;

/// A single student record, as exchanged over HTTP and persisted in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    #[serde(alias = "gradesAvg")]
    pub grades_average: f64,
    pub school_name: String,
    #[serde(alias = "schoolAdress")]
    pub school_address: String,
}

impl Student {
    /// Copy every mutable field from `other`, leaving `id` untouched
    pub fn overwrite_from(&mut self, other: &Student) {
        self.first_name.clone_from(&other.first_name);
        self.last_name.clone_from(&other.last_name);
        self.age = other.age;
        self.grades_average = other.grades_average;
        self.school_name.clone_from(&other.school_name);
        self.school_address.clone_from(&other.school_address);
    }
}
