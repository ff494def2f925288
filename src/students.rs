use std::sync::Arc;
use thiserror::Error;

use crate::kv::KvStore;
use crate::models::{MAX_AGE, Student};

/// Key the whole student collection is stored under
pub const STUDENTS_KEY: &str = "students";

/// Failures of student collection operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Students age max is {}", MAX_AGE)]
    AgeLimit,
    #[error("Student with id {0} is already exists")]
    AlreadyExists(i32),
    #[error("Student with id {0} not found")]
    NotFound(i32),
    #[error("stored student collection is corrupt: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("failed to encode student collection: {0}")]
    Encode(#[source] serde_json::Error),
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Reads, mutates and persists the student collection.
///
/// Every mutation loads the full collection, changes one element and writes
/// the full collection back. There is no locking around that cycle, so two
/// concurrent writers can overwrite each other's change.
#[derive(Clone)]
pub struct StudentStore {
    kv: Arc<dyn KvStore>,
}

impl StudentStore {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv }
    }

    /// Load the collection in stored order; absent or empty value is an empty list
    pub async fn list(&self) -> Result<Vec<Student>, StoreError> {
        match self.kv.get(STUDENTS_KEY).await? {
            Some(bytes) if !bytes.is_empty() => {
                serde_json::from_slice(&bytes).map_err(StoreError::Decode)
            }
            _ => Ok(Vec::new()),
        }
    }

    pub async fn get(&self, id: i32) -> Result<Student, StoreError> {
        self.list()
            .await?
            .into_iter()
            .find(|s| s.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Append a new student. Duplicate ids are rejected before the age cap is checked.
    pub async fn create(&self, student: Student) -> Result<Vec<Student>, StoreError> {
        let mut students = self.list().await?;

        if students.iter().any(|s| s.id == student.id) {
            return Err(StoreError::AlreadyExists(student.id));
        }
        if student.age > MAX_AGE {
            return Err(StoreError::AgeLimit);
        }

        tracing::debug!("Appending student with id: {}", student.id);
        students.push(student);
        self.save(&students).await?;
        Ok(students)
    }

    /// Overwrite every field but `id` of an existing student. The age cap is not applied.
    pub async fn update(&self, student: Student) -> Result<Vec<Student>, StoreError> {
        let mut students = self.list().await?;

        let existing = students
            .iter_mut()
            .find(|s| s.id == student.id)
            .ok_or(StoreError::NotFound(student.id))?;
        existing.overwrite_from(&student);

        tracing::debug!("Updated student with id: {}", student.id);
        self.save(&students).await?;
        Ok(students)
    }

    pub async fn delete(&self, id: i32) -> Result<Vec<Student>, StoreError> {
        let mut students = self.list().await?;

        let index = students
            .iter()
            .position(|s| s.id == id)
            .ok_or(StoreError::NotFound(id))?;
        students.remove(index);

        tracing::debug!("Removed student with id: {}", id);
        self.save(&students).await?;
        Ok(students)
    }

    /// Replace whatever is stored with the fixed sample records
    pub async fn seed_dummy_data(&self) -> Result<(), StoreError> {
        let students = dummy_students();
        self.save(&students).await?;
        tracing::debug!("Seeded {} sample students", students.len());
        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), StoreError> {
        Ok(self.kv.health_check().await?)
    }

    async fn save(&self, students: &[Student]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(students).map_err(StoreError::Encode)?;
        self.kv.set(STUDENTS_KEY, bytes).await?;
        Ok(())
    }
}

/// The four sample records written by [`StudentStore::seed_dummy_data`]
pub fn dummy_students() -> Vec<Student> {
    let student = |id: i32,
                   first: &str,
                   last: &str,
                   age: i32,
                   grades: f64,
                   school: &str,
                   address: &str| Student {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        age,
        grades_average: grades,
        school_name: school.to_string(),
        school_address: address.to_string(),
    };

    vec![
        student(1, "Gil", "Nahum", 16, 80.0, "Hadar", "Hagalil 54"),
        student(2, "Ilay", "Frenkel", 18, 70.0, "Alon", "Migdal 46"),
        student(3, "Tal", "Zvi", 16, 90.0, "Hadar", "Hagalil 54"),
        student(4, "Dan", "Sagir", 18, 100.0, "Alon", "Migdal 46"),
    ]
}
