//! In-memory student directory adapter
//!
//! The real directory is owned by the admissions subsystem; this adapter
//! backs the `StudentDirectory` port for development and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use core_kernel::StudentId;
use domain_fees::ports::{StudentDirectory, StudentIdentity};
use domain_fees::FeesError;

/// In-memory [`StudentDirectory`] adapter
#[derive(Default)]
pub struct MemoryStudentDirectory {
    students: RwLock<HashMap<StudentId, StudentIdentity>>,
}

impl MemoryStudentDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or replaces one student identity
    pub async fn upsert(&self, identity: StudentIdentity) {
        self.students
            .write()
            .await
            .insert(identity.student_id, identity);
    }
}

#[async_trait]
impl StudentDirectory for MemoryStudentDirectory {
    async fn lookup(&self, student_id: StudentId) -> Result<Option<StudentIdentity>, FeesError> {
        Ok(self.students.read().await.get(&student_id).cloned())
    }
}
