pub mod assign;

use std::sync::Arc;

use chrono::NaiveDate;

use crate::entity::{class_teachers, teachers};
use crate::errors::Result;
use crate::storage::SeaOrmStorage;

/// 班级教师任职
pub struct ClassTeacherService {
    storage: Arc<SeaOrmStorage>,
}

impl ClassTeacherService {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &SeaOrmStorage {
        &self.storage
    }

    /// 指定班主任，同一班级至多一名在任班主任
    pub async fn assign_head_teacher(
        &self,
        class_id: i32,
        teacher_id: i32,
        start_date: NaiveDate,
    ) -> Result<class_teachers::Model> {
        assign::assign_head_teacher(self, class_id, teacher_id, start_date).await
    }

    // 班级当前的班主任
    pub async fn head_teacher(&self, class_id: i32) -> Result<Option<teachers::Model>> {
        assign::head_teacher(self, class_id).await
    }
}
