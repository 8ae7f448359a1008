pub mod submit;

use std::sync::Arc;

use crate::entity::{enrollment_application_materials, enrollment_applications};
use crate::errors::Result;
use crate::storage::SeaOrmStorage;

/// 已提交的申请及其材料
#[derive(Debug, Clone)]
pub struct SubmittedApplication {
    pub application: enrollment_applications::Model,
    pub materials: Vec<enrollment_application_materials::Model>,
}

pub struct EnrollmentService {
    storage: Arc<SeaOrmStorage>,
}

impl EnrollmentService {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &SeaOrmStorage {
        &self.storage
    }

    /// 在同一事务中写入申请与全部材料
    pub async fn submit_application(
        &self,
        application: enrollment_applications::ActiveModel,
        materials: Vec<enrollment_application_materials::ActiveModel>,
    ) -> Result<SubmittedApplication> {
        submit::submit_application(self, application, materials).await
    }

    pub async fn materials(
        &self,
        application_id: i32,
    ) -> Result<Vec<enrollment_application_materials::Model>> {
        submit::materials(self, application_id).await
    }
}
