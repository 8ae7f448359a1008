use chrono::Utc;
use sea_orm::ActiveValue::Set;
use tracing::info;

use super::{EnrollmentService, SubmittedApplication};
use crate::entity::{enrollment_application_materials, enrollment_applications};
use crate::errors::Result;
use crate::models::enrollment::entities::ApplicationStatus;

pub async fn submit_application(
    service: &EnrollmentService,
    mut application: enrollment_applications::ActiveModel,
    materials: Vec<enrollment_application_materials::ActiveModel>,
) -> Result<SubmittedApplication> {
    application.status = Set(ApplicationStatus::Submitted.into());
    application.submitted_at = Set(Some(Utc::now()));

    // 任何一步失败，未提交的事务随 uow 一起回滚
    let uow = service.storage().begin().await?;
    let application = uow
        .repo::<enrollment_applications::Entity>()?
        .insert(application)
        .await?;

    let repo = uow.repo::<enrollment_application_materials::Entity>()?;
    let mut saved = Vec::with_capacity(materials.len());
    for mut material in materials {
        material.application_id = Set(application.id);
        saved.push(repo.insert(material).await?);
    }

    uow.commit().await?;
    info!(
        "入园申请 {} 已提交，附带 {} 份材料",
        application.application_number,
        saved.len()
    );
    Ok(SubmittedApplication {
        application,
        materials: saved,
    })
}

pub async fn materials(
    service: &EnrollmentService,
    application_id: i32,
) -> Result<Vec<enrollment_application_materials::Model>> {
    let storage = service.storage();
    let application = storage
        .repo::<enrollment_applications::Entity>()?
        .get(i64::from(application_id))
        .await?;
    storage
        .associations()
        .children::<enrollment_applications::Entity, enrollment_application_materials::Entity>(
            &application,
            "materials",
        )
        .await
}
