use chrono::NaiveDate;
use sea_orm::ActiveValue::Set;
use tracing::{debug, info};

use super::ClassTeacherService;
use crate::entity::{class_teachers, classes, teachers};
use crate::errors::{ModelError, Result};
use crate::models::people::entities::ClassTeacherRole;
use crate::storage::Scope;

pub async fn assign_head_teacher(
    service: &ClassTeacherService,
    class_id: i32,
    teacher_id: i32,
    start_date: NaiveDate,
) -> Result<class_teachers::Model> {
    let uow = service.storage().begin().await?;

    let class = uow
        .repo::<classes::Entity>()?
        .get(i64::from(class_id))
        .await?;
    let teacher = uow
        .repo::<teachers::Entity>()?
        .get(i64::from(teacher_id))
        .await?;
    if teacher.kindergarten_id != class.kindergarten_id {
        return Err(ModelError::validation(format!(
            "教师 {} 不属于班级 {} 所在的幼儿园",
            teacher.teacher_no, class.name
        )));
    }

    let assignments = uow.repo::<class_teachers::Entity>()?;
    let active_heads: Vec<class_teachers::Model> = assignments
        .find_where("classId", class_id, Scope::Default)
        .await?
        .into_iter()
        .filter(|row| row.teacher_role() == ClassTeacherRole::HeadTeacher && row.is_active())
        .collect();

    // 关闭其他在任班主任的任职
    let mut kept = None;
    for row in active_heads {
        if row.teacher_id == teacher_id && kept.is_none() {
            kept = Some(row);
            continue;
        }
        assignments
            .update(i64::from(row.id), |active| {
                active.end_date = Set(Some(start_date));
                active.status = Set(0);
            })
            .await?;
        debug!("班级 {} 的班主任任职 {} 已结束", class.code, row.id);
    }

    let assignment = match kept {
        Some(row) => row,
        None => {
            assignments
                .insert(class_teachers::ActiveModel {
                    class_id: Set(class_id),
                    teacher_id: Set(teacher_id),
                    role: Set(ClassTeacherRole::HeadTeacher.into()),
                    is_primary: Set(true),
                    start_date: Set(Some(start_date)),
                    ..Default::default()
                })
                .await?
        }
    };

    uow.repo::<classes::Entity>()?
        .update(i64::from(class_id), |active| {
            active.head_teacher_id = Set(Some(teacher_id));
        })
        .await?;

    uow.commit().await?;
    info!("班级 {} 的班主任设为教师 {}", class.code, teacher.teacher_no);
    Ok(assignment)
}

pub async fn head_teacher(
    service: &ClassTeacherService,
    class_id: i32,
) -> Result<Option<teachers::Model>> {
    let storage = service.storage();
    let class = storage
        .repo::<classes::Entity>()?
        .get(i64::from(class_id))
        .await?;
    storage
        .associations()
        .parent::<classes::Entity, teachers::Entity>(&class, "headTeacher")
        .await
}
