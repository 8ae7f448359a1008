//! 园所、班级、教师、学生与家长

use crate::catalog::ColumnType::*;
use crate::catalog::DefaultValue::*;
use crate::catalog::{Check, IndexSchema, TableSchema, col, enums, id};

pub(super) fn tables() -> Vec<TableSchema> {
    vec![
        kindergartens(),
        classes(),
        teachers(),
        students(),
        parents(),
        parent_student_relations(),
        class_teachers(),
    ]
}

fn kindergartens() -> TableSchema {
    TableSchema::define("Kindergarten", "kindergartens")
        .underscored()
        .paranoid()
        .comment("幼儿园表")
        .with_column(id())
        .with_column(col("name", String(100)).not_null())
        .with_column(col("code", String(50)).not_null().unique())
        .with_column(
            col("type", IntEnum(enums::KINDERGARTEN_TYPE))
                .not_null()
                .default(Int(1))
                .comment("1 公办 2 民办 3 普惠"),
        )
        .with_column(
            col("level", IntEnum(enums::KINDERGARTEN_LEVEL))
                .not_null()
                .default(Int(1)),
        )
        .with_column(col("address", String(255)))
        .with_column(col("phone", String(20)))
        .with_column(col("principalId", Integer))
        .with_column(
            col("status", IntEnum(enums::SWITCH))
                .not_null()
                .default(Int(1)),
        )
        .with_column(col("establishedDate", Date))
        .with_column(col("creatorId", Integer))
        .with_column(col("updaterId", Integer))
}

fn classes() -> TableSchema {
    TableSchema::define("Class", "classes")
        .underscored()
        .paranoid()
        .comment("班级表")
        .with_column(id())
        .with_column(col("name", String(50)).not_null())
        .with_column(col("code", String(50)).not_null().unique())
        .with_column(col("kindergartenId", Integer).not_null())
        .with_column(
            col("type", IntEnum(enums::CLASS_TYPE))
                .not_null()
                .default(Int(1))
                .comment("1 小班 2 中班 3 大班 4 学前班"),
        )
        .with_column(col("grade", String(20)))
        .with_column(col("headTeacherId", Integer))
        .with_column(
            col("capacity", Integer)
                .not_null()
                .default(Int(30))
                .check(Check::Range {
                    min: 1.0,
                    max: 100.0,
                }),
        )
        .with_column(
            col("currentStudentCount", Integer)
                .not_null()
                .default(Int(0))
                .check(Check::Min(0.0)),
        )
        .with_column(
            col("status", IntEnum(enums::SWITCH))
                .not_null()
                .default(Int(1)),
        )
        .index(IndexSchema::on(&["kindergartenId"]))
}

fn teachers() -> TableSchema {
    TableSchema::define("Teacher", "teachers")
        .underscored()
        .paranoid()
        .comment("教师表")
        .with_column(id())
        .with_column(col("userId", Integer).not_null().unique())
        .with_column(col("kindergartenId", Integer).not_null())
        .with_column(col("teacherNo", String(50)).not_null().unique())
        .with_column(
            col("position", IntEnum(enums::TEACHER_POSITION))
                .not_null()
                .default(Int(1)),
        )
        .with_column(
            col("status", IntEnum(enums::SWITCH))
                .not_null()
                .default(Int(1)),
        )
        .with_column(col("hireDate", Date))
        .with_column(col("remark", Text))
        .index(IndexSchema::on(&["kindergartenId"]))
}

fn students() -> TableSchema {
    TableSchema::define("Student", "students")
        .underscored()
        .paranoid()
        .comment("学生表")
        .with_column(id())
        .with_column(col("name", String(50)).not_null())
        .with_column(col("studentNo", String(50)).not_null().unique())
        .with_column(col("kindergartenId", Integer).not_null())
        .with_column(col("classId", Integer))
        .with_column(col("gender", IntEnum(enums::GENDER)).not_null())
        .with_column(col("birthDate", Date))
        .with_column(col("idCardNo", String(18)))
        .with_column(
            col("status", IntEnum(enums::STUDENT_STATUS))
                .not_null()
                .default(Int(1))
                .comment("0 离园 1 在读 2 毕业 3 休学"),
        )
        .with_column(col("enrollmentDate", Date))
        .with_column(col("allergyInfo", Text))
        .with_column(col("specialNeeds", Text))
        .index(IndexSchema::on(&["kindergartenId"]))
        .index(IndexSchema::on(&["classId"]))
}

fn parents() -> TableSchema {
    TableSchema::define("Parent", "parents")
        .underscored()
        .paranoid()
        .comment("家长表")
        .with_column(id())
        .with_column(col("userId", Integer).not_null().unique())
        .with_column(col("name", String(50)).not_null())
        .with_column(col("phone", String(20)))
        .with_column(col("email", String(100)).check(Check::Email))
        .with_column(col("occupation", String(50)))
        .with_column(col("workUnit", String(100)))
        .with_column(col("address", String(255)))
}

fn parent_student_relations() -> TableSchema {
    TableSchema::define("ParentStudentRelation", "parent_student_relations")
        .underscored()
        .paranoid()
        .comment("家长学生关系表")
        .with_column(id())
        .with_column(col("userId", Integer).not_null())
        .with_column(col("studentId", Integer).not_null())
        .with_column(col("relationship", Enum(enums::PARENT_RELATIONSHIP)).not_null())
        .with_column(
            col("isPrimaryContact", IntEnum(enums::SWITCH))
                .not_null()
                .default(Int(0)),
        )
        .with_column(
            col("isLegalGuardian", IntEnum(enums::SWITCH))
                .not_null()
                .default(Int(0)),
        )
        .with_column(col("idCardNo", String(18)))
        .with_column(col("workUnit", String(100)))
        .with_column(col("occupation", String(50)))
        .with_column(col("education", String(50)))
        .with_column(col("address", String(255)))
        .with_column(col("remark", Text))
        .with_column(col("creatorId", Integer))
        .with_column(col("updaterId", Integer))
        .index(IndexSchema::on(&["userId", "studentId"]).unique())
        .index(IndexSchema::on(&["studentId"]))
}

fn class_teachers() -> TableSchema {
    TableSchema::define("ClassTeacher", "class_teachers")
        .underscored()
        .paranoid()
        .comment("班级教师关联表")
        .with_column(id())
        .with_column(col("classId", Integer).not_null())
        .with_column(col("teacherId", Integer).not_null())
        .with_column(
            col("role", Enum(enums::CLASS_TEACHER_ROLE))
                .not_null()
                .default(Str("assistant_teacher")),
        )
        .with_column(col("isPrimary", Boolean).not_null().default(Bool(false)))
        .with_column(col("startDate", Date))
        .with_column(col("endDate", Date))
        .with_column(
            col("status", IntEnum(enums::SWITCH))
                .not_null()
                .default(Int(1)),
        )
        .index(IndexSchema::on(&["classId", "teacherId"]))
        .index(IndexSchema::on(&["teacherId"]))
}
