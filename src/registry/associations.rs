//! 幼儿园实体之间的关联
//!
//! EnrollmentApplication 的 creatorId / reviewerId 历史关联没有对应列，不在此声明；
//! 审核人通过 reviewedBy 关联。

use super::relations::Association as A;

pub(super) fn declarations() -> Vec<A> {
    let mut all = Vec::new();
    all.extend(identity());
    all.extend(people());
    all.extend(attendance());
    all.extend(enrollment());
    all.extend(workflow());
    all.extend(audit());
    all.extend(content());
    all
}

fn identity() -> Vec<A> {
    vec![
        A::belongs_to_many("User", "Role", "UserRole")
            .alias("roles")
            .foreign_key("userId")
            .other_key("roleId"),
        A::belongs_to_many("Role", "User", "UserRole")
            .alias("users")
            .foreign_key("roleId")
            .other_key("userId"),
        A::belongs_to_many("Role", "Permission", "RolePermission")
            .alias("permissions")
            .foreign_key("roleId")
            .other_key("permissionId"),
        A::belongs_to_many("Permission", "Role", "RolePermission")
            .alias("permissionRoles")
            .foreign_key("permissionId")
            .other_key("roleId"),
        A::belongs_to("Permission", "Permission")
            .alias("parent")
            .foreign_key("parentId"),
        A::has_many("Permission", "Permission")
            .alias("children")
            .foreign_key("parentId"),
        A::belongs_to("UserRole", "User").alias("user").foreign_key("userId"),
        A::belongs_to("UserRole", "Role").alias("role").foreign_key("roleId"),
        A::belongs_to("UserRole", "User")
            .alias("grantor")
            .foreign_key("grantorId"),
        A::belongs_to("RolePermission", "Role")
            .alias("role")
            .foreign_key("roleId"),
        A::belongs_to("RolePermission", "Permission")
            .alias("permission")
            .foreign_key("permissionId"),
        A::belongs_to("RolePermission", "User")
            .alias("grantor")
            .foreign_key("grantorId"),
    ]
}

fn people() -> Vec<A> {
    vec![
        A::belongs_to("Kindergarten", "User")
            .alias("principal")
            .foreign_key("principalId"),
        A::has_many("Kindergarten", "Class")
            .alias("classes")
            .foreign_key("kindergartenId"),
        A::has_many("Kindergarten", "Teacher")
            .alias("teachers")
            .foreign_key("kindergartenId"),
        A::has_many("Kindergarten", "Student")
            .alias("students")
            .foreign_key("kindergartenId"),
        A::belongs_to("Class", "Kindergarten")
            .alias("kindergarten")
            .foreign_key("kindergartenId"),
        A::belongs_to("Class", "Teacher")
            .alias("headTeacher")
            .foreign_key("headTeacherId"),
        A::has_many("Class", "Student")
            .alias("students")
            .foreign_key("classId"),
        A::belongs_to_many("Class", "Teacher", "ClassTeacher")
            .alias("teachers")
            .foreign_key("classId")
            .other_key("teacherId"),
        A::has_many("Class", "ClassTeacher")
            .alias("classTeachers")
            .foreign_key("classId"),
        A::belongs_to("Teacher", "User").alias("user").foreign_key("userId"),
        A::belongs_to("Teacher", "Kindergarten")
            .alias("kindergarten")
            .foreign_key("kindergartenId"),
        A::belongs_to_many("Teacher", "Class", "ClassTeacher")
            .alias("classes")
            .foreign_key("teacherId")
            .other_key("classId"),
        A::has_one("User", "Teacher")
            .alias("teacherProfile")
            .foreign_key("userId"),
        A::belongs_to("ClassTeacher", "Class")
            .alias("class")
            .foreign_key("classId"),
        A::belongs_to("ClassTeacher", "Teacher")
            .alias("teacher")
            .foreign_key("teacherId"),
        A::belongs_to("Student", "Kindergarten")
            .alias("kindergarten")
            .foreign_key("kindergartenId"),
        A::belongs_to("Student", "Class")
            .alias("class")
            .foreign_key("classId"),
        A::belongs_to_many("Student", "User", "ParentStudentRelation")
            .alias("parents")
            .foreign_key("studentId")
            .other_key("userId"),
        A::belongs_to_many("User", "Student", "ParentStudentRelation")
            .alias("children")
            .foreign_key("userId")
            .other_key("studentId"),
        A::has_many("Student", "ParentStudentRelation")
            .alias("parentRelations")
            .foreign_key("studentId"),
        A::belongs_to("Parent", "User").alias("user").foreign_key("userId"),
        A::has_one("User", "Parent")
            .alias("parentProfile")
            .foreign_key("userId"),
        A::belongs_to("ParentStudentRelation", "User")
            .alias("user")
            .foreign_key("userId"),
        A::belongs_to("ParentStudentRelation", "Student")
            .alias("student")
            .foreign_key("studentId"),
        A::belongs_to("ParentStudentRelation", "User")
            .alias("creator")
            .foreign_key("creatorId"),
        A::belongs_to("ParentStudentRelation", "User")
            .alias("updater")
            .foreign_key("updaterId"),
    ]
}

/// 变更记录和记录人只作说明，考勤行删除后日志仍保留
fn attendance() -> Vec<A> {
    vec![
        A::belongs_to("Attendance", "Student")
            .alias("student")
            .foreign_key("studentId"),
        A::belongs_to("Attendance", "Class")
            .alias("class")
            .foreign_key("classId"),
        A::belongs_to("Attendance", "Kindergarten")
            .alias("kindergarten")
            .foreign_key("kindergartenId"),
        A::belongs_to("Attendance", "User")
            .alias("recorder")
            .foreign_key("recordedBy")
            .without_constraints(),
        A::has_many("Student", "Attendance")
            .alias("attendances")
            .foreign_key("studentId"),
        A::has_many("Attendance", "AttendanceChangeLog")
            .alias("changeLogs")
            .foreign_key("attendanceId"),
        A::belongs_to("AttendanceChangeLog", "Attendance")
            .alias("attendance")
            .foreign_key("attendanceId")
            .without_constraints(),
        A::belongs_to("AttendanceChangeLog", "User")
            .alias("changer")
            .foreign_key("changedBy")
            .without_constraints(),
    ]
}

fn enrollment() -> Vec<A> {
    vec![
        A::belongs_to("EnrollmentPlan", "Kindergarten")
            .alias("kindergarten")
            .foreign_key("kindergartenId"),
        A::belongs_to("EnrollmentPlan", "User")
            .alias("creator")
            .foreign_key("creatorId"),
        A::belongs_to_many("EnrollmentPlan", "Class", "EnrollmentPlanClass")
            .alias("classes")
            .foreign_key("planId")
            .other_key("classId"),
        A::belongs_to_many("Class", "EnrollmentPlan", "EnrollmentPlanClass")
            .alias("enrollmentPlans")
            .foreign_key("classId")
            .other_key("planId"),
        A::belongs_to("EnrollmentPlanClass", "EnrollmentPlan")
            .alias("plan")
            .foreign_key("planId"),
        A::belongs_to("EnrollmentPlanClass", "Class")
            .alias("class")
            .foreign_key("classId"),
        A::has_many("EnrollmentPlan", "EnrollmentPlanAssignee")
            .alias("assignees")
            .foreign_key("planId"),
        A::belongs_to("EnrollmentPlanAssignee", "EnrollmentPlan")
            .alias("plan")
            .foreign_key("planId"),
        A::belongs_to("EnrollmentPlanAssignee", "User")
            .alias("assignee")
            .foreign_key("assigneeId"),
        A::has_many("EnrollmentPlan", "EnrollmentApplication")
            .alias("applications")
            .foreign_key("enrollmentPlanId"),
        A::belongs_to("EnrollmentApplication", "Student")
            .alias("student")
            .foreign_key("studentId"),
        A::belongs_to("EnrollmentApplication", "User")
            .alias("parent")
            .foreign_key("parentId"),
        A::belongs_to("EnrollmentApplication", "Kindergarten")
            .alias("kindergarten")
            .foreign_key("kindergartenId"),
        A::belongs_to("EnrollmentApplication", "EnrollmentPlan")
            .alias("enrollmentPlan")
            .foreign_key("enrollmentPlanId"),
        A::belongs_to("EnrollmentApplication", "User")
            .alias("reviewer")
            .foreign_key("reviewedBy"),
        A::has_many("EnrollmentApplication", "EnrollmentApplicationMaterial")
            .alias("materials")
            .foreign_key("applicationId"),
        A::belongs_to("EnrollmentApplicationMaterial", "EnrollmentApplication")
            .alias("application")
            .foreign_key("applicationId"),
        A::belongs_to("EnrollmentApplicationMaterial", "User")
            .alias("uploader")
            .foreign_key("uploadedBy"),
        A::belongs_to("EnrollmentConsultation", "Kindergarten")
            .alias("kindergarten")
            .foreign_key("kindergartenId"),
        A::belongs_to("EnrollmentConsultation", "User")
            .alias("consultant")
            .foreign_key("consultantId"),
        A::has_many("EnrollmentConsultation", "EnrollmentConsultationFollowup")
            .alias("followups")
            .foreign_key("consultationId"),
        A::belongs_to("EnrollmentConsultationFollowup", "EnrollmentConsultation")
            .alias("consultation")
            .foreign_key("consultationId"),
        A::belongs_to("EnrollmentConsultationFollowup", "User")
            .alias("followupUser")
            .foreign_key("followupUserId"),
    ]
}

fn workflow() -> Vec<A> {
    vec![
        A::belongs_to("Todo", "User").alias("user").foreign_key("userId"),
        A::belongs_to("Todo", "User")
            .alias("assignee")
            .foreign_key("assignedTo"),
        A::has_many("Todo", "TaskAttachment")
            .alias("attachments")
            .foreign_key("todoId"),
        A::belongs_to("TaskAttachment", "Todo")
            .alias("todo")
            .foreign_key("todoId"),
        A::belongs_to("TaskAttachment", "User")
            .alias("uploader")
            .foreign_key("uploaderId"),
        A::belongs_to("Task", "User")
            .alias("creator")
            .foreign_key("creatorId"),
        A::belongs_to("Task", "User")
            .alias("assignee")
            .foreign_key("assigneeId"),
        A::has_many("User", "Task")
            .alias("createdTasks")
            .foreign_key("creatorId"),
        A::has_many("User", "Task")
            .alias("assignedTasks")
            .foreign_key("assigneeId"),
        A::has_many("InspectionType", "InspectionPlan")
            .alias("plans")
            .foreign_key("inspectionTypeId"),
        A::belongs_to("InspectionPlan", "InspectionType")
            .alias("inspectionType")
            .foreign_key("inspectionTypeId"),
        A::belongs_to("InspectionPlan", "Kindergarten")
            .alias("kindergarten")
            .foreign_key("kindergartenId"),
        A::belongs_to("InspectionPlan", "User")
            .alias("responsibleUser")
            .foreign_key("responsibleUserId"),
        A::has_many("InspectionPlan", "InspectionTask")
            .alias("tasks")
            .foreign_key("inspectionPlanId"),
        A::belongs_to("InspectionTask", "InspectionPlan")
            .alias("inspectionPlan")
            .foreign_key("inspectionPlanId"),
        A::belongs_to("InspectionTask", "InspectionTask")
            .alias("parentTask")
            .foreign_key("parentTaskId"),
        A::has_many("InspectionTask", "InspectionTask")
            .alias("subtasks")
            .foreign_key("parentTaskId"),
        A::belongs_to("InspectionTask", "User")
            .alias("assignedUser")
            .foreign_key("assignedTo"),
    ]
}

fn audit() -> Vec<A> {
    vec![
        A::belongs_to("OperationLog", "User")
            .alias("user")
            .foreign_key("userId")
            .without_constraints(),
        A::belongs_to("SecurityScanLog", "User")
            .alias("starter")
            .foreign_key("startedBy")
            .without_constraints(),
        A::belongs_to("SecurityConfig", "User")
            .alias("updater")
            .foreign_key("updatedBy"),
        A::belongs_to("AIQueryHistory", "User")
            .alias("user")
            .foreign_key("userId")
            .without_constraints(),
        A::has_many("User", "AIQueryHistory")
            .alias("aiQueryHistories")
            .foreign_key("userId"),
    ]
}

fn content() -> Vec<A> {
    vec![
        A::belongs_to("AIUserRelation", "User")
            .alias("user")
            .foreign_key("userId"),
        A::has_one("User", "AIUserRelation")
            .alias("aiRelation")
            .foreign_key("userId"),
        A::belongs_to("PosterCategory", "PosterCategory")
            .alias("parent")
            .foreign_key("parentId"),
        A::has_many("PosterCategory", "PosterCategory")
            .alias("children")
            .foreign_key("parentId"),
        A::has_many("PosterCategory", "PosterTemplate")
            .alias("templates")
            .foreign_key("categoryId"),
        A::belongs_to("PosterTemplate", "PosterCategory")
            .alias("category")
            .foreign_key("categoryId"),
        A::belongs_to("PosterTemplate", "User")
            .alias("creator")
            .foreign_key("creatorId"),
        A::belongs_to("PosterTemplate", "Kindergarten")
            .alias("kindergarten")
            .foreign_key("kindergartenId"),
        A::has_many("PosterTemplate", "PosterElement")
            .alias("elements")
            .foreign_key("templateId"),
        A::belongs_to("PosterElement", "PosterTemplate")
            .alias("template")
            .foreign_key("templateId"),
    ]
}
