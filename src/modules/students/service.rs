use schooldesk_core::PaginationParams;
use schooldesk_models::{Student, StudentId, TenantRecord};

use super::model::PaginatedStudentsResponse;

/// Students of `tenant`, sorted by name, one page at a time.
pub fn list_students(tenant: &TenantRecord, params: &PaginationParams) -> PaginatedStudentsResponse {
    let mut students: Vec<&Student> = tenant
        .students
        .iter()
        .filter(|student| student.school_id == tenant.id)
        .collect();
    students.sort_by(|a, b| a.name.cmp(&b.name));

    let (page, meta) = params.paginate(&students);
    PaginatedStudentsResponse {
        data: page.into_iter().cloned().collect(),
        meta,
    }
}

pub fn get_student(tenant: &TenantRecord, id: StudentId) -> Option<Student> {
    tenant.student(id).cloned()
}
