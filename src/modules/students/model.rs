use serde::Serialize;
use utoipa::ToSchema;

use schooldesk_core::PaginationMeta;
use schooldesk_models::Student;

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedStudentsResponse {
    pub data: Vec<Student>,
    pub meta: PaginationMeta,
}
