use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use schooldesk_core::permissions::{Permission, PermissionModule};
use schooldesk_core::{PaginationMeta, PaginationParams};
use schooldesk_models::{
    DeclarationType, Principal, Role, RoleName, SchoolInfo, SchoolSettings, Student,
};

use crate::modules::access::model::{MeResponse, PermissionCheckResponse};
use crate::modules::declarations::model::{
    PlaceholderInfo, RenderDeclarationDto, RenderedDeclaration, TemplateResponse,
    TemplatesResponse, UpdateTemplateDto,
};
use crate::modules::roles::model::{PermissionGroup, RolesResponse, UpdateRolePermissionsDto};
use crate::modules::students::model::PaginatedStudentsResponse;
use crate::router::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::router::health,
        crate::modules::access::controller::get_me,
        crate::modules::access::controller::check_permission,
        crate::modules::roles::controller::get_roles,
        crate::modules::roles::controller::get_permission_catalog,
        crate::modules::roles::controller::update_role,
        crate::modules::declarations::controller::render_declaration,
        crate::modules::declarations::controller::get_templates,
        crate::modules::declarations::controller::update_template,
        crate::modules::declarations::controller::delete_template,
        crate::modules::declarations::controller::get_placeholders,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_student,
    ),
    components(
        schemas(
            HealthResponse,
            Permission,
            PermissionModule,
            PermissionGroup,
            Principal,
            MeResponse,
            PermissionCheckResponse,
            Role,
            RoleName,
            RolesResponse,
            UpdateRolePermissionsDto,
            DeclarationType,
            PlaceholderInfo,
            RenderDeclarationDto,
            RenderedDeclaration,
            TemplateResponse,
            TemplatesResponse,
            UpdateTemplateDto,
            SchoolInfo,
            SchoolSettings,
            Student,
            PaginatedStudentsResponse,
            PaginationMeta,
            PaginationParams,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service liveness"),
        (name = "Access", description = "Effective permissions of the signed-in user"),
        (name = "Roles", description = "Role to permission administration"),
        (name = "Declarations", description = "Declaration rendering and templates"),
        (name = "Students", description = "Student records of the caller's school")
    ),
    info(
        title = "SchoolDesk API",
        version = "0.1.0",
        description = "Permission checks and declaration documents for SchoolDesk schools.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
