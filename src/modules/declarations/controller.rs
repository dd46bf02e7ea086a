use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::{info, instrument, warn};

use schooldesk_core::AppError;
use schooldesk_models::{DeclarationTemplates, DeclarationType};

use crate::middleware::auth::{AuthUser, RequireManageDeclarationTemplates};
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{
    PlaceholderInfo, RenderDeclarationDto, RenderedDeclaration, TemplateResponse,
    TemplatesResponse, UpdateTemplateDto,
};
use super::service::{self, DeclarationError};

fn parse_declaration_type(key: &str) -> Result<DeclarationType, AppError> {
    key.parse()
        .map_err(|_| AppError::not_found(anyhow!("Declaration type '{}' not found", key)))
}

fn template_response(declaration_type: DeclarationType, content: &str) -> TemplateResponse {
    TemplateResponse {
        declaration_type,
        title: declaration_type.title().to_string(),
        content: content.to_string(),
        unknown_placeholders: service::validate_template(content),
    }
}

fn templates_response(templates: &DeclarationTemplates) -> TemplatesResponse {
    TemplatesResponse {
        templates: templates
            .iter()
            .map(|(declaration_type, content)| template_response(*declaration_type, content))
            .collect(),
        missing: DeclarationType::ALL
            .into_iter()
            .filter(|declaration_type| !templates.contains_key(declaration_type))
            .collect(),
    }
}

#[utoipa::path(
    post,
    path = "/api/declarations/render",
    request_body = RenderDeclarationDto,
    responses(
        (status = 200, description = "Rendered declaration", body = RenderedDeclaration),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Student not found"),
        (status = 422, description = "No template configured for this declaration type")
    ),
    tag = "Declarations",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.principal.id))]
pub async fn render_declaration(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<RenderDeclarationDto>,
) -> Result<Json<RenderedDeclaration>, AppError> {
    if !service::may_render_for(&auth_user.principal, &auth_user.permissions, dto.student_id) {
        warn!(
            student_id = %dto.student_id,
            role = ?auth_user.principal.role,
            "Declaration render denied"
        );
        return Err(AppError::forbidden(anyhow!(
            "Access denied. Missing required permission: {}",
            schooldesk_core::Permission::GenerateDeclarations
        )));
    }

    let student = auth_user
        .tenant
        .student(dto.student_id)
        .ok_or_else(|| AppError::not_found(anyhow!("Student not found")))?;

    let today = state.declaration_config.today();
    let rendered = service::render_declaration(
        student,
        dto.declaration_type,
        &auth_user.tenant.settings,
        today,
    )
    .map_err(|err| match err {
        DeclarationError::TemplateNotFound(_) => AppError::unprocessable(err),
    })?;

    info!(
        student_id = %student.id,
        declaration_type = %dto.declaration_type,
        "Declaration rendered"
    );
    Ok(Json(rendered))
}

#[utoipa::path(
    get,
    path = "/api/declarations/templates",
    responses(
        (status = 200, description = "Configured templates", body = TemplatesResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires manage_declaration_templates")
    ),
    tag = "Declarations",
    security(("bearer_auth" = []))
)]
#[instrument(skip(auth_user))]
pub async fn get_templates(
    RequireManageDeclarationTemplates(auth_user): RequireManageDeclarationTemplates,
) -> Result<Json<TemplatesResponse>, AppError> {
    Ok(Json(templates_response(
        &auth_user.tenant.settings.declaration_templates,
    )))
}

/// Saves a template. Unknown placeholders do not block the save; they are
/// returned so the editor can flag them.
#[utoipa::path(
    put,
    path = "/api/declarations/templates/{declaration_type}",
    params(
        ("declaration_type" = String, Path, description = "enrollment, completion, transfer, tax or clearance")
    ),
    request_body = UpdateTemplateDto,
    responses(
        (status = 200, description = "Template saved", body = TemplateResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires manage_declaration_templates"),
        (status = 404, description = "Unknown declaration type")
    ),
    tag = "Declarations",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn update_template(
    State(state): State<AppState>,
    RequireManageDeclarationTemplates(auth_user): RequireManageDeclarationTemplates,
    Path(key): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateTemplateDto>,
) -> Result<Json<TemplateResponse>, AppError> {
    let declaration_type = parse_declaration_type(&key)?;
    let response = template_response(declaration_type, &dto.content);

    if !response.unknown_placeholders.is_empty() {
        warn!(
            declaration_type = %declaration_type,
            unknown = ?response.unknown_placeholders,
            "Template saved with unknown placeholders"
        );
    }

    state
        .store
        .update(auth_user.principal.school_id, |current| {
            let mut next = current.clone();
            next.settings.declaration_templates = service::update_template(
                &current.settings.declaration_templates,
                declaration_type,
                dto.content,
            );
            Ok::<_, AppError>(next)
        })
        .await
        .ok_or_else(|| AppError::not_found(anyhow!("School not found")))??;

    info!(
        declaration_type = %declaration_type,
        updated_by = %auth_user.principal.id,
        "Declaration template saved"
    );
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/api/declarations/templates/{declaration_type}",
    params(
        ("declaration_type" = String, Path, description = "enrollment, completion, transfer, tax or clearance")
    ),
    responses(
        (status = 204, description = "Template removed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires manage_declaration_templates"),
        (status = 404, description = "Unknown declaration type or no template configured")
    ),
    tag = "Declarations",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn delete_template(
    State(state): State<AppState>,
    RequireManageDeclarationTemplates(auth_user): RequireManageDeclarationTemplates,
    Path(key): Path<String>,
) -> Result<StatusCode, AppError> {
    let declaration_type = parse_declaration_type(&key)?;

    state
        .store
        .update(auth_user.principal.school_id, |current| {
            service::remove_template(&current.settings.declaration_templates, declaration_type)
                .map(|templates| {
                    let mut next = current.clone();
                    next.settings.declaration_templates = templates;
                    next
                })
                .ok_or_else(|| {
                    AppError::not_found(anyhow!(
                        "No template configured for '{}'",
                        declaration_type
                    ))
                })
        })
        .await
        .ok_or_else(|| AppError::not_found(anyhow!("School not found")))??;

    info!(declaration_type = %declaration_type, "Declaration template removed");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/declarations/placeholders",
    responses(
        (status = 200, description = "Placeholders available to templates", body = Vec<PlaceholderInfo>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Declarations",
    security(("bearer_auth" = []))
)]
#[instrument(skip(_auth_user))]
pub async fn get_placeholders(_auth_user: AuthUser) -> Json<Vec<PlaceholderInfo>> {
    Json(service::PLACEHOLDERS.to_vec())
}
