use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use schooldesk_models::{DeclarationType, StudentId};

/// A placeholder that templates may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PlaceholderInfo {
    /// Path inside the braces, e.g. `student.name`
    #[schema(value_type = String)]
    pub path: &'static str,
    #[schema(value_type = String)]
    pub description: &'static str,
}

impl PlaceholderInfo {
    pub const fn new(path: &'static str, description: &'static str) -> Self {
        Self { path, description }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RenderedDeclaration {
    pub declaration_type: DeclarationType,
    pub title: String,
    pub content: String,
    /// Placeholders left verbatim in `content`
    pub unresolved_placeholders: Vec<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RenderDeclarationDto {
    pub student_id: StudentId,
    pub declaration_type: DeclarationType,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTemplateDto {
    #[validate(length(max = 20000, message = "Template is too long"))]
    pub content: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TemplateResponse {
    pub declaration_type: DeclarationType,
    pub title: String,
    pub content: String,
    /// Placeholders no render can resolve; they will appear verbatim
    pub unknown_placeholders: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TemplatesResponse {
    pub templates: Vec<TemplateResponse>,
    /// Declaration types without a template; rendering them fails
    pub missing: Vec<DeclarationType>,
}
