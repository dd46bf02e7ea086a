//! Declaration rendering and template administration.

use std::borrow::Cow;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use schooldesk_core::permissions::{Permission, PermissionSet};
use schooldesk_models::{
    DeclarationTemplates, DeclarationType, Principal, SchoolInfo, SchoolSettings, Student,
    StudentId,
};

use super::dates::DateContext;
use super::model::{PlaceholderInfo, RenderedDeclaration};
use super::template;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeclarationError {
    #[error("No template is configured for the '{0}' declaration")]
    TemplateNotFound(DeclarationType),
}

/// Every placeholder a template may use.
pub const PLACEHOLDERS: &[PlaceholderInfo] = &[
    PlaceholderInfo::new("student.name", "Nome completo do aluno"),
    PlaceholderInfo::new("student.parentName", "Nome do responsável"),
    PlaceholderInfo::new("student.cpf", "CPF do aluno"),
    PlaceholderInfo::new("student.className", "Turma do aluno"),
    PlaceholderInfo::new("school.name", "Nome da escola"),
    PlaceholderInfo::new("school.cnpj", "CNPJ da escola"),
    PlaceholderInfo::new("school.address", "Endereço da escola"),
    PlaceholderInfo::new("school.phone", "Telefone da escola"),
    PlaceholderInfo::new("school.email", "E-mail da escola"),
    PlaceholderInfo::new("currentDate", "Data atual por extenso"),
    PlaceholderInfo::new("currentYear", "Ano atual"),
    PlaceholderInfo::new("previousYear", "Ano anterior"),
];

/// The values one render can substitute.
struct RenderValues<'a> {
    student: &'a Student,
    school: &'a SchoolInfo,
    dates: DateContext,
}

impl RenderValues<'_> {
    fn get(&self, path: &str) -> Option<&str> {
        let value = match path {
            "student.name" => &self.student.name,
            "student.parentName" => &self.student.parent_name,
            "student.cpf" => &self.student.cpf,
            "student.className" => &self.student.class_name,
            "school.name" => &self.school.name,
            "school.cnpj" => &self.school.cnpj,
            "school.address" => &self.school.address,
            "school.phone" => &self.school.phone,
            "school.email" => &self.school.email,
            "currentDate" => &self.dates.current_date,
            "currentYear" => &self.dates.current_year,
            "previousYear" => &self.dates.previous_year,
            _ => return None,
        };
        Some(value.as_str())
    }
}

/// Renders the `declaration_type` document for `student`.
///
/// `today` is the local date used for the date placeholders. Placeholders
/// with no value are kept in the content as written and listed in
/// [`RenderedDeclaration::unresolved_placeholders`].
#[instrument(skip(student, settings), fields(student_id = %student.id))]
pub fn render_declaration(
    student: &Student,
    declaration_type: DeclarationType,
    settings: &SchoolSettings,
    today: NaiveDate,
) -> Result<RenderedDeclaration, DeclarationError> {
    let template = settings
        .declaration_templates
        .get(&declaration_type)
        .ok_or(DeclarationError::TemplateNotFound(declaration_type))?;

    let values = RenderValues {
        student,
        school: &settings.school,
        dates: DateContext::for_date(today),
    };
    let output = template::substitute(template, |path| values.get(path).map(Cow::Borrowed));

    if !output.unresolved.is_empty() {
        warn!(
            unresolved = ?output.unresolved,
            "Declaration rendered with unresolved placeholders"
        );
    }

    Ok(RenderedDeclaration {
        declaration_type,
        title: declaration_type.title().to_string(),
        content: output.content,
        unresolved_placeholders: output.unresolved,
    })
}

/// Staff with `generate_declarations` may render for any student of their
/// school. A parent with `view_declarations` may render only for the student
/// linked to their profile.
pub fn may_render_for(
    principal: &Principal,
    permissions: &PermissionSet,
    student_id: StudentId,
) -> bool {
    permissions.contains(Permission::GenerateDeclarations)
        || (permissions.contains(Permission::ViewDeclarations)
            && principal.is_parent_of(student_id))
}

pub fn is_known_placeholder(path: &str) -> bool {
    PLACEHOLDERS.iter().any(|p| p.path == path)
}

/// Placeholders in `template` that no render can resolve, as written
/// (`{{student.code}}`).
pub fn validate_template(template: &str) -> Vec<String> {
    template::placeholders(template)
        .into_iter()
        .filter(|path| !is_known_placeholder(path))
        .map(|path| format!("{{{{{path}}}}}"))
        .collect()
}

/// Returns `templates` with `content` stored for `declaration_type`.
pub fn update_template(
    templates: &DeclarationTemplates,
    declaration_type: DeclarationType,
    content: String,
) -> DeclarationTemplates {
    let mut next = templates.clone();
    next.insert(declaration_type, content);
    next
}

/// Returns `templates` without an entry for `declaration_type`, or `None`
/// when there was none.
pub fn remove_template(
    templates: &DeclarationTemplates,
    declaration_type: DeclarationType,
) -> Option<DeclarationTemplates> {
    if !templates.contains_key(&declaration_type) {
        debug!(declaration_type = %declaration_type, "No template to remove");
        return None;
    }
    let mut next = templates.clone();
    next.remove(&declaration_type);
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use schooldesk_models::{SchoolId, UserId, default_templates};

    fn student() -> Student {
        Student {
            id: StudentId::from_u128(10),
            school_id: SchoolId::from_u128(1),
            name: "Ana Clara Souza".to_string(),
            parent_name: "Marcos Souza".to_string(),
            cpf: "123.456.789-00".to_string(),
            class_name: "5º Ano A".to_string(),
        }
    }

    fn settings_with(declaration_type: DeclarationType, template: &str) -> SchoolSettings {
        let mut settings = SchoolSettings::new(SchoolInfo {
            name: "Escola Aurora".to_string(),
            cnpj: "12.345.678/0001-90".to_string(),
            ..Default::default()
        });
        settings.declaration_templates = DeclarationTemplates::new();
        settings
            .declaration_templates
            .insert(declaration_type, template.to_string());
        settings
    }

    fn march_5_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn test_enrollment_example() {
        let settings = settings_with(
            DeclarationType::Enrollment,
            "Aluno {{student.name}}, matriculado em {{currentYear}}.",
        );
        let rendered = render_declaration(
            &student(),
            DeclarationType::Enrollment,
            &settings,
            march_5_2024(),
        )
        .unwrap();

        assert_eq!(rendered.content, "Aluno Ana Clara Souza, matriculado em 2024.");
        assert_eq!(rendered.title, "Declaração de Matrícula");
        assert!(rendered.unresolved_placeholders.is_empty());
    }

    #[test]
    fn test_missing_template_is_an_error() {
        let settings = settings_with(DeclarationType::Enrollment, "x");
        let err = render_declaration(
            &student(),
            DeclarationType::Clearance,
            &settings,
            march_5_2024(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            DeclarationError::TemplateNotFound(DeclarationType::Clearance)
        );
    }

    #[test]
    fn test_empty_template_renders_empty() {
        let settings = settings_with(DeclarationType::Tax, "");
        let rendered =
            render_declaration(&student(), DeclarationType::Tax, &settings, march_5_2024())
                .unwrap();
        assert_eq!(rendered.content, "");
    }

    #[test]
    fn test_unregistered_placeholder_passes_through() {
        let settings = settings_with(
            DeclarationType::Enrollment,
            "Aluno: {{student.name}}, Código: {{student.internalCode}}",
        );
        let rendered = render_declaration(
            &student(),
            DeclarationType::Enrollment,
            &settings,
            march_5_2024(),
        )
        .unwrap();

        assert_eq!(
            rendered.content,
            "Aluno: Ana Clara Souza, Código: {{student.internalCode}}"
        );
        assert_eq!(
            rendered.unresolved_placeholders,
            vec!["{{student.internalCode}}"]
        );
    }

    #[test]
    fn test_date_placeholders() {
        let settings = settings_with(
            DeclarationType::Completion,
            "{{currentDate}} | {{currentYear}} | {{previousYear}}",
        );
        let rendered = render_declaration(
            &student(),
            DeclarationType::Completion,
            &settings,
            march_5_2024(),
        )
        .unwrap();
        assert_eq!(rendered.content, "05 de março de 2024 | 2024 | 2023");
    }

    #[test]
    fn test_missing_student_fields_render_blank() {
        let mut student = student();
        student.cpf = String::new();
        let settings = settings_with(DeclarationType::Tax, "CPF: [{{student.cpf}}]");
        let rendered =
            render_declaration(&student, DeclarationType::Tax, &settings, march_5_2024()).unwrap();
        assert_eq!(rendered.content, "CPF: []");
        assert!(rendered.unresolved_placeholders.is_empty());
    }

    #[test]
    fn test_render_is_deterministic() {
        let settings = SchoolSettings::new(SchoolInfo::default());
        for declaration_type in DeclarationType::ALL {
            let first =
                render_declaration(&student(), declaration_type, &settings, march_5_2024());
            let second =
                render_declaration(&student(), declaration_type, &settings, march_5_2024());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_catalog_resolves_every_placeholder() {
        let student = student();
        let school = SchoolInfo::default();
        let values = RenderValues {
            student: &student,
            school: &school,
            dates: DateContext::for_date(march_5_2024()),
        };
        for placeholder in PLACEHOLDERS {
            assert!(values.get(placeholder.path).is_some(), "{}", placeholder.path);
        }
    }

    #[test]
    fn test_default_templates_only_use_known_placeholders() {
        for (declaration_type, template) in default_templates() {
            assert!(
                validate_template(&template).is_empty(),
                "{declaration_type} uses unknown placeholders"
            );
        }
    }

    #[test]
    fn test_validate_template_reports_unknown_tokens() {
        let unknown = validate_template("{{student.name}} {{student.rg}} {{student.rg}} {{ano}}");
        assert_eq!(unknown, vec!["{{student.rg}}", "{{ano}}"]);
    }

    #[test]
    fn test_validate_template_reports_accented_tokens() {
        let unknown = validate_template("{{student.matrícula}} - {{school.name}}");
        assert_eq!(unknown, vec!["{{student.matrícula}}"]);
    }

    #[test]
    fn test_update_and_remove_template() {
        let templates = DeclarationTemplates::new();
        let updated = update_template(&templates, DeclarationType::Transfer, "T".to_string());
        assert_eq!(
            updated.get(&DeclarationType::Transfer).map(String::as_str),
            Some("T")
        );
        assert!(templates.is_empty());

        let removed = remove_template(&updated, DeclarationType::Transfer).unwrap();
        assert!(removed.is_empty());
        assert!(remove_template(&removed, DeclarationType::Transfer).is_none());
    }

    fn principal(student_id: Option<StudentId>) -> Principal {
        Principal {
            id: UserId::from_u128(7),
            email: "familia@exemplo.com".to_string(),
            name: "Marcos Souza".to_string(),
            role: Some("Responsável".to_string()),
            school_id: SchoolId::from_u128(1),
            student_id,
        }
    }

    #[test]
    fn test_parent_renders_only_linked_student() {
        let parent = principal(Some(StudentId::from_u128(10)));
        let perms: PermissionSet = [Permission::ViewDeclarations].into_iter().collect();

        assert!(may_render_for(&parent, &perms, StudentId::from_u128(10)));
        assert!(!may_render_for(&parent, &perms, StudentId::from_u128(11)));
        assert!(!may_render_for(
            &parent,
            &PermissionSet::empty(),
            StudentId::from_u128(10)
        ));
    }

    #[test]
    fn test_staff_renders_any_student() {
        let staff = principal(None);
        let perms: PermissionSet = [Permission::GenerateDeclarations].into_iter().collect();
        assert!(may_render_for(&staff, &perms, StudentId::from_u128(99)));
        assert!(!may_render_for(
            &staff,
            &[Permission::ViewDeclarations].into_iter().collect(),
            StudentId::from_u128(99)
        ));
    }
}
