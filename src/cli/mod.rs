//! Administrative commands run against a tenant directory file.
//!
//! These are the functions behind `schooldesk-cli`; each returns the text to
//! print so it can be tested without a terminal.

use std::fmt::Write as _;

use anyhow::{Context, anyhow};
use chrono::NaiveDate;

use schooldesk_auth::create_access_token;
use schooldesk_config::JwtConfig;
use schooldesk_models::{
    DeclarationType, Directory, RoleName, SchoolId, StudentId, TenantRecord, UserId,
};

use crate::modules::access::service::compute_effective_permissions;
use crate::modules::declarations::service::{render_declaration, validate_template};

fn school(directory: &Directory, school_id: SchoolId) -> anyhow::Result<&TenantRecord> {
    directory
        .school(school_id)
        .ok_or_else(|| anyhow!("School {} not found", school_id))
}

/// Renders one declaration and returns its title and content.
pub fn render(
    directory: &Directory,
    school_id: SchoolId,
    student_id: StudentId,
    declaration_type: DeclarationType,
    today: NaiveDate,
) -> anyhow::Result<String> {
    let tenant = school(directory, school_id)?;
    let student = tenant
        .student(student_id)
        .ok_or_else(|| anyhow!("Student {} not found in school {}", student_id, school_id))?;

    let rendered = render_declaration(student, declaration_type, &tenant.settings, today)?;

    let mut out = format!("{}\n\n{}\n", rendered.title, rendered.content);
    if !rendered.unresolved_placeholders.is_empty() {
        let _ = write!(
            out,
            "\nUnresolved placeholders: {}\n",
            rendered.unresolved_placeholders.join(", ")
        );
    }
    Ok(out)
}

/// Reports, per declaration type, a missing template or the placeholders it
/// uses that no render can resolve.
pub fn check_templates(directory: &Directory, school_id: SchoolId) -> anyhow::Result<String> {
    let tenant = school(directory, school_id)?;
    let mut out = String::new();

    for declaration_type in DeclarationType::ALL {
        let line = match tenant.settings.declaration_templates.get(&declaration_type) {
            None => "missing template".to_string(),
            Some(template) => {
                let unknown = validate_template(template);
                if unknown.is_empty() {
                    "ok".to_string()
                } else {
                    format!("unknown placeholders: {}", unknown.join(", "))
                }
            }
        };
        let _ = writeln!(out, "{:<10} {}", declaration_type.key(), line);
    }

    Ok(out)
}

/// Lists the effective permissions of `role_label` in a school, one per line.
pub fn permissions(
    directory: &Directory,
    school_id: SchoolId,
    role_label: &str,
) -> anyhow::Result<String> {
    let tenant = school(directory, school_id)?;
    let role: RoleName = role_label.parse()?;

    let effective = compute_effective_permissions(Some(role), &tenant.settings.roles);
    let mut out = String::new();
    for permission in effective.iter() {
        let _ = writeln!(out, "{}", permission);
    }
    Ok(out)
}

/// Signs a development access token for a user of the directory.
pub fn issue_token(
    directory: &Directory,
    user_id: UserId,
    jwt_config: &JwtConfig,
) -> anyhow::Result<String> {
    let tenant = directory
        .school_of_user(user_id)
        .ok_or_else(|| anyhow!("User {} not found", user_id))?;
    let profile = tenant
        .user(user_id)
        .context("User profile disappeared from its school")?;

    create_access_token(user_id.into_inner(), &profile.email, jwt_config)
        .map_err(|err| err.error.context("Failed to sign token"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use schooldesk_auth::verify_token;
    use schooldesk_models::{SchoolInfo, SchoolSettings, Student, UserProfile};

    fn directory() -> Directory {
        let mut tenant = TenantRecord::new(
            SchoolId::from_u128(1),
            SchoolSettings::new(SchoolInfo {
                name: "Escola Aurora".to_string(),
                ..Default::default()
            }),
        );
        tenant.students.push(Student {
            id: StudentId::from_u128(10),
            school_id: SchoolId::from_u128(1),
            name: "Ana Clara Souza".to_string(),
            parent_name: "Marcos Souza".to_string(),
            cpf: "123.456.789-00".to_string(),
            class_name: "5º Ano A".to_string(),
        });
        tenant.users.push(UserProfile {
            id: UserId::from_u128(100),
            email: "secretaria@aurora.com.br".to_string(),
            name: "Marta".to_string(),
            role: Some("Secretário(a)".to_string()),
            student_id: None,
        });
        tenant
            .settings
            .declaration_templates
            .insert(DeclarationType::Tax, "{{student.name}} {{student.rg}}".to_string());
        tenant
            .settings
            .declaration_templates
            .remove(&DeclarationType::Clearance);
        Directory {
            schools: vec![tenant],
        }
    }

    fn jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "cli-test-secret".to_string(),
            audience: None,
            access_token_expiry: 600,
        }
    }

    #[test]
    fn test_render_prints_title_and_unresolved() {
        let out = render(
            &directory(),
            SchoolId::from_u128(1),
            StudentId::from_u128(10),
            DeclarationType::Tax,
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        )
        .unwrap();
        assert!(out.starts_with("Declaração para Imposto de Renda\n\nAna Clara Souza {{student.rg}}"));
        assert!(out.contains("Unresolved placeholders: {{student.rg}}"));
    }

    #[test]
    fn test_render_missing_template_fails() {
        let err = render(
            &directory(),
            SchoolId::from_u128(1),
            StudentId::from_u128(10),
            DeclarationType::Clearance,
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("clearance"));
    }

    #[test]
    fn test_check_templates_report() {
        let out = check_templates(&directory(), SchoolId::from_u128(1)).unwrap();
        assert!(out.contains("enrollment ok"));
        assert!(out.contains("tax        unknown placeholders: {{student.rg}}"));
        assert!(out.contains("clearance  missing template"));
    }

    #[test]
    fn test_permissions_for_role() {
        let out = permissions(&directory(), SchoolId::from_u128(1), "Secretário(a)").unwrap();
        assert!(out.lines().any(|line| line == "create_students"));
        assert!(!out.lines().any(|line| line == "manage_users"));
        assert!(permissions(&directory(), SchoolId::from_u128(1), "Zelador").is_err());
    }

    #[test]
    fn test_issue_token_for_known_user() {
        let config = jwt_config();
        let token = issue_token(&directory(), UserId::from_u128(100), &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.sub, UserId::from_u128(100).to_string());
        assert!(issue_token(&directory(), UserId::from_u128(5), &config).is_err());
    }
}
