//! Declaration types and the per-school template table.
//!
//! A template is free text containing `{{placeholder}}` tokens; rendering is
//! done by the declarations module of the API crate.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationType {
    /// Proof of enrollment
    Enrollment,
    /// Proof of completion of a school year
    Completion,
    /// Transfer to another school
    Transfer,
    /// Tuition paid, for income tax filing
    Tax,
    /// No outstanding debts
    Clearance,
}

impl DeclarationType {
    pub const ALL: [DeclarationType; 5] = [
        DeclarationType::Enrollment,
        DeclarationType::Completion,
        DeclarationType::Transfer,
        DeclarationType::Tax,
        DeclarationType::Clearance,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            DeclarationType::Enrollment => "enrollment",
            DeclarationType::Completion => "completion",
            DeclarationType::Transfer => "transfer",
            DeclarationType::Tax => "tax",
            DeclarationType::Clearance => "clearance",
        }
    }

    /// Document title.
    pub const fn title(self) -> &'static str {
        match self {
            DeclarationType::Enrollment => "Declaração de Matrícula",
            DeclarationType::Completion => "Declaração de Conclusão",
            DeclarationType::Transfer => "Declaração de Transferência",
            DeclarationType::Tax => "Declaração para Imposto de Renda",
            DeclarationType::Clearance => "Declaração de Quitação de Débitos",
        }
    }
}

impl fmt::Display for DeclarationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDeclarationType(pub String);

impl fmt::Display for UnknownDeclarationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown declaration type '{}'", self.0)
    }
}

impl std::error::Error for UnknownDeclarationType {}

impl FromStr for DeclarationType {
    type Err = UnknownDeclarationType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeclarationType::ALL
            .into_iter()
            .find(|ty| ty.key() == s)
            .ok_or_else(|| UnknownDeclarationType(s.to_string()))
    }
}

pub type DeclarationTemplates = BTreeMap<DeclarationType, String>;

/// The templates a new school starts with.
pub fn default_templates() -> DeclarationTemplates {
    let mut templates = DeclarationTemplates::new();

    templates.insert(
        DeclarationType::Enrollment,
        "Declaramos, para os devidos fins, que {{student.name}}, inscrito(a) no CPF \
         {{student.cpf}}, filho(a) de {{student.parentName}}, encontra-se regularmente \
         matriculado(a) na turma {{student.className}} desta instituição no ano letivo \
         de {{currentYear}}.\n\n{{school.name}} - CNPJ {{school.cnpj}}\n{{currentDate}}"
            .to_string(),
    );
    templates.insert(
        DeclarationType::Completion,
        "Declaramos que {{student.name}}, inscrito(a) no CPF {{student.cpf}}, concluiu \
         com aproveitamento a turma {{student.className}} no ano letivo de \
         {{previousYear}}.\n\n{{school.name}} - CNPJ {{school.cnpj}}\n{{currentDate}}"
            .to_string(),
    );
    templates.insert(
        DeclarationType::Transfer,
        "Declaramos que {{student.name}}, filho(a) de {{student.parentName}}, esteve \
         matriculado(a) na turma {{student.className}} desta instituição no ano letivo \
         de {{currentYear}}, tendo sua transferência solicitada pelo(a) responsável.\n\n\
         {{school.name}} - CNPJ {{school.cnpj}}\n{{school.address}}\n{{currentDate}}"
            .to_string(),
    );
    templates.insert(
        DeclarationType::Tax,
        "Declaramos, para fins de Imposto de Renda, que {{student.parentName}} efetuou \
         o pagamento das mensalidades escolares referentes ao(à) aluno(a) \
         {{student.name}}, CPF {{student.cpf}}, durante o ano de {{previousYear}}.\n\n\
         {{school.name}} - CNPJ {{school.cnpj}}\n{{currentDate}}"
            .to_string(),
    );
    templates.insert(
        DeclarationType::Clearance,
        "Declaramos que o(a) responsável {{student.parentName}} não possui débitos \
         junto a esta instituição referentes ao(à) aluno(a) {{student.name}}, turma \
         {{student.className}}, até a presente data.\n\n{{school.name}} - CNPJ \
         {{school.cnpj}}\n{{currentDate}}"
            .to_string(),
    );

    templates
}
