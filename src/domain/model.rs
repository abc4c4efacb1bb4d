use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Cpf,
    Cnpj,
}

impl DocumentKind {
    pub fn digit_count(self) -> usize {
        match self {
            DocumentKind::Cpf => 11,
            DocumentKind::Cnpj => 14,
        }
    }

    pub fn from_digit_count(count: usize) -> Option<Self> {
        [DocumentKind::Cpf, DocumentKind::Cnpj]
            .into_iter()
            .find(|kind| kind.digit_count() == count)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Cpf => write!(f, "CPF"),
            DocumentKind::Cnpj => write!(f, "CNPJ"),
        }
    }
}

/// A CPF or CNPJ whose check digits have been verified.
///
/// Only constructed through `Document::parse`, so holding one means the
/// digits are valid. `Display` renders the masked form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Document {
    pub(crate) kind: DocumentKind,
    pub(crate) digits: String,
}

impl Document {
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub cep: String,
    pub street: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub ibge: Option<String>,
    pub ddd: Option<String>,
}
