//! Bulk dataset lifecycle operations and their request/response bodies.

use crate::endpoints;
use serde::{Deserialize, Serialize};

/// One of the three dataset-wide operations the backend exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Load a new dataset (POST).
    Import,
    /// Re-read the existing dataset source (PUT).
    Refresh,
    /// Delete every stored record (DELETE). Irreversible.
    Purge,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Import, Operation::Refresh, Operation::Purge];

    pub fn path(self) -> &'static str {
        match self {
            Operation::Import => endpoints::IMPORT,
            Operation::Refresh => endpoints::REFRESH,
            Operation::Purge => endpoints::PURGE,
        }
    }

    /// Whether the request carries a JSON body. Purge is sent bare.
    pub fn sends_body(self) -> bool {
        !matches!(self, Operation::Purge)
    }

    pub fn is_irreversible(self) -> bool {
        matches!(self, Operation::Purge)
    }

    pub fn label(self) -> &'static str {
        match self {
            Operation::Import => "Importar Novo Dataset",
            Operation::Refresh => "Atualizar Dados Existentes",
            Operation::Purge => "Limpar Base de Dados",
        }
    }

    /// Text the user must accept before the request is sent.
    pub fn confirmation_prompt(self) -> &'static str {
        match self {
            Operation::Import => {
                "Tem certeza que deseja importar um novo dataset? Isso pode levar algum tempo."
            }
            Operation::Refresh => "Tem certeza que deseja atualizar os dados existentes?",
            Operation::Purge => {
                "ATENÇÃO: Tem certeza que deseja LIMPAR TODA a base de dados? Esta ação é irreversível!"
            }
        }
    }

    pub fn progress_message(self) -> &'static str {
        match self {
            Operation::Import => "Importando novo dataset... Por favor, aguarde.",
            Operation::Refresh => "Atualizando dados existentes... Por favor, aguarde.",
            Operation::Purge => "Limpando base de dados... Por favor, aguarde.",
        }
    }

    /// Shown on success when the server omits `message`.
    pub fn success_fallback(self) -> &'static str {
        match self {
            Operation::Import => "Dataset importado com sucesso.",
            Operation::Refresh => "Dados atualizados com sucesso.",
            Operation::Purge => "Base de dados limpa com sucesso.",
        }
    }

    /// Shown on failure when no server message is available.
    pub fn error_fallback(self) -> &'static str {
        match self {
            Operation::Import => "Erro ao importar dataset.",
            Operation::Refresh => "Erro ao atualizar dados.",
            Operation::Purge => "Erro ao limpar base de dados.",
        }
    }
}

/// JSON body for import and refresh. Serializes to `{}` unless a source
/// file is named.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OperationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

/// `{status, message}` reply of every management endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OperationResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
