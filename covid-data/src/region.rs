use serde::{Deserialize, Serialize};

/// A state in the region filter: `sigla` is the code sent back to the API,
/// `nome` the label shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    #[serde(rename = "sigla")]
    pub code: String,
    #[serde(rename = "nome")]
    pub name: String,
}

impl Region {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// A region known only by its code, labelled with the code itself.
    pub fn bare(code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            name: code.clone(),
            code,
        }
    }
}
