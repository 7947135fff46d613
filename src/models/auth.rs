use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub habilitado: bool,
}

/// Cuerpo de error de la API: `{"detail": "..."}`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct DetalleError {
    #[serde(default)]
    pub detail: Option<String>,
}
