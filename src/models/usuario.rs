use serde::{Deserialize, Serialize};

/// Fila del panel de administración
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Usuario {
    pub id: u64,
    pub email: String,
    pub habilitado: bool,
    #[serde(default)]
    pub is_admin: bool,
}
