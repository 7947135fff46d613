use serde_json::json;

use crate::models::LoginResponse;
use crate::services::api_client::{extraer_detalle, ApiClient, Cuerpo};

/// Login contra la API. Un 401 acá es un login fallido normal, no una sesión
/// vencida, así que el cliente va sin callback.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, String> {
    log::info!("🔐 Iniciando sesión: {}", email);

    let cliente = ApiClient::new();
    let cuerpo = Cuerpo::Json(json!({
        "email": email,
        "password": password,
    }));

    let response = cliente.post("usuarios/login", cuerpo).await?;

    if response.ok() {
        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| format!("Error interpretando respuesta: {}", e))
    } else {
        Err(extraer_detalle(&response).await)
    }
}
