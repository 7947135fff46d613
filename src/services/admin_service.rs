// ============================================================================
// ADMIN SERVICE - Gestión de usuarios (sólo administradores)
// ============================================================================
// El permiso real lo valida el servidor con la cookie de sesión; el flag
// is_admin del front sólo decide qué se muestra.
// ============================================================================

use serde_json::json;

use crate::models::{MsgResponse, Usuario};
use crate::services::api_client::{extraer_detalle, ApiClient, Cuerpo};

pub async fn listar_usuarios(cliente: &ApiClient) -> Result<Vec<Usuario>, String> {
    let response = cliente.get("usuarios", &[]).await?;

    if !response.ok() {
        return Err(extraer_detalle(&response).await);
    }

    response
        .json::<Vec<Usuario>>()
        .await
        .map_err(|e| format!("Error interpretando usuarios: {}", e))
}

/// Habilita o deshabilita la cuenta de un usuario.
pub async fn habilitar_usuario(
    cliente: &ApiClient,
    id: u64,
    habilitado: bool,
) -> Result<String, String> {
    log::info!("👤 Usuario {} → habilitado={}", id, habilitado);

    let response = cliente
        .put(
            &format!("usuarios/{}/habilitar", id),
            Cuerpo::Json(json!({ "habilitado": habilitado })),
        )
        .await?;

    if !response.ok() {
        return Err(extraer_detalle(&response).await);
    }

    let MsgResponse { msg } = response.json().await.unwrap_or_default();
    Ok(msg.unwrap_or_else(|| "Usuario actualizado".to_string()))
}
