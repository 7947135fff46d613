// ============================================================================
// RESERVA SERVICE - Endpoints de reservas
// ============================================================================
// La reserva en sí viaja con el bearer token; el resto de los endpoints se
// autentican con la cookie de sesión que el cliente incluye siempre.
// ============================================================================

use serde_json::json;

use crate::models::{MsgResponse, Reserva, ReservaCantidad};
use crate::services::api_client::{extraer_detalle, ApiClient, Cuerpo, Metodo, Opciones};

/// Ocupación actual de todas las celdas (cancha, horario).
pub async fn obtener_cantidades(cliente: &ApiClient) -> Result<Vec<ReservaCantidad>, String> {
    let response = cliente.get("reservas/cantidad", &[]).await?;

    if !response.ok() {
        return Err(extraer_detalle(&response).await);
    }

    response
        .json::<Vec<ReservaCantidad>>()
        .await
        .map_err(|e| format!("Error interpretando cantidades: {}", e))
}

/// Reserva un turno. Devuelve el mensaje de confirmación del servidor.
pub async fn reservar(
    cliente: &ApiClient,
    token: &str,
    cancha: &str,
    horario: &str,
) -> Result<String, String> {
    log::info!("🎾 Reservando {} a las {}", cancha, horario);

    let response = cliente
        .request(
            "reservas/reservar",
            Opciones {
                metodo: Metodo::Post,
                headers: vec![(
                    "Authorization".to_string(),
                    format!("Bearer {}", token),
                )],
                cuerpo: Cuerpo::Json(json!({
                    "cancha": cancha,
                    "horario": horario,
                })),
                ..Default::default()
            },
        )
        .await?;

    if !response.ok() {
        return Err(extraer_detalle(&response).await);
    }

    let MsgResponse { msg } = response.json().await.unwrap_or_default();
    Ok(msg.unwrap_or_else(|| "Reserva confirmada".to_string()))
}

/// Reservas propias del usuario autenticado.
pub async fn mis_reservas(cliente: &ApiClient) -> Result<Vec<Reserva>, String> {
    let response = cliente.get("reservas/mis-reservas", &[]).await?;

    if !response.ok() {
        return Err(extraer_detalle(&response).await);
    }

    response
        .json::<Vec<Reserva>>()
        .await
        .map_err(|e| format!("Error interpretando reservas: {}", e))
}

/// Cancela una reserva propia.
pub async fn cancelar_reserva(cliente: &ApiClient, id: u64) -> Result<String, String> {
    log::info!("🗑️ Cancelando reserva {}", id);

    let response = cliente.delete(&format!("reservas/{}", id)).await?;

    if !response.ok() {
        return Err(extraer_detalle(&response).await);
    }

    let MsgResponse { msg } = response.json().await.unwrap_or_default();
    Ok(msg.unwrap_or_else(|| "Reserva cancelada".to_string()))
}
