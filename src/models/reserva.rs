use serde::{Deserialize, Serialize};

/// Fila de ocupación que devuelve GET reservas/cantidad
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ReservaCantidad {
    pub cancha: String,
    pub horario: String,
    pub cantidad: u32,
}

/// Cuerpo de éxito de la API: `{"msg": "..."}`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct MsgResponse {
    #[serde(default)]
    pub msg: Option<String>,
}

/// Una reserva propia, tal como la devuelve GET reservas/mis-reservas
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Reserva {
    pub id: u64,
    pub cancha: String,
    pub horario: String,
    #[serde(default)]
    pub fecha: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializa_el_payload_de_cantidades() {
        let json = r#"[{"cancha":"Blindex A","horario":"09:00-10:00","cantidad":2}]"#;
        let filas: Vec<ReservaCantidad> = serde_json::from_str(json).unwrap();
        assert_eq!(filas.len(), 1);
        assert_eq!(filas[0].cancha, "Blindex A");
        assert_eq!(filas[0].horario, "09:00-10:00");
        assert_eq!(filas[0].cantidad, 2);
    }

    #[test]
    fn el_msg_puede_faltar() {
        let respuesta: MsgResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(respuesta.msg, None);
    }
}
