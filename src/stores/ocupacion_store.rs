// ============================================================================
// OCUPACION STORE - Vista local de ocupación por (cancha, horario)
// ============================================================================
// Se puebla con el fetch inicial y se reconcilia localmente después de cada
// reserva confirmada. El tope de 4 jugadores lo hace cumplir el servidor; acá
// sólo se muestra.
// ============================================================================

use std::collections::HashMap;

use crate::models::ReservaCantidad;

pub const CAPACIDAD_MAXIMA: u32 = 4;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct OcupacionStore {
    cantidades: HashMap<(String, String), u32>,
}

impl OcupacionStore {
    pub fn desde_cantidades(filas: Vec<ReservaCantidad>) -> Self {
        let cantidades = filas
            .into_iter()
            .map(|fila| ((fila.cancha, fila.horario), fila.cantidad))
            .collect();
        Self { cantidades }
    }

    /// Cantidad actual de una celda; sin entrada, la celda está vacía.
    pub fn cantidad(&self, cancha: &str, horario: &str) -> u32 {
        self.cantidades
            .get(&(cancha.to_string(), horario.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Incremento local tras una reserva confirmada por el servidor.
    pub fn incrementar(&mut self, cancha: &str, horario: &str) {
        *self
            .cantidades
            .entry((cancha.to_string(), horario.to_string()))
            .or_insert(0) += 1;
    }

    /// Etiqueta "n/4" de la celda.
    pub fn etiqueta(&self, cancha: &str, horario: &str) -> String {
        format!("{}/{}", self.cantidad(cancha, horario), CAPACIDAD_MAXIMA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fila(cancha: &str, horario: &str, cantidad: u32) -> ReservaCantidad {
        ReservaCantidad {
            cancha: cancha.to_string(),
            horario: horario.to_string(),
            cantidad,
        }
    }

    #[test]
    fn el_payload_del_servidor_llena_solo_sus_celdas() {
        let ocupacion = OcupacionStore::desde_cantidades(vec![fila("Blindex A", "09:00-10:00", 2)]);
        assert_eq!(ocupacion.etiqueta("Blindex A", "09:00-10:00"), "2/4");
        assert_eq!(ocupacion.etiqueta("Blindex B", "09:00-10:00"), "0/4");
        assert_eq!(ocupacion.etiqueta("Blindex A", "09:30-10:30"), "0/4");
    }

    #[test]
    fn incrementar_toca_exactamente_una_celda() {
        let mut ocupacion =
            OcupacionStore::desde_cantidades(vec![fila("Blindex A", "09:00-10:00", 2)]);
        ocupacion.incrementar("Blindex A", "09:00-10:00");
        assert_eq!(ocupacion.cantidad("Blindex A", "09:00-10:00"), 3);
        assert_eq!(ocupacion.cantidad("Blindex B", "09:00-10:00"), 0);
        assert_eq!(ocupacion.cantidad("Cemento A", "10:00-11:00"), 0);
    }

    #[test]
    fn reservar_en_una_grilla_vacia() {
        // Grilla recién montada sin ocupación en el servidor
        let mut ocupacion = OcupacionStore::default();
        assert_eq!(ocupacion.etiqueta("Cemento Techada", "15:00-16:00"), "0/4");

        // Reserva confirmada: sólo esa celda pasa a 1/4
        ocupacion.incrementar("Cemento Techada", "15:00-16:00");
        assert_eq!(ocupacion.etiqueta("Cemento Techada", "15:00-16:00"), "1/4");
        assert_eq!(ocupacion.etiqueta("Cemento Techada", "15:30-16:30"), "0/4");
        assert_eq!(ocupacion.etiqueta("Blindex A", "15:00-16:00"), "0/4");
    }
}
