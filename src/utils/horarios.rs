// ============================================================================
// HORARIOS - Catálogo fijo de turnos del día
// ============================================================================
// Turnos de 1 hora cada 30 minutos, desde las 09:00. El último turno debe
// terminar antes de la medianoche.
// ============================================================================

/// Las cinco canchas del club
pub const CANCHAS: [&str; 5] = [
    "Blindex A",
    "Blindex B",
    "Cemento A",
    "Cemento B",
    "Cemento Techada",
];

const APERTURA_MIN: u32 = 9 * 60;
const PASO_MIN: u32 = 30;
const DURACION_MIN: u32 = 60;
const MEDIANOCHE_MIN: u32 = 24 * 60;

thread_local! {
    // El catálogo es inmutable: se genera una sola vez por proceso
    static HORARIOS: Vec<String> = generar_horarios();
}

/// Catálogo de turnos del día, compartido por toda la app.
pub fn horarios() -> Vec<String> {
    HORARIOS.with(|h| h.clone())
}

/// Genera las etiquetas "HH:MM-HH:MM" de todos los turnos. Pura y determinista.
pub fn generar_horarios() -> Vec<String> {
    let mut etiquetas = Vec::new();
    let mut inicio = APERTURA_MIN;
    loop {
        let fin = inicio + DURACION_MIN;
        if fin >= MEDIANOCHE_MIN {
            break;
        }
        etiquetas.push(format!("{}-{}", formatear_hora(inicio), formatear_hora(fin)));
        inicio += PASO_MIN;
    }
    etiquetas
}

fn formatear_hora(minutos: u32) -> String {
    format!("{:02}:{:02}", minutos / 60, minutos % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fin_en_minutos(etiqueta: &str) -> u32 {
        let fin = etiqueta.split('-').nth(1).unwrap();
        let (hh, mm) = fin.split_once(':').unwrap();
        hh.parse::<u32>().unwrap() * 60 + mm.parse::<u32>().unwrap()
    }

    #[test]
    fn el_catalogo_es_determinista() {
        assert_eq!(generar_horarios(), generar_horarios());
        assert_eq!(horarios(), generar_horarios());
    }

    #[test]
    fn el_primer_turno_arranca_a_las_nueve() {
        assert_eq!(generar_horarios().first().unwrap(), "09:00-10:00");
    }

    #[test]
    fn ningun_turno_termina_en_la_medianoche_o_despues() {
        for etiqueta in generar_horarios() {
            assert!(fin_en_minutos(&etiqueta) < 24 * 60, "turno fuera de rango: {}", etiqueta);
        }
    }

    #[test]
    fn el_catalogo_tiene_largo_fijo() {
        let catalogo = generar_horarios();
        assert_eq!(catalogo.len(), 28);
        assert_eq!(catalogo.last().unwrap(), "22:30-23:30");
    }

    #[test]
    fn snapshot_de_los_primeros_turnos() {
        let catalogo = generar_horarios();
        assert_eq!(
            &catalogo[..4],
            &[
                "09:00-10:00".to_string(),
                "09:30-10:30".to_string(),
                "10:00-11:00".to_string(),
                "10:30-11:30".to_string(),
            ]
        );
    }
}
