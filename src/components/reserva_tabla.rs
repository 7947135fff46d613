// ============================================================================
// RESERVA TABLA - Grilla de canchas x horarios
// ============================================================================
// La ocupación se trae del servidor una sola vez al montar; después se
// reconcilia localmente con cada reserva confirmada. No hay polling: el tope
// real de 4 jugadores lo decide el servidor.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_auth_context;
use crate::services::{reserva_service, ApiClient};
use crate::stores::ocupacion_store::{OcupacionStore, CAPACIDAD_MAXIMA};
use crate::utils::horarios::{horarios, CANCHAS};

const AVISO_MS: u32 = 4_000;

#[derive(Clone, PartialEq)]
struct Aviso {
    texto: String,
    es_error: bool,
}

impl Aviso {
    fn exito(texto: String) -> Self {
        Self {
            texto,
            es_error: false,
        }
    }

    fn error(texto: impl Into<String>) -> Self {
        Self {
            texto: texto.into(),
            es_error: true,
        }
    }
}

#[function_component(ReservaTabla)]
pub fn reserva_tabla() -> Html {
    let auth = use_auth_context();
    let ocupacion = use_state(OcupacionStore::default);
    let seleccion = use_state(|| None::<(String, String)>);
    let aviso = use_state(|| None::<Aviso>);

    let turnos = horarios();

    // Aviso auto-descartable
    let mostrar_aviso = {
        let aviso = aviso.clone();
        Callback::from(move |nuevo: Aviso| {
            aviso.set(Some(nuevo));
            let aviso = aviso.clone();
            Timeout::new(AVISO_MS, move || aviso.set(None)).forget();
        })
    };

    // Fetch inicial de ocupación. El flag de vida descarta respuestas que
    // lleguen después del desmontaje. Un error acá no es fatal: la grilla
    // se muestra igual, vacía.
    {
        let ocupacion = ocupacion.clone();
        use_effect_with((), move |_| {
            let vivo = Rc::new(Cell::new(true));
            {
                let vivo = vivo.clone();
                spawn_local(async move {
                    let cliente = ApiClient::new();
                    match reserva_service::obtener_cantidades(&cliente).await {
                        Ok(filas) => {
                            if vivo.get() {
                                log::info!("📋 Ocupación cargada: {} celdas", filas.len());
                                ocupacion.set(OcupacionStore::desde_cantidades(filas));
                            }
                        }
                        Err(e) => {
                            log::error!("❌ Error cargando ocupación: {}", e);
                        }
                    }
                });
            }
            move || vivo.set(false)
        });
    }

    // Click en una celda: con sesión, reserva; sin sesión, sólo avisa.
    let on_celda = {
        let auth = auth.clone();
        let ocupacion = ocupacion.clone();
        let seleccion = seleccion.clone();
        let mostrar_aviso = mostrar_aviso.clone();
        Callback::from(move |(cancha, horario): (String, String)| {
            let sesion = auth.sesion();
            if !sesion.is_authenticated {
                mostrar_aviso.emit(Aviso::error("Iniciá sesión para reservar un turno"));
                return;
            }

            seleccion.set(Some((cancha.clone(), horario.clone())));

            let token = sesion.token.unwrap_or_default();
            let cliente = auth.cliente();
            let ocupacion = ocupacion.clone();
            let mostrar_aviso = mostrar_aviso.clone();
            spawn_local(async move {
                match reserva_service::reservar(&cliente, &token, &cancha, &horario).await {
                    Ok(msg) => {
                        // Incremento optimista: sólo la celda reservada
                        let mut nueva = (*ocupacion).clone();
                        nueva.incrementar(&cancha, &horario);
                        ocupacion.set(nueva);
                        mostrar_aviso.emit(Aviso::exito(msg));
                    }
                    Err(detalle) => {
                        log::error!("❌ Error reservando: {}", detalle);
                        mostrar_aviso.emit(Aviso::error(detalle));
                    }
                }
            });
        })
    };

    html! {
        <div class="reserva-tabla">
            {
                if let Some(aviso) = &*aviso {
                    let clase = if aviso.es_error { "aviso aviso-error" } else { "aviso aviso-exito" };
                    html! { <div class={clase}>{ &aviso.texto }</div> }
                } else {
                    html! {}
                }
            }
            <table>
                <thead>
                    <tr>
                        <th class="col-horario">{"Horario"}</th>
                        { for CANCHAS.iter().map(|cancha| html! { <th>{ *cancha }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for turnos.iter().map(|horario| html! {
                        <tr key={horario.clone()}>
                            <td class="col-horario">{ horario }</td>
                            { for CANCHAS.iter().map(|cancha| {
                                let cancha: &str = cancha;
                                let es_seleccionada = matches!(
                                    &*seleccion,
                                    Some((c, h)) if c.as_str() == cancha && h == horario
                                );
                                let completa =
                                    ocupacion.cantidad(cancha, horario) >= CAPACIDAD_MAXIMA;

                                let onclick = {
                                    let on_celda = on_celda.clone();
                                    let cancha = cancha.to_string();
                                    let horario = horario.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        on_celda.emit((cancha.clone(), horario.clone()))
                                    })
                                };

                                html! {
                                    <td
                                        class={classes!(
                                            "celda",
                                            es_seleccionada.then_some("seleccionada"),
                                            completa.then_some("completa"),
                                        )}
                                        {onclick}
                                    >
                                        { ocupacion.etiqueta(cancha, horario) }
                                    </td>
                                }
                            }) }
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}
