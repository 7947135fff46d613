use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_auth_context;
use crate::models::Reserva;
use crate::services::reserva_service;

/// Historial de reservas propias, con cancelación.
#[function_component(MisReservas)]
pub fn mis_reservas() -> Html {
    let auth = use_auth_context();
    let reservas = use_state(Vec::<Reserva>::new);
    let cargando = use_state(|| false);
    let error = use_state(|| None::<String>);

    let autenticado = auth.sesion().is_authenticated;

    {
        let auth = auth.clone();
        let reservas = reservas.clone();
        let cargando = cargando.clone();
        let error = error.clone();
        use_effect_with(autenticado, move |&autenticado| {
            if autenticado {
                let cliente = auth.cliente();
                cargando.set(true);
                spawn_local(async move {
                    match reserva_service::mis_reservas(&cliente).await {
                        Ok(filas) => {
                            log::info!("📋 {} reservas propias", filas.len());
                            reservas.set(filas);
                            error.set(None);
                        }
                        Err(detalle) => {
                            log::error!("❌ Error cargando reservas: {}", detalle);
                            error.set(Some(detalle));
                        }
                    }
                    cargando.set(false);
                });
            } else {
                reservas.set(Vec::new());
            }
            || ()
        });
    }

    let on_cancelar = {
        let auth = auth.clone();
        let reservas = reservas.clone();
        let error = error.clone();
        Callback::from(move |id: u64| {
            let cliente = auth.cliente();
            let reservas = reservas.clone();
            let error = error.clone();
            spawn_local(async move {
                match reserva_service::cancelar_reserva(&cliente, id).await {
                    Ok(msg) => {
                        log::info!("✅ {}", msg);
                        let restantes: Vec<Reserva> = reservas
                            .iter()
                            .filter(|reserva| reserva.id != id)
                            .cloned()
                            .collect();
                        reservas.set(restantes);
                    }
                    Err(detalle) => {
                        log::error!("❌ Error cancelando: {}", detalle);
                        error.set(Some(detalle));
                    }
                }
            });
        })
    };

    if !autenticado {
        return html! {
            <div class="mis-reservas">
                <p class="sin-sesion">{"Iniciá sesión para ver tus reservas"}</p>
            </div>
        };
    }

    html! {
        <div class="mis-reservas">
            <h2>{"Mis reservas"}</h2>
            {
                if let Some(error) = &*error {
                    html! { <div class="aviso aviso-error">{ error }</div> }
                } else {
                    html! {}
                }
            }
            {
                if *cargando {
                    html! { <p class="cargando">{"Cargando..."}</p> }
                } else if reservas.is_empty() {
                    html! { <p class="vacio">{"Todavía no tenés reservas"}</p> }
                } else {
                    html! {
                        <ul class="lista-reservas">
                            { for reservas.iter().map(|reserva| {
                                let onclick = {
                                    let on_cancelar = on_cancelar.clone();
                                    let id = reserva.id;
                                    Callback::from(move |_: MouseEvent| on_cancelar.emit(id))
                                };
                                html! {
                                    <li key={reserva.id.to_string()} class="reserva">
                                        <span class="cancha">{ &reserva.cancha }</span>
                                        <span class="horario">{ &reserva.horario }</span>
                                        {
                                            if let Some(fecha) = &reserva.fecha {
                                                html! { <span class="fecha">{ fecha }</span> }
                                            } else {
                                                html! {}
                                            }
                                        }
                                        <button class="btn-cancelar" {onclick}>{"Cancelar"}</button>
                                    </li>
                                }
                            }) }
                        </ul>
                    }
                }
            }
        </div>
    }
}
