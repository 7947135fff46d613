use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_auth_context;
use crate::models::Usuario;
use crate::services::admin_service;

/// Gestión de usuarios. Sólo visible para administradores; el gate real
/// lo hace el servidor con el token.
#[function_component(AdminPanel)]
pub fn admin_panel() -> Html {
    let auth = use_auth_context();
    let usuarios = use_state(Vec::<Usuario>::new);
    let error = use_state(|| None::<String>);

    let es_admin = auth.sesion().is_admin;

    {
        let auth = auth.clone();
        let usuarios = usuarios.clone();
        let error = error.clone();
        use_effect_with(es_admin, move |&es_admin| {
            if es_admin {
                let cliente = auth.cliente();
                spawn_local(async move {
                    match admin_service::listar_usuarios(&cliente).await {
                        Ok(filas) => {
                            log::info!("👥 {} usuarios", filas.len());
                            usuarios.set(filas);
                            error.set(None);
                        }
                        Err(detalle) => {
                            log::error!("❌ Error listando usuarios: {}", detalle);
                            error.set(Some(detalle));
                        }
                    }
                });
            }
            || ()
        });
    }

    let on_toggle = {
        let auth = auth.clone();
        let usuarios = usuarios.clone();
        let error = error.clone();
        Callback::from(move |(id, habilitado): (u64, bool)| {
            let cliente = auth.cliente();
            let usuarios = usuarios.clone();
            let error = error.clone();
            spawn_local(async move {
                match admin_service::habilitar_usuario(&cliente, id, habilitado).await {
                    Ok(msg) => {
                        log::info!("✅ {}", msg);
                        let actualizados: Vec<Usuario> = usuarios
                            .iter()
                            .map(|usuario| {
                                if usuario.id == id {
                                    let mut usuario = usuario.clone();
                                    usuario.habilitado = habilitado;
                                    usuario
                                } else {
                                    usuario.clone()
                                }
                            })
                            .collect();
                        usuarios.set(actualizados);
                    }
                    Err(detalle) => {
                        log::error!("❌ Error actualizando usuario: {}", detalle);
                        error.set(Some(detalle));
                    }
                }
            });
        })
    };

    if !es_admin {
        return html! {
            <div class="admin-panel">
                <p class="sin-acceso">{"Acceso restringido a administradores"}</p>
            </div>
        };
    }

    html! {
        <div class="admin-panel">
            <h2>{"Usuarios"}</h2>
            {
                if let Some(error) = &*error {
                    html! { <div class="aviso aviso-error">{ error }</div> }
                } else {
                    html! {}
                }
            }
            <table>
                <thead>
                    <tr>
                        <th>{"Email"}</th>
                        <th>{"Rol"}</th>
                        <th>{"Estado"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for usuarios.iter().map(|usuario| {
                        let onclick = {
                            let on_toggle = on_toggle.clone();
                            let id = usuario.id;
                            let habilitar = !usuario.habilitado;
                            Callback::from(move |_: MouseEvent| on_toggle.emit((id, habilitar)))
                        };
                        html! {
                            <tr key={usuario.id.to_string()}>
                                <td>{ &usuario.email }</td>
                                <td>{ if usuario.is_admin { "Admin" } else { "Usuario" } }</td>
                                <td>{ if usuario.habilitado { "Habilitado" } else { "Deshabilitado" } }</td>
                                <td>
                                    <button class="btn-toggle" {onclick}>
                                        { if usuario.habilitado { "Deshabilitar" } else { "Habilitar" } }
                                    </button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}
