use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_auth_context;
use crate::services::auth_service;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    /// Se emite después de un login exitoso (volver a la grilla)
    pub on_exito: Callback<()>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let auth = use_auth_context();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let enviando = use_state(|| false);

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let enviando = enviando.clone();
        let auth = auth.clone();
        let on_exito = props.on_exito.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *enviando {
                return;
            }

            if let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let email = email_input.value();
                let password = password_input.value();

                if email.is_empty() || password.is_empty() {
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message("Por favor, completá todos los campos");
                    }
                    return;
                }

                let enviando = enviando.clone();
                let auth = auth.clone();
                let on_exito = on_exito.clone();
                enviando.set(true);
                spawn_local(async move {
                    match auth_service::login(&email, &password).await {
                        Ok(respuesta) => {
                            auth.login.emit((
                                respuesta.access_token,
                                respuesta.is_admin,
                                respuesta.habilitado,
                            ));
                            on_exito.emit(());
                        }
                        Err(detalle) => {
                            log::error!("❌ Login fallido: {}", detalle);
                            if let Some(win) = web_sys::window() {
                                let _ = win.alert_with_message(&format!("Error: {}", detalle));
                            }
                        }
                    }
                    enviando.set(false);
                });
            }
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <h1>{"Pádel Club"}</h1>
                    <p>{"Reservá tu cancha"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="tu@email.com"
                            ref={email_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Contraseña"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Ingresá tu contraseña"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    <button type="submit" class="btn-login" disabled={*enviando}>
                        { if *enviando { "Ingresando..." } else { "Iniciar Sesión" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
