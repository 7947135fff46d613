use yew::prelude::*;

use crate::components::{AdminPanel, LoginScreen, MisReservas, ReservaTabla};
use crate::hooks::{use_auth_context, AuthContextProvider};

#[derive(Clone, Copy, PartialEq)]
enum Vista {
    Reservas,
    MisReservas,
    Admin,
    Login,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AuthContextProvider>
            <AppShell />
        </AuthContextProvider>
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    let auth = use_auth_context();
    let vista = use_state(|| Vista::Reservas);
    let sesion = auth.sesion();

    let ir_a = {
        let vista = vista.clone();
        move |destino: Vista| {
            let vista = vista.clone();
            Callback::from(move |_: MouseEvent| vista.set(destino))
        }
    };

    let on_logout = {
        let logout = auth.logout.clone();
        let vista = vista.clone();
        Callback::from(move |_: MouseEvent| {
            logout.emit(());
            vista.set(Vista::Reservas);
        })
    };

    let on_login_exito = {
        let vista = vista.clone();
        Callback::from(move |_| vista.set(Vista::Reservas))
    };

    html! {
        <div class="app">
            <header class="barra">
                <h1 class="titulo">{"🎾 Pádel Club"}</h1>
                <nav>
                    <button onclick={ir_a(Vista::Reservas)}>{"Reservas"}</button>
                    {
                        if sesion.is_authenticated {
                            html! { <button onclick={ir_a(Vista::MisReservas)}>{"Mis reservas"}</button> }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if sesion.is_admin {
                            html! { <button onclick={ir_a(Vista::Admin)}>{"Admin"}</button> }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if sesion.is_authenticated {
                            html! { <button class="btn-logout" onclick={on_logout}>{"Cerrar sesión"}</button> }
                        } else {
                            html! { <button onclick={ir_a(Vista::Login)}>{"Iniciar sesión"}</button> }
                        }
                    }
                </nav>
            </header>
            <main>
                {
                    match *vista {
                        Vista::Reservas => html! { <ReservaTabla /> },
                        Vista::MisReservas => html! { <MisReservas /> },
                        Vista::Admin => html! { <AdminPanel /> },
                        Vista::Login => html! { <LoginScreen on_exito={on_login_exito} /> },
                    }
                }
            </main>
        </div>
    }
}
