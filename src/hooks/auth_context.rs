// ============================================================================
// AUTH CONTEXT - Sesión compartida entre componentes
// ============================================================================
// Usa la Context API de Yew para exponer UseAuthHandle en toda la app sin
// prop drilling. El storage nunca se expone a los consumidores.
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_auth::{use_auth, UseAuthHandle};

#[derive(Properties, PartialEq)]
pub struct AuthContextProviderProps {
    pub children: Children,
}

/// Provider que envuelve la app y proporciona el estado de sesión
#[function_component(AuthContextProvider)]
pub fn auth_context_provider(props: &AuthContextProviderProps) -> Html {
    let auth = use_auth();

    html! {
        <ContextProvider<UseAuthHandle> context={auth}>
            {props.children.clone()}
        </ContextProvider<UseAuthHandle>>
    }
}

/// Acceso al contexto de sesión desde cualquier componente descendiente.
#[hook]
pub fn use_auth_context() -> UseAuthHandle {
    use_context::<UseAuthHandle>().expect("AuthContextProvider ausente en el árbol")
}
