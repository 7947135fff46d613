// ============================================================================
// USE AUTH HOOK - Proveedor del estado de sesión
// ============================================================================
// Mantiene la copia en memoria (AuthStore) sincronizada con localStorage,
// para que la sesión sobreviva recargas. Acá no se hace ningún request: es
// un holder pasivo de estado.
// ============================================================================

use yew::prelude::*;

use crate::services::ApiClient;
use crate::stores::AuthStore;
use crate::utils::constants::{STORAGE_KEY_ADMIN, STORAGE_KEY_HABILITADO, STORAGE_KEY_TOKEN};
use crate::utils::storage::{load_from_storage, remove_from_storage, save_to_storage};

#[derive(Clone, PartialEq)]
pub struct UseAuthHandle {
    pub estado: UseStateHandle<AuthStore>,
    /// Login completo: (token, is_admin, habilitado)
    pub login: Callback<(String, bool, bool)>,
    /// Login sólo con token: no toca los flags persistidos
    pub login_con_token: Callback<String>,
    pub logout: Callback<()>,
}

impl UseAuthHandle {
    pub fn sesion(&self) -> AuthStore {
        (*self.estado).clone()
    }

    /// Cliente API con el 401 cableado al logout de esta sesión.
    pub fn cliente(&self) -> ApiClient {
        let logout = self.logout.clone();
        ApiClient::new().con_callback_401(move || logout.emit(()))
    }
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let estado = use_state(AuthStore::default);

    // Restaurar sesión persistida al montar. Cada flag se lee de su propia
    // clave; sin token, todo queda en los defaults.
    {
        let estado = estado.clone();
        use_effect_with((), move |_| {
            let token = load_from_storage::<String>(STORAGE_KEY_TOKEN);
            if token.is_some() {
                let is_admin = load_from_storage::<bool>(STORAGE_KEY_ADMIN).unwrap_or(false);
                let habilitado =
                    load_from_storage::<bool>(STORAGE_KEY_HABILITADO).unwrap_or(false);
                log::info!("✅ Sesión restaurada desde storage");
                estado.set(AuthStore::restaurar(token, is_admin, habilitado));
            }
            || ()
        });
    }

    let login = {
        let estado = estado.clone();
        Callback::from(move |(token, is_admin, habilitado): (String, bool, bool)| {
            let _ = save_to_storage(STORAGE_KEY_TOKEN, &token);
            let _ = save_to_storage(STORAGE_KEY_ADMIN, &is_admin);
            let _ = save_to_storage(STORAGE_KEY_HABILITADO, &habilitado);
            log::info!("✅ Login exitoso (admin={}, habilitado={})", is_admin, habilitado);
            estado.set(AuthStore::con_login(token, is_admin, habilitado));
        })
    };

    let login_con_token = {
        let estado = estado.clone();
        Callback::from(move |token: String| {
            let _ = save_to_storage(STORAGE_KEY_TOKEN, &token);
            estado.set((*estado).con_token(token));
        })
    };

    let logout = {
        let estado = estado.clone();
        Callback::from(move |_| {
            let _ = remove_from_storage(STORAGE_KEY_TOKEN);
            let _ = remove_from_storage(STORAGE_KEY_ADMIN);
            let _ = remove_from_storage(STORAGE_KEY_HABILITADO);
            log::info!("👋 Logout");
            estado.set(AuthStore::cerrado());
        })
    };

    UseAuthHandle {
        estado,
        login,
        login_con_token,
        logout,
    }
}
