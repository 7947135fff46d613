// ============================================================================
// AUTH STORE - Estado de sesión en memoria
// ============================================================================
// Copia en memoria de los flags persistidos. Las transiciones son puras; la
// sincronización con localStorage vive en hooks/use_auth.
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AuthStore {
    pub is_authenticated: bool,
    pub is_admin: bool,
    pub habilitado: bool,
    pub token: Option<String>,
}

impl AuthStore {
    /// Estado resultante de un login completo.
    pub fn con_login(token: String, is_admin: bool, habilitado: bool) -> Self {
        Self {
            is_authenticated: true,
            is_admin,
            habilitado,
            token: Some(token),
        }
    }

    /// Login sólo con token: los flags de admin/habilitado quedan como
    /// estaban (comportamiento documentado de la plataforma).
    pub fn con_token(&self, token: String) -> Self {
        Self {
            is_authenticated: true,
            token: Some(token),
            ..self.clone()
        }
    }

    /// Estado restaurado desde el storage al arrancar. Sin token persistido,
    /// la sesión vuelve a los defaults.
    pub fn restaurar(token: Option<String>, is_admin: bool, habilitado: bool) -> Self {
        match token {
            Some(token) => Self {
                is_authenticated: true,
                is_admin,
                habilitado,
                token: Some(token),
            },
            None => Self::default(),
        }
    }

    /// Sesión cerrada: todo en falso.
    pub fn cerrado() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_completo_setea_los_tres_flags() {
        let sesion = AuthStore::con_login("tok".into(), true, true);
        assert!(sesion.is_authenticated);
        assert!(sesion.is_admin);
        assert!(sesion.habilitado);
        assert_eq!(sesion.token.as_deref(), Some("tok"));
    }

    #[test]
    fn login_con_token_no_toca_los_flags_previos() {
        let previa = AuthStore::con_login("viejo".into(), true, false);
        let nueva = previa.con_token("nuevo".into());
        assert!(nueva.is_authenticated);
        assert!(nueva.is_admin);
        assert!(!nueva.habilitado);
        assert_eq!(nueva.token.as_deref(), Some("nuevo"));
    }

    #[test]
    fn logout_vuelve_a_los_defaults() {
        let sesion = AuthStore::cerrado();
        assert!(!sesion.is_authenticated);
        assert!(!sesion.is_admin);
        assert!(!sesion.habilitado);
        assert_eq!(sesion.token, None);
    }

    #[test]
    fn restaurar_con_token_recupera_cada_flag() {
        let sesion = AuthStore::restaurar(Some("tok".into()), false, true);
        assert!(sesion.is_authenticated);
        assert!(!sesion.is_admin);
        assert!(sesion.habilitado);
    }

    #[test]
    fn restaurar_sin_token_resetea_todo() {
        let sesion = AuthStore::restaurar(None, true, true);
        assert_eq!(sesion, AuthStore::default());
    }
}
