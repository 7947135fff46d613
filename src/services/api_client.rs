// ============================================================================
// API CLIENT - Wrapper HTTP autenticado (stateless)
// ============================================================================
// NO tiene lógica de negocio. Arma los requests contra la API:
// - incluye credenciales (cookies) en todos los requests
// - adjunta el token CSRF en los verbos mutantes
// - avisa por callback cuando el servidor responde 401
// ============================================================================

use std::rc::Rc;

use gloo_net::http::{Request, Response};
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlDocument, RequestCredentials};

use crate::models::DetalleError;
use crate::utils::constants::{API_URL, CSRF_COOKIE};

const MENSAJE_ERROR_GENERICO: &str = "Ocurrió un error inesperado";

/// Verbos soportados por el cliente.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Metodo {
    Get,
    Post,
    Put,
    Delete,
}

impl Metodo {
    /// Todo lo que no es GET/HEAD/OPTIONS muta estado en el servidor y
    /// lleva el token CSRF.
    pub fn es_mutante(&self) -> bool {
        !matches!(self, Metodo::Get)
    }
}

/// Cuerpo de un request.
pub enum Cuerpo {
    Vacio,
    /// Objeto serializado como JSON (el builder pone el content-type)
    Json(serde_json::Value),
    /// FormData multipart, pasa sin modificar
    Form(FormData),
}

/// Opciones de construcción de un request. Defaults: GET, sin headers,
/// sin query, sin cuerpo.
pub struct Opciones {
    pub metodo: Metodo,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub cuerpo: Cuerpo,
}

impl Default for Opciones {
    fn default() -> Self {
        Self {
            metodo: Metodo::Get,
            headers: Vec::new(),
            query: Vec::new(),
            cuerpo: Cuerpo::Vacio,
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    on_unauthorized: Option<Rc<dyn Fn()>>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: API_URL.to_string(),
            on_unauthorized: None,
        }
    }

    /// Registra el callback que se dispara cuando el servidor responde 401
    /// (típicamente, forzar logout y volver al login).
    pub fn con_callback_401(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_unauthorized = Some(Rc::new(callback));
        self
    }

    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Response, String> {
        let query = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.request(
            path,
            Opciones {
                metodo: Metodo::Get,
                query,
                ..Default::default()
            },
        )
        .await
    }

    pub async fn post(&self, path: &str, cuerpo: Cuerpo) -> Result<Response, String> {
        self.request(
            path,
            Opciones {
                metodo: Metodo::Post,
                cuerpo,
                ..Default::default()
            },
        )
        .await
    }

    pub async fn put(&self, path: &str, cuerpo: Cuerpo) -> Result<Response, String> {
        self.request(
            path,
            Opciones {
                metodo: Metodo::Put,
                cuerpo,
                ..Default::default()
            },
        )
        .await
    }

    pub async fn delete(&self, path: &str) -> Result<Response, String> {
        self.request(
            path,
            Opciones {
                metodo: Metodo::Delete,
                ..Default::default()
            },
        )
        .await
    }

    /// Request genérico. Siempre devuelve la Response cruda: el status y el
    /// cuerpo los maneja el llamador. El único canal lateral es el callback
    /// de 401.
    pub async fn request(&self, path: &str, opciones: Opciones) -> Result<Response, String> {
        let url = unir_url(&self.base_url, path);

        let mut builder = match opciones.metodo {
            Metodo::Get => Request::get(&url),
            Metodo::Post => Request::post(&url),
            Metodo::Put => Request::put(&url),
            Metodo::Delete => Request::delete(&url),
        }
        .credentials(RequestCredentials::Include);

        if !opciones.query.is_empty() {
            builder = builder.query(opciones.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        for (nombre, valor) in &opciones.headers {
            builder = builder.header(nombre, valor);
        }

        if opciones.metodo.es_mutante() {
            if let Some(token) = leer_cookie(CSRF_COOKIE) {
                builder = builder.header("X-CSRF-Token", &token);
            }
        }

        let request = match opciones.cuerpo {
            Cuerpo::Vacio => builder
                .build()
                .map_err(|e| format!("Error construyendo request: {}", e))?,
            Cuerpo::Json(valor) => builder
                .json(&valor)
                .map_err(|e| format!("Error serializando JSON: {}", e))?,
            Cuerpo::Form(form) => builder
                .body(form)
                .map_err(|e| format!("Error armando multipart: {}", e))?,
        };

        let response = request
            .send()
            .await
            .map_err(|e| format!("Error de red: {}", e))?;

        if response.status() == 401 {
            log::warn!("⚠️ Respuesta 401 de {}", url);
            if let Some(callback) = &self.on_unauthorized {
                callback();
            }
        }

        Ok(response)
    }
}

/// Extrae el mensaje de error `{"detail": ...}` de una respuesta fallida,
/// con fallback genérico si el cuerpo no se puede interpretar.
pub async fn extraer_detalle(response: &Response) -> String {
    match response.json::<DetalleError>().await {
        Ok(DetalleError {
            detail: Some(detalle),
        }) => detalle,
        _ => MENSAJE_ERROR_GENERICO.to_string(),
    }
}

fn unir_url(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if base.ends_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

fn leer_cookie(nombre: &str) -> Option<String> {
    let documento = web_sys::window()?.document()?;
    let html_doc = documento.dyn_into::<HtmlDocument>().ok()?;
    let cookies = html_doc.cookie().ok()?;
    extraer_cookie(&cookies, nombre)
}

/// Busca una cookie por nombre en el string de `document.cookie`.
fn extraer_cookie(cookies: &str, nombre: &str) -> Option<String> {
    let prefijo = format!("{}=", nombre);
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(prefijo.as_str()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_no_es_mutante_y_el_resto_si() {
        assert!(!Metodo::Get.es_mutante());
        assert!(Metodo::Post.es_mutante());
        assert!(Metodo::Put.es_mutante());
        assert!(Metodo::Delete.es_mutante());
    }

    #[test]
    fn unir_url_normaliza_las_barras() {
        assert_eq!(unir_url("/api", "reservas/cantidad"), "/api/reservas/cantidad");
        assert_eq!(unir_url("/api", "/reservas/cantidad"), "/api/reservas/cantidad");
        assert_eq!(unir_url("/api/", "//usuarios"), "/api/usuarios");
        assert_eq!(
            unir_url("https://padel.example.com/api", "/reservas/reservar"),
            "https://padel.example.com/api/reservas/reservar"
        );
    }

    #[test]
    fn extraer_cookie_encuentra_solo_la_pedida() {
        let cookies = "sessionid=abc123; csrftoken=tok-csrf; tema=oscuro";
        assert_eq!(extraer_cookie(cookies, "csrftoken").as_deref(), Some("tok-csrf"));
        assert_eq!(extraer_cookie(cookies, "sessionid").as_deref(), Some("abc123"));
        assert_eq!(extraer_cookie(cookies, "inexistente"), None);
    }

    #[test]
    fn extraer_cookie_ignora_prefijos_parciales() {
        let cookies = "xcsrftoken=malo; csrftoken=bueno";
        assert_eq!(extraer_cookie(cookies, "csrftoken").as_deref(), Some("bueno"));
    }

    #[test]
    fn las_opciones_por_defecto_son_un_get_vacio() {
        let opciones = Opciones::default();
        assert_eq!(opciones.metodo, Metodo::Get);
        assert!(opciones.headers.is_empty());
        assert!(opciones.query.is_empty());
        assert!(matches!(opciones.cuerpo, Cuerpo::Vacio));
    }
}
