/// URL base de la API de reservas
/// Configurada en tiempo de compilación:
/// - Por defecto: prefijo relativo "/api" (mismo origen)
/// - Override: via API_URL env var (ver build.rs / .env)
pub const API_URL: &str = match option_env!("API_URL") {
    Some(url) => url,
    None => "/api",
};

// Claves de la sesión persistida en localStorage
pub const STORAGE_KEY_TOKEN: &str = "padel_token";
pub const STORAGE_KEY_ADMIN: &str = "padel_admin";
pub const STORAGE_KEY_HABILITADO: &str = "padel_habilitado";

/// Cookie de la que se lee el token anti-CSRF para verbos mutantes
pub const CSRF_COOKIE: &str = "csrftoken";
