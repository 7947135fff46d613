pub mod admin_service;
pub mod api_client;
pub mod auth_service;
pub mod reserva_service;

pub use api_client::{ApiClient, Cuerpo, Metodo, Opciones};
