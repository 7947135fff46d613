pub mod auth;
pub mod reserva;
pub mod usuario;

pub use auth::*;
pub use reserva::*;
pub use usuario::*;
