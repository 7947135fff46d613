pub mod auth_store;
pub mod ocupacion_store;

pub use auth_store::AuthStore;
pub use ocupacion_store::OcupacionStore;
