pub mod admin_panel;
pub mod app;
pub mod login_screen;
pub mod mis_reservas;
pub mod reserva_tabla;

pub use admin_panel::AdminPanel;
pub use app::App;
pub use login_screen::LoginScreen;
pub use mis_reservas::MisReservas;
pub use reserva_tabla::ReservaTabla;
