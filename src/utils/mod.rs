// Utils compartidos

pub mod constants;
pub mod horarios;
pub mod storage;

pub use constants::*;
pub use horarios::*;
pub use storage::*;
