//! The files written for a generation run.

mod handler_rs;
mod handlers_mod;
mod main_rs;
mod models_rs;

pub use handler_rs::HandlerRs;
pub use handlers_mod::HandlersMod;
pub use main_rs::MainRs;
pub use models_rs::ModelsRs;
