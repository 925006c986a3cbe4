pub mod app_state;
pub mod clients;
pub mod persistence;
pub mod repositories;
pub mod services;

pub use app_state::AppState;
pub use persistence::Persistence;
