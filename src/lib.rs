pub mod app;
pub mod config;
pub mod controller;
pub mod errors;
pub mod favorites;
pub mod handlers;
pub mod jokeapi;
pub mod markup;
pub mod models;
pub mod notification;
pub mod shortcuts;
pub mod state;
pub mod storage;
pub mod store;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use controller::Controller;
pub use state::AppState;
pub use storage::{FileStorage, MemoryStorage, Storage};
