use crate::controller::Controller;
use crate::jokeapi::JokeClient;
use crate::storage::FileStorage;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<Mutex<Controller<FileStorage>>>,
    pub client: JokeClient,
}

impl AppState {
    pub fn new(controller: Controller<FileStorage>, client: JokeClient) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
            client,
        }
    }
}
