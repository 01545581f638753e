// src/api/state.rs
use crate::client::PlsEndpoint;
use crate::view::ViewController;
use std::sync::Arc;

pub struct AppState<E> {
    pub controller: Arc<ViewController<E>>,
}

impl<E: PlsEndpoint> AppState<E> {
    pub fn new(controller: Arc<ViewController<E>>) -> Self {
        Self { controller }
    }
}

impl<E> Clone for AppState<E> {
    fn clone(&self) -> Self {
        Self { controller: Arc::clone(&self.controller) }
    }
}
