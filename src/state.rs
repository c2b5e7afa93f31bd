use std::sync::Arc;

use crate::backend::{SearchBackend, DEFAULT_TOP_K};

/// Shared handler state / Koplietojamais stāvoklis
#[derive(Clone)]
pub struct AppState {
    /// Injected search backend / Meklēšanas serveris
    pub backend: Arc<dyn SearchBackend>,
    /// Results requested per search / Rezultātu skaits
    pub top_k: usize,
}

impl AppState {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self {
            backend,
            top_k: DEFAULT_TOP_K,
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}
