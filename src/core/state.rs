use std::sync::Arc;

use crate::core::config::Settings;
use crate::repositories::items::ItemStore;

#[derive(Clone)]
pub(crate) struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    settings: Settings,
    items: ItemStore,
}

impl AppState {
    pub(crate) fn new(settings: Settings, items: ItemStore) -> Self {
        Self { inner: Arc::new(InnerState { settings, items }) }
    }

    pub(crate) fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    pub(crate) fn items(&self) -> &ItemStore {
        &self.inner.items
    }
}
