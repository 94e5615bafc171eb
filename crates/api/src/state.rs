use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use pageflow_core::events::bus::EventBus;
use pageflow_core::material::submission::Submission;
use pageflow_core::requirements::key::RequirementKey;
use pageflow_core::storage::MaterialStore;
use pageflow_core::template::registry::TemplateRegistry;
use pageflow_core::theme::ThemeRegistry;
use pageflow_review::engine::DesignReviewEngine;

use crate::config::AppConfig;

/// One tracked project: its template choice and submitted material.
///
/// Held in memory as the stand-in for the external persistence
/// collaborator; everything derived from it is recomputed per request.
#[derive(Debug, Clone)]
pub struct ProjectRecord {
    pub template_id: String,
    pub selected_modules: HashSet<String>,
    pub submissions: HashMap<RequirementKey, Submission>,
}

/// Shared application state, passed to all handlers via Axum's `State`
/// extractor. Wrapped in `Arc` so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    templates: TemplateRegistry,
    themes: ThemeRegistry,
    engine: DesignReviewEngine,
    event_bus: EventBus,
    store: Arc<dyn MaterialStore>,
    projects: RwLock<HashMap<Uuid, ProjectRecord>>,
    config: AppConfig,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        engine: DesignReviewEngine,
        event_bus: EventBus,
        store: Arc<dyn MaterialStore>,
    ) -> Self {
        Self {
            inner: Arc::new(InnerState {
                templates: TemplateRegistry::builtin(),
                themes: ThemeRegistry::builtin(),
                engine,
                event_bus,
                store,
                projects: RwLock::new(HashMap::new()),
                config,
            }),
        }
    }

    pub fn templates(&self) -> &TemplateRegistry {
        &self.inner.templates
    }

    pub fn themes(&self) -> &ThemeRegistry {
        &self.inner.themes
    }

    pub fn engine(&self) -> &DesignReviewEngine {
        &self.inner.engine
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.inner.event_bus
    }

    pub fn store(&self) -> &Arc<dyn MaterialStore> {
        &self.inner.store
    }

    pub fn projects(&self) -> &RwLock<HashMap<Uuid, ProjectRecord>> {
        &self.inner.projects
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }
}
