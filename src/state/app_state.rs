use crate::registry::qr_registry::QrRegistry;
use crate::state::config::AppConfig;

pub struct AppState {
    pub registry: QrRegistry,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            registry: QrRegistry::new(),
            config,
        }
    }

    /// Address finders land on when scanning a printed code.
    pub fn target_url(&self, unique_id: &str) -> String {
        format!(
            "{}/q/{}",
            self.config.app_domain.trim_end_matches('/'),
            unique_id
        )
    }
}
