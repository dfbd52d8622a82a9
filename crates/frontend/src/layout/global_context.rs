use contracts::domain::a004_consultation::ConsultationRequest;
use contracts::shared::config::SiteConfig;
use contracts::shared::events::EventBus;
use contracts::shared::image::ImageResolver;
use leptos::prelude::*;

/// Page-wide state shared by every section of the showroom.
#[derive(Clone)]
pub struct SiteContext {
    pub config: SiteConfig,
    pub bus: EventBus,
    /// Consultation modal visibility.
    pub consultation_open: RwSignal<bool>,
    /// Values the consultation form starts from when it opens.
    pub consultation_prefill: RwSignal<ConsultationRequest>,
}

impl SiteContext {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            bus: EventBus::new(),
            consultation_open: RwSignal::new(false),
            consultation_prefill: RwSignal::new(ConsultationRequest::default()),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.config.api.base_url
    }

    pub fn resolver(&self) -> ImageResolver {
        ImageResolver::from_api_base(self.api_base())
    }

    pub fn open_consultation(&self, prefill: Option<ConsultationRequest>) {
        self.consultation_prefill.set(prefill.unwrap_or_default());
        self.consultation_open.set(true);
    }

    pub fn close_consultation(&self) {
        self.consultation_open.set(false);
    }
}

pub fn use_site() -> SiteContext {
    use_context::<SiteContext>().expect("SiteContext not found in context")
}
