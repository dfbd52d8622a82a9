use contracts::domain::a004_consultation::ConsultationRequest;
use contracts::shared::config::{load_config, SiteConfig};
use contracts::shared::events::Topic;
use leptos::prelude::*;

use crate::domain::a001_estimator::ui::wizard::EstimatorSection;
use crate::domain::a002_product::ui::gallery::GallerySection;
use crate::domain::a003_site_settings::context::provide_settings;
use crate::domain::a003_site_settings::ui::hero::HeroSection;
use crate::domain::a004_consultation::ui::form::ConsultationForm;
use crate::domain::a004_consultation::ui::popup::ConsultationPopup;
use crate::layout::global_context::SiteContext;

fn site_config() -> SiteConfig {
    load_config(option_env!("KITCHEN_SITE_CONFIG")).unwrap_or_else(|e| {
        log::error!("{}; falling back to built-in defaults", e);
        SiteConfig::default()
    })
}

fn scroll_to(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(el) => el.scroll_into_view(),
        None => log::warn!("#{} not found", id),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let site = SiteContext::new(site_config());
    provide_context(site.clone());
    provide_settings(&site);

    // Other parts of the page (the popup, admin previews) ask for the form
    // through the bus.
    let open_form = site.bus.subscribe(Topic::OpenConsultation, {
        let site = site.clone();
        move |_| site.open_consultation(None)
    });
    on_cleanup(move || drop(open_form));

    let policy = site.config.estimator.policy;
    let on_estimate = Callback::new({
        let site = site.clone();
        move |summary| site.open_consultation(Some(ConsultationRequest::from_estimate(&summary)))
    });

    view! {
        <main class="showroom" dir="rtl">
            <HeroSection on_open_gallery=move |_| scroll_to("gallery") />
            <EstimatorSection policy=policy on_request_consultation=on_estimate />
            <GallerySection />
            <ConsultationForm />
            <ConsultationPopup />
        </main>
    }
}
