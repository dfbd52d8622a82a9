use contracts::domain::a003_site_settings::SiteSettings;
use contracts::shared::events::Topic;
use contracts::shared::lifecycle::{LifecycleGuard, LifecycleToken};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::fetch_settings;
use crate::layout::global_context::SiteContext;

/// Shared site settings; starts from defaults and is replaced once the
/// backend answers.
#[derive(Clone, Copy)]
pub struct SettingsContext {
    pub settings: RwSignal<SiteSettings>,
    pub loading: RwSignal<bool>,
}

fn refresh(base: String, ctx: SettingsContext, guard: LifecycleGuard) {
    ctx.loading.set(true);
    spawn_local(async move {
        let result = fetch_settings(&base).await;
        guard.apply(|| {
            match result {
                Ok(settings) => ctx.settings.set(settings),
                Err(e) => log::warn!("settings fetch failed, keeping current values: {}", e),
            }
            ctx.loading.set(false);
        });
    });
}

/// Load settings, refetch on `settings:updated`, and expose them through
/// the reactive context.
pub fn provide_settings(site: &SiteContext) -> SettingsContext {
    let ctx = SettingsContext {
        settings: RwSignal::new(SiteSettings::default()),
        loading: RwSignal::new(false),
    };
    provide_context(ctx);

    let token = LifecycleToken::new();
    let guard = token.guard();
    let base = site.api_base().to_string();

    refresh(base.clone(), ctx, guard.clone());

    let subscription = site.bus.subscribe(Topic::SettingsUpdated, move |topic| {
        log::debug!("{} received, refetching settings", topic.name());
        refresh(base.clone(), ctx, guard.clone());
    });

    on_cleanup(move || {
        token.end();
        drop(subscription);
    });

    ctx
}

pub fn use_settings() -> SettingsContext {
    use_context::<SettingsContext>().expect("SettingsContext not found in context")
}
