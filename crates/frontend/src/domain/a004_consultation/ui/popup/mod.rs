use contracts::domain::a004_consultation::{PopupCountdown, PopupEffect, PopupPhase};
use contracts::shared::events::{EventBus, Topic};
use contracts::shared::lifecycle::LifecycleToken;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::global_context::use_site;
use crate::shared::storage;

fn apply_effect(effect: PopupEffect, bus: &EventBus) {
    match effect {
        PopupEffect::None => {}
        PopupEffect::MarkShown => storage::mark_popup_shown(),
        PopupEffect::MarkShownAndOpenForm => {
            storage::mark_popup_shown();
            bus.publish(Topic::OpenConsultation);
        }
    }
}

/// One-time consultation nudge: appears after a delay, counts down and
/// hides itself. Never shown again once the browser flag is set.
#[component]
#[allow(non_snake_case)]
pub fn ConsultationPopup() -> impl IntoView {
    let site = use_site();
    let popup = RwSignal::new(PopupCountdown::new(
        site.config.popup.countdown_sec,
        storage::popup_shown(),
    ));

    let token = LifecycleToken::new();
    let guard = token.guard();
    on_cleanup(move || token.end());

    if popup.with_untracked(|p| p.phase() == PopupPhase::Waiting) {
        let delay_ms = site.config.popup.delay_ms;
        let bus = site.bus.clone();
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if !guard.is_alive() || !popup.try_update(|p| p.show()).unwrap_or(false) {
                return;
            }
            loop {
                TimeoutFuture::new(1_000).await;
                if !guard.is_alive() {
                    break;
                }
                let Some(effect) = popup.try_update(|p| p.tick()) else {
                    break;
                };
                apply_effect(effect, &bus);
                if popup.with_untracked(|p| !p.is_visible()) {
                    break;
                }
            }
        });
    }

    let accept = {
        let bus = site.bus.clone();
        move |_| {
            if let Some(effect) = popup.try_update(|p| p.accept()) {
                apply_effect(effect, &bus);
            }
        }
    };

    let close = {
        let bus = site.bus.clone();
        move |_| {
            if let Some(effect) = popup.try_update(|p| p.close()) {
                apply_effect(effect, &bus);
            }
        }
    };

    view! {
        <Show when=move || popup.with(|p| p.is_visible())>
            <div class="consult-popup" dir="rtl" role="dialog">
                <button class="consult-popup__close" aria-label="إغلاق" on:click=close.clone()>
                    "×"
                </button>
                <h3>"هل تحتاج مساعدة في تصميم مطبخك؟"</h3>
                <p>"احصل على استشارة مجانية من خبرائنا"</p>
                <Button appearance=ButtonAppearance::Primary on_click=accept.clone()>
                    "احجز الآن"
                </Button>
                <span class="consult-popup__countdown">
                    {move || popup.with(|p| p.remaining().unwrap_or(0))}
                </span>
            </div>
        </Show>
    }
}
