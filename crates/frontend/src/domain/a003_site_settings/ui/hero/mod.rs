use contracts::domain::a003_site_settings::HeroCarousel;
use contracts::shared::lifecycle::{LifecycleToken, TimerGeneration};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::TouchEvent;

use crate::domain::a003_site_settings::context::use_settings;
use crate::layout::global_context::use_site;

#[component]
#[allow(non_snake_case)]
pub fn HeroSection(#[prop(into)] on_open_gallery: Callback<()>) -> impl IntoView {
    let site = use_site();
    let settings = use_settings().settings;
    let resolver = site.resolver();

    let slides = Memo::new(move |_| settings.with(|s| s.hero_slides(&resolver)));
    let carousel = RwSignal::new(HeroCarousel::new(
        slides.with_untracked(|s| s.len()),
        site.config.hero.swipe_threshold_px,
    ));

    // Settings may arrive with a different number of images.
    Effect::new(move |_| {
        let len = slides.with(|s| s.len());
        carousel.update(|c| c.set_len(len));
    });

    // ========================================================================
    // Autoplay
    // ========================================================================

    let token = LifecycleToken::new();
    let guard = token.guard();
    let timers = TimerGeneration::new();
    let autoplay_ms = site.config.hero.autoplay_ms;
    let timer_key = Memo::new(move |_| carousel.with(|c| c.timer_key()));

    Effect::new({
        let timers = timers.clone();
        move |_| {
            let (paused, len) = timer_key.get();
            let ticket = timers.restart();
            if paused || len <= 1 {
                return;
            }
            let guard = guard.clone();
            spawn_local(async move {
                loop {
                    TimeoutFuture::new(autoplay_ms).await;
                    if !guard.is_alive() || !ticket.is_current() {
                        break;
                    }
                    carousel.update(|c| {
                        c.tick();
                    });
                }
            });
        }
    });

    on_cleanup(move || {
        timers.stop();
        token.end();
    });

    // ========================================================================
    // Touch
    // ========================================================================

    let touch_start_x = StoredValue::new(0.0_f64);

    let on_touch_start = move |ev: TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            touch_start_x.set_value(touch.client_x() as f64);
        }
    };

    let on_touch_end = move |ev: TouchEvent| {
        if let Some(touch) = ev.changed_touches().get(0) {
            let dx = touch.client_x() as f64 - touch_start_x.get_value();
            carousel.update(|c| {
                c.swipe(dx);
            });
        }
    };

    let open_consultation = {
        let site = site.clone();
        move |_| site.open_consultation(None)
    };

    view! {
        <section
            class="hero"
            dir="rtl"
            on:mouseenter=move |_| carousel.update(|c| c.pause())
            on:mouseleave=move |_| carousel.update(|c| c.resume())
            on:touchstart=on_touch_start
            on:touchend=on_touch_end
        >
            <div class="hero__slides">
                {move || {
                    slides
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, src)| {
                            view! {
                                <img
                                    src=src
                                    alt=format!("مطبخ {}", index + 1)
                                    class=move || {
                                        if carousel.with(|c| c.current()) == index {
                                            "hero__slide hero__slide--active"
                                        } else {
                                            "hero__slide"
                                        }
                                    }
                                />
                            }
                        })
                        .collect_view()
                }}
                <div class="hero__overlay"></div>
            </div>

            <div class="hero__content">
                <h1 class="hero__title">
                    <span>{move || settings.with(|s| s.title_line1().to_string())}</span>
                    <span class="hero__title-accent">
                        {move || settings.with(|s| s.title_line2().to_string())}
                    </span>
                </h1>
                <p class="hero__subtitle">{move || settings.with(|s| s.subtitle().to_string())}</p>

                <div class="hero__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=open_consultation>
                        "احصل على استشارة مجانية"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_open_gallery.run(())
                    >
                        "شاهد أعمالنا"
                    </Button>
                </div>
            </div>

            <div class="hero__dots">
                {move || {
                    (0..carousel.with(|c| c.len()))
                        .map(|index| {
                            view! {
                                <button
                                    class=move || {
                                        if carousel.with(|c| c.current()) == index {
                                            "hero__dot hero__dot--active"
                                        } else {
                                            "hero__dot"
                                        }
                                    }
                                    aria-label=format!("الانتقال إلى الصورة {}", index + 1)
                                    on:click=move |_| carousel.update(|c| {
                                        c.go_to(index);
                                    })
                                ></button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
