use std::sync::Arc;

use contracts::domain::a002_product::{GalleryBrowser, GalleryCatalog, GalleryItem};
use contracts::shared::events::Topic;
use contracts::shared::lifecycle::LifecycleToken;
use contracts::usecases::u501_load_gallery::{fetch_and_normalize, LoadOutcome};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::lightbox::GalleryLightbox;
use crate::domain::a002_product::api::HttpCatalogSource;
use crate::layout::global_context::use_site;

/// Filterable showcase grid. Starts from the built-in showcase entries and
/// swaps in the live catalog once it loads; reloads on product or
/// category updates.
#[component]
#[allow(non_snake_case)]
pub fn GallerySection() -> impl IntoView {
    let site = use_site();
    let browser = RwSignal::new(GalleryBrowser::new(GalleryCatalog::showcase()));
    let loading = RwSignal::new(true);

    let token = LifecycleToken::new();
    let guard = token.guard();
    let source = Arc::new(HttpCatalogSource::new(site.api_base()));
    let resolver = site.resolver();

    let load = move || {
        let guard = guard.clone();
        let source = source.clone();
        let resolver = resolver.clone();
        loading.set(true);
        spawn_local(async move {
            let outcome = fetch_and_normalize(source.as_ref(), &resolver).await;
            match &outcome {
                LoadOutcome::Complete(c) => log::debug!("gallery loaded: {} items", c.items.len()),
                LoadOutcome::ProductsOnly(c) => log::warn!(
                    "categories unavailable, derived {} from products",
                    c.categories.len()
                ),
                LoadOutcome::Empty => log::debug!("gallery empty, keeping current items"),
                LoadOutcome::Failed(e) => log::error!("gallery load failed: {}", e),
            }
            guard.apply(|| {
                if let Some(catalog) = outcome.into_catalog() {
                    browser.update(|b| b.replace_catalog(catalog));
                }
                loading.set(false);
            });
        });
    };

    load();

    let subscription = site.bus.subscribe_many(
        &[Topic::ProductsUpdated, Topic::CategoriesUpdated],
        {
            let load = load.clone();
            move |topic| {
                log::debug!("{} received, reloading gallery", topic.name());
                load();
            }
        },
    );

    on_cleanup(move || {
        token.end();
        drop(subscription);
    });

    let on_request_similar = Callback::new({
        let site = site.clone();
        move |item: GalleryItem| {
            log::debug!("consultation requested from gallery item {}", item.id);
            site.open_consultation(None);
        }
    });

    view! {
        <section class="gallery" id="gallery" dir="rtl">
            <div class="gallery__header">
                <h2>"معرض التحولات الساحرة"</h2>
                <p>"تصفح أحدث مشاريعنا واختر التصميم الذي يناسب ذوقك"</p>
            </div>

            <div class="gallery__filters">
                {move || {
                    browser
                        .with(|b| b.filter_chips())
                        .into_iter()
                        .map(|chip| {
                            let id = chip.id.clone();
                            let class_id = chip.id.clone();
                            view! {
                                <button
                                    class=move || {
                                        if browser.with(|b| b.is_active(&class_id)) {
                                            "chip chip--active"
                                        } else {
                                            "chip"
                                        }
                                    }
                                    on:click=move |_| browser.update(|b| b.set_filter(id.clone()))
                                >
                                    {chip.name}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <Show when=move || loading.get()>
                <div class="gallery__loading">
                    <Spinner />
                </div>
            </Show>

            <div class="gallery__grid">
                {move || {
                    let items: Vec<GalleryItem> = browser
                        .with(|b| b.visible_items().into_iter().cloned().collect());
                    if items.is_empty() {
                        return view! {
                            <p class="gallery__empty">"لا توجد أعمال في هذا التصنيف بعد"</p>
                        }
                        .into_any();
                    }
                    items
                        .into_iter()
                        .map(|item| view! { <GalleryCard item=item browser=browser /> })
                        .collect_view()
                        .into_any()
                }}
            </div>

            <GalleryLightbox browser=browser on_request_similar=on_request_similar />
        </section>
    }
}

#[component]
#[allow(non_snake_case)]
fn GalleryCard(item: GalleryItem, browser: RwSignal<GalleryBrowser>) -> impl IntoView {
    let id = item.id.clone();
    let category = item.category.as_ref().map(|c| c.name.clone());

    view! {
        <article class="gallery-card" on:click=move |_| browser.update(|b| {
            b.open(&id);
        })>
            {match item.image.clone() {
                Some(src) => view! { <img class="gallery-card__image" src=src alt=item.title.clone() /> }.into_any(),
                None => view! { <div class="gallery-card__image gallery-card__image--empty"></div> }.into_any(),
            }}
            <div class="gallery-card__body">
                {category.map(|name| view! { <span class="gallery-card__tag">{name}</span> })}
                <h3>{item.title.clone()}</h3>
            </div>
        </article>
    }
}
