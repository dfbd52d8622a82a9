use contracts::domain::a002_product::{GalleryBrowser, GalleryItem};
use leptos::prelude::*;
use thaw::*;

/// Full-size view of the selected item with circular prev/next over the
/// currently filtered list.
#[component]
#[allow(non_snake_case)]
pub fn GalleryLightbox(
    browser: RwSignal<GalleryBrowser>,
    #[prop(into)] on_request_similar: Callback<GalleryItem>,
) -> impl IntoView {
    let selected = Memo::new(move |_| browser.with(|b| b.selected().cloned()));

    let request_similar = move |_| {
        if let Some(item) = browser.try_update(|b| b.take_selected()).flatten() {
            on_request_similar.run(item);
        }
    };

    view! {
        {move || {
            selected
                .get()
                .map(|item| {
                    let material = (!item.material.is_empty()).then(|| item.material.clone());
                    let area = (!item.area.is_empty()).then(|| item.area.clone());
                    view! {
                        <div class="lightbox" dir="rtl" on:click=move |_| browser.update(|b| b.close())>
                            <div class="lightbox__panel" on:click=|ev| ev.stop_propagation()>
                                <button
                                    class="lightbox__close"
                                    aria-label="إغلاق"
                                    on:click=move |_| browser.update(|b| b.close())
                                >
                                    "×"
                                </button>

                                <div class="lightbox__media">
                                    <button
                                        class="lightbox__nav lightbox__nav--prev"
                                        aria-label="السابق"
                                        on:click=move |_| browser.update(|b| {
                                            b.prev();
                                        })
                                    >
                                        "›"
                                    </button>
                                    {item.image.clone().map(|src| view! { <img src=src alt=item.title.clone() /> })}
                                    <button
                                        class="lightbox__nav lightbox__nav--next"
                                        aria-label="التالي"
                                        on:click=move |_| browser.update(|b| {
                                            b.next();
                                        })
                                    >
                                        "‹"
                                    </button>
                                </div>

                                <div class="lightbox__details">
                                    {item.category.as_ref().map(|c| view! { <span class="lightbox__tag">{c.name.clone()}</span> })}
                                    <h3>{item.title.clone()}</h3>
                                    <p>{item.description_or_placeholder().to_string()}</p>
                                    <dl class="lightbox__facts">
                                        {material.map(|m| view! { <dt>"الخامة"</dt><dd>{m}</dd> })}
                                        {area.map(|a| view! { <dt>"المساحة"</dt><dd>{a}</dd> })}
                                    </dl>
                                    <Button appearance=ButtonAppearance::Primary on_click=request_similar>
                                        "أريد تصميماً مشابهاً"
                                    </Button>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
