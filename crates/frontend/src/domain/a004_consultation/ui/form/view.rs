use contracts::domain::a001_estimator::KitchenStyle;
use contracts::domain::a004_consultation::AreaRange;
use contracts::shared::lifecycle::LifecycleToken;
use leptos::prelude::*;
use thaw::*;
use web_sys::HtmlInputElement;

use super::view_model::{ConsultationFormViewModel, FormStage};
use crate::layout::global_context::use_site;

/// Modal consultation form, opened through [`SiteContext::open_consultation`].
///
/// [`SiteContext::open_consultation`]: crate::layout::global_context::SiteContext::open_consultation
#[component]
#[allow(non_snake_case)]
pub fn ConsultationForm() -> impl IntoView {
    let site = use_site();
    let vm = ConsultationFormViewModel::new();
    let open = site.consultation_open;
    let prefill = site.consultation_prefill;
    let max_images = site.config.consultation.max_images;

    let token = LifecycleToken::new();
    let guard = token.guard();
    on_cleanup(move || token.end());

    // Every opening starts from the current prefill.
    Effect::new(move |_| {
        if open.get() {
            prefill.with_untracked(|p| vm.load(p));
        }
    });

    let submit = {
        let base = site.api_base().to_string();
        move |_| vm.submit_command(base.clone(), guard.clone())
    };

    let on_files = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files = input
            .files()
            .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
            .unwrap_or_default();
        vm.set_images(files, max_images);
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"احجز استشارة مجانية"</DialogTitle>
                    <DialogContent>
                        <div class="consultation" dir="rtl">
                            <Show
                                when=move || vm.stage.get() == FormStage::Editing
                                fallback=move || view! {
                                    <div class="consultation__success">
                                        <h3>"تم استلام طلبك"</h3>
                                        <p>"سيتواصل معك أحد مستشارينا خلال 24 ساعة"</p>
                                        <Button on_click=move |_| open.set(false)>"إغلاق"</Button>
                                    </div>
                                }
                            >
                                {move || vm.error.get().map(|e| view! {
                                    <MessageBar intent=MessageBarIntent::Error>
                                        <MessageBarBody>{e}</MessageBarBody>
                                    </MessageBar>
                                })}

                                <div class="form-group">
                                    <label>"الاسم الكامل"</label>
                                    <Input value=vm.full_name placeholder="أدخل اسمك" />
                                </div>

                                <div class="form-group">
                                    <label>"رقم الجوال"</label>
                                    <Input
                                        value=vm.phone
                                        input_type=InputType::Tel
                                        placeholder="مثال: 0501234567"
                                    />
                                </div>

                                <div class="form-group">
                                    <label>"العنوان"</label>
                                    <Input value=vm.address placeholder="المدينة، الحي" />
                                </div>

                                <div class="form-group">
                                    <label>"مساحة المطبخ (م²)"</label>
                                    <div class="consultation__areas">
                                        {AreaRange::ALL
                                            .into_iter()
                                            .map(|range| view! {
                                                <button
                                                    type="button"
                                                    class=move || {
                                                        if vm.area.get() == Some(range) {
                                                            "chip chip--active"
                                                        } else {
                                                            "chip"
                                                        }
                                                    }
                                                    on:click=move |_| vm.area.set(Some(range))
                                                >
                                                    {range.code()}
                                                </button>
                                            })
                                            .collect_view()}
                                    </div>
                                </div>

                                <div class="form-group">
                                    <label>"النمط المفضل"</label>
                                    <Select value=vm.style>
                                        {KitchenStyle::ALL
                                            .into_iter()
                                            .map(|style| view! {
                                                <option value=style.code()>{style.label_ar()}</option>
                                            })
                                            .collect_view()}
                                    </Select>
                                </div>

                                <div class="form-group">
                                    <label>{format!("صور المطبخ الحالي (حتى {} صور)", max_images)}</label>
                                    <input type="file" accept="image/*" multiple=true on:change=on_files />
                                    <ul class="consultation__files">
                                        {move || vm
                                            .image_names
                                            .get()
                                            .into_iter()
                                            .map(|name| view! { <li>{name}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            </Show>
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Show when=move || vm.stage.get() == FormStage::Editing>
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=vm.submitting
                                on_click=submit.clone()
                            >
                                {move || if vm.submitting.get() { "جارٍ الإرسال..." } else { "إرسال الطلب" }}
                            </Button>
                            <Button appearance=ButtonAppearance::Subtle on_click=move |_| open.set(false)>
                                "إلغاء"
                            </Button>
                        </Show>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
