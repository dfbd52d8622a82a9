use contracts::domain::a001_estimator::aggregate::{AREA_MAX, AREA_MIN, UNITS_MAX, UNITS_MIN};
use contracts::domain::a001_estimator::{
    CalculateOutcome, EstimatePolicy, EstimateSummary, EstimatorWizard, KitchenStyle, Material,
    WizardStep,
};
use contracts::shared::number_format::format_price_ar;
use leptos::prelude::*;
use thaw::*;

const CURRENCY: &str = "ريال";

/// Three-step price estimator. With [`EstimatePolicy::OpenConsultation`]
/// the calculate button hands the answers straight to
/// `on_request_consultation` instead of showing the result screen.
#[component]
#[allow(non_snake_case)]
pub fn EstimatorSection(
    #[prop(optional)] policy: EstimatePolicy,
    #[prop(into)] on_request_consultation: Callback<EstimateSummary>,
) -> impl IntoView {
    let wizard = RwSignal::new(EstimatorWizard::new(policy));
    let step = Memo::new(move |_| wizard.with(|w| w.step()));

    let calculate = move |_| {
        let outcome = wizard.try_update(|w| w.calculate());
        if let Some(CalculateOutcome::ConsultationRequested(summary)) = outcome {
            on_request_consultation.run(summary);
        }
    };

    let book = move |_| {
        if let Some(summary) = wizard.with(|w| w.request_consultation()) {
            on_request_consultation.run(summary);
        }
    };

    view! {
        <section class="estimator" id="estimator" dir="rtl">
            <div class="estimator__header">
                <h2>"احسب تكلفة مطبخك"</h2>
                <p>"ثلاث خطوات بسيطة للحصول على تقدير مبدئي"</p>
            </div>

            <ol class="estimator__steps">
                {WizardStep::ALL
                    .into_iter()
                    .map(|s| {
                        view! {
                            <li class=move || {
                                let current = step.get().number();
                                if s.number() == current {
                                    "estimator__step estimator__step--current"
                                } else if s.number() < current {
                                    "estimator__step estimator__step--done"
                                } else {
                                    "estimator__step"
                                }
                            }>
                                <span class="estimator__step-number">{s.number()}</span>
                                <span>{s.label_ar()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>

            <div class="estimator__body">
                {move || match step.get() {
                    WizardStep::Area => view! { <AreaStep wizard=wizard /> }.into_any(),
                    WizardStep::Style => view! { <StyleStep wizard=wizard calculate=calculate /> }.into_any(),
                    WizardStep::Result => view! { <ResultStep wizard=wizard book=book /> }.into_any(),
                }}
            </div>
        </section>
    }
}

// ============================================================================
// Steps
// ============================================================================

#[component]
#[allow(non_snake_case)]
fn AreaStep(wizard: RwSignal<EstimatorWizard>) -> impl IntoView {
    view! {
        <div class="estimator__panel">
            <label class="estimator__label">
                "مساحة المطبخ: "
                <strong>{move || wizard.with(|w| w.input().area())}" م²"</strong>
            </label>
            <input
                type="range"
                class="estimator__range"
                min=AREA_MIN.to_string()
                max=AREA_MAX.to_string()
                prop:value=move || wizard.with(|w| w.input().area().to_string())
                on:input=move |ev| {
                    if let Ok(area) = event_target_value(&ev).parse::<i64>() {
                        wizard.update(|w| {
                            w.set_area(area);
                        });
                    }
                }
            />

            <div class="estimator__options estimator__options--materials">
                {Material::ALL
                    .into_iter()
                    .map(|material| {
                        view! {
                            <button
                                class=move || {
                                    if wizard.with(|w| w.input().material()) == material {
                                        "option-card option-card--active"
                                    } else {
                                        "option-card"
                                    }
                                }
                                on:click=move |_| wizard.update(|w| {
                                    w.select_material(material);
                                })
                            >
                                <span class="option-card__icon">{material.icon()}</span>
                                <span class="option-card__title">{material.label_ar()}</span>
                                <span class="option-card__hint">{material.description_ar()}</span>
                                <span class="option-card__price">
                                    {format!("{} {}/م²", format_price_ar(material.price_per_meter() as u64), CURRENCY)}
                                </span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="estimator__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| wizard.update(|w| {
                        w.next();
                    })
                >
                    "التالي"
                </Button>
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn StyleStep<F>(wizard: RwSignal<EstimatorWizard>, calculate: F) -> impl IntoView
where
    F: Fn(leptos::ev::MouseEvent) + Copy + Send + Sync + 'static,
{
    view! {
        <div class="estimator__panel">
            <div class="estimator__options estimator__options--styles">
                {KitchenStyle::ALL
                    .into_iter()
                    .map(|style| {
                        view! {
                            <button
                                class=move || {
                                    if wizard.with(|w| w.input().style()) == style {
                                        "option-card option-card--active"
                                    } else {
                                        "option-card"
                                    }
                                }
                                on:click=move |_| wizard.update(|w| {
                                    w.select_style(style);
                                })
                            >
                                <span class="option-card__icon">{style.icon()}</span>
                                <span class="option-card__title">{style.label_ar()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <label class="estimator__label">
                "عدد الوحدات: "
                <strong>{move || wizard.with(|w| w.input().units())}</strong>
            </label>
            <input
                type="range"
                class="estimator__range"
                min=UNITS_MIN.to_string()
                max=UNITS_MAX.to_string()
                prop:value=move || wizard.with(|w| w.input().units().to_string())
                on:input=move |ev| {
                    if let Ok(units) = event_target_value(&ev).parse::<i64>() {
                        wizard.update(|w| {
                            w.set_units(units);
                        });
                    }
                }
            />

            <div class="estimator__actions">
                <Button on_click=move |_| wizard.update(|w| {
                    w.back();
                })>
                    "السابق"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=calculate>
                    "احسب التكلفة"
                </Button>
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ResultStep<F>(wizard: RwSignal<EstimatorWizard>, book: F) -> impl IntoView
where
    F: Fn(leptos::ev::MouseEvent) + Copy + Send + Sync + 'static,
{
    let (input, estimate) = wizard.with_untracked(|w| (*w.input(), w.estimate()));

    view! {
        <div class="estimator__panel estimator__result">
            {estimate.map(|e| view! {
                <div class="estimator__price">
                    <span class="estimator__price-label">"التكلفة التقديرية"</span>
                    <span class="estimator__price-range">
                        {format!("{} - {} {}", format_price_ar(e.min), format_price_ar(e.max), CURRENCY)}
                    </span>
                </div>
            })}

            <dl class="estimator__summary">
                <dt>"المساحة"</dt>
                <dd>{format!("{} م²", input.area())}</dd>
                <dt>"الخامة"</dt>
                <dd>{input.material().label_ar()}</dd>
                <dt>"النمط"</dt>
                <dd>{input.style().label_ar()}</dd>
                <dt>"عدد الوحدات"</dt>
                <dd>{input.units()}</dd>
            </dl>

            <p class="estimator__note">"السعر النهائي يحدد بعد المعاينة وأخذ المقاسات"</p>

            <div class="estimator__actions">
                <Button on_click=move |_| wizard.update(|w| w.reset())>"حساب جديد"</Button>
                <Button appearance=ButtonAppearance::Primary on_click=book>
                    "احجز استشارة مجانية"
                </Button>
            </div>
        </div>
    }
}
