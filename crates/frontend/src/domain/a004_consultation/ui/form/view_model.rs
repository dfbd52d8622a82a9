use contracts::domain::a001_estimator::KitchenStyle;
use contracts::domain::a004_consultation::request::cap_images;
use contracts::domain::a004_consultation::{AreaRange, ConsultationRequest};
use contracts::shared::lifecycle::LifecycleGuard;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use super::model;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStage {
    Editing,
    Submitted,
}

/// State of the consultation form. Image files are browser handles and
/// stay in local storage; only their names are reactive.
#[derive(Clone, Copy)]
pub struct ConsultationFormViewModel {
    pub full_name: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub address: RwSignal<String>,
    pub area: RwSignal<Option<AreaRange>>,
    /// Style code as used by the `<select>`.
    pub style: RwSignal<String>,
    pub images: StoredValue<Vec<File>, LocalStorage>,
    pub image_names: RwSignal<Vec<String>>,
    pub error: RwSignal<Option<String>>,
    pub submitting: RwSignal<bool>,
    pub stage: RwSignal<FormStage>,
}

impl ConsultationFormViewModel {
    pub fn new() -> Self {
        let defaults = ConsultationRequest::default();
        Self {
            full_name: RwSignal::new(defaults.full_name),
            phone: RwSignal::new(defaults.phone),
            address: RwSignal::new(defaults.address),
            area: RwSignal::new(defaults.area),
            style: RwSignal::new(defaults.style.code().to_string()),
            images: StoredValue::new_local(Vec::new()),
            image_names: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            submitting: RwSignal::new(false),
            stage: RwSignal::new(FormStage::Editing),
        }
    }

    /// Reset the form to `prefill`, dropping any previous answers.
    pub fn load(&self, prefill: &ConsultationRequest) {
        self.full_name.set(prefill.full_name.clone());
        self.phone.set(prefill.phone.clone());
        self.address.set(prefill.address.clone());
        self.area.set(prefill.area);
        self.style.set(prefill.style.code().to_string());
        self.images.set_value(Vec::new());
        self.image_names.set(Vec::new());
        self.error.set(None);
        self.submitting.set(false);
        self.stage.set(FormStage::Editing);
    }

    pub fn request(&self) -> ConsultationRequest {
        ConsultationRequest {
            full_name: self.full_name.get_untracked().trim().to_string(),
            phone: self.phone.get_untracked().trim().to_string(),
            address: self.address.get_untracked().trim().to_string(),
            area: self.area.get_untracked(),
            style: KitchenStyle::from_code(&self.style.get_untracked()).unwrap_or_default(),
        }
    }

    /// Keep the first `max` picked files.
    pub fn set_images(&self, files: Vec<File>, max: usize) {
        let picked = files.len();
        let files = cap_images(files, max);
        if files.len() < picked {
            log::warn!("{} images picked, keeping the first {}", picked, max);
        }
        self.image_names
            .set(files.iter().map(|f| f.name()).collect());
        self.images.set_value(files);
    }

    pub fn submit_command(&self, base: String, guard: LifecycleGuard) {
        if self.submitting.get_untracked() {
            return;
        }
        let request = self.request();
        if let Err(e) = request.validate() {
            self.error.set(Some(e.to_string()));
            return;
        }

        let images = self.images.get_value();
        let vm = *self;
        vm.error.set(None);
        vm.submitting.set(true);

        spawn_local(async move {
            let result = model::submit_consultation(&base, &request, &images).await;
            guard.apply(|| {
                match result {
                    Ok(()) => vm.stage.set(FormStage::Submitted),
                    Err(e) => {
                        log::error!("consultation submit failed: {}", e);
                        vm.error
                            .set(Some(format!("تعذر إرسال الطلب، حاول مرة أخرى ({})", e)));
                    }
                }
                vm.submitting.set(false);
            });
        });
    }
}

impl Default for ConsultationFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}
