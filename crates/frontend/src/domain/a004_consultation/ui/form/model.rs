use contracts::domain::a004_consultation::request::IMAGES_FIELD;
use contracts::domain::a004_consultation::ConsultationRequest;
use contracts::shared::error::SiteError;
use web_sys::{File, FormData};

use crate::shared::api_utils::{js_error, post_form};

fn build_form_data(request: &ConsultationRequest, images: &[File]) -> Result<FormData, SiteError> {
    let form = FormData::new().map_err(js_error)?;
    for (name, value) in request.form_fields() {
        form.append_with_str(name, &value).map_err(js_error)?;
    }
    for image in images {
        form.append_with_blob_and_filename(IMAGES_FIELD, image, &image.name())
            .map_err(js_error)?;
    }
    Ok(form)
}

/// `POST /consultations` as `multipart/form-data`.
pub async fn submit_consultation(
    base: &str,
    request: &ConsultationRequest,
    images: &[File],
) -> Result<(), SiteError> {
    let form = build_form_data(request, images)?;
    let response = post_form(base, "consultations", &form).await?;
    log::info!("consultation submitted: {}", response);
    Ok(())
}
