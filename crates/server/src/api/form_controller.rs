use crate::{
    dtos::form_dto::{FormDataResponse, SubmitFormDto},
    extractors::validation_extractor::ValidationExtractor,
    services::Services,
};
use axum::{
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::{json, Value};
use utils::AppResult;

pub async fn submit_form(
    Extension(services): Extension<Services>,
    ValidationExtractor(req): ValidationExtractor<SubmitFormDto>,
) -> AppResult<Json<Value>> {
    services.form.submit_form(req).await?;

    Ok(Json(json!({ "message": "Form data received successfully!" })))
}

pub async fn admin_form_data(Extension(services): Extension<Services>) -> AppResult<Json<FormDataResponse>> {
    let form_data = services.form.list_submissions().await?;

    Ok(Json(FormDataResponse { form_data }))
}

pub struct FormController;
impl FormController {
    pub fn app() -> Router {
        Router::new()
            .route("/submit-form", post(submit_form))
            .route("/admin/form-data", get(admin_form_data))
    }
}
