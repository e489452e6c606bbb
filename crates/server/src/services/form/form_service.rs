use crate::dtos::form_dto::SubmitFormDto;
use async_trait::async_trait;
use chrono::Utc;
use database::form::{model::FormSubmission, repository::DynFormRepository};
use std::sync::Arc;
use utils::AppResult;

pub type DynFormService = Arc<dyn FormServiceTrait + Send + Sync>;

#[async_trait]
pub trait FormServiceTrait {
    async fn submit_form(&self, req: SubmitFormDto) -> AppResult<()>;
    async fn list_submissions(&self) -> AppResult<Vec<FormSubmission>>;
}

#[derive(Clone)]
pub struct FormService {
    repository: DynFormRepository,
}

impl FormService {
    pub fn new(repository: DynFormRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl FormServiceTrait for FormService {
    async fn submit_form(&self, req: SubmitFormDto) -> AppResult<()> {
        let submission = FormSubmission {
            id: None,
            name: req.name,
            address: req.address,
            pincode: req.pincode,
            mobile: req.mobile,
            timestamp: Utc::now().timestamp() as u64,
        };

        self.repository.create_submission(submission).await?;

        Ok(())
    }

    async fn list_submissions(&self) -> AppResult<Vec<FormSubmission>> {
        let submissions = self.repository.list_submissions().await?;

        Ok(submissions)
    }
}
