use crate::{form::model::FormSubmission, Database};
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use std::sync::Arc;
use utils::AppResult;

pub type DynFormRepository = Arc<dyn FormRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait FormRepositoryTrait {
    async fn create_submission(&self, submission: FormSubmission) -> AppResult<()>;

    async fn list_submissions(&self) -> AppResult<Vec<FormSubmission>>;
}

#[async_trait]
impl FormRepositoryTrait for Database {
    async fn create_submission(&self, submission: FormSubmission) -> AppResult<()> {
        self.form_submissions.insert_one(submission, None).await?;

        Ok(())
    }

    async fn list_submissions(&self) -> AppResult<Vec<FormSubmission>> {
        let cursor = self.form_submissions.find(None, None).await?;
        let submissions: Vec<FormSubmission> = cursor.try_collect().await?;

        Ok(submissions)
    }
}
