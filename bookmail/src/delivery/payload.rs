use serde::Serialize;

use crate::form::ValidSubmission;

/// Values substituted into the provider-side email template. Names match
/// the form input names; absent values are sent as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TemplateParams {
    pub user_name: String,
    pub user_phone: String,
    pub user_email: String,
    pub book_name: String,
    pub book_quantity: String,
    pub message: String,
}

impl From<&ValidSubmission> for TemplateParams {
    fn from(valid: &ValidSubmission) -> Self {
        let submission = valid.submission();
        Self {
            user_name: submission.name.clone().unwrap_or_default(),
            user_phone: submission.phone.clone().unwrap_or_default(),
            user_email: submission.email.clone().unwrap_or_default(),
            book_name: valid.book_name().to_string(),
            book_quantity: submission.book_quantity.clone().unwrap_or_default(),
            message: submission.message.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: TemplateParams,
}
