//! Toggle Endpoints
//!
//! POST a control's form to its action URL and decode what comes back.

mod favorite;
mod follow;

use gloo_net::http::{Request, Response};
use web_sys::{FormData, HtmlFormElement};

use crate::error::InteractionError;
use crate::models::ControlKind;

pub use favorite::*;
pub use follow::*;

/// A form's data, ready to POST
pub struct FormSubmission {
    url: String,
    body: FormData,
    pk: Option<String>,
}

impl FormSubmission {
    /// Snapshot `form` and append the CSRF token.
    ///
    /// Disabled inputs are left out of form data, so capture before the
    /// control is locked.
    pub fn capture(form: &HtmlFormElement, csrf_field: &str, token: &str) -> Result<Self, InteractionError> {
        let body = FormData::new_with_form(form)?;
        body.append_with_str(csrf_field, token)?;
        Ok(Self {
            url: form.action(),
            body,
            pk: form.get_attribute("data-pk"),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// `data-pk` of the form (post or poster id), for logs
    pub fn pk(&self) -> Option<&str> {
        self.pk.as_deref()
    }

    async fn send(self) -> Result<Response, InteractionError> {
        let response = Request::post(&self.url).body(self.body)?.send().await?;
        Ok(response)
    }
}

/// Submit for `kind`; `Some(count)` when the endpoint returns an authoritative count
pub async fn submit(kind: ControlKind, submission: FormSubmission) -> Result<Option<i64>, InteractionError> {
    match kind {
        ControlKind::Favorite => toggle_favorite(submission).await.map(Some),
        ControlKind::MiniFollow => toggle_mini_follow(submission).await.map(|_| None),
        ControlKind::Follow => toggle_follow(submission).await.map(Some),
    }
}
