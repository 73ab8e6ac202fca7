//! Favorite Endpoint

use super::FormSubmission;
use crate::error::InteractionError;
use crate::models::FavoriteResponse;

/// Toggle a favorite and return the server's count.
///
/// The status is not checked; an error page fails to decode instead.
pub async fn toggle_favorite(submission: FormSubmission) -> Result<i64, InteractionError> {
    let response = submission.send().await?;
    let body = response.text().await?;
    favorite_count(&body)
}

pub fn favorite_count(body: &str) -> Result<i64, InteractionError> {
    match serde_json::from_str::<FavoriteResponse>(body)? {
        FavoriteResponse { error: Some(message), .. } => Err(InteractionError::Server(message)),
        FavoriteResponse { favorite_count: Some(count), .. } => Ok(count),
        _ => Err(InteractionError::Server("response has no favorite_count".to_string())),
    }
}
