//! Follow Endpoints

use super::FormSubmission;
use crate::error::InteractionError;
use crate::models::FollowResponse;

/// Toggle a follow and return the server's follower count
pub async fn toggle_follow(submission: FormSubmission) -> Result<i64, InteractionError> {
    let response = submission.send().await?;
    check_status(response.status())?;
    let body = response.text().await?;
    follow_count(&body)
}

/// Toggle a follow from the compact button; the body is not read
pub async fn toggle_mini_follow(submission: FormSubmission) -> Result<(), InteractionError> {
    let response = submission.send().await?;
    check_status(response.status())
}

/// Same range as `Response.ok`
pub fn check_status(status: u16) -> Result<(), InteractionError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(InteractionError::Status(status))
    }
}

pub fn follow_count(body: &str) -> Result<i64, InteractionError> {
    Ok(serde_json::from_str::<FollowResponse>(body)?.follow_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status() {
        assert!(check_status(200).is_ok());
        assert!(check_status(204).is_ok());
        assert!(matches!(check_status(302), Err(InteractionError::Status(302))));
        assert!(matches!(check_status(403), Err(InteractionError::Status(403))));
        assert!(matches!(check_status(500), Err(InteractionError::Status(500))));
    }

    #[test]
    fn test_follow_count() {
        assert_eq!(follow_count(r#"{"follow_count": 31}"#).unwrap(), 31);
        assert_eq!(follow_count(r#"{"follow_count": 31, "followed": true}"#).unwrap(), 31);
    }

    #[test]
    fn test_follow_count_missing() {
        assert!(matches!(follow_count("{}"), Err(InteractionError::Decode(_))));
    }
}
