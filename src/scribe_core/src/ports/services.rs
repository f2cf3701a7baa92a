use async_trait::async_trait;

use crate::domain::email::Email;

/// Port trait for delivering a message to an address.
///
/// The core only composes and hands off content (reset links); transport is
/// entirely the collaborator's concern.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn deliver(&self, recipient: &Email, subject: &str, content: &str)
    -> Result<(), String>;
}
