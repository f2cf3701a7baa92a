use std::sync::Arc;
use tokio::sync::RwLock;

use secrecy::ExposeSecret;

use scribe_core::{Email, NotificationSink};

/// Recorded copy of one delivered message.
#[derive(Debug, Clone)]
pub struct RecordedDelivery {
    pub recipient: String,
    pub subject: String,
    pub content: String,
}

/// Notification sink for tests: delivers nothing, records everything.
#[derive(Debug, Clone, Default)]
pub struct MockNotificationSink {
    deliveries: Arc<RwLock<Vec<RecordedDelivery>>>,
}

impl MockNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn deliveries(&self) -> Vec<RecordedDelivery> {
        self.deliveries.read().await.clone()
    }
}

#[async_trait::async_trait]
impl NotificationSink for MockNotificationSink {
    async fn deliver(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), String> {
        self.deliveries.write().await.push(RecordedDelivery {
            recipient: recipient.as_ref().expose_secret().clone(),
            subject: subject.to_string(),
            content: content.to_string(),
        });
        Ok(())
    }
}
