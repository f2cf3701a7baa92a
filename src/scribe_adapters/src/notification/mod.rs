pub mod mock_notification_sink;
pub mod postmark_notification_sink;
