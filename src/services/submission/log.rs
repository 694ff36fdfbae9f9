use async_trait::async_trait;

use super::SubmissionSink;
use crate::models::BookingRequest;

/// Sink that only records the request in the log. Stands in wherever no
/// real backend is wired up yet.
pub struct LogSink;

#[async_trait]
impl SubmissionSink for LogSink {
    async fn deliver(&self, request: &BookingRequest) -> anyhow::Result<()> {
        let payload = serde_json::to_string(request)?;
        tracing::info!(id = %request.id, %payload, "booking request submitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_log_sink_accepts_any_request() {
        let request = BookingRequest {
            id: "req-1".to_string(),
            phone: "+38 (067) 123-45-67".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 16).unwrap(),
            time: "9:30".to_string(),
            created_at: NaiveDate::from_ymd_opt(2025, 6, 16)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
        };
        assert!(LogSink.deliver(&request).await.is_ok());
    }
}
