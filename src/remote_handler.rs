// src/remote_handler.rs
use crate::csv_handler::CsvHandler;
use crate::data_types::RecordSet;
use crate::error::LoadError;

pub struct RemoteHandler {
    client: reqwest::Client,
}

impl RemoteHandler {
    pub fn new() -> Self {
        RemoteHandler {
            client: reqwest::Client::new(),
        }
    }

    // Plain GET of a snapshot CSV. No retries, no caching; on failure the
    // caller logs and keeps whatever record set it already had.
    pub async fn fetch_csv(&self, url: &str) -> Result<RecordSet, LoadError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| LoadError::Fetch(err.to_string()))?;

        let text = response
            .text()
            .await
            .map_err(|err| LoadError::Fetch(err.to_string()))?;

        CsvHandler::new().parse_text(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_endpoint_reports_a_fetch_error() {
        let result = RemoteHandler::new()
            .fetch_csv("http://127.0.0.1:1/default.csv")
            .await;
        assert!(matches!(result, Err(LoadError::Fetch(_))));
    }
}
