//! Best-effort delivery to the spreadsheet webhook.
//!
//! The webhook is a third-party script that never answers in a way the form
//! can rely on, so a delivery only reports whether the request could be
//! sent. Any HTTP response, including 4xx and 5xx, counts as delivered; only
//! transport failures (DNS, refused connection, TLS, bad URL) are errors.
//! There is exactly one attempt per call and no timeout beyond the
//! transport's own.

use crate::registration::payload::RegistrationPayload;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("could not reach the registration webhook: {0}")]
    Transport(#[from] reqwest::Error),
}

/// POSTs registration payloads without looking at the response.
#[derive(Debug, Clone)]
pub struct BestEffortDelivery {
    client: reqwest::Client,
    url: String,
}

impl BestEffortDelivery {
    pub fn new(url: impl Into<String>) -> Result<Self, DeliveryError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn deliver(&self, payload: &RegistrationPayload) -> Result<(), DeliveryError> {
        // Status and body are deliberately dropped unread.
        let _response = self.client.post(&self.url).json(payload).send().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::draft::RegistrationDraft;
    use chrono::Utc;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn payload() -> RegistrationPayload {
        RegistrationPayload::from_draft(&RegistrationDraft::sample(), Utc::now())
    }

    /// A loopback URL with nothing listening behind it.
    fn refused_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{port}/exec")
    }

    #[tokio::test]
    async fn test_posts_json_once() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/exec"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let delivery = BestEffortDelivery::new(format!("{}/exec", server.uri())).unwrap();
        delivery.deliver(&payload()).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["collegeName"], "KLE BCA College");
        assert_eq!(body["email"], "Not provided");
        assert_eq!(body["participants"], "4");
        assert_eq!(body["stream"], "Science");
        assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
        assert_eq!(body.as_object().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_error_status_still_counts_as_delivered() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("script error"))
            .expect(1)
            .mount(&server)
            .await;

        let delivery = BestEffortDelivery::new(format!("{}/exec", server.uri())).unwrap();
        assert!(delivery.deliver(&payload()).await.is_ok());
    }

    #[tokio::test]
    async fn test_connection_refused_is_an_error() {
        let delivery = BestEffortDelivery::new(refused_url()).unwrap();
        let err = delivery.deliver(&payload()).await.unwrap_err();
        assert!(matches!(err, DeliveryError::Transport(_)));
    }
}
