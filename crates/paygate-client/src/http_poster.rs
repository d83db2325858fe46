use paygate::{HttpPoster, TransportError, TransportResponse};

/// [`HttpPoster`] backed by `reqwest`.
///
/// The default client carries a 30 second deadline and follows no
/// redirects; inject a custom `reqwest::Client` to change either.
#[derive(Debug, Clone)]
pub struct ReqwestPoster {
    http: reqwest::Client,
}

impl ReqwestPoster {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .redirect(reqwest::redirect::Policy::none())
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    /// Create a poster with a custom reqwest::Client.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Default for ReqwestPoster {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpPoster for ReqwestPoster {
    async fn post(
        &self,
        url: &str,
        headers: &[(&str, String)],
        body: Option<&[u8]>,
    ) -> Result<TransportResponse, TransportError> {
        let mut request = self.http.post(url);
        for (name, value) in headers {
            request = request.header(*name, value);
        }
        if let Some(bytes) = body {
            request = request.body(bytes.to_vec());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout(e.to_string())
            } else {
                TransportError::Connection(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Connection(e.to_string()))?
            .to_vec();

        Ok(TransportResponse { status, body })
    }
}
