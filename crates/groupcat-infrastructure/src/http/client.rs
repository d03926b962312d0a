//! Shared HTTP client for the forum host

use reqwest::{Client, RequestBuilder, Url};

use groupcat_core::error::SyncError;

/// Authenticated client for the forum host's v3 write API. Cheap to clone;
/// the underlying connection pool is shared.
#[derive(Clone)]
pub struct ForumClient {
    http: Client,
    base_url: Url,
    api_token: String,
}

impl ForumClient {
    pub fn new(base_url: &str, api_token: String) -> Result<Self, SyncError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| SyncError::SettingsHost(format!("invalid forum base URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(SyncError::SettingsHost(format!(
                "invalid forum base URL: {}",
                base_url
            )));
        }
        Ok(Self {
            http: Client::new(),
            base_url,
            api_token,
        })
    }

    /// Builds `{base}/api/v3/{segments...}`, percent-encoding each segment.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .expect("base URL validated at construction");
            path.pop_if_empty();
            path.extend(["api", "v3"]);
            path.extend(segments);
        }
        url
    }

    pub(crate) fn get(&self, segments: &[&str]) -> RequestBuilder {
        self.http
            .get(self.endpoint(segments))
            .bearer_auth(&self.api_token)
    }

    pub(crate) fn post(&self, segments: &[&str]) -> RequestBuilder {
        self.http
            .post(self.endpoint(segments))
            .bearer_auth(&self.api_token)
    }

    pub(crate) fn put(&self, segments: &[&str]) -> RequestBuilder {
        self.http
            .put(self.endpoint(segments))
            .bearer_auth(&self.api_token)
    }

    pub(crate) fn delete(&self, segments: &[&str]) -> RequestBuilder {
        self.http
            .delete(self.endpoint(segments))
            .bearer_auth(&self.api_token)
    }
}
