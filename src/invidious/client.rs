//! Invidious API client implementation.
//!
//! Builds `/api/v1/` URLs, performs timed GET requests and hands the decoded
//! bodies to the list parser.

use crate::invidious::error::{InvidiousError, Result};
use crate::invidious::locale::{DEFAULT_DESCRIPTION_ID, Localize, StringTable};
use crate::invidious::parse::ListItems;
use reqwest::blocking::Client;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

/// Timeout applied to every request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Invidious API client.
///
/// Every call is a single blocking GET; nothing is cached or retried.
#[derive(Clone)]
pub struct InvidiousClient {
    /// HTTP client for API requests
    client: Client,
    /// Instance root without trailing slash
    instance_url: String,
    /// Host string lookup for default texts
    localizer: Arc<dyn Localize + Send + Sync>,
}

impl fmt::Debug for InvidiousClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvidiousClient")
            .field("instance_url", &self.instance_url)
            .finish_non_exhaustive()
    }
}

impl InvidiousClient {
    /// Create a client with the built-in string table.
    pub fn new(instance_url: &str) -> Result<Self> {
        Self::with_localizer(instance_url, StringTable::default())
    }

    /// Create a client for an instance.
    ///
    /// # Arguments
    /// * `instance_url` - Instance root, e.g. `https://yewtu.be/`
    /// * `localizer` - Host string lookup
    ///
    /// # Returns
    /// * `Result<InvidiousClient>` - New client or error
    ///
    /// # Details
    /// Trailing slashes are trimmed from the instance URL. The URL must parse.
    pub fn with_localizer<L>(instance_url: &str, localizer: L) -> Result<Self>
    where
        L: Localize + Send + Sync + 'static,
    {
        let instance_url = instance_url.trim_end_matches('/').to_string();
        Url::parse(&instance_url).map_err(|source| InvidiousError::InvalidInstance {
            url: instance_url.clone(),
            source,
        })?;

        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            instance_url,
            localizer: Arc::new(localizer),
        })
    }

    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    /// Assemble the URL for an API path.
    ///
    /// # Arguments
    /// * `path` - Path segments below `/api/v1/`, joined with `/`
    /// * `params` - Query parameters, appended in order
    ///
    /// # Details
    /// Repeated separators in the joined path collapse to one, so
    /// `["videos/", "abc"]` becomes `videos/abc`. Each piece is pushed as a
    /// percent-encoded segment; `.` and `..` pieces are dropped so the URL
    /// always stays below `/api/v1/`.
    pub fn build_url(&self, path: &[&str], params: &[(&str, &str)]) -> Result<Url> {
        let mut url_path = path.join("/");
        while url_path.contains("//") {
            url_path = url_path.replace("//", "/");
        }

        let base = format!("{}/api/v1", self.instance_url);
        let mut url = Url::parse(&base).map_err(|source| InvidiousError::InvalidInstance {
            url: base.clone(),
            source,
        })?;

        url.path_segments_mut()
            .map_err(|_| InvidiousError::InvalidInstance {
                url: base.clone(),
                source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
            })?
            .extend(
                url_path
                    .split('/')
                    .filter(|piece| !matches!(*piece, "" | "." | "..")),
            );

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        Ok(url)
    }

    /// Perform a GET request and decode the JSON body.
    ///
    /// # Returns
    /// * `Result<Value>` - Decoded body, or an error for transport failures and non-2xx status
    pub fn get(&self, path: &[&str], params: &[(&str, &str)]) -> Result<Value> {
        let url = self.build_url(path, params)?;

        tracing::debug!(%url, "request started");
        let start = Instant::now();
        let response = self.client.get(url).send()?;
        tracing::debug!(
            status = %response.status(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "request finished"
        );

        let body = response.error_for_status()?.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Turn a decoded body into list records.
    pub fn parse_response(&self, data: Value) -> ListItems {
        ListItems::new(
            data,
            self.localizer.localized_string(DEFAULT_DESCRIPTION_ID),
        )
    }

    /// Search the instance, newest uploads first.
    ///
    /// # Arguments
    /// * `terms` - Search terms, joined with spaces
    pub fn search<S: AsRef<str>>(&self, terms: &[S]) -> Result<ListItems> {
        let query = terms
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
        let data = self.get(&["search"], &[("q", query.as_str()), ("sort_by", "upload_date")])?;
        Ok(self.parse_response(data))
    }

    /// Fetch the raw details object of a single video.
    pub fn fetch_video_information(&self, video_id: &str) -> Result<Value> {
        self.get(&["videos/", video_id], &[])
    }

    /// Fetch the latest uploads of a channel.
    pub fn fetch_channel_list(&self, channel_id: &str) -> Result<ListItems> {
        let data = self.get(&["channels/videos/", channel_id], &[])?;
        Ok(self.parse_response(data))
    }

    /// Fetch a curated list such as `popular` or `trending`.
    pub fn fetch_special_list(&self, name: &str) -> Result<ListItems> {
        let data = self.get(&[name], &[])?;
        Ok(self.parse_response(data))
    }
}
