//! HTTP client for the Figma REST API.

use crate::error::{
    BadResponseSnafu, BuildClientSnafu, ConstructUrlSnafu, DecodeResponseSnafu, Error,
    ImageRenderSnafu, InvalidApiTokenSnafu, NodeNotFoundSnafu, PerformRequestSnafu,
};
use crate::models::{GetFileNodesResponse, GetImagesResponse, ImageFormat, Node};
use reqwest::{
    Client, ClientBuilder, Response,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use snafu::{OptionExt, ResultExt, ensure};
use std::collections::HashMap;
use std::sync::LazyLock;
use url::Url;

static DEFAULT_BASE_URL: LazyLock<Url> = LazyLock::new(|| {
    Url::parse("https://api.figma.com/v1/")
        .expect("unreachable error: failed to parse default base URL")
});

/// The production Figma API base URL.
pub fn default_base_url() -> Url {
    DEFAULT_BASE_URL.clone()
}

/// A builder for [`FigmaClient`].
pub struct FigmaBuilder {
    token: String,
    base_url: Url,
    client_builder: ClientBuilder,
}

impl FigmaBuilder {
    /// Creates a new builder with the given personal access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.clone(),
            client_builder: ClientBuilder::default(),
        }
    }

    /// Overrides the API base URL. The URL must end with a trailing slash for
    /// endpoint suffixes to join correctly.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Supplies a pre-configured [`ClientBuilder`] (proxies, timeouts, ...).
    pub fn with_client_builder(mut self, client_builder: ClientBuilder) -> Self {
        self.client_builder = client_builder;
        self
    }

    /// Builds the client, installing the `X-Figma-Token` default header.
    pub fn build(self) -> Result<FigmaClient, Error> {
        let headers = HeaderMap::from_iter([(
            HeaderName::from_static("x-figma-token"),
            HeaderValue::from_str(&self.token).context(InvalidApiTokenSnafu)?,
        )]);

        let http_client = self
            .client_builder
            .default_headers(headers)
            .build()
            .context(BuildClientSnafu)?;

        Ok(FigmaClient { http_client, base_url: self.base_url })
    }
}

/// Client for the read-only Figma endpoints used by the sync pipeline.
#[derive(Debug, Clone)]
pub struct FigmaClient {
    http_client: Client,
    base_url: Url,
}

impl FigmaClient {
    /// Creates a client with default settings for the given access token.
    pub fn new(token: impl Into<String>) -> Result<Self, Error> {
        FigmaBuilder::new(token).build()
    }

    /// Starts building a client.
    pub fn builder(token: impl Into<String>) -> FigmaBuilder {
        FigmaBuilder::new(token)
    }

    fn build_url(&self, suffix: &str) -> Result<Url, Error> {
        self.base_url.join(suffix).context(ConstructUrlSnafu { suffix })
    }

    /// Perform a GET request and deserialize the JSON response.
    #[tracing::instrument(skip(self), fields(request.type = "get", request.url = %url))]
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .context(PerformRequestSnafu { url })?;
        let response = check_response(response).await?;
        response.json().await.context(DecodeResponseSnafu)
    }

    /// Fetch the document subtree rooted at `node_id` within `file_id`.
    ///
    /// Fails with [`Error::NodeNotFound`] when the response omits the
    /// requested id.
    pub async fn get_file_nodes(&self, file_id: &str, node_id: &str) -> Result<Node, Error> {
        let mut url = self.build_url(&format!("files/{file_id}/nodes"))?;
        url.query_pairs_mut().append_pair("ids", node_id);

        let mut response: GetFileNodesResponse = self.get_json(url).await?;
        let wrapper = response.nodes.remove(node_id).context(NodeNotFoundSnafu { node_id })?;
        Ok(wrapper.document)
    }

    /// Request rendered-image URLs for a set of node ids in one batched call.
    ///
    /// The returned map carries `None` for nodes Figma could not render;
    /// callers decide whether that is recoverable.
    pub async fn get_image_urls(
        &self,
        file_id: &str,
        ids: &[String],
        format: ImageFormat,
    ) -> Result<HashMap<String, Option<String>>, Error> {
        let mut url = self.build_url(&format!("images/{file_id}"))?;
        url.query_pairs_mut()
            .append_pair("ids", &ids.join(","))
            .append_pair("format", format.as_str());

        let response: GetImagesResponse = self.get_json(url).await?;
        ensure!(
            response.err.is_none(),
            ImageRenderSnafu { message: response.err.unwrap_or_default() }
        );
        Ok(response.images)
    }

    /// Download a rendered asset body from an absolute URL returned by the
    /// images endpoint. These URLs are pre-signed; the auth header the client
    /// carries is ignored by the storage host.
    #[tracing::instrument(skip(self), fields(request.type = "get"))]
    pub async fn download_asset(&self, url: &str) -> Result<String, Error> {
        let url = Url::parse(url).context(ConstructUrlSnafu { suffix: url })?;
        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .context(PerformRequestSnafu { url })?;
        let response = check_response(response).await?;
        response.text().await.context(DecodeResponseSnafu)
    }
}

async fn check_response(response: Response) -> Result<Response, Error> {
    let status = response.status();
    if !status.is_success() {
        let description = response.text().await.ok();
        BadResponseSnafu { code: status.as_u16(), description }.fail()
    } else {
        Ok(response)
    }
}
