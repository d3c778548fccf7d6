use snafu::Snafu;
use url::Url;

/// Errors surfaced by [`FigmaClient`](crate::FigmaClient).
///
/// Every network or decoding failure here is fatal to a sync run; only a
/// missing per-icon image URL (which is not an error at this layer) is
/// recoverable by the caller.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("invalid characters in the API access token"))]
    InvalidApiToken {
        source: reqwest::header::InvalidHeaderValue,
    },

    #[snafu(display("failed to build the HTTP client"))]
    BuildClient { source: reqwest::Error },

    #[snafu(display("failed to construct request URL from '{suffix}'"))]
    ConstructUrl {
        suffix: String,
        source: url::ParseError,
    },

    #[snafu(display("request to {url} failed"))]
    PerformRequest { url: Url, source: reqwest::Error },

    #[snafu(display(
        "Figma API returned HTTP {code}: {}{}",
        description.as_deref().unwrap_or("<empty body>"),
        status_guidance(*code)
    ))]
    BadResponse {
        code: u16,
        description: Option<String>,
    },

    #[snafu(display("failed to decode response body"))]
    DecodeResponse { source: reqwest::Error },

    #[snafu(display("image render request failed: {message}"))]
    ImageRender { message: String },

    #[snafu(display(
        "node '{node_id}' not found in the response; check the icon container node id"
    ))]
    NodeNotFound { node_id: String },
}

/// Actionable hint appended to API status failures.
fn status_guidance(code: u16) -> &'static str {
    match code {
        403 => " (check that the access token is valid and grants file read access)",
        404 => " (check the file id and that the file is visible to the token)",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_response_carries_guidance() {
        let forbidden = Error::BadResponse { code: 403, description: None };
        assert!(forbidden.to_string().contains("access token"));

        let missing = Error::BadResponse { code: 404, description: Some("Not found".into()) };
        assert!(missing.to_string().contains("file id"));
        assert!(missing.to_string().contains("Not found"));

        let other = Error::BadResponse { code: 500, description: None };
        assert!(!other.to_string().contains("check"));
    }
}
