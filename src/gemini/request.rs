use url::Url;

use crate::gemini::error::GeminiError;

/// The only URL scheme this server accepts.
pub const SCHEME: &str = "gemini";

/// A validated Gemini request.
///
/// Only [`Request::parse`] builds one, so `scheme` is always [`SCHEME`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The request line as received, without its terminator
    pub url: String,
    /// Always `gemini`
    pub scheme: String,
    /// Authority host, empty when the URL has none
    pub host: String,
    /// Path component, still percent-encoded
    pub path: String,
}

impl Request {
    /// Parses a request line into a `Request`.
    ///
    /// The line must already be stripped of its trailing CRLF. The scheme is
    /// compared case-sensitively against [`SCHEME`] before the URL itself is
    /// parsed.
    ///
    /// # Example
    ///
    /// ```
    /// # use gemserve::gemini::request::Request;
    /// let req = Request::parse("gemini://example.org/docs/").unwrap();
    /// assert_eq!(req.host, "example.org");
    /// assert_eq!(req.path, "/docs/");
    /// assert!(Request::parse("https://example.org/").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, GeminiError> {
        let scheme = raw.split_once(':').map_or("", |(scheme, _)| scheme);
        if scheme != SCHEME {
            return Err(GeminiError::bad_request(format!(
                "unsupported URL scheme `{scheme}`"
            )));
        }

        let url = Url::parse(raw).map_err(|e| GeminiError::bad_request(format!("invalid URL: {e}")))?;

        Ok(Request {
            url: raw.to_string(),
            scheme: url.scheme().to_string(),
            host: url.host_str().unwrap_or_default().to_string(),
            path: url.path().to_string(),
        })
    }
}
