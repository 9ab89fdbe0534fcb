use bytes::Bytes;

use crate::gemini::status::StatusCode;

/// Line terminator used by every Gemini header and gemtext line.
pub const CRLF: &str = "\r\n";

/// Content type of gemtext, the protocol's native markup.
pub const GEMTEXT_MIME: &str = "text/gemini";

/// A response ready to be written to a client.
///
/// The header is `<code>[ <meta>]\r\n`; the body, when present, follows it
/// unframed and ends when the connection closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The Gemini status code
    pub status: StatusCode,
    /// Content type on success, human-readable text otherwise
    pub meta: Option<String>,
    /// Raw body bytes, only sent with success responses
    pub body: Option<Bytes>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum HeaderParseError {
    MissingTerminator,
    InvalidEncoding,
    InvalidCode,
    UnknownStatus(u8),
}

impl Response {
    /// Creates a response. A body on a non-success status is dropped.
    pub fn new(status: StatusCode, meta: Option<String>, body: Option<Bytes>) -> Self {
        let body = if status.is_success() { body } else { None };
        Self { status, meta, body }
    }

    /// Creates a 20 SUCCESS response carrying `body`.
    pub fn success(content_type: Option<String>, body: impl Into<Bytes>) -> Self {
        Self::new(StatusCode::Success, content_type, Some(body.into()))
    }

    /// Encodes the header line as UTF-8 bytes.
    ///
    /// # Example
    ///
    /// ```
    /// # use gemserve::gemini::response::Response;
    /// let res = Response::success(Some("text/gemini".into()), "# hi");
    /// assert_eq!(res.header(), b"20 text/gemini\r\n");
    /// ```
    pub fn header(&self) -> Vec<u8> {
        let line = match &self.meta {
            Some(meta) => format!("{} {}{}", self.status.as_u8(), meta, CRLF),
            None => format!("{}{}", self.status.as_u8(), CRLF),
        };
        line.into_bytes()
    }

    /// Decodes a header line produced by [`Response::header`].
    ///
    /// Returns the status and the meta, if one was present.
    pub fn parse_header(buf: &[u8]) -> Result<(StatusCode, Option<String>), HeaderParseError> {
        let line = buf
            .strip_suffix(CRLF.as_bytes())
            .ok_or(HeaderParseError::MissingTerminator)?;
        let line = std::str::from_utf8(line).map_err(|_| HeaderParseError::InvalidEncoding)?;

        let (code, meta) = match line.split_once(' ') {
            Some((code, meta)) => (code, Some(meta.to_string())),
            None => (line, None),
        };

        if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(HeaderParseError::InvalidCode);
        }
        let code: u8 = code.parse().map_err(|_| HeaderParseError::InvalidCode)?;
        let status = StatusCode::from_u8(code).ok_or(HeaderParseError::UnknownStatus(code))?;

        Ok((status, meta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_without_meta() {
        let res = Response::new(StatusCode::Success, None, Some(Bytes::from_static(b"x")));
        assert_eq!(res.header(), b"20\r\n");
    }

    #[test]
    fn failure_drops_body() {
        let res = Response::new(
            StatusCode::NotFound,
            None,
            Some(Bytes::from_static(b"ignored")),
        );
        assert!(res.body.is_none());
    }
}
