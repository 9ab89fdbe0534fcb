/// Gemini status codes.
///
/// Codes are two digits; the leading digit selects the [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// 10 INPUT
    Input,
    /// 11 SENSITIVE INPUT
    SensitiveInput,
    /// 20 SUCCESS
    Success,
    /// 30 REDIRECT-TEMPORARY
    RedirectTemporary,
    /// 31 REDIRECT-PERMANENT
    RedirectPermanent,
    /// 40 TEMPORARY FAILURE
    TemporaryFailure,
    /// 41 SERVER UNAVAILABLE
    ServerUnavailable,
    /// 42 CGI ERROR
    CgiError,
    /// 43 PROXY ERROR
    ProxyError,
    /// 44 SLOW DOWN
    SlowDown,
    /// 50 PERMANENT FAILURE
    PermanentFailure,
    /// 51 NOT FOUND
    NotFound,
    /// 52 GONE
    Gone,
    /// 53 PROXY REQUEST REFUSED
    ProxyRequestRefused,
    /// 59 BAD REQUEST
    BadRequest,
    /// 60 CLIENT CERTIFICATE REQUIRED
    ClientCertificateRequired,
    /// 61 CERTIFICATE NOT AUTHORISED
    CertificateNotAuthorised,
    /// 62 CERTIFICATE NOT VALID
    CertificateNotValid,
}

/// Status class, given by the first digit of the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Input,
    Success,
    Redirect,
    TemporaryFailure,
    PermanentFailure,
    ClientCertificate,
}

impl StatusCode {
    /// Every defined status, in ascending code order.
    pub const ALL: [StatusCode; 18] = [
        StatusCode::Input,
        StatusCode::SensitiveInput,
        StatusCode::Success,
        StatusCode::RedirectTemporary,
        StatusCode::RedirectPermanent,
        StatusCode::TemporaryFailure,
        StatusCode::ServerUnavailable,
        StatusCode::CgiError,
        StatusCode::ProxyError,
        StatusCode::SlowDown,
        StatusCode::PermanentFailure,
        StatusCode::NotFound,
        StatusCode::Gone,
        StatusCode::ProxyRequestRefused,
        StatusCode::BadRequest,
        StatusCode::ClientCertificateRequired,
        StatusCode::CertificateNotAuthorised,
        StatusCode::CertificateNotValid,
    ];

    /// Returns the numeric status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use gemserve::gemini::status::StatusCode;
    /// assert_eq!(StatusCode::Success.as_u8(), 20);
    /// assert_eq!(StatusCode::NotFound.as_u8(), 51);
    /// ```
    pub fn as_u8(&self) -> u8 {
        match self {
            StatusCode::Input => 10,
            StatusCode::SensitiveInput => 11,
            StatusCode::Success => 20,
            StatusCode::RedirectTemporary => 30,
            StatusCode::RedirectPermanent => 31,
            StatusCode::TemporaryFailure => 40,
            StatusCode::ServerUnavailable => 41,
            StatusCode::CgiError => 42,
            StatusCode::ProxyError => 43,
            StatusCode::SlowDown => 44,
            StatusCode::PermanentFailure => 50,
            StatusCode::NotFound => 51,
            StatusCode::Gone => 52,
            StatusCode::ProxyRequestRefused => 53,
            StatusCode::BadRequest => 59,
            StatusCode::ClientCertificateRequired => 60,
            StatusCode::CertificateNotAuthorised => 61,
            StatusCode::CertificateNotValid => 62,
        }
    }

    /// Looks up a status by its numeric code.
    ///
    /// Returns `None` for codes outside the table.
    pub fn from_u8(code: u8) -> Option<Self> {
        StatusCode::ALL.into_iter().find(|s| s.as_u8() == code)
    }

    /// Returns the canonical reason phrase for this status.
    ///
    /// # Example
    ///
    /// ```
    /// # use gemserve::gemini::status::StatusCode;
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "NOT FOUND");
    /// assert_eq!(StatusCode::BadRequest.reason_phrase(), "BAD REQUEST");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Input => "INPUT",
            StatusCode::SensitiveInput => "SENSITIVE INPUT",
            StatusCode::Success => "SUCCESS",
            StatusCode::RedirectTemporary => "REDIRECT-TEMPORARY",
            StatusCode::RedirectPermanent => "REDIRECT-PERMANENT",
            StatusCode::TemporaryFailure => "TEMPORARY FAILURE",
            StatusCode::ServerUnavailable => "SERVER UNAVAILABLE",
            StatusCode::CgiError => "CGI ERROR",
            StatusCode::ProxyError => "PROXY ERROR",
            StatusCode::SlowDown => "SLOW DOWN",
            StatusCode::PermanentFailure => "PERMANENT FAILURE",
            StatusCode::NotFound => "NOT FOUND",
            StatusCode::Gone => "GONE",
            StatusCode::ProxyRequestRefused => "PROXY REQUEST REFUSED",
            StatusCode::BadRequest => "BAD REQUEST",
            StatusCode::ClientCertificateRequired => "CLIENT CERTIFICATE REQUIRED",
            StatusCode::CertificateNotAuthorised => "CERTIFICATE NOT AUTHORISED",
            StatusCode::CertificateNotValid => "CERTIFICATE NOT VALID",
        }
    }

    pub fn category(&self) -> Category {
        match self.as_u8() / 10 {
            1 => Category::Input,
            2 => Category::Success,
            3 => Category::Redirect,
            4 => Category::TemporaryFailure,
            5 => Category::PermanentFailure,
            _ => Category::ClientCertificate,
        }
    }

    pub fn is_success(&self) -> bool {
        self.category() == Category::Success
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u8(), self.reason_phrase())
    }
}
