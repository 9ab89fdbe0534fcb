use gemserve::gemini::status::{Category, StatusCode};

#[test]
fn test_status_table_phrases() {
    let expected = [
        (10, "INPUT"),
        (11, "SENSITIVE INPUT"),
        (20, "SUCCESS"),
        (30, "REDIRECT-TEMPORARY"),
        (31, "REDIRECT-PERMANENT"),
        (40, "TEMPORARY FAILURE"),
        (41, "SERVER UNAVAILABLE"),
        (42, "CGI ERROR"),
        (43, "PROXY ERROR"),
        (44, "SLOW DOWN"),
        (50, "PERMANENT FAILURE"),
        (51, "NOT FOUND"),
        (52, "GONE"),
        (53, "PROXY REQUEST REFUSED"),
        (59, "BAD REQUEST"),
        (60, "CLIENT CERTIFICATE REQUIRED"),
        (61, "CERTIFICATE NOT AUTHORISED"),
        (62, "CERTIFICATE NOT VALID"),
    ];

    assert_eq!(StatusCode::ALL.len(), expected.len());
    for (code, phrase) in expected {
        let status = StatusCode::from_u8(code).unwrap();
        assert_eq!(status.as_u8(), code);
        assert_eq!(status.reason_phrase(), phrase);
    }
}

#[test]
fn test_status_categories() {
    assert_eq!(StatusCode::SensitiveInput.category(), Category::Input);
    assert_eq!(StatusCode::Success.category(), Category::Success);
    assert_eq!(StatusCode::RedirectPermanent.category(), Category::Redirect);
    assert_eq!(StatusCode::SlowDown.category(), Category::TemporaryFailure);
    assert_eq!(StatusCode::BadRequest.category(), Category::PermanentFailure);
    assert_eq!(
        StatusCode::CertificateNotValid.category(),
        Category::ClientCertificate
    );
}

#[test]
fn test_only_2x_is_success() {
    for status in StatusCode::ALL {
        assert_eq!(status.is_success(), status.as_u8() / 10 == 2);
    }
}

#[test]
fn test_status_display() {
    assert_eq!(StatusCode::NotFound.to_string(), "51 NOT FOUND");
}
