/// Unified error handling module
use thiserror::Error;

/// Failures surfaced by a catalog query.
///
/// Every variant is fatal to the call that produced it: the core performs
/// no retries and returns no partial results.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A start/end timestamp did not match the expected shape.
    #[error("unparseable timestamp: {input:?}")]
    TimeParse { input: String },

    /// The query could not be assembled from the caller's inputs.
    #[error("malformed query input: {0}")]
    MalformedQuery(String),

    /// The catalog answered with a non-200 status.
    ///
    /// Carries the raw body for diagnostics; the body is never parsed.
    #[error("bad response from catalog: status {status}")]
    BadResponse { status: u16, body: String },

    /// A 200 response whose JSON shape was not the expected granule list.
    #[error("malformed catalog response: {0}")]
    MalformedResponse(String),

    /// Transport-level failure from the HTTP client.
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Type alias for query results
pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_response_keeps_status_and_body() {
        let err = QueryError::BadResponse {
            status: 503,
            body: "upstream down".to_string(),
        };
        match err {
            QueryError::BadResponse { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "upstream down");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn display_names_the_missing_piece() {
        let err = QueryError::MalformedResponse("granule missing field 'downloadUrl'".into());
        assert!(err.to_string().contains("downloadUrl"));
    }
}
