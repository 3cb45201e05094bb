/// Failures that keep a ticket report from reaching the server
use std::error::Error as StdError;
use thiserror::Error;

/// Anything that prevents the HTTP exchange from completing.
///
/// HTTP error statuses are not represented here: a 4xx/5xx response is a
/// completed exchange and is reported like any other.
#[derive(Debug, Error)]
pub enum TransportFailure {
    #[error("{}{}", .0, caused_by(.0))]
    Request(#[source] reqwest::Error),

    #[error("could not read response body: {}{}", .0, caused_by(.0))]
    Body(#[source] reqwest::Error),

    #[error("could not encode ticket report: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("invalid endpoint {endpoint:?}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{0}")]
    Host(String),
}

/// Render the `source()` chain below `err` as `": cause: inner cause"`.
///
/// reqwest only names the failing step in its own message; the reason
/// (refused connection, DNS, the host's `TypeError`) lives further down.
fn caused_by(err: &dyn StdError) -> String {
    let mut rendered = err.to_string();
    let mut chain = String::new();
    let mut next = err.source();

    while let Some(cause) = next {
        let text = cause.to_string();
        // hyper and reqwest sometimes repeat the inner message in the outer one
        if !text.is_empty() && !rendered.contains(&text) {
            chain.push_str(": ");
            chain.push_str(&text);
            rendered.push_str(&text);
        }
        next = cause.source();
    }

    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Debug, Error)]
    #[error("error sending request for url (http://127.0.0.1:1/log_user)")]
    struct Outer(#[source] Middle);

    #[derive(Debug, Error)]
    #[error("client error (Connect)")]
    struct Middle(#[source] io::Error);

    #[derive(Debug, Error)]
    #[error("tcp connect error: {0}")]
    struct Repeats(#[source] io::Error);

    fn refused() -> io::Error {
        io::Error::new(io::ErrorKind::ConnectionRefused, "Connection refused")
    }

    #[test]
    fn test_caused_by_walks_the_whole_chain() {
        let err = Outer(Middle(refused()));

        assert_eq!(
            caused_by(&err),
            ": client error (Connect): Connection refused"
        );
    }

    #[test]
    fn test_caused_by_skips_repeated_messages() {
        let err = Repeats(refused());
        assert_eq!(caused_by(&err), "");
    }

    #[test]
    fn test_caused_by_without_source() {
        assert_eq!(caused_by(&refused()), "");
    }

    #[test]
    fn test_host_failure_displays_message_verbatim() {
        let err = TransportFailure::Host("TypeError: Failed to fetch".to_string());
        assert_eq!(err.to_string(), "TypeError: Failed to fetch");
    }

    #[test]
    fn test_invalid_endpoint_names_the_input() {
        let source = url::Url::parse("not a url").unwrap_err();
        let err = TransportFailure::InvalidEndpoint {
            endpoint: "not a url".to_string(),
            source,
        };

        assert!(err.to_string().contains("\"not a url\""));
    }
}
