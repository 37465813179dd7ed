//! Endpoint resolution error types.

use thiserror::Error;

/// Errors from [`EndpointCatalog::resolve`](super::EndpointCatalog::resolve).
///
/// Both variants indicate a misconfigured call site, not a runtime
/// condition — resolution fails loudly so the defect is found at the
/// call, not as a mystery 404 later.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointError {
    /// The symbolic name is not in the catalog.
    #[error("endpoint '{0}' not found")]
    UnknownEndpoint(String),

    /// The template references a parameter the caller did not supply.
    #[error("endpoint '{endpoint}' is missing parameter '{param}'")]
    MissingParam {
        /// The endpoint being resolved.
        endpoint: String,
        /// The unreplaced template key.
        param: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_endpoint_names_the_input() {
        let err = EndpointError::UnknownEndpoint("NOPE".to_string());
        assert_eq!(err.to_string(), "endpoint 'NOPE' not found");
    }

    #[test]
    fn missing_param_names_both() {
        let err = EndpointError::MissingParam {
            endpoint: "MATCH_BY_ID".to_string(),
            param: "id".to_string(),
        };
        assert!(err.to_string().contains("MATCH_BY_ID"));
        assert!(err.to_string().contains("'id'"));
    }
}
