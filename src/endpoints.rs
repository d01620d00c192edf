//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/update_transaction/{transaction_id}', use
//! [format_endpoint].

/// The route for listing the transactions made by a user.
pub const TRANSACTIONS_BY_USER: &str = "/transactions_by_user/{user_email}";
/// The route for listing the transactions on a flight.
pub const TRANSACTIONS_BY_FLIGHT: &str = "/transactions_by_flight/{iata_flight}";
/// The route to create a transaction.
pub const CREATE_TRANSACTION: &str = "/create_transaction";
/// The route to check in a transaction.
pub const UPDATE_TRANSACTION: &str = "/update_transaction/{transaction_id}";
/// The route to access a single transaction.
pub const TRANSACTION: &str = "/{transaction_id}";

/// Replace the parameter in `endpoint_path` with `value`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/update_transaction/{transaction_id}',
/// '{transaction_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, value: impl std::fmt::Display) -> String {
    let param_start = match endpoint_path.find('{') {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        value,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS_BY_USER);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS_BY_FLIGHT);
        assert_endpoint_is_valid_uri(endpoints::CREATE_TRANSACTION);
        assert_endpoint_is_valid_uri(endpoints::UPDATE_TRANSACTION);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTION);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint(endpoints::UPDATE_TRANSACTION, 1);

        assert_eq!(formatted_path, "/update_transaction/1");
        assert!(formatted_path.parse::<Uri>().is_ok());

        let formatted_path = format_endpoint(endpoints::TRANSACTIONS_BY_FLIGHT, "AA123");

        assert_eq!(formatted_path, "/transactions_by_flight/AA123");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint(endpoints::CREATE_TRANSACTION, 1);

        assert_eq!(formatted_path, "/create_transaction");
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint("/hello/{world}/bye", 1);

        assert_eq!(formatted_path, "/hello/1/bye");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }
}
