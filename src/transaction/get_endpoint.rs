use axum::{
    Json, debug_handler,
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    database_id::TransactionId,
    db::lock_connection,
    extract::PathParam,
    transaction::{SQLiteTransactionStore, TransactionService, TransactionState},
};

/// A route handler for getting a transaction by its database ID.
///
/// The ID is taken from the path as a string so that a non-numeric ID can be
/// rejected with 400 before the database is touched. Responds with 404 if the
/// transaction does not exist.
#[debug_handler]
pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    PathParam(raw_id): PathParam<String>,
) -> Result<Response, Error> {
    let transaction_id: TransactionId = raw_id
        .parse()
        .map_err(|_| Error::InvalidTransactionId(raw_id.clone()))?;

    let connection = lock_connection(&state.db_connection)?;
    let service = TransactionService::new(SQLiteTransactionStore::new(&connection));

    match service.get_transaction(transaction_id)? {
        Some(transaction) => Ok((StatusCode::OK, Json(transaction)).into_response()),
        None => Ok((StatusCode::NOT_FOUND, "Transaction not found").into_response()),
    }
}

/// A route handler for a get-by-ID request whose single path segment is also
/// a static route, e.g. `GET /create_transaction`.
///
/// Static routes take precedence over `/{transaction_id}`, so the segment is
/// taken from the URI and treated the same as any other transaction ID.
#[debug_handler]
pub async fn get_transaction_by_uri_endpoint(
    state: State<TransactionState>,
    uri: Uri,
) -> Result<Response, Error> {
    let raw_id = uri.path().trim_start_matches('/').to_owned();

    get_transaction_endpoint(state, PathParam(raw_id)).await
}

#[cfg(test)]
mod get_transaction_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::State,
        http::{StatusCode, Uri},
        response::IntoResponse,
    };
    use rusqlite::Connection;

    use crate::{
        Error,
        extract::PathParam,
        test_utils::{assert_content_type, body_text, must_create_test_state},
        transaction::{
            NewTransaction, SQLiteTransactionStore, Transaction, TransactionState,
            TransactionStatus, TransactionStore, get_transaction_by_uri_endpoint,
            get_transaction_endpoint,
        },
    };

    #[tokio::test]
    async fn returns_transaction_as_json() {
        let state = must_create_test_state();
        let transaction = SQLiteTransactionStore::new(&state.db_connection.lock().unwrap())
            .create(NewTransaction::new(
                "FirstUser",
                "AA123",
                TransactionStatus::Payed,
            ))
            .expect("Could not create test transaction");

        let response = get_transaction_endpoint(State(state), PathParam(transaction.id.to_string()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "application/json");
        let got: Transaction = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(got, transaction);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let state = must_create_test_state();

        let response = get_transaction_endpoint(State(state), PathParam("42".to_owned()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "Transaction not found");
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected_before_database_access() {
        // No tables: any query would fail with a SQL error rather than 400.
        let state = TransactionState {
            db_connection: Arc::new(Mutex::new(Connection::open_in_memory().unwrap())),
        };

        let result = get_transaction_endpoint(State(state), PathParam("invalid-id".to_owned())).await;

        assert_eq!(
            result.err(),
            Some(Error::InvalidTransactionId("invalid-id".to_owned()))
        );
    }

    #[tokio::test]
    async fn non_numeric_id_responds_with_bad_request() {
        let state = must_create_test_state();

        let response = get_transaction_endpoint(State(state), PathParam("invalid-id".to_owned()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Invalid transaction ID");
    }

    #[tokio::test]
    async fn static_path_segment_is_treated_as_an_id() {
        let state = must_create_test_state();

        let response =
            get_transaction_by_uri_endpoint(State(state), Uri::from_static("/create_transaction"))
                .await
                .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Invalid transaction ID");
    }
}
