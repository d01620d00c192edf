use axum::{
    debug_handler,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    database_id::TransactionId,
    db::lock_connection,
    extract::{JsonPayload, PathParam},
    transaction::{
        NewTransaction, SQLiteTransactionStore, TransactionPayload, TransactionService,
        TransactionState,
    },
};

/// A route handler for checking in a transaction.
///
/// The payload must carry the user email, IATA flight code and status, but the
/// update always sets the status to `CHECKEDIN` regardless of the status sent.
///
/// Responds with 200 on success, 400 if the payload is incomplete, or 404 if
/// there is no transaction with the ID in the path.
#[debug_handler]
pub async fn update_transaction_endpoint(
    State(state): State<TransactionState>,
    PathParam(transaction_id): PathParam<TransactionId>,
    JsonPayload(payload): JsonPayload<TransactionPayload>,
) -> Result<Response, Error> {
    NewTransaction::try_from(payload)?;

    let connection = lock_connection(&state.db_connection)?;
    let service = TransactionService::new(SQLiteTransactionStore::new(&connection));

    match service.update_transaction(transaction_id) {
        Ok(transaction) => {
            tracing::info!("Checked in transaction {}", transaction.id);
            Ok((StatusCode::OK, "Transaction updated").into_response())
        }
        Err(Error::TransactionNotFound(id)) => {
            tracing::debug!("Tried to check in missing transaction {id}");
            Err(Error::TransactionNotFound(id))
        }
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while updating transaction {transaction_id}: {error}"
            );
            Err(error)
        }
    }
}

#[cfg(test)]
mod update_transaction_endpoint_tests {
    use axum::{extract::State, http::StatusCode, response::IntoResponse};

    use crate::{
        Error,
        extract::{JsonPayload, PathParam},
        test_utils::{body_text, must_create_test_state},
        transaction::{
            NewTransaction, SQLiteTransactionStore, Transaction, TransactionPayload,
            TransactionState, TransactionStatus, TransactionStore, update_transaction_endpoint,
        },
    };

    fn payload(status: TransactionStatus) -> TransactionPayload {
        TransactionPayload {
            id: None,
            user_email: Some("FirstUser".to_owned()),
            iata_flight: Some("AA123".to_owned()),
            status: Some(status),
        }
    }

    fn insert_transaction(state: &TransactionState, status: TransactionStatus) -> Transaction {
        let connection = state.db_connection.lock().unwrap();

        SQLiteTransactionStore::new(&connection)
            .create(NewTransaction::new("FirstUser", "AA123", status))
            .expect("Could not create test transaction")
    }

    fn get_stored(state: &TransactionState, transaction: &Transaction) -> Transaction {
        let connection = state.db_connection.lock().unwrap();

        SQLiteTransactionStore::new(&connection)
            .get(transaction.id)
            .expect("Could not get test transaction")
    }

    #[tokio::test]
    async fn checks_in_transaction_regardless_of_payload_status() {
        let state = must_create_test_state();
        let transaction = insert_transaction(&state, TransactionStatus::Canceled);

        let response = update_transaction_endpoint(
            State(state.clone()),
            PathParam(transaction.id),
            JsonPayload(payload(TransactionStatus::Payed)),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "Transaction updated");
        let stored = get_stored(&state, &transaction);
        assert_eq!(stored.status, TransactionStatus::CheckedIn);
        assert_eq!(stored.user_email, transaction.user_email);
        assert_eq!(stored.iata_flight, transaction.iata_flight);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let state = must_create_test_state();
        let transaction = insert_transaction(&state, TransactionStatus::Payed);

        let response = update_transaction_endpoint(
            State(state.clone()),
            PathParam(transaction.id + 1),
            JsonPayload(payload(TransactionStatus::CheckedIn)),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "Transaction not found");
        assert_eq!(get_stored(&state, &transaction), transaction);
    }

    #[tokio::test]
    async fn incomplete_payload_is_rejected_before_update() {
        let state = must_create_test_state();
        let transaction = insert_transaction(&state, TransactionStatus::Payed);
        let incomplete = TransactionPayload {
            status: None,
            ..payload(TransactionStatus::Payed)
        };

        let result = update_transaction_endpoint(
            State(state.clone()),
            PathParam(transaction.id),
            JsonPayload(incomplete),
        )
        .await;

        assert_eq!(result.err(), Some(Error::MissingTransactionData));
        assert_eq!(get_stored(&state, &transaction), transaction);
    }
}
