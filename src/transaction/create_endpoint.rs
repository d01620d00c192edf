use axum::{
    debug_handler,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    db::lock_connection,
    extract::JsonPayload,
    transaction::{
        NewTransaction, SQLiteTransactionStore, TransactionPayload, TransactionService,
        TransactionState,
    },
};

/// A route handler for creating a new transaction.
///
/// Responds with 201 once the transaction is stored, or 400 if the payload is
/// missing the user email, IATA flight code or status.
#[debug_handler]
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    JsonPayload(payload): JsonPayload<TransactionPayload>,
) -> Result<Response, Error> {
    let new_transaction = NewTransaction::try_from(payload)?;

    let connection = lock_connection(&state.db_connection)?;
    let service = TransactionService::new(SQLiteTransactionStore::new(&connection));

    let transaction = service.create_transaction(new_transaction)?;
    tracing::info!("Created transaction {}", transaction.id);

    Ok((StatusCode::CREATED, "Transaction created").into_response())
}
