//! Endpoints for listing the transactions of a user or a flight.

use axum::{
    Json, debug_handler,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    db::lock_connection,
    extract::PathParam,
    transaction::{SQLiteTransactionStore, TransactionService, TransactionState},
};

/// List the transactions made by the user with the email in the path.
///
/// Responds with 404 if the user has no transactions.
#[debug_handler]
pub async fn get_transactions_by_user_endpoint(
    State(state): State<TransactionState>,
    PathParam(user_email): PathParam<String>,
) -> Result<Response, Error> {
    let connection = lock_connection(&state.db_connection)?;
    let service = TransactionService::new(SQLiteTransactionStore::new(&connection));

    let transactions = service.get_transactions_by_user(&user_email)?;

    if transactions.is_empty() {
        return Ok((
            StatusCode::NOT_FOUND,
            format!("No transactions found for user: {user_email}"),
        )
            .into_response());
    }

    Ok((StatusCode::OK, Json(transactions)).into_response())
}

/// List the transactions for the flight with the IATA code in the path.
///
/// Responds with 404 if the flight has no transactions.
#[debug_handler]
pub async fn get_transactions_by_flight_endpoint(
    State(state): State<TransactionState>,
    PathParam(iata_flight): PathParam<String>,
) -> Result<Response, Error> {
    let connection = lock_connection(&state.db_connection)?;
    let service = TransactionService::new(SQLiteTransactionStore::new(&connection));

    let transactions = service.get_transactions_by_flight(&iata_flight)?;

    if transactions.is_empty() {
        return Ok((
            StatusCode::NOT_FOUND,
            format!("No transactions found for flight: {iata_flight}"),
        )
            .into_response());
    }

    Ok((StatusCode::OK, Json(transactions)).into_response())
}
