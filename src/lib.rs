//! Gatemate is a small REST backend for recording and querying flight check-in
//! transactions.
//!
//! A transaction links a user, a flight, and a status (paid, checked in, or
//! canceled). This library provides the HTTP handlers, the transaction
//! service and a SQLite backed store for them.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod database_id;
mod db;
mod endpoints;
mod extract;
mod logging;
mod not_found;
mod routing;
#[cfg(test)]
mod test_utils;
mod transaction;

pub use app_state::AppState;
pub use database_id::{DatabaseId, TransactionId};
pub use db::initialize as initialize_db;
pub use endpoints::format_endpoint;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use transaction::{
    NewTransaction, SQLiteTransactionStore, Transaction, TransactionPayload, TransactionService,
    TransactionStatus, TransactionStore,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A transaction payload is missing one or more of the user email, IATA
    /// flight code or status.
    #[error("the transaction is missing one or more required fields")]
    MissingTransactionData,

    /// The path segment used to look up a transaction is not an integer.
    #[error("\"{0}\" is not a valid transaction ID")]
    InvalidTransactionId(String),

    /// A string could not be parsed as a [TransactionStatus].
    ///
    /// This is the case for any value other than `PAYED`, `CHECKEDIN` or
    /// `CANCELED`.
    #[error("invalid transaction status: {0}")]
    InvalidStatus(String),

    /// The request body or path could not be deserialized.
    ///
    /// The string holds the reason reported by the extractor and is only
    /// intended for the server logs.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Tried to check in a transaction that does not exist.
    #[error("no transaction with the ID {0}")]
    TransactionNotFound(TransactionId),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to update a transaction that does not exist
    #[error("tried to update a transaction that is not in the database")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist
    #[error("tried to delete a transaction that is not in the database")]
    DeleteMissingTransaction,

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::MissingTransactionData => {
                (StatusCode::BAD_REQUEST, "Invalid transaction data").into_response()
            }
            Error::InvalidTransactionId(_) => {
                (StatusCode::BAD_REQUEST, "Invalid transaction ID").into_response()
            }
            Error::InvalidStatus(reason) => {
                tracing::debug!("Rejected transaction status: {reason}");
                (StatusCode::BAD_REQUEST, "Invalid transaction status value").into_response()
            }
            Error::BadRequest(reason) => {
                tracing::debug!("Rejected malformed request: {reason}");
                (StatusCode::BAD_REQUEST, "Bad request").into_response()
            }
            Error::TransactionNotFound(_)
            | Error::UpdateMissingTransaction
            | Error::DeleteMissingTransaction => {
                (StatusCode::NOT_FOUND, "Transaction not found").into_response()
            }
            Error::NotFound => not_found::get_404_not_found_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
