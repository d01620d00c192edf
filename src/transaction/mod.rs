//! Flight check-in transactions: the data model, the store, the service and
//! the HTTP endpoints.

mod create_endpoint;
mod get_endpoint;
mod list_endpoints;
mod models;
mod service;
mod state;
mod store;
mod update_endpoint;

pub use create_endpoint::create_transaction_endpoint;
pub use get_endpoint::{get_transaction_by_uri_endpoint, get_transaction_endpoint};
pub use list_endpoints::{get_transactions_by_flight_endpoint, get_transactions_by_user_endpoint};
pub use models::{NewTransaction, Transaction, TransactionPayload, TransactionStatus};
pub use service::TransactionService;
pub use state::TransactionState;
pub use store::{SQLiteTransactionStore, TransactionStore, create_transaction_table};
pub use update_endpoint::update_transaction_endpoint;
