//! Application router configuration.

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::{
    AppState, endpoints,
    not_found::get_404_not_found,
    transaction::{
        create_transaction_endpoint, get_transaction_by_uri_endpoint, get_transaction_endpoint,
        get_transactions_by_flight_endpoint, get_transactions_by_user_endpoint,
        update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::TRANSACTIONS_BY_USER,
            get(get_transactions_by_user_endpoint),
        )
        .route(
            endpoints::TRANSACTIONS_BY_FLIGHT,
            get(get_transactions_by_flight_endpoint),
        )
        .route(
            endpoints::CREATE_TRANSACTION,
            post(create_transaction_endpoint).get(get_transaction_by_uri_endpoint),
        )
        .route(
            endpoints::UPDATE_TRANSACTION,
            put(update_transaction_endpoint),
        )
        .route(endpoints::TRANSACTION, get(get_transaction_endpoint))
        .fallback(get_404_not_found)
        .with_state(state)
}
