#![allow(missing_docs)]

pub(crate) mod http;

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

pub(crate) use http::{assert_content_type, body_text};

use crate::{AppState, db::initialize, transaction::TransactionState};

/// Create a transaction endpoint state backed by an initialized in-memory database.
pub(crate) fn must_create_test_state() -> TransactionState {
    let connection = Connection::open_in_memory().expect("Could not open database in memory.");
    initialize(&connection).expect("Could not initialize database.");

    TransactionState {
        db_connection: Arc::new(Mutex::new(connection)),
    }
}

/// Create the full app state backed by an in-memory database.
pub(crate) fn must_create_test_app_state() -> AppState {
    let connection = Connection::open_in_memory().expect("Could not open database in memory.");

    AppState::new(connection).expect("Could not create app state.")
}
