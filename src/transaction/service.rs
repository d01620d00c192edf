//! Business rules for transactions layered over a [TransactionStore].

use crate::{
    Error,
    database_id::TransactionId,
    transaction::{NewTransaction, Transaction, TransactionStatus, TransactionStore},
};

/// Mediates all reads and writes of transactions.
///
/// The service keeps no state of its own between calls, the store owns every record.
#[derive(Debug, Clone)]
pub struct TransactionService<S> {
    store: S,
}

impl<S> TransactionService<S>
where
    S: TransactionStore,
{
    /// Create a service backed by `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist a new transaction.
    ///
    /// The transaction is stored as given, including its status.
    pub fn create_transaction(&self, transaction: NewTransaction) -> Result<Transaction, Error> {
        let transaction = self.store.create(transaction)?;
        tracing::debug!(
            "Created transaction {} for {} on flight {} with status {}",
            transaction.id,
            transaction.user_email,
            transaction.iata_flight,
            transaction.status
        );

        Ok(transaction)
    }

    /// All transactions made by `user_email`, in the order they were created.
    ///
    /// Returns an empty vec when the user has no transactions.
    pub fn get_transactions_by_user(&self, user_email: &str) -> Result<Vec<Transaction>, Error> {
        self.store.get_by_user_email(user_email)
    }

    /// All transactions on the flight `iata_flight`, in the order they were created.
    ///
    /// Returns an empty vec when the flight has no transactions.
    pub fn get_transactions_by_flight(
        &self,
        iata_flight: &str,
    ) -> Result<Vec<Transaction>, Error> {
        self.store.get_by_iata_flight(iata_flight)
    }

    /// Get a transaction by its ID, or `None` if it does not exist.
    pub fn get_transaction(&self, id: TransactionId) -> Result<Option<Transaction>, Error> {
        match self.store.get(id) {
            Ok(transaction) => Ok(Some(transaction)),
            Err(Error::NotFound) => Ok(None),
            Err(error) => Err(error),
        }
    }

    /// Check in the transaction `id`.
    ///
    /// The status is set to [TransactionStatus::CheckedIn] whatever it was before.
    ///
    /// # Errors
    /// Returns [Error::TransactionNotFound] if there is no transaction with `id`.
    pub fn update_transaction(&self, id: TransactionId) -> Result<Transaction, Error> {
        let mut transaction = self
            .get_transaction(id)?
            .ok_or(Error::TransactionNotFound(id))?;

        let previous_status = transaction.status;
        transaction.status = TransactionStatus::CheckedIn;

        self.store
            .update_status(id, transaction.status)
            .map_err(|error| match error {
                Error::UpdateMissingTransaction => Error::TransactionNotFound(id),
                error => error,
            })?;

        tracing::debug!("Checked in transaction {id} (was {previous_status})");

        Ok(transaction)
    }
}
