//! Defines the transaction store trait and its SQLite implementation.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    database_id::TransactionId,
    transaction::{NewTransaction, Transaction, TransactionStatus},
};

/// Handles the creation, retrieval and update of transactions.
pub trait TransactionStore {
    /// Create a new transaction in the store and return it with its ID.
    fn create(&self, transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Retrieve a transaction by its ID.
    ///
    /// # Errors
    /// Implementers should return [Error::NotFound] if there is no transaction with `id`.
    fn get(&self, id: TransactionId) -> Result<Transaction, Error>;

    /// Retrieve all the transactions made by the user with the email `user_email`, in the order
    /// they were stored.
    fn get_by_user_email(&self, user_email: &str) -> Result<Vec<Transaction>, Error>;

    /// Retrieve all the transactions for the flight `iata_flight`, in the order they were stored.
    fn get_by_iata_flight(&self, iata_flight: &str) -> Result<Vec<Transaction>, Error>;

    /// Set the status of the transaction `id`.
    ///
    /// # Errors
    /// Implementers should return [Error::UpdateMissingTransaction] if there is no transaction
    /// with `id`.
    fn update_status(&self, id: TransactionId, status: TransactionStatus) -> Result<(), Error>;

    /// Remove the transaction `id` from the store.
    ///
    /// # Errors
    /// Implementers should return [Error::DeleteMissingTransaction] if there is no transaction
    /// with `id`.
    fn delete(&self, id: TransactionId) -> Result<(), Error>;
}

/// Stores transactions in a SQLite database.
///
/// The store borrows a connection so that a caller holding the database lock can run several
/// operations without another request touching the table in between.
#[derive(Debug, Clone, Copy)]
pub struct SQLiteTransactionStore<'c> {
    connection: &'c Connection,
}

impl<'c> SQLiteTransactionStore<'c> {
    /// Create a new store for the SQLite `connection`.
    ///
    /// The `transactions` table must already exist, see [create_transaction_table].
    pub fn new(connection: &'c Connection) -> Self {
        Self { connection }
    }
}

impl TransactionStore for SQLiteTransactionStore<'_> {
    fn create(&self, transaction: NewTransaction) -> Result<Transaction, Error> {
        let transaction = self
            .connection
            .prepare(
                "INSERT INTO transactions (user_email, iata_flight, status)
                 VALUES (?1, ?2, ?3)
                 RETURNING id, user_email, iata_flight, status",
            )?
            .query_row(
                (
                    transaction.user_email,
                    transaction.iata_flight,
                    transaction.status,
                ),
                map_row,
            )?;

        Ok(transaction)
    }

    /// Retrieve a transaction in the database by its `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid transaction,
    /// - or [Error::SqlError] there is some other SQL error.
    fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        self.connection
            .prepare(
                "SELECT id, user_email, iata_flight, status FROM transactions WHERE id = :id",
            )?
            .query_row(&[(":id", &id)], map_row)
            .map_err(|error| error.into())
    }

    fn get_by_user_email(&self, user_email: &str) -> Result<Vec<Transaction>, Error> {
        self.connection
            .prepare(
                "SELECT id, user_email, iata_flight, status FROM transactions
                 WHERE user_email = :user_email
                 ORDER BY id ASC",
            )?
            .query_map(&[(":user_email", &user_email)], map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(|error| error.into()))
            .collect()
    }

    fn get_by_iata_flight(&self, iata_flight: &str) -> Result<Vec<Transaction>, Error> {
        self.connection
            .prepare(
                "SELECT id, user_email, iata_flight, status FROM transactions
                 WHERE iata_flight = :iata_flight
                 ORDER BY id ASC",
            )?
            .query_map(&[(":iata_flight", &iata_flight)], map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(|error| error.into()))
            .collect()
    }

    fn update_status(&self, id: TransactionId, status: TransactionStatus) -> Result<(), Error> {
        let rows_affected = self.connection.execute(
            "UPDATE transactions SET status = ?1 WHERE id = ?2",
            (status, id),
        )?;

        if rows_affected == 0 {
            return Err(Error::UpdateMissingTransaction);
        }

        Ok(())
    }

    fn delete(&self, id: TransactionId) -> Result<(), Error> {
        let rows_affected = self
            .connection
            .execute("DELETE FROM transactions WHERE id = ?1", [id])?;

        if rows_affected == 0 {
            return Err(Error::DeleteMissingTransaction);
        }

        Ok(())
    }
}

/// Initialize the transactions table and indexes.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS transactions (
            id INTEGER PRIMARY KEY,
            user_email TEXT NOT NULL,
            iata_flight TEXT NOT NULL,
            status TEXT NOT NULL CHECK (status IN ('PAYED', 'CHECKEDIN', 'CANCELED'))
        );

        CREATE INDEX IF NOT EXISTS idx_transactions_user_email ON transactions(user_email);
        CREATE INDEX IF NOT EXISTS idx_transactions_iata_flight ON transactions(iata_flight);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        user_email: row.get(1)?,
        iata_flight: row.get(2)?,
        status: row.get(3)?,
    })
}
