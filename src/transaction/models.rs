//! Defines the core data models for transactions.

use std::{fmt::Display, str::FromStr};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::TransactionId};

// ============================================================================
// MODELS
// ============================================================================

/// Where a passenger is in the check-in process for a flight.
///
/// The JSON and database representation is the upper-case name, e.g.
/// `"CHECKEDIN"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    /// The flight has been paid for.
    Payed,
    /// The passenger has checked in. Once set, nothing moves a transaction
    /// out of this state.
    CheckedIn,
    /// The booking was canceled.
    Canceled,
}

impl TransactionStatus {
    /// The canonical string for the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Payed => "PAYED",
            TransactionStatus::CheckedIn => "CHECKEDIN",
            TransactionStatus::Canceled => "CANCELED",
        }
    }
}

impl Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PAYED" => Ok(TransactionStatus::Payed),
            "CHECKEDIN" => Ok(TransactionStatus::CheckedIn),
            "CANCELED" => Ok(TransactionStatus::Canceled),
            other => Err(Error::InvalidStatus(other.to_owned())),
        }
    }
}

impl ToSql for TransactionStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TransactionStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|_| FromSqlError::InvalidType)
    }
}

/// A flight booking made by a user, identified by the user's email and the
/// flight's IATA code.
///
/// To store a new `Transaction`, create a [NewTransaction] and pass it to
/// [TransactionStore::create](crate::TransactionStore::create).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction, assigned by the store.
    pub id: TransactionId,
    /// The email of the user that made the booking. Not validated.
    pub user_email: String,
    /// The IATA code of the booked flight, e.g. "AA123".
    pub iata_flight: String,
    /// Where the transaction is in the check-in process.
    pub status: TransactionStatus,
}

/// A transaction that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    /// The email of the user that made the booking.
    pub user_email: String,
    /// The IATA code of the booked flight.
    pub iata_flight: String,
    /// The initial status.
    pub status: TransactionStatus,
}

impl NewTransaction {
    /// Create a new, unsaved transaction.
    pub fn new(user_email: &str, iata_flight: &str, status: TransactionStatus) -> Self {
        Self {
            user_email: user_email.to_owned(),
            iata_flight: iata_flight.to_owned(),
            status,
        }
    }
}

/// The JSON body accepted by the create and update endpoints.
///
/// Every field is optional so that missing fields can be reported as
/// [Error::MissingTransactionData] rather than as a deserialization failure.
/// The `id` is accepted for symmetry with [Transaction] but never used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPayload {
    /// Ignored, the store assigns IDs.
    #[serde(default)]
    pub id: Option<TransactionId>,
    /// The email of the user that made the booking.
    #[serde(default)]
    pub user_email: Option<String>,
    /// The IATA code of the booked flight.
    #[serde(default)]
    pub iata_flight: Option<String>,
    /// The status of the booking.
    #[serde(default)]
    pub status: Option<TransactionStatus>,
}

impl TryFrom<TransactionPayload> for NewTransaction {
    type Error = Error;

    fn try_from(payload: TransactionPayload) -> Result<Self, Self::Error> {
        match payload {
            TransactionPayload {
                user_email: Some(user_email),
                iata_flight: Some(iata_flight),
                status: Some(status),
                ..
            } => Ok(NewTransaction {
                user_email,
                iata_flight,
                status,
            }),
            _ => Err(Error::MissingTransactionData),
        }
    }
}

#[cfg(test)]
mod status_tests {
    use crate::{Error, transaction::TransactionStatus};

    #[test]
    fn parses_known_statuses() {
        assert_eq!("PAYED".parse(), Ok(TransactionStatus::Payed));
        assert_eq!("CHECKEDIN".parse(), Ok(TransactionStatus::CheckedIn));
        assert_eq!("CANCELED".parse(), Ok(TransactionStatus::Canceled));
    }

    #[test]
    fn parse_fails_on_unknown_status() {
        let status = "checkedin".parse::<TransactionStatus>();

        assert_eq!(status, Err(Error::InvalidStatus("checkedin".to_owned())));
    }

    #[test]
    fn serializes_as_upper_case_name() {
        let json = serde_json::to_string(&TransactionStatus::CheckedIn).unwrap();

        assert_eq!(json, "\"CHECKEDIN\"");
    }
}
