use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use gatemate_rs::{
    NewTransaction, SQLiteTransactionStore, TransactionStatus, TransactionStore, initialize_db,
};

/// A utility for creating a test database for the REST API server of gatemate_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test transactions...");

    let store = SQLiteTransactionStore::new(&conn);
    let transactions = [
        ("test@test.com", "AA123", TransactionStatus::Payed),
        ("test@test.com", "TP1351", TransactionStatus::CheckedIn),
        ("test@test.com", "BA456", TransactionStatus::Canceled),
        ("other@test.com", "AA123", TransactionStatus::Payed),
    ];

    for (user_email, iata_flight, status) in transactions {
        let transaction = store.create(NewTransaction::new(user_email, iata_flight, status))?;
        println!(
            "  #{} {} on {} ({})",
            transaction.id, transaction.user_email, transaction.iata_flight, transaction.status
        );
    }

    println!("Success!");

    Ok(())
}
