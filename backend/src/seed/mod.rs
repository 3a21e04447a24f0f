//! One-shot destructive reset and reload of the rental schema.

pub mod ingest;
pub mod init;
pub mod prompt;

use diesel::pg::PgConnection;
use diesel::{Connection, ConnectionError};
use log::info;
use std::fs::File;
use std::io::{BufRead, Read, Write};
use std::path::Path;

use crate::error::SeedError;

/// Drops, recreates and reloads every table from `sample`.
///
/// The steps share one transaction, so a failing row leaves the previous
/// contents in place. Returns the number of listings inserted.
pub fn run<R: Read>(conn: &mut PgConnection, sample: R, year: i32) -> Result<usize, SeedError> {
    let inserted = conn.transaction::<usize, SeedError, _>(|conn| {
        info!("Clearing existing data");
        init::drop_tables(conn)?;
        info!("Database cleared");

        info!("Re-initializing database");
        init::create_tables(conn)?;
        info!("Database initialized");

        info!("Ingesting sample data");
        Ok(ingest::ingest(conn, sample, year)?)
    })?;

    info!("Sample data loaded. Complete!");
    Ok(inserted)
}

/// Asks for confirmation, then opens the sample file, connects and seeds.
///
/// Returns `None` when the operator declines; neither the sample file nor
/// the database is touched in that case.
pub fn confirm_and_run<R, W, C>(
    input: R,
    output: W,
    connect: C,
    sample_path: &Path,
    year: i32,
) -> Result<Option<usize>, SeedError>
where
    R: BufRead,
    W: Write,
    C: FnOnce() -> Result<PgConnection, ConnectionError>,
{
    if !prompt::confirm(input, output)? {
        info!("Seed cancelled; database left untouched");
        return Ok(None);
    }

    let sample = File::open(sample_path)?;
    let mut conn = connect()?;
    let inserted = run(&mut conn, sample, year)?;
    info!("Inserted {} listings from {}", inserted, sample_path.display());
    Ok(Some(inserted))
}
