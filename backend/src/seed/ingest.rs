//! Sample listings CSV → `listings` rows.
//!
//! Columns are consumed by position, not by header name:
//!
//! | pos | column         | pos | column          |
//! |-----|----------------|-----|-----------------|
//! | 0   | bedrooms       | 7   | is_available    |
//! | 1   | bathrooms      | 8   | notes           |
//! | 2   | price          | 9   | parking_spaces  |
//! | 3   | sqft           | 10  | address         |
//! | 4   | available_date | 11  | city            |
//! | 5   | building_type  | 12  | name            |
//! | 6   | deposit        |     |                 |
//!
//! A cell that is exactly empty is NULL; anything else is trimmed and parsed
//! into the column type. The first bad row aborts ingestion.

use chrono::format::{self, Parsed, StrftimeItems};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use log::{info, warn};
use std::io::Read;
use std::str::FromStr;

use crate::error::IngestError;
use crate::models::NewListing;
use crate::schema::listings;

pub const COLUMN_COUNT: usize = 13;

const BEDROOMS: usize = 0;
const BATHROOMS: usize = 1;
const PRICE: usize = 2;
const SQFT: usize = 3;
const AVAILABLE_DATE: usize = 4;
const BUILDING_TYPE: usize = 5;
const DEPOSIT: usize = 6;
const IS_AVAILABLE: usize = 7;
const NOTES: usize = 8;
const PARKING_SPACES: usize = 9;
const ADDRESS: usize = 10;
const CITY: usize = 11;
const NAME: usize = 12;

/// Month-day format of the availability column, e.g. `Jan 5`.
pub const AVAILABLE_DATE_FORMAT: &str = "%b %d";

/// Parses one data row. `row` is the 1-based data row number used in errors.
pub fn parse_row(record: &StringRecord, row: usize, year: i32) -> Result<NewListing, IngestError> {
    if record.len() < COLUMN_COUNT {
        return Err(IngestError::MissingColumn {
            row,
            expected: COLUMN_COUNT,
            found: record.len(),
        });
    }

    Ok(NewListing {
        name: text(record, NAME),
        bedrooms: parsed(record, row, BEDROOMS, "bedrooms")?,
        bathrooms: parsed(record, row, BATHROOMS, "bathrooms")?,
        price: required(parsed(record, row, PRICE, "price")?, row, "price")?,
        sqft: parsed(record, row, SQFT, "sqft")?,
        available_date: available_date(record, row, year)?,
        building_type: required(text(record, BUILDING_TYPE), row, "building_type")?,
        deposit: parsed(record, row, DEPOSIT, "deposit")?,
        is_available: boolean(record, row, IS_AVAILABLE, "is_available")?,
        notes: text(record, NOTES),
        parking_spaces: parsed(record, row, PARKING_SPACES, "parking_spaces")?,
        address: required(text(record, ADDRESS), row, "address")?,
        city: required(text(record, CITY), row, "city")?,
    })
}

/// Parses a month-day cell into a date in `year`.
pub fn parse_available_date(value: &str, year: i32) -> Result<NaiveDate, chrono::ParseError> {
    let mut parsed = Parsed::new();
    format::parse(&mut parsed, value.trim(), StrftimeItems::new(AVAILABLE_DATE_FORMAT))?;
    parsed.set_year(i64::from(year))?;
    parsed.to_naive_date()
}

/// Boolean literal spellings PostgreSQL accepts for `BOOLEAN` input.
pub fn parse_pg_bool(value: &str) -> Option<bool> {
    let value = value.to_ascii_lowercase();
    let is_prefix_of = |word: &str| !value.is_empty() && word.starts_with(value.as_str());
    match value.as_str() {
        "1" | "on" => Some(true),
        "0" | "of" | "off" => Some(false),
        _ if is_prefix_of("true") || is_prefix_of("yes") => Some(true),
        _ if is_prefix_of("false") || is_prefix_of("no") => Some(false),
        _ => None,
    }
}

/// Yields every data row of `reader`, skipping the header.
pub fn read_listings<R: Read>(
    reader: R,
    year: i32,
) -> impl Iterator<Item = Result<NewListing, IngestError>> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader)
        .into_records()
        .enumerate()
        .map(move |(index, record)| {
            let record = record?;
            info!("row: {:?}", record);
            parse_row(&record, index + 1, year)
        })
}

/// Inserts every sample row into `listings` and returns how many were written.
pub fn ingest<R: Read>(conn: &mut PgConnection, reader: R, year: i32) -> Result<usize, IngestError> {
    warn!(
        "Availability dates carry no year; assigning {} to every parsed date",
        year
    );

    let mut inserted = 0;
    for listing in read_listings(reader, year) {
        let listing = listing?;
        diesel::insert_into(listings::table)
            .values(&listing)
            .execute(conn)?;
        inserted += 1;
    }
    Ok(inserted)
}

fn cell(record: &StringRecord, index: usize) -> Option<&str> {
    match record.get(index) {
        None | Some("") => None,
        Some(value) => Some(value.trim()),
    }
}

fn text(record: &StringRecord, index: usize) -> Option<String> {
    cell(record, index).map(str::to_string)
}

fn parsed<T: FromStr>(
    record: &StringRecord,
    row: usize,
    index: usize,
    column: &'static str,
) -> Result<Option<T>, IngestError> {
    cell(record, index)
        .map(|value| {
            value.parse::<T>().map_err(|_| IngestError::InvalidField {
                row,
                column,
                value: value.to_string(),
            })
        })
        .transpose()
}

fn boolean(
    record: &StringRecord,
    row: usize,
    index: usize,
    column: &'static str,
) -> Result<Option<bool>, IngestError> {
    cell(record, index)
        .map(|value| {
            parse_pg_bool(value).ok_or_else(|| IngestError::InvalidField {
                row,
                column,
                value: value.to_string(),
            })
        })
        .transpose()
}

fn available_date(record: &StringRecord, row: usize, year: i32) -> Result<Option<NaiveDate>, IngestError> {
    cell(record, AVAILABLE_DATE)
        .map(|value| {
            parse_available_date(value, year).map_err(|source| IngestError::InvalidDate {
                row,
                value: value.to_string(),
                source,
            })
        })
        .transpose()
}

fn required<T>(value: Option<T>, row: usize, column: &'static str) -> Result<T, IngestError> {
    value.ok_or(IngestError::MissingRequired { row, column })
}
