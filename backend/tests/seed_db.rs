//! Seeding against a live PostgreSQL database.
//!
//! Configure the target with `DB_NAME`, `DB_USER` and `DB_PORT` (or a `.env`
//! file) and run with `cargo test -- --ignored`. The target is wiped.

use chrono::NaiveDate;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use std::sync::Mutex;

use rental_listings::config::AppConfig;
use rental_listings::db;
use rental_listings::error::{IngestError, SeedError};
use rental_listings::models::{Group, GroupListing, GroupUser, Listing, ListingTrait, Trait};
use rental_listings::schema::{groups, groups_listings, groups_users, listings, listings_traits, traits};
use rental_listings::seed::{self, init};

// Every test resets the same schema.
static DB_LOCK: Mutex<()> = Mutex::new(());

const SAMPLE: &str = "\
bedrooms,bathrooms,price,sqft,available_date,building_type,deposit,is_available,notes,parking_spaces,address,city,name
2,1,1850,900,Jan 5,apartment,1850,true, Close to transit ,1,12 Elm St,Seattle,Elm Street Flat
1,1,1200,550,,studio,,false,,0,8 Pine Rd,Portland,
3,2,2600,1400,Mar 1,house,2600,yes,\"Yard, garage\",2,77 Birch Ln,Tacoma,Birch House
";

fn connect() -> PgConnection {
    let config = AppConfig::load().expect("DB_NAME, DB_USER and DB_PORT must be set");
    db::establish_connection(&config.database).expect("database must be reachable")
}

fn count(conn: &mut PgConnection, table: &str) -> i64 {
    #[derive(QueryableByName)]
    struct Count {
        #[diesel(sql_type = diesel::sql_types::BigInt)]
        n: i64,
    }
    diesel::sql_query(format!("SELECT COUNT(*) AS n FROM {}", table))
        .get_result::<Count>(conn)
        .unwrap()
        .n
}

#[test]
#[ignore = "requires a PostgreSQL database"]
fn fresh_schema_has_all_tables_empty() {
    let _guard = DB_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let mut conn = connect();

    init::drop_tables(&mut conn).unwrap();
    init::create_tables(&mut conn).unwrap();

    for table in init::DROP_ORDER {
        assert_eq!(count(&mut conn, table), 0, "{} should be empty", table);
    }
}

#[test]
#[ignore = "requires a PostgreSQL database"]
fn seed_loads_one_listing_per_data_row() {
    let _guard = DB_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let mut conn = connect();

    let inserted = seed::run(&mut conn, SAMPLE.as_bytes(), 1900).unwrap();
    assert_eq!(inserted, 3);

    let rows: Vec<Listing> = listings::table
        .select(Listing::as_select())
        .order(listings::id)
        .load(&mut conn)
        .unwrap();
    assert_eq!(rows.len(), 3);

    assert_eq!(rows[0].notes.as_deref(), Some("Close to transit"));
    assert_eq!(rows[0].available_date, NaiveDate::from_ymd_opt(1900, 1, 5));
    assert_eq!(rows[0].is_bookmarked, None);
    assert_eq!(rows[1].available_date, None);
    assert_eq!(rows[1].deposit, None);
    assert_eq!(rows[1].name, None);
    assert_eq!(rows[2].notes.as_deref(), Some("Yard, garage"));
    assert_eq!(rows[2].is_available, Some(true));

    assert_eq!(count(&mut conn, "traits"), 0);
    assert_eq!(count(&mut conn, "groups"), 0);
}

#[test]
#[ignore = "requires a PostgreSQL database"]
fn reseeding_replaces_previous_data() {
    let _guard = DB_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let mut conn = connect();

    seed::run(&mut conn, SAMPLE.as_bytes(), 1900).unwrap();
    diesel::insert_into(traits::table)
        .values(traits::name.eq("pet friendly"))
        .execute(&mut conn)
        .unwrap();

    seed::run(&mut conn, SAMPLE.as_bytes(), 1900).unwrap();

    assert_eq!(count(&mut conn, "listings"), 3);
    assert_eq!(count(&mut conn, "traits"), 0);
    let first_id: i32 = listings::table.select(listings::id).order(listings::id).first(&mut conn).unwrap();
    assert_eq!(first_id, 1);
}

#[test]
#[ignore = "requires a PostgreSQL database"]
fn bad_row_rolls_back_the_whole_seed() {
    let _guard = DB_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let mut conn = connect();

    seed::run(&mut conn, SAMPLE.as_bytes(), 1900).unwrap();

    let broken = format!("{}1,1,1300,550,Smarch 3,studio,,false,,0,10 Pine Rd,Portland,\n", SAMPLE);
    let err = seed::run(&mut conn, broken.as_bytes(), 1900).unwrap_err();
    assert!(matches!(err, SeedError::Ingest(IngestError::InvalidDate { row: 4, .. })));

    assert_eq!(count(&mut conn, "listings"), 3);
}

#[test]
#[ignore = "requires a PostgreSQL database"]
fn join_tables_enforce_foreign_keys() {
    let _guard = DB_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let mut conn = connect();

    seed::run(&mut conn, SAMPLE.as_bytes(), 1900).unwrap();

    let group: Group = diesel::insert_into(groups::table)
        .values(groups::name.eq("Roommates"))
        .returning(Group::as_returning())
        .get_result(&mut conn)
        .unwrap();
    let pet_friendly: Trait = diesel::insert_into(traits::table)
        .values(traits::name.eq("pet friendly"))
        .returning(Trait::as_returning())
        .get_result(&mut conn)
        .unwrap();
    let listing_id: i32 = listings::table.select(listings::id).first(&mut conn).unwrap();

    diesel::insert_into(groups_listings::table)
        .values(&GroupListing { group_id: group.id, listing_id })
        .execute(&mut conn)
        .unwrap();
    diesel::insert_into(groups_users::table)
        .values(&GroupUser { group_id: group.id, user_id: 42 })
        .execute(&mut conn)
        .unwrap();
    diesel::insert_into(listings_traits::table)
        .values(&ListingTrait { listing_id, trait_id: pet_friendly.id })
        .execute(&mut conn)
        .unwrap();

    let dangling = diesel::insert_into(listings_traits::table)
        .values(&ListingTrait { listing_id, trait_id: pet_friendly.id + 100 })
        .execute(&mut conn);
    assert!(dangling.is_err());

    let tagged: Vec<(Listing, Trait)> = listings::table
        .inner_join(listings_traits::table.inner_join(traits::table))
        .select((Listing::as_select(), Trait::as_select()))
        .load(&mut conn)
        .unwrap();
    assert_eq!(tagged.len(), 1);
    assert_eq!(tagged[0].1.name, "pet friendly");
}
