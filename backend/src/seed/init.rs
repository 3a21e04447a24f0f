//! Destructive reset of the rental schema.

use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::sql_query;
use log::info;

/// Join tables go first so the drops succeed while foreign keys still exist.
pub const DROP_ORDER: [&str; 6] = [
    "groups_listings",
    "groups_users",
    "listings_traits",
    "groups",
    "traits",
    "listings",
];

/// Parents precede the tables whose foreign keys reference them.
pub const CREATE_ORDER: [(&str, &str); 6] = [
    (
        "listings",
        r#"
        CREATE TABLE listings(
            id INT GENERATED ALWAYS AS IDENTITY,
            name TEXT,
            bedrooms INT,
            bathrooms FLOAT,
            price INT NOT NULL,
            sqft INT,
            available_date DATE,
            is_available BOOLEAN,
            building_type TEXT NOT NULL,
            deposit INT,
            notes TEXT,
            parking_spaces INT,
            address TEXT NOT NULL,
            is_bookmarked BOOLEAN,
            city TEXT NOT NULL,
            PRIMARY KEY(id)
        )
        "#,
    ),
    (
        "traits",
        r#"
        CREATE TABLE traits(
            id INT GENERATED ALWAYS AS IDENTITY,
            name TEXT NOT NULL,
            PRIMARY KEY(id)
        )
        "#,
    ),
    (
        "listings_traits",
        r#"
        CREATE TABLE listings_traits(
            listing_id INT NOT NULL,
            trait_id INT NOT NULL,
            CONSTRAINT fk_listing
                FOREIGN KEY(listing_id) REFERENCES listings(id),
            CONSTRAINT fk_trait
                FOREIGN KEY(trait_id) REFERENCES traits(id)
        )
        "#,
    ),
    (
        "groups",
        r#"
        CREATE TABLE groups(
            id INT GENERATED ALWAYS AS IDENTITY,
            name TEXT NOT NULL,
            PRIMARY KEY(id)
        )
        "#,
    ),
    (
        "groups_users",
        r#"
        CREATE TABLE groups_users(
            group_id INT NOT NULL,
            user_id INT NOT NULL,
            CONSTRAINT fk_group
                FOREIGN KEY(group_id) REFERENCES groups(id)
        )
        "#,
    ),
    (
        "groups_listings",
        r#"
        CREATE TABLE groups_listings(
            group_id INT NOT NULL,
            listing_id INT NOT NULL,
            CONSTRAINT fk_group
                FOREIGN KEY(group_id) REFERENCES groups(id),
            CONSTRAINT fk_listing
                FOREIGN KEY(listing_id) REFERENCES listings(id)
        )
        "#,
    ),
];

pub fn drop_tables(conn: &mut PgConnection) -> QueryResult<()> {
    for table in DROP_ORDER {
        info!("Dropping table {} if it exists", table);
        sql_query(format!("DROP TABLE IF EXISTS {}", table)).execute(conn)?;
    }
    Ok(())
}

pub fn create_tables(conn: &mut PgConnection) -> QueryResult<()> {
    for (table, ddl) in CREATE_ORDER {
        info!("Creating table {}", table);
        sql_query(ddl).execute(conn)?;
    }
    Ok(())
}
