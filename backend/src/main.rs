use diesel::prelude::*;
use std::sync::Arc;

use rental_listings::api::{self, AppState, PgListingStore};
use rental_listings::{config, db};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    rental_listings::init_logging();

    let config = config::AppConfig::load()?;
    log::info!("Loaded config: {:?}", config);

    let mut conn = db::establish_connection(&config.database)
        .map_err(|e| format!("Failed to connect to database: {}", e))?;
    let test_query: i32 = diesel::select(diesel::dsl::sql::<diesel::sql_types::Integer>("1"))
        .get_result(&mut conn)?;
    log::info!("Database test query result: {}", test_query);

    let state = AppState {
        store: Arc::new(PgListingStore::new(conn)),
    };
    let app = api::create_router(state);

    let listener = api::bind_listener(&config.server).await?;
    log::info!("Starting server on {}", listener.local_addr()?);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
