use diesel::pg::PgConnection;
use diesel::prelude::*;
use log::{error, info};

use crate::config::DatabaseConfig;

/// Opens the single connection a process works with. It is closed when dropped.
pub fn establish_connection(config: &DatabaseConfig) -> Result<PgConnection, ConnectionError> {
    info!(
        "Attempting to connect to database {} as {} on port {}",
        config.name, config.user, config.port
    );
    match PgConnection::establish(&config.connection_string()) {
        Ok(conn) => {
            info!("Database connection established successfully");
            Ok(conn)
        }
        Err(e) => {
            error!("Failed to establish database connection: {}", e);
            Err(e)
        }
    }
}
