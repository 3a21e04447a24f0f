use std::io;

use rental_listings::{config, db, seed};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    rental_listings::init_logging();

    let config = config::AppConfig::load()?;

    seed::confirm_and_run(
        io::stdin().lock(),
        io::stdout(),
        || db::establish_connection(&config.database),
        &config.seed.csv_path,
        config.seed.year,
    )?;

    Ok(())
}
