//! `dectime` — prints the current decimal time and, when geolocation is
//! available, the local solar-relative time.

use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use decimal_time::clock;
use decimal_time::geo::GeoClient;
use decimal_time::report::{LocalSolarTime, StandardTime};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let now = Utc::now();
    let second_of_day = clock::decimal_second_of_day(&now);

    let standard = StandardTime::for_instant(&now)?;
    println!("standard: {standard}");

    // Geolocation disabled: report standard time only.
    let Some(client) = GeoClient::from_env() else {
        tracing::debug!("geolocation disabled, skipping local report");
        return Ok(());
    };

    // The only asynchronous operation: a single position lookup, no retry.
    match client.current_position().await {
        Ok(position) => {
            let local = LocalSolarTime::at(second_of_day, position.longitude())?;
            println!("local: {local}");
            println!("noon: {}", local.noon());
        }
        Err(err) => {
            tracing::error!("{err}");
        }
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("dectime=info,decimal_time=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}
