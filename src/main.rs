use chrono::Utc;
use omen::config::{Config, OutputFormat};
use omen::services::report;
use omen::sources::{ChannelSource, PriceSource, SimulatedSource};
use omen::{CycleOutcome, SignalPipeline};
use std::time::Duration;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "omen=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Starting Omen: history {} samples, log {} entries, refresh {}ms",
        config.price_history_capacity, config.signal_log_capacity, config.refresh_interval_ms
    );

    let mut pipeline = SignalPipeline::new(&config);
    if !pipeline.can_evaluate() {
        warn!(
            "PRICE_HISTORY_CAPACITY {} is below the {} samples indicators need; no signals will be produced",
            config.price_history_capacity,
            pipeline.required_samples()
        );
    }

    // Pre-fill history so the first tick can be evaluated
    let mut feed = SimulatedSource::new(&config.simulation);
    feed.warm_up(pipeline.series_mut());

    // All cycles run on this task; the feed only pushes prices into the channel
    let (tx, mut prices) = ChannelSource::channel(16);
    let feed_task = tokio::spawn(
        feed.start_feed(tx, Duration::from_millis(config.refresh_interval_ms.max(1))),
    );

    debug!("Evaluating prices from {} source", prices.name());

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("Received Ctrl-C, stopping");
                break;
            }
            price = prices.recv() => {
                let Some(price) = price else {
                    warn!("Price feed closed");
                    break;
                };

                match pipeline.run_cycle(price, Utc::now().timestamp_millis()) {
                    Ok(CycleOutcome::Evaluated(cycle)) => match config.output_format {
                        OutputFormat::Text => println!("{}", report::render_text(&cycle, pipeline.log())),
                        OutputFormat::Json => println!("{}", report::render_json(&cycle, pipeline.log())?),
                    },
                    Ok(CycleOutcome::Skipped { required, available }) => {
                        debug!("Waiting for history: {}/{}", available, required);
                    }
                    Err(e) => warn!("Cycle skipped: {}", e),
                }
            }
        }
    }

    feed_task.abort();
    info!(
        "Recorded {} signals, {} prices dropped",
        pipeline.log().total_recorded(),
        prices.dropped()
    );

    Ok(())
}
