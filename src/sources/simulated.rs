use super::PriceSource;
use crate::config::SimulationConfig;
use crate::services::{is_valid_price, PriceSeries};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Per-sample downward drift of the warm-up curve.
const WARM_UP_DRIFT: f64 = 0.02;
/// Half-width of the warm-up noise band.
const WARM_UP_NOISE: f64 = 1.0;

/// Random-walk price feed used when no live source is connected.
pub struct SimulatedSource {
    rng: StdRng,
    last_price: f64,
    max_step: f64,
    start_price: f64,
    seed_samples: usize,
}

impl SimulatedSource {
    pub fn new(config: &SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            rng,
            last_price: config.start_price,
            max_step: config.max_step.abs(),
            start_price: config.start_price,
            seed_samples: config.seed_samples,
        }
    }

    /// Pre-fill `series` with a noisy, gently rising curve ending near the
    /// start price, so indicators are available from the first tick.
    pub fn warm_up(&mut self, series: &mut PriceSeries) {
        for i in (0..self.seed_samples).rev() {
            let noise = self.rng.gen_range(-WARM_UP_NOISE..WARM_UP_NOISE);
            let price = self.start_price + noise - i as f64 * WARM_UP_DRIFT;
            if series.append(price).is_ok() {
                self.last_price = price;
            }
        }
        debug!("Warmed up price series with {} samples", series.len());
    }

    /// Emit a price into `tx` every `interval` until the receiver is dropped.
    pub async fn start_feed(mut self, tx: mpsc::Sender<f64>, interval: Duration) {
        info!("Starting {} price feed every {:?}", self.name(), interval);
        let mut ticker = tokio::time::interval(interval);

        loop {
            ticker.tick().await;
            let Some(price) = self.next_price() else {
                continue;
            };
            if tx.send(price).await.is_err() {
                debug!("Price receiver closed - stopping simulated feed");
                break;
            }
        }
    }

    pub fn last_price(&self) -> f64 {
        self.last_price
    }
}

impl PriceSource for SimulatedSource {
    fn name(&self) -> &str {
        "simulated"
    }

    fn next_price(&mut self) -> Option<f64> {
        let step = self.rng.gen_range(-self.max_step..=self.max_step);
        let price = self.last_price + step;

        if !is_valid_price(price) {
            warn!("Simulated walk produced invalid price {} - holding at {}", price, self.last_price);
            return None;
        }

        self.last_price = price;
        Some(price)
    }
}
