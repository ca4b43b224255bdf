use std::env;
use std::str::FromStr;

/// Indicator periods and multipliers.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorConfig {
    /// SMA period (default: 20).
    pub sma_period: usize,
    /// EMA period (default: 20).
    pub ema_period: usize,
    /// RSI period (default: 14).
    pub rsi_period: usize,
    /// Bollinger Bands period (default: 20).
    pub bb_period: usize,
    /// Bollinger Bands standard deviation multiplier (default: 2.0).
    pub bb_std_dev: f64,
    /// MACD fast EMA period (default: 12).
    pub macd_fast: usize,
    /// MACD slow EMA period (default: 26).
    pub macd_slow: usize,
    /// Ratio of the MACD line used as the signal line (default: 0.8).
    pub macd_signal_ratio: f64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            sma_period: 20,
            ema_period: 20,
            rsi_period: 14,
            bb_period: 20,
            bb_std_dev: 2.0,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal_ratio: 0.8,
        }
    }
}

/// Random-walk price feed settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Price the walk starts from.
    pub start_price: f64,
    /// Largest absolute change per tick.
    pub max_step: f64,
    /// Optional RNG seed for reproducible runs.
    pub seed: Option<u64>,
    /// Number of warm-up samples written before the first tick.
    pub seed_samples: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            start_price: 150.21,
            max_step: 0.2,
            seed: None,
            seed_samples: 27,
        }
    }
}

/// Take-profit / stop-loss distances, in percent of the entry price.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetConfig {
    pub target_move_pct: f64,
    pub stop_move_pct: f64,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            target_move_pct: 1.0,
            stop_move_pct: 0.5,
        }
    }
}

/// Report rendering format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub indicators: IndicatorConfig,
    /// Maximum number of retained price samples.
    pub price_history_capacity: usize,
    /// Maximum number of retained signal log entries.
    pub signal_log_capacity: usize,
    /// Interval between price feed ticks (ms).
    pub refresh_interval_ms: u64,
    pub simulation: SimulationConfig,
    pub targets: TargetConfig,
    pub output_format: OutputFormat,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = IndicatorConfig::default();
        let indicators = IndicatorConfig {
            sma_period: env_or("SMA_PERIOD", defaults.sma_period),
            ema_period: env_or("EMA_PERIOD", defaults.ema_period),
            rsi_period: env_or("RSI_PERIOD", defaults.rsi_period),
            bb_period: env_or("BB_PERIOD", defaults.bb_period),
            bb_std_dev: env_or("BB_STD_DEV", defaults.bb_std_dev),
            ..defaults
        };

        let sim_defaults = SimulationConfig::default();
        let simulation = SimulationConfig {
            start_price: env_or("SIM_START_PRICE", sim_defaults.start_price),
            max_step: env_or("SIM_MAX_STEP", sim_defaults.max_step),
            seed: env::var("SIM_SEED").ok().and_then(|s| s.parse().ok()),
            seed_samples: env_or("SIM_SEED_SAMPLES", sim_defaults.seed_samples),
        };

        let target_defaults = TargetConfig::default();
        let targets = TargetConfig {
            target_move_pct: env_or("TARGET_MOVE_PCT", target_defaults.target_move_pct),
            stop_move_pct: env_or("STOP_MOVE_PCT", target_defaults.stop_move_pct),
        };

        Self {
            indicators,
            price_history_capacity: env_or("PRICE_HISTORY_CAPACITY", 50),
            signal_log_capacity: env_or("SIGNAL_LOG_CAPACITY", 10),
            refresh_interval_ms: env_or("REFRESH_INTERVAL_MS", 1000),
            simulation,
            targets,
            output_format: env::var("OUTPUT_FORMAT")
                .ok()
                .and_then(|s| OutputFormat::from_str(&s))
                .unwrap_or_default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indicators: IndicatorConfig::default(),
            price_history_capacity: 50,
            signal_log_capacity: 10,
            refresh_interval_ms: 1000,
            simulation: SimulationConfig::default(),
            targets: TargetConfig::default(),
            output_format: OutputFormat::Text,
        }
    }
}

/// Read and parse an environment variable, falling back on absence or parse failure.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_config_defaults() {
        let config = IndicatorConfig::default();
        assert_eq!(config.sma_period, 20);
        assert_eq!(config.ema_period, 20);
        assert_eq!(config.rsi_period, 14);
        assert_eq!(config.bb_period, 20);
        assert_eq!(config.bb_std_dev, 2.0);
        assert_eq!(config.macd_fast, 12);
        assert_eq!(config.macd_slow, 26);
        assert_eq!(config.macd_signal_ratio, 0.8);
    }

    #[test]
    fn test_config_default_values() {
        let config = Config::default();
        assert_eq!(config.price_history_capacity, 50);
        assert_eq!(config.signal_log_capacity, 10);
        assert_eq!(config.refresh_interval_ms, 1000);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.simulation.start_price, 150.21);
        assert_eq!(config.simulation.seed_samples, 27);
        assert!(config.simulation.seed.is_none());
    }

    #[test]
    fn test_target_config_defaults() {
        let config = TargetConfig::default();
        assert_eq!(config.target_move_pct, 1.0);
        assert_eq!(config.stop_move_pct, 0.5);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_str("yaml"), None);
    }

    #[test]
    fn test_env_or_falls_back_on_missing_and_garbage() {
        assert_eq!(env_or("OMEN_TEST_UNSET_VARIABLE", 7usize), 7);

        env::set_var("OMEN_TEST_GARBAGE_VARIABLE", "not-a-number");
        assert_eq!(env_or("OMEN_TEST_GARBAGE_VARIABLE", 3usize), 3);

        env::set_var("OMEN_TEST_VALID_VARIABLE", " 42 ");
        assert_eq!(env_or("OMEN_TEST_VALID_VARIABLE", 3usize), 42);
    }
}
