//! Exponential Moving Average (EMA) indicator.

use crate::services::signals::Indicator;

/// EMA over the whole series.
///
/// Smoothing factor is `2 / (period + 1)`. The average is seeded with the
/// first price of the slice and walked oldest to newest across every retained
/// sample, so the result depends on the full history handed in (and therefore
/// on the buffer capacity), not only on the last `period` prices.
pub fn ema(prices: &[f64], period: usize) -> Option<f64> {
    let (&first, rest) = prices.split_first()?;
    let k = 2.0 / (period as f64 + 1.0);

    Some(rest.iter().fold(first, |ema, &price| price * k + ema * (1.0 - k)))
}

/// EMA (Exponential Moving Average) indicator.
///
/// Like SMA but gives more weight to recent prices.
pub struct Ema {
    period: usize,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        Self {
            period: period.max(1),
        }
    }
}

impl Default for Ema {
    fn default() -> Self {
        Self { period: 20 }
    }
}

impl Indicator for Ema {
    type Output = f64;

    fn id(&self) -> &str {
        match self.period {
            12 => "ema12",
            20 => "ema20",
            26 => "ema26",
            _ => "ema",
        }
    }

    fn name(&self) -> &str {
        match self.period {
            12 => "EMA (12)",
            20 => "EMA (20)",
            26 => "EMA (26)",
            _ => "EMA",
        }
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn calculate(&self, prices: &[f64]) -> Option<f64> {
        ema(prices, self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ema_single_price_is_seed() {
        assert_eq!(ema(&[42.0], 20), Some(42.0));
    }

    #[test]
    fn test_ema_manual_steps() {
        // k = 2 / 4 = 0.5
        let value = ema(&[10.0, 20.0, 30.0], 3).unwrap();
        // 10 -> 15 -> 22.5
        assert!((value - 22.5).abs() < 1e-9);
    }

    #[test]
    fn test_ema_depends_on_early_history() {
        let tail: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        let mut a = vec![50.0; 10];
        a.extend(&tail);
        let mut b = vec![150.0; 10];
        b.extend(&tail);

        let ema_a = ema(&a, 20).unwrap();
        let ema_b = ema(&b, 20).unwrap();
        assert!((ema_a - ema_b).abs() > 1e-6);
    }

    #[test]
    fn test_ema_empty() {
        assert!(ema(&[], 12).is_none());
    }

    #[test]
    fn test_ema_id_and_name() {
        assert_eq!(Ema::new(12).id(), "ema12");
        assert_eq!(Ema::default().name(), "EMA (20)");
        assert_eq!(Ema::new(7).id(), "ema");
    }

    #[test]
    fn test_ema_min_periods_is_period() {
        assert_eq!(Ema::default().min_periods(), 20);
        assert_eq!(Ema::new(40).min_periods(), 40);
    }
}
