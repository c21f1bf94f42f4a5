//! Conversions from wire types to domain types for prices.

use super::wire::PricesResponse;
use super::PriceSnapshot;

impl From<PricesResponse> for PriceSnapshot {
    fn from(r: PricesResponse) -> Self {
        PriceSnapshot::from_prices(r.centralized.price, r.dex.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(centralized: f64, dex: f64) -> PricesResponse {
        serde_json::from_value(serde_json::json!({
            "centralized": { "price": centralized },
            "dex": { "price": dex },
        }))
        .unwrap()
    }

    #[test]
    fn test_snapshot_difference() {
        let snapshot: PriceSnapshot = response(65000.0, 64800.0).into();
        assert_eq!(snapshot.centralized_price, 65000.0);
        assert_eq!(snapshot.decentralized_price, 64800.0);
        assert_eq!(snapshot.absolute_difference, 200.0);
        assert!((snapshot.percent_difference - 0.308_641_975).abs() < 1e-6);
        assert!(snapshot.centralized_premium());
    }

    #[test]
    fn test_snapshot_discount() {
        let snapshot: PriceSnapshot = response(99.0, 100.0).into();
        assert_eq!(snapshot.absolute_difference, -1.0);
        assert_eq!(snapshot.percent_difference, -1.0);
        assert!(!snapshot.centralized_premium());
    }

    #[test]
    fn test_zero_dex_price_is_unguarded() {
        let snapshot: PriceSnapshot = response(10.0, 0.0).into();
        assert!(snapshot.percent_difference.is_infinite());

        let both_zero: PriceSnapshot = response(0.0, 0.0).into();
        assert!(both_zero.percent_difference.is_nan());
    }

    #[test]
    fn test_default_is_zeroed() {
        let snapshot = PriceSnapshot::default();
        assert_eq!(snapshot.centralized_price, 0.0);
        assert_eq!(snapshot.decentralized_price, 0.0);
        assert_eq!(snapshot.absolute_difference, 0.0);
        assert_eq!(snapshot.percent_difference, 0.0);
    }

    #[test]
    fn test_missing_dex_quote_is_rejected() {
        let parsed = serde_json::from_str::<PricesResponse>(r#"{"centralized":{"price":1.0}}"#);
        assert!(parsed.is_err());
    }
}
