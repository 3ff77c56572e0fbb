use std::collections::BTreeMap;

use super::CostBreakdown;

/// Annual-operation scenarios the daily report projects across.
pub const DEFAULT_PROJECTION_DAYS: [u32; 3] = [240, 300, 365];

/// Linear projection of one measured day across annual-operation scenarios,
/// keyed `"240 days"` etc.
///
/// Straight-line scaling is the reporting contract of the deployed system.
/// No compounding, no seasonal adjustment.
pub fn project_yearly(daily: &CostBreakdown, horizons: &[u32]) -> BTreeMap<String, CostBreakdown> {
    horizons
        .iter()
        .map(|days| (format!("{days} days"), daily.scaled(f64::from(*days))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::unit::KiloJoules;
    use crate::recovery::UnitPriceTable;

    #[test]
    fn test_projection_is_exact_linear_scaling() {
        let prices = UnitPriceTable::new(BTreeMap::from([
            ("electricity".to_owned(), 30.0),
            ("gas".to_owned(), 20.0),
        ]));
        let daily = prices.cost_of(KiloJoules(15_069_600.0));

        let projected = project_yearly(&daily, &DEFAULT_PROJECTION_DAYS);

        assert_eq!(
            projected.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["240 days", "300 days", "365 days"]
        );

        for days in DEFAULT_PROJECTION_DAYS {
            let scenario = &projected[&format!("{days} days")];
            for (carrier, amount) in scenario.iter() {
                assert_eq!(amount, daily.amount(carrier).unwrap() * f64::from(days));
            }
        }

        assert_eq!(projected["365 days"].amount("electricity"), Some(45_836_700.0));
    }
}
