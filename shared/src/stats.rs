//! Dashboard aggregation engine
//!
//! A pure, synchronous reduction of the fetched farm graph into the
//! statistics served by the dashboard. Nothing is cached; callers recompute
//! on every request.

use rust_decimal::Decimal;

use crate::models::{ChartEntry, DashboardStats, FarmSummary, LandUseEntry};

/// Label for the arable share of the land-use split.
pub const LAND_USE_ARABLE: &str = "Agricultável";
/// Label for the vegetation share of the land-use split.
pub const LAND_USE_VEGETATION: &str = "Vegetação";

/// Reduce the full farm graph into dashboard statistics.
///
/// Group ordering follows first occurrence in the input; state matching is
/// exact and case-sensitive. The land-use list always carries its two
/// entries, even over an empty registry.
pub fn aggregate_dashboard(farms: &[FarmSummary]) -> DashboardStats {
    let mut total_hectares = Decimal::ZERO;
    let mut arable = Decimal::ZERO;
    let mut vegetation = Decimal::ZERO;
    let mut farms_by_state: Vec<ChartEntry> = Vec::new();
    let mut farms_by_crop: Vec<ChartEntry> = Vec::new();

    for farm in farms {
        total_hectares += farm.total_area;
        arable += farm.arable_area;
        vegetation += farm.vegetation_area;

        bump(&mut farms_by_state, &farm.state);
        for crop in &farm.crops {
            bump(&mut farms_by_crop, crop);
        }
    }

    DashboardStats {
        total_farms: farms.len() as u64,
        total_hectares,
        farms_by_state,
        farms_by_crop,
        land_use: vec![
            LandUseEntry {
                name: LAND_USE_ARABLE.to_string(),
                value: arable,
            },
            LandUseEntry {
                name: LAND_USE_VEGETATION.to_string(),
                value: vegetation,
            },
        ],
    }
}

/// Increment the entry for `name`, appending it on first occurrence.
fn bump(entries: &mut Vec<ChartEntry>, name: &str) {
    match entries.iter_mut().find(|e| e.name == name) {
        Some(entry) => entry.value += 1,
        None => entries.push(ChartEntry {
            name: name.to_string(),
            value: 1,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn farm(state: &str, total: i64, arable: i64, vegetation: i64, crops: &[&str]) -> FarmSummary {
        FarmSummary {
            state: state.to_string(),
            total_area: Decimal::from(total),
            arable_area: Decimal::from(arable),
            vegetation_area: Decimal::from(vegetation),
            crops: crops.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_registry() {
        let stats = aggregate_dashboard(&[]);
        assert_eq!(stats.total_farms, 0);
        assert_eq!(stats.total_hectares, Decimal::ZERO);
        assert!(stats.farms_by_state.is_empty());
        assert!(stats.farms_by_crop.is_empty());
        // Land use keeps its two entries even with no data.
        assert_eq!(stats.land_use.len(), 2);
        assert_eq!(stats.land_use[0].name, LAND_USE_ARABLE);
        assert_eq!(stats.land_use[0].value, Decimal::ZERO);
        assert_eq!(stats.land_use[1].name, LAND_USE_VEGETATION);
        assert_eq!(stats.land_use[1].value, Decimal::ZERO);
    }

    #[test]
    fn test_two_farms_same_state() {
        let farms = vec![
            farm("SP", 100, 60, 30, &[]),
            farm("SP", 200, 100, 80, &[]),
        ];
        let stats = aggregate_dashboard(&farms);
        assert_eq!(stats.total_farms, 2);
        assert_eq!(stats.total_hectares, Decimal::from(300));
        assert_eq!(
            stats.farms_by_state,
            vec![ChartEntry {
                name: "SP".to_string(),
                value: 2
            }]
        );
        assert_eq!(stats.land_use[0].value, Decimal::from(160));
        assert_eq!(stats.land_use[1].value, Decimal::from(110));
    }

    #[test]
    fn test_states_keep_first_seen_order() {
        let farms = vec![
            farm("MG", 10, 5, 5, &[]),
            farm("SP", 10, 5, 5, &[]),
            farm("MG", 10, 5, 5, &[]),
            farm("PR", 10, 5, 5, &[]),
        ];
        let stats = aggregate_dashboard(&farms);
        let names: Vec<&str> = stats
            .farms_by_state
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["MG", "SP", "PR"]);
        assert_eq!(stats.farms_by_state[0].value, 2);
    }

    #[test]
    fn test_state_match_is_case_sensitive() {
        let farms = vec![farm("SP", 10, 5, 5, &[]), farm("sp", 10, 5, 5, &[])];
        let stats = aggregate_dashboard(&farms);
        assert_eq!(stats.farms_by_state.len(), 2);
    }

    #[test]
    fn test_crops_count_associations_not_farms() {
        // One farm growing soy in two seasons counts twice for soy.
        let farms = vec![
            farm("SP", 100, 60, 30, &["Soja", "Soja", "Milho"]),
            farm("MG", 50, 20, 20, &["Milho"]),
        ];
        let stats = aggregate_dashboard(&farms);
        assert_eq!(
            stats.farms_by_crop,
            vec![
                ChartEntry {
                    name: "Soja".to_string(),
                    value: 2
                },
                ChartEntry {
                    name: "Milho".to_string(),
                    value: 2
                },
            ]
        );
        // The farm itself is still counted once per state.
        assert_eq!(stats.farms_by_state.len(), 2);
        assert_eq!(stats.farms_by_state[0].value, 1);
    }

    #[test]
    fn test_totals_are_order_independent() {
        let farms = vec![
            farm("SP", 100, 60, 30, &["Soja"]),
            farm("MG", 50, 20, 20, &["Milho"]),
            farm("SP", 25, 10, 10, &["Café"]),
        ];
        let mut reversed = farms.clone();
        reversed.reverse();

        let a = aggregate_dashboard(&farms);
        let b = aggregate_dashboard(&reversed);

        assert_eq!(a.total_farms, b.total_farms);
        assert_eq!(a.total_hectares, b.total_hectares);
        assert_eq!(a.land_use, b.land_use);

        let mut a_states = a.farms_by_state.clone();
        let mut b_states = b.farms_by_state.clone();
        a_states.sort_by(|x, y| x.name.cmp(&y.name));
        b_states.sort_by(|x, y| x.name.cmp(&y.name));
        assert_eq!(a_states, b_states);
    }

    #[test]
    fn test_fractional_hectares_sum_exactly() {
        let farms = vec![
            farm("SP", 0, 0, 0, &[]),
            FarmSummary {
                state: "SP".to_string(),
                total_area: Decimal::new(105, 1),  // 10.5
                arable_area: Decimal::new(63, 1),  // 6.3
                vegetation_area: Decimal::new(42, 1), // 4.2
                crops: vec![],
            },
            FarmSummary {
                state: "SP".to_string(),
                total_area: Decimal::new(205, 1),
                arable_area: Decimal::new(100, 1),
                vegetation_area: Decimal::new(105, 1),
                crops: vec![],
            },
        ];
        let stats = aggregate_dashboard(&farms);
        assert_eq!(stats.total_hectares, Decimal::new(310, 1));
        assert_eq!(stats.land_use[0].value, Decimal::new(163, 1));
        assert_eq!(stats.land_use[1].value, Decimal::new(147, 1));
    }
}
