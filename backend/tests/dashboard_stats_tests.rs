//! Dashboard aggregation property-based and unit tests

use proptest::prelude::*;
use rust_decimal::Decimal;

use shared::models::{ChartEntry, FarmSummary};
use shared::stats::{aggregate_dashboard, LAND_USE_ARABLE, LAND_USE_VEGETATION};

fn farm(state: &str, total: i64, arable: i64, vegetation: i64, crops: &[&str]) -> FarmSummary {
    FarmSummary {
        state: state.to_string(),
        total_area: Decimal::from(total),
        arable_area: Decimal::from(arable),
        vegetation_area: Decimal::from(vegetation),
        crops: crops.iter().map(|c| c.to_string()).collect(),
    }
}

fn farm_strategy() -> impl Strategy<Value = FarmSummary> {
    (
        prop::sample::select(vec!["SP", "MG", "PR", "GO", "BA"]),
        1..=10_000i64,
        0..=5_000i64,
        0..=5_000i64,
        prop::collection::vec(
            prop::sample::select(vec!["Soja", "Milho", "Café", "Algodão"]),
            0..4,
        ),
    )
        .prop_map(|(state, total, arable, vegetation, crops)| FarmSummary {
            state: state.to_string(),
            total_area: Decimal::from(total),
            arable_area: Decimal::from(arable),
            vegetation_area: Decimal::from(vegetation),
            crops: crops.into_iter().map(String::from).collect(),
        })
}

fn sorted_by_name(entries: &[ChartEntry]) -> Vec<ChartEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    sorted
}

proptest! {
    /// Counts and sums do not depend on input order; only first-seen group
    /// ordering may differ between permutations.
    #[test]
    fn aggregation_is_permutation_independent(
        (farms, shuffled) in prop::collection::vec(farm_strategy(), 0..12)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let a = aggregate_dashboard(&farms);
        let b = aggregate_dashboard(&shuffled);

        prop_assert_eq!(a.total_farms, b.total_farms);
        prop_assert_eq!(a.total_hectares, b.total_hectares);
        prop_assert_eq!(a.land_use, b.land_use);
        prop_assert_eq!(
            sorted_by_name(&a.farms_by_state),
            sorted_by_name(&b.farms_by_state)
        );
        prop_assert_eq!(
            sorted_by_name(&a.farms_by_crop),
            sorted_by_name(&b.farms_by_crop)
        );
    }

    /// Every farm lands in exactly one state group.
    #[test]
    fn state_groups_partition_the_farms(farms in prop::collection::vec(farm_strategy(), 0..12)) {
        let stats = aggregate_dashboard(&farms);
        let grouped: u64 = stats.farms_by_state.iter().map(|e| e.value).sum();
        prop_assert_eq!(grouped, stats.total_farms);
    }

    /// Crop groups count associations, not distinct farms.
    #[test]
    fn crop_groups_count_associations(farms in prop::collection::vec(farm_strategy(), 0..12)) {
        let stats = aggregate_dashboard(&farms);
        let grouped: u64 = stats.farms_by_crop.iter().map(|e| e.value).sum();
        let associations: u64 = farms.iter().map(|f| f.crops.len() as u64).sum();
        prop_assert_eq!(grouped, associations);
    }

    /// The land-use split always carries its two fixed entries.
    #[test]
    fn land_use_always_has_two_entries(farms in prop::collection::vec(farm_strategy(), 0..12)) {
        let stats = aggregate_dashboard(&farms);
        prop_assert_eq!(stats.land_use.len(), 2);
        prop_assert_eq!(stats.land_use[0].name.as_str(), LAND_USE_ARABLE);
        prop_assert_eq!(stats.land_use[1].name.as_str(), LAND_USE_VEGETATION);
    }
}

#[test]
fn empty_registry_yields_zeroed_stats() {
    let stats = aggregate_dashboard(&[]);
    assert_eq!(stats.total_farms, 0);
    assert_eq!(stats.total_hectares, Decimal::ZERO);
    assert!(stats.farms_by_state.is_empty());
    assert!(stats.farms_by_crop.is_empty());
    assert_eq!(stats.land_use.len(), 2);
    assert_eq!(stats.land_use[0].value, Decimal::ZERO);
    assert_eq!(stats.land_use[1].value, Decimal::ZERO);
}

#[test]
fn two_farms_in_sao_paulo() {
    let farms = vec![farm("SP", 100, 60, 30, &[]), farm("SP", 200, 100, 80, &[])];
    let stats = aggregate_dashboard(&farms);
    assert_eq!(stats.total_hectares, Decimal::from(300));
    assert_eq!(
        stats.farms_by_state,
        vec![ChartEntry {
            name: "SP".to_string(),
            value: 2
        }]
    );
}

#[test]
fn same_crop_in_two_seasons_counts_twice() {
    let farms = vec![farm("SP", 100, 60, 30, &["Soja", "Soja"])];
    let stats = aggregate_dashboard(&farms);
    assert_eq!(
        stats.farms_by_crop,
        vec![ChartEntry {
            name: "Soja".to_string(),
            value: 2
        }]
    );
}
