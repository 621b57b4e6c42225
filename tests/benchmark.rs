//! 2024 기준 대비 변화율 테스트.
use tanker_fleet_toolbox::analysis::benchmark::percent_change;
use tanker_fleet_toolbox::analysis::{
    compare_fleet, compare_to_benchmark, BenchmarkMetric, FleetTotals, PercentChange,
};
use tanker_fleet_toolbox::reference::{benchmark_2024, RevenueTable};

#[test]
fn equal_and_double_values() {
    assert_eq!(percent_change(250.0, 250.0), PercentChange::Percent(0.0));
    assert_eq!(percent_change(500.0, 250.0), PercentChange::Percent(100.0));
    assert_eq!(percent_change(125.0, 250.0), PercentChange::Percent(-50.0));
}

#[test]
fn zero_benchmark_guards() {
    assert_eq!(percent_change(0.0, 0.0), PercentChange::Percent(0.0));
    assert_eq!(percent_change(3.0, 0.0), PercentChange::NotApplicable);
    assert_eq!(percent_change(3.0, 1e-12), PercentChange::NotApplicable);
    assert_eq!(percent_change(-3.0, -1e-12), PercentChange::NotApplicable);
}

#[test]
fn negative_benchmark_uses_magnitude() {
    assert_eq!(percent_change(0.0, -10.0), PercentChange::Percent(100.0));
}

#[test]
fn display_has_explicit_sign() {
    assert_eq!(PercentChange::Percent(100.0).to_string(), "+100.0%");
    assert_eq!(PercentChange::Percent(-12.34).to_string(), "-12.3%");
    assert_eq!(PercentChange::Percent(0.0).to_string(), "+0.0%");
    assert_eq!(PercentChange::NotApplicable.to_string(), "N/A");
}

#[test]
fn compare_keeps_both_values() {
    let c = compare_to_benchmark(BenchmarkMetric::Ghg, 1.5, 3.0);
    assert_eq!(c.metric, BenchmarkMetric::Ghg);
    assert_eq!(c.benchmark_value, 3.0);
    assert_eq!(c.scenario_value, 1.5);
    assert_eq!(c.percent_change, PercentChange::Percent(-50.0));
}

#[test]
fn fleet_equal_to_snapshot_has_no_change() {
    let snap = benchmark_2024();
    let totals = FleetTotals {
        tco_musd: snap.total_tco_musd,
        ghg_mt_co2e: snap.total_ghg_mt_co2e,
        charter_cost_musd: snap.total_charter_cost_musd,
        fuel_cost_musd: snap.total_fuel_cost_musd,
        revenue_musd: snap.total_revenue_musd,
        ..FleetTotals::default()
    };
    let rows = compare_fleet(&totals, &snap);
    assert_eq!(rows.len(), BenchmarkMetric::ALL.len());
    for row in rows {
        assert_eq!(row.percent_change, PercentChange::Percent(0.0), "{:?}", row.metric);
    }
}

#[test]
fn snapshot_revenue_is_sum_of_2024_table() {
    let snap = benchmark_2024();
    assert_eq!(snap.year, 2024);
    assert_eq!(snap.total_revenue_musd, RevenueTable::for_year(2024).total_musd());
    assert!(snap.total_revenue_musd > 0.0);
}
