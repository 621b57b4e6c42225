//! 항로 계산(용선비, 수익 조회, 경고) 회귀 테스트.
use tanker_fleet_toolbox::analysis::{compute_route_result, RouteWarning};
use tanker_fleet_toolbox::fleet::{Route, RouteInput, ScenarioYear, ShipCategory};
use tanker_fleet_toolbox::logging;
use tanker_fleet_toolbox::reference::{
    charter_factors, CharterFactorPair, CharterFactorTable, RevenueTable,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn input_with_charter(year: ScenarioYear, charter_count: u32) -> RouteInput {
    let mut input = RouteInput::zeroed(year);
    input.charter_count = charter_count;
    input
}

#[test]
fn vlcc_china_2030_charter_cost() {
    let year = ScenarioYear::Y2030;
    let res = compute_route_result(
        Route::VlccChina,
        year,
        &input_with_charter(year, 12),
        &charter_factors(year),
        &RevenueTable::for_scenario(year),
    );
    // 12 × 4.5 × 6.96
    assert_close("charter_cost", res.charter_cost_musd, 375.84, 1e-12);
    assert!(res.warning.is_none());
}

#[test]
fn zero_charter_count_costs_nothing_for_every_route() {
    let empty = CharterFactorTable::new(&[]);
    for year in ScenarioYear::ALL {
        let revenue = RevenueTable::for_scenario(year);
        for route in Route::ALL {
            let input = input_with_charter(year, 0);
            for table in [charter_factors(year), empty] {
                let res = compute_route_result(route, year, &input, &table, &revenue);
                assert_eq!(res.charter_cost_musd, 0.0, "{route} {year}");
                assert!(res.warning.is_none(), "{route} {year}");
            }
        }
    }
}

#[test]
fn charter_cost_is_count_times_both_multipliers() {
    for year in ScenarioYear::ALL {
        let table = charter_factors(year);
        for route in Route::ALL {
            let pair = table.get(route).expect("every route has factors");
            let res = compute_route_result(
                route,
                year,
                &input_with_charter(year, 7),
                &table,
                &RevenueTable::for_scenario(year),
            );
            let expected = 7.0 * pair.multiplier1 * pair.multiplier2_musd;
            assert_close(route.key(), res.charter_cost_musd, expected, 1e-12);
        }
    }
}

#[test]
fn missing_factors_zero_cost_with_single_warning() {
    logging::init_test();
    let year = ScenarioYear::Y2040;
    let only_vlcc = [(Route::VlccChina, CharterFactorPair::new(4.5, 7.24))];
    let table = CharterFactorTable::new(&only_vlcc);
    let res = compute_route_result(
        Route::MrNy,
        year,
        &input_with_charter(year, 22),
        &table,
        &RevenueTable::for_scenario(year),
    );
    assert_eq!(res.charter_cost_musd, 0.0);
    assert_eq!(
        res.warning,
        Some(RouteWarning::MissingCharterFactors {
            route: Route::MrNy,
            year,
            charter_count: 22,
        })
    );
    assert!(res.warning.map(|w| w.to_string()).unwrap_or_default().contains("MR Tankers"));
}

#[test]
fn pass_through_values_and_owned_total() {
    let year = ScenarioYear::Y2050;
    let mut input = RouteInput::zeroed(year);
    input.tco_musd = 960.76;
    input.ghg_mt_co2e = 0.02376;
    input.fuel_cost_musd = 310.5;
    input.set_owned(ShipCategory::Ammonia, 18).expect("2050 ammonia");
    input.set_owned(ShipCategory::EH2, 3).expect("2050 eH2");

    let res = compute_route_result(
        Route::VlccChina,
        year,
        &input,
        &charter_factors(year),
        &RevenueTable::for_scenario(year),
    );
    assert_eq!(res.owned_ship_total, 21);
    assert_eq!(res.tco_musd, 960.76);
    assert_eq!(res.ghg_mt_co2e, 0.02376);
    assert_eq!(res.fuel_cost_musd, 310.5);
    assert!(res.has_activity());
}

#[test]
fn revenue_missing_route_or_year_is_zero() {
    let year = ScenarioYear::Y2050;
    let res = compute_route_result(
        Route::PanaHouston,
        year,
        &RouteInput::zeroed(year),
        &charter_factors(year),
        &RevenueTable::for_scenario(year),
    );
    assert_eq!(res.revenue_musd, 0.0);
    assert!(!res.has_activity());

    assert_eq!(RevenueTable::for_year(2025).revenue_musd(Route::VlccChina), 0.0);
    assert!(RevenueTable::for_year(2030).revenue_musd(Route::VlccChina) > 0.0);
}
