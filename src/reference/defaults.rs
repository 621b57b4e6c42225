//! 연도별 항로 기본 입력값(초기화/리셋용).
//! TCO·GHG는 외부 분석 결과를 옮긴 값이며, 연료비 기본값은 0(사용자 입력)이다.
use crate::fleet::{OwnedShips, Route, RouteInput, ScenarioYear, ShipCategory};

struct DefaultRow {
    route: Route,
    owned: &'static [(ShipCategory, u32)],
    tco_musd: f64,
    ghg_mt_co2e: f64,
    charter_count: u32,
}

const fn row(
    route: Route,
    owned: &'static [(ShipCategory, u32)],
    tco_musd: f64,
    ghg_mt_co2e: f64,
    charter_count: u32,
) -> DefaultRow {
    DefaultRow {
        route,
        owned,
        tco_musd,
        ghg_mt_co2e,
        charter_count,
    }
}

use ShipCategory::*;

static DEFAULTS_2030: &[DefaultRow] = &[
    row(Route::VlccChina, &[(Diesel, 4), (B30, 14)], 538.21, 1.69, 12),
    row(Route::SuezSeasia, &[(Diesel, 2), (B30, 7)], 174.7, 0.4, 6),
    row(Route::SuezSing, &[(Diesel, 6), (B30, 14)], 384.93, 0.91, 0),
    row(Route::AfraEurope, &[(Diesel, 5)], 52.4165, 0.2437, 28),
    row(Route::PanaHouston, &[(Diesel, 1)], 8.79673, 0.04292, 8),
    row(Route::MrNy, &[(Diesel, 4)], 31.0053, 0.12959, 21),
];

static DEFAULTS_2040: &[DefaultRow] = &[
    row(Route::VlccChina, &[(Diesel, 4), (B50, 1)], 848.85, 0.64, 5),
    row(Route::SuezSeasia, &[(Diesel, 2), (B50, 2), (Methane, 13)], 357.2, 0.2, 2),
    row(Route::SuezSing, &[(B50, 8), (Methanol, 2), (Methane, 7)], 500.31, 0.27, 4),
    row(Route::AfraEurope, &[(Diesel, 5)], 81.69102, 0.239923, 18),
    row(Route::PanaHouston, &[], 0.0, 0.0, 7),
    row(Route::MrNy, &[], 0.0, 0.0, 22),
];

static DEFAULTS_2050: &[DefaultRow] = &[
    row(Route::VlccChina, &[(Ammonia, 18)], 960.76, 0.02376, 1),
    row(Route::SuezSeasia, &[(B100, 8), (Ammonia, 4)], 555.78, 0.01877, 1),
    row(Route::SuezSing, &[(B100, 12), (Ammonia, 5)], 780.3, 0.02754, 3),
    row(Route::AfraEurope, &[], 0.0, 0.0, 18),
    row(Route::PanaHouston, &[], 0.0, 0.0, 6),
    row(Route::MrNy, &[], 0.0, 0.0, 20),
];

fn rows(year: ScenarioYear) -> &'static [DefaultRow] {
    match year {
        ScenarioYear::Y2030 => DEFAULTS_2030,
        ScenarioYear::Y2040 => DEFAULTS_2040,
        ScenarioYear::Y2050 => DEFAULTS_2050,
    }
}

/// 한 항로의 기본 입력. 테이블에 없으면 0으로 채운다.
pub fn default_route_input(year: ScenarioYear, route: Route) -> RouteInput {
    match rows(year).iter().find(|r| r.route == route) {
        Some(r) => RouteInput::from_parts(
            r.charter_count,
            r.tco_musd,
            r.ghg_mt_co2e,
            0.0,
            OwnedShips::with_counts(year, r.owned),
        ),
        None => RouteInput::zeroed(year),
    }
}

/// 6개 항로 전체의 기본 입력(canonical order).
pub fn default_inputs(year: ScenarioYear) -> [RouteInput; 6] {
    Route::ALL.map(|route| default_route_input(year, route))
}
