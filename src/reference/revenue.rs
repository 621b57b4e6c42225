//! 항로별 연간 수익 참조값과 2024 기준(benchmark) 스냅샷.
//! 값은 의사결정 보조용 참고치이며 [백만 USD] 단위이다.

use crate::fleet::{Route, ScenarioYear};

/// 한 연도의 항로별 수익 테이블.
#[derive(Debug, Clone, Copy)]
pub struct RevenueTable<'a> {
    entries: &'a [(Route, f64)],
}

impl<'a> RevenueTable<'a> {
    pub const fn new(entries: &'a [(Route, f64)]) -> Self {
        Self { entries }
    }

    /// 테이블이 없는 연도는 빈 테이블을 반환한다.
    pub fn for_year(year: u16) -> RevenueTable<'static> {
        match year {
            2024 => RevenueTable::new(REVENUE_2024),
            2030 => RevenueTable::new(REVENUE_2030),
            2040 => RevenueTable::new(REVENUE_2040),
            2050 => RevenueTable::new(REVENUE_2050),
            _ => RevenueTable::new(&[]),
        }
    }

    pub fn for_scenario(year: ScenarioYear) -> RevenueTable<'static> {
        Self::for_year(year.as_u16())
    }

    /// 항로 수익 [백만 USD]. 항목이 없으면 0.
    pub fn revenue_musd(&self, route: Route) -> f64 {
        self.entries
            .iter()
            .find(|(r, _)| *r == route)
            .map(|(_, v)| *v)
            .unwrap_or(0.0)
    }

    pub fn total_musd(&self) -> f64 {
        self.entries.iter().map(|(_, v)| v).sum()
    }
}

static REVENUE_2024: &[(Route, f64)] = &[
    (Route::VlccChina, 1_310.0),
    (Route::SuezSeasia, 455.0),
    (Route::SuezSing, 690.0),
    (Route::AfraEurope, 520.0),
    (Route::PanaHouston, 140.0),
    (Route::MrNy, 265.0),
];

static REVENUE_2030: &[(Route, f64)] = &[
    (Route::VlccChina, 1_420.0),
    (Route::SuezSeasia, 480.0),
    (Route::SuezSing, 735.0),
    (Route::AfraEurope, 545.0),
    (Route::PanaHouston, 150.0),
    (Route::MrNy, 280.0),
];

static REVENUE_2040: &[(Route, f64)] = &[
    (Route::VlccChina, 1_560.0),
    (Route::SuezSeasia, 525.0),
    (Route::SuezSing, 790.0),
    (Route::AfraEurope, 570.0),
    (Route::PanaHouston, 155.0),
    (Route::MrNy, 295.0),
];

// 2050년 파나막스/MR 항로는 전망치가 없어 비워 둔다.
static REVENUE_2050: &[(Route, f64)] = &[
    (Route::VlccChina, 1_690.0),
    (Route::SuezSeasia, 560.0),
    (Route::SuezSing, 845.0),
    (Route::AfraEurope, 590.0),
];

/// 2024년 선대 실적 스냅샷.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkSnapshot {
    pub year: u16,
    pub total_tco_musd: f64,
    pub total_ghg_mt_co2e: f64,
    pub total_charter_cost_musd: f64,
    pub total_fuel_cost_musd: f64,
    pub total_revenue_musd: f64,
}

/// 고정된 2024 기준 스냅샷. 총수익은 2024 항로 수익 테이블의 합이다.
pub fn benchmark_2024() -> BenchmarkSnapshot {
    BenchmarkSnapshot {
        year: 2024,
        total_tco_musd: 1_105.0,
        total_ghg_mt_co2e: 3.92,
        total_charter_cost_musd: 2_410.0,
        total_fuel_cost_musd: 1_480.0,
        total_revenue_musd: RevenueTable::for_year(2024).total_musd(),
    }
}
