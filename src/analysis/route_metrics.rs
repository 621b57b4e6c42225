use crate::fleet::{Route, RouteInput, ScenarioYear};
use crate::reference::{CharterFactorTable, RevenueTable};

/// 항로 계산 중 발생한 비치명적 경고.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteWarning {
    /// 용선 척수가 있으나 해당 연도·항로의 용선비 계수가 없음
    MissingCharterFactors {
        route: Route,
        year: ScenarioYear,
        charter_count: u32,
    },
}

impl std::fmt::Display for RouteWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteWarning::MissingCharterFactors {
                route,
                year,
                charter_count,
            } => write!(
                f,
                "{route}: {year}년 용선비 계수가 없어 용선 {charter_count}척의 비용을 0으로 처리했습니다."
            ),
        }
    }
}

/// 항로 단위 계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    pub route: Route,
    pub owned_ship_total: u32,
    pub charter_count: u32,
    /// 항로 수익 [백만 USD]
    pub revenue_musd: f64,
    pub tco_musd: f64,
    pub ghg_mt_co2e: f64,
    pub fuel_cost_musd: f64,
    /// 용선비 [백만 USD]
    pub charter_cost_musd: f64,
    pub warning: Option<RouteWarning>,
}

impl RouteResult {
    /// 표시할 값이 하나라도 있는지 여부
    pub fn has_activity(&self) -> bool {
        const EPS: f64 = 1e-9;
        self.owned_ship_total > 0
            || self.charter_count > 0
            || self.tco_musd.abs() > EPS
            || self.ghg_mt_co2e.abs() > EPS
            || self.charter_cost_musd.abs() > EPS
            || self.fuel_cost_musd.abs() > EPS
    }
}

/// 한 항로의 원시 입력과 연도 계수 테이블로 항로 결과를 계산한다.
///
/// - 용선비 = 척수 × m1 × m2 (계수가 있을 때)
/// - 계수가 없고 척수 > 0이면 용선비 0 + 경고 1건
/// - TCO/GHG/연료비는 그대로 전달한다
pub fn compute_route_result(
    route: Route,
    year: ScenarioYear,
    input: &RouteInput,
    factors: &CharterFactorTable<'_>,
    revenue: &RevenueTable<'_>,
) -> RouteResult {
    let charter_count = input.charter_count;
    let (charter_cost_musd, warning) = match factors.get(route) {
        Some(pair) => (
            f64::from(charter_count) * pair.multiplier1 * pair.multiplier2_musd,
            None,
        ),
        None if charter_count > 0 => {
            let warning = RouteWarning::MissingCharterFactors {
                route,
                year,
                charter_count,
            };
            tracing::warn!(route = route.key(), %year, charter_count, "용선비 계수 누락");
            (0.0, Some(warning))
        }
        None => (0.0, None),
    };

    let result = RouteResult {
        route,
        owned_ship_total: input.owned_ships().total(),
        charter_count,
        revenue_musd: revenue.revenue_musd(route),
        tco_musd: input.tco_musd,
        ghg_mt_co2e: input.ghg_mt_co2e,
        fuel_cost_musd: input.fuel_cost_musd,
        charter_cost_musd,
        warning,
    };
    tracing::debug!(
        route = route.key(),
        owned = result.owned_ship_total,
        charter_cost = result.charter_cost_musd,
        "항로 계산 완료"
    );
    result
}
