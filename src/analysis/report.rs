use serde::{Deserialize, Serialize};

use super::aggregate::{aggregate, FleetTotals};
use super::benchmark::{compare_fleet, BenchmarkComparison};
use super::finance::{project, Projection, ProjectionInput};
use super::route_metrics::{compute_route_result, RouteResult, RouteWarning};
use crate::fleet::{ScenarioSession, ScenarioYear};
use crate::reference::{benchmark_2024, charter_factors, RevenueTable};

/// 재무 투영 파라미터. config.toml의 `[analysis]` 섹션과 대응한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialAssumptions {
    pub horizon_years: u32,
    pub discount_rate_percent: f64,
    /// 가정 연간 순현금흐름 [백만 USD/년]. 시나리오 입력에서 유도하지 않는다.
    pub annual_net_cash_flow_musd: f64,
}

impl Default for FinancialAssumptions {
    fn default() -> Self {
        Self {
            horizon_years: 25,
            discount_rate_percent: 8.0,
            annual_net_cash_flow_musd: 4000.0,
        }
    }
}

/// "Run Analysis" 한 번의 전체 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub year: ScenarioYear,
    /// canonical order의 6개 항로 결과
    pub routes: Vec<RouteResult>,
    pub totals: FleetTotals,
    pub projection: Projection,
    pub benchmark: Vec<BenchmarkComparison>,
}

impl AnalysisReport {
    pub fn warnings(&self) -> impl Iterator<Item = &RouteWarning> + '_ {
        self.routes.iter().filter_map(|r| r.warning.as_ref())
    }

    /// 표시 대상 항로(값이 하나라도 있는 항로)
    pub fn active_routes(&self) -> impl Iterator<Item = &RouteResult> + '_ {
        self.routes.iter().filter(|r| r.has_activity())
    }
}

/// 세션 입력으로 전체 분석을 수행한다. 세션은 읽기만 한다.
pub fn run_analysis(session: &ScenarioSession, assumptions: &FinancialAssumptions) -> AnalysisReport {
    let year = session.year();
    let factors = charter_factors(year);
    let revenue = RevenueTable::for_scenario(year);

    let routes: Vec<RouteResult> = session
        .routes()
        .map(|(route, input)| compute_route_result(route, year, input, &factors, &revenue))
        .collect();
    let totals = aggregate(&routes);
    let projection = project(ProjectionInput {
        total_tco_musd: totals.tco_musd,
        horizon_years: assumptions.horizon_years,
        annual_net_cash_flow_musd: assumptions.annual_net_cash_flow_musd,
        discount_rate_percent: assumptions.discount_rate_percent,
    });
    let benchmark = compare_fleet(&totals, &benchmark_2024());

    tracing::info!(
        %year,
        owned_vessels = totals.owned_vessels,
        tco_musd = totals.tco_musd,
        ghg_mt_co2e = totals.ghg_mt_co2e,
        charter_cost_musd = totals.charter_cost_musd,
        "분석 완료"
    );

    AnalysisReport {
        year,
        routes,
        totals,
        projection,
        benchmark,
    }
}
