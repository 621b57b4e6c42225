use super::route_metrics::RouteResult;

/// 선대 전체 합계.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FleetTotals {
    pub owned_vessels: u32,
    pub charter_vessels: u32,
    pub tco_musd: f64,
    pub ghg_mt_co2e: f64,
    pub charter_cost_musd: f64,
    pub fuel_cost_musd: f64,
    /// 시나리오 수익 합계
    pub revenue_musd: f64,
    /// 연간 운영 규모(TCO + 용선비). 자본 투자액이 아니다.
    pub investment_snapshot_musd: f64,
}

/// 항로 결과들을 합산한다. 빠진 항로는 0으로 취급된다.
pub fn aggregate(results: &[RouteResult]) -> FleetTotals {
    let mut totals = results.iter().fold(FleetTotals::default(), |mut acc, r| {
        acc.owned_vessels += r.owned_ship_total;
        acc.charter_vessels += r.charter_count;
        acc.tco_musd += r.tco_musd;
        acc.ghg_mt_co2e += r.ghg_mt_co2e;
        acc.charter_cost_musd += r.charter_cost_musd;
        acc.fuel_cost_musd += r.fuel_cost_musd;
        acc.revenue_musd += r.revenue_musd;
        acc
    });
    totals.investment_snapshot_musd = totals.tco_musd + totals.charter_cost_musd;
    totals
}
