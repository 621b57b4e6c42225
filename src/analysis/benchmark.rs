use super::aggregate::FleetTotals;
use crate::reference::BenchmarkSnapshot;

/// 0으로 간주하는 기준값 크기
const NEAR_ZERO: f64 = 1e-9;

/// 비교 대상 지표.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchmarkMetric {
    Tco,
    Ghg,
    CharterCost,
    FuelCost,
    Revenue,
}

impl BenchmarkMetric {
    pub const ALL: [BenchmarkMetric; 5] = [
        BenchmarkMetric::Tco,
        BenchmarkMetric::Ghg,
        BenchmarkMetric::CharterCost,
        BenchmarkMetric::FuelCost,
        BenchmarkMetric::Revenue,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BenchmarkMetric::Tco => "Total TCO (M USD)",
            BenchmarkMetric::Ghg => "Total GHG (M Tons CO2e)",
            BenchmarkMetric::CharterCost => "Total Charter Cost (M USD)",
            BenchmarkMetric::FuelCost => "Total Fuel Cost (M USD)",
            BenchmarkMetric::Revenue => "Total Revenue (M USD)",
        }
    }

    fn scenario_value(self, totals: &FleetTotals) -> f64 {
        match self {
            BenchmarkMetric::Tco => totals.tco_musd,
            BenchmarkMetric::Ghg => totals.ghg_mt_co2e,
            BenchmarkMetric::CharterCost => totals.charter_cost_musd,
            BenchmarkMetric::FuelCost => totals.fuel_cost_musd,
            BenchmarkMetric::Revenue => totals.revenue_musd,
        }
    }

    fn benchmark_value(self, snapshot: &BenchmarkSnapshot) -> f64 {
        match self {
            BenchmarkMetric::Tco => snapshot.total_tco_musd,
            BenchmarkMetric::Ghg => snapshot.total_ghg_mt_co2e,
            BenchmarkMetric::CharterCost => snapshot.total_charter_cost_musd,
            BenchmarkMetric::FuelCost => snapshot.total_fuel_cost_musd,
            BenchmarkMetric::Revenue => snapshot.total_revenue_musd,
        }
    }
}

/// 기준 대비 변화율
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PercentChange {
    Percent(f64),
    /// 기준값이 사실상 0이라 변화율을 정의할 수 없음
    NotApplicable,
}

impl std::fmt::Display for PercentChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PercentChange::Percent(p) => write!(f, "{p:+.1}%"),
            PercentChange::NotApplicable => f.write_str("N/A"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkComparison {
    pub metric: BenchmarkMetric,
    pub benchmark_value: f64,
    pub scenario_value: f64,
    pub percent_change: PercentChange,
}

/// (시나리오 - 기준) / |기준| × 100
pub fn percent_change(scenario_value: f64, benchmark_value: f64) -> PercentChange {
    if benchmark_value == 0.0 && scenario_value == 0.0 {
        return PercentChange::Percent(0.0);
    }
    if benchmark_value.abs() < NEAR_ZERO {
        return PercentChange::NotApplicable;
    }
    PercentChange::Percent((scenario_value - benchmark_value) / benchmark_value.abs() * 100.0)
}

pub fn compare_to_benchmark(
    metric: BenchmarkMetric,
    scenario_value: f64,
    benchmark_value: f64,
) -> BenchmarkComparison {
    BenchmarkComparison {
        metric,
        benchmark_value,
        scenario_value,
        percent_change: percent_change(scenario_value, benchmark_value),
    }
}

/// 모든 지표를 기준 스냅샷과 각각 비교한다.
pub fn compare_fleet(totals: &FleetTotals, snapshot: &BenchmarkSnapshot) -> Vec<BenchmarkComparison> {
    BenchmarkMetric::ALL
        .into_iter()
        .map(|m| compare_to_benchmark(m, m.scenario_value(totals), m.benchmark_value(snapshot)))
        .collect()
}
