//! 계산·집계 엔진. 항로 계산 → 선대 합산 → 재무 투영 → 2024 기준 비교 순으로 동작한다.

pub mod aggregate;
pub mod benchmark;
pub mod finance;
pub mod report;
pub mod route_metrics;

pub use aggregate::{aggregate, FleetTotals};
pub use benchmark::{
    compare_fleet, compare_to_benchmark, BenchmarkComparison, BenchmarkMetric, PercentChange,
};
pub use finance::{
    project, Payback, Projection, ProjectionError, ProjectionInput, MAX_HORIZON_YEARS,
};
pub use report::{run_analysis, AnalysisReport, FinancialAssumptions};
pub use route_metrics::{compute_route_result, RouteResult, RouteWarning};
