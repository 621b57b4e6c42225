//! 단순 회수기간/NPV 투영.
//!
//! 초기 투자액은 연간 TCO를 분석 기간만큼 곱한 값으로 모델링한다(실제 CAPEX 아님).
//! 연간 순현금흐름은 시나리오 입력과 무관한 사용자 가정값이다.

use thiserror::Error;

/// 투영 가능한 최대 분석 기간 [년]
pub const MAX_HORIZON_YEARS: u32 = 100;

/// 투영 입력.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionInput {
    /// 선대 연간 TCO 합계 [백만 USD]
    pub total_tco_musd: f64,
    /// 분석 기간 [년]
    pub horizon_years: u32,
    /// 가정 연간 순현금흐름 [백만 USD/년]
    pub annual_net_cash_flow_musd: f64,
    /// 할인율(%)
    pub discount_rate_percent: f64,
}

/// 회수기간 결과
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payback {
    /// 회수까지의 기간 [년, 소수 포함]. 투자액이 0 이하이면 0.
    Years(f64),
    /// 순현금흐름이 0 이하라 회수 불가
    Never,
}

impl std::fmt::Display for Payback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Payback::Years(y) => write!(f, "{y:.2} years"),
            Payback::Never => f.write_str("No payback (non-positive cash flow)"),
        }
    }
}

/// NPV 계산 불가 상태. Display 문자열이 사용자에게 그대로 표시된다.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ProjectionError {
    #[error("NPV error: analysis horizon must be at least 1 year")]
    NonPositiveHorizon,

    #[error("NPV error: analysis horizon {horizon_years} years exceeds {max} years")]
    HorizonTooLong { horizon_years: u32, max: u32 },

    #[error("NPV error: discount rate {rate_percent}% is out of domain")]
    RateOutOfDomain { rate_percent: f64 },

    #[error("NPV invalid: result is not a finite number")]
    NonFiniteResult,
}

/// 투영 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub initial_investment_musd: f64,
    pub payback: Payback,
    pub npv_musd: Result<f64, ProjectionError>,
    /// 비할인 누적 현금흐름 (길이 horizon+1)
    pub cumulative_series: Vec<f64>,
    /// 할인 누적 현금흐름 (NPV 계산과 동일한 할인 적용, 길이 horizon+1)
    pub discounted_cumulative_series: Vec<f64>,
}

pub fn initial_investment(total_tco_musd: f64, horizon_years: u32) -> f64 {
    total_tco_musd * f64::from(horizon_years)
}

pub fn payback_period(initial_investment_musd: f64, annual_net_cash_flow_musd: f64) -> Payback {
    if annual_net_cash_flow_musd > 0.0 {
        if initial_investment_musd > 0.0 {
            Payback::Years(initial_investment_musd / annual_net_cash_flow_musd)
        } else {
            Payback::Years(0.0)
        }
    } else {
        Payback::Never
    }
}

/// 현금흐름 (t, CF_t) 열: t=0에서 -I, 이후 ncf. 길이 horizon+1.
fn cash_flow_iter(
    initial_investment_musd: f64,
    annual_net_cash_flow_musd: f64,
    horizon_years: u32,
) -> impl Iterator<Item = (u32, f64)> {
    (0..=horizon_years).map(move |t| {
        if t == 0 {
            (t, -initial_investment_musd)
        } else {
            (t, annual_net_cash_flow_musd)
        }
    })
}

/// 현금흐름 벡터 [-I, ncf, ..., ncf] (길이 horizon+1).
/// 분석 기간이 [`MAX_HORIZON_YEARS`]를 넘으면 빈 벡터.
pub fn cash_flows(
    initial_investment_musd: f64,
    annual_net_cash_flow_musd: f64,
    horizon_years: u32,
) -> Vec<f64> {
    if horizon_years > MAX_HORIZON_YEARS {
        return Vec::new();
    }
    cash_flow_iter(initial_investment_musd, annual_net_cash_flow_musd, horizon_years)
        .map(|(_, cf)| cf)
        .collect()
}

/// (1+r)^t 할인 계수. 지수가 i32 범위를 넘으면 None.
fn discount_factor(rate: f64, t: u32) -> Option<f64> {
    i32::try_from(t).ok().map(|t| (1.0 + rate).powi(t))
}

fn rate_from_percent(discount_rate_percent: f64) -> Result<f64, ProjectionError> {
    let rate = discount_rate_percent / 100.0;
    if !rate.is_finite() || rate <= -1.0 {
        return Err(ProjectionError::RateOutOfDomain {
            rate_percent: discount_rate_percent,
        });
    }
    Ok(rate)
}

/// NPV = Σ CF_t / (1+r)^t, t = 0..=horizon
pub fn npv(
    initial_investment_musd: f64,
    annual_net_cash_flow_musd: f64,
    horizon_years: u32,
    discount_rate_percent: f64,
) -> Result<f64, ProjectionError> {
    if horizon_years == 0 {
        return Err(ProjectionError::NonPositiveHorizon);
    }
    if horizon_years > MAX_HORIZON_YEARS {
        return Err(ProjectionError::HorizonTooLong {
            horizon_years,
            max: MAX_HORIZON_YEARS,
        });
    }
    let rate = rate_from_percent(discount_rate_percent)?;
    let mut value = 0.0;
    for (t, cf) in cash_flow_iter(initial_investment_musd, annual_net_cash_flow_musd, horizon_years) {
        let factor = discount_factor(rate, t).ok_or(ProjectionError::NonFiniteResult)?;
        value += cf / factor;
    }
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ProjectionError::NonFiniteResult)
    }
}

/// 비할인 누적 현금흐름. 분석 기간이 상한을 넘으면 빈 벡터.
pub fn cumulative_series(
    initial_investment_musd: f64,
    annual_net_cash_flow_musd: f64,
    horizon_years: u32,
) -> Vec<f64> {
    cash_flows(initial_investment_musd, annual_net_cash_flow_musd, horizon_years)
        .into_iter()
        .scan(0.0, |acc, cf| {
            *acc += cf;
            Some(*acc)
        })
        .collect()
}

/// 할인 누적 현금흐름. 할인율이 정의역 밖이거나 분석 기간이 상한을 넘으면 빈 벡터.
pub fn discounted_cumulative_series(
    initial_investment_musd: f64,
    annual_net_cash_flow_musd: f64,
    horizon_years: u32,
    discount_rate_percent: f64,
) -> Vec<f64> {
    let Ok(rate) = rate_from_percent(discount_rate_percent) else {
        return Vec::new();
    };
    if horizon_years > MAX_HORIZON_YEARS {
        return Vec::new();
    }
    cash_flow_iter(initial_investment_musd, annual_net_cash_flow_musd, horizon_years)
        .scan(0.0, |acc, (t, cf)| {
            let factor = discount_factor(rate, t)?;
            *acc += cf / factor;
            Some(*acc)
        })
        .collect()
}

/// 회수기간, NPV, 누적 현금흐름을 한 번에 계산한다.
pub fn project(input: ProjectionInput) -> Projection {
    let investment = initial_investment(input.total_tco_musd, input.horizon_years);
    let ncf = input.annual_net_cash_flow_musd;
    Projection {
        initial_investment_musd: investment,
        payback: payback_period(investment, ncf),
        npv_musd: npv(
            investment,
            ncf,
            input.horizon_years,
            input.discount_rate_percent,
        ),
        cumulative_series: cumulative_series(investment, ncf, input.horizon_years),
        discounted_cumulative_series: discounted_cumulative_series(
            investment,
            ncf,
            input.horizon_years,
            input.discount_rate_percent,
        ),
    }
}
