//! 회수기간/NPV/누적 현금흐름 테스트.
use tanker_fleet_toolbox::analysis::finance::{
    cash_flows, cumulative_series, discounted_cumulative_series, initial_investment, npv,
    payback_period,
};
use tanker_fleet_toolbox::analysis::{
    project, Payback, ProjectionError, ProjectionInput, MAX_HORIZON_YEARS,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn payback_from_tco_and_horizon() {
    let p = project(ProjectionInput {
        total_tco_musd: 100.0,
        horizon_years: 25,
        annual_net_cash_flow_musd: 4000.0,
        discount_rate_percent: 8.0,
    });
    assert_close("investment", p.initial_investment_musd, 2500.0, 1e-12);
    match p.payback {
        Payback::Years(y) => assert_close("payback", y, 0.625, 1e-12),
        Payback::Never => panic!("expected payback"),
    }
    assert!(p.npv_musd.is_ok());
}

#[test]
fn payback_edge_cases() {
    assert_eq!(payback_period(0.0, 4000.0), Payback::Years(0.0));
    assert_eq!(payback_period(-5.0, 10.0), Payback::Years(0.0));
    assert_eq!(payback_period(2500.0, 0.0), Payback::Never);
    assert_eq!(payback_period(2500.0, -1.0), Payback::Never);
    assert_eq!(payback_period(0.0, 0.0), Payback::Never);
}

#[test]
fn npv_zero_flows_is_zero() {
    for horizon in [1, 5, 25] {
        for rate in [0.0, 3.5, 20.0] {
            assert_eq!(npv(0.0, 0.0, horizon, rate), Ok(0.0), "h={horizon} r={rate}");
        }
    }
}

#[test]
fn npv_single_period_undiscounted() {
    // [-100, 100] @ r=0
    let v = npv(100.0, 100.0, 1, 0.0).expect("npv");
    assert_close("npv", v, 0.0, 1e-12);
}

#[test]
fn npv_matches_closed_form() {
    // NPV = -I + ncf · (1 - (1+r)^-n) / r
    let (i, ncf, n, r) = (2500.0, 400.0, 10u32, 0.08);
    let annuity = ncf * (1.0 - (1.0f64 + r).powi(-(n as i32))) / r;
    let v = npv(i, ncf, n, 8.0).expect("npv");
    assert_close("npv", v, -i + annuity, 1e-9);
}

#[test]
fn npv_invalid_inputs_are_error_states() {
    assert_eq!(npv(100.0, 10.0, 0, 5.0), Err(ProjectionError::NonPositiveHorizon));
    assert!(matches!(
        npv(100.0, 10.0, 5, -100.0),
        Err(ProjectionError::RateOutOfDomain { .. })
    ));
    assert!(matches!(
        npv(100.0, 10.0, 5, f64::NAN),
        Err(ProjectionError::RateOutOfDomain { .. })
    ));
    assert_eq!(npv(0.0, f64::MAX, 2, 0.0), Err(ProjectionError::NonFiniteResult));

    let msg = ProjectionError::NonFiniteResult.to_string();
    assert!(msg.contains("invalid"), "{msg}");
}

#[test]
fn cumulative_series_is_additive() {
    let investment = initial_investment(40.0, 5);
    assert_close("investment", investment, 200.0, 1e-12);
    let series = cumulative_series(investment, 60.0, 5);
    assert_eq!(series.len(), 6);
    assert_eq!(series[0], -200.0);
    for w in series.windows(2) {
        assert_close("step", w[1] - w[0], 60.0, 1e-12);
    }
    assert_close("last", series[5], 100.0, 1e-12);
}

#[test]
fn discounted_series_differs_when_rate_nonzero() {
    let plain = cumulative_series(200.0, 60.0, 5);
    let same = discounted_cumulative_series(200.0, 60.0, 5, 0.0);
    let discounted = discounted_cumulative_series(200.0, 60.0, 5, 10.0);
    assert_eq!(same.len(), plain.len());
    for (a, b) in plain.iter().zip(&same) {
        assert_close("r=0", *b, *a, 1e-12);
    }
    assert_eq!(discounted[0], plain[0]);
    assert!(discounted[5] < plain[5]);

    let npv_value = npv(200.0, 60.0, 5, 10.0).expect("npv");
    assert_close("npv = last discounted", discounted[5], npv_value, 1e-9);
}

#[test]
fn zero_horizon_projection_keeps_series_but_no_npv() {
    let p = project(ProjectionInput {
        total_tco_musd: 100.0,
        horizon_years: 0,
        annual_net_cash_flow_musd: 4000.0,
        discount_rate_percent: 8.0,
    });
    assert_eq!(p.initial_investment_musd, 0.0);
    assert_eq!(p.cumulative_series, vec![0.0]);
    assert_eq!(p.npv_musd, Err(ProjectionError::NonPositiveHorizon));
}

#[test]
fn horizon_beyond_limit_is_error_state_without_series() {
    let p = project(ProjectionInput {
        total_tco_musd: 1000.0,
        horizon_years: 4_000_000_000,
        annual_net_cash_flow_musd: 4000.0,
        discount_rate_percent: 8.0,
    });
    assert_eq!(
        p.npv_musd,
        Err(ProjectionError::HorizonTooLong {
            horizon_years: 4_000_000_000,
            max: MAX_HORIZON_YEARS,
        })
    );
    assert!(p.cumulative_series.is_empty());
    assert!(p.discounted_cumulative_series.is_empty());
    assert!(cash_flows(1.0, 1.0, u32::MAX).is_empty());
    assert!(matches!(p.payback, Payback::Years(_)));
}

#[test]
fn horizon_at_limit_is_still_projected() {
    let p = project(ProjectionInput {
        total_tco_musd: 10.0,
        horizon_years: MAX_HORIZON_YEARS,
        annual_net_cash_flow_musd: 50.0,
        discount_rate_percent: 5.0,
    });
    let n = MAX_HORIZON_YEARS as usize + 1;
    assert_eq!(p.cumulative_series.len(), n);
    assert_eq!(p.discounted_cumulative_series.len(), n);
    let v = p.npv_musd.expect("npv");
    assert_close("npv = last discounted", p.discounted_cumulative_series[n - 1], v, 1e-9);
}
