use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::analysis::{AnalysisReport, FinancialAssumptions, MAX_HORIZON_YEARS};
use crate::app::AppError;
use crate::config::{Config, DISCOUNT_RATE_RANGE};
use crate::fleet::{Route, ScenarioSession, ScenarioYear, VesselClass};
use crate::reference::{cii, gfi};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SelectYear,
    EditRoute,
    RunAnalysis,
    Reset,
    ReferenceCurves,
    SaveScenario,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(year: ScenarioYear) -> Result<MenuChoice, AppError> {
    println!("\n=== Tanker Fleet Decision Support ({year}) ===");
    println!("1) 시나리오 연도 선택");
    println!("2) 항로 입력 편집");
    println!("3) Run Analysis");
    println!("4) {year}년 기본값으로 리셋");
    println!("5) CII / GFI 참고 곡선");
    println!("6) 시나리오 파일 저장");
    println!("7) 설정");
    println!("0) 종료");
    read_menu_choice(&mut io::stdin().lock())
}

/// 메뉴 번호를 읽는다. 입력 스트림이 끝나면 종료로 처리한다.
pub fn read_menu_choice<R: BufRead>(reader: &mut R) -> Result<MenuChoice, AppError> {
    loop {
        let Some(sel) = read_line_from("메뉴 선택: ", reader)? else {
            return Ok(MenuChoice::Exit);
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::SelectYear),
            "2" => return Ok(MenuChoice::EditRoute),
            "3" => return Ok(MenuChoice::RunAnalysis),
            "4" => return Ok(MenuChoice::Reset),
            "5" => return Ok(MenuChoice::ReferenceCurves),
            "6" => return Ok(MenuChoice::SaveScenario),
            "7" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 연도 선택 메뉴. 취소하거나 같은 연도를 고르면 None.
pub fn handle_select_year(current: ScenarioYear) -> Result<Option<ScenarioYear>, AppError> {
    println!("\n-- 시나리오 연도 (현재 {current}) --");
    println!("1) 2030  2) 2040  3) 2050");
    println!("참고: 연도를 바꾸면 모든 입력이 새 연도 기본값으로 바뀝니다.");
    let sel = read_line("선택(취소하려면 엔터): ")?;
    let year = match sel.trim() {
        "1" => ScenarioYear::Y2030,
        "2" => ScenarioYear::Y2040,
        "3" => ScenarioYear::Y2050,
        _ => return Ok(None),
    };
    Ok((year != current).then_some(year))
}

/// 항로 하나의 입력을 편집한다. 값이 바뀌었으면 true.
pub fn handle_edit_route(session: &mut ScenarioSession) -> Result<bool, AppError> {
    println!("\n-- 항로 입력 편집 --");
    for (i, route) in Route::ALL.iter().enumerate() {
        println!("{}) {}", i + 1, route.label());
    }
    let sel = read_line("항로 번호(취소하려면 엔터): ")?;
    let Some(route) = sel
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| Route::ALL.get(i).copied())
    else {
        return Ok(false);
    };

    let year = session.year();
    let input = session.route_mut(route);
    println!("[{}] 현재 값은 괄호 안에 표시됩니다. 엔터 시 유지.", route.label());
    input.charter_count = read_u32_or(
        &format!("Charter Vessels ({}): ", input.charter_count),
        input.charter_count,
    )?;
    input.tco_musd = read_amount_or(
        &format!("Annualized TCO [M USD] ({:.5}): ", input.tco_musd),
        input.tco_musd,
    )?;
    input.ghg_mt_co2e = read_amount_or(
        &format!("Total GHG [M t CO2e] ({:.5}): ", input.ghg_mt_co2e),
        input.ghg_mt_co2e,
    )?;
    input.fuel_cost_musd = read_amount_or(
        &format!("Fuel Cost [M USD] ({:.2}): ", input.fuel_cost_musd),
        input.fuel_cost_musd,
    )?;
    for &category in year.ship_categories() {
        let current = input.owned_ships().count(category);
        let count = read_u32_or(&format!("{} ({current}): ", category.label()), current)?;
        input.set_owned(category, count)?;
    }
    Ok(true)
}

/// CII / GFI 참고 곡선을 출력한다.
pub fn handle_reference_curves() -> Result<(), AppError> {
    println!("\n-- CII 등급 경계 [gCO2/dwt·nm] --");
    for class in VesselClass::ALL {
        println!("{} (DWT {:.0})", class.label(), class.reference_dwt());
        for bands in cii::rating_band_curve(class) {
            println!(
                "  {}: required {:.3} | A≤{:.3} B≤{:.3} C≤{:.3} D≤{:.3}",
                bands.year, bands.required, bands.upper_a, bands.upper_b, bands.upper_c, bands.upper_d
            );
        }
    }
    println!("\n-- GFI 준수 구간 [gCO2e/MJ] --");
    for t in gfi::compliance_curve(2028, 2050) {
        println!(
            "  {}: Direct ≤ {:.2}, Base ≤ {:.2}",
            t.year, t.direct_target, t.base_target
        );
    }
    Ok(())
}

/// 설정 메뉴를 처리한다. 값이 바뀌었으면 true.
pub fn handle_settings(cfg: &mut Config) -> Result<bool, AppError> {
    println!("\n-- 설정 --");
    let a = cfg.analysis;
    println!("분석 기간: {} 년", a.horizon_years);
    println!("할인율: {:.2} %", a.discount_rate_percent);
    println!(
        "가정 연간 순현금흐름: {:.0} M USD/년 (시나리오 입력과 무관한 가정값)",
        a.annual_net_cash_flow_musd
    );
    let horizon = read_u32_or(
        &format!("분석 기간 [년] (1~{MAX_HORIZON_YEARS}, 엔터 시 유지): "),
        a.horizon_years,
    )?
    .clamp(1, MAX_HORIZON_YEARS);
    let (lo, hi) = DISCOUNT_RATE_RANGE;
    let rate = read_amount_or(
        &format!("할인율 [%] ({lo}~{hi}, 엔터 시 유지): "),
        a.discount_rate_percent,
    )?
    .clamp(lo, hi);
    let ncf = read_f64_or(
        "연간 순현금흐름 [M USD] (엔터 시 유지): ",
        a.annual_net_cash_flow_musd,
    )?;
    let updated = FinancialAssumptions {
        horizon_years: horizon,
        discount_rate_percent: rate,
        annual_net_cash_flow_musd: ncf,
    };
    let changed = updated != cfg.analysis;
    cfg.analysis = updated;
    Ok(changed)
}

/// 분석 결과를 출력한다. 숫자 서식은 여기서만 적용한다.
pub fn print_report(report: &AnalysisReport, assumptions: &FinancialAssumptions) {
    for w in report.warnings() {
        println!("경고: {w}");
    }
    let t = &report.totals;
    println!("\n== Fleet Summary (Year: {}) ==", report.year);
    println!("Total Owned Vessels (All Routes): {}", t.owned_vessels);
    println!("Total Charter Vessels: {}", t.charter_vessels);
    println!("Total TCO (Fleet, M USD): {}", format_currency(t.tco_musd));
    println!("Total GHG Emissions (Fleet, M Tons CO2e): {}", format_sig(t.ghg_mt_co2e, 2));
    println!("Total Charter Cost (Fleet, M USD): {}", format_currency(t.charter_cost_musd));
    println!("Total Fuel Cost (Fleet, M USD): {}", format_currency(t.fuel_cost_musd));
    println!("Total Investment (Fleet, M USD): {}", format_currency(t.investment_snapshot_musd));
    println!("Total Scenario Revenue (M USD): {}", format_currency(t.revenue_musd));

    println!("\n== Route-Level Summary ==");
    println!(
        "{:<26} {:>6} {:>8} {:>14} {:>10} {:>14}",
        "Route", "Owned", "Charter", "TCO", "GHG", "Charter Cost"
    );
    let mut shown = 0;
    for r in report.active_routes() {
        shown += 1;
        println!(
            "{:<26} {:>6} {:>8} {:>14} {:>10} {:>14}",
            r.route.label(),
            r.owned_ship_total,
            r.charter_count,
            format_currency(r.tco_musd),
            format_sig(r.ghg_mt_co2e, 2),
            format_currency(r.charter_cost_musd)
        );
    }
    if shown == 0 {
        println!("No route data.");
    }

    let p = &report.projection;
    println!(
        "\n== Financial Projection ({} years @ {:.1}%) ==",
        assumptions.horizon_years, assumptions.discount_rate_percent
    );
    println!("Initial Investment (TCO × horizon): {}", format_currency(p.initial_investment_musd));
    println!("Payback Period: {}", p.payback);
    match &p.npv_musd {
        Ok(v) => println!("NPV: {}", format_currency(*v)),
        Err(e) => println!("{e}"),
    }
    if let (Some(first), Some(last)) = (p.cumulative_series.first(), p.cumulative_series.last()) {
        println!(
            "Cumulative Cash Flow: {} → {}",
            format_currency(*first),
            format_currency(*last)
        );
    }

    println!("\n== vs. 2024 Benchmark ==");
    for c in &report.benchmark {
        println!(
            "{:<28} 2024 {:>14}  {} {:>14}  {}",
            c.metric.label(),
            format_sig(c.benchmark_value, 4),
            report.year,
            format_sig(c.scenario_value, 4),
            c.percent_change
        );
    }
}

fn format_currency(value: f64) -> String {
    if !value.is_finite() || value.abs() < 1e-9 {
        return "$0.00".into();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = format!("{:.2}", value.abs());
    let (int_part, frac) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));
    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}.{frac}")
}

/// 유효숫자 표기
fn format_sig(value: f64, sig_figs: i32) -> String {
    if !value.is_finite() || value.abs() < 1e-9 {
        return "0.00".into();
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    format!("{value:.decimals$}")
}

pub fn read_path(prompt: &str) -> Result<PathBuf, AppError> {
    Ok(PathBuf::from(read_line(prompt)?.trim()))
}

/// EOF면 None
fn read_line_from<R: BufRead>(prompt: &str, reader: &mut R) -> Result<Option<String>, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    Ok(read_line_from(prompt, &mut io::stdin().lock())?.unwrap_or_default())
}

fn read_f64_or(prompt: &str, current: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(current);
        }
        match s.parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => println!("숫자를 입력하세요."),
        }
    }
}

/// 0 이상의 실수만 받는다.
fn read_amount_or(prompt: &str, current: f64) -> Result<f64, AppError> {
    loop {
        let v = read_f64_or(prompt, current)?;
        if v >= 0.0 {
            return Ok(v);
        }
        println!("0 이상의 값을 입력하세요.");
    }
}

fn read_u32_or(prompt: &str, current: u32) -> Result<u32, AppError> {
    loop {
        let s = read_line(prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(current);
        }
        match s.parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("0 이상의 정수를 입력하세요."),
        }
    }
}
