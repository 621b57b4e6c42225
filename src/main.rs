use std::path::PathBuf;

use clap::Parser;
use tanker_fleet_toolbox::{app, config, fleet::ScenarioSession, fleet::ScenarioYear, logging};

/// 탱커 선대 비용·배출 의사결정 보조 CLI
#[derive(Debug, Parser)]
#[command(name = "tanker_fleet_toolbox_cli", version, about)]
struct Cli {
    /// 설정 파일 경로 (없으면 기본값으로 생성)
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// TOML 시나리오 파일. 지정하지 않으면 연도 기본값을 사용한다.
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// 시나리오 연도 (2030/2040/2050). 시나리오 파일보다 우선하지 않는다.
    #[arg(long)]
    year: Option<ScenarioYear>,

    /// 분석을 한 번 실행해 출력하고 종료한다.
    #[arg(long)]
    report: bool,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    logging::init();
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), app::AppError> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default(&cli.config)?;
    let session = match &cli.scenario {
        Some(path) => app::load_scenario(path)?,
        None => ScenarioSession::new(cli.year.unwrap_or(cfg.default_year)),
    };
    if cli.report {
        app::run_report(&cfg, &session);
        return Ok(());
    }
    app::run(&mut cfg, cli.config, session)?;
    Ok(())
}
