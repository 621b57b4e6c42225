use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::analysis::{run_analysis, AnalysisReport};
use crate::config::{Config, ConfigError};
use crate::fleet::{FleetInputError, ScenarioFile, ScenarioSession, ScenarioYear};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),

    #[error("입력 오류: {0}")]
    FleetInput(#[from] FleetInputError),

    #[error("시나리오 파일 파싱 오류: {0}")]
    ScenarioParse(#[from] toml::de::Error),

    #[error("시나리오 파일 직렬화 오류: {0}")]
    ScenarioSerialize(#[from] toml::ser::Error),
}

/// 대화형 셸이 소유하는 세션 상태. 입력이 바뀌면 이전 분석 결과를 버린다.
#[derive(Debug)]
pub struct SessionShell {
    pub session: ScenarioSession,
    report: Option<AnalysisReport>,
}

impl SessionShell {
    pub fn new(session: ScenarioSession) -> Self {
        Self {
            session,
            report: None,
        }
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    pub fn select_year(&mut self, year: ScenarioYear) {
        self.session.set_year(year);
        self.report = None;
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.report = None;
    }

    /// 입력 편집 후 호출한다.
    pub fn invalidate(&mut self) {
        self.report = None;
    }

    pub fn analyze(&mut self, config: &Config) -> &AnalysisReport {
        self.report
            .insert(run_analysis(&self.session, &config.analysis))
    }
}

/// TOML 시나리오 파일을 읽어 세션을 만든다.
pub fn load_scenario(path: &Path) -> Result<ScenarioSession, AppError> {
    let content = fs::read_to_string(path)?;
    let file: ScenarioFile = toml::from_str(&content)?;
    let session = ScenarioSession::from_file(&file)?;
    tracing::info!(path = %path.display(), year = %session.year(), "시나리오 파일 로드");
    Ok(session)
}

pub fn save_scenario(session: &ScenarioSession, path: &Path) -> Result<(), AppError> {
    let content = toml::to_string_pretty(&session.to_file())?;
    fs::write(path, content)?;
    Ok(())
}

/// 분석을 한 번 수행하고 결과를 출력한다(비대화형).
pub fn run_report(config: &Config, session: &ScenarioSession) {
    let report = run_analysis(session, &config.analysis);
    ui_cli::print_report(&report, &config.analysis);
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, config_path: PathBuf, session: ScenarioSession) -> Result<(), AppError> {
    let mut shell = SessionShell::new(session);
    loop {
        match ui_cli::main_menu(shell.session.year())? {
            MenuChoice::SelectYear => {
                if let Some(year) = ui_cli::handle_select_year(shell.session.year())? {
                    shell.select_year(year);
                }
            }
            MenuChoice::EditRoute => {
                if ui_cli::handle_edit_route(&mut shell.session)? {
                    shell.invalidate();
                }
            }
            MenuChoice::RunAnalysis => {
                let report = shell.analyze(config);
                ui_cli::print_report(report, &config.analysis);
            }
            MenuChoice::Reset => {
                shell.reset();
                println!(
                    "모든 입력을 {}년 기본값으로 되돌렸습니다.",
                    shell.session.year()
                );
            }
            MenuChoice::ReferenceCurves => ui_cli::handle_reference_curves()?,
            MenuChoice::SaveScenario => {
                let path = ui_cli::read_path("저장할 시나리오 파일 경로: ")?;
                save_scenario(&shell.session, &path)?;
                println!("저장했습니다: {}", path.display());
            }
            MenuChoice::Settings => {
                if ui_cli::handle_settings(config)? {
                    config.save(&config_path)?;
                    shell.invalidate();
                }
            }
            MenuChoice::Exit => {
                config.save(&config_path)?;
                println!("프로그램을 종료합니다.");
                break;
            }
        }
    }
    Ok(())
}
