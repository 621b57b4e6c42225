use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::analysis::{FinancialAssumptions, MAX_HORIZON_YEARS};
use crate::fleet::ScenarioYear;

/// 기본 설정 파일 경로
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 할인율 허용 범위(%)
pub const DISCOUNT_RATE_RANGE: (f64, f64) = (0.0, 20.0);

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 시작 시 선택되는 시나리오 연도
    pub default_year: ScenarioYear,
    pub analysis: FinancialAssumptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_year: ScenarioYear::Y2030,
            analysis: FinancialAssumptions::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// 값이 허용 범위를 벗어남
    #[error("설정 값 범위 오류: {field} = {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

impl Config {
    /// 분석 파라미터가 유효한지 확인한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let a = &self.analysis;
        if a.horizon_years == 0 || a.horizon_years > MAX_HORIZON_YEARS {
            return Err(ConfigError::OutOfRange {
                field: "analysis.horizon_years",
                value: f64::from(a.horizon_years),
            });
        }
        let (lo, hi) = DISCOUNT_RATE_RANGE;
        if !a.discount_rate_percent.is_finite()
            || a.discount_rate_percent < lo
            || a.discount_rate_percent > hi
        {
            return Err(ConfigError::OutOfRange {
                field: "analysis.discount_rate_percent",
                value: a.discount_rate_percent,
            });
        }
        if !a.annual_net_cash_flow_musd.is_finite() {
            return Err(ConfigError::OutOfRange {
                field: "analysis.annual_net_cash_flow_musd",
                value: a.annual_net_cash_flow_musd,
            });
        }
        Ok(())
    }

    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// TOML 문자열에서 설정을 읽고 검증한다.
pub fn parse(content: &str) -> Result<Config, ConfigError> {
    let cfg: Config = toml::from_str(content)?;
    cfg.validate()?;
    Ok(cfg)
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        parse(&content)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        tracing::info!(path = %path.display(), "기본 설정 파일 생성");
        Ok(cfg)
    }
}
