//! 항로, 시나리오 연도, 선대 입력(세션 컨텍스트)을 정의한다.

pub mod input;
pub mod route;
pub mod scenario;

pub use input::{OwnedShips, RouteEntry, RouteInput, ScenarioFile, ScenarioSession};
pub use route::{Route, VesselClass};
pub use scenario::{ScenarioYear, ShipCategory};

use thiserror::Error;

/// 선대 입력 검증 시 발생 가능한 오류.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FleetInputError {
    /// 지원하지 않는 시나리오 연도
    #[error("지원하지 않는 시나리오 연도: {0} (2030/2040/2050 중 선택)")]
    UnknownYear(u16),

    #[error("연도를 해석할 수 없습니다: {0:?}")]
    UnparsableYear(String),

    /// 해당 연도에 존재하지 않는 연료 구분
    #[error("{year}년에는 '{category}' 구분이 없습니다.")]
    CategoryNotValidForYear {
        category: ShipCategory,
        year: ScenarioYear,
    },

    #[error("{route}: {field} 값은 음수일 수 없습니다 ({value})")]
    NegativeValue {
        route: Route,
        field: &'static str,
        value: f64,
    },

    #[error("{route}: {field} 값이 유한한 숫자가 아닙니다.")]
    NonFiniteValue { route: Route, field: &'static str },
}
