use serde::{Deserialize, Serialize};

/// 선종(규모) 구분. CII 기준선 계산 시 대표 DWT를 제공한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VesselClass {
    Vlcc,
    Suezmax,
    Aframax,
    Panamax,
    MediumRange,
}

impl VesselClass {
    pub const ALL: [VesselClass; 5] = [
        VesselClass::Vlcc,
        VesselClass::Suezmax,
        VesselClass::Aframax,
        VesselClass::Panamax,
        VesselClass::MediumRange,
    ];

    /// 대표 재화중량톤수(DWT)
    pub fn reference_dwt(self) -> f64 {
        match self {
            VesselClass::Vlcc => 300_000.0,
            VesselClass::Suezmax => 157_000.0,
            VesselClass::Aframax => 110_000.0,
            VesselClass::Panamax => 73_000.0,
            VesselClass::MediumRange => 50_000.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VesselClass::Vlcc => "VLCC",
            VesselClass::Suezmax => "Suezmax",
            VesselClass::Aframax => "Aframax",
            VesselClass::Panamax => "Panamax",
            VesselClass::MediumRange => "MR Tanker",
        }
    }
}

/// 고정된 6개 탱커 항로.
///
/// 선언 순서가 곧 표시/합산 순서(canonical order)이다.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    VlccChina,
    SuezSeasia,
    SuezSing,
    AfraEurope,
    PanaHouston,
    MrNy,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::VlccChina,
        Route::SuezSeasia,
        Route::SuezSing,
        Route::AfraEurope,
        Route::PanaHouston,
        Route::MrNy,
    ];

    /// 시나리오 파일 등에서 사용하는 식별자
    pub fn key(self) -> &'static str {
        match self {
            Route::VlccChina => "vlcc_china",
            Route::SuezSeasia => "suez_seasia",
            Route::SuezSing => "suez_sing",
            Route::AfraEurope => "afra_europe",
            Route::PanaHouston => "pana_houston",
            Route::MrNy => "mr_ny",
        }
    }

    /// 화면 표시용 이름
    pub fn label(self) -> &'static str {
        match self {
            Route::VlccChina => "VLCC (to China)",
            Route::SuezSeasia => "Suezmax (to SE Asia)",
            Route::SuezSing => "Suezmax (to Singapore)",
            Route::AfraEurope => "Aframax (to Europe)",
            Route::PanaHouston => "Panamax (to Houston)",
            Route::MrNy => "MR Tankers (to New York)",
        }
    }

    pub fn vessel_class(self) -> VesselClass {
        match self {
            Route::VlccChina => VesselClass::Vlcc,
            Route::SuezSeasia | Route::SuezSing => VesselClass::Suezmax,
            Route::AfraEurope => VesselClass::Aframax,
            Route::PanaHouston => VesselClass::Panamax,
            Route::MrNy => VesselClass::MediumRange,
        }
    }

    /// 식별자 문자열로 항로를 찾는다. 대소문자는 구분하지 않는다.
    pub fn from_key(key: &str) -> Option<Route> {
        Route::ALL
            .into_iter()
            .find(|r| r.key().eq_ignore_ascii_case(key.trim()))
    }

    /// canonical order 상의 위치(0..6)
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
