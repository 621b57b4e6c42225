use crate::fleet::{Route, ScenarioYear};

/// 용선비 계수 쌍. 용선비 = 척수 × m1 × m2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharterFactorPair {
    /// 무차원 배수
    pub multiplier1: f64,
    /// 척당 단가 [백만 USD]
    pub multiplier2_musd: f64,
}

impl CharterFactorPair {
    pub const fn new(multiplier1: f64, multiplier2_musd: f64) -> Self {
        Self {
            multiplier1,
            multiplier2_musd,
        }
    }
}

/// 한 연도의 항로별 용선비 계수 테이블.
#[derive(Debug, Clone, Copy)]
pub struct CharterFactorTable<'a> {
    entries: &'a [(Route, CharterFactorPair)],
}

impl<'a> CharterFactorTable<'a> {
    pub const fn new(entries: &'a [(Route, CharterFactorPair)]) -> Self {
        Self { entries }
    }

    pub fn get(&self, route: Route) -> Option<CharterFactorPair> {
        self.entries
            .iter()
            .find(|(r, _)| *r == route)
            .map(|(_, pair)| *pair)
    }
}

/// 시나리오 연도의 용선비 계수 테이블을 반환한다.
pub fn charter_factors(year: ScenarioYear) -> CharterFactorTable<'static> {
    match year {
        ScenarioYear::Y2030 => CharterFactorTable::new(FACTORS_2030),
        ScenarioYear::Y2040 => CharterFactorTable::new(FACTORS_2040),
        ScenarioYear::Y2050 => CharterFactorTable::new(FACTORS_2050),
    }
}

const fn cf(route: Route, m1: f64, m2: f64) -> (Route, CharterFactorPair) {
    (route, CharterFactorPair::new(m1, m2))
}

static FACTORS_2030: &[(Route, CharterFactorPair)] = &[
    cf(Route::VlccChina, 4.5, 6.96),
    cf(Route::SuezSeasia, 5.8, 4.66),
    cf(Route::SuezSing, 5.8, 4.66),
    cf(Route::AfraEurope, 9.2, 3.68),
    cf(Route::PanaHouston, 11.4, 2.63),
    cf(Route::MrNy, 10.5, 2.25),
];

static FACTORS_2040: &[(Route, CharterFactorPair)] = &[
    cf(Route::VlccChina, 4.5, 7.24),
    cf(Route::SuezSeasia, 5.8, 4.84),
    cf(Route::SuezSing, 5.8, 4.84),
    cf(Route::AfraEurope, 9.2, 3.83),
    cf(Route::PanaHouston, 11.4, 2.74),
    cf(Route::MrNy, 10.5, 2.34),
];

static FACTORS_2050: &[(Route, CharterFactorPair)] = &[
    cf(Route::VlccChina, 4.5, 7.52),
    cf(Route::SuezSeasia, 5.8, 5.03),
    cf(Route::SuezSing, 5.8, 5.03),
    cf(Route::AfraEurope, 9.2, 3.98),
    cf(Route::PanaHouston, 11.4, 2.85),
    cf(Route::MrNy, 10.5, 2.43),
];
