use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{FleetInputError, Route, ScenarioYear, ShipCategory};
use crate::reference::defaults;

/// 연도별 자사선 구성(연료 구분 → 척수).
///
/// 항상 해당 연도의 유효 구분만 키로 가진다. 다른 연도의 구분은
/// `set`에서 거부되므로 섞일 수 없다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedShips {
    year: ScenarioYear,
    counts: Vec<(ShipCategory, u32)>,
}

impl OwnedShips {
    /// 연도의 모든 구분을 0척으로 채운 구성을 만든다.
    pub fn empty(year: ScenarioYear) -> Self {
        Self {
            year,
            counts: year.ship_categories().iter().map(|&c| (c, 0)).collect(),
        }
    }

    /// 정적 테이블로부터 구성을 만든다. 연도에 없는 구분은 무시한다.
    pub(crate) fn with_counts(year: ScenarioYear, counts: &[(ShipCategory, u32)]) -> Self {
        let mut ships = Self::empty(year);
        for &(category, count) in counts {
            if let Some(slot) = ships.slot_mut(category) {
                *slot = count;
            }
        }
        ships
    }

    pub fn year(&self) -> ScenarioYear {
        self.year
    }

    /// 구분별 척수. 연도에 없는 구분이면 0.
    pub fn count(&self, category: ShipCategory) -> u32 {
        self.counts
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    pub fn set(&mut self, category: ShipCategory, count: u32) -> Result<(), FleetInputError> {
        let year = self.year;
        if !year.allows(category) {
            return Err(FleetInputError::CategoryNotValidForYear { category, year });
        }
        if let Some(slot) = self.slot_mut(category) {
            *slot = count;
        }
        Ok(())
    }

    /// 전체 자사선 척수
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|(_, n)| *n).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShipCategory, u32)> + '_ {
        self.counts.iter().copied()
    }

    fn slot_mut(&mut self, category: ShipCategory) -> Option<&mut u32> {
        self.counts
            .iter_mut()
            .find(|(c, _)| *c == category)
            .map(|(_, n)| n)
    }
}

/// 항로 하나의 원시 입력.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInput {
    /// 용선 척수
    pub charter_count: u32,
    /// 연간 환산 TCO [백만 USD]
    pub tco_musd: f64,
    /// 온실가스 배출량 [백만 t CO2e]
    pub ghg_mt_co2e: f64,
    /// 연료비 [백만 USD]
    pub fuel_cost_musd: f64,
    owned_ships: OwnedShips,
}

impl RouteInput {
    /// 모든 값이 0인 입력
    pub fn zeroed(year: ScenarioYear) -> Self {
        Self {
            charter_count: 0,
            tco_musd: 0.0,
            ghg_mt_co2e: 0.0,
            fuel_cost_musd: 0.0,
            owned_ships: OwnedShips::empty(year),
        }
    }

    pub(crate) fn from_parts(
        charter_count: u32,
        tco_musd: f64,
        ghg_mt_co2e: f64,
        fuel_cost_musd: f64,
        owned_ships: OwnedShips,
    ) -> Self {
        Self {
            charter_count,
            tco_musd,
            ghg_mt_co2e,
            fuel_cost_musd,
            owned_ships,
        }
    }

    pub fn year(&self) -> ScenarioYear {
        self.owned_ships.year()
    }

    pub fn owned_ships(&self) -> &OwnedShips {
        &self.owned_ships
    }

    pub fn set_owned(&mut self, category: ShipCategory, count: u32) -> Result<(), FleetInputError> {
        self.owned_ships.set(category, count)
    }
}

/// 한 사용자 세션의 입력 컨텍스트.
///
/// UI 계층이 소유하며, 계산 코어에는 참조로 전달된다.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSession {
    year: ScenarioYear,
    inputs: [RouteInput; 6],
}

impl ScenarioSession {
    /// 연도 기본값으로 초기화된 세션을 만든다.
    pub fn new(year: ScenarioYear) -> Self {
        Self {
            year,
            inputs: defaults::default_inputs(year),
        }
    }

    pub fn year(&self) -> ScenarioYear {
        self.year
    }

    /// 연도를 바꾸고 모든 항로 입력을 새 연도 기본값으로 되돌린다.
    pub fn set_year(&mut self, year: ScenarioYear) {
        tracing::debug!(from = %self.year, to = %year, "시나리오 연도 변경");
        self.year = year;
        self.inputs = defaults::default_inputs(year);
    }

    /// 현재 연도의 기본값으로 되돌린다.
    pub fn reset(&mut self) {
        self.inputs = defaults::default_inputs(self.year);
    }

    pub fn route(&self, route: Route) -> &RouteInput {
        &self.inputs[route.index()]
    }

    pub fn route_mut(&mut self, route: Route) -> &mut RouteInput {
        &mut self.inputs[route.index()]
    }

    /// canonical order로 (항로, 입력)을 순회한다.
    pub fn routes(&self) -> impl Iterator<Item = (Route, &RouteInput)> + '_ {
        Route::ALL.into_iter().zip(self.inputs.iter())
    }

    /// 시나리오 파일을 검증해 세션으로 변환한다.
    pub fn from_file(file: &ScenarioFile) -> Result<Self, FleetInputError> {
        let mut session = Self::new(file.year);
        for (&route, entry) in &file.routes {
            let input = entry.to_input(route, file.year)?;
            *session.route_mut(route) = input;
        }
        Ok(session)
    }

    pub fn to_file(&self) -> ScenarioFile {
        let routes = self
            .routes()
            .map(|(route, input)| (route, RouteEntry::from_input(input)))
            .collect();
        ScenarioFile {
            year: self.year,
            routes,
        }
    }
}

/// TOML 시나리오 파일 형식.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioFile {
    pub year: ScenarioYear,
    /// 빠진 항로는 연도 기본값을 사용한다.
    #[serde(default)]
    pub routes: BTreeMap<Route, RouteEntry>,
}

/// 시나리오 파일의 항로 항목.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteEntry {
    pub charter_count: u32,
    pub tco_musd: f64,
    pub ghg_mt_co2e: f64,
    pub fuel_cost_musd: f64,
    pub owned_ships: BTreeMap<ShipCategory, u32>,
}

impl RouteEntry {
    fn from_input(input: &RouteInput) -> Self {
        Self {
            charter_count: input.charter_count,
            tco_musd: input.tco_musd,
            ghg_mt_co2e: input.ghg_mt_co2e,
            fuel_cost_musd: input.fuel_cost_musd,
            owned_ships: input.owned_ships().iter().collect(),
        }
    }

    fn to_input(&self, route: Route, year: ScenarioYear) -> Result<RouteInput, FleetInputError> {
        let mut owned = OwnedShips::empty(year);
        for (&category, &count) in &self.owned_ships {
            owned.set(category, count)?;
        }
        Ok(RouteInput::from_parts(
            self.charter_count,
            checked_amount(route, "tco_musd", self.tco_musd)?,
            checked_amount(route, "ghg_mt_co2e", self.ghg_mt_co2e)?,
            checked_amount(route, "fuel_cost_musd", self.fuel_cost_musd)?,
            owned,
        ))
    }
}

fn checked_amount(route: Route, field: &'static str, value: f64) -> Result<f64, FleetInputError> {
    if !value.is_finite() {
        return Err(FleetInputError::NonFiniteValue { route, field });
    }
    if value < 0.0 {
        return Err(FleetInputError::NegativeValue { route, field, value });
    }
    Ok(value)
}
