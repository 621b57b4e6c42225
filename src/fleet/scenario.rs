use serde::{Deserialize, Serialize};

use super::FleetInputError;

/// 분석 대상 시나리오 연도.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u16", into = "u16")]
pub enum ScenarioYear {
    Y2030,
    Y2040,
    Y2050,
}

impl ScenarioYear {
    pub const ALL: [ScenarioYear; 3] = [ScenarioYear::Y2030, ScenarioYear::Y2040, ScenarioYear::Y2050];

    pub fn as_u16(self) -> u16 {
        match self {
            ScenarioYear::Y2030 => 2030,
            ScenarioYear::Y2040 => 2040,
            ScenarioYear::Y2050 => 2050,
        }
    }

    /// 해당 연도에 유효한 자사선 연료 구분 목록(표시 순서).
    pub fn ship_categories(self) -> &'static [ShipCategory] {
        use ShipCategory::*;
        match self {
            ScenarioYear::Y2030 => &[Diesel, B30, Methanol, Ammonia, B30Eet],
            ScenarioYear::Y2040 => &[
                Diesel, B50, Methanol, Ammonia, BlueH2, Methane, VlsfoOccs, B50Eet,
            ],
            ScenarioYear::Y2050 => &[
                Diesel, B100, Methanol, Ammonia, EH2, EMethane, EDiesel, B100Eet, BioMethane,
            ],
        }
    }

    pub fn allows(self, category: ShipCategory) -> bool {
        self.ship_categories().contains(&category)
    }
}

impl TryFrom<u16> for ScenarioYear {
    type Error = FleetInputError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            2030 => Ok(ScenarioYear::Y2030),
            2040 => Ok(ScenarioYear::Y2040),
            2050 => Ok(ScenarioYear::Y2050),
            other => Err(FleetInputError::UnknownYear(other)),
        }
    }
}

impl From<ScenarioYear> for u16 {
    fn from(value: ScenarioYear) -> Self {
        value.as_u16()
    }
}

impl std::str::FromStr for ScenarioYear {
    type Err = FleetInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let year: u16 = s
            .trim()
            .parse()
            .map_err(|_| FleetInputError::UnparsableYear(s.trim().to_string()))?;
        ScenarioYear::try_from(year)
    }
}

impl std::fmt::Display for ScenarioYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

/// 자사선 추진 연료 구분. 연도별로 유효한 집합이 다르다.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ShipCategory {
    Diesel,
    B30,
    B50,
    B100,
    Methanol,
    Ammonia,
    B30Eet,
    B50Eet,
    B100Eet,
    BlueH2,
    Methane,
    VlsfoOccs,
    #[serde(rename = "e_h2")]
    EH2,
    #[serde(rename = "e_methane")]
    EMethane,
    #[serde(rename = "e_diesel")]
    EDiesel,
    BioMethane,
}

impl ShipCategory {
    pub fn label(self) -> &'static str {
        match self {
            ShipCategory::Diesel => "Diesel Ships",
            ShipCategory::B30 => "B30 Ships",
            ShipCategory::B50 => "B50 Ships",
            ShipCategory::B100 => "B100 Ships",
            ShipCategory::Methanol => "Methanol Ships",
            ShipCategory::Ammonia => "Ammonia Ships",
            ShipCategory::B30Eet => "B30 EET Ships",
            ShipCategory::B50Eet => "B50 EET Ships",
            ShipCategory::B100Eet => "B100 EET Ships",
            ShipCategory::BlueH2 => "BlueH2 Ships",
            ShipCategory::Methane => "Methane Ships",
            ShipCategory::VlsfoOccs => "VLSFO OCCS Ships",
            ShipCategory::EH2 => "eH2 Ships",
            ShipCategory::EMethane => "eMethane Ships",
            ShipCategory::EDiesel => "eDiesel Ships",
            ShipCategory::BioMethane => "Bio Methane Ships",
        }
    }
}

impl std::fmt::Display for ShipCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
