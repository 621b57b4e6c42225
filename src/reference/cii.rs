//! 탱커 CII(Carbon Intensity Indicator) 등급 경계 곡선.
//! 기준선 CII_ref = a · DWT^(-c) (a=5247, c=0.610), 연도별 감축계수 Z를 적용하고
//! dd 벡터로 A~E 경계를 만든다. 화면 비교용 참고 곡선이며 선대 배출량으로 계산하지 않는다.

use crate::fleet::VesselClass;

const TANKER_A: f64 = 5247.0;
const TANKER_C: f64 = 0.610;

/// 탱커 dd 벡터 (d1..d4)
const TANKER_DD: [f64; 4] = [0.82, 0.93, 1.08, 1.28];

/// (연도, 감축계수 Z[%]). 범위 밖 연도는 가장자리 값으로 클램프한다.
static REDUCTION_FACTORS: &[(u16, f64)] = &[
    (2019, 0.0),
    (2020, 1.0),
    (2021, 2.0),
    (2022, 3.0),
    (2023, 5.0),
    (2024, 7.0),
    (2025, 9.0),
    (2026, 11.0),
    (2027, 13.625),
    (2028, 16.25),
    (2029, 18.875),
    (2030, 21.5),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CiiRating {
    A,
    B,
    C,
    D,
    E,
}

impl std::fmt::Display for CiiRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CiiRating::A => "A",
            CiiRating::B => "B",
            CiiRating::C => "C",
            CiiRating::D => "D",
            CiiRating::E => "E",
        };
        f.write_str(s)
    }
}

/// 한 연도·선종의 등급 경계 [gCO2/(dwt·nm)].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CiiBands {
    pub year: u16,
    pub required: f64,
    /// A/B 경계 (상한)
    pub upper_a: f64,
    pub upper_b: f64,
    pub upper_c: f64,
    pub upper_d: f64,
    /// true면 감축계수 테이블 범위 밖이라 가장자리 값을 사용함
    pub clamped: bool,
}

impl CiiBands {
    pub fn rate(&self, attained: f64) -> CiiRating {
        if attained <= self.upper_a {
            CiiRating::A
        } else if attained <= self.upper_b {
            CiiRating::B
        } else if attained <= self.upper_c {
            CiiRating::C
        } else if attained <= self.upper_d {
            CiiRating::D
        } else {
            CiiRating::E
        }
    }
}

/// 감축계수 Z[%]와 클램프 여부
fn reduction_factor(year: u16) -> (f64, bool) {
    let first = REDUCTION_FACTORS[0];
    let last = REDUCTION_FACTORS[REDUCTION_FACTORS.len() - 1];
    if year < first.0 {
        return (first.1, true);
    }
    if year > last.0 {
        return (last.1, true);
    }
    let z = REDUCTION_FACTORS
        .iter()
        .find(|(y, _)| *y == year)
        .map(|(_, z)| *z)
        .unwrap_or(last.1);
    (z, false)
}

/// 기준선 CII (감축 전)
pub fn reference_cii(class: VesselClass) -> f64 {
    TANKER_A * class.reference_dwt().powf(-TANKER_C)
}

pub fn rating_bands(class: VesselClass, year: u16) -> CiiBands {
    let (z, clamped) = reduction_factor(year);
    let required = reference_cii(class) * (1.0 - z / 100.0);
    CiiBands {
        year,
        required,
        upper_a: required * TANKER_DD[0],
        upper_b: required * TANKER_DD[1],
        upper_c: required * TANKER_DD[2],
        upper_d: required * TANKER_DD[3],
        clamped,
    }
}

/// 감축계수 테이블의 모든 연도에 대한 경계 곡선
pub fn rating_band_curve(class: VesselClass) -> Vec<CiiBands> {
    REDUCTION_FACTORS
        .iter()
        .map(|(year, _)| rating_bands(class, *year))
        .collect()
}
