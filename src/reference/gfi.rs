//! GFI(GHG Fuel Intensity) 준수 구간 곡선.
//! 기준값 93.3 gCO2e/MJ 대비 연도별 Base/Direct Compliance 감축률을 선형 보간한다.
//! 2036년 이후 값은 장기 전략 체크포인트를 근사한 참고치다.

pub const GFI_BASELINE_G_PER_MJ: f64 = 93.3;

#[derive(Debug, Clone, Copy)]
struct GfiAnchor {
    year: u16,
    base_reduction_pct: f64,
    direct_reduction_pct: f64,
}

const fn anchor(year: u16, base_reduction_pct: f64, direct_reduction_pct: f64) -> GfiAnchor {
    GfiAnchor {
        year,
        base_reduction_pct,
        direct_reduction_pct,
    }
}

static ANCHORS: &[GfiAnchor] = &[
    anchor(2028, 4.0, 17.0),
    anchor(2029, 6.0, 19.0),
    anchor(2030, 8.0, 21.0),
    anchor(2031, 12.4, 25.4),
    anchor(2032, 16.8, 29.8),
    anchor(2033, 21.2, 34.2),
    anchor(2034, 25.6, 38.6),
    anchor(2035, 30.0, 43.0),
    anchor(2040, 65.0, 80.0),
    anchor(2050, 100.0, 100.0),
];

/// 한 연도의 GFI 목표치 [gCO2e/MJ].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GfiTargets {
    pub year: u16,
    /// 이 값을 넘으면 Tier 2
    pub base_target: f64,
    /// 이 값 이하이면 Surplus
    pub direct_target: f64,
    /// true면 테이블 범위 밖이라 가장자리 값으로 클램프됨
    pub clamped: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplianceZone {
    /// Direct Compliance 목표 이하 (잉여 유닛 발생)
    Surplus,
    /// Direct 초과, Base 이하 (Tier 1 보정 유닛 필요)
    Tier1,
    /// Base 초과 (Tier 2 보정 유닛 필요)
    Tier2,
}

impl std::fmt::Display for ComplianceZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ComplianceZone::Surplus => "Surplus",
            ComplianceZone::Tier1 => "Tier 1",
            ComplianceZone::Tier2 => "Tier 2",
        };
        f.write_str(s)
    }
}

impl GfiTargets {
    pub fn zone(&self, attained: f64) -> ComplianceZone {
        if attained <= self.direct_target {
            ComplianceZone::Surplus
        } else if attained <= self.base_target {
            ComplianceZone::Tier1
        } else {
            ComplianceZone::Tier2
        }
    }
}

fn targets_from(year: u16, base_pct: f64, direct_pct: f64, clamped: bool) -> GfiTargets {
    GfiTargets {
        year,
        base_target: GFI_BASELINE_G_PER_MJ * (1.0 - base_pct / 100.0),
        direct_target: GFI_BASELINE_G_PER_MJ * (1.0 - direct_pct / 100.0),
        clamped,
    }
}

/// 연도의 GFI 목표치를 보간한다.
pub fn targets(year: u16) -> GfiTargets {
    let first = ANCHORS[0];
    let last = ANCHORS[ANCHORS.len() - 1];
    if year <= first.year {
        return targets_from(
            year,
            first.base_reduction_pct,
            first.direct_reduction_pct,
            year < first.year,
        );
    }
    if year >= last.year {
        return targets_from(
            year,
            last.base_reduction_pct,
            last.direct_reduction_pct,
            year > last.year,
        );
    }
    for w in ANCHORS.windows(2) {
        let (a, b) = (w[0], w[1]);
        if year >= a.year && year <= b.year {
            let t = f64::from(year - a.year) / f64::from(b.year - a.year);
            let base = a.base_reduction_pct + t * (b.base_reduction_pct - a.base_reduction_pct);
            let direct =
                a.direct_reduction_pct + t * (b.direct_reduction_pct - a.direct_reduction_pct);
            return targets_from(year, base, direct, false);
        }
    }
    targets_from(year, last.base_reduction_pct, last.direct_reduction_pct, true)
}

/// 구간 곡선 (first..=last 연도, 1년 간격)
pub fn compliance_curve(first_year: u16, last_year: u16) -> Vec<GfiTargets> {
    (first_year..=last_year).map(targets).collect()
}
