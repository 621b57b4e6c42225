//! 연도별 정적 참조 테이블 모음.
//! 용선비 계수, 항로 기본 입력, 항로 수익, 2024 기준 스냅샷, CII/GFI 규제 곡선으로 구성한다.

pub mod charter_factors;
pub mod cii;
pub mod defaults;
pub mod gfi;
pub mod revenue;

pub use charter_factors::{charter_factors, CharterFactorPair, CharterFactorTable};
pub use revenue::{benchmark_2024, BenchmarkSnapshot, RevenueTable};
