//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 외의 화면 계층에서도 그대로 쓸 수 있게 한다.

pub mod analysis;
pub mod app;
pub mod config;
pub mod fleet;
pub mod logging;
pub mod reference;
pub mod ui_cli;
