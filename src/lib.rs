//! 단위 변환 핵심 로직을 라이브러리로 분리하여 CLI 뿐 아니라 추후 GUI 확장도 쉽게 한다.

pub mod app;
pub mod category;
pub mod config;
pub mod conversion;
pub mod i18n;
pub mod ui_cli;
pub mod units;
