//! 에어컨 제어 패널 시뮬레이터의 핵심 로직.
//! 입력 보정과 상태 엔진을 라이브러리로 분리하여 GUI와 CLI가 함께 쓴다.

pub mod airflow;
pub mod app;
pub mod config;
pub mod display;
pub mod engine;
pub mod i18n;
pub mod logging;
pub mod theme;
pub mod ui_cli;
pub mod units;
pub mod validation;
