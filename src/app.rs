use std::io::{BufRead, Write};
use std::path::Path;
use thiserror::Error;

use crate::config::{PanelSettings, SettingsError};
use crate::engine::ControlEngine;
use crate::i18n::{keys, Translator};
use crate::ui_cli::{self, Command};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Settings(#[from] SettingsError),
}

/// 명령 하나를 처리한 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// 송풍 점이 경계에 막혀 움직이지 않았다.
    Blocked,
    Help,
    Quit,
}

/// 명령을 엔진에 적용한다.
pub fn apply(engine: &mut ControlEngine, command: Command) -> Outcome {
    match command {
        Command::Move(direction) => {
            if engine.move_airflow(direction) {
                Outcome::Continue
            } else {
                Outcome::Blocked
            }
        }
        Command::Power => {
            engine.toggle_power();
            Outcome::Continue
        }
        Command::Theme => {
            engine.toggle_theme();
            Outcome::Continue
        }
        Command::Temperature(v) => {
            engine.set_temperature(v);
            Outcome::Continue
        }
        Command::TemperatureUnit(i) => {
            if !engine.set_temperature_unit_index(i) {
                return Outcome::Help;
            }
            Outcome::Continue
        }
        Command::PressureUnit(i) => {
            if !engine.set_pressure_unit_index(i) {
                return Outcome::Help;
            }
            Outcome::Continue
        }
        Command::Show => Outcome::Continue,
        Command::Help => Outcome::Help,
        Command::Quit => Outcome::Quit,
    }
}

/// 단위 선택을 저장한다. 실패해도 종료 흐름을 막지 않고 경고만 남긴다.
pub fn persist(settings: &PanelSettings, engine: &ControlEngine, path: &Path) -> bool {
    match settings.capture(engine).save(path) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "settings not saved");
            false
        }
    }
}

/// CLI 패널의 메인 루프를 실행한다. quit 또는 입력 종료 시 설정을 저장한다.
pub fn run<R: BufRead, W: Write>(
    engine: &mut ControlEngine,
    settings: &PanelSettings,
    settings_file: &Path,
    tr: &Translator,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    ui_cli::render(output, &engine.snapshot(tr), tr)?;
    writeln!(output, "{}", tr.t(keys::CLI_HELP))?;
    loop {
        let Some(line) = ui_cli::read_line(input, output, &tr.t(keys::CLI_PROMPT))? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        let Some(command) = ui_cli::parse_command(&line) else {
            writeln!(output, "{}", tr.t(keys::CLI_UNKNOWN))?;
            continue;
        };
        match apply(engine, command) {
            Outcome::Continue => ui_cli::render(output, &engine.snapshot(tr), tr)?,
            Outcome::Blocked => writeln!(output, "{}", tr.t(keys::CLI_AIRFLOW_BLOCKED))?,
            Outcome::Help => {
                writeln!(output, "{}", tr.t(keys::CLI_HELP))?;
                writeln!(output, "{}", tr.t(keys::CLI_UNIT_OPTIONS))?;
            }
            Outcome::Quit => break,
        }
    }
    if persist(settings, engine, settings_file) {
        writeln!(output, "{}", tr.t(keys::CLI_SETTINGS_SAVED))?;
    }
    writeln!(output, "{}", tr.t(keys::CLI_EXIT))?;
    Ok(())
}
