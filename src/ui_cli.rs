use std::io::{BufRead, Write};

use crate::airflow::Direction;
use crate::app::AppError;
use crate::engine::PanelSnapshot;
use crate::i18n::{keys, Translator};
use crate::theme::Theme;
use crate::validation::RawReadings;

/// 명령 줄에서 입력받는 패널 조작.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Power,
    Theme,
    Temperature(i32),
    TemperatureUnit(usize),
    PressureUnit(usize),
    Show,
    Help,
    Quit,
}

/// 한 줄을 명령으로 해석한다. 모르는 입력이면 None.
pub fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let head = parts.next()?.to_lowercase();
    let arg = parts.next();
    if parts.next().is_some() {
        return None;
    }
    let cmd = match (head.as_str(), arg) {
        ("up" | "u", None) => Command::Move(Direction::Up),
        ("down" | "d", None) => Command::Move(Direction::Down),
        ("left" | "l", None) => Command::Move(Direction::Left),
        ("right" | "r", None) => Command::Move(Direction::Right),
        ("power" | "p", None) => Command::Power,
        ("theme", None) => Command::Theme,
        ("temp" | "t", Some(v)) => Command::Temperature(v.parse().ok()?),
        ("tunit", Some(v)) => Command::TemperatureUnit(v.parse().ok()?),
        ("punit", Some(v)) => Command::PressureUnit(v.parse().ok()?),
        ("show" | "s", None) => Command::Show,
        ("help" | "h" | "?", None) => Command::Help,
        ("quit" | "q" | "exit", None) => Command::Quit,
        _ => return None,
    };
    Some(cmd)
}

/// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝났으면(EOF) None.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>, AppError> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
}

/// 시작 폼에 해당하는 세 값을 차례로 묻는다. 중간에 EOF면 취소로 본다.
pub fn prompt_readings<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    tr: &Translator,
) -> Result<Option<RawReadings>, AppError> {
    writeln!(output, "{}", tr.t(keys::FORM_TITLE))?;
    let mut fields = Vec::with_capacity(3);
    for key in [keys::FORM_TEMPERATURE, keys::FORM_PRESSURE, keys::FORM_HUMIDITY] {
        match read_line(input, output, &format!("{} ", tr.t(key)))? {
            Some(v) => fields.push(v),
            None => return Ok(None),
        }
    }
    let mut fields = fields.into_iter();
    Ok(Some(RawReadings {
        temperature: fields.next().unwrap_or_default(),
        pressure: fields.next().unwrap_or_default(),
        humidity: fields.next().unwrap_or_default(),
    }))
}

/// 패널 스냅샷을 텍스트로 출력한다.
pub fn render<W: Write>(output: &mut W, snap: &PanelSnapshot, tr: &Translator) -> Result<(), AppError> {
    writeln!(output, "== {} ==", tr.t(keys::PANEL_TITLE))?;
    writeln!(output, "{} {}", tr.t(keys::PANEL_PRESSURE), snap.pressure_text)?;
    writeln!(output, "{}", snap.temperature_text)?;
    writeln!(output, "  {}", bar(snap.temperature_fill))?;
    writeln!(output, "{}", snap.humidity_text)?;
    writeln!(output, "  {}", bar(snap.humidity_fill))?;
    writeln!(
        output,
        "{}",
        tr.tf(
            keys::CLI_AIRFLOW,
            &[("x", snap.airflow.x.to_string()), ("y", snap.airflow.y.to_string())],
        )
    )?;
    let power = if snap.powered {
        keys::CLI_POWER_STATE_ON
    } else {
        keys::CLI_POWER_STATE_OFF
    };
    let theme = match snap.theme {
        Theme::Light => keys::CLI_THEME_STATE_LIGHT,
        Theme::Dark => keys::CLI_THEME_STATE_DARK,
    };
    writeln!(output, "{} | {}", tr.t(power), tr.t(theme))?;
    writeln!(output, "[{}] [{}]", snap.power_label, snap.theme_label)?;
    Ok(())
}

/// 채움 비율을 20칸짜리 막대로 그린다.
fn bar(ratio: f64) -> String {
    const WIDTH: usize = 20;
    let filled = (ratio.clamp(0.0, 1.0) * WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(WIDTH - filled))
}
