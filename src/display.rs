//! 화면 표시용 숫자/문자열 포맷.

use crate::i18n::{keys, Translator};
use crate::units::{PressureUnit, TemperatureUnit};

/// 소수점 이하 최대 3자리까지 표시하고 뒤쪽 0은 잘라낸다.
pub fn format_number(value: f64) -> String {
    let s = format!("{value:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

pub fn temperature_text(tr: &Translator, value: f64, unit: TemperatureUnit) -> String {
    let value = format!("{}{}", format_number(value), unit.suffix());
    tr.tf(keys::DISPLAY_TEMPERATURE, &[("value", value)])
}

pub fn pressure_unit_label(tr: &Translator, unit: PressureUnit) -> String {
    match unit {
        PressureUnit::Pascal => tr.t(keys::UNIT_PASCAL),
        PressureUnit::MmHg => tr.t(keys::UNIT_MMHG),
    }
}

pub fn pressure_text(tr: &Translator, value: f64, unit: PressureUnit) -> String {
    format!("{} {}", format_number(value), pressure_unit_label(tr, unit))
}

pub fn humidity_text(tr: &Translator, humidity: i32) -> String {
    tr.tf(keys::DISPLAY_HUMIDITY, &[("value", humidity.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_zeros() {
        assert_eq!(format_number(20.0), "20");
        assert_eq!(format_number(293.15), "293.15");
        assert_eq!(format_number(68.0), "68");
        assert_eq!(format_number(60.8), "60.8");
        assert_eq!(format_number(750.062), "750.062");
        assert_eq!(format_number(-0.0001), "0");
    }

    #[test]
    fn texts_follow_source_layout() {
        let tr = Translator::new("ru");
        assert_eq!(
            temperature_text(&tr, 293.15, TemperatureUnit::Kelvin),
            "Температура: 293.15 K"
        );
        assert_eq!(
            temperature_text(&tr, 20.0, TemperatureUnit::Celsius),
            "Температура: 20°C"
        );
        assert_eq!(pressure_text(&tr, 100000.0, PressureUnit::Pascal), "100000 Па");
        assert_eq!(humidity_text(&tr, 45), "Влажность: 45%");
    }
}
