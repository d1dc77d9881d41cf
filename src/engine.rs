//! 에어컨 패널의 상태 엔진.
//!
//! GUI 프레임워크와 분리된 순수 상태만 다룬다. 화면 갱신은 구독자(observer)가
//! 이벤트를 받아 처리한다.

use crate::airflow::{AirflowPoint, Direction};
use crate::display;
use crate::i18n::{keys, Translator};
use crate::theme::{Rgb, Theme};
use crate::units::{convert_pressure, convert_temperature, PressureUnit, TemperatureUnit};
use crate::validation::{clamp, InitialReadings, TEMPERATURE_MAX_C, TEMPERATURE_MIN_C};

/// 엔진이 보유하는 기후 설정.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimateSettings {
    pub temperature: i32,
    pub pressure: i32,
    pub humidity: i32,
    pub temperature_unit: TemperatureUnit,
    pub pressure_unit: PressureUnit,
    pub powered: bool,
    pub theme: Theme,
}

impl From<InitialReadings> for ClimateSettings {
    fn from(seed: InitialReadings) -> Self {
        Self {
            temperature: seed.temperature,
            pressure: seed.pressure,
            humidity: seed.humidity,
            temperature_unit: TemperatureUnit::default(),
            pressure_unit: PressureUnit::default(),
            powered: false,
            theme: Theme::default(),
        }
    }
}

/// 상태가 바뀐 직후 구독자에게 전달되는 이벤트.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineEvent {
    TemperatureChanged { celsius: i32, fill_ratio: f64 },
    TemperatureUnitChanged(TemperatureUnit),
    PressureUnitChanged(PressureUnit),
    PowerToggled(bool),
    ThemeChanged(Theme),
    AirflowMoved(AirflowPoint),
}

/// 엔진 상태 변화를 받는 구독자. 클로저도 그대로 등록할 수 있다.
pub trait EngineObserver {
    fn on_event(&mut self, event: &EngineEvent);
}

impl<F: FnMut(&EngineEvent)> EngineObserver for F {
    fn on_event(&mut self, event: &EngineEvent) {
        self(event)
    }
}

/// 이벤트를 debug 레벨 로그로 남기는 구독자.
#[derive(Debug, Default)]
pub struct LogObserver;

impl EngineObserver for LogObserver {
    fn on_event(&mut self, event: &EngineEvent) {
        tracing::debug!(?event, "engine state changed");
    }
}

/// 한 번의 다시 그리기에 필요한 값 묶음.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSnapshot {
    pub temperature_c: i32,
    pub temperature_display: f64,
    pub temperature_text: String,
    pub temperature_fill: f64,
    pub pressure_pa: i32,
    pub pressure_display: f64,
    pub pressure_text: String,
    pub humidity: i32,
    pub humidity_text: String,
    pub humidity_fill: f64,
    pub temperature_unit: TemperatureUnit,
    pub pressure_unit: PressureUnit,
    pub powered: bool,
    pub power_label: String,
    pub theme: Theme,
    pub theme_label: String,
    pub stroke: Rgb,
    pub airflow: AirflowPoint,
}

pub struct ControlEngine {
    settings: ClimateSettings,
    airflow: AirflowPoint,
    observers: Vec<Box<dyn EngineObserver>>,
}

impl std::fmt::Debug for ControlEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControlEngine")
            .field("settings", &self.settings)
            .field("airflow", &self.airflow)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// 온도 막대의 채움 비율. 슬라이더 범위 기준으로 [0, 1]로 자른다.
pub fn temperature_fill_ratio(celsius: i32) -> f64 {
    let span = f64::from(TEMPERATURE_MAX_C - TEMPERATURE_MIN_C);
    (f64::from(celsius - TEMPERATURE_MIN_C) / span).clamp(0.0, 1.0)
}

pub fn humidity_fill_ratio(humidity: i32) -> f64 {
    (f64::from(humidity) / 100.0).clamp(0.0, 1.0)
}

impl ControlEngine {
    pub fn new(seed: InitialReadings) -> Self {
        Self {
            settings: ClimateSettings::from(seed),
            airflow: AirflowPoint::default(),
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: impl EngineObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn emit(&mut self, event: EngineEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }

    pub fn settings(&self) -> &ClimateSettings {
        &self.settings
    }

    pub fn airflow(&self) -> AirflowPoint {
        self.airflow
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme
    }

    pub fn powered(&self) -> bool {
        self.settings.powered
    }

    pub fn temperature_unit(&self) -> TemperatureUnit {
        self.settings.temperature_unit
    }

    pub fn pressure_unit(&self) -> PressureUnit {
        self.settings.pressure_unit
    }

    /// 슬라이더 값 변경. 범위를 벗어나면 [16, 30]으로 자른다.
    pub fn set_temperature(&mut self, celsius: i32) {
        let celsius = clamp(celsius, TEMPERATURE_MIN_C, TEMPERATURE_MAX_C);
        self.settings.temperature = celsius;
        self.emit(EngineEvent::TemperatureChanged {
            celsius,
            fill_ratio: temperature_fill_ratio(celsius),
        });
    }

    pub fn set_temperature_unit(&mut self, unit: TemperatureUnit) {
        self.settings.temperature_unit = unit;
        self.emit(EngineEvent::TemperatureUnitChanged(unit));
    }

    pub fn set_pressure_unit(&mut self, unit: PressureUnit) {
        self.settings.pressure_unit = unit;
        self.emit(EngineEvent::PressureUnitChanged(unit));
    }

    /// 콤보박스 인덱스로 온도 단위를 바꾼다. 없는 인덱스면 무시하고 false.
    pub fn set_temperature_unit_index(&mut self, index: usize) -> bool {
        match TemperatureUnit::from_index(index) {
            Some(unit) => {
                self.set_temperature_unit(unit);
                true
            }
            None => false,
        }
    }

    pub fn set_pressure_unit_index(&mut self, index: usize) -> bool {
        match PressureUnit::from_index(index) {
            Some(unit) => {
                self.set_pressure_unit(unit);
                true
            }
            None => false,
        }
    }

    pub fn toggle_power(&mut self) -> bool {
        self.settings.powered = !self.settings.powered;
        let powered = self.settings.powered;
        self.emit(EngineEvent::PowerToggled(powered));
        powered
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.settings.theme = self.settings.theme.toggled();
        let theme = self.settings.theme;
        self.emit(EngineEvent::ThemeChanged(theme));
        theme
    }

    /// 송풍 점을 한 칸 옮긴다. 경계에 막히면 이벤트 없이 false.
    pub fn move_airflow(&mut self, direction: Direction) -> bool {
        if !self.airflow.step(direction) {
            return false;
        }
        let point = self.airflow;
        self.emit(EngineEvent::AirflowMoved(point));
        true
    }

    pub fn temperature_display(&self) -> f64 {
        convert_temperature(
            f64::from(self.settings.temperature),
            self.settings.temperature_unit,
        )
    }

    pub fn pressure_display(&self) -> f64 {
        convert_pressure(f64::from(self.settings.pressure), self.settings.pressure_unit)
    }

    /// 전원 버튼 문구. 현재 상태가 아니라 누르면 일어날 동작을 표시한다.
    pub fn power_label(&self, tr: &Translator) -> String {
        if self.settings.powered {
            tr.t(keys::POWER_TURN_OFF)
        } else {
            tr.t(keys::POWER_TURN_ON)
        }
    }

    /// 테마 버튼 문구. 누르면 전환될 테마 이름이다.
    pub fn theme_label(&self, tr: &Translator) -> String {
        match self.settings.theme {
            Theme::Light => tr.t(keys::THEME_DARK),
            Theme::Dark => tr.t(keys::THEME_LIGHT),
        }
    }

    pub fn snapshot(&self, tr: &Translator) -> PanelSnapshot {
        let s = &self.settings;
        let temperature_display = self.temperature_display();
        let pressure_display = self.pressure_display();
        PanelSnapshot {
            temperature_c: s.temperature,
            temperature_display,
            temperature_text: display::temperature_text(tr, temperature_display, s.temperature_unit),
            temperature_fill: temperature_fill_ratio(s.temperature),
            pressure_pa: s.pressure,
            pressure_display,
            pressure_text: display::pressure_text(tr, pressure_display, s.pressure_unit),
            humidity: s.humidity,
            humidity_text: display::humidity_text(tr, s.humidity),
            humidity_fill: humidity_fill_ratio(s.humidity),
            temperature_unit: s.temperature_unit,
            pressure_unit: s.pressure_unit,
            powered: s.powered,
            power_label: self.power_label(tr),
            theme: s.theme,
            theme_label: self.theme_label(tr),
            stroke: s.theme.stroke_color(),
            airflow: self.airflow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn observers_see_events_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut engine = ControlEngine::new(validate(20, 101325, 40));
        engine.subscribe(move |e: &EngineEvent| sink.borrow_mut().push(*e));

        engine.toggle_power();
        engine.set_temperature(30);
        assert!(!engine.set_pressure_unit_index(5));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], EngineEvent::PowerToggled(true));
        assert_eq!(
            seen[1],
            EngineEvent::TemperatureChanged {
                celsius: 30,
                fill_ratio: 1.0
            }
        );
    }

    #[test]
    fn fill_ratio_is_bounded() {
        assert_eq!(temperature_fill_ratio(16), 0.0);
        assert_eq!(temperature_fill_ratio(23), 0.5);
        assert_eq!(temperature_fill_ratio(-100), 0.0);
        assert_eq!(temperature_fill_ratio(100), 1.0);
    }
}
