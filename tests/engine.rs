use std::cell::RefCell;
use std::rc::Rc;

use aircon_panel::airflow::{AirflowPoint, Direction};
use aircon_panel::engine::{ControlEngine, EngineEvent};
use aircon_panel::i18n::Translator;
use aircon_panel::theme::{Rgb, Theme};
use aircon_panel::units::{PressureUnit, TemperatureUnit};
use aircon_panel::validation::validate;

fn engine() -> ControlEngine {
    ControlEngine::new(validate(20, 100_000, 45))
}

fn record(engine: &mut ControlEngine) -> Rc<RefCell<Vec<EngineEvent>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    engine.subscribe(move |e: &EngineEvent| sink.borrow_mut().push(*e));
    seen
}

fn walk_to(engine: &mut ControlEngine, target: AirflowPoint) {
    while engine.airflow().x < target.x {
        assert!(engine.move_airflow(Direction::Right));
    }
    while engine.airflow().y < target.y {
        assert!(engine.move_airflow(Direction::Up));
    }
}

#[test]
fn airflow_corner_is_sticky() {
    let mut e = engine();
    walk_to(&mut e, AirflowPoint::new(150, 150));
    let events = record(&mut e);
    assert!(!e.move_airflow(Direction::Right));
    assert!(!e.move_airflow(Direction::Up));
    assert_eq!(e.airflow(), AirflowPoint::new(150, 150));
    assert!(events.borrow().is_empty());
}

#[test]
fn airflow_moves_back_from_the_edge() {
    let mut e = engine();
    walk_to(&mut e, AirflowPoint::new(150, 150));
    assert!(e.move_airflow(Direction::Left));
    assert!(e.move_airflow(Direction::Down));
    assert_eq!(e.airflow(), AirflowPoint::new(140, 140));
}

#[test]
fn power_toggle_is_an_involution() {
    let mut e = engine();
    let tr = Translator::new("ru");
    assert!(!e.powered());
    assert_eq!(e.power_label(&tr), "Включить");
    assert!(e.toggle_power());
    assert_eq!(e.power_label(&tr), "Выключить");
    assert!(!e.toggle_power());
    assert_eq!(e.power_label(&tr), "Включить");
}

#[test]
fn theme_starts_light_and_offers_dark() {
    let mut e = engine();
    let tr = Translator::new("ru");
    let events = record(&mut e);
    assert_eq!(e.theme(), Theme::Light);
    assert_eq!(e.theme_label(&tr), "Темная тема");

    assert_eq!(e.toggle_theme(), Theme::Dark);
    assert_eq!(e.theme_label(&tr), "Светлая тема");
    assert_eq!(e.snapshot(&tr).stroke, Rgb::WHITE);

    assert_eq!(e.toggle_theme(), Theme::Light);
    assert_eq!(e.snapshot(&tr).stroke, Rgb::BLACK);
    assert_eq!(
        *events.borrow(),
        vec![
            EngineEvent::ThemeChanged(Theme::Dark),
            EngineEvent::ThemeChanged(Theme::Light)
        ]
    );
}

#[test]
fn unit_switch_recomputes_display_from_stored_value() {
    let mut e = engine();
    let tr = Translator::new("en");
    assert_eq!(e.snapshot(&tr).temperature_text, "Temperature: 20°C");

    e.set_temperature_unit(TemperatureUnit::Fahrenheit);
    assert_eq!(e.snapshot(&tr).temperature_text, "Temperature: 68°F");

    e.set_temperature_unit(TemperatureUnit::Kelvin);
    assert_eq!(e.snapshot(&tr).temperature_text, "Temperature: 293.15 K");
    assert_eq!(e.settings().temperature, 20);

    e.set_pressure_unit(PressureUnit::MmHg);
    let snap = e.snapshot(&tr);
    assert_eq!(snap.pressure_text, "750.062 mmHg");
    assert_eq!(snap.pressure_pa, 100_000);
}

#[test]
fn slider_updates_fill_ratio() {
    let mut e = engine();
    let tr = Translator::new("en");
    e.set_temperature(16);
    assert_eq!(e.snapshot(&tr).temperature_fill, 0.0);
    e.set_temperature(30);
    assert_eq!(e.snapshot(&tr).temperature_fill, 1.0);
    e.set_temperature(45);
    assert_eq!(e.settings().temperature, 30);
}

#[test]
fn humidity_is_fixed_after_creation() {
    let mut e = engine();
    let tr = Translator::new("en");
    e.set_temperature(25);
    e.toggle_power();
    e.move_airflow(Direction::Up);
    let snap = e.snapshot(&tr);
    assert_eq!(snap.humidity, 45);
    assert!((snap.humidity_fill - 0.45).abs() < 1e-12);
    assert_eq!(snap.humidity_text, "Humidity: 45%");
}

#[test]
fn bad_combo_index_is_ignored() {
    let mut e = engine();
    let events = record(&mut e);
    assert!(!e.set_temperature_unit_index(7));
    assert_eq!(e.temperature_unit(), TemperatureUnit::Celsius);
    assert!(e.set_temperature_unit_index(2));
    assert_eq!(e.temperature_unit(), TemperatureUnit::Fahrenheit);
    assert_eq!(
        *events.borrow(),
        vec![EngineEvent::TemperatureUnitChanged(TemperatureUnit::Fahrenheit)]
    );
}
