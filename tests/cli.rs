//! 명령 줄 패널 루프 시나리오 테스트.
use aircon_panel::app::{self, Outcome};
use aircon_panel::config::{self, PanelSettings};
use aircon_panel::engine::ControlEngine;
use aircon_panel::i18n::Translator;
use aircon_panel::ui_cli::Command;
use aircon_panel::units::{PressureUnit, TemperatureUnit};
use aircon_panel::validation::validate;

#[test]
fn scripted_session_persists_units() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    let tr = Translator::new("en");
    let mut engine = ControlEngine::new(validate(21, 100_000, 30));

    let mut input = "tunit 2\npunit 1\nup\nbogus\npower\nquit\n".as_bytes();
    let mut output = Vec::new();
    app::run(
        &mut engine,
        &PanelSettings::default(),
        &path,
        &tr,
        &mut input,
        &mut output,
    )
    .unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Temperature: 69.8°F"), "{text}");
    assert!(text.contains("750.062 mmHg"), "{text}");
    assert!(text.contains("Airflow direction: (0, 10)"), "{text}");
    assert!(text.contains("Unknown command"), "{text}");
    assert!(text.contains("Power: on"), "{text}");
    assert!(text.contains("Settings saved."), "{text}");

    let loaded = config::load(&path).unwrap();
    assert_eq!(loaded.temperature_unit(), Some(TemperatureUnit::Fahrenheit));
    assert_eq!(loaded.pressure_unit(), Some(PressureUnit::MmHg));
}

#[test]
fn end_of_input_also_saves() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    let tr = Translator::new("en");
    let mut engine = ControlEngine::new(validate(21, 0, 0));
    let mut input = "tunit 1\n".as_bytes();
    let mut output = Vec::new();
    app::run(
        &mut engine,
        &PanelSettings::default(),
        &path,
        &tr,
        &mut input,
        &mut output,
    )
    .unwrap();
    assert_eq!(
        config::load(&path).unwrap().temperature_unit(),
        Some(TemperatureUnit::Kelvin)
    );
}

#[test]
fn blocked_move_is_reported() {
    let mut engine = ControlEngine::new(validate(21, 0, 0));
    for _ in 0..15 {
        assert_eq!(app::apply(&mut engine, Command::Move(aircon_panel::airflow::Direction::Down)), Outcome::Continue);
    }
    assert_eq!(
        app::apply(&mut engine, Command::Move(aircon_panel::airflow::Direction::Down)),
        Outcome::Blocked
    );
    assert_eq!(app::apply(&mut engine, Command::TemperatureUnit(5)), Outcome::Help);
    assert_eq!(app::apply(&mut engine, Command::Quit), Outcome::Quit);
}
