use aircon_panel::units::{convert_pressure, convert_temperature, PressureUnit, TemperatureUnit};

#[test]
fn temperature_at_zero_celsius() {
    assert_eq!(convert_temperature(0.0, TemperatureUnit::Celsius), 0.0);
    assert!((convert_temperature(0.0, TemperatureUnit::Kelvin) - 273.15).abs() < 1e-9);
    assert!((convert_temperature(0.0, TemperatureUnit::Fahrenheit) - 32.0).abs() < 1e-9);
}

#[test]
fn temperature_in_slider_range() {
    assert!((convert_temperature(20.0, TemperatureUnit::Fahrenheit) - 68.0).abs() < 1e-9);
    assert!((convert_temperature(30.0, TemperatureUnit::Kelvin) - 303.15).abs() < 1e-9);
}

#[test]
fn pressure_to_mmhg() {
    assert_eq!(convert_pressure(100_000.0, PressureUnit::Pascal), 100_000.0);
    let mmhg = convert_pressure(100_000.0, PressureUnit::MmHg);
    assert!((mmhg - 750.062).abs() < 1e-6, "mmhg={mmhg}");
}

#[test]
fn unit_indices_follow_combo_order() {
    for (i, unit) in TemperatureUnit::ALL.iter().enumerate() {
        assert_eq!(unit.index(), i);
        assert_eq!(TemperatureUnit::from_index(i), Some(*unit));
    }
    assert_eq!(TemperatureUnit::from_index(3), None);
    assert_eq!(PressureUnit::from_index(1), Some(PressureUnit::MmHg));
    assert_eq!(PressureUnit::from_index(2), None);
}
