use serde::{Deserialize, Serialize};

/// 온도 표시 단위. 콤보박스 순서(0=°C, 1=K, 2=°F)와 동일하게 유지한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Kelvin,
    Fahrenheit,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Kelvin,
        TemperatureUnit::Fahrenheit,
    ];

    /// 콤보박스 인덱스로부터 단위를 찾는다. 범위를 벗어나면 None.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            TemperatureUnit::Celsius => 0,
            TemperatureUnit::Kelvin => 1,
            TemperatureUnit::Fahrenheit => 2,
        }
    }

    /// 값 뒤에 붙는 단위 접미사. 켈빈만 공백을 둔다.
    pub fn suffix(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Kelvin => " K",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    /// 콤보박스에 표시할 짧은 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

/// 섭씨 값을 요청된 표시 단위로 변환한다.
pub fn convert_temperature(value_c: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value_c,
        TemperatureUnit::Kelvin => value_c + 273.15,
        TemperatureUnit::Fahrenheit => value_c * 9.0 / 5.0 + 32.0,
    }
}
