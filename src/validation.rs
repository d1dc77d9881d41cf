//! 시작 폼에서 받은 원시 입력을 유효 범위로 보정한다.
//!
//! 잘못된 입력에 대해 오류를 내지 않고 조용히 범위 안으로 잘라낸다.

pub const TEMPERATURE_MIN_C: i32 = 16;
pub const TEMPERATURE_MAX_C: i32 = 30;
pub const PRESSURE_MIN_PA: i32 = 0;
pub const HUMIDITY_MIN_PCT: i32 = 0;
pub const HUMIDITY_MAX_PCT: i32 = 100;

/// 시작 폼의 세 입력 필드 원문.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawReadings {
    pub temperature: String,
    pub pressure: String,
    pub humidity: String,
}

/// 보정이 끝난 초기값. 엔진 생성에 그대로 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitialReadings {
    pub temperature: i32,
    pub pressure: i32,
    pub humidity: i32,
}

/// `value`를 [lo, hi]로 자른다.
pub fn clamp(value: i32, lo: i32, hi: i32) -> i32 {
    value.max(lo).min(hi)
}

/// 정수로 해석하고, 실패하면 0을 돌려준다.
/// 앞뒤 공백과 부호(+/-)는 허용한다.
pub fn parse_or_zero(text: &str) -> i32 {
    text.trim().parse::<i32>().unwrap_or(0)
}

/// 세 정수 입력을 유효 범위로 보정한다.
pub fn validate(temperature: i32, pressure: i32, humidity: i32) -> InitialReadings {
    InitialReadings {
        temperature: clamp(temperature, TEMPERATURE_MIN_C, TEMPERATURE_MAX_C),
        pressure: pressure.max(PRESSURE_MIN_PA),
        humidity: clamp(humidity, HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT),
    }
}

impl RawReadings {
    /// 폼 문자열을 파싱한 뒤 보정한다.
    pub fn validate(&self) -> InitialReadings {
        let readings = validate(
            parse_or_zero(&self.temperature),
            parse_or_zero(&self.pressure),
            parse_or_zero(&self.humidity),
        );
        tracing::debug!(?readings, raw = ?self, "initial readings validated");
        readings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_in_range_values() {
        for v in 16..=30 {
            assert_eq!(clamp(v, 16, 30), v);
        }
    }

    #[test]
    fn clamp_bounds_extreme_values() {
        assert_eq!(clamp(i32::MIN, 16, 30), 16);
        assert_eq!(clamp(i32::MAX, 16, 30), 30);
    }

    #[test]
    fn parse_or_zero_handles_garbage() {
        assert_eq!(parse_or_zero(" 25 "), 25);
        assert_eq!(parse_or_zero("-7"), -7);
        assert_eq!(parse_or_zero("+7"), 7);
        assert_eq!(parse_or_zero("abc"), 0);
        assert_eq!(parse_or_zero("21.5"), 0);
        assert_eq!(parse_or_zero(""), 0);
        assert_eq!(parse_or_zero("99999999999"), 0);
    }
}
