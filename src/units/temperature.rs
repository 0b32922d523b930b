use serde::{Deserialize, Serialize};

/// 온도 단위를 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

/// 메뉴 표시 순서의 전체 온도 단위 목록.
pub const ALL: [TemperatureUnit; 3] = [
    TemperatureUnit::Celsius,
    TemperatureUnit::Fahrenheit,
    TemperatureUnit::Kelvin,
];

impl TemperatureUnit {
    /// 메뉴와 결과 표시에 쓰는 표준 이름.
    pub fn name(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Kelvin => "kelvin",
        }
    }
}

/// 방향별 변환 규칙이 정의된 쌍이면 공식을 적용한 값을 돌려준다.
/// 화씨↔켈빈을 포함해 규칙이 없는 쌍은 None이다.
pub fn direct_rule(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> Option<f64> {
    use TemperatureUnit::*;
    match (from, to) {
        (Celsius, Fahrenheit) => Some((value * 9.0 / 5.0) + 32.0),
        (Fahrenheit, Celsius) => Some((value - 32.0) * 5.0 / 9.0),
        (Celsius, Kelvin) => Some(value + 273.15),
        (Kelvin, Celsius) => Some(value - 273.15),
        _ => None,
    }
}

/// 온도를 다른 단위로 변환한다.
/// 규칙이 없는 쌍은 입력값을 그대로 돌려준다(레거시 호환 동작).
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    direct_rule(value, from, to).unwrap_or(value)
}
