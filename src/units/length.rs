use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    Inch,
    Foot,
    Yard,
    Mile,
}

/// 메뉴 표시 순서의 전체 길이 단위 목록.
pub const ALL: [LengthUnit; 8] = [
    LengthUnit::Meter,
    LengthUnit::Kilometer,
    LengthUnit::Centimeter,
    LengthUnit::Millimeter,
    LengthUnit::Inch,
    LengthUnit::Foot,
    LengthUnit::Yard,
    LengthUnit::Mile,
];

impl LengthUnit {
    /// 메뉴와 결과 표시에 쓰는 표준 이름.
    pub fn name(&self) -> &'static str {
        match self {
            LengthUnit::Meter => "meters",
            LengthUnit::Kilometer => "kilometers",
            LengthUnit::Centimeter => "centimeters",
            LengthUnit::Millimeter => "millimeters",
            LengthUnit::Inch => "inches",
            LengthUnit::Foot => "feet",
            LengthUnit::Yard => "yards",
            LengthUnit::Mile => "miles",
        }
    }
}

/// 기준 단위(미터) 1에 해당하는 각 단위의 수량.
pub fn per_meter(unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => 1.0,
        LengthUnit::Kilometer => 0.001,
        LengthUnit::Centimeter => 100.0,
        LengthUnit::Millimeter => 1000.0,
        LengthUnit::Inch => 39.3701,
        LengthUnit::Foot => 3.28084,
        LengthUnit::Yard => 1.09361,
        LengthUnit::Mile => 0.000621371,
    }
}

/// 길이를 다른 단위로 변환한다.
/// 계수 비율을 먼저 구하므로 같은 단위 쌍은 정확히 항등이다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    value * (per_meter(to) / per_meter(from))
}
