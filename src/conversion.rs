use serde::{Deserialize, Serialize};

use crate::category::UnitCategory;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
    /// 변환 규칙이 정의되지 않은 온도 단위 쌍 (strict 모드에서만 발생)
    UnsupportedConversion {
        from: &'static str,
        to: &'static str,
    },
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
            ConversionError::UnsupportedConversion { from, to } => {
                write!(f, "지원하지 않는 변환: {from} -> {to}")
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// 규칙이 없는 온도 쌍을 만났을 때의 처리 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureFallback {
    /// 입력값을 그대로 돌려준다. 원본과 동일한 동작.
    Legacy,
    /// UnsupportedConversion 오류를 돌려준다. 같은 단위 쌍은 예외다.
    Strict,
}

impl Default for TemperatureFallback {
    fn default() -> Self {
        TemperatureFallback::Legacy
    }
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열은 메뉴 표준 이름(`meters`, `square feet` 등)과
/// 관용 축약형(`m`, `ft2` 등)을 받는다. 온도는 레거시 폴백으로 처리한다.
pub fn convert(
    category: UnitCategory,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    convert_with(
        category,
        value,
        from_unit_str,
        to_unit_str,
        TemperatureFallback::Legacy,
    )
}

/// `convert`와 같되 온도 폴백 정책을 호출자가 지정한다.
pub fn convert_with(
    category: UnitCategory,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
    fallback: TemperatureFallback,
) -> Result<f64, ConversionError> {
    match category {
        UnitCategory::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        UnitCategory::Weight => {
            let from = parse_weight_unit(from_unit_str)?;
            let to = parse_weight_unit(to_unit_str)?;
            Ok(convert_weight(value, from, to))
        }
        UnitCategory::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            match temperature::direct_rule(value, from, to) {
                Some(v) => Ok(v),
                None => match fallback {
                    TemperatureFallback::Legacy => Ok(value),
                    TemperatureFallback::Strict if from == to => Ok(value),
                    TemperatureFallback::Strict => Err(ConversionError::UnsupportedConversion {
                        from: from.name(),
                        to: to.name(),
                    }),
                },
            }
        }
        UnitCategory::Time => {
            let from = parse_time_unit(from_unit_str)?;
            let to = parse_time_unit(to_unit_str)?;
            Ok(convert_time(value, from, to))
        }
        UnitCategory::Area => {
            let from = parse_area_unit(from_unit_str)?;
            let to = parse_area_unit(to_unit_str)?;
            Ok(convert_area(value, from, to))
        }
        UnitCategory::Volume => {
            let from = parse_volume_unit(from_unit_str)?;
            let to = parse_volume_unit(to_unit_str)?;
            Ok(convert_volume(value, from, to))
        }
    }
}

/// 범주별 메뉴에 노출되는 표준 단위 이름 목록.
pub fn unit_options(category: UnitCategory) -> &'static [&'static str] {
    match category {
        UnitCategory::Length => &[
            "meters",
            "kilometers",
            "centimeters",
            "millimeters",
            "inches",
            "feet",
            "yards",
            "miles",
        ],
        UnitCategory::Weight => &[
            "grams",
            "kilograms",
            "milligrams",
            "pounds",
            "ounces",
            "tons",
        ],
        UnitCategory::Temperature => &["celsius", "fahrenheit", "kelvin"],
        UnitCategory::Time => &[
            "seconds", "minutes", "hours", "days", "weeks", "months", "years",
        ],
        UnitCategory::Area => &[
            "square meters",
            "square kilometers",
            "square feet",
            "square miles",
            "acres",
        ],
        UnitCategory::Volume => &[
            "liters",
            "milliliters",
            "cubic meters",
            "gallons",
            "cubic feet",
        ],
    }
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "meters" | "meter" | "m" => Ok(LengthUnit::Meter),
        "kilometers" | "kilometer" | "km" => Ok(LengthUnit::Kilometer),
        "centimeters" | "centimeter" | "cm" => Ok(LengthUnit::Centimeter),
        "millimeters" | "millimeter" | "mm" => Ok(LengthUnit::Millimeter),
        "inches" | "inch" | "in" => Ok(LengthUnit::Inch),
        "feet" | "foot" | "ft" => Ok(LengthUnit::Foot),
        "yards" | "yard" | "yd" => Ok(LengthUnit::Yard),
        "miles" | "mile" | "mi" => Ok(LengthUnit::Mile),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_weight_unit(s: &str) -> Result<WeightUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "grams" | "gram" | "g" => Ok(WeightUnit::Gram),
        "kilograms" | "kilogram" | "kg" => Ok(WeightUnit::Kilogram),
        "milligrams" | "milligram" | "mg" => Ok(WeightUnit::Milligram),
        "pounds" | "pound" | "lb" | "lbs" => Ok(WeightUnit::Pound),
        "ounces" | "ounce" | "oz" => Ok(WeightUnit::Ounce),
        "tons" | "ton" | "t" => Ok(WeightUnit::Ton),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "celsius" | "c" | "°c" => Ok(TemperatureUnit::Celsius),
        "fahrenheit" | "f" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        "kelvin" | "k" => Ok(TemperatureUnit::Kelvin),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_time_unit(s: &str) -> Result<TimeUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "seconds" | "second" | "s" | "sec" => Ok(TimeUnit::Second),
        "minutes" | "minute" | "min" => Ok(TimeUnit::Minute),
        "hours" | "hour" | "h" | "hr" => Ok(TimeUnit::Hour),
        "days" | "day" | "d" => Ok(TimeUnit::Day),
        "weeks" | "week" | "wk" => Ok(TimeUnit::Week),
        "months" | "month" | "mo" => Ok(TimeUnit::Month),
        "years" | "year" | "yr" => Ok(TimeUnit::Year),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_area_unit(s: &str) -> Result<AreaUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "square meters" | "square meter" | "m2" | "m^2" | "sqm" => Ok(AreaUnit::SquareMeter),
        "square kilometers" | "square kilometer" | "km2" | "km^2" => Ok(AreaUnit::SquareKilometer),
        "square feet" | "square foot" | "ft2" | "ft^2" | "sqft" => Ok(AreaUnit::SquareFoot),
        "square miles" | "square mile" | "mi2" | "mi^2" => Ok(AreaUnit::SquareMile),
        "acres" | "acre" | "ac" => Ok(AreaUnit::Acre),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "liters" | "liter" | "litre" | "l" => Ok(VolumeUnit::Liter),
        "milliliters" | "milliliter" | "ml" => Ok(VolumeUnit::Milliliter),
        "cubic meters" | "cubic meter" | "m3" | "m^3" => Ok(VolumeUnit::CubicMeter),
        "gallons" | "gallon" | "gal" => Ok(VolumeUnit::Gallon),
        "cubic feet" | "cubic foot" | "ft3" | "ft^3" | "cuft" => Ok(VolumeUnit::CubicFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
