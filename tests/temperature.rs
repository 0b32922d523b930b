//! 온도 변환 규칙과 폴백 정책 회귀 테스트.
use unit_converter_toolbox::category::UnitCategory;
use unit_converter_toolbox::conversion::{self, ConversionError, TemperatureFallback};
use unit_converter_toolbox::units::temperature::{self, TemperatureUnit};

#[test]
fn celsius_to_fahrenheit_fixed_points() {
    use TemperatureUnit::*;
    assert_eq!(temperature::convert_temperature(0.0, Celsius, Fahrenheit), 32.0);
    assert_eq!(temperature::convert_temperature(100.0, Celsius, Fahrenheit), 212.0);
}

#[test]
fn fahrenheit_to_celsius_fixed_points() {
    use TemperatureUnit::*;
    assert_eq!(temperature::convert_temperature(32.0, Fahrenheit, Celsius), 0.0);
    assert_eq!(temperature::convert_temperature(212.0, Fahrenheit, Celsius), 100.0);
}

#[test]
fn celsius_kelvin_offset() {
    use TemperatureUnit::*;
    assert_eq!(temperature::convert_temperature(0.0, Celsius, Kelvin), 273.15);
    assert!((temperature::convert_temperature(300.0, Kelvin, Celsius) - 26.85).abs() < 1e-9);
}

#[test]
fn fahrenheit_kelvin_pair_returns_input_unchanged() {
    // 화씨↔켈빈 직접 규칙은 정의되어 있지 않아 입력값이 그대로 돌아온다.
    use TemperatureUnit::*;
    assert_eq!(temperature::convert_temperature(0.0, Fahrenheit, Kelvin), 0.0);
    assert_eq!(temperature::convert_temperature(451.0, Fahrenheit, Kelvin), 451.0);
    assert_eq!(temperature::convert_temperature(77.0, Kelvin, Fahrenheit), 77.0);
}

#[test]
fn direct_rule_covers_exactly_four_pairs() {
    let mut with_rule = 0;
    for from in temperature::ALL {
        for to in temperature::ALL {
            if temperature::direct_rule(1.0, from, to).is_some() {
                with_rule += 1;
            }
        }
    }
    assert_eq!(with_rule, 4);
}

#[test]
fn legacy_fallback_through_string_layer() {
    let out = conversion::convert(UnitCategory::Temperature, 0.0, "fahrenheit", "kelvin").unwrap();
    assert_eq!(out, 0.0);
}

#[test]
fn strict_mode_rejects_ruleless_pairs() {
    for (from, to) in [("fahrenheit", "kelvin"), ("kelvin", "fahrenheit")] {
        let err = conversion::convert_with(
            UnitCategory::Temperature,
            10.0,
            from,
            to,
            TemperatureFallback::Strict,
        )
        .unwrap_err();
        assert!(
            matches!(err, ConversionError::UnsupportedConversion { .. }),
            "{from} -> {to}"
        );
    }
}

#[test]
fn strict_mode_keeps_same_unit_identity() {
    for unit in ["celsius", "fahrenheit", "kelvin"] {
        let out = conversion::convert_with(
            UnitCategory::Temperature,
            -40.0,
            unit,
            unit,
            TemperatureFallback::Strict,
        )
        .unwrap();
        assert_eq!(out, -40.0, "{unit}");
    }
}

#[test]
fn strict_mode_still_applies_defined_rules() {
    let out = conversion::convert_with(
        UnitCategory::Temperature,
        100.0,
        "celsius",
        "fahrenheit",
        TemperatureFallback::Strict,
    )
    .unwrap();
    assert_eq!(out, 212.0);
}
