//! 비율 기반 변환 엔진 회귀 테스트.
use unit_converter_toolbox::category::{self, UnitCategory};
use unit_converter_toolbox::conversion::{self, ConversionError};
use unit_converter_toolbox::units::{area, length, time, volume, weight};

#[test]
fn km_to_m_is_exactly_1000() {
    let out = length::convert_length(1.0, length::LengthUnit::Kilometer, length::LengthUnit::Meter);
    assert_eq!(out, 1000.0);
}

#[test]
fn grams_to_kilograms() {
    let out = weight::convert_weight(
        1000.0,
        weight::WeightUnit::Gram,
        weight::WeightUnit::Kilogram,
    );
    assert_eq!(out, 1.0);
}

#[test]
fn acre_to_square_meters() {
    let out = area::convert_area(1.0, area::AreaUnit::Acre, area::AreaUnit::SquareMeter);
    assert!((out - 4046.86).abs() < 0.01, "got {out}");
}

#[test]
fn gallon_to_liters() {
    let out = volume::convert_volume(1.0, volume::VolumeUnit::Gallon, volume::VolumeUnit::Liter);
    assert!((out - 3.78541).abs() < 1e-5, "got {out}");
}

#[test]
fn hours_to_seconds() {
    let out = time::convert_time(2.0, time::TimeUnit::Hour, time::TimeUnit::Second);
    assert!((out - 7200.0).abs() < 1e-9, "got {out}");
}

#[test]
fn same_unit_is_exact_identity_for_every_category() {
    // 같은 단위 쌍은 계수 비율이 정확히 1이라 값이 그대로 돌아와야 한다.
    let values = [-12.25, 0.0, 3.7, 1e6];
    for cat in category::ALL {
        for unit in conversion::unit_options(cat) {
            for v in values {
                let out = conversion::convert(cat, v, unit, unit).expect("valid unit");
                assert_eq!(out, v, "{cat:?} {unit}");
            }
        }
    }
}

#[test]
fn round_trip_within_relative_tolerance() {
    let v = 123.456;
    for cat in category::ALL {
        for a in conversion::unit_options(cat) {
            for b in conversion::unit_options(cat) {
                let there = conversion::convert(cat, v, a, b).expect("valid unit");
                let back = conversion::convert(cat, there, b, a).expect("valid unit");
                assert!(
                    ((back - v) / v).abs() < 1e-6,
                    "{cat:?} {a} -> {b} -> {a}: {back}"
                );
            }
        }
    }
}

#[test]
fn each_table_has_exactly_one_reference_unit() {
    let one = |factors: &[f64]| factors.iter().filter(|f| **f == 1.0).count();
    let lengths: Vec<f64> = length::ALL.iter().map(|u| length::per_meter(*u)).collect();
    let weights: Vec<f64> = weight::ALL.iter().map(|u| weight::per_gram(*u)).collect();
    let times: Vec<f64> = time::ALL.iter().map(|u| time::per_second(*u)).collect();
    let areas: Vec<f64> = area::ALL.iter().map(|u| area::per_square_meter(*u)).collect();
    let volumes: Vec<f64> = volume::ALL.iter().map(|u| volume::per_liter(*u)).collect();
    for factors in [&lengths, &weights, &times, &areas, &volumes] {
        assert_eq!(one(factors), 1);
        assert!(factors.iter().all(|f| f.is_finite() && *f > 0.0));
    }
}

#[test]
fn menu_lists_match_table_names() {
    assert_eq!(
        conversion::unit_options(UnitCategory::Length),
        &length::ALL.map(|u| u.name())
    );
    assert_eq!(
        conversion::unit_options(UnitCategory::Weight),
        &weight::ALL.map(|u| u.name())
    );
    assert_eq!(
        conversion::unit_options(UnitCategory::Time),
        &time::ALL.map(|u| u.name())
    );
    assert_eq!(
        conversion::unit_options(UnitCategory::Area),
        &area::ALL.map(|u| u.name())
    );
    assert_eq!(
        conversion::unit_options(UnitCategory::Volume),
        &volume::ALL.map(|u| u.name())
    );
}

#[test]
fn unknown_unit_is_reported_per_category() {
    for cat in category::ALL {
        let err = conversion::convert(cat, 1.0, "furlongs", "meters").unwrap_err();
        assert!(matches!(err, ConversionError::UnknownUnit(_)), "{cat:?}");
    }
}

#[test]
fn short_aliases_parse_to_same_units() {
    let via_name =
        conversion::convert(UnitCategory::Length, 3.0, "kilometers", "meters").unwrap();
    let via_alias = conversion::convert(UnitCategory::Length, 3.0, "km", "m").unwrap();
    assert_eq!(via_name, via_alias);

    let named = conversion::convert(UnitCategory::Area, 2.0, "square feet", "acres").unwrap();
    let alias = conversion::convert(UnitCategory::Area, 2.0, "ft2", "ac").unwrap();
    assert_eq!(named, alias);
}

#[test]
fn negative_values_pass_through_arithmetic() {
    let out = conversion::convert(UnitCategory::Length, -2.0, "kilometers", "meters").unwrap();
    assert_eq!(out, -2000.0);
}
