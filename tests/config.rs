//! 설정 직렬화 회귀 테스트. 디스크는 건드리지 않는다.
use unit_converter_toolbox::category::UnitCategory;
use unit_converter_toolbox::config::{Config, Theme};
use unit_converter_toolbox::conversion::TemperatureFallback;

#[test]
fn defaults_match_legacy_behavior() {
    let cfg = Config::default();
    assert_eq!(cfg.theme, Theme::System);
    assert_eq!(cfg.default_category, UnitCategory::Length);
    assert_eq!(cfg.temperature_fallback, TemperatureFallback::Legacy);
    assert_eq!(cfg.window_alpha, 1.0);
    assert!(!cfg.always_on_top);
}

#[test]
fn config_round_trips_through_toml() {
    let mut cfg = Config::default();
    cfg.theme = Theme::Dark;
    cfg.default_category = UnitCategory::Volume;
    cfg.temperature_fallback = TemperatureFallback::Strict;
    cfg.window_alpha = 0.85;
    cfg.always_on_top = true;

    let text = toml::to_string_pretty(&cfg).expect("serialize");
    let back: Config = toml::from_str(&text).expect("deserialize");
    assert_eq!(back.theme, Theme::Dark);
    assert_eq!(back.default_category, UnitCategory::Volume);
    assert_eq!(back.temperature_fallback, TemperatureFallback::Strict);
    assert!((back.window_alpha - 0.85).abs() < 1e-6);
    assert!(back.always_on_top);
}
