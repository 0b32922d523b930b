use serde::{Deserialize, Serialize};

/// 무게 단위. 내부 기준은 그램이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    Gram,
    Kilogram,
    Milligram,
    Pound,
    Ounce,
    Ton,
}

/// 메뉴 표시 순서의 전체 무게 단위 목록.
pub const ALL: [WeightUnit; 6] = [
    WeightUnit::Gram,
    WeightUnit::Kilogram,
    WeightUnit::Milligram,
    WeightUnit::Pound,
    WeightUnit::Ounce,
    WeightUnit::Ton,
];

impl WeightUnit {
    /// 메뉴와 결과 표시에 쓰는 표준 이름.
    pub fn name(&self) -> &'static str {
        match self {
            WeightUnit::Gram => "grams",
            WeightUnit::Kilogram => "kilograms",
            WeightUnit::Milligram => "milligrams",
            WeightUnit::Pound => "pounds",
            WeightUnit::Ounce => "ounces",
            WeightUnit::Ton => "tons",
        }
    }
}

/// 기준 단위(그램) 1에 해당하는 각 단위의 수량.
pub fn per_gram(unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Gram => 1.0,
        WeightUnit::Kilogram => 0.001,
        WeightUnit::Milligram => 1000.0,
        WeightUnit::Pound => 0.00220462,
        WeightUnit::Ounce => 0.035274,
        WeightUnit::Ton => 0.00000110231,
    }
}

/// 무게를 다른 단위로 변환한다.
pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    value * (per_gram(to) / per_gram(from))
}
