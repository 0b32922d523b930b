use serde::{Deserialize, Serialize};

/// 다루는 변환 범주를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitCategory {
    Length,
    Weight,
    Temperature,
    Time,
    Area,
    Volume,
}

/// 메뉴 표시 순서의 전체 범주 목록.
pub const ALL: [UnitCategory; 6] = [
    UnitCategory::Length,
    UnitCategory::Weight,
    UnitCategory::Temperature,
    UnitCategory::Time,
    UnitCategory::Area,
    UnitCategory::Volume,
];

impl UnitCategory {
    /// GUI에 노출되는 영문 라벨.
    pub fn label(&self) -> &'static str {
        match self {
            UnitCategory::Length => "Length",
            UnitCategory::Weight => "Weight",
            UnitCategory::Temperature => "Temperature",
            UnitCategory::Time => "Time",
            UnitCategory::Area => "Area",
            UnitCategory::Volume => "Volume",
        }
    }
}

/// 범주 이름 문자열을 enum으로 변환한다. 대소문자는 무시한다.
pub fn parse_category(s: &str) -> Option<UnitCategory> {
    match s.to_lowercase().as_str() {
        "length" => Some(UnitCategory::Length),
        "weight" => Some(UnitCategory::Weight),
        "temperature" => Some(UnitCategory::Temperature),
        "time" => Some(UnitCategory::Time),
        "area" => Some(UnitCategory::Area),
        "volume" => Some(UnitCategory::Volume),
        _ => None,
    }
}
