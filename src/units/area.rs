use serde::{Deserialize, Serialize};

/// 면적 단위. 내부 기준은 제곱미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareMeter,
    SquareKilometer,
    SquareFoot,
    SquareMile,
    Acre,
}

/// 메뉴 표시 순서의 전체 면적 단위 목록.
pub const ALL: [AreaUnit; 5] = [
    AreaUnit::SquareMeter,
    AreaUnit::SquareKilometer,
    AreaUnit::SquareFoot,
    AreaUnit::SquareMile,
    AreaUnit::Acre,
];

impl AreaUnit {
    /// 메뉴와 결과 표시에 쓰는 표준 이름.
    pub fn name(&self) -> &'static str {
        match self {
            AreaUnit::SquareMeter => "square meters",
            AreaUnit::SquareKilometer => "square kilometers",
            AreaUnit::SquareFoot => "square feet",
            AreaUnit::SquareMile => "square miles",
            AreaUnit::Acre => "acres",
        }
    }
}

/// 기준 단위(제곱미터) 1에 해당하는 각 단위의 수량.
pub fn per_square_meter(unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::SquareMeter => 1.0,
        AreaUnit::SquareKilometer => 0.000001,
        AreaUnit::SquareFoot => 10.7639,
        AreaUnit::SquareMile => 0.000000386102,
        AreaUnit::Acre => 0.000247105,
    }
}

/// 면적을 다른 단위로 변환한다.
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    value * (per_square_meter(to) / per_square_meter(from))
}
