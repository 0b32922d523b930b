use serde::{Deserialize, Serialize};

/// 시간 단위. 내부 기준은 초이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// 메뉴 표시 순서의 전체 시간 단위 목록.
pub const ALL: [TimeUnit; 7] = [
    TimeUnit::Second,
    TimeUnit::Minute,
    TimeUnit::Hour,
    TimeUnit::Day,
    TimeUnit::Week,
    TimeUnit::Month,
    TimeUnit::Year,
];

impl TimeUnit {
    /// 메뉴와 결과 표시에 쓰는 표준 이름.
    pub fn name(&self) -> &'static str {
        match self {
            TimeUnit::Second => "seconds",
            TimeUnit::Minute => "minutes",
            TimeUnit::Hour => "hours",
            TimeUnit::Day => "days",
            TimeUnit::Week => "weeks",
            TimeUnit::Month => "months",
            TimeUnit::Year => "years",
        }
    }
}

/// 기준 단위(초) 1에 해당하는 각 단위의 수량.
/// 월은 30.417일, 년은 365일 기준이다.
pub fn per_second(unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Second => 1.0,
        TimeUnit::Minute => 1.0 / 60.0,
        TimeUnit::Hour => 1.0 / 3600.0,
        TimeUnit::Day => 1.0 / 86400.0,
        TimeUnit::Week => 1.0 / 604800.0,
        TimeUnit::Month => 1.0 / 2628000.0,
        TimeUnit::Year => 1.0 / 31536000.0,
    }
}

/// 시간을 다른 단위로 변환한다.
pub fn convert_time(value: f64, from: TimeUnit, to: TimeUnit) -> f64 {
    value * (per_second(to) / per_second(from))
}
