use std::io::{self, Write};

use crate::app::AppError;
use crate::category::UnitCategory;
use crate::config::Config;
use crate::conversion::{self, TemperatureFallback};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert(UnitCategory),
    Settings,
    Exit,
}

/// 실행 시 1회 출력하는 환영 배너.
pub fn print_welcome() {
    println!("\n=== Unit Converter Toolbox ===");
    println!("길이/무게/온도/시간/면적/체적 단위를 변환합니다.");
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n1) 길이  2) 무게  3) 온도");
    println!("4) 시간  5) 면적  6) 체적");
    println!("7) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Convert(UnitCategory::Length)),
            "2" => return Ok(MenuChoice::Convert(UnitCategory::Weight)),
            "3" => return Ok(MenuChoice::Convert(UnitCategory::Temperature)),
            "4" => return Ok(MenuChoice::Convert(UnitCategory::Time)),
            "5" => return Ok(MenuChoice::Convert(UnitCategory::Area)),
            "6" => return Ok(MenuChoice::Convert(UnitCategory::Volume)),
            "7" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

fn category_label_ko(category: UnitCategory) -> &'static str {
    match category {
        UnitCategory::Length => "길이",
        UnitCategory::Weight => "무게",
        UnitCategory::Temperature => "온도",
        UnitCategory::Time => "시간",
        UnitCategory::Area => "면적",
        UnitCategory::Volume => "체적",
    }
}

/// 선택한 범주의 단위 변환을 처리한다.
pub fn handle_conversion(category: UnitCategory, cfg: &Config) -> Result<(), AppError> {
    println!("\n-- {} 변환 --", category_label_ko(category));
    let units = conversion::unit_options(category);
    for (i, name) in units.iter().enumerate() {
        println!("{}) {}", i + 1, name);
    }
    let value = read_f64("값 입력: ")?;
    let from = read_unit("입력 단위(번호 또는 이름): ", units)?;
    let to = read_unit("변환 단위(번호 또는 이름): ", units)?;
    let result = conversion::convert_with(category, value, from, to, cfg.temperature_fallback)?;
    println!("변환 결과: {result:.2} {to}");
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!("현재 온도 변환 모드: {:?}", cfg.temperature_fallback);
    println!("1) Legacy (규칙 없는 쌍은 입력값 유지)  2) Strict (오류 반환)");
    let sel = read_line("변경할 번호(취소하려면 엔터): ")?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.temperature_fallback = match sel.trim() {
        "1" => TemperatureFallback::Legacy,
        "2" => TemperatureFallback::Strict,
        _ => {
            println!("잘못된 입력이므로 변경하지 않습니다.");
            cfg.temperature_fallback
        }
    };
    println!(
        "온도 변환 모드가 {:?} 로 설정되었습니다.",
        cfg.temperature_fallback
    );
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

fn read_unit(prompt: &str, units: &'static [&'static str]) -> Result<&'static str, AppError> {
    loop {
        let s = read_line(prompt)?;
        let t = s.trim();
        if let Ok(n) = t.parse::<usize>() {
            if (1..=units.len()).contains(&n) {
                return Ok(units[n - 1]);
            }
        }
        if let Some(u) = units.iter().find(|u| u.eq_ignore_ascii_case(t)) {
            return Ok(*u);
        }
        println!("지원하지 않는 단위입니다.");
    }
}
