use clap::{Parser, Subcommand};

use unit_converter_toolbox::{app, category, config, conversion};

/// 커맨드라인 단위 변환기. 서브커맨드 없이 실행하면 대화형 메뉴를 연다.
#[derive(Parser)]
#[command(name = "unit_converter_toolbox_cli", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// 값을 한 번 변환하고 결과를 출력한다.
    Convert {
        /// 변환 범주 (length, weight, temperature, time, area, volume)
        category: String,
        /// 변환할 값
        value: f64,
        /// 입력 단위
        from: String,
        /// 변환 단위
        to: String,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요청된 모드로 실행한다.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = try_run(cli) {
        eprintln!("오류: {err}");
    }
}

fn try_run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::load_or_default()?;
    match cli.command {
        Some(Command::Convert {
            category,
            value,
            from,
            to,
        }) => {
            let cat = category::parse_category(category.trim())
                .ok_or_else(|| format!("알 수 없는 범주: {category}"))?;
            let result = conversion::convert_with(
                cat,
                value,
                from.trim(),
                to.trim(),
                cfg.temperature_fallback,
            )?;
            println!("{result:.2} {}", to.trim());
        }
        None => app::run(&mut cfg)?,
    }
    Ok(())
}
