use clap::Parser;

use unit_converter_toolbox::{app, config, i18n};

/// 길이/무게/온도 단위 변환기 CLI.
#[derive(Debug, Parser)]
#[command(name = "unit_converter_toolbox", version)]
struct Cli {
    /// 표시 언어 (auto/ko/en-us)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 언어팩 디렉터리 경로
    #[arg(long)]
    lang_dir: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cli.lang_dir.as_deref());
    app::run(&mut cfg, &tr)?;
    Ok(())
}
