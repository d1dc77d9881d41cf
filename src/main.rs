use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use aircon_panel::engine::{ControlEngine, LogObserver};
use aircon_panel::i18n::{self, keys, Translator};
use aircon_panel::validation::RawReadings;
use aircon_panel::{app, config, logging, ui_cli};

/// 터미널용 에어컨 패널 시뮬레이터.
#[derive(Debug, Parser)]
#[command(name = "aircon_panel_cli", version, about)]
struct Cli {
    /// 초기 온도 [°C] (16~30으로 보정)
    #[arg(long, allow_hyphen_values = true)]
    temperature: Option<String>,
    /// 초기 압력 [Pa] (0 이상으로 보정)
    #[arg(long, allow_hyphen_values = true)]
    pressure: Option<String>,
    /// 초기 습도 [%] (0~100으로 보정)
    #[arg(long, allow_hyphen_values = true)]
    humidity: Option<String>,
    /// 설정 파일 경로
    #[arg(long)]
    settings: Option<PathBuf>,
    /// 표시 언어 (auto/ru/en/ko)
    #[arg(long, short = 'L')]
    lang: Option<String>,
    /// 언어팩 디렉터리
    #[arg(long)]
    lang_pack: Option<PathBuf>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 패널을 실행한다.
fn main() {
    logging::init();
    if let Err(err) = try_run(Cli::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    let settings_file = config::settings_path(cli.settings.as_deref());
    let settings = config::load_or_default(&settings_file);
    let lang = i18n::resolve_language(cli.lang.as_deref(), settings.language.as_deref());
    let tr = Translator::new_with_pack(&lang, cli.lang_pack.as_deref());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    let raw = match (cli.temperature, cli.pressure, cli.humidity) {
        (Some(temperature), Some(pressure), Some(humidity)) => RawReadings {
            temperature,
            pressure,
            humidity,
        },
        _ => match ui_cli::prompt_readings(&mut input, &mut output, &tr)? {
            Some(raw) => raw,
            None => {
                writeln!(output, "{}", tr.t(keys::FORM_CANCELLED))?;
                return Ok(());
            }
        },
    };

    let mut engine = ControlEngine::new(raw.validate());
    engine.subscribe(LogObserver);
    settings.apply_to(&mut engine);
    app::run(&mut engine, &settings, &settings_file, &tr, &mut input, &mut output)
}
