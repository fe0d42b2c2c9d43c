//! furigana-cli エントリーポイント

use std::io;
use std::process::ExitCode;

use furigana_cli::config::Config;
use furigana_cli::errors::Result;
use furigana_cli::runner::run;
use furigana_cli::service::FuriganaCliService;

fn main() -> ExitCode {
  match try_main() {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      tracing::error!(code = e.code(), "{e}");
      eprintln!("furigana-cli: {e}");
      ExitCode::from(e.exit_code())
    }
  }
}

fn try_main() -> Result<()> {
  // 設定の読み込み
  let config = Config::from_env()?;
  let library_config = config.load_library_config()?;

  // ロギングの初期化
  furigana::logging::init_tracing(library_config.log_level());
  tracing::info!(format = ?config.output_format, "設定を読み込みました");

  // サービスの初期化
  let service = FuriganaCliService::from_library_config(&library_config, config.class_name.clone())?;

  let stdin = io::stdin();
  let stdout = io::stdout();
  run(stdin.lock(), stdout.lock(), &service, config.output_format)?;

  Ok(())
}
