//! 標準入力から 1 行ずつ読み、注釈結果を 1 行ずつ書き出す

use std::io::{BufRead, Read, Write};

use tracing::{debug, info};

use crate::config::{MAX_LINE_LENGTH, OutputFormat};
use crate::errors::{CliError, Result};
use crate::models::AnnotateLine;
use crate::service::AnnotateService;

/// 処理結果の集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
  /// 処理した行数（空行を除く）
  pub lines: usize,
  /// ルビを付けた行数
  pub annotated: usize,
  /// 素のテキストとして出力した行数
  pub plain: usize,
}

/// 1 行を読み込む。改行（`\n` / `\r\n`）は取り除く。
///
/// 読み込みは `MAX_LINE_LENGTH` + 1 バイトで打ち切るため、改行の無い巨大な入力も
/// 全体をメモリに載せずに拒否できる。入力の終端では `Ok(false)` を返す。
fn read_line<R: BufRead>(input: &mut R, buf: &mut Vec<u8>, line_no: usize) -> Result<bool> {
  buf.clear();
  let limit = MAX_LINE_LENGTH as u64 + 1;
  let read = input.by_ref().take(limit).read_until(b'\n', buf)?;
  if read == 0 {
    return Ok(false);
  }

  if buf.last() == Some(&b'\n') {
    buf.pop();
    if buf.last() == Some(&b'\r') {
      buf.pop();
    }
  } else if read as u64 == limit {
    return Err(CliError::line_too_long(line_no, MAX_LINE_LENGTH));
  }

  Ok(true)
}

/// JSON Lines を読み、1 行ごとに注釈結果を書き出す。
///
/// 空行は読み飛ばす。最初の不正な行で処理を止め、
/// それまでの出力はフラッシュ済みになる。
///
/// # Errors
/// - 行が `MAX_LINE_LENGTH` を超えた
/// - 行が UTF-8 でない、または JSON が不正
/// - 入出力エラー
pub fn run<R, W>(
  mut input: R,
  mut output: W,
  service: &dyn AnnotateService,
  format: OutputFormat,
) -> Result<RunSummary>
where
  R: BufRead,
  W: Write,
{
  let mut summary = RunSummary::default();
  let mut buf = Vec::new();
  let mut line_no = 0;

  loop {
    line_no += 1;
    let has_line = match read_line(&mut input, &mut buf, line_no) {
      Ok(has_line) => has_line,
      Err(e) => {
        output.flush()?;
        return Err(e);
      }
    };
    if !has_line {
      break;
    }

    let line = match std::str::from_utf8(&buf) {
      Ok(line) => line,
      Err(e) => {
        output.flush()?;
        return Err(CliError::invalid_input(line_no, format!("invalid UTF-8: {e}")));
      }
    };

    if line.trim().is_empty() {
      continue;
    }

    let request: AnnotateLine = match serde_json::from_str(line) {
      Ok(request) => request,
      Err(e) => {
        output.flush()?;
        return Err(CliError::invalid_input(line_no, e.to_string()));
      }
    };

    let response = service.annotate(request);
    summary.lines += 1;
    if response.result.is_annotated() {
      summary.annotated += 1;
    } else {
      summary.plain += 1;
    }

    match format {
      OutputFormat::Html => writeln!(output, "{}", response.html)?,
      OutputFormat::Json => {
        let json = serde_json::to_string(&response)
          .map_err(|e| CliError::internal(format!("failed to serialize response: {e}")))?;
        writeln!(output, "{json}")?;
      }
    }

    debug!(line = line_no, annotated = response.result.is_annotated(), "Line processed");
  }

  output.flush()?;

  info!(
    lines = summary.lines,
    annotated = summary.annotated,
    plain = summary.plain,
    "Input processed"
  );

  Ok(summary)
}
