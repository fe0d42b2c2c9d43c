//! Aligns a reading with its base text.
//!
//! The default [`AlignmentMode::Whole`] spans the whole base with one reading.
//! [`AlignmentMode::PerRun`] is an opt-in refinement that splits the base into
//! kanji runs and kana runs and gives each kanji run its own slice of the
//! reading, e.g. `食べ物` + `たべもの` → `食(た)べ物(もの)`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::script::{is_logographic, katakana_to_hiragana};

/// How a reading is distributed over the base text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentMode {
  /// One reading spans the whole base text.
  #[default]
  Whole,
  /// Each kanji run receives its own part of the reading.
  ///
  /// Falls back to `Whole` when the reading cannot be matched.
  PerRun,
}

/// One ruby group: a base run and, optionally, its reading.
///
/// A segment without a reading is rendered as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubySegment {
  /// Base text run
  pub base: String,
  /// Reading for this run (`None` for kana runs that need no gloss)
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub reading: Option<String>,
}

impl RubySegment {
  /// Segment with a reading.
  pub fn annotated(base: impl Into<String>, reading: impl Into<String>) -> Self {
    Self {
      base: base.into(),
      reading: Some(reading.into()),
    }
  }

  /// Segment without a reading.
  pub fn plain(base: impl Into<String>) -> Self {
    Self {
      base: base.into(),
      reading: None,
    }
  }
}

/// A maximal run of either kanji or non-kanji characters of the base.
#[derive(Debug)]
struct Run {
  chars: Vec<char>,
  logographic: bool,
}

/// Splits the base text into alternating kanji / non-kanji runs.
fn split_runs(base: &str) -> Vec<Run> {
  let mut runs: Vec<Run> = Vec::new();
  for c in base.chars() {
    let logographic = is_logographic(c);
    match runs.last_mut() {
      Some(run) if run.logographic == logographic => run.chars.push(c),
      _ => runs.push(Run {
        chars: vec![c],
        logographic,
      }),
    }
  }
  runs
}

fn same_sound(a: char, b: char) -> bool {
  katakana_to_hiragana(a) == katakana_to_hiragana(b)
}

/// Backtracking search assigning a reading slice to every run.
///
/// `spans[i]` receives the `[start, end)` char range of the reading used by run `i`.
/// `dead` holds `(run_idx, pos)` states already known to fail; whether a state
/// succeeds does not depend on how it was reached, so each is explored once.
fn assign(
  runs: &[Run],
  reading: &[char],
  run_idx: usize,
  pos: usize,
  spans: &mut Vec<(usize, usize)>,
  dead: &mut HashSet<(usize, usize)>,
) -> bool {
  if run_idx == runs.len() {
    return pos == reading.len();
  }
  if dead.contains(&(run_idx, pos)) {
    return false;
  }

  let run = &runs[run_idx];
  if !run.logographic {
    let end = pos + run.chars.len();
    let matches = end <= reading.len()
      && run.chars.iter().zip(&reading[pos..end]).all(|(&a, &b)| same_sound(a, b));
    if matches {
      spans.push((pos, end));
      if assign(runs, reading, run_idx + 1, end, spans, dead) {
        return true;
      }
      spans.pop();
    }
    dead.insert((run_idx, pos));
    return false;
  }

  // Kanji run: needs at least one reading char. Leave room for the
  // literal length of the remaining kana runs.
  let reserved: usize =
    runs[run_idx + 1..].iter().map(|r| if r.logographic { 1 } else { r.chars.len() }).sum();
  let max_end = reading.len().saturating_sub(reserved);
  for end in (pos + 1)..=max_end {
    spans.push((pos, end));
    if assign(runs, reading, run_idx + 1, end, spans, dead) {
      return true;
    }
    spans.pop();
  }
  dead.insert((run_idx, pos));
  false
}

/// Per-run alignment.
///
/// Returns `None` when the base has no kanji or no assignment of the reading
/// to the runs exists (e.g. the kana of the base do not occur in the reading).
pub fn align_runs(base: &str, reading: &str) -> Option<Vec<RubySegment>> {
  let runs = split_runs(base);
  if !runs.iter().any(|r| r.logographic) {
    return None;
  }

  let reading_chars: Vec<char> = reading.chars().collect();
  let mut spans = Vec::with_capacity(runs.len());
  let mut dead = HashSet::new();
  if !assign(&runs, &reading_chars, 0, 0, &mut spans, &mut dead) {
    return None;
  }

  let segments = runs
    .iter()
    .zip(spans)
    .map(|(run, (start, end))| {
      let run_base: String = run.chars.iter().collect();
      if run.logographic {
        RubySegment::annotated(run_base, reading_chars[start..end].iter().collect::<String>())
      } else {
        RubySegment::plain(run_base)
      }
    })
    .collect();
  Some(segments)
}

/// Distributes `reading` over `base` according to `mode`.
///
/// `PerRun` falls back to a single whole-string segment when the reading
/// cannot be aligned, so the result always covers the complete base text.
pub fn align(base: &str, reading: &str, mode: AlignmentMode) -> Vec<RubySegment> {
  match mode {
    AlignmentMode::Whole => vec![RubySegment::annotated(base, reading)],
    AlignmentMode::PerRun => align_runs(base, reading).unwrap_or_else(|| {
      debug!(base = %base, reading = %reading, "Per-run alignment failed, using whole-string ruby");
      vec![RubySegment::annotated(base, reading)]
    }),
  }
}
