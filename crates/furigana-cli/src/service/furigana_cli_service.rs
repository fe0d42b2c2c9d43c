//! 注釈サービス

use furigana::{FuriganaConfig, FuriganaService};

use crate::errors::Result;
use crate::models::{AnnotateLine, AnnotateResponse};

/// 注釈サービスの共通インターフェース
///
/// 本番実装（`FuriganaCliService`）とテスト用スタブを差し替えられるようにする。
pub trait AnnotateService: Send + Sync {
  /// 1 行分の注釈を行う
  fn annotate(&self, line: AnnotateLine) -> AnnotateResponse;
}

/// furigana ライブラリを使った注釈サービス
#[derive(Debug, Clone)]
pub struct FuriganaCliService {
  inner: FuriganaService,
  default_class: Option<String>,
}

impl FuriganaCliService {
  /// ライブラリ設定からサービスを初期化する
  ///
  /// # Arguments
  /// * `config` - ライブラリ設定
  /// * `default_class` - 行に `class` が無い場合に使うスタイルハンドル
  ///
  /// # Errors
  /// 設定の検証に失敗した場合
  pub fn from_library_config(
    config: &FuriganaConfig,
    default_class: Option<String>,
  ) -> Result<Self> {
    let inner = FuriganaService::init(config)?;
    Ok(Self {
      inner,
      default_class,
    })
  }
}

impl AnnotateService for FuriganaCliService {
  fn annotate(&self, line: AnnotateLine) -> AnnotateResponse {
    let class = line.class.as_deref().or(self.default_class.as_deref());

    let result = self.inner.annotate(&line.to_request(self.inner.show_by_default()));
    let segments = self.inner.annotator().segments(&result);
    let html = self.inner.renderer().render_segments(&segments, class);

    AnnotateResponse {
      result,
      segments,
      html,
    }
  }
}
