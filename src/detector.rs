//! 診断セッションのイベントループ
//!
//! ファイル読み込みと疑似解析は別タスクで走らせ、完了通知を
//! チャネル経由で受け取ってから `SessionState` に反映する。
//! 状態を書き換えるのはこのループだけなので、ロックは不要。

use crate::analyzer;
use crate::error::{FaceShapeError, Result};
use crate::intake;
use faceshape_common::{
    ActiveView, AnalysisTicket, ClassificationResult, Classifier, IntakeTicket, SessionState,
    UploadedImage,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;

pub type SharedClassifier = Arc<dyn Classifier + Send + Sync>;

/// タスクからの完了通知
#[derive(Debug)]
pub enum DetectorEvent {
    ImageRead {
        ticket: IntakeTicket,
        path: PathBuf,
        result: Result<UploadedImage>,
    },
    AnalysisFinished {
        ticket: AnalysisTicket,
        result: ClassificationResult,
    },
}

/// 通知を反映した結果
#[derive(Debug)]
pub enum EventOutcome {
    /// 画像を差し替えて解析を開始した
    ImageAccepted(AnalysisTicket),
    /// 新しい選択があったため読み込み結果を捨てた
    ImageSuperseded,
    /// 読み込みに失敗した
    IntakeFailed(FaceShapeError),
    /// 解析結果を反映した
    ResultCommitted,
    /// 古い解析結果を捨てた
    ResultDiscarded,
}

impl EventOutcome {
    /// ファイル読み込みの完了通知だったか
    pub fn is_intake(&self) -> bool {
        matches!(
            self,
            EventOutcome::ImageAccepted(_)
                | EventOutcome::ImageSuperseded
                | EventOutcome::IntakeFailed(_)
        )
    }
}

pub struct Detector {
    state: SessionState,
    classifier: SharedClassifier,
    tx: mpsc::UnboundedSender<DetectorEvent>,
    rx: mpsc::UnboundedReceiver<DetectorEvent>,
    in_flight: usize,
}

impl Detector {
    pub fn new(classifier: SharedClassifier) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: SessionState::new(),
            classifier,
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// 実行中のタスクがない
    pub fn is_idle(&self) -> bool {
        self.in_flight == 0
    }

    pub fn show(&mut self, view: ActiveView) {
        tracing::debug!(view = view.as_str(), "view switched");
        self.state.set_view(view);
    }

    /// ファイルを選択する。画像以外はその場で拒否し、状態は変えない。
    pub fn submit(&mut self, path: &Path) -> Result<IntakeTicket> {
        intake::accept(path)?;

        let ticket = self.state.begin_intake();
        let path = path.to_path_buf();
        let tx = self.tx.clone();
        self.in_flight += 1;

        tracing::debug!(seq = ticket.seq(), path = %path.display(), "image read requested");
        tokio::spawn(async move {
            let result = intake::read_image(&path).await;
            let _ = tx.send(DetectorEvent::ImageRead {
                ticket,
                path,
                result,
            });
        });

        Ok(ticket)
    }

    /// 読み込み済みの画像を直接受け付ける
    pub fn submit_image(&mut self, image: UploadedImage) -> Option<AnalysisTicket> {
        let intake = self.state.begin_intake();
        let ticket = self.state.finish_intake(intake, image.clone())?;
        self.start_analysis(ticket, image);
        Some(ticket)
    }

    fn start_analysis(&mut self, ticket: AnalysisTicket, image: UploadedImage) {
        let classifier = Arc::clone(&self.classifier);
        let tx = self.tx.clone();
        self.in_flight += 1;

        tracing::info!(generation = ticket.generation(), "analysis started");
        tokio::spawn(async move {
            let result = analyzer::analyze(classifier.as_ref(), &image).await;
            let _ = tx.send(DetectorEvent::AnalysisFinished { ticket, result });
        });
    }

    /// 完了通知を状態に反映
    pub fn handle(&mut self, event: DetectorEvent) -> EventOutcome {
        self.in_flight = self.in_flight.saturating_sub(1);

        match event {
            DetectorEvent::ImageRead {
                ticket,
                path,
                result: Ok(image),
            } => match self.state.finish_intake(ticket, image.clone()) {
                Some(analysis) => {
                    tracing::info!(path = %path.display(), "image accepted");
                    self.start_analysis(analysis, image);
                    EventOutcome::ImageAccepted(analysis)
                }
                None => EventOutcome::ImageSuperseded,
            },
            DetectorEvent::ImageRead {
                ticket,
                result: Err(err),
                ..
            } => {
                if self.state.fail_intake(ticket, err.to_string()) {
                    EventOutcome::IntakeFailed(err)
                } else {
                    EventOutcome::ImageSuperseded
                }
            }
            DetectorEvent::AnalysisFinished { ticket, result } => {
                if self.state.complete_analysis(ticket, result) {
                    tracing::info!(generation = ticket.generation(), "analysis committed");
                    EventOutcome::ResultCommitted
                } else {
                    EventOutcome::ResultDiscarded
                }
            }
        }
    }

    /// 次の完了通知を待って反映する。実行中のタスクがなければNone。
    pub async fn next(&mut self) -> Option<EventOutcome> {
        if self.is_idle() {
            return None;
        }
        let event = self.rx.recv().await?;
        Some(self.handle(event))
    }

    /// すべてのタスクが終わるまで反映を続ける
    pub async fn settle(&mut self) -> Vec<EventOutcome> {
        let mut outcomes = Vec::new();
        while let Some(outcome) = self.next().await {
            outcomes.push(outcome);
        }
        outcomes
    }
}
