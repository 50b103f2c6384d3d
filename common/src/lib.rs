//! FaceShape Common Library
//!
//! CLIとWeb(WASM)で共有される型・カタログ・セッション状態

pub mod catalog;
pub mod classifier;
pub mod data_url;
pub mod error;
pub mod session;
pub mod types;
pub mod view;

pub use catalog::{ShapeCategory, ShapeId, CATALOG};
pub use classifier::{
    Classifier, SimulatedClassifier, CONFIDENCE_MAX, CONFIDENCE_MIN, DEFAULT_ANALYSIS_DELAY_MS,
};
pub use error::{Error, Result};
pub use session::{ActiveView, AnalysisTicket, IntakeTicket, SessionState};
pub use types::{ClassificationResult, UploadedImage};
pub use view::{render, DetectorView, GuideCard, ResultPanel, UploadPanel, View, GUIDE_TIP_COUNT};
