//! 対話式の診断セッション
//!
//! 画面の描画 → 操作の選択、を繰り返す。プロンプトを出している間も
//! 読み込みと解析の完了通知は届いた順に反映する。
//! 解析中でも別の写真を選び直せる（古い解析結果は捨てられる）。

use crate::detector::{Detector, EventOutcome};
use crate::error::{FaceShapeError, Result};
use crate::render;
use dialoguer::{Input, Select};
use faceshape_common::{render as render_state, ActiveView};
use std::future::Future;
use std::path::PathBuf;

/// 対話アクション
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// 写真を選ぶ
    Upload(PathBuf),
    /// タブ切替
    Show(ActiveView),
    /// 解析完了まで待つ
    Wait,
    /// 終了
    Quit,
}

/// メニュー項目（表示順）。`busy` は読み込みか解析が実行中のとき。
pub fn menu_items(view: ActiveView, has_image: bool, busy: bool) -> Vec<(&'static str, MenuChoice)> {
    let mut items = Vec::new();
    match view {
        ActiveView::Detector => {
            let label = if has_image {
                "Choose Different Photo"
            } else {
                "Upload Your Photo"
            };
            items.push((label, MenuChoice::Upload));
            if busy {
                items.push(("Wait for result", MenuChoice::Wait));
            }
            items.push(("Face Shapes Guide", MenuChoice::Guide));
        }
        ActiveView::Guide => {
            items.push(("Detector", MenuChoice::Detector));
        }
    }
    items.push(("Quit", MenuChoice::Quit));
    items
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Upload,
    Wait,
    Guide,
    Detector,
    Quit,
}

pub async fn run_interactive(mut detector: Detector) -> Result<()> {
    println!("📷 FaceShape - 対話モード");
    println!("※ 診断結果は画像を解析しておらず、ランダムに選ばれます\n");

    loop {
        let state = detector.state();
        println!("{}", render::render_view(&render_state(state)));

        let items = menu_items(
            state.active_view,
            state.current_image.is_some(),
            !detector.is_idle(),
        );
        let prompt = async move {
            tokio::task::spawn_blocking(move || prompt_action(&items))
                .await
                .map_err(|e| FaceShapeError::Prompt(e.to_string()))?
        };
        let (action, outcomes) = wait_for_action(&mut detector, prompt).await?;
        report(outcomes);

        match action {
            SessionAction::Upload(path) => match detector.submit(&path) {
                Ok(_) => report(await_intake(&mut detector).await),
                Err(err) => println!("⚠ {}\n", err),
            },
            SessionAction::Show(view) => detector.show(view),
            SessionAction::Wait => report(detector.settle().await),
            SessionAction::Quit => break,
        }
    }

    Ok(())
}

/// 操作の入力を待つ間も完了通知を反映し続ける
///
/// 入力が確定した時点で、それまでに反映した通知と一緒に返す。
pub async fn wait_for_action<P>(
    detector: &mut Detector,
    prompt: P,
) -> Result<(SessionAction, Vec<EventOutcome>)>
where
    P: Future<Output = Result<SessionAction>>,
{
    tokio::pin!(prompt);
    let mut outcomes = Vec::new();

    loop {
        let busy = !detector.is_idle();
        tokio::select! {
            action = &mut prompt => return Ok((action?, outcomes)),
            Some(outcome) = detector.next(), if busy => outcomes.push(outcome),
        }
    }
}

/// 選んだファイルの読み込み結果が反映されるまで待つ
///
/// 受け付けられれば、戻った時点で解析はもう始まっている。
pub async fn await_intake(detector: &mut Detector) -> Vec<EventOutcome> {
    let mut outcomes = Vec::new();
    while let Some(outcome) = detector.next().await {
        let done = outcome.is_intake();
        outcomes.push(outcome);
        if done {
            break;
        }
    }
    outcomes
}

fn report(outcomes: Vec<EventOutcome>) {
    for outcome in outcomes {
        if let EventOutcome::IntakeFailed(err) = outcome {
            println!("⚠ {}\n", err);
        }
    }
}

/// 操作選択プロンプト
fn prompt_action(items: &[(&'static str, MenuChoice)]) -> Result<SessionAction> {
    let labels: Vec<&str> = items.iter().map(|(label, _)| *label).collect();
    let index = Select::new()
        .with_prompt("操作を選択")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| FaceShapeError::Prompt(e.to_string()))?;

    let choice = items.get(index).map(|(_, c)| *c).unwrap_or(MenuChoice::Quit);
    match choice {
        MenuChoice::Upload => {
            let input: String = Input::new()
                .with_prompt("画像ファイルのパス")
                .interact_text()
                .map_err(|e| FaceShapeError::Prompt(e.to_string()))?;
            Ok(SessionAction::Upload(PathBuf::from(input.trim())))
        }
        MenuChoice::Wait => Ok(SessionAction::Wait),
        MenuChoice::Guide => Ok(SessionAction::Show(ActiveView::Guide)),
        MenuChoice::Detector => Ok(SessionAction::Show(ActiveView::Detector)),
        MenuChoice::Quit => Ok(SessionAction::Quit),
    }
}
