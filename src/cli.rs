use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "faceshape")]
#[command(about = "写真から顔型を診断する（結果は疑似的なもの）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 写真を1枚診断して結果を表示
    Detect {
        /// 画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,

        /// 乱数シード（再現用）
        #[arg(long)]
        seed: Option<u64>,

        /// 解析待ち時間（ミリ秒）
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// 顔型ガイドを表示
    Guide,

    /// 対話モードで診断
    Interactive {
        /// 乱数シード（再現用）
        #[arg(long)]
        seed: Option<u64>,
    },

    /// 設定の表示・変更
    Config {
        /// 解析待ち時間（ミリ秒）を設定
        #[arg(long)]
        set_delay_ms: Option<u64>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
