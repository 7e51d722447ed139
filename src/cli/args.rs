// src/cli/args.rs
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueHint};

use super::value_enum::{CliMatcher, CliOutputFormat, CliSortKey};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(name = "pdirfile", version = crate::VERSION, about = "ディレクトリ一覧・作成ツール")]
pub struct Args {
    /// 詳細ログ（-v: info, -vv: debug, -vvv: trace）
    #[arg(short, long, action = clap::ArgAction::Count, global = true, conflicts_with = "quiet")]
    pub verbose: u8,

    /// エラー以外のログを抑制
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// ディレクトリ内のエントリを一覧表示
    List(ListArgs),
    /// ディレクトリを作成
    Mkdir(MkdirArgs),
    /// 関連付けられたアプリケーションでパスを開く
    Open(OpenArgs),
}

#[derive(ClapArgs, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct ListArgs {
    /// 一覧表示するディレクトリ
    #[arg(value_hint = ValueHint::DirPath)]
    pub dir: PathBuf,

    /// エントリ名のパターン（解釈は --matcher による）
    #[arg(long, help_heading = "フィルタ")]
    pub pattern: Option<String>,

    /// パターンの照合方法
    #[arg(long, value_enum, default_value = "suffix", help_heading = "フィルタ")]
    pub matcher: CliMatcher,

    /// パターン未指定時は照合せず全エントリを対象にする
    #[arg(long, help_heading = "フィルタ")]
    pub null_pattern_matches: bool,

    /// 事前カウントを行わず、領域を段階的に拡張して一度だけ走査
    #[arg(long, help_heading = "走査")]
    pub no_count: bool,

    /// --no-count 時の拡張単位
    #[arg(long, env = "PDIRFILE_GROWTH_INCREMENT", help_heading = "走査")]
    pub growth_increment: Option<usize>,

    /// ソートキー
    #[arg(long, value_enum, default_value = "name", help_heading = "出力")]
    pub sort: CliSortKey,

    /// 降順ソート
    #[arg(long, help_heading = "出力")]
    pub reverse: bool,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: CliOutputFormat,
}

#[derive(ClapArgs, Debug)]
pub struct MkdirArgs {
    /// 作成するディレクトリ
    #[arg(value_hint = ValueHint::DirPath)]
    pub path: PathBuf,

    /// 存在しない親ディレクトリもまとめて作成
    #[arg(short = 'p', long)]
    pub recursive: bool,

    /// 既に存在する場合はエラーにする
    #[arg(long)]
    pub error_if_exists: bool,
}

#[derive(ClapArgs, Debug)]
pub struct OpenArgs {
    /// 開くパス
    #[arg(value_hint = ValueHint::AnyPath)]
    pub path: PathBuf,

    /// 使用するアプリケーション（省略時は OS の既定）
    #[arg(long)]
    pub app: Option<String>,
}
