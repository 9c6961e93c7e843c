use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use futures::StreamExt;
use jade_core::{
    model::{StringType, Word},
    search::SearchDispatcher,
};
use jade_dict::MemoryWordStore;
use jade_pinyin::{PinyinNormalizer, render_display};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Dispatcher = SearchDispatcher<MemoryWordStore, PinyinNormalizer>;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DictFormat {
    /// `simplified<TAB>traditional<TAB>pinyin<TAB>definition`
    Tsv,
    /// CC-CEDICT 原始格式
    Cedict,
}

/// 汉字 / 拼音 / 英文 词典查询
#[derive(Parser, Debug)]
#[command(name = "jade")]
#[command(version)]
struct Args {
    /// 词库文件路径（默认 asset/dict.tsv）
    #[arg(long, env = "JADE_DICT")]
    dict: Option<PathBuf>,

    /// 词库文件格式
    #[arg(long, value_enum, default_value = "tsv", env = "JADE_DICT_FORMAT")]
    format: DictFormat,

    /// 每次查询最多显示多少条
    #[arg(long, default_value = "20", env = "JADE_LIMIT")]
    limit: usize,

    /// 以 JSON 输出结果
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jade_cli=info,jade_dict=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let dict_path = args.dict.clone().unwrap_or_else(default_dict_path);
    info!(path = %dict_path.display(), format = ?args.format, "loading dictionary");

    let store = match args.format {
        DictFormat::Tsv => MemoryWordStore::from_tsv_path(&dict_path),
        DictFormat::Cedict => MemoryWordStore::from_cedict_path(&dict_path),
    }
    .with_context(|| format!("failed to load dictionary {}", dict_path.display()))?
    .result_limit(args.limit);

    let dispatcher = SearchDispatcher::new(store, PinyinNormalizer::new());
    repl(&dispatcher, &args).await
}

fn default_dict_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("asset")
        .join("dict.tsv")
}

async fn repl(dispatcher: &Dispatcher, args: &Args) -> Result<()> {
    let mut out = io::stdout();
    let stdin = io::stdin();
    let mut line = String::new();
    writeln!(out, "jade | {} words", dispatcher.store().len())?;
    writeln!(out, "输入汉字、拼音（nǐ hǎo / ni3hao3）或英文后回车。输入 :q 退出。")?;

    loop {
        line.clear();
        write!(out, "search> ")?;
        out.flush()?;
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim_end_matches(['\r', '\n']);
        if matches!(input.trim(), ":q" | ":quit" | ":exit") {
            break;
        }

        let (kind, key) = dispatcher.classify_query(input);
        // 只取结果流的第一版快照
        let words = dispatcher.search(input).next().await.unwrap_or_default();
        debug!(%kind, key = %key, hits = words.len(), "search finished");

        if args.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&words)?)?;
            continue;
        }
        writeln!(out, "[{kind}] key: {key}")?;
        if words.is_empty() {
            writeln!(out, "  (no results)")?;
        }
        for (i, word) in words.iter().enumerate() {
            writeln!(out, "{:>3}. {}", i + 1, format_word(word))?;
        }
    }
    Ok(())
}

fn format_word(word: &Word) -> String {
    format!(
        "{}  {}  {}",
        render_display(word, StringType::Hanzi),
        render_display(word, StringType::Pinyin),
        render_display(word, StringType::English)
    )
}
