use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use doc_similarity::{
    analyze_with_config,
    config::{AnalysisConfig, MAX_DISPLAY_DECIMALS},
    input::{read_documents, read_lemmas, read_stop_words},
    render::render_analysis,
    IdfVariant, Preprocessor, StopWords, TableOrder,
};

#[derive(Parser)]
#[command(name = "doc-similarity", about = "TF-IDF and cosine similarity between documents")]
struct Args {
    /// Document files, one document per file
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Stop-word file, one word per line
    #[arg(short, long)]
    stop_words: Option<PathBuf>,

    /// Lemma dictionary (JSON object or list of [word, lemma] pairs)
    #[arg(short, long)]
    lemmas: Option<PathBuf>,

    /// JSON config file; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use ln(N / df) instead of ln(N / (1 + df))
    #[arg(long, default_value_t = false)]
    unsmoothed: bool,

    /// Sort term tables by TF descending
    #[arg(long, default_value_t = false)]
    sort_by_tf: bool,

    /// Decimals shown in tables (0 to 15)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_DISPLAY_DECIMALS as i64))]
    decimals: Option<u32>,

    /// Do not strip non-letter characters from documents
    #[arg(long, default_value_t = false)]
    raw: bool,

    /// Print the full analysis as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("doc_similarity=info".parse().expect("valid directive literal")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AnalysisConfig::from_file(path)?,
        None => AnalysisConfig::default(),
    };
    if args.unsmoothed {
        config.idf = IdfVariant::Unsmoothed;
    }
    if args.sort_by_tf {
        config.table_order = TableOrder::TfDescending;
    }
    if let Some(decimals) = args.decimals {
        config.display_decimals = decimals;
    }
    if args.raw {
        config.clean_input = false;
    }

    let documents = read_documents(&args.files, config.clean_input)?;
    let stop_words = match &args.stop_words {
        Some(path) => read_stop_words(path)?,
        None => StopWords::new(),
    };
    let lemmas = match &args.lemmas {
        Some(path) => read_lemmas(path)?,
        None => None,
    };

    let preprocessed = Preprocessor::new(stop_words, lemmas.as_ref()).run(&documents);
    let analysis = analyze_with_config(&preprocessed, &config);
    info!(
        documents = analysis.doc_num(),
        vocabulary = analysis.vocabulary.len(),
        idf = ?config.idf,
        "analysis complete"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!(
            "{}",
            render_analysis(&analysis, config.table_order, config.display_decimals)
        );
    }
    Ok(())
}
