use std::{fs, path::PathBuf};

use facet::Facet;
use figue as args;
use furiganify::{
    ConvertOptions, Grammar, MemoryDocument, ReadingStyle, SegmentPolicy,
    render::{self, MarkupRenderer, OutputFormat},
};
use glob::glob;
use indicatif::ProgressStyle;
use miette::{IntoDiagnostic, Result, WrapErr, miette};
use rustc_hash::FxHashSet;
use tracing::{info, info_span};
use tracing_indicatif::{IndicatifLayer, span_ext::IndicatifSpanExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Facet)]
struct Cli {
    /// Input paths or glob patterns (can be repeated), e.g. 'chapters/*.txt'
    #[facet(args::positional)]
    inputs: Vec<String>,

    /// Output directory
    #[facet(args::named, args::short = 'o')]
    out_dir: PathBuf,

    /// Output markup: html or aozora.
    #[facet(args::named, default = "html")]
    format: String,

    /// Base phrase grammar: broad (kanji then kana, any brackets) or strict.
    #[facet(args::named, default = "broad")]
    grammar: String,

    /// How readings are written: kana, hiragana or romaji.
    #[facet(args::named, default = "kana")]
    reading: String,

    /// Longest reading a lone kanji may take.
    #[facet(args::named, default = 4)]
    single_kanji_cap: usize,

    /// Kana-per-kanji ratio under which a lone kanji stops taking reading.
    #[facet(args::named, default = 1.5)]
    ratio_threshold: f64,

    /// Smallest reading given to a run of several kanji.
    #[facet(args::named, default = 2)]
    min_multi_slice: usize,
}

impl Cli {
    fn options(&self) -> Result<ConvertOptions> {
        let grammar: Grammar = self
            .grammar
            .parse()
            .map_err(|e: String| miette!("{e}"))
            .wrap_err("Failed to parse --grammar argument")?;

        let reading_style: ReadingStyle = self
            .reading
            .parse()
            .map_err(|e: String| miette!("{e}"))
            .wrap_err("Failed to parse --reading argument")?;

        Ok(ConvertOptions {
            grammar,
            policy: SegmentPolicy {
                single_kanji_cap: self.single_kanji_cap,
                ratio_threshold: self.ratio_threshold,
                min_multi_slice: self.min_multi_slice,
            },
            reading_style,
        })
    }
}

fn main() -> Result<()> {
    let indicatif_layer = IndicatifLayer::new();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "furiganify=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
        .with(indicatif_layer)
        .init();

    let cli: Cli = args::from_std_args()
        .into_result()
        .map(|o| o.value)
        .map_err(|e| miette!("{e}"))?;

    let options = cli.options()?;
    let format: OutputFormat = cli
        .format
        .parse()
        .map_err(|e: String| miette!("{e}"))
        .wrap_err_with(|| miette!("Failed to parse --format argument: {}", &cli.format))?;
    let renderer = format.renderer();

    let mut input_paths: FxHashSet<PathBuf> = FxHashSet::default();

    for pattern in &cli.inputs {
        let entries = glob(pattern)
            .into_diagnostic()
            .wrap_err_with(|| miette!("Failed to expand glob pattern: {pattern:?}"))?;

        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => {
                    input_paths.insert(path);
                }
                _ => {}
            }
        }
    }

    if input_paths.is_empty() {
        return Err(miette!("No input files found"));
    }

    if !cli.out_dir.exists() {
        fs::create_dir_all(&cli.out_dir)
            .into_diagnostic()
            .wrap_err_with(|| miette!("Failed to create out-dir: {:?}", cli.out_dir))?;
    }

    info!(
        "Processing {} inputs -> {:?}...",
        input_paths.len(),
        cli.out_dir
    );

    let inputs_span = info_span!("convert_inputs");
    inputs_span.pb_set_style(
        &ProgressStyle::with_template(
            "{msg} [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise}]",
        )
        .into_diagnostic()?,
    );
    inputs_span.pb_set_length(input_paths.len() as u64);
    inputs_span.pb_set_message("Converting inputs");

    let inputs_span_enter = inputs_span.enter();

    for in_path in &input_paths {
        inputs_span.pb_inc(1);
        inputs_span.pb_set_message(&format!("Converting {}", in_path.display()));

        let stem = in_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| miette!("Invalid file name: {:?}", in_path))?;

        let out_path = cli
            .out_dir
            .join(format!("{stem}.{}", renderer.extension()));

        convert_file(&options, renderer.as_ref(), in_path, &out_path)?;
    }

    drop(inputs_span_enter);
    drop(inputs_span);

    info!("Done processing inputs.");

    Ok(())
}

fn convert_file(
    options: &ConvertOptions,
    renderer: &dyn MarkupRenderer,
    in_path: &PathBuf,
    out_path: &PathBuf,
) -> Result<()> {
    let text = fs::read_to_string(in_path)
        .into_diagnostic()
        .wrap_err_with(|| miette!("Failed to read input file: {:?}", in_path))?;

    info!("Converting {:?} -> {:?}...", in_path, out_path);

    let mut document = MemoryDocument::from_text(&text);
    let report = furiganify::convert_document(&mut document, options)
        .wrap_err_with(|| miette!("Failed to convert {:?}", in_path))?;

    fs::write(out_path, render::render_document(&document, renderer))
        .into_diagnostic()
        .wrap_err_with(|| miette!("Failed to write output file: {:?}", out_path))?;

    info!(
        converted = report.matches_converted,
        skipped = report.matches_skipped,
        "Wrote {:?}",
        out_path
    );

    Ok(())
}
