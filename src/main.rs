use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use mockup_gen::batch::is_supported_upload;
use mockup_gen::error::{OptionExt, ResultExt};
use mockup_gen::{BatchItem, BatchPackager, FailureRecord, MockupConfig, MockupResult};

#[derive(Parser)]
#[command(name = "mockup-gen")]
#[command(about = "Composite app screenshots into a device-frame mockup")]
#[command(version)]
struct Cli {
    /// Screenshots to frame (png, jpg, jpeg)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Directory to write the mockup or mockups.zip into
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Print a JSON summary of the batch on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("[CLI] {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether an output file was written.
fn run(cli: &Cli) -> MockupResult<bool> {
    let packager = BatchPackager::with_bundled_frame(MockupConfig::default())?;

    let (items, unreadable) = gather_items(&cli.files);

    let report = packager.process(&items);

    let mut summary = report.summary();
    let mut failures = unreadable;
    failures.append(&mut summary.failures);
    summary.failures = failures;

    for failure in &summary.failures {
        eprintln!("{}: {}", failure.file_name, failure.message);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    if items.is_empty() {
        log::error!("[CLI] No usable screenshots given");
        return Ok(false);
    }

    let Some(output) = report.output else {
        log::error!("[CLI] No mockups could be produced");
        return Ok(false);
    };

    std::fs::create_dir_all(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;
    let buffer = output.into_buffer();
    let target = cli.output.join(&buffer.file_name);
    std::fs::write(&target, &buffer.bytes)
        .with_context(|| format!("failed to write {}", target.display()))?;

    log::info!(
        "[CLI] Wrote {} ({}, {} bytes)",
        target.display(),
        buffer.content_type,
        buffer.bytes.len()
    );
    Ok(true)
}

/// Read every supported path into a batch item. Paths that cannot be named
/// or read become failure records; other extensions are skipped.
fn gather_items(paths: &[PathBuf]) -> (Vec<BatchItem>, Vec<FailureRecord>) {
    let mut items = Vec::with_capacity(paths.len());
    let mut failures = Vec::new();

    for path in paths {
        let file_name = match file_name_of(path) {
            Ok(name) => name,
            Err(e) => {
                log::warn!("[CLI] Skipping {}: {}", path.display(), e);
                failures.push(FailureRecord::new(&path.display().to_string(), &e));
                continue;
            }
        };
        if !is_supported_upload(&file_name) {
            log::warn!("[CLI] Skipping {}: not a png/jpg/jpeg file", path.display());
            continue;
        }
        match std::fs::read(path).with_context(|| format!("failed to read {}", path.display())) {
            Ok(bytes) => items.push(BatchItem::new(file_name, bytes)),
            Err(e) => {
                log::warn!("[CLI] Skipping {}: {}", path.display(), e);
                failures.push(FailureRecord::new(&file_name, &e));
            }
        }
    }

    (items, failures)
}

fn file_name_of(path: &Path) -> MockupResult<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .context("input path has no usable file name")
}
