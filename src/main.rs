use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sobgen::{
    create_standard_schema, generate_typescript, DescribeDirectory, DescribeFetcher,
    GeneratorConfig,
};

/// Generate typed TypeScript classes from Salesforce SObject describes
#[derive(Parser, Debug)]
#[command(name = "sobgen")]
#[command(version)]
#[command(about = "Generate typed SObject classes from Salesforce describe metadata", long_about = None)]
struct Cli {
    /// JSON config listing the SObjects to generate
    #[arg(short, long, value_name = "FILE")]
    config: PathBuf,

    /// Directory of `<ApiName>.json` describe results (default: built-in standard objects)
    #[arg(short, long, value_name = "DIR")]
    describes: Option<PathBuf>,

    /// Output file (overrides `outPath`; stdout when neither is set)
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Module to import the runtime from
    #[arg(long, value_name = "NAME")]
    runtime_module: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so generated output can be piped from stdout
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let cli = Cli::parse();

    let mut config = GeneratorConfig::load(&cli.config).await?;
    if let Some(module) = cli.runtime_module {
        config.emit.runtime_module = module;
    }
    let out_path = cli.out.or(config.out_path.take());

    let fetcher: Box<dyn DescribeFetcher> = match cli.describes {
        Some(dir) => Box::new(DescribeDirectory::new(dir)),
        None => {
            tracing::warn!("No describe directory given; using built-in standard objects");
            Box::new(create_standard_schema())
        }
    };

    let object_count = config.sobjects.len();
    let output = generate_typescript(config.sobjects, fetcher.as_ref(), config.emit).await?;

    match out_path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
            }
            tokio::fs::write(&path, output)
                .await
                .with_context(|| format!("Cannot write '{}'", path.display()))?;
            tracing::info!(objects = object_count, path = %path.display(), "Generated declarations");
        }
        None => print!("{}", output),
    }

    Ok(())
}
