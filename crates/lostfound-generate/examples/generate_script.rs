use std::env;
use std::path::PathBuf;

use lostfound_generate::{GenerateConfig, GenerationEngine};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut config = GenerateConfig::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let raw = args.next().ok_or("missing --seed value")?;
                config.seed = Some(raw.parse()?);
            }
            "--out" => {
                config.output_path = args.next().map(PathBuf::from).ok_or("missing --out path")?;
            }
            "--report" => config.report_path = args.next().map(PathBuf::from),
            _ => return Err(format!("unexpected argument '{arg}'").into()),
        }
    }

    config.resolve_paths(&env::current_dir()?);
    let result = GenerationEngine::new(config).run()?;

    println!("script={}", result.output_path.display());
    println!("seed={}", result.report.seed);
    println!("sha256={}", result.report.sha256);
    Ok(())
}
