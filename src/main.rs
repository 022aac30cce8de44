use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use prose_humanizer::config::Config;
use prose_humanizer::{Pipeline, PipelineConfig};
use std::io::{Read, Write};

fn init_logging(config: &Config) -> Result<()> {
    let mut logger_builder = env_logger::Builder::from_default_env();
    logger_builder.filter_level(
        config
            .log_level
            .parse()
            .unwrap_or(log::LevelFilter::Warn),
    );

    if let Some(log_file_path) = &config.log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(log_file_path)
            .with_context(|| format!("Failed to open log file {:?}", log_file_path))?;

        // stdout carries the rewritten text, so records go to stderr and the file
        struct DualWriter {
            file: std::fs::File,
        }

        impl Write for DualWriter {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                std::io::stderr().write_all(buf)?;
                self.file.write_all(buf)?;
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                std::io::stderr().flush()?;
                self.file.flush()
            }
        }

        logger_builder.target(env_logger::Target::Pipe(Box::new(DualWriter { file })));
    }

    logger_builder.init();
    Ok(())
}

fn read_input(config: &Config) -> Result<String> {
    if let Some(text) = &config.text {
        return Ok(text.clone());
    }
    if let Some(path) = &config.input {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {:?}", path));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read text from stdin")?;
    Ok(buf)
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config)?;

    let pipeline_config = match &config.pipeline_config {
        Some(path) => PipelineConfig::from_file(path)?,
        None => PipelineConfig::default(),
    };
    let pipeline = Pipeline::new(pipeline_config);
    info!("Pipeline policy: {:?}", pipeline.config());

    let text = read_input(&config)?;
    if text.trim().is_empty() {
        warn!("Input is empty; nothing to rewrite");
    }

    let variations = config.variations.max(1);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for variation in 0..variations {
        // Variations of an explicit seed are reproducible; without one each is random
        let seed = config.seed.map(|s| s.wrapping_add(variation as u64));
        let report = pipeline.run_with_report(&text, seed);
        info!(
            "Variation {}: seed {}, {} -> {} words",
            variation, report.seed, report.original_word_count, report.output_word_count
        );

        if config.json {
            let line = serde_json::to_string(&report).context("Failed to serialize report")?;
            writeln!(out, "{}", line)?;
        } else {
            if variations > 1 {
                writeln!(out, "--- variation {} (seed {}) ---", variation + 1, report.seed)?;
            }
            writeln!(out, "{}", report.text)?;
        }
    }

    Ok(())
}
