use anyhow::Context;
use clap::Parser;
use quarkit::svg::render_document;
use quarkit::{init_logging, ModuleMatrix, StyleConfig};
use std::io::Read;
use tracing::info;

mod cli;

use cli::Cli;

fn read_matrix(source: &str) -> anyhow::Result<ModuleMatrix> {
    let text = if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read matrix from stdin")?;
        text
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("Failed to read matrix file '{}'", source))?
    };
    Ok(ModuleMatrix::parse(&text)?)
}

fn load_config(cli: &Cli) -> anyhow::Result<StyleConfig> {
    let mut config = match &cli.config {
        Some(path) => StyleConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config '{}'", path.display()))?,
        None => match StyleConfig::default_path() {
            Ok(path) => StyleConfig::load_or_default(&path),
            Err(_) => StyleConfig::default(),
        },
    };

    for (key, value) in &cli.overrides {
        config.set_setting(key, value)?;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging()?;

    let matrix = read_matrix(&cli.matrix)?;
    let config = load_config(&cli)?;
    let renderer = config.build_renderer()?;

    let paths = renderer.render(&matrix);
    info!(
        width = matrix.width(),
        height = matrix.height(),
        style = %config.module.style,
        eye = %config.eye.style,
        "Rendered symbol"
    );

    print!(
        "{}",
        render_document(&paths, matrix.width(), matrix.height(), config.render.margin)
    );

    Ok(())
}
