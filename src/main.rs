use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use scrolltext::{Content, DisplaySink, EvcxrSink, RenderConfig, ScrollRenderer, WriterSink};

/// Render text as a scrollable HTML block
#[derive(Parser, Debug)]
#[command(name = "scrolltext", version, about)]
struct Cli {
    /// Input file (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Container height, any CSS length (overrides the config file)
    #[arg(long)]
    height: Option<String>,

    /// Render a preformatted block with literal newlines
    #[arg(long, conflicts_with = "lines")]
    pre: bool,

    /// Treat each input line as a separate list item
    #[arg(long)]
    lines: bool,

    /// Wrap output in evcxr Jupyter rich-output markers
    #[arg(long)]
    evcxr: bool,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn run<S: DisplaySink>(cli: &Cli, config: RenderConfig, sink: S) -> Result<()> {
    let text = read_input(cli.file.as_ref())?;
    let content = if cli.lines {
        Content::lines(text.lines())
    } else {
        Content::Text(text)
    };

    let mut renderer = ScrollRenderer::with_config(config, sink);
    if cli.pre {
        renderer.render_preformatted(content)?;
    } else {
        renderer.render(content)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    if let Some(height) = &cli.height {
        config.height = height.clone();
    }

    if cli.evcxr {
        run(&cli, config, EvcxrSink::stdout())
    } else {
        run(&cli, config, WriterSink::new(io::stdout()))
    }
}
