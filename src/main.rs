// src/main.rs

//! Command-line entry point for `circle-raster`.
//!
//! Prints a text circle by default, writes a PNG with `--output`, or serves
//! PNGs over HTTP with `--http`.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};

use circle_raster::renderer::{render_png, write_text};
use circle_raster::{server, Config, Radius};

/// Draw circles using only integer arithmetic.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Radius of the circle [default: `default_radius` from the config, 3]
    #[arg(short, long, allow_negative_numbers = true)]
    radius: Option<Radius>,

    /// Run an HTTP server on ADDRESS (e.g. :8080) serving circle images.
    /// Example URL: http://localhost:8080?r=42
    #[arg(long, value_name = "ADDRESS")]
    http: Option<String>,

    /// Write the circle as a PNG to PATH instead of printing text
    #[arg(short, long, value_name = "PATH", conflicts_with = "http")]
    output: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the text circle.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => {
            debug!("No config file given, using defaults.");
            Config::default()
        }
    };

    if let Some(addr) = &args.http {
        if let Some(radius) = args.radius {
            warn!(
                "--radius {} has no effect in HTTP mode; requests without ?r= use {}",
                radius, config.default_radius
            );
        }
        info!("Starting circle-raster HTTP server...");
        return server::serve(addr, &config);
    }

    let radius = match args.radius {
        Some(radius) => radius,
        None => config.default_radius()?,
    };
    config.check_radius(radius)?;

    if let Some(path) = &args.output {
        let png = render_png(radius, &config.image)?;
        fs::write(path, &png)
            .with_context(|| format!("Failed to write PNG to {}", path.display()))?;
        info!("Wrote circle of radius {} to {}", radius, path.display());
        return Ok(());
    }

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_text(radius, &config.text, &mut writer)?;
    writer.flush().context("Failed to flush stdout")?;
    Ok(())
}
