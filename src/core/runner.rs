//! Application runner logic
//!
//! Handles the different ways to run glyphforge: one-shot maintenance
//! flags, then generation followed by the requested exports.

use crate::alphabet::{Alphabet, AlphabetGenerator};
use crate::core::cli::CliArgs;
use crate::core::settings::Settings;
use crate::export::{export_individual, export_json, export_sheet};
use crate::logging;
use crate::style::list_presets;
use anyhow::{anyhow, Context, Result};
use tracing::info;

/// Run glyphforge with the given CLI arguments.
/// Handles special CLI flags and delegates to generation.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    if cli_args.list_presets {
        for name in list_presets() {
            println!("{name}");
        }
        return Ok(());
    }

    let _log_guard = logging::init(cli_args.verbose, cli_args.log_file)?;

    if cli_args.new_config {
        let path = Settings::user_path();
        let written = Settings::write_defaults(&path)
            .with_context(|| format!("Failed to initialize {}", path.display()))?;
        if written {
            println!("Wrote default settings to {}", path.display());
        } else {
            println!("Settings already exist at {}", path.display());
        }
        return Ok(());
    }

    cli_args.validate().map_err(|e| anyhow!(e))?;
    let settings =
        Settings::resolve(cli_args.settings.as_deref()).context("Failed to load settings")?;

    let alphabet = AlphabetGenerator::new(cli_args.seed_or_default(&settings), &settings)
        .with_preset(cli_args.preset_or_default(&settings))
        .with_overrides(cli_args.parsed_overrides()?)
        .generate()
        .context("Failed to generate alphabet")?;

    write_outputs(&cli_args, &alphabet, &settings)?;
    print_summary(&alphabet);
    Ok(())
}

fn write_outputs(cli_args: &CliArgs, alphabet: &Alphabet, settings: &Settings) -> Result<()> {
    if let Some(dir) = &cli_args.output {
        let paths = export_individual(alphabet, dir, &settings.export)?;
        info!("Wrote {} glyph SVGs to {}", paths.len(), dir.display());
    }
    if let Some(path) = &cli_args.sheet {
        export_sheet(alphabet, path, &settings.export)?;
        info!("Wrote specimen sheet to {}", path.display());
    }
    if let Some(path) = &cli_args.json {
        export_json(alphabet, path)?;
        info!("Wrote alphabet JSON to {}", path.display());
    }
    if !cli_args.has_outputs() {
        info!("No output requested; use --output, --sheet or --json to save the alphabet");
    }
    Ok(())
}

/// Print one line per glyph plus the validation findings
fn print_summary(alphabet: &Alphabet) {
    println!(
        "Alphabet for seed {} ({})",
        alphabet.seed,
        alphabet.preset_name.as_deref().unwrap_or("sampled style")
    );
    for (glyph, report) in alphabet.glyphs.iter().zip(&alphabet.reports) {
        let status = if report.passed() { "ok" } else { "check" };
        println!(
            "  {}  {:<16} {:>2} polygons  ink {:>5.1}%  {}",
            glyph.label,
            glyph.template_name,
            glyph.outline.len(),
            report.ink_coverage * 100.0,
            status
        );
        for issue in &report.issues {
            println!("       - {issue}");
        }
    }
    if !alphabet.similar_pairs.is_empty() {
        println!("Similar glyph pairs:");
        for pair in &alphabet.similar_pairs {
            println!(
                "  {} / {}  distance {:.3}",
                alphabet.glyphs[pair.first].label,
                alphabet.glyphs[pair.second].label,
                pair.distance
            );
        }
    }
    println!(
        "{} issues, {} similar pairs",
        alphabet.issue_count(),
        alphabet.similar_pairs.len()
    );
}
