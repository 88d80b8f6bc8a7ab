// main.rs - CLI entry point

use vfdbquery::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    println!("🚀 {}", vfdbquery::get_info());

    let validation_result = validate_args(&args)?;
    let settings = validation_result.settings;
    let assembly = validation_result.assembly;

    println!(
        "🧬 Assembly: {} ({} contigs, {} bp, longest {} bp)",
        settings.infile.display(),
        assembly.records,
        assembly.total_bases,
        assembly.longest
    );
    println!("🗄️  Database: {}", settings.database.display());
    println!(
        "🎯 Hit filter: coverage >= {}, identity >= {}%",
        settings.filter.min_coverage, settings.filter.min_identity
    );
    println!("📁 Output directory: {}", settings.output_dir().display());

    if args.dry_run {
        println!("✅ Dry run completed successfully");
        return Ok(());
    }

    match VfdbQuery::new(settings).run()? {
        QueryOutcome::Inactive { .. } => {}
        QueryOutcome::Complete(report) => {
            println!(
                "📊 {} of {} panel virulence factors detected ({} of {} hits kept)",
                report.filtered.tally.detected(),
                TARGET_VOCABULARY.len(),
                report.filtered.summary.kept,
                report.filtered.summary.total
            );
        }
    }
    Ok(())
}
