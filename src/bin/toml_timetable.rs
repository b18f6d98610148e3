use anyhow::Context;
use clap::Parser;
use remedial_timetable::core::{ConfigProvider, Pipeline};
use remedial_timetable::utils::error::ErrorSeverity;
use remedial_timetable::utils::{logger, validation::Validate};
use remedial_timetable::{LocalStorage, RemedialPipeline, TimetableEngine, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-timetable")]
#[command(about = "Remedial timetable generator driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "timetable.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Extract and assign, then print the result without writing any files
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 初始化日誌 (設定檔的 log_level 作為預設等級)
    logger::init_cli_logger_with(&logger::default_directive(
        args.verbose,
        config.log_level(),
    ));

    tracing::info!("🚀 Starting TOML-based remedial timetable tool");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config, &args);

    let storage = LocalStorage::new(config.base_dir().to_string());

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        let pipeline = RemedialPipeline::new(storage, config);
        return perform_dry_run(&pipeline).await;
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let pipeline = RemedialPipeline::new(storage, config);
    let engine = TimetableEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Remedial timetable generated");
            println!("✅ Remedial timetable generated");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Timetable generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    let layout = config.layout();

    println!("📋 Configuration Summary:");
    println!(
        "  Pipeline: {} v{}",
        config.pipeline.name, config.pipeline.version
    );
    println!("  Input: {}", config.source.input_path);
    println!("  Base dir: {}", config.base_dir());
    println!("  Output: {}", config.output_path());
    println!("  Formats: {}", config.load.output_formats.join(", "));
    println!("  Days: {}", layout.days.join(", "));
    println!("  Slots: {}", layout.slots.len());
    println!("  Faculty header: {}", layout.faculty_header);

    if let Some(bundle) = config.bundle_name() {
        println!("  Bundle: {} (ZIP)", bundle);
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

async fn perform_dry_run(
    pipeline: &RemedialPipeline<LocalStorage, TomlConfig>,
) -> anyhow::Result<()> {
    let document = pipeline
        .extract()
        .await
        .context("failed to read the source timetable")?;
    let timetable = pipeline
        .transform(document)
        .await
        .context("failed to build the remedial timetable")?;

    println!("🔍 Dry Run Analysis:");
    println!();

    println!("🕒 Free slots ({} total):", timetable.free_slot_count());
    for (day, slots) in &timetable.free_slots {
        if slots.is_empty() {
            println!("  {}: none", day);
        } else {
            println!("  {}: {}", day, slots.join(", "));
        }
    }

    println!();
    println!("👥 Faculty roster ({} members):", timetable.roster.len());
    for (acronym, name) in &timetable.roster {
        println!("  {} -> {}", acronym, name);
    }

    println!();
    println!("📊 Rows that would be written: {}", timetable.rows.len());
    for row in timetable.rows.iter().take(10) {
        println!("  {:<10} {:<16} {}", row.day, row.slot, row.teacher);
    }
    if timetable.rows.len() > 10 {
        println!("  ... {} more", timetable.rows.len() - 10);
    }

    println!();
    println!("✅ Dry run complete. Remove --dry-run to write the output files.");

    Ok(())
}
