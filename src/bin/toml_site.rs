use clap::Parser;
use site_etl::config::toml_config::TomlConfig;
use site_etl::utils::{logger, validation::Validate};
use site_etl::{LocalStorage, RenderEngine, SitePipeline};

#[derive(Parser)]
#[command(name = "toml-site")]
#[command(about = "Page build tool with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "site-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - show what would be processed without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based page build");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(monitor) = args.monitor {
        config.monitoring.get_or_insert_with(Default::default).enabled = monitor;
        tracing::info!("🔧 Monitoring overridden to: {}", monitor);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if args.dry_run {
        println!("🔍 Dry run - configuration summary:");
        println!("  Pipeline: {} v{}", config.pipeline.name, config.pipeline.version);
        println!("  Catalog endpoint: {}", config.source.endpoint);
        println!("  Page: {}", config.page.input_path);
        println!("  Service keys: {}", config.page.service_keys.join(", "));
        println!("  Output path: {}", config.load.output_path);
        return Ok(());
    }

    let monitor_enabled = config.monitoring_enabled();
    let storage = LocalStorage::current_dir();
    let pipeline = SitePipeline::new(storage, config);
    let engine = RenderEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Page build completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Page build failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
