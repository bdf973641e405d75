use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use floating_chat::config::{self, AppConfig};
use floating_chat::ui::HostApp;
use floating_chat::FloatingChat;
use tokio::runtime::Handle;

#[derive(Parser)]
#[command(
    name = "floating_chat",
    version,
    about = "Floating chat widget with simulated assistant replies"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Start with the chat panel open
    #[arg(long)]
    open: bool,
    /// Seed the random source so replies and delays repeat across runs
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Write the default config to --config and exit
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    // Khởi tạo Logger để debug
    env_logger::init();

    let cli = Cli::parse();

    if cli.mode == Some(Mode::InitConfig) {
        init_config(&cli.config);
        return Ok(());
    }

    let mut app_config = config::load_config(&cli.config);
    if cli.open {
        app_config.start_open = true;
    }
    if cli.seed.is_some() {
        app_config.seed = cli.seed;
    }

    run_widget_host(app_config)
}

fn init_config(path: &str) {
    if let Err(err) = config::save_config(path, &AppConfig::default()) {
        log::error!("Failed to write default config {path}: {err}");
        std::process::exit(1);
    }
    log::info!("Wrote default config to {path}");
}

fn run_widget_host(app_config: AppConfig) -> Result<(), eframe::Error> {
    // Bộ hẹn giờ trả lời chạy trên runtime tokio hiện tại, UI chạy trên main thread
    let runtime = Handle::current();
    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Floating Chat",
        options,
        Box::new(move |cc| {
            let window = app_config.delay_window();
            log::info!(
                "Widget host started (delay window {:?}..{:?})",
                window.min(),
                window.max()
            );

            let chat = FloatingChat::with_tokio(&app_config, runtime.clone());
            Ok(Box::new(HostApp::new(cc, chat)))
        }),
    )
}
