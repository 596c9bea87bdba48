// Startup module - displays banner and module loading status
//
// Shows version info, the config file in use, and which optional modules
// are active, before the TUI takes over the screen.

use crate::catalog::Catalog;
use crate::config::{Config, Features, VERSION};

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// Module loading result for display
pub struct ModuleStatus {
    pub name: &'static str,
    pub enabled: bool,
    pub description: &'static str,
}

/// Print the startup banner and module loading status
/// This runs before the TUI takes over the screen (or in headless mode)
pub fn print_startup(config: &Config, catalog: &Catalog) {
    use colors::*;

    // Banner
    println!();
    println!("  {BOLD}{MAGENTA}degenforge{RESET} {DIM}v{VERSION}{RESET}");
    println!("  {DIM}Trait selection and mint studio for Degen NFTs{RESET}");
    println!();

    // Config file status
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("  {DIM}Config:{RESET} {GREEN}\u{2713}{RESET} {}", path.display());
        } else {
            println!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }
    println!();

    // Module loading
    println!("  {DIM}Loading modules...{RESET}");

    let modules = get_module_status(config);
    for module in &modules {
        print_module_status(module);
    }

    println!();

    // Catalog summary
    let locked = catalog.iter().filter(|t| !t.eligible).count();
    println!(
        "  {MAGENTA}\u{25b8}{RESET} Catalog: {BOLD}{}{RESET} traits {DIM}({} locked){RESET}",
        catalog.len(),
        locked
    );
    if let Some(fid) = &config.fid {
        println!("  {MAGENTA}\u{25b8}{RESET} FID preset: {BOLD}#{fid}{RESET}");
    }
    println!();
}

/// Get status of all modules based on config
fn get_module_status(config: &Config) -> Vec<ModuleStatus> {
    let Features { session_log, stats } = &config.features;

    vec![
        ModuleStatus {
            name: "catalog",
            enabled: true, // Core, always on
            description: "Trait catalog",
        },
        ModuleStatus {
            name: "eligibility",
            enabled: true, // Core, always on (static stub)
            description: "Eligibility gates",
        },
        ModuleStatus {
            name: "tui",
            enabled: config.enable_tui,
            description: "Terminal interface",
        },
        ModuleStatus {
            name: "session-log",
            enabled: *session_log,
            description: "JSONL event logging",
        },
        ModuleStatus {
            name: "stats",
            enabled: *stats,
            description: "Session counters",
        },
    ]
}

/// Print a single module's status
fn print_module_status(module: &ModuleStatus) {
    use colors::*;

    let (icon, style) = if module.enabled {
        (format!("{GREEN}\u{2713}{RESET}"), "")
    } else {
        (format!("{DIM}\u{25cb}{RESET}"), DIM)
    };

    println!(
        "    {icon} {style}{:<12}{RESET} {DIM}{}{RESET}",
        module.name, module.description
    );
}

/// Print startup messages to the TUI log panel
pub fn log_startup(config: &Config, catalog: &Catalog) {
    tracing::info!("degenforge v{}", VERSION);

    let modules = get_module_status(config);
    for module in &modules {
        let icon = if module.enabled { "\u{2713}" } else { "\u{25cb}" };
        tracing::info!("  {} {} - {}", icon, module.name, module.description);
    }

    tracing::info!(
        "\u{25b8} Catalog loaded: {} traits ({} locked)",
        catalog.len(),
        catalog.iter().filter(|t| !t.eligible).count()
    );

    tracing::info!("Ready. Select up to 4 traits and mint.");
}
