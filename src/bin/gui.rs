use anyhow::{Context, Result};
use julia_explorer::KernelConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => KernelConfig::load(&path)
            .with_context(|| format!("failed to load config from {}", path))?,
        None => KernelConfig::default(),
    };

    julia_explorer::run_gui(config)
}
