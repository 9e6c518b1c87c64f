use anyhow::{Context, Result};
use julia_explorer::{
    ChecksumPresenter, ControlSnapshot, FrameLoop, FrameStats, KernelConfig, ScriptedControls,
};
use log::info;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => KernelConfig::load(&path)
            .with_context(|| format!("failed to load config from {}", path))?,
        None => KernelConfig::default(),
    };

    let (stats, checksum) = run_headless(config, scripted_flight())?;

    info!(
        "rendered {} frames in {:.2?} ({:.1} fps), final frame checksum {:016x}",
        stats.frames_rendered,
        stats.elapsed,
        stats.average_fps(),
        checksum.unwrap_or_default()
    );

    Ok(())
}

/// Zooms in while panning right, then zooms while nudging `c`, then quits.
fn scripted_flight() -> ScriptedControls {
    let zoom_and_pan = ControlSnapshot {
        zoom_in: true,
        pan_right: true,
        ..ControlSnapshot::default()
    };
    let zoom_and_shift_c = ControlSnapshot {
        zoom_in: true,
        c_increase: true,
        ..ControlSnapshot::default()
    };

    ScriptedControls::default()
        .then_hold(zoom_and_pan, 120)
        .then_hold(zoom_and_shift_c, 60)
        .then_hold(ControlSnapshot::QUIT, 1)
}

fn run_headless(
    config: KernelConfig,
    mut controls: ScriptedControls,
) -> Result<(FrameStats, Option<u64>)> {
    let mut frame_loop = FrameLoop::new(config).context("failed to start frame loop")?;
    let mut presenter = ChecksumPresenter::new();

    let stats = frame_loop
        .run(&mut controls, &mut presenter)
        .context("frame loop stopped with an error")?;

    Ok((stats, presenter.last_checksum()))
}
