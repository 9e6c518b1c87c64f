//! Window event loop driving the frame loop.

use anyhow::{Context, Result};
use log::{error, info};
use std::time::Instant;
use winit::{
    dpi::LogicalSize,
    event::{Event, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

use crate::config::KernelConfig;
use crate::controllers::frame_loop::{
    ControlSource, FPS_LOG_INTERVAL, FpsWindow, FrameLoop, FrameLoopState, FramePresenter,
};
use crate::core::data::image_size::ImageSize;
use crate::input::gui::keyboard::KeyboardControls;
use crate::presenters::pixels::presenter::PixelsPresenter;

/// Opens a window and renders one frame per redraw until Escape or close.
pub fn run_gui(config: KernelConfig) -> Result<()> {
    let mut frame_loop = FrameLoop::new(config.clone()).context("invalid kernel configuration")?;

    let event_loop = EventLoop::new().context("failed to create event loop")?;

    // pixels borrows the window for the rest of the process
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Julia Explorer")
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)
            .context("failed to create window")?,
    ));

    let mut presenter = PixelsPresenter::new(window).context("failed to create pixels surface")?;
    let (width, height) = presenter.size();
    frame_loop
        .resize(ImageSize::new(width, height)?)
        .context("window size does not suit the worker count")?;

    let mut keyboard = KeyboardControls::default();
    let mut fps_window = FpsWindow::new(FPS_LOG_INTERVAL, Instant::now());
    let mut failure: Option<anyhow::Error> = None;

    event_loop.run(|event, elwt| match event {
        Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => {
                keyboard.request_quit();
                window.request_redraw();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key_code),
                        state,
                        ..
                    },
                ..
            } => keyboard.handle_key_event(key_code, state),
            WindowEvent::Focused(false) => keyboard.reset(),
            WindowEvent::Resized(size) => {
                // minimised windows report a zero size
                let Ok(image_size) = ImageSize::new(size.width, size.height) else {
                    return;
                };

                let resized = presenter
                    .resize(size.width, size.height)
                    .context("failed to resize pixels surface")
                    .and_then(|()| {
                        frame_loop
                            .resize(image_size)
                            .context("failed to resize frame loop")
                    });

                if let Err(err) = resized {
                    error!("{:#}", err);
                    failure = Some(err);
                    elwt.exit();
                }
            }
            WindowEvent::RedrawRequested => {
                let frame = frame_loop
                    .step(keyboard.poll())
                    .context("failed to render frame")
                    .and_then(|state| {
                        if state == FrameLoopState::Running {
                            presenter
                                .present(&frame_loop.frame_data())
                                .context("failed to present frame")?;
                        }
                        Ok(state)
                    });

                match frame {
                    Ok(FrameLoopState::Running) => {
                        if let Some(fps) = fps_window.record(Instant::now()) {
                            frame_loop.log_fps(fps);
                        }
                    }
                    Ok(FrameLoopState::Terminated) => elwt.exit(),
                    Err(err) => {
                        error!("{:#}", err);
                        failure = Some(err);
                        elwt.exit();
                    }
                }
            }
            _ => {}
        },
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;

    if let Some(err) = failure {
        return Err(err);
    }

    info!("window closed after {} frames", frame_loop.frame_count());

    Ok(())
}
