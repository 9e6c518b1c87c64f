use crate::config::KernelConfig;
use crate::controllers::frame_loop::data::fps_window::FpsWindow;
use crate::controllers::frame_loop::data::frame_data::FrameData;
use crate::controllers::frame_loop::data::frame_stats::FrameStats;
use crate::controllers::frame_loop::errors::FrameError;
use crate::controllers::frame_loop::ports::control_source::ControlSource;
use crate::controllers::frame_loop::ports::frame_presenter::FramePresenter;
use crate::core::actions::generate_fractal::tile_scheduler::TileScheduler;
use crate::core::data::image_size::ImageSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::julia::colour_mapping::quadratic_gradient_map::QuadraticGradientMap;
use crate::core::fractals::julia::params::EscapeParams;
use crate::core::view::controls::ControlSnapshot;
use crate::core::view::status::ViewUpdateReport;
use crate::core::view::steps::ViewSteps;
use crate::core::view::update::step_view;
use crate::core::view::view_state::ViewState;
use log::{debug, info};
use std::time::{Duration, Instant};

pub const FPS_LOG_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameLoopState {
    Running,
    Terminated,
}

/// Owns the view, the frame buffer and the band workers for one session.
#[derive(Debug)]
pub struct FrameLoop {
    config: KernelConfig,
    params: EscapeParams,
    steps: ViewSteps,
    view: ViewState,
    colour_map: QuadraticGradientMap,
    scheduler: TileScheduler,
    pixel_buffer: PixelBuffer,
    state: FrameLoopState,
    frame_count: u64,
    last_render_duration: Duration,
    last_report: ViewUpdateReport,
}

impl FrameLoop {
    pub fn new(config: KernelConfig) -> Result<Self, FrameError> {
        config.validate()?;

        let image_size = config.image_size()?;
        let params = config.escape_params()?;
        let steps = config.view_steps()?;
        let view = config.initial_view()?;
        let colour_map = config.colour_map()?;
        let scheduler = TileScheduler::new(image_size, config.worker_count, config.scheduler)?;

        info!(
            "frame loop configured: {}x{}, c = {} + {}i, zoom {}, {} iterations, radius {}, colours {}",
            image_size.width(),
            image_size.height(),
            view.c().real,
            view.c().imag,
            view.zoom(),
            params.max_iterations(),
            params.boundary_radius(),
            config.colour_map
        );

        Ok(Self {
            config,
            params,
            steps,
            view,
            colour_map,
            scheduler,
            pixel_buffer: PixelBuffer::new(image_size),
            state: FrameLoopState::Running,
            frame_count: 0,
            last_render_duration: Duration::ZERO,
            last_report: ViewUpdateReport::default(),
        })
    }

    /// Applies one frame of controls and renders the result.
    ///
    /// Holding quit terminates the loop without rendering. Once terminated,
    /// further steps do nothing.
    pub fn step(&mut self, controls: ControlSnapshot) -> Result<FrameLoopState, FrameError> {
        if self.state == FrameLoopState::Terminated {
            return Ok(self.state);
        }

        self.last_report = step_view(&mut self.view, controls, &self.steps);

        if self.last_report.quit_requested {
            info!("quit requested after {} frames", self.frame_count);
            self.state = FrameLoopState::Terminated;
            return Ok(self.state);
        }

        self.render()?;

        Ok(self.state)
    }

    /// Polls, steps and presents until the control source asks to quit.
    pub fn run<C, P>(
        &mut self,
        controls: &mut C,
        presenter: &mut P,
    ) -> Result<FrameStats, FrameError>
    where
        C: ControlSource + ?Sized,
        P: FramePresenter + ?Sized,
    {
        let started = Instant::now();
        let first_frame = self.frame_count;
        let mut fps_window = FpsWindow::new(FPS_LOG_INTERVAL, started);

        while self.state == FrameLoopState::Running {
            let frame_start = Instant::now();

            if self.step(controls.poll())? == FrameLoopState::Terminated {
                break;
            }

            presenter.present(&self.frame_data())?;

            let frame_time = frame_start.elapsed();
            debug!(
                "frame {}: render {:.2?}, total {:.2?} ({:.1} fps)",
                self.frame_count,
                self.last_render_duration,
                frame_time,
                1.0 / frame_time.as_secs_f64().max(f64::EPSILON)
            );

            if let Some(fps) = fps_window.record(Instant::now()) {
                self.log_fps(fps);
            }
        }

        Ok(FrameStats {
            frames_rendered: self.frame_count - first_frame,
            elapsed: started.elapsed(),
        })
    }

    /// Rebuilds the buffer and band workers for a new image size.
    ///
    /// The view is kept. On error the loop is left at its previous size.
    pub fn resize(&mut self, image_size: ImageSize) -> Result<(), FrameError> {
        if image_size == self.image_size() {
            return Ok(());
        }

        let scheduler =
            TileScheduler::new(image_size, self.config.worker_count, self.config.scheduler)?;

        self.scheduler = scheduler;
        self.pixel_buffer = PixelBuffer::new(image_size);
        self.config.width = image_size.width();
        self.config.height = image_size.height();

        info!("resized to {}x{}", image_size.width(), image_size.height());

        Ok(())
    }

    #[must_use]
    pub fn frame_data(&self) -> FrameData<'_> {
        FrameData {
            generation: self.frame_count,
            pixel_buffer: &self.pixel_buffer,
            render_duration: self.last_render_duration,
        }
    }

    #[must_use]
    pub fn state(&self) -> FrameLoopState {
        self.state
    }

    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn pixel_buffer(&self) -> &PixelBuffer {
        &self.pixel_buffer
    }

    #[must_use]
    pub fn image_size(&self) -> ImageSize {
        self.pixel_buffer.image_size()
    }

    #[must_use]
    pub fn last_report(&self) -> ViewUpdateReport {
        self.last_report
    }

    #[must_use]
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Logs the frame rate alongside the current view.
    pub fn log_fps(&self, fps: f64) {
        info!(
            "{:.1} fps (zoom {:.3}, c = {:.3} + {:.3}i)",
            fps,
            self.view.zoom(),
            self.view.c().real,
            self.view.c().imag
        );
    }

    fn render(&mut self) -> Result<(), FrameError> {
        let algorithm = JuliaAlgorithm::new(self.view, self.image_size(), self.params);

        let start = Instant::now();
        self.scheduler.render(&mut self.pixel_buffer, &algorithm, &self.colour_map)?;
        self.last_render_duration = start.elapsed();
        self.frame_count += 1;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::controllers::frame_loop::ports::frame_presenter::PresentError;
    use crate::core::actions::generate_fractal::errors::GenerateFractalParallelError;
    use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
    use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
    use crate::core::actions::generate_fractal::tile_scheduler::{
        SchedulerStrategy, TileSchedulerError,
    };
    use crate::input::scripted::ScriptedControls;

    fn small_config(strategy: SchedulerStrategy) -> KernelConfig {
        KernelConfig {
            width: 40,
            height: 30,
            worker_count: 4,
            scheduler: strategy,
            ..KernelConfig::default()
        }
    }

    #[derive(Default)]
    struct RecordingPresenter {
        generations: Vec<u64>,
        buffers: Vec<PixelBuffer>,
    }

    impl FramePresenter for RecordingPresenter {
        fn present(&mut self, frame: &FrameData<'_>) -> Result<(), PresentError> {
            self.generations.push(frame.generation);
            self.buffers.push(frame.pixel_buffer.clone());
            Ok(())
        }
    }

    struct FailingPresenter {}

    impl FramePresenter for FailingPresenter {
        fn present(&mut self, frame: &FrameData<'_>) -> Result<(), PresentError> {
            Err(PresentError::new(frame.generation, "surface lost"))
        }
    }

    #[test_log::test]
    fn test_new_rejects_invalid_config() {
        let config = KernelConfig {
            worker_count: 0,
            ..small_config(SchedulerStrategy::ScopedThreads)
        };

        assert!(matches!(
            FrameLoop::new(config),
            Err(FrameError::Config(ConfigError::Workers(_)))
        ));
    }

    #[test_log::test]
    fn test_quit_terminates_without_rendering() {
        let mut frame_loop = FrameLoop::new(small_config(SchedulerStrategy::RayonPool)).unwrap();

        let state = frame_loop.step(ControlSnapshot::QUIT).unwrap();

        assert_eq!(state, FrameLoopState::Terminated);
        assert_eq!(frame_loop.frame_count(), 0);
        assert!(frame_loop.pixel_buffer().buffer().iter().all(|&b| b == 0));
    }

    #[test_log::test]
    fn test_step_after_termination_is_noop() {
        let mut frame_loop = FrameLoop::new(small_config(SchedulerStrategy::RayonPool)).unwrap();
        frame_loop.step(ControlSnapshot::QUIT).unwrap();
        let view = frame_loop.view();

        let zoom_in = ControlSnapshot {
            zoom_in: true,
            ..ControlSnapshot::default()
        };

        assert_eq!(frame_loop.step(zoom_in).unwrap(), FrameLoopState::Terminated);
        assert_eq!(frame_loop.view(), view);
        assert_eq!(frame_loop.frame_count(), 0);
    }

    #[test_log::test]
    fn test_step_updates_view_then_renders() {
        let mut frame_loop =
            FrameLoop::new(small_config(SchedulerStrategy::ScopedThreads)).unwrap();
        let start_zoom = frame_loop.view().zoom();

        let state = frame_loop
            .step(ControlSnapshot {
                zoom_in: true,
                ..ControlSnapshot::default()
            })
            .unwrap();

        assert_eq!(state, FrameLoopState::Running);
        assert_eq!(frame_loop.frame_count(), 1);
        assert_eq!(frame_loop.view().zoom(), start_zoom * 1.005);
        assert!(frame_loop.last_report().view_changed);
        assert!(frame_loop.pixel_buffer().buffer().iter().any(|&b| b != 0));
    }

    #[test_log::test]
    fn test_both_strategies_match_serial_render() {
        let mut scoped = FrameLoop::new(small_config(SchedulerStrategy::ScopedThreads)).unwrap();
        let mut pooled = FrameLoop::new(small_config(SchedulerStrategy::RayonPool)).unwrap();

        scoped.step(ControlSnapshot::default()).unwrap();
        pooled.step(ControlSnapshot::default()).unwrap();

        let config = small_config(SchedulerStrategy::ScopedThreads);
        let algorithm = JuliaAlgorithm::new(
            config.initial_view().unwrap(),
            config.image_size().unwrap(),
            config.escape_params().unwrap(),
        );
        let mut serial = PixelBuffer::new(config.image_size().unwrap());
        generate_fractal_serial(&mut serial, &algorithm, &config.colour_map().unwrap()).unwrap();

        assert_eq!(scoped.pixel_buffer(), &serial);
        assert_eq!(pooled.pixel_buffer(), &serial);
    }

    #[test_log::test]
    fn test_same_state_renders_identical_frames() {
        let mut frame_loop = FrameLoop::new(small_config(SchedulerStrategy::RayonPool)).unwrap();

        frame_loop.step(ControlSnapshot::default()).unwrap();
        let first = frame_loop.pixel_buffer().clone();
        frame_loop.step(ControlSnapshot::default()).unwrap();

        assert_eq!(frame_loop.pixel_buffer(), &first);
        assert_eq!(frame_loop.frame_count(), 2);
    }

    #[test_log::test]
    fn test_run_presents_every_frame_until_quit() {
        let mut frame_loop = FrameLoop::new(small_config(SchedulerStrategy::RayonPool)).unwrap();
        let zoom_in = ControlSnapshot {
            zoom_in: true,
            ..ControlSnapshot::default()
        };
        let mut controls =
            ScriptedControls::new(vec![ControlSnapshot::default(), zoom_in, zoom_in]);
        let mut presenter = RecordingPresenter::default();

        let stats = frame_loop.run(&mut controls, &mut presenter).unwrap();

        assert_eq!(stats.frames_rendered, 3);
        assert_eq!(presenter.generations, vec![1, 2, 3]);
        assert_eq!(presenter.buffers[0].image_size(), frame_loop.image_size());
        assert_eq!(frame_loop.view().zoom(), 15.0 * 1.005 * 1.005);
        assert_eq!(frame_loop.state(), FrameLoopState::Terminated);
    }

    #[test_log::test]
    fn test_run_propagates_presenter_failure() {
        let mut frame_loop =
            FrameLoop::new(small_config(SchedulerStrategy::ScopedThreads)).unwrap();
        let mut controls = ScriptedControls::new(vec![ControlSnapshot::default(); 5]);

        let result = frame_loop.run(&mut controls, &mut FailingPresenter {});

        assert!(matches!(
            result,
            Err(FrameError::Present(PresentError { generation: 1, .. }))
        ));
        assert_eq!(frame_loop.frame_count(), 1);
        assert_eq!(frame_loop.state(), FrameLoopState::Running);
    }

    #[test_log::test]
    fn test_resize_rebuilds_buffer() {
        let mut frame_loop = FrameLoop::new(small_config(SchedulerStrategy::RayonPool)).unwrap();
        let new_size = ImageSize::new(64, 48).unwrap();

        frame_loop.resize(new_size).unwrap();
        frame_loop.step(ControlSnapshot::default()).unwrap();

        assert_eq!(frame_loop.image_size(), new_size);
        assert_eq!(frame_loop.pixel_buffer().buffer_size(), 64 * 48 * 3);
        assert_eq!(frame_loop.config().height, 48);
    }

    #[test_log::test]
    fn test_resize_below_worker_count_keeps_previous_size() {
        let mut frame_loop = FrameLoop::new(small_config(SchedulerStrategy::RayonPool)).unwrap();
        let old_size = frame_loop.image_size();

        let result = frame_loop.resize(ImageSize::new(64, 3).unwrap());

        assert!(matches!(
            result,
            Err(FrameError::Scheduler(TileSchedulerError::RowBands(_)))
        ));
        assert_eq!(frame_loop.image_size(), old_size);
    }

    struct StubPanicAlgorithm {}

    impl FractalAlgorithm for StubPanicAlgorithm {
        type Success = f64;

        fn compute(&self, _: u32, _: u32) -> Self::Success {
            panic!("stub failure");
        }
    }

    #[test_log::test]
    fn test_worker_panic_is_a_scheduler_frame_error() {
        let config = small_config(SchedulerStrategy::RayonPool);
        let scheduler =
            TileScheduler::new(config.image_size().unwrap(), 4, config.scheduler).unwrap();
        let mut buffer = PixelBuffer::new(config.image_size().unwrap());

        let err: FrameError = scheduler
            .render(&mut buffer, &StubPanicAlgorithm {}, &config.colour_map().unwrap())
            .unwrap_err()
            .into();

        assert!(matches!(
            err,
            FrameError::Scheduler(TileSchedulerError::Generate(
                GenerateFractalParallelError::WorkerPanicked { .. }
            ))
        ));
    }
}
