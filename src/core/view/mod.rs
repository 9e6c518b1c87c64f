pub mod controls;
pub mod status;
pub mod steps;
pub mod update;
pub mod view_state;

pub use controls::ControlSnapshot;
pub use status::{ViewUpdateReport, ViewWarning};
pub use steps::{ViewSteps, ViewStepsError};
pub use update::step_view;
pub use view_state::{ViewState, ViewStateError};
