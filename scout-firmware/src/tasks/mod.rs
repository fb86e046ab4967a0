//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod autonomous;
pub mod sonar;
pub mod tick;

pub use autonomous::{autonomous_task, DriveMotor};
pub use sonar::sonar_task;
pub use tick::tick_task;
