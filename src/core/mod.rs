pub mod controller;
pub mod frame;
pub mod input_adapter;
pub mod timer;

pub use controller::{Button, Controller};
pub use frame::{FixedStepFrames, FrameInfo};
pub use input_adapter::WinitController;
pub use timer::Throttled;
