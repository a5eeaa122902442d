pub mod constants;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod glyphs;
pub mod hands;
pub mod input;
pub mod interaction;
pub mod library;
pub mod simulator;
pub mod state;
pub mod tracer;
pub mod tracking;

pub use error::{HoloError, Result};
pub use geometry::*;
pub use gesture::*;
pub use hands::*;
pub use input::*;
pub use interaction::*;
pub use library::*;
pub use simulator::*;
pub use state::*;
pub use tracer::*;
pub use tracking::*;
