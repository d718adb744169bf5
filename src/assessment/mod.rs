pub mod category;
pub mod configurator;
pub mod draft;
pub mod handle;
pub mod payload;
pub mod selection;
pub mod sink;
pub mod weights;

pub use category::*;
pub use configurator::*;
pub use draft::*;
pub use handle::*;
pub use payload::*;
pub use selection::*;
pub use sink::*;
pub use weights::{TimeLimit, WeightState, WeightStrategy};
