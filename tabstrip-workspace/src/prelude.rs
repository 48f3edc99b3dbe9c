pub use crate::bus::WorkspaceBus;
pub use lifeline::prelude::*;
pub use log::{debug, info, trace, warn};
pub use postage::{sink::Sink, stream::Stream};
