mod locator;
mod task;

pub use locator::{Positional, TaskLocator};
pub use task::{Task, UNSET_TIMESTAMP, local_now};
