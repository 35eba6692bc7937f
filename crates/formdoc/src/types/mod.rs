mod tristate;
mod value;

pub use tristate::TriState;
pub use value::{InputMap, Record, Value, resolve};
