// Text input formats for the command-line tools
pub mod input;

pub use input::{load_config, load_transmissions, parse_transmissions, InputError, InputLine};
