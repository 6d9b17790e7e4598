//! Line-oriented front end for the farm: parses one command per line and
//! renders the result as text. All farm logic lives in `farmstead-farm`.

pub mod command;
pub mod session;

pub use command::{Command, CommandError};
pub use session::execute;
