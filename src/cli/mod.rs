//! 命令行展示层
//!
//! 只通过 [`crate::Graph`] 的只读接口访问图

pub mod commands;
pub mod printer;

pub use commands::{execute_command, execute_script, parse_command, Command, CommandResult};
pub use printer::{PrintStyle, Printer};
