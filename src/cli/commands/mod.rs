mod command_result;
pub mod init;
pub mod scan;
pub mod write;

pub use command_result::*;
