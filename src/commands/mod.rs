// Commands module, one file per subcommand

pub mod init;
pub mod parse;
pub mod show;
pub mod versions;
