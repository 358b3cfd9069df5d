pub mod build;
pub mod init;
pub mod transpile;

pub use build::build_command;
pub use init::init_command;
pub use transpile::transpile_command;
