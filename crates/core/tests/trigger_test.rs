//! Deferred build handshake across threads

mod common;

use common::{FakeToolchain, GREETING_HANDLER};
use plugsmith_core::{AssemblyPipeline, Command, Config, Plugin, deferred};
use std::thread;
use tempfile::TempDir;

#[test]
fn test_build_runs_once_registration_is_ready() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().to_path_buf();
    let (signal, build) = deferred();
    let handle = build.cancel_handle();

    let registration = thread::spawn(move || {
        let mut plugin = Plugin::builder("Async").with_path(path).build().unwrap();
        let mut command = Command::new("ping");
        command.on_use(GREETING_HANDLER).unwrap();
        plugin.add_command(command).unwrap();
        signal.ready(plugin).unwrap();
    });

    let pipeline = AssemblyPipeline::with_toolchain(Config::default(), FakeToolchain::default());
    let artifact = build.wait(&pipeline).unwrap();
    registration.join().unwrap();

    assert!(artifact.path.is_file());
    assert_eq!(artifact.registered_commands, vec!["ping".to_string()]);
    // The pipeline's final step cancels the trigger
    assert!(handle.is_cancelled());
    assert!(!handle.cancel());
}
