//! Command registry and canned response tables for the VTERM simulator.
//!
//! The registry is a static, data-driven dispatch table: each command name
//! maps to a handler that is either a fixed string or a pure function of
//! the argument list. Handlers never touch real processes, files, or the
//! network; they return the canned text a teaching terminal shows.
//!
//! The dispatch engine lives in `interpreter`; the bulk content lives in
//! the per-category `*_commands` modules and can be extended without
//! touching the engine.

mod access_commands;
mod database_commands;
mod dev_commands;
mod doc_commands;
mod docker_commands;
mod file_commands;
pub mod help_index;
mod interpreter;
mod monitor_commands;
mod network_commands;
mod pkg_commands;
mod system_commands;
mod util_commands;
mod web_commands;

pub use interpreter::{
    CommandOutput, CommandRegistry, CommandSpec, Handler, ResponderFn, Services,
};

/// Register every built-in command module into a registry.
pub fn register_builtins(reg: &mut CommandRegistry) {
    file_commands::register_file_commands(reg);
    access_commands::register_access_commands(reg);
    pkg_commands::register_pkg_commands(reg);
    system_commands::register_system_commands(reg);
    network_commands::register_network_commands(reg);
    monitor_commands::register_monitor_commands(reg);
    docker_commands::register_docker_commands(reg);
    database_commands::register_database_commands(reg);
    web_commands::register_web_commands(reg);
    dev_commands::register_dev_commands(reg);
    doc_commands::register_doc_commands(reg);
    util_commands::register_util_commands(reg);
}
