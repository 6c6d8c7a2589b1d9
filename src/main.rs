use crate::core::cli::CliPaths;
use crate::core::context::AppContext;
use crate::logging::LogTarget;
use crate::session::main_flow::MainFlow;
use crate::session::prompter::Prompter;

pub mod command;
pub mod core;
pub mod errors;
pub mod extensions;
pub mod logging;
pub mod session;
pub mod ui;

fn main() {
    let paths = match CliPaths::from_env() {
        Ok(paths) => paths,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let mut ctx = match AppContext::new_with_paths(paths.data_path, paths.logs_dir) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let prompter = Prompter::new();
    let flow = MainFlow::new(&mut ctx);

    if let Err(err) = prompter.run(flow) {
        ctx.logger
            .error(format!("{err}"), LogTarget::ConsoleAndFile);
    }
}
