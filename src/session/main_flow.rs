use crate::command::commands::Effect;
use crate::command::parser::CommandParser;
use crate::core::context::AppContext;
use crate::core::persist::{JsonStore, Store};
use crate::errors::Result;
use crate::logging::{LogTarget, Logger};
use crate::session::models::{Flow, FlowCtrl};
use crate::ui::chrome::UiChrome;
use crate::ui::presenter::{ConsolePresenter, Presenter};

pub struct MainFlow<'a> {
    ctx: &'a mut AppContext,
    parser: CommandParser,
    store: JsonStore,
    presenter: ConsolePresenter,
    logger: Logger,
}

impl<'a> MainFlow<'a> {
    pub fn new(ctx: &'a mut AppContext) -> Self {
        let logger = ctx.logger.clone();
        let store = JsonStore::new(&ctx.data_path);
        Self {
            ctx,
            parser: CommandParser::new(),
            store,
            presenter: ConsolePresenter::new(),
            logger,
        }
    }
}

impl Flow for MainFlow<'_> {
    fn render(&mut self) -> Result<()> {
        self.print_startup();
        self.print_prompt();
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        let line = input.trim();
        if line.is_empty() {
            return Ok(FlowCtrl::Continue);
        }

        let cmd = match self.parser.parse(line) {
            Ok(cmd) => cmd,
            Err(err) => {
                self.report_error(&err.to_string());
                return Ok(FlowCtrl::Continue);
            }
        };

        self.logger
            .info(format!("Command run: {line}"), LogTarget::FileOnly);

        let effect = match cmd.execute(&mut self.ctx.roster, &self.presenter) {
            Ok(effect) => effect,
            Err(err) => {
                self.report_error(&err.to_string());
                return Ok(FlowCtrl::Continue);
            }
        };

        if matches!(effect, Effect::Mutated) {
            // Best-effort persistence: a failed save keeps the in-memory
            // mutation and reports the divergence.
            if let Err(err) = self.store.save(&self.ctx.roster) {
                self.report_error(&format!("Failed to save roster: {err}"));
            }
        }

        match effect {
            Effect::Exit => Ok(FlowCtrl::Finish),
            _ => Ok(FlowCtrl::Continue),
        }
    }
}

impl MainFlow<'_> {
    fn print_startup(&mut self) {
        if self.ctx.startup_displayed {
            return;
        }
        UiChrome::new().print_banner();
        println!();
        println!("Type 'help' for the command guide, 'exit' to leave.");
        println!();
        println!("Roster path: {}", self.ctx.data_path.display());
        println!("Logs path: {}", self.ctx.logs_dir.display());
        println!();
        self.ctx.startup_displayed = true;
    }

    fn print_prompt(&self) {
        UiChrome::new().print_prompt("> ");
    }

    fn report_error(&self, text: &str) {
        self.presenter.error(text);
        self.logger.error(text, LogTarget::FileOnly);
    }
}
