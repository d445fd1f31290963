use dialoguer::{theme::ColorfulTheme, Confirm};
use strsim::levenshtein;

use crate::config::{Config, ConfigManager};
use crate::store::ExpenseStore;

use super::commands;
use super::errors::{CliError, CommandError};
use super::output;
use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Everything a command handler can reach: the store, the active config and
/// the command table.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub store: ExpenseStore,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub theme: ColorfulTheme,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        Self::with_config(mode, config_manager, config)
    }

    pub fn with_config(
        mode: CliMode,
        config_manager: ConfigManager,
        config: Config,
    ) -> Result<Self, CliError> {
        let store = ExpenseStore::from_config(&config)?;
        tracing::debug!(expenses = store.len(), "expense store ready");
        Ok(Self {
            mode,
            registry: commands::registry(),
            store,
            config_manager,
            config,
            theme: ColorfulTheme::default(),
            running: true,
        })
    }

    pub fn prompt(&self) -> String {
        format!("expenses ({})> ", self.store.len())
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    /// Asks for confirmation in interactive mode; scripts always proceed.
    pub(crate) fn confirm(&self, prompt: &str) -> Result<bool, dialoguer::Error> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            CommandError::UnknownExpense(id) => {
                output::error(format!("Expense `{}` not found.", id));
                output::hint("Use `list` to see expense ids.");
            }
            other => output::error(other),
        }
    }
}
