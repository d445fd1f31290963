//! Shell commands that drive the expense form and store.

use crate::domain::{Displayable, ExpenseData, ExpenseId, ExpensePatch, DATE_FORMAT};
use crate::form::{ExpenseForm, FormField, SubmitOutcome};
use crate::utils::build_info;

use super::errors::{CommandError, CommandResult};
use super::output;
use super::registry::{CommandEntry, CommandRegistry};
use super::shell_context::ShellContext;

pub fn registry() -> CommandRegistry {
    let mut registry = CommandRegistry::default();
    registry.register(CommandEntry::new(
        "list",
        "Show expenses, newest first, with their total",
        "list",
        cmd_list,
    ));
    registry.register(CommandEntry::new(
        "add",
        "Record a new expense",
        "add <amount> <YYYY-MM-DD> <description>",
        cmd_add,
    ));
    registry.register(CommandEntry::new(
        "edit",
        "Change fields of an existing expense",
        "edit <id> [amount=<value>] [date=<YYYY-MM-DD>] [description=<text>]",
        cmd_edit,
    ));
    registry.register(CommandEntry::new(
        "delete",
        "Remove an expense",
        "delete <id>",
        cmd_delete,
    ));
    registry.register(CommandEntry::new(
        "config",
        "Show the active configuration",
        "config",
        cmd_config,
    ));
    registry.register(CommandEntry::new(
        "version",
        "Show build information",
        "version",
        cmd_version,
    ));
    registry.register(CommandEntry::new(
        "help",
        "List commands or describe one",
        "help [command]",
        cmd_help,
    ));
    registry.register(CommandEntry::new("exit", "Leave the shell", "exit", cmd_exit));
    registry.alias("ls", "list");
    registry.alias("rm", "delete");
    registry.alias("quit", "exit");
    registry
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let expenses = context.store.expenses();
    output::section("Expenses");
    if expenses.is_empty() {
        output::info("No expenses recorded.");
        return Ok(());
    }
    for expense in &expenses {
        output::line(format!(
            "{:<38} {}  {:>12}  {}",
            expense.id,
            expense.date.format(DATE_FORMAT),
            context.config.format_amount(expense.amount),
            expense.description
        ));
    }
    output::line(format!(
        "Total: {} ({} expenses)",
        context.config.format_amount(expenses.total()),
        expenses.len()
    ));
    Ok(())
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let mut form = ExpenseForm::new();
    form.on_field_change(FormField::Amount, args.first().copied().unwrap_or_default());
    form.on_field_change(FormField::Date, args.get(1).copied().unwrap_or_default());
    form.on_field_change(FormField::Description, args.get(2..).unwrap_or_default().join(" "));

    if let Some(data) = submit_form(&mut form) {
        let id = context.store.add(data);
        output::success(format!("Expense added ({}).", id));
    }
    Ok(())
}

fn cmd_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (raw_id, assignments) = args.split_first().ok_or_else(|| {
        CommandError::InvalidArguments("usage: edit <id> [field=value ...]".into())
    })?;
    let id = ExpenseId::from(*raw_id);
    let expense = context
        .store
        .get(&id)
        .ok_or_else(|| CommandError::UnknownExpense(id.to_string()))?;

    let mut form = ExpenseForm::for_edit(expense);
    for assignment in assignments {
        let (key, value) = assignment.split_once('=').ok_or_else(|| {
            CommandError::InvalidArguments(format!(
                "expected `field=value`, got `{}`",
                assignment
            ))
        })?;
        let field = FormField::from_key(key).ok_or_else(|| {
            CommandError::InvalidArguments(format!(
                "unknown field `{}` (use amount, date or description)",
                key
            ))
        })?;
        form.on_field_change(field, value);
    }

    if let Some(data) = submit_form(&mut form) {
        context.store.update(&id, ExpensePatch::from(data))?;
        output::success(format!("Expense {} updated.", id));
    }
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw_id] = args else {
        return Err(CommandError::InvalidArguments("usage: delete <id>".into()));
    };
    let id = ExpenseId::from(*raw_id);
    let existed = match context.store.get(&id) {
        Some(expense) => {
            let prompt = format!("Delete {}?", expense.display_label());
            if !context.confirm(&prompt)? {
                output::info("Delete cancelled.");
                return Ok(());
            }
            true
        }
        None => false,
    };

    context.store.delete(&id)?;
    if existed {
        output::success(format!("Expense {} deleted.", id));
    } else {
        output::info(format!("No expense with id `{}`; nothing deleted.", id));
    }
    Ok(())
}

fn cmd_config(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Configuration");
    output::line(format!("path: {}", context.config_manager.path().display()));
    output::line(serde_json::to_string_pretty(&context.config)?);
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::line(meta.summary());
    output::line(format!("rustc: {}", meta.rustc));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        let entry = context.registry.get(&name.to_lowercase()).ok_or_else(|| {
            CommandError::InvalidArguments(format!("no help for unknown command `{}`", name))
        })?;
        output::line(format!("{} - {}", entry.name, entry.description));
        output::line(format!("usage: {}", entry.usage));
        return Ok(());
    }

    output::section("Commands");
    for entry in context.registry.list() {
        output::line(format!("{:<10} {}", entry.name, entry.description));
    }
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}

/// Submits the form and prints per-field problems when it is rejected.
fn submit_form(form: &mut ExpenseForm) -> Option<ExpenseData> {
    let mut payload = None;
    match form.submit(|data| payload = Some(data)) {
        SubmitOutcome::Submitted => payload,
        SubmitOutcome::Invalid { fields } => {
            for field in fields {
                let state = form.field(field);
                let reason = state
                    .error()
                    .map(|err| err.to_string())
                    .unwrap_or_else(|| "invalid value".into());
                output::error(format!("{}: {} (got `{}`)", field, reason, state.raw_value));
            }
            if let Some(message) = form.error_message() {
                output::warning(message);
            }
            None
        }
    }
}
