use bootenv::api::{CmdMessage, MessageLevel};
use bootenv::model::Variable;
use colored::Colorize;

const NAME_WIDTH: usize = 20;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_variables(vars: &[Variable]) {
    if vars.is_empty() {
        println!("Environment is empty.");
        return;
    }
    for var in vars {
        println!("{}={}", var.name.bold(), var.value);
    }
}

pub(crate) fn print_flag_table(vars: &[Variable]) {
    if vars.is_empty() {
        println!("Environment is empty.");
        return;
    }
    // Pad before coloring; ANSI escapes would break column widths.
    let header = format!("{:<width$} {:<4} {}", "name", "code", "type", width = NAME_WIDTH);
    println!("{}", header.dimmed());
    for var in vars {
        println!(
            "{:<width$} {:<4} {}",
            var.name,
            var.flags.vartype.code(),
            var.flags.vartype,
            width = NAME_WIDTH
        );
    }
}
