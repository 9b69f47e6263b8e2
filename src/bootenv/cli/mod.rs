//! Terminal output for the bootenv binary. The only module that writes to
//! stdout.

mod print;

pub(crate) use print::{print_flag_table, print_messages, print_variables};
