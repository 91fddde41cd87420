//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of sites with the number of usernames each holds.
pub fn print_sites_table(rows: &[(String, usize)]) {
    if rows.is_empty() {
        info("No credentials in this vault yet.");
        tip("Run `passvault add <site> <user>` to store your first credential.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Site", "Usernames"]);

    for (site, count) in rows {
        table.add_row(vec![site.clone(), count.to_string()]);
    }

    println!("{table}");
}

/// Print the usernames stored for one site.
pub fn print_users_table(site: &str, users: &[String]) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![format!("Usernames for {site}")]);

    for user in users {
        table.add_row(vec![user.clone()]);
    }

    println!("{table}");
}
