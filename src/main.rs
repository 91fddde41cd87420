use clap::Parser;
use passvault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => passvault::cli::commands::init::execute(&cli),
        Commands::Add {
            ref site,
            ref user,
            ref password,
            generate,
            length,
        } => passvault::cli::commands::add::execute(
            &cli,
            site,
            user,
            password.as_deref(),
            generate,
            length,
        ),
        Commands::Get { ref site, ref user } => {
            passvault::cli::commands::get::execute(&cli, site, user)
        }
        Commands::List => passvault::cli::commands::list::execute(&cli),
        Commands::Users { ref site } => passvault::cli::commands::users::execute(&cli, site),
        Commands::Remove {
            ref site,
            ref user,
            force,
        } => passvault::cli::commands::remove::execute(&cli, site, user, force),
        Commands::RemoveSite { ref site, force } => {
            passvault::cli::commands::remove_site::execute(&cli, site, force)
        }
        Commands::Generate {
            length,
            no_upper,
            no_digits,
            no_symbols,
        } => passvault::cli::commands::generate::execute(length, no_upper, no_digits, no_symbols),
        Commands::Completions { shell } => passvault::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        passvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
