use clap::Parser;
use nodegen::cli::{run_cli, Cli};
use nodegen::display::print_error;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run_cli(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
