//! evpn-deploy - push EVPN configuration to Cumulus Linux switches
//!
//! Usage: evpn-deploy --inventory <FILE> [--config-dir <DIR>] [--dry-run] [--switches <NAME>...]
//!
//! Each switch gets its interfaces and FRR sections from one composite
//! configuration file, then networking is reloaded, FRR restarted and the
//! BGP/EVPN summaries collected.

mod commands;
mod ui;

use clap::Parser;

use evpn_deploy::presentation::{logging, Cli};

use crate::ui::error::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let code = match commands::deploy::cmd_deploy(&cli) {
        Ok(code) => code,
        Err(err) => {
            print_error(&err, cli.json);
            1
        }
    };

    std::process::exit(code);
}
