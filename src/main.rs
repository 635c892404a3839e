use std::process;

use clap::{Arg, Command};

use jira_qa_bridge::commands::{handle_serve, handle_show_config};

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .value_name("PATH")
        .help("Path to the JSON config file (default: ~/.jira-qa-bridge.json)")
}

fn build_cli() -> Command {
    Command::new("jira-qa-bridge")
        .about("Moves Jira issues that are ready for QA into QA and lists them")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("serve")
                .about("Run the HTTP service")
                .arg(config_arg())
                .arg(
                    Arg::new("listen")
                        .long("listen")
                        .short('l')
                        .value_name("ADDR")
                        .help("Address to listen on, overrides listen_addr"),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Show the resolved configuration")
                .arg(config_arg()),
        )
}

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();

    let result = match matches.subcommand() {
        Some(("serve", sub_matches)) => handle_serve(sub_matches).await,
        Some(("config", sub_matches)) => handle_show_config(sub_matches),
        _ => {
            eprintln!("Unknown command. Use 'jira-qa-bridge --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
