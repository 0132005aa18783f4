mod commands;
mod config;
mod dispatch;
mod history;
mod interpreter;
mod matcher;
mod params;
mod patterns;
mod types;
mod ui;

use std::env;

fn print_usage() {
    eprintln!("usage: hey [-y] <request>");
    eprintln!("       hey -i");
    eprintln!("       hey history [clear] | stats | doctor | config");
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = config::load_config();

    let result = match args.get(1).map(|s| s.as_str()) {
        None => commands::cmd_interactive(&config, false),
        Some("history") => {
            if args.get(2).map(|s| s.as_str()) == Some("clear") {
                commands::cmd_history_clear()
            } else {
                commands::cmd_history(&config)
            }
        }
        Some("stats") => commands::cmd_stats(),
        Some("doctor") => commands::cmd_doctor(&config),
        Some("config") => commands::cmd_config(),
        Some("-h") | Some("--help") => {
            print_usage();
            Ok(())
        }
        Some(_) => {
            let mut yes = false;
            let mut interactive = false;
            let mut parts = Vec::new();
            for arg in &args[1..] {
                match arg.as_str() {
                    "-y" | "--yes" => yes = true,
                    "-i" | "--interactive" => interactive = true,
                    _ => parts.push(arg.clone()),
                }
            }
            let query = parts.join(" ");
            if interactive {
                commands::cmd_interactive(&config, yes)
            } else if query.is_empty() {
                print_usage();
                Ok(())
            } else {
                commands::cmd_query(&query, &config, yes)
            }
        }
    };

    if let Err(e) = result {
        eprintln!("hey: {}", e);
        std::process::exit(1);
    }
}
