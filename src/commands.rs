use crate::config::{save_config, Config};
use crate::history::{
    action_counts, clear_history, exchange_count, get_db_path, init_db, recent_exchanges,
    save_exchange,
};
use crate::interpreter::{clarify_message, Interpreter, EXECUTE_CONFIDENCE, NO_MATCH_MESSAGE};
use crate::types::Action;
use crate::ui::{print_command, prompt_action, read_line, show_details};
use rusqlite::Connection;
use std::{env, fs, io::Write, path::PathBuf, process::Command as Process};

fn open_history() -> Result<Connection, Box<dyn std::error::Error>> {
    let db_path = get_db_path();
    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;
    Ok(conn)
}

fn run_query(
    interpreter: &Interpreter,
    config: &Config,
    conn: &Connection,
    query: &str,
    yes: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if yes || !config.behavior.confirm_by_default {
        let outcome = interpreter.respond(query);
        println!("{}", outcome.message);
        let (action, parameters, confidence) = match &outcome.command {
            Some(c) => (c.action.name(), c.parameters.clone(), c.confidence),
            None => ("", Vec::new(), 0.0),
        };
        save_exchange(
            conn,
            query,
            action,
            &parameters,
            confidence,
            outcome.executed,
            outcome.succeeded,
            &outcome.message,
        )?;
        return Ok(());
    }

    let command = match interpreter.parse(query) {
        Some(command) => command,
        None => {
            println!("{}", NO_MATCH_MESSAGE);
            save_exchange(conn, query, "", &[], 0.0, false, false, NO_MATCH_MESSAGE)?;
            return Ok(());
        }
    };

    if command.confidence < EXECUTE_CONFIDENCE {
        let message = clarify_message(&command);
        println!("{}", message);
        save_exchange(
            conn,
            query,
            command.action.name(),
            &command.parameters,
            command.confidence,
            false,
            false,
            &message,
        )?;
        return Ok(());
    }

    // Help needs no confirmation; it never runs anything.
    if command.action == Action::Help {
        let (succeeded, message) = interpreter.execute(&command);
        println!("{}", message);
        save_exchange(
            conn,
            query,
            command.action.name(),
            &command.parameters,
            command.confidence,
            true,
            succeeded,
            &message,
        )?;
        return Ok(());
    }

    print_command(&command);

    loop {
        match prompt_action() {
            Some('r') => {
                let (succeeded, message) = interpreter.execute(&command);
                println!("{}", message);
                save_exchange(
                    conn,
                    query,
                    command.action.name(),
                    &command.parameters,
                    command.confidence,
                    true,
                    succeeded,
                    &message,
                )?;
                break;
            }
            Some('?') => show_details(&command),
            Some('q') | None => {
                println!("skipped.");
                save_exchange(
                    conn,
                    query,
                    command.action.name(),
                    &command.parameters,
                    command.confidence,
                    false,
                    false,
                    "skipped",
                )?;
                break;
            }
            _ => {}
        }
    }

    Ok(())
}

pub fn cmd_query(query: &str, config: &Config, yes: bool) -> Result<(), Box<dyn std::error::Error>> {
    let interpreter = Interpreter::new(config)?;
    let conn = open_history()?;
    run_query(&interpreter, config, &conn, query, yes)
}

pub fn cmd_interactive(config: &Config, yes: bool) -> Result<(), Box<dyn std::error::Error>> {
    let interpreter = Interpreter::new(config)?;
    let conn = open_history()?;

    println!("hey - natural language commands");
    println!("type a request, 'help' for examples, 'quit' to leave.");
    println!();

    loop {
        let input = match read_line("hey> ") {
            Some(input) => input,
            None => break,
        };

        if input.is_empty() {
            continue;
        }
        if matches!(input.to_lowercase().as_str(), "quit" | "exit" | "bye") {
            break;
        }

        run_query(&interpreter, config, &conn, &input, yes)?;
        println!();
    }

    println!("bye.");
    Ok(())
}

pub fn cmd_history(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let db_path = get_db_path();
    if !db_path.exists() {
        println!("no history yet.");
        return Ok(());
    }

    let conn = Connection::open(&db_path)?;
    let entries = recent_exchanges(&conn, config.behavior.history_window)?;

    if entries.is_empty() {
        println!("no history yet.");
        return Ok(());
    }

    println!("recent requests:");
    println!();

    for entry in entries {
        let status = if entry.executed {
            if entry.succeeded {
                "+"
            } else {
                "x"
            }
        } else {
            "-"
        };

        println!("{} {}", status, entry.input);
        if !entry.action.is_empty() {
            println!("    {} ({:.2})", entry.action, entry.confidence);
        }
        for (key, value) in &entry.parameters {
            println!("    --{} {}", key, value);
        }
        println!();
    }

    Ok(())
}

pub fn cmd_history_clear() -> Result<(), Box<dyn std::error::Error>> {
    let db_path = get_db_path();
    if !db_path.exists() {
        println!("no history yet.");
        return Ok(());
    }

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;
    let removed = clear_history(&conn)?;
    println!("cleared {} entries", removed);
    Ok(())
}

pub fn cmd_stats() -> Result<(), Box<dyn std::error::Error>> {
    let db_path = get_db_path();
    if !db_path.exists() {
        println!("no history yet.");
        return Ok(());
    }

    let conn = Connection::open(&db_path)?;
    let size_kb = fs::metadata(&db_path)?.len() / 1024;

    println!("usage stats:");
    println!("  requests: {}", exchange_count(&conn));
    for (action, count) in action_counts(&conn)? {
        println!("    {:<18} {}", action, count);
    }
    println!("  size:  {} KB", size_kb);
    println!("  path:  {:?}", db_path);

    Ok(())
}

fn resolve_tool(tool: &str) -> Option<PathBuf> {
    if tool.contains('/') {
        let path = PathBuf::from(tool);
        return path.is_file().then_some(path);
    }
    let path_var = env::var("PATH").unwrap_or_default();
    for dir in path_var.split(':') {
        let candidate = PathBuf::from(dir).join(tool);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

pub fn cmd_doctor(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    println!("diagnostics:");
    println!();

    println!("  tools:");
    let table = crate::dispatch::ToolTable::from_overrides(&config.tools)?;
    for action in Action::ALL {
        if action == Action::Help {
            continue;
        }
        let tool = table.tool_for(action);
        match resolve_tool(tool) {
            Some(path) => println!("    {:<18} ok ({})", action.name(), path.display()),
            None => println!("    {:<18} missing ({})", action.name(), tool),
        }
    }

    let config_path = crate::config::get_config_path();
    print!("  config ... ");
    std::io::stdout().flush().ok();
    if config_path.exists() {
        println!("ok");
    } else {
        println!("using defaults");
    }

    let db_path = get_db_path();
    print!("  history ... ");
    std::io::stdout().flush().ok();
    if db_path.exists() {
        let conn = Connection::open(&db_path)?;
        println!("ok ({} entries)", exchange_count(&conn));
    } else {
        println!("none yet");
    }

    println!();
    Ok(())
}

pub fn cmd_config() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = crate::config::get_config_path();

    if !config_path.exists() {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        save_config(&Config::default())?;
    }

    let editor = env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    Process::new(&editor).arg(&config_path).status()?;

    Ok(())
}
