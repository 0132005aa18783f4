use crate::types::Command;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    terminal,
};
use std::io::Write;

pub fn print_command(command: &Command) {
    println!();
    println!("  {}", command.action.title());
    for (key, value) in &command.parameters {
        println!("    --{} {}", key, value);
    }
    println!();
}

pub fn show_details(command: &Command) {
    println!();
    println!("  action:     {}", command.action.name());
    if !command.target.is_empty() {
        println!("  target:     {}", command.target);
    }
    println!("  confidence: {:.2}", command.confidence);
    for (key, value) in &command.parameters {
        println!("  --{} {}", key, value);
    }
    println!();
}

pub fn prompt_action() -> Option<char> {
    eprint!("[enter]run [?]details [q]skip ");
    std::io::stderr().flush().ok();
    terminal::enable_raw_mode().ok()?;
    let result = loop {
        if event::poll(std::time::Duration::from_millis(100)).ok()? {
            if let Event::Key(k) = event::read().ok()? {
                match k.code {
                    KeyCode::Enter | KeyCode::Char('y') => break Some('r'),
                    KeyCode::Char('?') => break Some('?'),
                    KeyCode::Char('q') | KeyCode::Char('n') | KeyCode::Esc => break Some('q'),
                    KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                        break Some('q')
                    }
                    _ => {}
                }
            }
        }
    };
    terminal::disable_raw_mode().ok();
    eprintln!();
    result
}

pub fn read_line(prompt: &str) -> Option<String> {
    eprint!("{}", prompt);
    std::io::stderr().flush().ok();
    let mut input = String::new();
    match std::io::stdin().read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input.trim().to_string()),
        Err(_) => None,
    }
}
