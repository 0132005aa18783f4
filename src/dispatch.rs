use crate::types::{Action, ToolOutcome};
use std::collections::HashMap;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(25);

fn default_tool(action: Action) -> &'static str {
    match action {
        Action::OrganizeFiles => "hey-organize",
        Action::MonitorSystem => "hey-sysmon",
        Action::AiMemory => "hey-memory",
        Action::WebScraping => "hey-scrape",
        Action::EmailAutomation => "hey-email",
        Action::ScheduleTask => "hey-schedule",
        Action::Analytics => "hey-analytics",
        Action::Help => "help",
    }
}

#[derive(Debug)]
pub struct ToolTable {
    overrides: HashMap<Action, String>,
}

impl ToolTable {
    // An override key that names no known action is a configuration bug
    // and is rejected here rather than ignored.
    pub fn from_overrides(
        overrides: &HashMap<String, String>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let mut resolved = HashMap::new();
        for (name, tool) in overrides {
            match Action::from_name(name) {
                Some(action) => {
                    resolved.insert(action, tool.clone());
                }
                None => {
                    return Err(format!("unknown action in [tools] config: {}", name).into());
                }
            }
        }
        Ok(Self { overrides: resolved })
    }

    pub fn tool_for(&self, action: Action) -> &str {
        self.overrides
            .get(&action)
            .map(String::as_str)
            .unwrap_or_else(|| default_tool(action))
    }
}

pub fn run_tool(tool: &str, parameters: &[(String, String)], timeout_secs: u64) -> ToolOutcome {
    let mut invocation = Command::new(tool);
    for (key, value) in parameters {
        invocation.arg(format!("--{}", key)).arg(value);
    }

    let mut child = match invocation
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => return ToolOutcome::Error(e.to_string()),
    };

    let deadline = Instant::now() + Duration::from_secs(timeout_secs);
    loop {
        match child.try_wait() {
            Ok(Some(_)) => break,
            Ok(None) => {
                if Instant::now() >= deadline {
                    // Kill and reap so no child outlives the call.
                    let _ = child.kill();
                    let _ = child.wait();
                    return ToolOutcome::TimedOut;
                }
                std::thread::sleep(POLL_INTERVAL);
            }
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return ToolOutcome::Error(e.to_string());
            }
        }
    }

    match child.wait_with_output() {
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout).to_string();
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            if output.status.success() {
                ToolOutcome::Success(stdout)
            } else {
                ToolOutcome::Failure(stderr)
            }
        }
        Err(e) => ToolOutcome::Error(e.to_string()),
    }
}
