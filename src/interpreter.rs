use crate::config::Config;
use crate::dispatch::{run_tool, ToolTable};
use crate::matcher::best_match;
use crate::params::ParamRules;
use crate::patterns::PatternTable;
use crate::types::{Action, Command, ToolOutcome};

// A match above MIN_CONFIDENCE (0.3, in matcher.rs) is only a candidate;
// execution needs 0.5. Anything between is reflected back as a guess.
pub const EXECUTE_CONFIDENCE: f64 = 0.5;

pub const NO_MATCH_MESSAGE: &str =
    "I didn't understand that command. Try 'help' to see available commands.";

pub const HELP_TEXT: &str = r#"hey understands plain-english requests and runs the matching tool.

file management:
  "organize my files"              "clean up my downloads"
  "sort my desktop"                "arrange my documents"

system monitoring:
  "monitor my system"              "check my computer status"
  "how is my mac doing"            "neural engine status"

memory:
  "show my ai memory"              "check my conversations"
  "conversation history"

web scraping:
  "scrape the website https://example.com"
  "extract data from the page"

email:
  "send an email to user@example.com"
  "automate my emails"             "setup email automation"

scheduling:
  "schedule a task for tomorrow"   "remind me to check files"
  "set up a reminder for 3 pm"

analytics:
  "show me analytics"              "performance report"
  "how many files have i organized"

examples:
  hey "organize my downloads folder"
  hey "scrape the website https://news.com"
  hey "send an email to john@company.com"
  hey "schedule a backup task for tonight""#;

#[derive(Debug, Clone)]
pub struct Outcome {
    pub command: Option<Command>,
    pub executed: bool,
    pub succeeded: bool,
    pub message: String,
}

pub struct Interpreter {
    patterns: PatternTable,
    params: ParamRules,
    tools: ToolTable,
    timeout_secs: u64,
}

impl Interpreter {
    pub fn new(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            patterns: PatternTable::compile()?,
            params: ParamRules::compile()?,
            tools: ToolTable::from_overrides(&config.tools)?,
            timeout_secs: config.dispatch.timeout_secs,
        })
    }

    pub fn parse(&self, raw: &str) -> Option<Command> {
        let input = raw.trim().to_lowercase();
        let found = best_match(&input, &self.patterns)?;
        let parameters = self.params.extract(&input, found.action);
        Some(Command {
            action: found.action,
            target: found.target,
            parameters,
            confidence: found.confidence,
        })
    }

    pub fn execute(&self, command: &Command) -> (bool, String) {
        if command.action == Action::Help {
            return (true, HELP_TEXT.to_string());
        }

        let tool = self.tools.tool_for(command.action);
        let title = command.action.title();
        match run_tool(tool, &command.parameters, self.timeout_secs) {
            ToolOutcome::Success(stdout) => {
                (true, format!("{} completed successfully!\n{}", title, stdout))
            }
            ToolOutcome::Failure(stderr) => (false, format!("{} failed:\n{}", title, stderr)),
            ToolOutcome::TimedOut => (false, format!("{} timed out", title)),
            ToolOutcome::Error(e) => {
                (false, format!("Error executing {}: {}", command.action.name(), e))
            }
        }
    }

    pub fn respond(&self, raw: &str) -> Outcome {
        let command = match self.parse(raw) {
            Some(command) => command,
            None => {
                return Outcome {
                    command: None,
                    executed: false,
                    succeeded: false,
                    message: NO_MATCH_MESSAGE.to_string(),
                }
            }
        };

        if command.confidence < EXECUTE_CONFIDENCE {
            let message = clarify_message(&command);
            return Outcome {
                command: Some(command),
                executed: false,
                succeeded: false,
                message,
            };
        }

        let (succeeded, message) = self.execute(&command);
        Outcome {
            command: Some(command),
            executed: true,
            succeeded,
            message,
        }
    }

    pub fn process_input(&self, raw: &str) -> String {
        self.respond(raw).message
    }
}

pub fn clarify_message(command: &Command) -> String {
    format!(
        "I think you want to {}, but I'm not sure. Could you be more specific?",
        command.action.spoken()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interpreter() -> Interpreter {
        Interpreter::new(&Config::default()).unwrap()
    }

    #[test]
    fn organize_request_parses_with_downloads_target() {
        let command = interpreter().parse("organize my downloads").unwrap();
        assert_eq!(command.action, Action::OrganizeFiles);
        assert_eq!(
            command.parameters,
            vec![("target".to_string(), "~/Downloads".to_string())]
        );
        assert!(command.confidence >= 0.7);
    }

    #[test]
    fn parsing_is_deterministic() {
        let hey = interpreter();
        let first = hey.parse("organize my downloads").unwrap();
        let second = hey.parse("organize my downloads").unwrap();
        assert_eq!(first.action, second.action);
        assert_eq!(first.confidence, second.confidence);
        assert_eq!(first.parameters, second.parameters);
    }

    #[test]
    fn input_is_trimmed_and_lowercased() {
        let command = interpreter().parse("  ORGANIZE MY DOWNLOADS  ").unwrap();
        assert_eq!(command.action, Action::OrganizeFiles);
    }

    #[test]
    fn gibberish_yields_no_match_message() {
        assert_eq!(interpreter().process_input("asdkjasd"), NO_MATCH_MESSAGE);
    }

    #[test]
    fn help_short_circuits_without_running_a_tool() {
        // Help is mapped to a sentinel, not an executable; getting the
        // static text back proves nothing was spawned.
        assert_eq!(interpreter().process_input("help"), HELP_TEXT);
    }

    #[test]
    fn low_confidence_asks_for_clarification() {
        let command = Command {
            action: Action::ScheduleTask,
            target: String::new(),
            parameters: Vec::new(),
            confidence: 0.4,
        };
        let message = clarify_message(&command);
        assert!(message.contains("schedule task"));
        assert!(message.contains("more specific"));
    }

    #[test]
    fn failed_tool_produces_failure_banner() {
        let mut config = Config::default();
        config
            .tools
            .insert("monitor_system".to_string(), "false".to_string());
        let hey = Interpreter::new(&config).unwrap();
        let (succeeded, message) = hey.execute(&Command {
            action: Action::MonitorSystem,
            target: String::new(),
            parameters: Vec::new(),
            confidence: 0.8,
        });
        assert!(!succeeded);
        assert!(message.starts_with("Monitor System failed:"));
    }

    #[test]
    fn missing_tool_is_reported_not_propagated() {
        let mut config = Config::default();
        config.tools.insert(
            "analytics".to_string(),
            "/nonexistent/hey-analytics".to_string(),
        );
        let hey = Interpreter::new(&config).unwrap();
        let (succeeded, message) = hey.execute(&Command {
            action: Action::Analytics,
            target: String::new(),
            parameters: Vec::new(),
            confidence: 0.8,
        });
        assert!(!succeeded);
        assert!(message.starts_with("Error executing analytics:"));
    }

    #[test]
    fn successful_tool_produces_success_banner() {
        let mut config = Config::default();
        config
            .tools
            .insert("web_scraping".to_string(), "echo".to_string());
        let hey = Interpreter::new(&config).unwrap();
        let outcome = hey.respond("scrape the website https://example.com");
        assert!(outcome.executed);
        assert!(outcome.succeeded);
        assert!(outcome
            .message
            .starts_with("Web Scraping completed successfully!"));
        assert!(outcome.message.contains("--url https://example.com"));
    }
}
