use crate::types::Action;
use regex::Regex;

pub struct ParamRules {
    url: Regex,
    email: Regex,
    time: Regex,
    task: Regex,
}

impl ParamRules {
    pub fn compile() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            url: Regex::new(r"https?://[^\s]+")?,
            email: Regex::new(r"[\w.-]+@[\w.-]+\.\w+")?,
            time: Regex::new(r"(?:at|in|for)\s+(\d+)\s*(?:am|pm|hours?|minutes?|days?)")?,
            task: Regex::new(r"(?:to|for)\s+(.+)")?,
        })
    }

    // Extraction depends only on the input and the action, not on which
    // pattern matched. Pairs keep insertion order for dispatch flags.
    pub fn extract(&self, input: &str, action: Action) -> Vec<(String, String)> {
        let mut parameters = Vec::new();

        match action {
            Action::OrganizeFiles => {
                let target = if input.contains("downloads") {
                    "~/Downloads"
                } else if input.contains("desktop") {
                    "~/Desktop"
                } else if input.contains("documents") {
                    "~/Documents"
                } else {
                    "~/Downloads"
                };
                parameters.push(("target".to_string(), target.to_string()));
            }
            Action::WebScraping => {
                let url = self
                    .url
                    .find(input)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_else(|| "https://example.com".to_string());
                parameters.push(("url".to_string(), url));
            }
            Action::EmailAutomation => {
                let recipient = self
                    .email
                    .find(input)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_else(|| "user@example.com".to_string());
                parameters.push(("recipient".to_string(), recipient));
            }
            Action::ScheduleTask => {
                if let Some(caps) = self.time.captures(input) {
                    parameters.push(("time".to_string(), caps[1].to_string()));
                }
                if let Some(caps) = self.task.captures(input) {
                    parameters.push(("task".to_string(), caps[1].to_string()));
                }
            }
            _ => {}
        }

        parameters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> ParamRules {
        ParamRules::compile().unwrap()
    }

    fn lookup<'a>(parameters: &'a [(String, String)], key: &str) -> Option<&'a str> {
        parameters
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn organize_target_defaults_to_downloads() {
        let parameters = rules().extract("organize my files", Action::OrganizeFiles);
        assert_eq!(lookup(&parameters, "target"), Some("~/Downloads"));
    }

    #[test]
    fn organize_target_prefers_named_location() {
        let parameters = rules().extract("sort my desktop", Action::OrganizeFiles);
        assert_eq!(lookup(&parameters, "target"), Some("~/Desktop"));

        let parameters = rules().extract("clean up my documents", Action::OrganizeFiles);
        assert_eq!(lookup(&parameters, "target"), Some("~/Documents"));
    }

    #[test]
    fn scraping_extracts_first_url() {
        let parameters = rules().extract(
            "scrape the website https://example.com",
            Action::WebScraping,
        );
        assert_eq!(lookup(&parameters, "url"), Some("https://example.com"));
    }

    #[test]
    fn scraping_falls_back_to_placeholder_url() {
        let parameters = rules().extract("scrape the page", Action::WebScraping);
        assert_eq!(lookup(&parameters, "url"), Some("https://example.com"));
    }

    #[test]
    fn email_extracts_recipient() {
        let parameters = rules().extract(
            "send an email to test@example.com",
            Action::EmailAutomation,
        );
        assert_eq!(lookup(&parameters, "recipient"), Some("test@example.com"));
    }

    #[test]
    fn email_falls_back_to_placeholder_recipient() {
        let parameters = rules().extract("automate my emails", Action::EmailAutomation);
        assert_eq!(lookup(&parameters, "recipient"), Some("user@example.com"));
    }

    #[test]
    fn schedule_extracts_time_and_task() {
        let parameters = rules().extract(
            "remind me to run backups at 9 pm",
            Action::ScheduleTask,
        );
        assert_eq!(lookup(&parameters, "time"), Some("9"));
        assert_eq!(lookup(&parameters, "task"), Some("run backups at 9 pm"));
    }

    #[test]
    fn schedule_with_neither_clause_is_empty() {
        let parameters = rules().extract("schedule a job now", Action::ScheduleTask);
        assert!(parameters.is_empty());
    }

    #[test]
    fn schedule_keeps_time_before_task() {
        let parameters = rules().extract(
            "set a reminder for 3 pm to water the plants",
            Action::ScheduleTask,
        );
        let keys: Vec<&str> = parameters.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["time", "task"]);
    }

    #[test]
    fn other_actions_carry_no_parameters() {
        assert!(rules().extract("monitor my system", Action::MonitorSystem).is_empty());
        assert!(rules().extract("show me analytics", Action::Analytics).is_empty());
        assert!(rules().extract("help", Action::Help).is_empty());
    }
}
