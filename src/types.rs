#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    OrganizeFiles,
    MonitorSystem,
    AiMemory,
    WebScraping,
    EmailAutomation,
    ScheduleTask,
    Analytics,
    Help,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::OrganizeFiles,
        Action::MonitorSystem,
        Action::AiMemory,
        Action::WebScraping,
        Action::EmailAutomation,
        Action::ScheduleTask,
        Action::Analytics,
        Action::Help,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Action::OrganizeFiles => "organize_files",
            Action::MonitorSystem => "monitor_system",
            Action::AiMemory => "ai_memory",
            Action::WebScraping => "web_scraping",
            Action::EmailAutomation => "email_automation",
            Action::ScheduleTask => "schedule_task",
            Action::Analytics => "analytics",
            Action::Help => "help",
        }
    }

    pub fn from_name(name: &str) -> Option<Action> {
        Action::ALL.iter().copied().find(|a| a.name() == name)
    }

    pub fn spoken(&self) -> String {
        self.name().replace('_', " ")
    }

    pub fn title(&self) -> String {
        self.name()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone)]
pub struct Command {
    pub action: Action,
    pub target: String,
    pub parameters: Vec<(String, String)>,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome {
    Success(String),
    Failure(String),
    TimedOut,
    Error(String),
}

#[derive(Debug, Clone)]
pub struct Exchange {
    pub input: String,
    pub action: String,
    pub parameters: Vec<(String, String)>,
    pub confidence: f64,
    pub executed: bool,
    pub succeeded: bool,
}
