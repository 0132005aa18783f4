use crate::types::Action;
use regex::Regex;

pub const KEYWORDS: [&str; 6] = [
    "organize",
    "monitor",
    "scrape",
    "email",
    "schedule",
    "analytics",
];

pub struct PatternTable {
    entries: Vec<(Action, Vec<Regex>)>,
}

impl PatternTable {
    pub fn compile() -> Result<Self, Box<dyn std::error::Error>> {
        // Table order is the tie-break order: earlier actions win equal scores.
        let table: [(Action, &[&str]); 8] = [
            (
                Action::OrganizeFiles,
                &[
                    r"organize\s+(?:my\s+)?(?:files|downloads|desktop|documents)",
                    r"clean\s+up\s+(?:my\s+)?(?:files|downloads|desktop|documents)",
                    r"sort\s+(?:my\s+)?(?:files|downloads|desktop|documents)",
                    r"arrange\s+(?:my\s+)?(?:files|downloads|desktop|documents)",
                    r"organize\s+(?:the\s+)?(?:files\s+in\s+)?(.+)",
                    r"clean\s+up\s+(?:the\s+)?(?:files\s+in\s+)?(.+)",
                ],
            ),
            (
                Action::MonitorSystem,
                &[
                    r"monitor\s+(?:my\s+)?(?:system|computer|mac)",
                    r"check\s+(?:my\s+)?(?:system|computer|mac)\s+(?:status|health)",
                    r"show\s+(?:my\s+)?(?:system|computer|mac)\s+(?:status|metrics)",
                    r"how\s+is\s+(?:my\s+)?(?:system|computer|mac)\s+(?:doing|performing)",
                    r"neural\s+engine\s+(?:status|monitor)",
                ],
            ),
            (
                Action::AiMemory,
                &[
                    r"show\s+(?:my\s+)?(?:ai\s+)?(?:memory|conversations)",
                    r"check\s+(?:my\s+)?(?:ai\s+)?(?:memory|conversations)",
                    r"ai\s+memory\s+(?:status|info)",
                    r"conversation\s+(?:history|log)",
                ],
            ),
            (
                Action::WebScraping,
                &[
                    r"scrape\s+(?:the\s+)?(?:website|site|page)\s+(.+)",
                    r"extract\s+(?:data\s+from\s+)?(?:the\s+)?(?:website|site|page)\s+(.+)",
                    r"get\s+(?:data\s+from\s+)?(?:the\s+)?(?:website|site|page)\s+(.+)",
                    r"web\s+scrape\s+(.+)",
                ],
            ),
            (
                Action::EmailAutomation,
                &[
                    r"send\s+(?:an\s+)?(?:email|message)\s+(?:to\s+)?(.+)",
                    r"email\s+(.+)",
                    r"automate\s+(?:my\s+)?(?:emails|email\s+sending)",
                    r"setup\s+(?:email\s+)?(?:automation|workflow)",
                ],
            ),
            (
                Action::ScheduleTask,
                &[
                    r"schedule\s+(?:a\s+)?(?:task|job)\s+(?:for\s+)?(.+)",
                    r"set\s+(?:up\s+)?(?:a\s+)?(?:reminder|task)\s+(?:for\s+)?(.+)",
                    r"remind\s+(?:me\s+)?(?:to\s+)?(.+)",
                    r"automate\s+(?:this\s+)?(?:task|process)",
                ],
            ),
            (
                Action::Analytics,
                &[
                    r"show\s+(?:me\s+)?(?:analytics|stats|statistics)",
                    r"how\s+(?:many|much)\s+(?:files|emails|tasks)\s+(?:have\s+)?(?:i\s+)?(?:organized|sent|completed)",
                    r"performance\s+(?:report|stats)",
                    r"usage\s+(?:statistics|stats)",
                ],
            ),
            (
                Action::Help,
                &[
                    r"help",
                    r"what\s+(?:can\s+)?(?:you\s+)?(?:do|help\s+with)",
                    r"how\s+(?:do\s+)?(?:i\s+)?(?:use|work\s+with)\s+(?:this|hey)",
                    r"commands?",
                    r"options?",
                ],
            ),
        ];

        let mut entries = Vec::new();
        for (action, sources) in table {
            let mut compiled = Vec::with_capacity(sources.len());
            for source in sources {
                compiled.push(Regex::new(&format!("(?i){}", source))?);
            }
            entries.push((action, compiled));
        }
        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Action, Vec<Regex>)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_compiles_and_covers_every_action() {
        let table = PatternTable::compile().unwrap();
        let actions: Vec<Action> = table.iter().map(|(a, _)| *a).collect();
        assert_eq!(actions, Action::ALL.to_vec());
        for (_, patterns) in table.iter() {
            assert!(!patterns.is_empty());
        }
    }

    #[test]
    fn patterns_match_case_insensitively() {
        let table = PatternTable::compile().unwrap();
        let (_, organize) = table.iter().next().unwrap();
        assert!(organize[0].is_match("Organize My Downloads"));
        assert!(organize[0].is_match("organize my downloads"));
    }
}
