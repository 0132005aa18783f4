use crate::patterns::{PatternTable, KEYWORDS};
use crate::types::Action;

pub const MIN_CONFIDENCE: f64 = 0.3;

#[derive(Debug, Clone)]
pub struct BestMatch {
    pub action: Action,
    pub target: String,
    pub confidence: f64,
}

// Scans every pattern of every action and keeps the single highest score.
// Comparison is strict, so the first match in table order wins exact ties.
pub fn best_match(input: &str, table: &PatternTable) -> Option<BestMatch> {
    let mut best: Option<BestMatch> = None;
    let mut best_confidence = 0.0_f64;

    for (action, patterns) in table.iter() {
        for pattern in patterns {
            if let Some(caps) = pattern.captures(input) {
                let confidence = score(input);
                if confidence > best_confidence {
                    let target = caps
                        .get(1)
                        .map(|m| m.as_str().to_string())
                        .unwrap_or_default();
                    best = Some(BestMatch {
                        action: *action,
                        target,
                        confidence,
                    });
                    best_confidence = confidence;
                }
            }
        }
    }

    if best_confidence > MIN_CONFIDENCE {
        best
    } else {
        None
    }
}

// 0.7 for any match, +0.1 per trigger keyword present, +0.1 for inputs
// longer than three words, clamped at 1.0. The keyword boost is uncapped
// before the clamp.
pub fn score(input: &str) -> f64 {
    let mut confidence: f64 = 0.7;
    for keyword in KEYWORDS {
        if input.contains(keyword) {
            confidence += 0.1;
        }
    }
    if input.split_whitespace().count() > 3 {
        confidence += 0.1;
    }
    confidence.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PatternTable {
        PatternTable::compile().unwrap()
    }

    #[test]
    fn score_is_deterministic() {
        let input = "organize my downloads folder";
        assert_eq!(score(input), score(input));
    }

    #[test]
    fn score_grows_with_each_distinct_keyword() {
        let one = score("organize x");
        let two = score("organize monitor x");
        let three = score("organize monitor scrape x");
        assert!(two > one);
        assert!(three > two);
    }

    #[test]
    fn score_boosts_longer_sentences() {
        assert!(score("organize one two three four") > score("organize x"));
    }

    #[test]
    fn score_never_exceeds_one() {
        let loaded = "organize monitor scrape email schedule analytics please";
        assert_eq!(score(loaded), 1.0);
    }

    #[test]
    fn gibberish_matches_nothing() {
        assert!(best_match("asdkjasd", &table()).is_none());
    }

    #[test]
    fn organize_request_resolves() {
        let found = best_match("organize my downloads", &table()).unwrap();
        assert_eq!(found.action, Action::OrganizeFiles);
        assert!(found.confidence >= 0.7);
    }

    #[test]
    fn first_action_in_table_order_wins_ties() {
        // Matches both email_automation and schedule_task with equal score;
        // email_automation is scanned first.
        let found = best_match("schedule a task to email bob", &table()).unwrap();
        assert_eq!(found.action, Action::EmailAutomation);
    }

    #[test]
    fn capture_group_becomes_target() {
        let found = best_match("scrape the website https://example.com", &table()).unwrap();
        assert_eq!(found.action, Action::WebScraping);
        assert_eq!(found.target, "https://example.com");
    }

    #[test]
    fn patterns_without_groups_leave_target_empty() {
        let found = best_match("monitor my system", &table()).unwrap();
        assert_eq!(found.action, Action::MonitorSystem);
        assert_eq!(found.target, "");
    }
}
