use crate::models::Category;

/// Pluggable category inference, see [`categorize`]
pub type Categorizer = fn(&str) -> Category;

const EVENT_KEYWORDS: &[&str] = &["event", "hackathon", "competition"];
const WORKSHOP_KEYWORDS: &[&str] = &["workshop", "seminar", "bootcamp"];
const TEAM_KEYWORDS: &[&str] = &["team", "group", "member"];

/// Infer a category from a filename by case-insensitive keyword match.
///
/// Rules are checked in order events, workshops, team; unmatched names
/// land in `Events`.
pub fn categorize(filename: &str) -> Category {
    let lower = filename.to_lowercase();
    let matches = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    if matches(EVENT_KEYWORDS) {
        Category::Events
    } else if matches(WORKSHOP_KEYWORDS) {
        Category::Workshops
    } else if matches(TEAM_KEYWORDS) {
        Category::Team
    } else {
        Category::Events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hackathon_is_event() {
        assert_eq!(categorize("AI_Hackathon_Event.png"), Category::Events);
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(categorize("DEEP-LEARNING-WORKSHOP.JPG"), Category::Workshops);
        assert_eq!(categorize("ml_Bootcamp_day2.jpeg"), Category::Workshops);
        assert_eq!(categorize("Core_TEAM_2025.webp"), Category::Team);
        assert_eq!(categorize("new-members.png"), Category::Team);
    }

    #[test]
    fn test_event_rule_wins_over_later_rules() {
        assert_eq!(categorize("team_competition.jpg"), Category::Events);
        assert_eq!(categorize("workshop_group_photo.jpg"), Category::Workshops);
    }

    #[test]
    fn test_unmatched_defaults_to_events() {
        assert_eq!(categorize("IMG_2041.jpg"), Category::Events);
        assert_eq!(categorize(""), Category::Events);
    }
}
