//! Indicator Transitions
//!
//! Pure helpers for the optimistic half of a toggle: which element flips,
//! which classes move, what the label reads, and how counts move.

use crate::config::Indicator;

/// Change to apply to one element for a new toggle state
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<'a> {
    /// Selector of the element to change, resolved inside the form
    pub target: &'a str,
    pub add: &'a [String],
    pub remove: &'a [String],
    pub text: Option<&'a str>,
}

/// Turning on changes the element currently in its off state, and the reverse
pub fn transition(indicator: &Indicator, checked: bool) -> Transition<'_> {
    if checked {
        Transition {
            target: &indicator.off_target,
            add: &indicator.on_classes,
            remove: &indicator.off_classes,
            text: indicator.on_text.as_deref(),
        }
    } else {
        Transition {
            target: &indicator.on_target,
            add: &indicator.off_classes,
            remove: &indicator.on_classes,
            text: indicator.off_text.as_deref(),
        }
    }
}

/// Leading integer of a displayed count, ignoring surrounding whitespace
/// and any trailing text ("12 likes" reads as 12)
pub fn parse_count(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (sign, digits) = match text.as_bytes().first() {
        Some(b'-') => (-1, &text[1..]),
        Some(b'+') => (1, &text[1..]),
        _ => (1, text),
    };
    let end = digits.bytes().take_while(|b| b.is_ascii_digit()).count();
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| n * sign)
}

/// One up when turned on, one down when turned off, never below zero
pub fn adjust_count(count: i64, checked: bool) -> i64 {
    if checked {
        count.saturating_add(1)
    } else {
        count.saturating_sub(1).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ControlConfig;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("12"), Some(12));
        assert_eq!(parse_count("  7\n"), Some(7));
        assert_eq!(parse_count("0"), Some(0));
        assert_eq!(parse_count("-3"), Some(-3));
        assert_eq!(parse_count("+3"), Some(3));
        assert_eq!(parse_count("12 likes"), Some(12));
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("   "), None);
        assert_eq!(parse_count("likes"), None);
        assert_eq!(parse_count("-"), None);
    }

    #[test]
    fn test_adjust_count_moves_by_exactly_one() {
        assert_eq!(adjust_count(5, true), 6);
        assert_eq!(adjust_count(5, false), 4);
        assert_eq!(adjust_count(0, true), 1);
    }

    #[test]
    fn test_adjust_count_floors_at_zero() {
        assert_eq!(adjust_count(0, false), 0);
        assert_eq!(adjust_count(i64::MAX, true), i64::MAX);
    }

    #[test]
    fn test_favorite_icon_transition() {
        let favorite = ControlConfig::favorite();

        let liked = transition(&favorite.indicator, true);
        assert_eq!(liked.target, ".fa-heart");
        assert_eq!(liked.add, ["liked".to_string(), "fa-solid".to_string()]);
        assert_eq!(liked.remove, ["not-liked".to_string(), "fa-regular".to_string()]);
        assert_eq!(liked.text, None);

        let unliked = transition(&favorite.indicator, false);
        assert_eq!(unliked.target, ".fa-heart");
        assert_eq!(unliked.add, liked.remove);
        assert_eq!(unliked.remove, liked.add);
    }

    #[test]
    fn test_mini_follow_icon_transition() {
        let mini = ControlConfig::mini_follow();

        let follow = transition(&mini.indicator, true);
        assert_eq!(follow.target, ".fa-solid.fa-plus");
        assert_eq!(follow.add, ["fa-check".to_string()]);
        assert_eq!(follow.remove, ["fa-plus".to_string()]);

        let unfollow = transition(&mini.indicator, false);
        assert_eq!(unfollow.target, ".fa-solid.fa-check");
        assert_eq!(unfollow.add, ["fa-plus".to_string()]);
        assert_eq!(unfollow.remove, ["fa-check".to_string()]);
    }

    #[test]
    fn test_follow_label_transition() {
        let follow = ControlConfig::follow();

        let on = transition(&follow.indicator, true);
        assert_eq!(on.target, ".follow");
        assert_eq!(on.add, ["followed".to_string()]);
        assert_eq!(on.remove, ["follow".to_string()]);
        assert_eq!(on.text, Some("フォロー中"));

        let off = transition(&follow.indicator, false);
        assert_eq!(off.target, ".followed");
        assert_eq!(off.add, ["follow".to_string()]);
        assert_eq!(off.remove, ["followed".to_string()]);
        assert_eq!(off.text, Some("フォローする"));
    }
}
