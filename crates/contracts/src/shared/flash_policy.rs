//! Which flash banners get auto-dismissed
//!
//! Two selection policies exist for flash notifications. Only one applies per
//! page; [`FlashPolicy::ContainerFlashes`] is the default.

use serde::{Deserialize, Serialize};

/// Delay before a selected flash banner is closed
pub const DISMISS_DELAY_MS: u32 = 5000;

/// Visual categories that never auto-dismiss under [`FlashPolicy::ExceptPersistent`]
pub const PERSISTENT_CATEGORIES: [&str; 2] = ["warning", "info"];

/// DOM-free description of one notification element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashCandidate {
    /// Direct child of a top-level `.container`
    pub in_container: bool,
    /// Has a `.card-body` ancestor
    pub in_card: bool,
    /// Has a `form` ancestor
    pub in_form: bool,
    /// Visual categories, e.g. "success" for `alert-success`
    pub categories: Vec<String>,
}

impl FlashCandidate {
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashPolicy {
    /// Direct children of the page container, unless inside a card body or a form
    #[default]
    ContainerFlashes,
    /// Every notification except the warning/info categories
    ExceptPersistent,
}

impl FlashPolicy {
    pub fn selects(&self, candidate: &FlashCandidate) -> bool {
        match self {
            FlashPolicy::ContainerFlashes => {
                candidate.in_container && !candidate.in_card && !candidate.in_form
            }
            FlashPolicy::ExceptPersistent => !PERSISTENT_CATEGORIES
                .iter()
                .any(|c| candidate.has_category(c)),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            FlashPolicy::ContainerFlashes => "container_flashes",
            FlashPolicy::ExceptPersistent => "except_persistent",
        }
    }
}

/// Category from a Bootstrap-style class name: "alert-success" -> "success".
/// "alert-dismissible" is a behavior class, not a category.
pub fn category_from_class(class: &str) -> Option<&str> {
    match class.strip_prefix("alert-") {
        Some("dismissible") | Some("") | None => None,
        Some(category) => Some(category),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(
        in_container: bool,
        in_card: bool,
        in_form: bool,
        cats: &[&str],
    ) -> FlashCandidate {
        FlashCandidate {
            in_container,
            in_card,
            in_form,
            categories: cats.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_container_policy() {
        let policy = FlashPolicy::ContainerFlashes;
        assert!(policy.selects(&candidate(true, false, false, &["success"])));
        assert!(policy.selects(&candidate(true, false, false, &["warning"])));
        assert!(!policy.selects(&candidate(false, false, false, &["success"])));
        assert!(!policy.selects(&candidate(true, true, false, &["success"])));
        assert!(!policy.selects(&candidate(true, false, true, &["danger"])));
    }

    #[test]
    fn test_except_persistent_policy() {
        let policy = FlashPolicy::ExceptPersistent;
        assert!(policy.selects(&candidate(false, true, true, &["success"])));
        assert!(policy.selects(&candidate(false, false, false, &[])));
        assert!(!policy.selects(&candidate(true, false, false, &["warning"])));
        assert!(!policy.selects(&candidate(true, false, false, &["danger", "info"])));
    }

    #[test]
    fn test_default_policy() {
        assert_eq!(FlashPolicy::default(), FlashPolicy::ContainerFlashes);
    }

    #[test]
    fn test_policy_serde_names() {
        let p: FlashPolicy = serde_json::from_str("\"except_persistent\"").unwrap();
        assert_eq!(p, FlashPolicy::ExceptPersistent);
        assert_eq!(
            serde_json::to_string(&FlashPolicy::ContainerFlashes).unwrap(),
            format!("\"{}\"", FlashPolicy::ContainerFlashes.code())
        );
    }

    #[test]
    fn test_category_from_class() {
        assert_eq!(category_from_class("alert-success"), Some("success"));
        assert_eq!(category_from_class("alert-info"), Some("info"));
        assert_eq!(category_from_class("alert-dismissible"), None);
        assert_eq!(category_from_class("alert"), None);
        assert_eq!(category_from_class("fade"), None);
    }
}
