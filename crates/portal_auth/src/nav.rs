//! Sidebar entries per role and active-entry matching.

use crate::{
    guard::{is_within, normalize, paths},
    types::Role,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub target: &'static str,
    pub label: &'static str,
    /// Material Symbols icon name.
    pub icon: &'static str,
}

pub const ADMIN_NAV: &[NavEntry] = &[
    NavEntry {
        target: paths::ADMIN_HOME,
        label: "Dashboard",
        icon: "dashboard",
    },
    NavEntry {
        target: paths::ADMIN_SUBMISSIONS,
        label: "Submission Review",
        icon: "fact_check",
    },
    NavEntry {
        target: paths::ADMIN_PENDING_SUBMISSIONS,
        label: "Pending Submissions",
        icon: "pending_actions",
    },
    NavEntry {
        target: paths::ADMIN_PROFILE,
        label: "Profile",
        icon: "person",
    },
];

pub const STUDENT_NAV: &[NavEntry] = &[
    NavEntry {
        target: paths::STUDENT_HOME,
        label: "Dashboard",
        icon: "dashboard",
    },
    NavEntry {
        target: paths::STUDENT_CHALLENGES,
        label: "Challenges",
        icon: "flag",
    },
    NavEntry {
        target: paths::STUDENT_SUBMISSIONS,
        label: "My Submissions",
        icon: "history",
    },
    NavEntry {
        target: paths::STUDENT_PROFILE,
        label: "Profile",
        icon: "person",
    },
];

pub const fn entries_for(role: Role) -> &'static [NavEntry] {
    match role {
        Role::Admin => ADMIN_NAV,
        Role::Student => STUDENT_NAV,
    }
}

/// An entry is active on its own target, and on any path beneath it unless
/// that path is exactly the target of another entry.
pub fn is_active(entry: &NavEntry, siblings: &[NavEntry], path: &str) -> bool {
    let path = normalize(path);
    if path == entry.target {
        return true;
    }
    is_within(path, entry.target)
        && !siblings
            .iter()
            .any(|sibling| sibling.target != entry.target && sibling.target == path)
}

/// Active flag for each entry, in order.
pub fn active_flags(entries: &[NavEntry], path: &str) -> Vec<bool> {
    entries
        .iter()
        .map(|entry| is_active(entry, entries, path))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_labels(entries: &[NavEntry], path: &str) -> Vec<&'static str> {
        entries
            .iter()
            .zip(active_flags(entries, path))
            .filter_map(|(entry, active)| active.then_some(entry.label))
            .collect()
    }

    #[test]
    fn pending_list_does_not_light_up_review() {
        assert_eq!(
            active_labels(ADMIN_NAV, "/admin/submissions/pending"),
            vec!["Pending Submissions"]
        );
    }

    #[test]
    fn submission_detail_lights_up_review() {
        assert_eq!(
            active_labels(ADMIN_NAV, "/admin/submissions/123"),
            vec!["Submission Review"]
        );
        assert_eq!(
            active_labels(ADMIN_NAV, "/admin/submissions"),
            vec!["Submission Review"]
        );
    }

    #[test]
    fn prefix_match_respects_segment_boundary() {
        let entry = NavEntry {
            target: "/student/challenges",
            label: "Challenges",
            icon: "flag",
        };
        assert!(is_active(&entry, STUDENT_NAV, "/student/challenges/7"));
        assert!(is_active(&entry, STUDENT_NAV, "/student/challenges/"));
        assert!(!is_active(&entry, STUDENT_NAV, "/student/challenges-archive"));
    }

    #[test]
    fn nothing_is_active_outside_the_role_tree() {
        assert!(active_labels(STUDENT_NAV, "/admin/dashboard").is_empty());
        assert_eq!(active_labels(STUDENT_NAV, "/student/profile"), vec!["Profile"]);
    }

    #[test]
    fn entries_follow_role() {
        assert_eq!(entries_for(Role::Admin)[0].target, "/admin/dashboard");
        assert_eq!(entries_for(Role::Student)[0].target, "/student/dashboard");
    }
}
