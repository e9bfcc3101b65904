//! Navigation panel content: the link tree, label links and the system
//! utilization readout.

use crate::icon::IconKind;
use crate::tone::Tone;

/// A single entry in the navigation tree.
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: IconKind,
    /// Static highlight flag; not derived from the current location.
    pub is_active: bool,
    pub is_new: bool,
    pub kind: NavKind,
}

/// Leaf link or collapsible group.
#[derive(Debug, Clone, PartialEq)]
pub enum NavKind {
    Link { href: &'static str },
    Group { children: &'static [NavItem] },
}

impl NavItem {
    const fn link(id: &'static str, label: &'static str, icon: IconKind) -> Self {
        Self {
            id,
            label,
            icon,
            is_active: false,
            is_new: false,
            kind: NavKind::Link { href: "#" },
        }
    }

    const fn group(
        id: &'static str,
        label: &'static str,
        icon: IconKind,
        children: &'static [NavItem],
    ) -> Self {
        Self {
            id,
            label,
            icon,
            is_active: false,
            is_new: false,
            kind: NavKind::Group { children },
        }
    }

    const fn active(mut self) -> Self {
        self.is_active = true;
        self
    }

    const fn new_badge(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Child entries, empty for links.
    pub fn children(&self) -> &'static [NavItem] {
        match self.kind {
            NavKind::Group { children } => children,
            NavKind::Link { .. } => &[],
        }
    }

    pub fn href(&self) -> Option<&'static str> {
        match self.kind {
            NavKind::Link { href } => Some(href),
            NavKind::Group { .. } => None,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, NavKind::Group { .. })
    }
}

const THEME_CHILDREN: &[NavItem] = &[
    NavItem::link("colors", "Colors", IconKind::Palette),
    NavItem::link("typography", "Typography", IconKind::Typography),
];

const COMPONENT_CHILDREN: &[NavItem] = &[
    NavItem::link("base", "Base", IconKind::Component),
    NavItem::link("buttons", "Buttons", IconKind::Pointer),
    NavItem::link("charts", "Charts", IconKind::BarChart),
];

const EXTRAS_CHILDREN: &[NavItem] = &[
    NavItem::link("pages", "Pages", IconKind::FileText),
    NavItem::link("apps", "Apps", IconKind::AppWindow),
];

/// The navigation tree, in display order.
pub const NAVIGATION: &[NavItem] = &[
    NavItem::link("dashboard", "Dashboard", IconKind::Dashboard)
        .active()
        .new_badge(),
    NavItem::group("theme", "Theme", IconKind::Palette, THEME_CHILDREN),
    NavItem::group("components", "Components", IconKind::Component, COMPONENT_CHILDREN),
    NavItem::link("widgets", "Widgets", IconKind::Puzzle).new_badge(),
    NavItem::group("extras", "Extras", IconKind::FileText, EXTRAS_CHILDREN),
];

/// A colored label link listed under the navigation tree.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLink {
    pub label: &'static str,
    pub tone: Tone,
    pub href: &'static str,
}

pub const LABELS: &[LabelLink] = &[
    LabelLink {
        label: "Label danger",
        tone: Tone::Destructive,
        href: "#",
    },
    LabelLink {
        label: "Label info",
        tone: Tone::Primary,
        href: "#",
    },
    LabelLink {
        label: "Label warning",
        tone: Tone::Accent,
        href: "#",
    },
];

/// One row of the system utilization readout.
#[derive(Debug, Clone, PartialEq)]
pub struct UtilizationMetric {
    pub id: &'static str,
    pub label: &'static str,
    /// Percentage, 0-100.
    pub value: u8,
    pub details: &'static str,
    pub icon: IconKind,
    pub tone: Tone,
}

pub const SYSTEM_UTILIZATION: &[UtilizationMetric] = &[
    UtilizationMetric {
        id: "cpu",
        label: "CPU USAGE",
        value: 75,
        details: "348 Processes. 1/4 Cores.",
        icon: IconKind::Cpu,
        tone: Tone::Primary,
    },
    UtilizationMetric {
        id: "memory",
        label: "MEMORY USAGE",
        value: 60,
        details: "11444MB/16384MB",
        icon: IconKind::Memory,
        tone: Tone::Destructive,
    },
    UtilizationMetric {
        id: "ssd",
        label: "SSD 1 USAGE",
        value: 90,
        details: "2430GB/2560GB",
        icon: IconKind::HardDrive,
        tone: Tone::Accent,
    },
];

/// Depth-first walk over the whole tree, yielding `(depth, item)`.
pub fn walk(items: &'static [NavItem]) -> Vec<(usize, &'static NavItem)> {
    fn visit(items: &'static [NavItem], depth: usize, out: &mut Vec<(usize, &'static NavItem)>) {
        for item in items {
            out.push((depth, item));
            visit(item.children(), depth + 1, out);
        }
    }

    let mut out = Vec::new();
    visit(items, 0, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_is_shallow() {
        let max_depth = walk(NAVIGATION).iter().map(|(d, _)| *d).max().unwrap();
        assert_eq!(max_depth, 1);
    }

    #[test]
    fn test_groups_have_children_and_links_have_targets() {
        for (_, item) in walk(NAVIGATION) {
            if item.is_group() {
                assert!(!item.children().is_empty(), "{} has no children", item.id);
                assert!(item.href().is_none());
            } else {
                assert_eq!(item.href(), Some("#"));
            }
        }
    }

    #[test]
    fn test_only_dashboard_is_active() {
        let active: Vec<_> = walk(NAVIGATION)
            .into_iter()
            .filter(|(_, item)| item.is_active)
            .map(|(_, item)| item.id)
            .collect();
        assert_eq!(active, vec!["dashboard"]);
    }

    #[test]
    fn test_new_badges() {
        let fresh: Vec<_> = NAVIGATION.iter().filter(|i| i.is_new).map(|i| i.id).collect();
        assert_eq!(fresh, vec!["dashboard", "widgets"]);
    }

    #[test]
    fn test_walk_order() {
        let ids: Vec<_> = walk(NAVIGATION).iter().map(|(_, i)| i.id).collect();
        assert_eq!(
            ids,
            vec![
                "dashboard", "theme", "colors", "typography", "components", "base", "buttons",
                "charts", "widgets", "extras", "pages", "apps",
            ]
        );
    }

    #[test]
    fn test_utilization_percentages() {
        assert_eq!(SYSTEM_UTILIZATION.len(), 3);
        for metric in SYSTEM_UTILIZATION {
            assert!(metric.value <= 100, "{} out of range", metric.id);
        }
    }
}
