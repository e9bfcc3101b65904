//! Local UI state for the layout shell: the off-canvas sidebar flag, the
//! per-group expand state of the navigation tree and the user menu.

use std::collections::BTreeSet;

use crate::icon::IconKind;

/// Owned by the root layout; only matters below the mobile breakpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellState {
    sidebar_open: bool,
}

impl ShellState {
    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
        log::debug!("mobile sidebar open: {}", self.sidebar_open);
    }

    /// Returns whether the flag changed.
    pub fn close_sidebar(&mut self) -> bool {
        let was_open = self.sidebar_open;
        self.sidebar_open = false;
        was_open
    }
}

/// Which navigation groups are expanded. Several may be open at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavExpansion {
    open: BTreeSet<&'static str>,
}

impl NavExpansion {
    pub fn is_open(&self, group_id: &str) -> bool {
        self.open.contains(group_id)
    }

    /// Flip one group; returns the new state.
    pub fn toggle(&mut self, group_id: &'static str) -> bool {
        let now_open = if self.open.remove(group_id) {
            false
        } else {
            self.open.insert(group_id);
            true
        };
        log::debug!("nav group '{}' expanded: {}", group_id, now_open);
        now_open
    }
}

/// Entries of the avatar dropdown. None of them are wired to a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Profile,
    Settings,
    Billing,
    Projects,
    LogOut,
}

impl UserAction {
    /// Menu order; a separator precedes `LogOut`.
    pub const ALL: [UserAction; 5] = [
        UserAction::Profile,
        UserAction::Settings,
        UserAction::Billing,
        UserAction::Projects,
        UserAction::LogOut,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UserAction::Profile => "Profile",
            UserAction::Settings => "Settings",
            UserAction::Billing => "Billing",
            UserAction::Projects => "Projects",
            UserAction::LogOut => "Log out",
        }
    }

    pub fn icon(self) -> IconKind {
        match self {
            UserAction::Profile => IconKind::User,
            UserAction::Settings => IconKind::Settings,
            UserAction::Billing => IconKind::CreditCard,
            UserAction::Projects => IconKind::FileText,
            UserAction::LogOut => IconKind::LogOut,
        }
    }

    pub fn is_destructive(self) -> bool {
        self == UserAction::LogOut
    }
}

/// Open/closed flag of the avatar dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserMenuState {
    open: bool,
}

impl UserMenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Dismiss without picking, on an outside click or Escape. Returns
    /// whether the menu was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }

    /// Picking an entry closes the menu; the action itself is a no-op.
    pub fn choose(&mut self, action: UserAction) -> UserAction {
        self.open = false;
        log::debug!("user menu action selected: {}", action.label());
        action
    }
}
