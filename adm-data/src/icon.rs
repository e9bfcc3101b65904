//! Icon tags referenced by dataset records.
//!
//! Records only carry the tag; the UI crate owns the lookup from tag to
//! SVG path data.

/// Every icon the dashboard can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    // Navigation
    Dashboard,
    Palette,
    Typography,
    Component,
    Pointer,
    BarChart,
    FileText,
    AppWindow,
    Puzzle,
    Tag,
    ChevronDown,
    Hexagon,
    // System utilization
    Cpu,
    Memory,
    HardDrive,
    // Social platforms
    Facebook,
    Twitter,
    LinkedIn,
    Instagram,
    // Cards and panels
    Cog,
    Users,
    User,
    Dollar,
    BarChartBig,
    Refresh,
    SearchCheck,
    Globe,
    TrendingUp,
    TrendingDown,
    // Top bar
    Menu,
    Search,
    Bell,
    ListChecks,
    Settings,
    LogOut,
    CreditCard,
}
