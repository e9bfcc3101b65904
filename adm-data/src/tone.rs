//! Color tags used by datasets.

/// A named color role. The UI crate maps each tone to a CSS value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Primary,
    Accent,
    Destructive,
    Success,
    Warning,
    Pink,
    Sky,
    Blue,
    Amber,
    Red,
    Muted,
    Facebook,
    Twitter,
    LinkedIn,
    Instagram,
}
