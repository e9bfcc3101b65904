//! Stroke icons drawn from a tag-to-path lookup table.

use adm_data::IconKind;
use dioxus::prelude::*;

/// SVG path data (24x24 viewBox, stroked) for each icon tag.
pub fn icon_paths(kind: IconKind) -> &'static [&'static str] {
    match kind {
        IconKind::Dashboard => &["M3 3h7v9H3z", "M14 3h7v5h-7z", "M14 12h7v9h-7z", "M3 16h7v5H3z"],
        IconKind::Palette => &[
            "M12 22a10 10 0 1 1 10-10c0 2.5-2 4-4.5 4H16a2 2 0 0 0-1.5 3.3A1.6 1.6 0 0 1 13 22z",
            "M7.5 10.5h.01",
            "M10.5 6.5h.01",
            "M15.5 7.5h.01",
        ],
        IconKind::Typography => &["M4 20h16", "M6 16l6-12 6 12", "M8 12h8"],
        IconKind::Component => &[
            "M5.5 8.5 9 12l-3.5 3.5L2 12z",
            "M12 2l3.5 3.5L12 9 8.5 5.5z",
            "M18.5 8.5 22 12l-3.5 3.5L15 12z",
            "M12 15l3.5 3.5L12 22l-3.5-3.5z",
        ],
        IconKind::Pointer => &["M3 3l7.07 16.97 2.51-7.39 7.39-2.51z", "M13 13l6 6"],
        IconKind::BarChart => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
        IconKind::FileText => &[
            "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7z",
            "M14 2v4a2 2 0 0 0 2 2h4",
            "M10 9H8",
            "M16 13H8",
            "M16 17H8",
        ],
        IconKind::AppWindow => &[
            "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "M10 4v4",
            "M2 8h20",
            "M6 4v4",
        ],
        IconKind::Puzzle => &[
            "M19.4 14.8a2 2 0 1 0 0-3.6V7a1 1 0 0 0-1-1h-4.2a2 2 0 1 0-3.6 0H6.4a1 1 0 0 0-1 1v4.2a2 2 0 1 1 0 3.6V19a1 1 0 0 0 1 1h12a1 1 0 0 0 1-1z",
        ],
        IconKind::Tag => &[
            "M12.6 2.6A2 2 0 0 0 11.2 2H4a2 2 0 0 0-2 2v7.2a2 2 0 0 0 .6 1.4l8.7 8.7a2.4 2.4 0 0 0 3.4 0l6.6-6.6a2.4 2.4 0 0 0 0-3.4z",
            "M7.5 7.5h.01",
        ],
        IconKind::ChevronDown => &["m6 9 6 6 6-6"],
        IconKind::Hexagon => &[
            "M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z",
        ],
        IconKind::Cpu => &[
            "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "M9 9h6v6H9z",
            "M15 2v2",
            "M15 20v2",
            "M2 15h2",
            "M2 9h2",
            "M20 15h2",
            "M20 9h2",
            "M9 2v2",
            "M9 20v2",
        ],
        IconKind::Memory => &[
            "M6 19v-3",
            "M10 19v-3",
            "M14 19v-3",
            "M18 19v-3",
            "M8 11V9",
            "M16 11V9",
            "M12 11V9",
            "M2 15h20",
            "M2 7a2 2 0 0 1 2-2h16a2 2 0 0 1 2 2v1.1a2 2 0 0 0 0 3.8V17a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2v-5.1a2 2 0 0 0 0-3.8z",
        ],
        IconKind::HardDrive => &[
            "M22 12H2",
            "M5.45 5.11 2 12v6a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-6l-3.45-6.89A2 2 0 0 0 16.76 4H7.24a2 2 0 0 0-1.79 1.11z",
            "M6 16h.01",
            "M10 16h.01",
        ],
        IconKind::Facebook => &["M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"],
        IconKind::Twitter => &[
            "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
        ],
        IconKind::LinkedIn => &[
            "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
            "M2 9h4v12H2z",
            "M4 2a2 2 0 1 1 0 4 2 2 0 0 1 0-4z",
        ],
        IconKind::Instagram => &[
            "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
            "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
            "M17.5 6.5h.01",
        ],
        IconKind::Cog => &[
            "M12 20a8 8 0 1 0 0-16 8 8 0 0 0 0 16z",
            "M12 14a2 2 0 1 0 0-4 2 2 0 0 0 0 4z",
            "M12 2v2",
            "M12 22v-2",
            "M2 12h2",
            "M22 12h-2",
            "M4.93 4.93l1.41 1.41",
            "M19.07 19.07l-1.41-1.41",
            "M4.93 19.07l1.41-1.41",
            "M19.07 4.93l-1.41 1.41",
        ],
        IconKind::Users => &[
            "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
            "M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
            "M22 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        IconKind::User => &[
            "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
            "M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
        ],
        IconKind::Dollar => &["M12 2v20", "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"],
        IconKind::BarChartBig => &["M3 3v18h18", "M7 17v-6h4v6", "M15 17V5h4v12"],
        IconKind::Refresh => &[
            "M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8",
            "M21 3v5h-5",
            "M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16",
            "M8 16H3v5",
        ],
        IconKind::SearchCheck => &[
            "m8 11 2 2 4-4",
            "M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z",
            "m21 21-4.3-4.3",
        ],
        IconKind::Globe => &[
            "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
            "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
            "M2 12h20",
        ],
        IconKind::TrendingUp => &["M22 7 13.5 15.5 8.5 10.5 2 17", "M16 7h6v6"],
        IconKind::TrendingDown => &["M22 17 13.5 8.5 8.5 13.5 2 7", "M16 17h6v-6"],
        IconKind::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
        IconKind::Search => &["M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z", "m21 21-4.3-4.3"],
        IconKind::Bell => &["M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9", "M10.3 21a1.94 1.94 0 0 0 3.4 0"],
        IconKind::ListChecks => &["m3 17 2 2 4-4", "m3 7 2 2 4-4", "M13 6h8", "M13 12h8", "M13 18h8"],
        IconKind::Settings => &[
            "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            "M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-2.82 1.17V21a2 2 0 1 1-4 0v-.09a1.65 1.65 0 0 0-2.82-1.17l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 3.2 14.1H3a2 2 0 1 1 0-4h.09A1.65 1.65 0 0 0 4.6 9a1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06A1.65 1.65 0 0 0 9 4.6V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 2.82 1.17l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 19.4 9c.14.34.4.62.73.77H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z",
        ],
        IconKind::LogOut => &["M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4", "m16 17 5-5-5-5", "M21 12H9"],
        IconKind::CreditCard => &[
            "M4 5h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2z",
            "M2 10h20",
        ],
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    /// Extra classes, e.g. a size modifier (`sm`, `xs`, `lg`)
    #[props(default = String::new())]
    pub class: String,
}

#[component]
pub fn Icon(props: IconProps) -> Element {
    let paths = icon_paths(props.kind);

    rsx! {
        svg {
            class: "adm-icon {props.class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for d in paths.iter() {
                path { d: "{d}" }
            }
        }
    }
}
