//! Percentage bar.

use adm_data::Tone;
use dioxus::prelude::*;

use crate::theme::tone_background;

/// Clamp a percentage into `[0, 100]`; NaN becomes 0.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ProgressBarProps {
    pub value: f64,
    pub tone: Tone,
    /// 8px instead of 6px
    #[props(default = false)]
    pub thick: bool,
}

#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let width = clamp_percent(props.value);
    let color = tone_background(props.tone);
    let class = if props.thick { "adm-progress thick" } else { "adm-progress" };

    rsx! {
        div {
            class: "{class}",
            role: "progressbar",
            "aria-valuenow": "{width}",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            div { style: "width: {width}%; background: {color};" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_percent() {
        assert_eq!(clamp_percent(43.0), 43.0);
        assert_eq!(clamp_percent(140.0), 100.0);
        assert_eq!(clamp_percent(-3.0), 0.0);
        assert_eq!(clamp_percent(f64::NAN), 0.0);
    }
}
