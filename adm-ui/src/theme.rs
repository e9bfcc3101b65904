//! Stylesheet and color lookup.
//!
//! `GLOBAL_CSS` holds everything that does not depend on configuration. The
//! shell offsets and the mobile breakpoint come from [`LayoutConfig`] and are
//! emitted by [`layout_css`].

use adm_data::config::LayoutConfig;
use adm_data::Tone;

/// CSS background for a tone.
pub fn tone_background(tone: Tone) -> &'static str {
    match tone {
        Tone::Primary => "var(--primary)",
        Tone::Accent => "var(--accent)",
        Tone::Destructive => "var(--destructive)",
        Tone::Success => "#22c55e",
        Tone::Warning => "#eab308",
        Tone::Pink => "#ec4899",
        Tone::Sky => "#0ea5e9",
        Tone::Blue => "#3b82f6",
        Tone::Amber => "#f59e0b",
        Tone::Red => "#ef4444",
        Tone::Muted => "#6b7280",
        Tone::Facebook => "#2563eb",
        Tone::Twitter => "#0ea5e9",
        Tone::LinkedIn => "#1e40af",
        Tone::Instagram => "linear-gradient(to bottom right, #facc15, #ec4899, #9333ea)",
    }
}

/// CSS text color for a tone. Gradients fall back to their middle stop.
pub fn tone_text(tone: Tone) -> &'static str {
    match tone {
        Tone::Warning => "#ca8a04",
        Tone::Instagram => "#ec4899",
        other => tone_background(other),
    }
}

/// Root custom properties and the mobile media query.
pub fn layout_css(layout: &LayoutConfig) -> String {
    let mobile_max = layout.mobile_breakpoint_px.saturating_sub(1);
    format!(
        ":root {{ --sidebar-w: {}px; --header-h: {}px; --content-pad: {}px; }}\n\
         @media (max-width: {}px) {{\n\
           .adm-sidebar {{ transform: translateX(-100%); }}\n\
           .adm-sidebar.open {{ transform: translateX(0); }}\n\
           .adm-topbar {{ left: 0; }}\n\
           .adm-content {{ margin-left: 0; }}\n\
           .adm-menu-toggle {{ display: inline-flex; }}\n\
           .adm-overlay {{ display: block; }}\n\
           .adm-search, .adm-breadcrumbs {{ display: none; }}\n\
         }}\n",
        layout.sidebar_width_px,
        layout.header_height_px,
        layout.content_padding_px,
        mobile_max,
    )
}

pub const GLOBAL_CSS: &str = r#"
:root {
  --background: #f3f4f7;
  --foreground: #1f2937;
  --card: #ffffff;
  --border: #e5e7eb;
  --muted-foreground: #6b7280;
  --primary: #321fdb;
  --accent: #f9b115;
  --accent-green: #2eb85c;
  --destructive: #e55353;
  --sidebar: #3c4b64;
  --sidebar-foreground: rgba(255, 255, 255, 0.8);
  --sidebar-accent: rgba(255, 255, 255, 0.05);
  --sidebar-primary: rgba(255, 255, 255, 0.1);
  --sidebar-border: rgba(255, 255, 255, 0.1);
  --radius: 6px;
  --font-body: system-ui, -apple-system, "Segoe UI", sans-serif;
}

* { box-sizing: border-box; }
body { margin: 0; font-family: var(--font-body); background: var(--background); color: var(--foreground); }
a { color: inherit; text-decoration: none; }
button { font: inherit; color: inherit; background: none; border: none; cursor: pointer; }

.adm-icon { width: 20px; height: 20px; flex-shrink: 0; }
.adm-icon.sm { width: 16px; height: 16px; }
.adm-icon.xs { width: 14px; height: 14px; }
.adm-icon.lg { width: 48px; height: 48px; }

/* Shell */
.adm-sidebar {
  position: fixed; top: 0; left: 0; height: 100vh; width: var(--sidebar-w);
  display: flex; flex-direction: column; z-index: 40;
  background: var(--sidebar); color: var(--sidebar-foreground);
  transition: transform 300ms ease-in-out;
}
.adm-brand {
  height: var(--header-h); display: flex; align-items: center; justify-content: center;
  border-bottom: 1px solid var(--sidebar-border); color: #fff; font-size: 20px; font-weight: 600; gap: 8px;
}
.adm-brand .adm-icon { width: 32px; height: 32px; color: var(--primary); }
.adm-nav { flex: 1; overflow-y: auto; padding: 8px; display: flex; flex-direction: column; gap: 4px; }
.adm-nav-item {
  display: flex; align-items: center; gap: 12px; width: 100%; padding: 10px 12px;
  font-size: 14px; border-radius: var(--radius); text-align: left;
}
.adm-nav-item:hover { background: var(--sidebar-accent); }
.adm-nav-item.active { background: var(--sidebar-primary); color: #fff; }
.adm-nav-item.sub { padding-left: 32px; }
.adm-nav-item .adm-chevron { margin-left: auto; transition: transform 200ms; }
.adm-nav-item.expanded .adm-chevron { transform: rotate(180deg); }
.adm-nav-children { margin-left: 22px; border-left: 1px solid var(--sidebar-border); padding-left: 16px; display: flex; flex-direction: column; gap: 4px; }
.adm-badge { margin-left: auto; background: var(--accent-green); color: #fff; font-size: 11px; padding: 2px 6px; border-radius: 4px; }
.adm-nav-heading { padding: 16px 12px 8px; font-size: 11px; text-transform: uppercase; opacity: 0.7; }
.adm-utilization { padding: 16px; border-top: 1px solid var(--sidebar-border); display: flex; flex-direction: column; gap: 12px; }
.adm-utilization .row { display: flex; justify-content: space-between; align-items: center; font-size: 12px; margin-bottom: 2px; }
.adm-utilization .details { font-size: 12px; opacity: 0.6; margin-top: 2px; }

.adm-topbar {
  position: fixed; top: 0; left: var(--sidebar-w); right: 0; height: var(--header-h); z-index: 10;
  display: flex; align-items: center; justify-content: space-between; padding: 0 24px;
  background: var(--card); border-bottom: 1px solid var(--border);
}
.adm-topbar .group { display: flex; align-items: center; gap: 12px; }
.adm-menu-toggle { display: none; }
.adm-breadcrumbs { display: flex; list-style: none; margin: 0; padding: 0; font-size: 14px; color: var(--muted-foreground); gap: 8px; }
.adm-breadcrumbs .current { color: var(--foreground); }
.adm-search { position: relative; }
.adm-search .adm-icon { position: absolute; left: 10px; top: 50%; transform: translateY(-50%); color: var(--muted-foreground); }
.adm-search input { height: 36px; width: 256px; padding-left: 32px; border: 1px solid var(--border); border-radius: var(--radius); }
.adm-icon-button { position: relative; display: inline-flex; align-items: center; justify-content: center; width: 36px; height: 36px; border-radius: var(--radius); }
.adm-icon-button:hover { background: rgba(0, 0, 0, 0.05); }
.adm-ping { position: absolute; top: 6px; right: 6px; width: 8px; height: 8px; border-radius: 50%; background: var(--primary); }
.adm-ping::after { content: ""; position: absolute; inset: 0; border-radius: 50%; background: var(--primary); animation: adm-ping 1s cubic-bezier(0, 0, 0.2, 1) infinite; }
@keyframes adm-ping { 75%, 100% { transform: scale(2); opacity: 0; } }
.adm-avatar { width: 32px; height: 32px; border-radius: 50%; overflow: hidden; background: var(--border); display: inline-flex; align-items: center; justify-content: center; font-size: 14px; }
.adm-avatar img { width: 100%; height: 100%; object-fit: cover; }
.adm-menu-backdrop { position: fixed; inset: 0; z-index: 45; }
.adm-menu { position: absolute; right: 0; top: 44px; width: 224px; background: var(--card); border: 1px solid var(--border); border-radius: var(--radius); box-shadow: 0 10px 30px rgba(0, 0, 0, 0.12); padding: 4px; z-index: 50; }
.adm-menu .label { padding: 8px; }
.adm-menu .label .name { font-size: 14px; font-weight: 500; margin: 0; }
.adm-menu .label .email { font-size: 12px; color: var(--muted-foreground); margin: 4px 0 0; }
.adm-menu hr { border: none; border-top: 1px solid var(--border); margin: 4px 0; }
.adm-menu button { display: flex; align-items: center; gap: 8px; width: 100%; padding: 6px 8px; font-size: 14px; border-radius: 4px; }
.adm-menu button:hover { background: rgba(0, 0, 0, 0.05); }
.adm-menu button.destructive { color: var(--destructive); }

.adm-overlay { display: none; position: fixed; inset: 0; z-index: 30; background: rgba(0, 0, 0, 0.5); }
.adm-content {
  margin-top: var(--header-h); margin-left: var(--sidebar-w); padding: var(--content-pad);
  display: flex; flex-direction: column; gap: 24px; transition: all 300ms ease-in-out;
}

/* Primitives */
.adm-card { background: var(--card); border: 1px solid var(--border); border-radius: var(--radius); overflow: hidden; }
.adm-card-header { padding: 24px 24px 0; }
.adm-card-title { margin: 0; font-size: 18px; font-weight: 600; }
.adm-card-description { margin: 4px 0 0; font-size: 14px; color: var(--muted-foreground); }
.adm-card-body { padding: 24px; }
.adm-progress { width: 100%; height: 6px; border-radius: 999px; background: rgba(0, 0, 0, 0.1); overflow: hidden; }
.adm-progress.thick { height: 8px; }
.adm-progress > div { height: 100%; border-radius: 999px; }
.adm-empty { display: flex; align-items: center; justify-content: center; height: 100%; min-height: 48px; font-size: 12px; opacity: 0.7; }

/* Widgets */
.adm-grid { display: grid; gap: 24px; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); }
.adm-kpi { color: #fff; border: none; }
.adm-kpi .head { display: flex; justify-content: space-between; align-items: flex-start; padding: 16px 16px 8px; }
.adm-kpi .value { font-size: 24px; font-weight: 700; margin: 0; }
.adm-kpi .title { font-size: 14px; opacity: 0.8; margin: 4px 0 0; }
.adm-kpi .chart { position: relative; height: 96px; }
.adm-kpi .chart svg { width: 100%; height: 100%; display: block; }
.adm-kpi .overlay-text { position: absolute; bottom: 8px; left: 16px; font-size: 12px; opacity: 0.8; }

.adm-tabs { display: inline-flex; background: rgba(0, 0, 0, 0.05); border-radius: var(--radius); padding: 2px; }
.adm-tabs button { padding: 4px 8px; font-size: 12px; border-radius: 4px; }
.adm-tabs button.selected { background: var(--card); box-shadow: 0 1px 2px rgba(0, 0, 0, 0.1); }
.adm-outline-button { width: 32px; height: 32px; display: inline-flex; align-items: center; justify-content: center; border: 1px solid var(--border); border-radius: var(--radius); }
.adm-traffic-head { display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: 8px; }
.adm-area-chart { display: grid; grid-template-columns: 44px 1fr; grid-template-rows: 300px auto; font-size: 12px; color: var(--muted-foreground); }
.adm-area-chart .y-axis { display: flex; flex-direction: column-reverse; justify-content: space-between; text-align: right; padding-right: 6px; }
.adm-area-chart .plot { position: relative; }
.adm-area-chart .plot svg { width: 100%; height: 100%; display: block; overflow: visible; }
.adm-area-chart .x-axis { grid-column: 2; position: relative; height: 20px; }
.adm-area-chart .x-axis span { position: absolute; transform: translateX(-50%); top: 4px; white-space: nowrap; }
.adm-tooltip { position: absolute; top: 8px; transform: translateX(-50%); background: var(--card); border: 1px solid var(--border); border-radius: 4px; padding: 6px 8px; pointer-events: none; color: var(--foreground); white-space: nowrap; }
.adm-legend { display: flex; justify-content: center; gap: 16px; font-size: 12px; margin-top: 8px; }
.adm-legend span::before { content: ""; display: inline-block; width: 10px; height: 10px; margin-right: 6px; background: var(--swatch); }
.adm-summary { margin-top: 24px; display: grid; gap: 16px; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); }
.adm-summary .row, .adm-bars .row { display: flex; justify-content: space-between; font-size: 12px; color: var(--muted-foreground); margin-bottom: 4px; }

.adm-social { color: #fff; border: none; position: relative; }
.adm-social svg.spark { position: absolute; inset: 0; width: 100%; height: 100%; opacity: 0.2; }
.adm-social .inner { position: relative; padding: 16px; }
.adm-social .logo { display: flex; justify-content: center; margin-bottom: 12px; }
.adm-social .metrics { display: grid; grid-template-columns: 1fr 1fr; }
.adm-social .metrics > div { text-align: center; padding: 8px; }
.adm-social .metrics > div + div { border-left: 1px solid rgba(255, 255, 255, 0.3); }
.adm-social .metric-value { font-size: 20px; font-weight: 700; }
.adm-social .metric-label { font-size: 12px; letter-spacing: 0.05em; opacity: 0.8; }

.adm-sales { display: flex; flex-direction: column; gap: 32px; }
.adm-main-stats { display: grid; gap: 24px 16px; grid-template-columns: repeat(auto-fit, minmax(140px, 1fr)); }
.adm-main-stats .label { font-size: 12px; color: var(--muted-foreground); text-transform: uppercase; letter-spacing: 0.05em; }
.adm-main-stats .value { font-size: 24px; font-weight: 700; }
.adm-main-stats hr { width: 50%; height: 2px; border: none; margin: 4px 0 0; }
.adm-two-col { display: grid; gap: 32px; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); }
.adm-bars { display: flex; flex-direction: column; gap: 16px; }
.adm-bars .row { font-size: 14px; }
.adm-bars .row strong { color: var(--foreground); font-weight: 500; }
.adm-sources-title { font-size: 14px; font-weight: 500; margin-bottom: 8px; }
.adm-source { display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-top: 1px solid var(--border); font-size: 14px; }
.adm-source:first-child { border-top: none; }
.adm-source .left, .adm-source .right { display: flex; align-items: center; gap: 12px; }
.adm-trend { display: inline-flex; align-items: center; gap: 2px; font-size: 12px; }
.adm-trend.up { color: #16a34a; }
.adm-trend.down { color: #dc2626; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_css_uses_config() {
        let css = layout_css(&LayoutConfig::default());
        assert!(css.contains("--sidebar-w: 256px"));
        assert!(css.contains("--header-h: 60px"));
        assert!(css.contains("--content-pad: 24px"));
        assert!(css.contains("@media (max-width: 767px)"));
    }

    #[test]
    fn test_warning_text_is_darker() {
        assert_ne!(tone_text(Tone::Warning), tone_background(Tone::Warning));
        assert_eq!(tone_text(Tone::Red), tone_background(Tone::Red));
    }
}
