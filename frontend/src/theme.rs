use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Visual tokens for the whole page. Built once in `App` and handed to every
/// section as a prop, never looked up from ambient state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub background: &'static str,
    pub foreground: &'static str,
    pub card: &'static str,
    pub muted: &'static str,
    pub primary: &'static str,
    pub primary_foreground: &'static str,
    pub accent: &'static str,
    pub border: &'static str,
    pub display_font: &'static str,
    pub body_font: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#070b14",
            foreground: "#e6f1ff",
            card: "#0e1626",
            muted: "#8a9bb8",
            primary: "#00e5ff",
            primary_foreground: "#04121a",
            accent: "#8b5cf6",
            border: "rgba(0, 229, 255, 0.15)",
            display_font: "'Orbitron', 'Segoe UI', sans-serif",
            body_font: "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif",
        }
    }
}

impl Theme {
    /// `rgba()` form of the primary colour, used for glows and tinted cards.
    pub fn primary_alpha(&self, alpha: f32) -> String {
        hex_alpha(self.primary, alpha)
    }

    pub fn accent_alpha(&self, alpha: f32) -> String {
        hex_alpha(self.accent, alpha)
    }

    pub fn gradient(&self) -> String {
        format!("linear-gradient(90deg, {}, {})", self.primary, self.accent)
    }
}

fn hex_alpha(hex: &str, alpha: f32) -> String {
    let digits = hex.trim_start_matches('#');
    let channel = |i: usize| {
        digits
            .get(i..i + 2)
            .and_then(|c| u8::from_str_radix(c, 16).ok())
            .unwrap_or(0)
    };
    format!("rgba({}, {}, {}, {})", channel(0), channel(2), channel(4), alpha)
}

#[derive(Properties, PartialEq)]
pub struct ThemeStylesProps {
    pub theme: Theme,
}

/// Installs the theme as CSS custom properties plus the shared utility
/// classes (`glass-card`, `text-gradient`, buttons) every section uses.
#[function_component(ThemeStyles)]
pub fn theme_styles(props: &ThemeStylesProps) -> Html {
    let t = props.theme;
    let glow = t.primary_alpha(0.3);
    let gradient = t.gradient();
    let global = css!(
        r#"
        :root {
            --background: ${background};
            --foreground: ${foreground};
            --card: ${card};
            --muted: ${muted};
            --primary: ${primary};
            --primary-foreground: ${primary_foreground};
            --accent: ${accent};
            --border: ${border};
            --glow: ${glow};
            --gradient: ${gradient};
            --font-display: ${display_font};
            --font-body: ${body_font};
        }
        html {
            scroll-behavior: smooth;
        }
        body {
            margin: 0;
            background: var(--background);
            color: var(--foreground);
            font-family: var(--font-body);
            overflow-x: hidden;
        }
        a {
            color: inherit;
            text-decoration: none;
        }
        "#,
        background = t.background,
        foreground = t.foreground,
        card = t.card,
        muted = t.muted,
        primary = t.primary,
        primary_foreground = t.primary_foreground,
        accent = t.accent,
        border = t.border,
        glow = glow,
        gradient = gradient,
        display_font = t.display_font,
        body_font = t.body_font,
    );

    html! {
        <>
            <Global css={global} />
            <style>
                {r#"
                    .container-custom {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .section-padding {
                        padding: 6rem 0;
                        position: relative;
                        overflow: hidden;
                    }
                    .glass-card {
                        background: rgba(14, 22, 38, 0.6);
                        backdrop-filter: blur(12px);
                        border: 1px solid var(--border);
                        border-radius: 16px;
                    }
                    .neon-border {
                        box-shadow: 0 0 0 1px var(--primary), 0 0 24px var(--glow);
                    }
                    .hover-glow {
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .hover-glow:hover {
                        transform: translateY(-5px);
                        box-shadow: 0 0 30px var(--glow);
                    }
                    .text-gradient {
                        background: var(--gradient);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .text-muted {
                        color: var(--muted);
                    }
                    .font-display {
                        font-family: var(--font-display);
                    }
                    .section-badge {
                        display: inline-block;
                        padding: 0.25rem 1rem;
                        margin-bottom: 1rem;
                        border-radius: 999px;
                        color: var(--primary);
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .section-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-header h2 {
                        font-family: var(--font-display);
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        margin: 0 0 1rem 0;
                    }
                    .section-header p {
                        color: var(--muted);
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                    .btn-primary, .btn-outline, .btn-ghost {
                        position: relative;
                        overflow: hidden;
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        font-weight: 600;
                        border-radius: 10px;
                        cursor: pointer;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .btn-primary {
                        padding: 1rem 2rem;
                        color: var(--primary-foreground);
                        background: var(--gradient);
                        border: none;
                    }
                    .btn-outline {
                        padding: 1rem 2rem;
                        color: var(--primary);
                        background: transparent;
                        border: 2px solid var(--primary);
                    }
                    .btn-ghost {
                        padding: 0.75rem 1.5rem;
                        color: var(--muted);
                        background: transparent;
                        border: none;
                    }
                    .btn-primary:hover, .btn-outline:hover, .btn-ghost:hover {
                        transform: scale(1.05);
                        box-shadow: 0 0 30px var(--glow);
                    }
                    .btn-primary:active, .btn-outline:active {
                        transform: scale(0.95);
                    }
                    .btn-outline:hover {
                        color: var(--primary-foreground);
                        background: var(--primary);
                    }
                    .btn-ghost:hover {
                        color: var(--primary);
                    }
                    .shimmer {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.2), transparent);
                        transform: translateX(-100%);
                        animation: shimmer 3s linear infinite;
                    }
                    @keyframes shimmer {
                        0% { transform: translateX(-100%); }
                        66% { transform: translateX(200%); }
                        100% { transform: translateX(200%); }
                    }
                    @keyframes pulse-glow {
                        0%, 100% { opacity: 0.4; transform: scale(1); }
                        50% { opacity: 0.8; transform: scale(1.1); }
                    }
                    .orb {
                        position: absolute;
                        width: 24rem;
                        height: 24rem;
                        border-radius: 50%;
                        filter: blur(64px);
                        pointer-events: none;
                        animation: pulse-glow 6s ease-in-out infinite;
                    }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_alpha_expands_hex_channels() {
        let theme = Theme::default();
        assert_eq!(theme.primary_alpha(0.3), "rgba(0, 229, 255, 0.3)");
    }

    #[test]
    fn malformed_hex_falls_back_to_black() {
        assert_eq!(hex_alpha("#zz", 1.0), "rgba(0, 0, 0, 1)");
    }
}
