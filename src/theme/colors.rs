//! Color constants for the portal palette.
//!
//! Mirrors the CSS custom properties declared in `GLOBAL_STYLES`.

#![allow(dead_code)]

// === NIGHT (Backgrounds) ===
pub const NIGHT: &str = "#0d1321";
pub const NIGHT_LIGHTER: &str = "#1d2d44";
pub const NIGHT_BORDER: &str = "#2b3a55";

// === BRASS (Calls to action, highlights) ===
pub const BRASS: &str = "#e0a458";
pub const BRASS_GLOW: &str = "rgba(224, 164, 88, 0.35)";

// === TEAL (Interactive, links, focus) ===
pub const TEAL: &str = "#3ab0a8";
pub const TEAL_GLOW: &str = "rgba(58, 176, 168, 0.3)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f0ebd8";
pub const TEXT_SECONDARY: &str = "rgba(240, 235, 216, 0.75)";
pub const TEXT_MUTED: &str = "rgba(240, 235, 216, 0.5)";

// === SEMANTIC ===
pub const DANGER: &str = "#e5484d";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::GLOBAL_STYLES;

    #[test]
    fn palette_matches_stylesheet() {
        for (var, value) in [
            ("--night", NIGHT),
            ("--night-lighter", NIGHT_LIGHTER),
            ("--night-border", NIGHT_BORDER),
            ("--brass", BRASS),
            ("--brass-glow", BRASS_GLOW),
            ("--teal", TEAL),
            ("--teal-glow", TEAL_GLOW),
            ("--text-primary", TEXT_PRIMARY),
            ("--text-secondary", TEXT_SECONDARY),
            ("--text-muted", TEXT_MUTED),
            ("--danger", DANGER),
        ] {
            let declaration = format!("{}: {};", var, value);
            assert!(
                GLOBAL_STYLES.contains(&declaration),
                "missing {}",
                declaration
            );
        }
    }
}
