//! Display configuration passed explicitly to every themed component.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(ColorMode::Light),
            "dark" => Some(ColorMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }
}

/// Colour family of a card or badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Teal,
    Blue,
    Red,
    Green,
    Orange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accent {
    pub border: &'static str,
    pub heading: &'static str,
    pub emphasis: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Theme {
    pub mode: ColorMode,
}

impl Theme {
    pub fn new(mode: ColorMode) -> Self {
        Self { mode }
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ColorMode::Dark
    }

    pub fn page_background(&self) -> &'static str {
        if self.is_dark() { "#1A202C" } else { "#FFFFFF" }
    }

    pub fn text(&self) -> &'static str {
        if self.is_dark() { "#E2E8F0" } else { "#1A202C" }
    }

    pub fn muted_text(&self) -> &'static str {
        if self.is_dark() { "#A0AEC0" } else { "#718096" }
    }

    pub fn surface(&self) -> &'static str {
        if self.is_dark() { "#2D3748" } else { "#EDF2F7" }
    }

    pub fn inset(&self) -> &'static str {
        if self.is_dark() { "#1A202C" } else { "#FFFFFF" }
    }

    pub fn accent(&self, tone: Tone) -> Accent {
        let dark = self.is_dark();
        match tone {
            Tone::Teal => Accent {
                border: if dark { "#4FD1C5" } else { "#319795" },
                heading: if dark { "#4FD1C5" } else { "#285E61" },
                emphasis: if dark { "#81E6D9" } else { "#2C7A7B" },
            },
            Tone::Blue => Accent {
                border: if dark { "#63B3ED" } else { "#3182CE" },
                heading: if dark { "#63B3ED" } else { "#2C5282" },
                emphasis: if dark { "#90CDF4" } else { "#2B6CB0" },
            },
            Tone::Red => Accent {
                border: if dark { "#FC8181" } else { "#E53E3E" },
                heading: if dark { "#FC8181" } else { "#9B2C2C" },
                emphasis: if dark { "#FEB2B2" } else { "#C53030" },
            },
            Tone::Green => Accent {
                border: if dark { "#68D391" } else { "#38A169" },
                heading: if dark { "#68D391" } else { "#276749" },
                emphasis: if dark { "#9AE6B4" } else { "#2F855A" },
            },
            Tone::Orange => Accent {
                border: if dark { "#F6AD55" } else { "#DD6B20" },
                heading: if dark { "#F6AD55" } else { "#9C4221" },
                emphasis: if dark { "#FBD38D" } else { "#C05621" },
            },
        }
    }

    pub fn card_style(&self, tone: Tone) -> String {
        format!(
            "border: 1px solid {}; background: {}; color: {};",
            self.accent(tone).border,
            self.surface(),
            self.text()
        )
    }

    pub fn inset_style(&self) -> String {
        format!("background: {}; color: {};", self.inset(), self.text())
    }

    pub fn page_style(&self) -> String {
        format!("background: {}; color: {};", self.page_background(), self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_modes() {
        assert_eq!(ColorMode::parse("dark"), Some(ColorMode::Dark));
        assert_eq!(ColorMode::parse(" light "), Some(ColorMode::Light));
        assert_eq!(ColorMode::parse("sepia"), None);
        assert_eq!(ColorMode::Light.toggled().as_str(), "dark");
    }

    #[test]
    fn dark_mode_uses_lighter_accents() {
        let light = Theme::new(ColorMode::Light);
        let dark = Theme::new(ColorMode::Dark);
        assert_eq!(light.accent(Tone::Teal).border, "#319795");
        assert_eq!(dark.accent(Tone::Teal).border, "#4FD1C5");
        assert_ne!(light.surface(), dark.surface());
    }

    #[test]
    fn card_style_combines_border_and_surface() {
        let style = Theme::new(ColorMode::Dark).card_style(Tone::Red);
        assert!(style.contains("#FC8181"));
        assert!(style.contains("#2D3748"));
    }
}
