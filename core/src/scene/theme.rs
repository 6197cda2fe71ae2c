/// Theme used when a name does not match any preset.
pub const DEFAULT_THEME: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub clear_color: &'static str,
    pub text_color: &'static str,
    pub line_color: &'static str,
    pub circle_color: &'static str,
    pub axes_color: &'static str,
    pub intersection_color: &'static str,
}

pub const LIGHT: Theme = Theme {
    clear_color: "white",
    text_color: "black",
    line_color: "blue",
    circle_color: "green",
    axes_color: "lightgray",
    intersection_color: "red",
};

pub const DARK: Theme = Theme {
    clear_color: "#393939",
    text_color: "#E6F4F1",
    line_color: "#F2C57C",
    circle_color: "#7FB685",
    axes_color: "#444",
    intersection_color: "#BF3F3C",
};

pub const HIGH_CONTRAST: Theme = Theme {
    clear_color: "#393939",
    text_color: "white",
    line_color: "#4444FF",
    circle_color: "green",
    axes_color: "lightgray",
    intersection_color: "red",
};

/// Preset names in menu order.
pub const THEME_NAMES: [&str; 3] = ["light", "dark", "high-contrast"];

impl Theme {
    pub fn lookup(name: &str) -> Option<Theme> {
        match name {
            "light" => Some(LIGHT),
            "dark" => Some(DARK),
            "high-contrast" => Some(HIGH_CONTRAST),
            _ => None,
        }
    }

    /// Preset for `name`, or the [`DEFAULT_THEME`] preset.
    pub fn by_name(name: &str) -> Theme {
        Self::lookup(name).unwrap_or(DARK)
    }
}

impl Default for Theme {
    fn default() -> Self {
        DARK
    }
}
