use ratatui::style::{Color, Modifier, Style};

#[derive(Clone, Debug)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub panel_bg: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub primary: Color,
    pub muted: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(24, 24, 27),
            fg: Color::Rgb(228, 228, 231),
            panel_bg: Color::Rgb(39, 39, 42),
            header_bg: Color::Rgb(3, 7, 18),      // gray-950 banner
            header_fg: Color::Rgb(255, 255, 255),
            primary: Color::Rgb(74, 222, 128),    // Gecko green
            muted: Color::Rgb(161, 161, 170),
            error: Color::Rgb(248, 113, 113),
            success: Color::Rgb(34, 197, 94),
            border: Color::Rgb(82, 82, 91),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(244, 244, 245),
            fg: Color::Rgb(9, 9, 11),
            panel_bg: Color::Rgb(255, 255, 255),
            header_bg: Color::Rgb(3, 7, 18),
            header_fg: Color::Rgb(255, 255, 255),
            primary: Color::Rgb(22, 163, 74),
            muted: Color::Rgb(113, 113, 122),
            error: Color::Rgb(220, 38, 38),
            success: Color::Rgb(22, 163, 74),
            border: Color::Rgb(228, 228, 231),
        }
    }

    /// Plain terminal colors for `--no-color`.
    pub fn plain() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::Reset,
            panel_bg: Color::Reset,
            header_bg: Color::Reset,
            header_fg: Color::Reset,
            primary: Color::Reset,
            muted: Color::Reset,
            error: Color::Reset,
            success: Color::Reset,
            border: Color::Reset,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    // Style helpers
    pub fn page(&self) -> Style {
        Style::default().fg(self.muted).bg(self.bg)
    }

    pub fn normal(&self) -> Style {
        Style::default().fg(self.fg).bg(self.panel_bg)
    }

    pub fn header(&self) -> Style {
        Style::default().fg(self.header_fg).bg(self.header_bg)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.fg).add_modifier(Modifier::BOLD)
    }

    pub fn primary(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn focused(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default().fg(self.header_bg).bg(self.primary)
    }

    pub fn user_bubble(&self) -> Style {
        Style::default().fg(self.header_bg).bg(self.primary)
    }

    pub fn agent_bubble(&self) -> Style {
        Style::default().fg(self.fg).bg(self.border)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
