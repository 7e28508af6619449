// src/ui.rs
use iced::Color;
use once_cell::sync::Lazy;

#[derive(Debug, Clone)]
pub struct Styles {
    pub bg: Color,
    pub fg: Color,
    pub bar_bg: Color,
    pub bar_fg: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub accent: Color,
}

pub static DARK_THEME: Lazy<Styles> = Lazy::new(|| Styles {
    bg: Color::from_rgb(0.071, 0.078, 0.094), // #121418
    fg: Color::from_rgb(0.92, 0.92, 0.92),
    bar_bg: Color::from_rgb(0.102, 0.227, 0.408), // #1a3a68
    bar_fg: Color::from_rgb(1.0, 1.0, 1.0),
    header_bg: Color::from_rgb(0.16, 0.17, 0.2),
    header_fg: Color::from_rgb(1.0, 1.0, 1.0),
    accent: Color::from_rgb(0.145, 0.388, 0.682), // #2563ae
});

pub static LIGHT_THEME: Lazy<Styles> = Lazy::new(|| Styles {
    bg: Color::from_rgb(0.98, 0.98, 0.97),
    fg: Color::from_rgb(0.1, 0.1, 0.1),
    bar_bg: Color::from_rgb(0.102, 0.227, 0.408), // #1a3a68
    bar_fg: Color::from_rgb(1.0, 1.0, 1.0),
    header_bg: Color::from_rgb(0.878, 0.878, 0.878), // #e0e0e0
    header_fg: Color::from_rgb(0.1, 0.1, 0.1),
    accent: Color::from_rgb(0.145, 0.388, 0.682), // #2563ae
});
