use sfml::graphics::Color;

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::rgb(r, g, b)
}

pub(crate) struct Theme {
    pub(crate) window_bg: Color,
    pub(crate) heading_color: Color,
    pub(crate) text_color: Color,
    pub(crate) muted_text_color: Color,
    pub(crate) error_text_color: Color,

    pub(crate) button_normal_bg: Color,
    pub(crate) button_hover_bg: Color,
    pub(crate) button_pressed_bg: Color,
    pub(crate) button_normal_fg: Color,
    pub(crate) button_hover_fg: Color,
    pub(crate) button_pressed_fg: Color,

    pub(crate) field_bg: Color,
    pub(crate) field_fg: Color,
    pub(crate) field_outline: Color,
    pub(crate) field_focused_outline: Color,

    pub(crate) on_color: Color,
    pub(crate) off_color: Color,
    pub(crate) toggle_fg: Color,

    pub(crate) heading_font_size: u32,
    pub(crate) body_font_size: u32,
    pub(crate) small_font_size: u32,

    pub(crate) padding: f32,
    pub(crate) field_width: f32,
    pub(crate) table_cell_width: f32,
}

impl Theme {
    pub(crate) const LIGHT: Theme = Theme {
        window_bg: rgb(245, 245, 245),
        heading_color: rgb(20, 20, 20),
        text_color: rgb(40, 40, 40),
        muted_text_color: rgb(120, 120, 120),
        error_text_color: rgb(190, 30, 30),

        button_normal_bg: rgb(200, 200, 200),
        button_hover_bg: rgb(230, 230, 230),
        button_pressed_bg: rgb(100, 100, 100),
        button_normal_fg: rgb(20, 20, 20),
        button_hover_fg: rgb(20, 20, 20),
        button_pressed_fg: rgb(255, 255, 255),

        field_bg: rgb(255, 255, 255),
        field_fg: rgb(20, 20, 20),
        field_outline: rgb(170, 170, 170),
        field_focused_outline: rgb(70, 130, 220),

        on_color: rgb(30, 180, 30),
        off_color: rgb(90, 90, 90),
        toggle_fg: rgb(255, 255, 255),

        heading_font_size: 20,
        body_font_size: 14,
        small_font_size: 11,

        padding: 8.0,
        field_width: 280.0,
        table_cell_width: 60.0,
    };

    pub(crate) const DARK: Theme = Theme {
        window_bg: rgb(30, 32, 36),
        heading_color: rgb(235, 235, 235),
        text_color: rgb(210, 210, 210),
        muted_text_color: rgb(140, 140, 140),
        error_text_color: rgb(240, 110, 110),

        button_normal_bg: rgb(70, 74, 82),
        button_hover_bg: rgb(95, 100, 110),
        button_pressed_bg: rgb(150, 150, 150),
        button_normal_fg: rgb(235, 235, 235),
        button_hover_fg: rgb(235, 235, 235),
        button_pressed_fg: rgb(20, 20, 20),

        field_bg: rgb(45, 48, 54),
        field_fg: rgb(235, 235, 235),
        field_outline: rgb(90, 90, 90),
        field_focused_outline: rgb(110, 160, 240),

        on_color: rgb(80, 220, 80),
        off_color: rgb(110, 110, 110),
        toggle_fg: rgb(20, 20, 20),

        heading_font_size: 20,
        body_font_size: 14,
        small_font_size: 11,

        padding: 8.0,
        field_width: 280.0,
        table_cell_width: 60.0,
    };
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum Variant {
    Light,
    Dark,
}

impl Variant {
    pub(crate) fn theme(self) -> &'static Theme {
        match self {
            Variant::Light => &Theme::LIGHT,
            Variant::Dark => &Theme::DARK,
        }
    }

    pub(crate) fn toggled(self) -> Variant {
        match self {
            Variant::Light => Variant::Dark,
            Variant::Dark => Variant::Light,
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Variant::Light => "light",
            Variant::Dark => "dark",
        }
    }

    pub(crate) fn from_str(s: &str) -> Option<Variant> {
        match s {
            "light" => Some(Variant::Light),
            "dark" => Some(Variant::Dark),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Variant;

    #[test]
    fn variant_strings_round_trip() {
        for variant in [Variant::Light, Variant::Dark] {
            assert_eq!(Variant::from_str(variant.as_str()), Some(variant));
        }
        assert_eq!(Variant::from_str("solarized"), None);
    }

    #[test]
    fn toggling_alternates() {
        assert_eq!(Variant::Light.toggled(), Variant::Dark);
        assert_eq!(Variant::Dark.toggled().toggled(), Variant::Dark);
    }
}
