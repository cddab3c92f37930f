use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Theme};

// Color palette
pub struct Colors;

impl Colors {
    pub const BACKGROUND: Color = Color::from_rgb(0.11, 0.11, 0.13); // #1c1c21
    pub const SURFACE: Color = Color::from_rgb(0.13, 0.13, 0.16); // #212127
    pub const SURFACE_LIGHT: Color = Color::from_rgb(0.16, 0.16, 0.20); // #292933
    pub const PRIMARY: Color = Color::from_rgb(0.38, 0.65, 1.0); // #61a6ff
    pub const TEXT: Color = Color::from_rgb(0.88, 0.88, 0.90); // #e0e0e6
    pub const TEXT_DIM: Color = Color::from_rgb(0.50, 0.50, 0.58); // #80809e
    pub const BORDER: Color = Color::from_rgb(0.20, 0.20, 0.24); // #33333d
    pub const SUCCESS: Color = Color::from_rgb(0.40, 0.80, 0.40); // #66cc66
    pub const ERROR: Color = Color::from_rgb(0.90, 0.40, 0.40); // #e66666
    pub const SPINNER: Color = Color::from_rgb(1.0, 0.68, 0.38); // #FFAD61
    pub const POSITIVE: Color = Color::from_rgb(0.40, 0.80, 0.40);
    pub const NEGATIVE: Color = Color::from_rgb(0.90, 0.40, 0.40);
    pub const NEUTRAL: Color = Color::from_rgb(0.85, 0.75, 0.40);
}

pub fn app_theme() -> Theme {
    Theme::custom(
        "HCP CRM".to_string(),
        iced::theme::Palette {
            background: Colors::BACKGROUND,
            text: Colors::TEXT,
            primary: Colors::PRIMARY,
            success: Colors::SUCCESS,
            danger: Colors::ERROR,
        },
    )
}

pub fn sentiment_color(label: &str) -> Color {
    match label {
        "Positive" => Colors::POSITIVE,
        "Negative" => Colors::NEGATIVE,
        "Neutral" => Colors::NEUTRAL,
        _ => Colors::TEXT_DIM,
    }
}

// Layout containers
pub fn section_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Colors::SURFACE)),
        border: Border {
            width: 1.0,
            radius: 8.0.into(),
            color: Colors::BORDER,
        },
        ..Default::default()
    }
}

pub fn header_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Colors::SURFACE)),
        border: Border {
            width: 0.0,
            radius: 0.0.into(),
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

pub fn detail_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Colors::SURFACE_LIGHT)),
        border: Border {
            width: 1.0,
            radius: 8.0.into(),
            color: Colors::PRIMARY,
        },
        ..Default::default()
    }
}

// Blocking notice
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.6,
            ..Color::BLACK
        })),
        ..Default::default()
    }
}

pub fn dialog_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Colors::SURFACE_LIGHT)),
        border: Border {
            width: 1.0,
            radius: 8.0.into(),
            color: Colors::BORDER,
        },
        ..Default::default()
    }
}

// Input style
pub fn input_style(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Focused => Colors::PRIMARY,
        _ => Colors::BORDER,
    };
    text_input::Style {
        background: Background::Color(Colors::BACKGROUND),
        border: Border {
            width: 1.0,
            radius: 6.0.into(),
            color: border_color,
        },
        icon: Color::TRANSPARENT,
        placeholder: Color {
            a: 0.7,
            ..Colors::TEXT_DIM
        },
        value: Colors::TEXT,
        selection: Color {
            a: 0.3,
            ..Colors::PRIMARY
        },
    }
}

// Button styles
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Disabled => Colors::SURFACE_LIGHT,
        _ => Colors::PRIMARY,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            width: 0.0,
            radius: 6.0.into(),
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

pub fn secondary_button(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(Colors::SURFACE_LIGHT)),
        text_color: Colors::TEXT,
        border: Border {
            width: 1.0,
            radius: 6.0.into(),
            color: Colors::BORDER,
        },
        ..Default::default()
    }
}

pub fn card_button(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered => Colors::PRIMARY,
        _ => Colors::BORDER,
    };
    button::Style {
        background: Some(Background::Color(Colors::SURFACE)),
        text_color: Colors::TEXT,
        border: Border {
            width: 1.0,
            radius: 8.0.into(),
            color: border_color,
        },
        ..Default::default()
    }
}

pub fn selected_card_button(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(Colors::SURFACE_LIGHT)),
        text_color: Colors::TEXT,
        border: Border {
            width: 1.0,
            radius: 8.0.into(),
            color: Colors::PRIMARY,
        },
        ..Default::default()
    }
}
