use crate::icons;
use iced::widget::svg;
use iced::{Color, Element, Length};

/// Icons bundled with the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    Copy,
    Check,
    ArrowRight,
}

impl IconName {
    fn filename(&self) -> &'static str {
        match self {
            IconName::Copy => "copy.svg",
            IconName::Check => "check.svg",
            IconName::ArrowRight => "arrow-right.svg",
        }
    }
}

/// Icon component for rendering SVG icons with consistent styling
pub fn icon<'a, Message>(name: IconName) -> Icon<'a, Message> {
    Icon::new(name)
}

pub struct Icon<'a, Message> {
    name: IconName,
    size: Length,
    color: Option<Color>,
    _phantom: std::marker::PhantomData<&'a Message>,
}

impl<'a, Message> Icon<'a, Message> {
    pub fn new(name: IconName) -> Self {
        Self {
            name,
            size: Length::Fixed(16.0),
            color: None,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Square icon of the given size
    pub fn size(mut self, size: impl Into<Length>) -> Self {
        self.size = size.into();
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

impl<'a, Message: 'a> From<Icon<'a, Message>> for Element<'a, Message> {
    fn from(icon: Icon<'a, Message>) -> Self {
        let handle = icons::Assets::get_svg_handle(icon.name.filename())
            .expect("Failed to load SVG icon");

        let mut svg_widget = svg(handle).width(icon.size).height(icon.size);

        if let Some(color) = icon.color {
            svg_widget = svg_widget.style(move |_theme, _status| svg::Style {
                color: Some(color),
            });
        }

        svg_widget.into()
    }
}
