// Strip above the card reporting what the start-up health check of the backend found
use iced::{Alignment, Color, Element, Length};
use iced::widget::{Container, Row, Space, Text};
use iced::widget::container::Appearance;
use crate::client::models::messages::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Backend answered `GET /`.
    Success,
    /// Extra line the backend attached to its status.
    Info,
    /// Backend could not be reached.
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn backend_online(status: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: status.into() }
    }

    pub fn backend_detail(detail: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: detail.into() }
    }

    pub fn backend_unreachable(reason: &str) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: format!("Backend not reachable yet: {}", reason),
        }
    }

    pub fn marker(&self) -> &'static str {
        match self.level {
            NoticeLevel::Success => "●",
            NoticeLevel::Info => "○",
            NoticeLevel::Warning => "▲",
        }
    }
}

const STRIP_BG: Color = Color::from_rgb(0.1, 0.11, 0.22);
const ONLINE: Color = Color::from_rgb(0.0, 0.7, 0.3);
const DETAIL: Color = Color::from_rgb(0.45, 0.6, 0.9);
const UNREACHABLE: Color = Color::from_rgb(1.0, 0.75, 0.2);

pub fn accent(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Success => ONLINE,
        NoticeLevel::Info => DETAIL,
        NoticeLevel::Warning => UNREACHABLE,
    }
}

fn strip(border: Color) -> Appearance {
    Appearance {
        background: Some(iced::Background::Color(STRIP_BG)),
        text_color: Some(Color::WHITE),
        border: iced::Border {
            width: 1.0,
            color: border,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}

fn online_strip(_: &iced::Theme) -> Appearance {
    strip(ONLINE)
}

fn detail_strip(_: &iced::Theme) -> Appearance {
    strip(DETAIL)
}

fn unreachable_strip(_: &iced::Theme) -> Appearance {
    strip(UNREACHABLE)
}

/// Newest notice only; an empty list collapses to nothing.
pub fn notice_bar(notices: &[Notice]) -> Element<'_, Message> {
    let Some(notice) = notices.last() else {
        return Space::new(Length::Fill, Length::Fixed(0.0)).into();
    };
    let appearance: fn(&iced::Theme) -> Appearance = match notice.level {
        NoticeLevel::Success => online_strip,
        NoticeLevel::Info => detail_strip,
        NoticeLevel::Warning => unreachable_strip,
    };

    Container::new(
        Row::new()
            .spacing(10)
            .align_items(Alignment::Center)
            .push(Text::new(notice.marker()).size(14).style(accent(notice.level)))
            .push(Text::new(&notice.message).size(14)),
    )
    .padding([6, 14])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(appearance)))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_pick_the_matching_level() {
        assert_eq!(Notice::backend_online("up").level, NoticeLevel::Success);
        assert_eq!(Notice::backend_detail("demo").level, NoticeLevel::Info);
        let down = Notice::backend_unreachable("connection refused");
        assert_eq!(down.level, NoticeLevel::Warning);
        assert_eq!(down.message, "Backend not reachable yet: connection refused");
    }

    #[test]
    fn each_level_has_its_own_accent() {
        assert_ne!(accent(NoticeLevel::Success), accent(NoticeLevel::Info));
        assert_ne!(accent(NoticeLevel::Info), accent(NoticeLevel::Warning));
        assert_ne!(accent(NoticeLevel::Success), accent(NoticeLevel::Warning));
    }
}
