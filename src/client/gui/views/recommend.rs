use iced::{Alignment, Color, Element, Font, Length};
use iced::widget::{Button, Column, Container, Row, Scrollable, Space, Text, TextInput};
use crate::client::gui::views::notice_bar::notice_bar;
use crate::client::models::app_state::{BackendStatus, RecommenderState};
use crate::client::models::messages::Message;
use crate::client::models::view_model::{Panel, ViewModel};

const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18); // Deep navy
const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36); // Muted indigo for card bodies
const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
const ERROR_BG: Color = Color::from_rgb(0.45, 0.1, 0.12);
const ACCENT_COLOR: Color = Color::from_rgb(0.0, 0.7, 0.3);
const WARNING_COLOR: Color = Color::from_rgb(1.0, 0.75, 0.2);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

fn panel_appearance(background: Color, radius: f32) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(background)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: radius.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
    }
}

fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        shadow: iced::Shadow::default(),
        ..panel_appearance(BG_MAIN, 0.0)
    }
}

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    panel_appearance(CARD_BG, 16.0)
}

fn input_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.3, 0.3, 0.4),
            radius: 12.0.into(),
        },
        shadow: iced::Shadow::default(),
        ..panel_appearance(INPUT_BG, 12.0)
    }
}

fn error_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    panel_appearance(ERROR_BG, 12.0)
}

fn log_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        shadow: iced::Shadow::default(),
        ..panel_appearance(INPUT_BG, 8.0)
    }
}

pub fn view(state: &RecommenderState) -> Element<Message> {
    let ui = ViewModel::from_state(state);

    let title = Text::new("Restaurant Recommender")
        .size(34)
        .font(BOLD_FONT)
        .style(TEXT_PRIMARY);

    let status_line: Element<Message> = match &state.backend_status {
        BackendStatus::Unknown => Text::new("Checking backend...").size(13).style(TEXT_SECONDARY).into(),
        BackendStatus::Online(status) => Text::new(status).size(13).style(ACCENT_COLOR).into(),
        BackendStatus::Unreachable(_) => Text::new("Backend unreachable").size(13).style(WARNING_COLOR).into(),
    };

    let mut input = TextInput::new("Where are you dining? (e.g. Barcelona, Spain)", ui.location)
        .on_input(Message::LocationChanged)
        .width(Length::Fill)
        .padding(12)
        .size(15);
    if ui.trigger_enabled {
        input = input.on_submit(Message::SubmitRecommendation);
    }

    let location_field = Column::new()
        .spacing(8)
        .push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("📍").font(EMOJI_FONT).size(16).style(TEXT_SECONDARY))
                .push(Text::new("Location").size(14).style(TEXT_SECONDARY)),
        )
        .push(Container::new(input).style(iced::theme::Container::Custom(Box::new(input_appearance))));

    let trigger_label = Text::new(ui.trigger_label).font(BOLD_FONT).size(16);
    let trigger = if ui.trigger_enabled {
        Button::new(
            Container::new(
                Row::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(Text::new("🍽️").font(EMOJI_FONT).size(16))
                    .push(trigger_label.style(TEXT_PRIMARY)),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .on_press(Message::SubmitRecommendation)
        .style(iced::theme::Button::Primary)
    } else {
        Button::new(
            Container::new(
                Row::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(Text::new("⏳").font(EMOJI_FONT).size(16))
                    .push(trigger_label.style(TEXT_SECONDARY)),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .style(iced::theme::Button::Secondary)
    };
    let trigger = trigger.width(Length::Fill).padding(14);

    let card = Container::new(
        Column::new()
            .spacing(20)
            .padding(28)
            .push(
                Column::new()
                    .spacing(4)
                    .align_items(Alignment::Center)
                    .width(Length::Fill)
                    .push(title)
                    .push(status_line),
            )
            .push(location_field)
            .push(trigger),
    )
    .width(Length::Fixed(560.0))
    .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    let main_content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .spacing(20)
        .align_items(Alignment::Center)
        .push(Container::new(notice_bar(&state.notices)).width(Length::Fill).padding([8, 12, 0, 12]))
        .push(card)
        .push(panel_view(ui.panel));

    Container::new(main_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}

fn panel_view(panel: Panel<'_>) -> Element<'_, Message> {
    match panel {
        Panel::None => Space::new(Length::Fill, Length::Fixed(0.0)).into(),
        Panel::Loading => Row::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(Text::new("⏳").font(EMOJI_FONT).size(16))
            .push(Text::new("The crew is deliberating...").size(14).style(ACCENT_COLOR))
            .into(),
        Panel::Error(message) => Container::new(
            Row::new()
                .spacing(12)
                .align_items(Alignment::Center)
                .push(Text::new("❌").font(EMOJI_FONT).size(18))
                .push(Text::new(message).size(15).style(TEXT_PRIMARY)),
        )
        .width(Length::Fixed(760.0))
        .padding(16)
        .style(iced::theme::Container::Custom(Box::new(error_appearance)))
        .into(),
        Panel::Result { recommendations, crew_log, crew_log_expanded } => {
            let disclosure = Button::new(
                Row::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(Text::new(if crew_log_expanded { "▼" } else { "▶" }).size(12).style(TEXT_SECONDARY))
                    .push(Text::new("Crew log").size(14).style(TEXT_SECONDARY)),
            )
            .on_press(Message::ToggleCrewLog)
            .style(iced::theme::Button::Text)
            .padding([6, 0]);

            let mut body = Column::new()
                .spacing(16)
                .push(Text::new("Recommendations").font(BOLD_FONT).size(20).style(TEXT_PRIMARY))
                .push(Text::new(recommendations).font(Font::MONOSPACE).size(14).style(TEXT_PRIMARY))
                .push(disclosure);

            if crew_log_expanded {
                body = body.push(
                    Container::new(Text::new(crew_log).font(Font::MONOSPACE).size(13).style(TEXT_SECONDARY))
                        .width(Length::Fill)
                        .padding(12)
                        .style(iced::theme::Container::Custom(Box::new(log_appearance))),
                );
            }

            Container::new(Scrollable::new(body.padding(24)).height(Length::Fill))
                .width(Length::Fixed(760.0))
                .height(Length::Fill)
                .padding([0, 0, 20, 0])
                .style(iced::theme::Container::Custom(Box::new(card_appearance)))
                .into()
        }
    }
}
