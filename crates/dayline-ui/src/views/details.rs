use iced::widget::{button, column, row, text};
use iced::Element;

use dayline_core::activity::{Activity, ActivityStatus};

use crate::message::Message;

/// Side panel for the selected activity. Boundary glue only: the close
/// button or Escape dismisses it, the status buttons write back through
/// the schedule store.
pub fn details_panel(activity: &Activity) -> Element<'_, Message> {
    let days = if activity.days.is_empty() {
        "every day".to_string()
    } else {
        activity
            .days
            .iter()
            .map(|d| d.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let status_buttons = row![
        button(text("Done").size(12)).on_press(Message::SetStatus {
            id: activity.id,
            status: ActivityStatus::Done,
        }),
        button(text("Skip").size(12)).on_press(Message::SetStatus {
            id: activity.id,
            status: ActivityStatus::Skipped,
        }),
    ]
    .spacing(5);

    let mut content = column![
        text(&activity.title).size(18),
        text(format!("{} - {}", activity.start, activity.end)).size(14),
        text(days).size(12),
        status_buttons,
    ]
    .spacing(8);

    if !activity.notes.is_empty() {
        content = content.push(text(&activity.notes).size(12));
    }

    content
        .push(button(text("Close").size(12)).on_press(Message::CloseDetails))
        .width(260)
        .into()
}
