use std::path::PathBuf;

use iced::widget::{button, canvas, column, container, row, text};
use iced::{keyboard, window, Element, Length, Subscription, Task};
use uuid::Uuid;

use dayline_core::clock::{ClockState, Ticker};
use dayline_core::lanes::LaneLayout;
use dayline_core::schedule::Schedule;
use dayline_core::time::Weekday;
use dayline_core::viewport::ViewportController;

use crate::message::Message;
use crate::views::details;
use crate::widgets::day_canvas::DayCanvas;

/// Fallback until the first window resize event reports the real width.
const DEFAULT_VIEWPORT_WIDTH: f32 = 1024.0;

pub struct App {
    pub schedule: Schedule,
    pub schedule_path: Option<PathBuf>,
    pub viewport: ViewportController,
    pub clock: ClockState,
    pub ticker: Ticker,
    pub layout: LaneLayout,
    pub layout_day: Weekday,
    pub selected: Option<Uuid>,
    pub viewport_width: f32,
    pub status_message: String,
}

impl Default for App {
    fn default() -> Self {
        let clock = ClockState::now_local();
        let schedule = Schedule::default();
        let layout = LaneLayout::assign(&schedule.activities, clock.weekday);
        Self {
            schedule,
            schedule_path: None,
            viewport: ViewportController::new(),
            clock,
            ticker: Ticker::default(),
            layout,
            layout_day: clock.weekday,
            selected: None,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            status_message: String::new(),
        }
    }
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boot() -> (Self, Task<Message>) {
        (Self::default(), Task::none())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FrameTick => {
                if !self.ticker.tick(&mut self.clock) {
                    return Task::none();
                }
                // Commit staged gesture writes before this frame's geometry
                // is read, then center once the first frame after mount.
                self.viewport.commit_pending();
                self.viewport.center_on(self.clock.now, self.viewport_width);
                if self.clock.weekday != self.layout_day {
                    // Midnight rollover: the active day filter changed.
                    self.rebuild_layout();
                }
                Task::none()
            }
            Message::Resized(width) => {
                self.viewport_width = width;
                Task::none()
            }
            Message::Zoom { delta, anchor_x } => {
                // The controller reads its own zoom at delivery time, so
                // consecutive wheel ticks compound against current state.
                self.viewport.wheel_zoom(delta, anchor_x);
                Task::none()
            }
            Message::Pan(delta) => {
                self.viewport.pan(delta);
                Task::none()
            }
            Message::PinchBegin(distance) => {
                self.viewport.pinch_begin(distance);
                Task::none()
            }
            Message::PinchMove {
                distance,
                midpoint_x,
            } => {
                self.viewport.pinch_move(distance, midpoint_x);
                Task::none()
            }
            Message::PinchEnd => {
                self.viewport.pinch_end();
                Task::none()
            }
            Message::SelectActivity(id) => {
                self.selected = Some(id);
                Task::none()
            }
            Message::CloseDetails => {
                self.selected = None;
                Task::none()
            }
            Message::SetStatus { id, status } => {
                if let Err(e) = self.schedule.set_status(id, status) {
                    self.status_message = format!("Update failed: {e}");
                }
                Task::none()
            }
            Message::OpenScheduleDialog => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .add_filter("schedule", &["json"])
                        .pick_file()
                        .await
                        .map(|file| file.path().to_path_buf())
                },
                Message::ScheduleFileChosen,
            ),
            Message::ScheduleFileChosen(None) => Task::none(),
            Message::ScheduleFileChosen(Some(path)) => {
                let result = Schedule::load(&path).map_err(|e| e.to_string());
                self.schedule_path = Some(path);
                Task::done(Message::ScheduleLoaded(result))
            }
            Message::ScheduleLoaded(Ok(schedule)) => {
                self.status_message = format!("Loaded: {}", schedule.name);
                self.schedule = schedule;
                self.selected = None;
                self.rebuild_layout();
                Task::none()
            }
            Message::ScheduleLoaded(Err(e)) => {
                self.status_message = format!("Load failed: {e}");
                Task::none()
            }
            Message::SaveSchedule => {
                match &self.schedule_path {
                    Some(path) => match self.schedule.save(path) {
                        Ok(()) => {
                            self.status_message = format!("Saved: {}", path.display());
                        }
                        Err(e) => {
                            self.status_message = format!("Save failed: {e}");
                        }
                    },
                    None => {
                        self.status_message = "No schedule file loaded".into();
                    }
                }
                Task::none()
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        // The frame stream is the self-rescheduling paint loop; dropping it
        // (ticker stopped or teardown) deterministically halts ticking.
        let frames = if self.ticker.is_stopped() {
            Subscription::none()
        } else {
            window::frames().map(|_| Message::FrameTick)
        };

        let keys = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            } => Some(Message::CloseDetails),
            _ => None,
        });

        let resizes = window::resize_events().map(|(_id, size)| Message::Resized(size.width));

        Subscription::batch([frames, keys, resizes])
    }

    pub fn view(&self) -> Element<'_, Message> {
        let toolbar = row![
            button(text("Open Schedule...").size(14)).on_press(Message::OpenScheduleDialog),
            button(text("Save").size(14)).on_press(Message::SaveSchedule),
            text(&self.schedule.name).size(14),
        ]
        .spacing(8);

        let day_view = canvas(DayCanvas {
            activities: &self.schedule.activities,
            layout: &self.layout,
            now: self.clock.now,
            selected: self.selected,
            zoom: self.viewport.zoom(),
            scroll_offset: self.viewport.scroll_offset(),
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let content: Element<'_, Message> = match self
            .selected
            .and_then(|id| self.schedule.activity(id).ok())
        {
            Some(activity) => row![day_view, details::details_panel(activity)]
                .spacing(10)
                .into(),
            None => day_view.into(),
        };

        let status = text(format!(
            "{} {} | zoom {:.0}% | {}",
            self.layout_day,
            self.clock.now,
            self.viewport.zoom() * 100.0,
            self.status_message
        ))
        .size(14);

        container(column![toolbar, content, status].spacing(10).padding(10)).into()
    }

    fn rebuild_layout(&mut self) {
        self.layout_day = self.clock.weekday;
        self.layout = LaneLayout::assign(&self.schedule.activities, self.layout_day);
    }
}
