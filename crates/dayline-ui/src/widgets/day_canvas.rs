use std::collections::HashMap;

use iced::mouse;
use iced::touch;
use iced::widget::canvas;
use iced::{border, Color, Point, Rectangle, Renderer, Size, Theme};
use uuid::Uuid;

use dayline_core::activity::{Activity, ActivityStatus};
use dayline_core::lanes::LaneLayout;
use dayline_core::time::{TimeOfDay, MINUTES_PER_DAY};
use dayline_core::viewport::BASE_HOUR_WIDTH;

use crate::message::Message;

const RULER_HEIGHT: f32 = 24.0;
const LANE_HEIGHT: f32 = 96.0;
const MIN_BLOCK_WIDTH: f32 = 4.0;
const PAN_STEP: f32 = 20.0;

pub struct DayCanvasState {
    pub modifiers: iced::keyboard::Modifiers,
    pub fingers: HashMap<touch::Finger, Point>,
}

impl Default for DayCanvasState {
    fn default() -> Self {
        Self {
            modifiers: iced::keyboard::Modifiers::empty(),
            fingers: HashMap::new(),
        }
    }
}

/// The day timeline: hour ruler, lane rows, activity blocks and the "now"
/// marker, all mapped through the viewport's (zoom, scroll) pair.
///
/// Gestures are normalized here and published as messages; the application
/// owns the single `ViewportController` that interprets them, so handlers
/// always act on the latest zoom and scroll state.
pub struct DayCanvas<'a> {
    pub activities: &'a [Activity],
    pub layout: &'a LaneLayout,
    pub now: TimeOfDay,
    pub selected: Option<Uuid>,
    pub zoom: f32,
    pub scroll_offset: f32,
}

impl<'a> DayCanvas<'a> {
    pub fn pixels_per_minute(&self) -> f32 {
        BASE_HOUR_WIDTH * self.zoom / 60.0
    }

    pub fn minutes_to_px(&self, minutes: f32) -> f32 {
        minutes * self.pixels_per_minute() - self.scroll_offset
    }

    pub fn px_to_minutes(&self, px: f32) -> f32 {
        (px + self.scroll_offset) / self.pixels_per_minute()
    }

    /// Screen geometry for an activity: `(lane, left_px, width_px)`.
    /// `None` when the day filter excluded it from the layout. Zero-length
    /// and inverted intervals collapse to the minimum block width.
    pub fn block_geometry(&self, activity: &Activity) -> Option<(usize, f32, f32)> {
        let lane = self.layout.lane_of(activity.id)?;
        let left = self.minutes_to_px(f32::from(activity.start.minutes()));
        let width = activity.duration_minutes() as f32 * self.pixels_per_minute();
        Some((lane, left, width.max(MIN_BLOCK_WIDTH)))
    }

    pub fn hit_test(&self, x: f32, y: f32) -> Option<Uuid> {
        let lane_y = y - RULER_HEIGHT;
        if lane_y < 0.0 {
            return None;
        }
        let lane = (lane_y / LANE_HEIGHT) as usize;
        if lane >= self.layout.lane_count() {
            return None;
        }

        for activity in self.activities {
            match self.block_geometry(activity) {
                Some((block_lane, left, width)) if block_lane == lane => {
                    if x >= left && x <= left + width {
                        return Some(activity.id);
                    }
                }
                _ => {}
            }
        }
        None
    }

    fn update_touch(
        &self,
        state: &mut DayCanvasState,
        event: &touch::Event,
    ) -> Option<canvas::Action<Message>> {
        match event {
            touch::Event::FingerPressed { id, position } => {
                state.fingers.insert(*id, *position);
                let (distance, _) = pinch_measure(&state.fingers)?;
                Some(canvas::Action::publish(Message::PinchBegin(distance)).and_capture())
            }
            touch::Event::FingerMoved { id, position } => {
                if !state.fingers.contains_key(id) {
                    return None;
                }
                state.fingers.insert(*id, *position);
                let (distance, midpoint_x) = pinch_measure(&state.fingers)?;
                Some(
                    canvas::Action::publish(Message::PinchMove {
                        distance,
                        midpoint_x,
                    })
                    .and_capture(),
                )
            }
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. } => {
                let had_pinch = state.fingers.len() == 2;
                state.fingers.remove(id);
                had_pinch.then(|| canvas::Action::publish(Message::PinchEnd).and_capture())
            }
        }
    }
}

/// Inter-finger distance and midpoint X while exactly two fingers are down.
fn pinch_measure(fingers: &HashMap<touch::Finger, Point>) -> Option<(f32, f32)> {
    if fingers.len() != 2 {
        return None;
    }
    let mut points = fingers.values();
    let a = points.next()?;
    let b = points.next()?;
    Some((a.distance(*b), (a.x + b.x) / 2.0))
}

fn status_color(status: ActivityStatus) -> Color {
    match status {
        ActivityStatus::Planned => Color::from_rgb(0.25, 0.45, 0.75),
        ActivityStatus::Done => Color::from_rgb(0.30, 0.60, 0.35),
        ActivityStatus::Skipped => Color::from_rgb(0.45, 0.45, 0.50),
    }
}

fn draw_block(
    frame: &mut canvas::Frame,
    activity: &Activity,
    left: f32,
    width: f32,
    lane_top: f32,
    selected: bool,
) {
    let block_pos = Point::new(left, lane_top + 4.0);
    let block_size = Size::new(width, LANE_HEIGHT - 8.0);
    let block_path = canvas::Path::new(|b| {
        b.rounded_rectangle(block_pos, block_size, border::Radius::from(4.0));
    });
    frame.fill(&block_path, status_color(activity.status));

    let (border_color, border_width) = if selected {
        (Color::WHITE, 2.0)
    } else {
        (Color::from_rgb(0.25, 0.25, 0.25), 1.0)
    };
    frame.stroke(
        &block_path,
        canvas::Stroke::default()
            .with_color(border_color)
            .with_width(border_width),
    );

    if width > 30.0 {
        frame.fill_text(canvas::Text {
            content: activity.title.clone(),
            position: Point::new(left + 6.0, lane_top + 12.0),
            color: Color::WHITE,
            size: iced::Pixels(13.0),
            ..canvas::Text::default()
        });
    }
    if width > 90.0 {
        frame.fill_text(canvas::Text {
            content: format!("{} - {}", activity.start, activity.end),
            position: Point::new(left + 6.0, lane_top + 30.0),
            color: Color::from_rgb(0.85, 0.85, 0.88),
            size: iced::Pixels(11.0),
            ..canvas::Text::default()
        });
    }
}

impl<'a> canvas::Program<Message> for DayCanvas<'a> {
    type State = DayCanvasState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            canvas::Event::Keyboard(iced::keyboard::Event::ModifiersChanged(modifiers)) => {
                state.modifiers = *modifiers;
                None
            }
            canvas::Event::Touch(touch_event) => self.update_touch(state, touch_event),
            canvas::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let cursor_pos = cursor.position_in(bounds)?;
                let (dx, dy) = match delta {
                    mouse::ScrollDelta::Lines { x, y } => (*x, *y),
                    mouse::ScrollDelta::Pixels { x, y } => (*x / PAN_STEP, *y / PAN_STEP),
                };

                if state.modifiers.command() {
                    // Accelerator held: zoom anchored at the cursor. The
                    // controller maps the delta's sign to its fixed factor.
                    let delta = if dy.abs() > dx.abs() { dy } else { dx };
                    Some(
                        canvas::Action::publish(Message::Zoom {
                            delta,
                            anchor_x: cursor_pos.x,
                        })
                        .and_capture(),
                    )
                } else if dy.abs() > dx.abs() {
                    // Plain vertical scroll pans horizontally.
                    Some(canvas::Action::publish(Message::Pan(-dy * PAN_STEP)).and_capture())
                } else {
                    Some(canvas::Action::publish(Message::Pan(-dx * PAN_STEP)).and_capture())
                }
            }
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let cursor_pos = cursor.position_in(bounds)?;
                let id = self.hit_test(cursor_pos.x, cursor_pos.y)?;
                Some(canvas::Action::publish(Message::SelectActivity(id)).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.12, 0.12, 0.15),
        );

        self.draw_ruler(&mut frame, bounds.width);

        // Lane rows
        for lane in 0..self.layout.lane_count() {
            let lane_top = RULER_HEIGHT + lane as f32 * LANE_HEIGHT;
            let bg = if lane % 2 == 0 {
                Color::from_rgb(0.15, 0.15, 0.18)
            } else {
                Color::from_rgb(0.17, 0.17, 0.20)
            };
            frame.fill_rectangle(
                Point::new(0.0, lane_top),
                Size::new(bounds.width, LANE_HEIGHT),
                bg,
            );
            frame.fill_rectangle(
                Point::new(0.0, lane_top + LANE_HEIGHT - 1.0),
                Size::new(bounds.width, 1.0),
                Color::from_rgb(0.3, 0.3, 0.35),
            );
        }

        // Activity blocks
        for activity in self.activities {
            let Some((lane, left, width)) = self.block_geometry(activity) else {
                continue;
            };
            if left + width < 0.0 || left > bounds.width {
                continue;
            }
            let lane_top = RULER_HEIGHT + lane as f32 * LANE_HEIGHT;
            let selected = self.selected == Some(activity.id);
            draw_block(&mut frame, activity, left, width, lane_top, selected);
        }

        // Now marker
        let now_px = self.minutes_to_px(f32::from(self.now.minutes()));
        if now_px >= 0.0 && now_px <= bounds.width {
            frame.fill_rectangle(
                Point::new(now_px, 0.0),
                Size::new(2.0, bounds.size().height),
                Color::from_rgb(1.0, 0.2, 0.2),
            );
            let triangle = canvas::Path::new(|b| {
                b.move_to(Point::new(now_px - 5.0, 0.0));
                b.line_to(Point::new(now_px + 5.0, 0.0));
                b.line_to(Point::new(now_px, 8.0));
                b.close();
            });
            frame.fill(&triangle, Color::from_rgb(1.0, 0.2, 0.2));
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if let Some(cursor_pos) = cursor.position_in(bounds) {
            if self.hit_test(cursor_pos.x, cursor_pos.y).is_some() {
                return mouse::Interaction::Pointer;
            }
        }
        mouse::Interaction::default()
    }
}

impl<'a> DayCanvas<'a> {
    fn draw_ruler(&self, frame: &mut canvas::Frame, width: f32) {
        frame.fill_rectangle(
            Point::ORIGIN,
            Size::new(width, RULER_HEIGHT),
            Color::from_rgb(0.2, 0.2, 0.25),
        );

        // Pick a tick spacing that keeps labels roughly 80px apart.
        let minutes_per_px = 1.0 / self.pixels_per_minute();
        let raw_interval = minutes_per_px * 80.0;
        let tick_interval: u16 = if raw_interval <= 15.0 {
            15
        } else if raw_interval <= 30.0 {
            30
        } else if raw_interval <= 60.0 {
            60
        } else if raw_interval <= 120.0 {
            120
        } else {
            180
        };

        let start = self.px_to_minutes(0.0).max(0.0) as u16;
        let end = self.px_to_minutes(width).min(f32::from(MINUTES_PER_DAY)) as u16;

        let mut t = (start / tick_interval) * tick_interval;
        while t <= end {
            let px = self.minutes_to_px(f32::from(t));
            frame.fill_rectangle(
                Point::new(px, 0.0),
                Size::new(1.0, RULER_HEIGHT),
                Color::from_rgb(0.5, 0.5, 0.55),
            );
            frame.fill_text(canvas::Text {
                content: TimeOfDay::from_minutes(t).to_string(),
                position: Point::new(px + 3.0, 5.0),
                color: Color::from_rgb(0.7, 0.7, 0.7),
                size: iced::Pixels(10.0),
                ..canvas::Text::default()
            });
            t += tick_interval;
        }
    }
}
