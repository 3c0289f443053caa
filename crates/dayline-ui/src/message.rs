use std::path::PathBuf;

use uuid::Uuid;

use dayline_core::activity::ActivityStatus;
use dayline_core::schedule::Schedule;

#[derive(Debug, Clone)]
pub enum Message {
    /// One paint-cycle tick: refresh the clock, commit staged viewport
    /// writes, perform the one-time centering.
    FrameTick,
    /// Window width changed; centering math depends on it.
    Resized(f32),

    // Gestures, pre-normalized by the canvas.
    Zoom { delta: f32, anchor_x: f32 },
    Pan(f32),
    PinchBegin(f32),
    PinchMove { distance: f32, midpoint_x: f32 },
    PinchEnd,

    // Selection / details panel.
    SelectActivity(Uuid),
    CloseDetails,
    SetStatus { id: Uuid, status: ActivityStatus },

    // Schedule store boundary.
    OpenScheduleDialog,
    ScheduleFileChosen(Option<PathBuf>),
    ScheduleLoaded(Result<Schedule, String>),
    SaveSchedule,
}
