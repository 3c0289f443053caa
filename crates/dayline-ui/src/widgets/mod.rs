pub mod day_canvas;
