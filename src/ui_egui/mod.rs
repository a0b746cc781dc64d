mod app;
mod picker_view;
pub mod theme;

pub use app::RangePickerApp;
pub use picker_view::show_range_picker;
