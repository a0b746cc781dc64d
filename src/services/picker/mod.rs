// Date range picker service
// Selection state, popup state and the month grid behind the range widget

mod clock;
mod events;
mod grid;
mod presets;

pub use clock::{Clock, FixedClock, SystemClock};
pub use events::{PickerEvent, SubscriptionId, Subscribers};
pub use grid::{CalendarGrid, DayCell, DAYS_PER_WEEK, GRID_DAYS, GRID_WEEKS};
pub use presets::preset_range;

use chrono::NaiveDate;

use crate::models::preset::PresetRange;
use crate::models::range::{DateRange, InvertPolicy};
use crate::models::settings::{EmitMode, PickerOptions, PickerTexts};
use crate::models::ui::OpenState;
use crate::utils::date::{is_same_day, months_between, shift_month};

/// Model behind a from/to date picker.
///
/// The host view owns the picker, forwards user input to it and redraws from
/// its accessors. Subscribers are called synchronously whenever an operation
/// may have changed the selected range.
pub struct DateRangePicker {
    options: PickerOptions,
    range: DateRange,
    open_state: OpenState,
    grid: CalendarGrid,
    active_preset: Option<PresetRange>,
    clock: Box<dyn Clock>,
    subscribers: Subscribers,
}

impl DateRangePicker {
    /// Create a picker using the local date as "today".
    ///
    /// Without both initial dates the selection starts on the current week.
    /// Missing options fall back to `PickerOptions::default()`.
    pub fn new(
        initial_from: Option<NaiveDate>,
        initial_to: Option<NaiveDate>,
        options: Option<PickerOptions>,
    ) -> Self {
        Self::with_clock(initial_from, initial_to, options, Box::new(SystemClock))
    }

    pub fn with_clock(
        initial_from: Option<NaiveDate>,
        initial_to: Option<NaiveDate>,
        options: Option<PickerOptions>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let options = options.unwrap_or_default();
        if let Err(e) = options.validate() {
            log::warn!("{}; every selection will be pinned to the maximum date", e);
        }

        let today = clock.today();
        let (range, active_preset) = match (initial_from, initial_to) {
            (Some(from), Some(to)) => (
                Self::initial_range(from, to, options.invert_policy),
                None,
            ),
            _ => (
                preset_range(PresetRange::ThisWeek, today, options.week_start),
                Some(PresetRange::ThisWeek),
            ),
        };
        let display_month = range.from.unwrap_or(today);
        let grid = CalendarGrid::generate(display_month, options.week_start);
        let range = range.clamped(options.min_date, options.max_date);

        log::debug!(
            "Date range picker initialized with {:?}..{:?}, showing {}",
            range.from,
            range.to,
            grid.month().format("%B %Y")
        );

        Self {
            options,
            range,
            open_state: OpenState::Closed,
            grid,
            active_preset,
            clock,
            subscribers: Subscribers::default(),
        }
    }

    fn initial_range(from: NaiveDate, to: NaiveDate, policy: InvertPolicy) -> DateRange {
        let mut range = DateRange::new(from, to);
        if to < from {
            log::warn!("Initial end {} is before start {}, applying {:?}", to, from, policy);
            range.to = match policy {
                InvertPolicy::Clear => None,
                InvertPolicy::Clamp => Some(from),
            };
        }
        range
    }

    // ---- Subscriptions ----

    pub fn subscribe(&mut self, callback: impl FnMut(&PickerEvent) + 'static) -> SubscriptionId {
        self.subscribers.add(Box::new(callback))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    // ---- Popup state ----

    /// Open, switch or close the popup for an endpoint.
    ///
    /// When the popup opens on an endpoint that lies in another month, the
    /// grid jumps to that month.
    pub fn toggle_open(&mut self, target: OpenState) {
        let next = self.open_state.toggled(target);
        log::debug!("Picker state {:?} -> {:?}", self.open_state, next);
        self.open_state = next;

        if let Some(endpoint) = self.open_endpoint() {
            let diff = months_between(self.grid.month(), endpoint);
            if diff != 0 {
                self.show_month(shift_month(self.grid.month(), diff));
            }
        }
    }

    /// Close the popup. Returns whether it was open.
    pub fn close_if_open(&mut self) -> bool {
        if !self.open_state.is_open() {
            return false;
        }
        log::debug!("Closing picker from {:?}", self.open_state);
        self.open_state = OpenState::Closed;
        true
    }

    /// Dismiss the popup for a pointer interaction reported by the host.
    ///
    /// Clicks inside the widget or on a day cell keep it open.
    pub fn handle_outside_interaction(&mut self, inside_widget: bool, on_day_cell: bool) -> bool {
        if inside_widget || on_day_cell {
            return false;
        }
        self.close_if_open()
    }

    // ---- Selection ----

    /// Replace the selection with a preset computed from today.
    pub fn select_preset(&mut self, preset: PresetRange) {
        let today = self.clock.today();
        self.range = preset_range(preset, today, self.options.week_start);
        self.active_preset = Some(preset);
        log::debug!("Applied preset {} relative to {}", preset, today);

        if let Some(from) = self.range.from {
            self.show_month(from);
        }
        self.clamp_and_emit();
    }

    /// Apply a click on a day cell to whichever endpoint is open.
    ///
    /// Returns false, without emitting, when the popup is closed.
    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        let policy = self.options.invert_policy;
        match self.open_state {
            OpenState::EditingFrom => self.range.set_from(date, policy),
            OpenState::EditingTo => self.range.set_to(date, policy),
            OpenState::Closed => {
                log::debug!("Ignoring selection of {} while closed", date);
                return false;
            }
        }
        self.active_preset = None;
        self.clamp_and_emit();
        true
    }

    /// Replace both endpoints from outside, e.g. when the host restores a
    /// saved filter.
    pub fn set_range(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.range = match (from, to) {
            (Some(from), Some(to)) => Self::initial_range(from, to, self.options.invert_policy),
            _ => DateRange { from, to },
        };
        self.active_preset = None;
        if let Some(from) = self.range.from {
            self.show_month(from);
        }
        self.clamp_and_emit();
    }

    /// Replace the options, regenerating the grid and re-clamping.
    pub fn set_options(&mut self, options: PickerOptions) {
        if let Err(e) = options.validate() {
            log::warn!("{}; every selection will be pinned to the maximum date", e);
        }
        self.options = options;
        self.show_month(self.grid.month());
        self.clamp_and_emit();
    }

    /// Pull the selection into the configured bounds and notify subscribers.
    pub fn clamp_and_emit(&mut self) {
        self.range = self
            .range
            .clamped(self.options.min_date, self.options.max_date);

        match self.options.emit_mode {
            EmitMode::Combined => {
                self.subscribers.notify(&PickerEvent::RangeChanged(self.range));
            }
            EmitMode::PerEndpoint => {
                self.subscribers.notify(&PickerEvent::FromChanged(self.range.from));
                self.subscribers.notify(&PickerEvent::ToChanged(self.range.to));
            }
        }
    }

    // ---- Month navigation ----

    pub fn prev_month(&mut self) {
        self.show_month(shift_month(self.grid.month(), -1));
    }

    pub fn next_month(&mut self) {
        self.show_month(shift_month(self.grid.month(), 1));
    }

    /// Show the month containing `date` and rebuild the grid.
    pub fn show_month(&mut self, date: NaiveDate) {
        self.grid = CalendarGrid::generate(date, self.options.week_start);
        log::debug!("Showing {}", self.grid.month().format("%B %Y"));
    }

    /// Rebuild the grid for the current month.
    pub fn generate_grid(&mut self) -> &[NaiveDate] {
        self.show_month(self.grid.month());
        self.grid.dates()
    }

    // ---- Day predicates ----

    pub fn is_within_range(&self, date: NaiveDate) -> bool {
        self.range.contains(date)
    }

    pub fn is_range_start(&self, date: NaiveDate) -> bool {
        is_same_day(date, self.range.from)
    }

    pub fn is_range_end(&self, date: NaiveDate) -> bool {
        is_same_day(date, self.range.to)
    }

    /// Outside the bounds or outside the displayed month
    pub fn is_out_of_focus(&self, date: NaiveDate) -> bool {
        !self.options.in_bounds(date) || !self.grid.in_month(date)
    }

    /// Predicates for every grid day, in grid order
    pub fn day_cells(&self) -> Vec<DayCell> {
        let today = self.clock.today();
        self.grid
            .dates()
            .iter()
            .map(|&date| DayCell {
                date,
                is_today: date == today,
                in_range: self.is_within_range(date),
                is_range_start: self.is_range_start(date),
                is_range_end: self.is_range_end(date),
                out_of_focus: self.is_out_of_focus(date),
            })
            .collect()
    }

    // ---- Accessors ----

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn from(&self) -> Option<NaiveDate> {
        self.range.from
    }

    pub fn to(&self) -> Option<NaiveDate> {
        self.range.to
    }

    pub fn open_state(&self) -> OpenState {
        self.open_state
    }

    /// First day of the displayed month
    pub fn display_month(&self) -> NaiveDate {
        self.grid.month()
    }

    pub fn grid(&self) -> &CalendarGrid {
        &self.grid
    }

    pub fn dates(&self) -> &[NaiveDate] {
        self.grid.dates()
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[NaiveDate]> {
        self.grid.weeks()
    }

    pub fn active_preset(&self) -> Option<PresetRange> {
        self.active_preset
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn texts(&self) -> &PickerTexts {
        &self.options.texts
    }

    /// Column headers in grid order
    pub fn day_names(&self) -> Vec<&str> {
        self.options.texts.day_names_for(self.options.week_start)
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    fn open_endpoint(&self) -> Option<NaiveDate> {
        match self.open_state {
            OpenState::EditingFrom => self.range.from,
            OpenState::EditingTo => self.range.to,
            OpenState::Closed => None,
        }
    }
}

impl std::fmt::Debug for DateRangePicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateRangePicker")
            .field("range", &self.range)
            .field("open_state", &self.open_state)
            .field("display_month", &self.grid.month())
            .field("active_preset", &self.active_preset)
            .field("subscribers", &self.subscribers)
            .finish()
    }
}
