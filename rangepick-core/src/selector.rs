//! The date-range selector state machine.
//!
//! A [`DateRangeSelector`] owns everything the widget needs to remember
//! between interactions: whether the panel is open, the committed
//! [`Selection`], the month the grid shows, which preset produced the
//! selection, and the first day of a half-finished two-click range. Hosts feed
//! it [`SelectorEvent`]s through [`DateRangeSelector::update`] and render from
//! the accessors afterwards.
//!
//! Every commit, whichever path it came from, goes through one place and is
//! reported to the `on_date_select` callback.

use std::ops::RangeInclusive;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{RangePickError, RangePickResult};
use crate::preset::{Preset, PresetArithmetic, compute_range};
use crate::selection::{Selection, trigger_text};
use crate::view::YearMonth;

/// Source of "today" for preset computation.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Visual style of the trigger control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriggerVariant {
    Default,
    #[default]
    Outline,
    Ghost,
    Link,
}

/// Why the panel was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    OutsideClick,
    Escape,
    CloseButton,
}

/// Everything a user can do to the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorEvent {
    /// Click on the trigger.
    TogglePanel,
    OpenPanel,
    ClosePanel(CloseReason),
    /// Click on a quick-select preset.
    SelectPreset(Preset),
    /// A range reported by the grid in one go. `to` may be missing when only
    /// one day has been picked.
    SelectRange {
        from: NaiveDate,
        to: Option<NaiveDate>,
    },
    /// A single click on a grid day, part of a two-click range gesture.
    ClickDay(NaiveDate),
    PreviousMonth,
    NextMonth,
    /// Month dropdown, zero-based index. Commits that whole month.
    ChangeMonth(u32),
    /// Year dropdown. Commits the displayed month of that year.
    ChangeYear(i32),
}

/// Defaults for selector behavior.
pub struct SelectorDefaults;

impl SelectorDefaults {
    /// Default selectable year range for the year dropdown.
    pub const YEAR_RANGE: RangeInclusive<i32> = 1900..=2100;

    /// Months shown side by side.
    pub const NUMBER_OF_MONTHS: u8 = 2;
}

/// Behavior switches supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorOptions {
    /// Close the panel after a preset click.
    pub close_on_select: bool,
    pub variant: TriggerVariant,
    /// The richer variant: month and year dropdowns above the grid.
    pub month_year_dropdowns: bool,
    pub number_of_months: u8,
    pub arithmetic: PresetArithmetic,
    pub year_range: RangeInclusive<i32>,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            close_on_select: true,
            variant: TriggerVariant::default(),
            month_year_dropdowns: false,
            number_of_months: SelectorDefaults::NUMBER_OF_MONTHS,
            arithmetic: PresetArithmetic::default(),
            year_range: SelectorDefaults::YEAR_RANGE,
        }
    }
}

type OnDateSelect = Box<dyn FnMut(Selection)>;

/// Holds the selection and display state for one date-range selector.
pub struct DateRangeSelector<C: Clock = SystemClock> {
    options: SelectorOptions,
    clock: C,
    open: bool,
    selection: Option<Selection>,
    view: YearMonth,
    selected_preset: Option<Preset>,
    pending_anchor: Option<NaiveDate>,
    on_date_select: Option<OnDateSelect>,
}

impl DateRangeSelector<SystemClock> {
    /// Creates a selector reading today from the local clock.
    pub fn new(initial: Option<Selection>, options: SelectorOptions) -> Self {
        Self::with_clock(initial, options, SystemClock)
    }
}

impl<C: Clock> DateRangeSelector<C> {
    /// Creates a selector with an explicit clock.
    ///
    /// The grid opens on the month of `initial.from`, or on the current month
    /// when there is no initial selection.
    pub fn with_clock(initial: Option<Selection>, mut options: SelectorOptions, clock: C) -> Self {
        options.number_of_months = options.number_of_months.max(1);
        if options.year_range.start() > options.year_range.end() {
            options.year_range = *options.year_range.end()..=*options.year_range.start();
        }
        options.year_range = (*options.year_range.start()).max(NaiveDate::MIN.year())
            ..=(*options.year_range.end()).min(NaiveDate::MAX.year());

        let view = YearMonth::containing(
            initial
                .map(|s| s.from_date())
                .unwrap_or_else(|| clock.today()),
        );

        Self {
            options,
            clock,
            open: false,
            selection: initial,
            view,
            selected_preset: None,
            pending_anchor: None,
            on_date_select: None,
        }
    }

    /// Registers the callback that receives every committed selection.
    pub fn on_date_select<F>(mut self, f: F) -> Self
    where
        F: FnMut(Selection) + 'static,
    {
        self.on_date_select = Some(Box::new(f));
        self
    }

    /// Marks `preset` as the source of the initial selection, so the panel
    /// highlights it on first open.
    pub fn with_selected_preset(mut self, preset: Preset) -> Self {
        self.selected_preset = Some(preset);
        self
    }

    /// Applies one user interaction. Returns the selection committed by this
    /// event, if any.
    pub fn update(&mut self, event: SelectorEvent) -> RangePickResult<Option<Selection>> {
        trace!(?event, "selector event");

        match event {
            SelectorEvent::TogglePanel => {
                self.open = !self.open;
                if !self.open {
                    self.pending_anchor = None;
                }
                Ok(None)
            }
            SelectorEvent::OpenPanel => {
                self.open = true;
                Ok(None)
            }
            SelectorEvent::ClosePanel(reason) => {
                debug!(?reason, "closing panel");
                self.open = false;
                self.pending_anchor = None;
                Ok(None)
            }
            SelectorEvent::SelectPreset(preset) => Ok(Some(self.select_preset(preset))),
            SelectorEvent::SelectRange { from, to } => Ok(Some(self.select_range(from, to))),
            SelectorEvent::ClickDay(date) => Ok(Some(self.click_day(date))),
            SelectorEvent::PreviousMonth => {
                self.view = self.view.add_months(-1);
                Ok(None)
            }
            SelectorEvent::NextMonth => {
                self.view = self.view.add_months(1);
                Ok(None)
            }
            SelectorEvent::ChangeMonth(index) => {
                self.ensure_dropdowns()?;
                let month = index
                    .checked_add(1)
                    .and_then(|m| YearMonth::new(self.view.year(), m))
                    .ok_or(RangePickError::InvalidMonth(index))?;
                self.select_month(month).map(Some)
            }
            SelectorEvent::ChangeYear(year) => {
                self.ensure_dropdowns()?;
                let month = YearMonth::new(year, self.view.month())
                    .ok_or_else(|| self.year_out_of_range(year))?;
                self.select_month(month).map(Some)
            }
        }
    }

    fn select_preset(&mut self, preset: Preset) -> Selection {
        let selection = compute_range(preset, self.clock.today(), self.options.arithmetic);
        self.commit(selection);
        self.selected_preset = Some(preset);
        if self.options.close_on_select {
            self.open = false;
        }
        selection
    }

    fn select_range(&mut self, from: NaiveDate, to: Option<NaiveDate>) -> Selection {
        let selection = Selection::from_pick(from, to);
        self.commit(selection);
        selection
    }

    fn click_day(&mut self, date: NaiveDate) -> Selection {
        match self.pending_anchor.take() {
            Some(anchor) => {
                let selection = Selection::normalized(anchor, date);
                self.commit(selection);
                selection
            }
            None => {
                let selection = Selection::day(date);
                self.commit(selection);
                self.pending_anchor = Some(date);
                selection
            }
        }
    }

    /// Dropdown navigation commits the whole month it lands on, not just the
    /// view.
    fn select_month(&mut self, month: YearMonth) -> RangePickResult<Selection> {
        if !self.options.year_range.contains(&month.year()) {
            return Err(self.year_out_of_range(month.year()));
        }

        let selection = Selection::normalized(month.first_day(), month.last_day());
        self.commit(selection);
        Ok(selection)
    }

    fn ensure_dropdowns(&self) -> RangePickResult<()> {
        if self.options.month_year_dropdowns {
            Ok(())
        } else {
            Err(RangePickError::DropdownsDisabled)
        }
    }

    fn year_out_of_range(&self, year: i32) -> RangePickError {
        let range = &self.options.year_range;
        RangePickError::YearOutOfRange {
            year,
            min: *range.start(),
            max: *range.end(),
        }
    }

    fn commit(&mut self, selection: Selection) {
        debug!(
            from = %selection.from(),
            to = %selection.to(),
            "committing selection"
        );
        self.selection = Some(selection);
        self.pending_anchor = None;
        self.view = YearMonth::containing(selection.from_date());
        self.selected_preset = None;
        if let Some(callback) = self.on_date_select.as_mut() {
            callback(selection);
        }
    }

    pub fn options(&self) -> &SelectorOptions {
        &self.options
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// First month shown by the grid.
    pub fn view(&self) -> YearMonth {
        self.view
    }

    /// Every month shown side by side, starting at [`Self::view`].
    pub fn visible_months(&self) -> Vec<YearMonth> {
        (0..self.options.number_of_months)
            .map(|offset| self.view.add_months(offset as i32))
            .collect()
    }

    /// The preset that produced the current selection, if it came from one.
    pub fn selected_preset(&self) -> Option<Preset> {
        self.selected_preset
    }

    /// First day of a two-click range still waiting for its second click.
    pub fn pending_anchor(&self) -> Option<NaiveDate> {
        self.pending_anchor
    }

    /// Text shown on the trigger control.
    pub fn trigger_label(&self) -> String {
        trigger_text(self.selection.as_ref())
    }

    /// Years offered by the year dropdown.
    pub fn year_options(&self) -> RangeInclusive<i32> {
        self.options.year_range.clone()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}
