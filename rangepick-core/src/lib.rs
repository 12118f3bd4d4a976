//! Core of the rangepick date-range selector.
//!
//! This crate is UI-agnostic. It provides:
//! - `preset` with the quick-select rules and the pure `compute_range`
//! - `selector` with the `DateRangeSelector` state machine hosts drive
//! - `selection`, `view` and `calendar` for the value types and date math
//! - `config` for user defaults

pub mod calendar;
pub mod config;
pub mod error;
pub mod preset;
pub mod selection;
pub mod selector;
pub mod view;

pub use error::{RangePickError, RangePickResult};
pub use preset::{Preset, PresetArithmetic, compute_range};
pub use selection::Selection;
pub use selector::{
    Clock, CloseReason, DateRangeSelector, FixedClock, SelectorEvent, SelectorOptions,
    SystemClock, TriggerVariant,
};
pub use view::YearMonth;
