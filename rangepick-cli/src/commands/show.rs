use anyhow::Result;
use chrono::NaiveDate;
use rangepick_core::config::RangePickConfig;
use rangepick_core::{DateRangeSelector, FixedClock, Selection, SelectorEvent};

use crate::render::Render;
use crate::today_or;

pub fn run(
    initial: Option<Selection>,
    today: Option<NaiveDate>,
    config: &RangePickConfig,
) -> Result<()> {
    let clock = FixedClock(today_or(today));
    let mut selector = DateRangeSelector::with_clock(initial, config.selector_options(), clock);
    selector.update(SelectorEvent::OpenPanel)?;

    println!("{}", selector.render());

    Ok(())
}
