use anyhow::Result;
use rangepick_core::{Selection, YearMonth};

pub fn run(month: u32, year: i32, json: bool) -> Result<()> {
    let Some(month) = YearMonth::new(year, month) else {
        anyhow::bail!("Invalid month {month} {year}. Expected month 1-12 in a representable year");
    };

    let selection = Selection::normalized(month.first_day(), month.last_day());

    if json {
        println!("{}", serde_json::to_string_pretty(&selection)?);
    } else {
        println!("{month}: {selection}");
    }

    Ok(())
}
