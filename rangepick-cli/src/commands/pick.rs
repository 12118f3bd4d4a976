use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;
use rangepick_core::calendar::month_name;
use rangepick_core::selection::parse_date;
use rangepick_core::{
    Clock, CloseReason, DateRangeSelector, Preset, Selection, SelectorEvent, SelectorOptions,
};
use tracing::debug;

use crate::render::Render;

/// One entry in the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Toggle,
    Preset(Preset),
    ClickDay,
    PreviousMonth,
    NextMonth,
    ChangeMonth,
    ChangeYear,
    Escape,
    Done,
}

impl Action {
    fn label(&self) -> String {
        match self {
            Action::Toggle => "Open picker".to_string(),
            Action::Preset(preset) => preset.label().to_string(),
            Action::ClickDay => "Click a day…".to_string(),
            Action::PreviousMonth => "‹ Previous month".to_string(),
            Action::NextMonth => "Next month ›".to_string(),
            Action::ChangeMonth => "Month dropdown…".to_string(),
            Action::ChangeYear => "Year dropdown…".to_string(),
            Action::Escape => "Close (Esc)".to_string(),
            Action::Done => "Done".to_string(),
        }
    }
}

/// Menu entries for the selector's current state.
fn menu_actions<C: Clock>(selector: &DateRangeSelector<C>) -> Vec<Action> {
    if !selector.is_open() {
        return vec![Action::Toggle, Action::Done];
    }

    let mut actions: Vec<Action> = Preset::ALL.into_iter().map(Action::Preset).collect();
    actions.extend([Action::ClickDay, Action::PreviousMonth, Action::NextMonth]);
    if selector.options().month_year_dropdowns {
        actions.extend([Action::ChangeMonth, Action::ChangeYear]);
    }
    actions.extend([Action::Escape, Action::Done]);
    actions
}

pub fn run(initial: Option<Selection>, options: SelectorOptions) -> Result<()> {
    let mut selector = DateRangeSelector::new(initial, options).on_date_select(|selection| {
        println!("  {} {}", "✓".green(), selection.to_string().green());
    });

    loop {
        println!();
        println!("{}", selector.render());
        println!();

        let actions = menu_actions(&selector);
        let labels: Vec<String> = actions.iter().map(Action::label).collect();
        let default = actions
            .iter()
            .position(|a| matches!(a, Action::Preset(p) if Some(*p) == selector.selected_preset()))
            .unwrap_or(0);

        let choice = Select::new()
            .with_prompt("  Action")
            .items(&labels)
            .default(default)
            .interact()?;

        let event = match actions[choice] {
            Action::Toggle => SelectorEvent::TogglePanel,
            Action::Preset(preset) => SelectorEvent::SelectPreset(preset),
            Action::ClickDay => SelectorEvent::ClickDay(prompt_day(&selector)?),
            Action::PreviousMonth => SelectorEvent::PreviousMonth,
            Action::NextMonth => SelectorEvent::NextMonth,
            Action::ChangeMonth => SelectorEvent::ChangeMonth(prompt_month(&selector)?),
            Action::ChangeYear => SelectorEvent::ChangeYear(prompt_year(&selector)?),
            Action::Escape => SelectorEvent::ClosePanel(CloseReason::Escape),
            Action::Done => break,
        };

        if let Err(e) = selector.update(event) {
            debug!(?event, error = %e, "event rejected");
            eprintln!("  {}", e.to_string().red());
        }
    }

    match selector.selection() {
        Some(selection) => println!("{}", serde_json::to_string_pretty(&selection)?),
        None => println!("{}", "No range selected".dimmed()),
    }

    Ok(())
}

fn prompt_day<C: Clock>(selector: &DateRangeSelector<C>) -> Result<NaiveDate> {
    let hint = match selector.pending_anchor() {
        Some(anchor) => format!("  Second day (first: {anchor})"),
        None => "  Day (YYYY-MM-DD)".to_string(),
    };

    loop {
        let input: String = Input::new()
            .with_prompt(&hint)
            .default(selector.view().first_day().to_string())
            .interact_text()?;
        match parse_date(&input) {
            Ok(date) => return Ok(date),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}

fn prompt_month<C: Clock>(selector: &DateRangeSelector<C>) -> Result<u32> {
    let months: Vec<&str> = (1..=12).map(month_name).collect();
    let index = Select::new()
        .with_prompt("  Month")
        .items(&months)
        .default(selector.view().month_index() as usize)
        .interact()?;
    Ok(index as u32)
}

fn prompt_year<C: Clock>(selector: &DateRangeSelector<C>) -> Result<i32> {
    let years = selector.year_options();
    let year: i32 = Input::new()
        .with_prompt(format!("  Year ({}-{})", years.start(), years.end()))
        .default(selector.view().year())
        .interact_text()?;
    Ok(year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rangepick_core::FixedClock;

    fn selector(options: SelectorOptions) -> DateRangeSelector<FixedClock> {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        DateRangeSelector::with_clock(None, options, FixedClock(today))
    }

    #[test]
    fn closed_menu_only_opens_or_finishes() {
        let s = selector(SelectorOptions::default());
        assert_eq!(menu_actions(&s), vec![Action::Toggle, Action::Done]);
    }

    #[test]
    fn open_menu_lists_presets_first() {
        let mut s = selector(SelectorOptions::default());
        s.update(SelectorEvent::OpenPanel).unwrap();
        let actions = menu_actions(&s);
        assert_eq!(actions[0], Action::Preset(Preset::Today));
        assert_eq!(actions[8], Action::Preset(Preset::LastYear));
        assert!(!actions.contains(&Action::ChangeMonth));
        assert_eq!(actions.last(), Some(&Action::Done));
    }

    #[test]
    fn dropdown_actions_follow_options() {
        let mut s = selector(SelectorOptions {
            month_year_dropdowns: true,
            ..Default::default()
        });
        s.update(SelectorEvent::OpenPanel).unwrap();
        let actions = menu_actions(&s);
        assert!(actions.contains(&Action::ChangeMonth));
        assert!(actions.contains(&Action::ChangeYear));
    }
}
