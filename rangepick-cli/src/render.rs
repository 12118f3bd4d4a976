//! TUI rendering for the selector.
//!
//! Extension traits that draw rangepick-core types as colored terminal text
//! using owo_colors. Plain text is padded before it is colored so columns
//! line up regardless of escape codes.

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use rangepick_core::calendar::month_name;
use rangepick_core::view::{GRID_COLUMNS, WEEKDAY_LABELS, build_month_grid};
use rangepick_core::{Clock, DateRangeSelector, Preset, Selection, TriggerVariant, YearMonth};

/// Width of one rendered month: 7 cells of 2 chars plus separating spaces.
const MONTH_WIDTH: usize = GRID_COLUMNS * 3 - 1;

/// Gap between side-by-side columns of the panel.
const COLUMN_GAP: &str = "   ";

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl<C: Clock> Render for DateRangeSelector<C> {
    /// The trigger control, followed by the panel when it is open.
    fn render(&self) -> String {
        let mut out = render_trigger(&self.trigger_label(), self.options().variant);
        if self.is_open() {
            out.push('\n');
            out.push_str(&render_panel(self));
        }
        out
    }
}

impl Render for Preset {
    fn render(&self) -> String {
        self.label().to_string()
    }
}

fn render_trigger(label: &str, variant: TriggerVariant) -> String {
    let text = format!("📅 {label}");
    match variant {
        TriggerVariant::Default => format!(" {} ", text.bold()).reversed().to_string(),
        TriggerVariant::Outline => format!("[ {} ]", text),
        TriggerVariant::Ghost => text,
        TriggerVariant::Link => text.underline().to_string(),
    }
}

/// Preset list, month/year dropdowns and month grids laid out side by side.
pub fn render_panel<C: Clock>(selector: &DateRangeSelector<C>) -> String {
    let presets = render_presets(selector.selected_preset());
    let preset_width = Preset::ALL
        .iter()
        .map(|p| p.label().len() + 2)
        .max()
        .unwrap_or(0);

    let months: Vec<Vec<String>> = selector
        .visible_months()
        .into_iter()
        .map(|month| {
            render_month(
                month,
                selector.selection().as_ref(),
                selector.pending_anchor(),
                selector.today(),
            )
        })
        .collect();

    let height = months
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(presets.len()))
        .max()
        .unwrap_or(0);

    let mut lines = Vec::new();

    if selector.options().month_year_dropdowns {
        let view = selector.view();
        let years = selector.year_options();
        lines.push(format!(
            "{}{}{}  {}  {}",
            " ".repeat(preset_width),
            COLUMN_GAP,
            "Month".dimmed(),
            format!("‹{}›", month_name(view.month())).bold(),
            format!(
                "{} ‹{}› {}",
                "Year".dimmed(),
                view.year().bold(),
                format!("({}-{})", years.start(), years.end()).dimmed()
            ),
        ));
    }

    for row in 0..height {
        let mut line = match presets.get(row) {
            Some(cell) => cell.clone(),
            None => " ".repeat(preset_width),
        };
        for month in &months {
            line.push_str(COLUMN_GAP);
            match month.get(row) {
                Some(cell) => line.push_str(cell),
                None => line.push_str(&" ".repeat(MONTH_WIDTH)),
            }
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

/// One line per preset, padded to a common width. The active preset is
/// highlighted.
pub fn render_presets(selected: Option<Preset>) -> Vec<String> {
    let width = Preset::ALL.iter().map(|p| p.label().len()).max().unwrap_or(0);

    Preset::ALL
        .iter()
        .map(|preset| {
            let padded = format!(" {:width$} ", preset.render(), width = width);
            if selected == Some(*preset) {
                padded.reversed().to_string()
            } else {
                padded
            }
        })
        .collect()
}

/// A month header, weekday labels, then six rows of day cells.
pub fn render_month(
    month: YearMonth,
    selection: Option<&Selection>,
    anchor: Option<NaiveDate>,
    today: NaiveDate,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(8);

    let title = month.to_string();
    lines.push(format!("{:^width$}", title, width = MONTH_WIDTH).bold().to_string());
    lines.push(WEEKDAY_LABELS.join(" ").dimmed().to_string());

    for week in build_month_grid(month) {
        let cells: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                Some(day) => render_day(*day, selection, anchor, today),
                None => "  ".to_string(),
            })
            .collect();
        lines.push(cells.join(" "));
    }

    lines
}

fn render_day(
    day: NaiveDate,
    selection: Option<&Selection>,
    anchor: Option<NaiveDate>,
    today: NaiveDate,
) -> String {
    use chrono::Datelike;

    let text = format!("{:>2}", day.day());

    if anchor == Some(day) {
        return text.black().on_yellow().to_string();
    }

    match selection {
        Some(sel) if sel.from_date() == day || sel.to_date() == day => {
            text.bold().reversed().to_string()
        }
        Some(sel) if sel.contains(day) => text.on_blue().to_string(),
        _ if day == today => text.underline().to_string(),
        _ => text,
    }
}
