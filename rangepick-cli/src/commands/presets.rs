use anyhow::Result;
use owo_colors::OwoColorize;
use rangepick_core::config::RangePickConfig;
use rangepick_core::{Clock, Preset, compute_range};
use serde_json::json;

pub fn run(clock: &dyn Clock, config: &RangePickConfig, json: bool) -> Result<()> {
    let today = clock.today();
    let ranges: Vec<_> = Preset::ALL
        .into_iter()
        .map(|preset| (preset, compute_range(preset, today, config.calendar_arithmetic)))
        .collect();

    if json {
        let entries: Vec<_> = ranges
            .iter()
            .map(|(preset, selection)| {
                json!({
                    "label": preset.label(),
                    "key": preset.key(),
                    "from": selection.from(),
                    "to": selection.to(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{} {}", "Presets for".dimmed(), today.format("%a %b %d, %Y").bold());
    let width = Preset::ALL.iter().map(|p| p.label().len()).max().unwrap_or(0);
    for (preset, selection) in &ranges {
        println!(
            "  {:width$}  {}  {}",
            preset.label(),
            selection,
            format!("({})", preset.key()).dimmed(),
            width = width
        );
    }

    Ok(())
}
