use anyhow::Result;
use rangepick_core::config::RangePickConfig;
use rangepick_core::{Clock, Preset, compute_range};

pub fn run(preset: &str, clock: &dyn Clock, config: &RangePickConfig, json: bool) -> Result<()> {
    let preset: Preset = preset.parse().map_err(|e| {
        let available: Vec<_> = Preset::ALL.iter().map(|p| p.key()).collect();
        anyhow::anyhow!("{e}. Available: {}", available.join(", "))
    })?;

    let selection = compute_range(preset, clock.today(), config.calendar_arithmetic);

    if json {
        println!("{}", serde_json::to_string_pretty(&selection)?);
    } else {
        println!("{selection}");
    }

    Ok(())
}
