use anyhow::Result;
use owo_colors::OwoColorize;
use rangepick_core::config::RangePickConfig;

pub fn run(reset: bool) -> Result<()> {
    let config_path = RangePickConfig::config_path()?;
    if reset {
        RangePickConfig::default().save()?;
        println!("{} {}", "Reset".green(), config_path.display());
        println!();
    }
    let config = RangePickConfig::load()?;

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());

    println!();
    println!("{}", "Selector".bold());
    println!("  close_on_select:      {}", config.close_on_select);
    println!("  month_year_dropdowns: {}", config.month_year_dropdowns);
    println!("  number_of_months:     {}", config.number_of_months);
    println!("  variant:              {:?}", config.variant);
    println!("  calendar_arithmetic:  {:?}", config.calendar_arithmetic);
    println!(
        "  year_range:           {}-{}",
        config.year_range[0], config.year_range[1]
    );

    Ok(())
}
