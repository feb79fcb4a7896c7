use sensorview::{apply_theme, ChartHandle, ChartRegistry, ThemeStore};

struct NoopChart;

impl ChartHandle for NoopChart {
    fn refresh(&mut self) {}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let store = ThemeStore::new()?;
    let dark_mode = !store.load();

    // No live charts in this demo; a real page passes the registry returned
    // by the pipeline run so every panel redraws under the new theme.
    let mut charts: ChartRegistry<NoopChart> = ChartRegistry::new();
    let effect = apply_theme(dark_mode, &store, &mut charts)?;

    println!(
        "theme is now {}, ambient effect: {effect:?} (stored at {:?})",
        if dark_mode { "dark" } else { "light" },
        store.path()
    );
    Ok(())
}
