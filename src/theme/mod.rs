//! The light/dark theme preference and everything that reacts to it.
//! Cosmetic state, deliberately separate from the data pipeline; the only
//! thing it shares with it is the chart registry it refreshes on toggle.

pub mod effect;
pub mod error;
pub mod store;

use crate::charts::surface::{ChartHandle, ChartRegistry};
use crate::theme::effect::AmbientEffect;
use crate::theme::error::ThemeError;
use crate::theme::store::ThemeStore;
use log::info;

/// Applies a theme choice: persists the flag, refreshes every rendered
/// chart so it redraws under the new theme, and returns the ambient effect
/// the page should regenerate.
pub fn apply_theme<H: ChartHandle>(
    dark_mode: bool,
    store: &ThemeStore,
    charts: &mut ChartRegistry<H>,
) -> Result<AmbientEffect, ThemeError> {
    store.save(dark_mode)?;
    charts.refresh_all();
    info!(
        "Applied {} theme, refreshed {} charts",
        if dark_mode { "dark" } else { "light" },
        charts.len()
    );
    Ok(AmbientEffect::for_theme(dark_mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    struct CountingHandle {
        refreshes: usize,
    }

    impl ChartHandle for CountingHandle {
        fn refresh(&mut self) {
            self.refreshes += 1;
        }
    }

    #[test]
    fn apply_persists_refreshes_and_picks_the_effect() {
        let dir = tempdir().unwrap();
        let store = ThemeStore::with_file(dir.path().join("theme.json"));
        let mut charts = ChartRegistry::new();
        charts.register(CountingHandle { refreshes: 0 });
        charts.register(CountingHandle { refreshes: 0 });

        let effect = apply_theme(true, &store, &mut charts).unwrap();
        assert_eq!(effect, AmbientEffect::Rain { drops: 40 });
        assert!(store.load());
        assert!(charts.iter().all(|h| h.refreshes == 1));

        let effect = apply_theme(false, &store, &mut charts).unwrap();
        assert_eq!(effect, AmbientEffect::Particles { count: 50 });
        assert!(!store.load());
        assert!(charts.iter().all(|h| h.refreshes == 2));
    }
}
