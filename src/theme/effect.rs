/// Descriptor of the decorative full-page effect that accompanies a theme:
/// drifting particles in light mode, falling rain in dark mode.
///
/// Only the kind and element count live here; placement, opacity and
/// animation timing are the rendering collaborator's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmbientEffect {
    Particles { count: usize },
    Rain { drops: usize },
}

impl AmbientEffect {
    pub fn for_theme(dark_mode: bool) -> AmbientEffect {
        if dark_mode {
            AmbientEffect::Rain { drops: 40 }
        } else {
            AmbientEffect::Particles { count: 50 }
        }
    }
}
