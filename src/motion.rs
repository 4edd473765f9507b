pub const REVEAL_DURATION_MS: u32 = 600;

const TRANSITION_CLASS: &str = "transition-all ease-out will-change-transform";

/// Enter animations for [`RevealState`]-driven regions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealVariant {
    #[default]
    FadeInUp,
    FadeInLeft,
    FadeInRight,
    ScaleIn,
    SlideInFromBottom,
    SlideInFromTop,
}

impl RevealVariant {
    pub fn hidden_class(self) -> &'static str {
        match self {
            RevealVariant::FadeInUp => "opacity-0 translate-y-[30px]",
            RevealVariant::FadeInLeft => "opacity-0 -translate-x-[30px]",
            RevealVariant::FadeInRight => "opacity-0 translate-x-[30px]",
            RevealVariant::ScaleIn => "opacity-0 scale-[0.8]",
            RevealVariant::SlideInFromBottom => "opacity-0 translate-y-[100px]",
            RevealVariant::SlideInFromTop => "opacity-0 -translate-y-[100px]",
        }
    }

    pub fn visible_class(self) -> &'static str {
        match self {
            RevealVariant::ScaleIn => "opacity-100 scale-100",
            RevealVariant::FadeInLeft | RevealVariant::FadeInRight => "opacity-100 translate-x-0",
            _ => "opacity-100 translate-y-0",
        }
    }
}

/// Plays once: the first visible observation flips `fired`, nothing
/// afterwards flips it back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealState {
    fired: bool,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Returns true only for the observation that starts the animation.
    pub fn observe(&mut self, is_visible: bool) -> bool {
        if self.fired || !is_visible {
            return false;
        }
        self.fired = true;
        true
    }
}

pub fn reveal_class(variant: RevealVariant, fired: bool) -> String {
    let state = if fired {
        variant.visible_class()
    } else {
        variant.hidden_class()
    };
    format!("{TRANSITION_CLASS} {state}")
}

pub fn reveal_style(delay_ms: u32) -> String {
    format!("transition-duration: {REVEAL_DURATION_MS}ms; transition-delay: {delay_ms}ms;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once() {
        let mut state = RevealState::new();
        assert!(!state.observe(false));
        assert!(!state.has_fired());

        assert!(state.observe(true));
        assert!(state.has_fired());

        // leaving and re-entering the viewport does not replay
        assert!(!state.observe(false));
        assert!(!state.observe(true));
        assert!(state.has_fired());
    }

    #[test]
    fn test_reveal_class_switches_state() {
        let hidden = reveal_class(RevealVariant::FadeInUp, false);
        assert!(hidden.contains("opacity-0"));
        assert!(hidden.contains("translate-y-[30px]"));
        assert!(hidden.starts_with(TRANSITION_CLASS));

        let shown = reveal_class(RevealVariant::FadeInUp, true);
        assert!(shown.contains("opacity-100"));
        assert!(!shown.contains("opacity-0"));
    }

    #[test]
    fn test_every_variant_starts_transparent() {
        for variant in [
            RevealVariant::FadeInUp,
            RevealVariant::FadeInLeft,
            RevealVariant::FadeInRight,
            RevealVariant::ScaleIn,
            RevealVariant::SlideInFromBottom,
            RevealVariant::SlideInFromTop,
        ] {
            assert!(variant.hidden_class().starts_with("opacity-0"));
            assert!(variant.visible_class().starts_with("opacity-100"));
        }
    }

    #[test]
    fn test_reveal_style() {
        assert_eq!(
            reveal_style(200),
            "transition-duration: 600ms; transition-delay: 200ms;"
        );
    }
}
