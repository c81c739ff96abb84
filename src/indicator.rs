//! The running indicator and its mount lifecycle.
//!
//! A `RunningIndicator` is built once from a skin and a theme. Rendering it
//! directly is pure. Mounting it acquires whatever the skin needs to
//! animate (a repeating timer for stepped skins, nothing for CSS skins);
//! unmounting or dropping the `MountedIndicator` releases it.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::skin::{Glyph, Rendered, Skin};
use crate::theme::{Theme, ThemeColor};
use crate::timer::{RepeatingTimer, TimerError, TimerProbe};

#[derive(Debug, thiserror::Error)]
pub enum IndicatorError {
    #[error("Cannot mount the {0} indicator outside a tokio runtime")]
    NoRuntime(Skin),
}

pub struct RunningIndicator {
    glyph: Arc<dyn Glyph>,
    color: ThemeColor,
}

impl RunningIndicator {
    /// Select the skin implementation and resolve its color from the theme.
    pub fn new(skin: Skin, theme: &Theme) -> Self {
        let glyph: Arc<dyn Glyph> = Arc::from(skin.glyph());
        let color = theme.resolve(glyph.color_role());
        Self { glyph, color }
    }

    pub fn skin(&self) -> Skin {
        self.glyph.skin()
    }

    pub fn glyph(&self) -> &dyn Glyph {
        self.glyph.as_ref()
    }

    pub fn color(&self) -> &ThemeColor {
        &self.color
    }

    /// Render the initial frame without mounting.
    pub fn render(&self) -> Rendered {
        self.glyph.render(&self.color, 0)
    }

    /// Mount the indicator, starting its timer if the skin is stepped.
    pub fn mount(&self) -> Result<MountedIndicator, IndicatorError> {
        let (phase_tx, phase_rx) = watch::channel(0usize);

        let timer = match self.glyph.schedule() {
            Some(schedule) => {
                let timer = RepeatingTimer::spawn(schedule.interval, move |ticks| {
                    phase_tx.send_replace(schedule.phase_after(ticks));
                })
                .map_err(|e| match e {
                    TimerError::NoRuntime => IndicatorError::NoRuntime(self.skin()),
                })?;
                Some(timer)
            }
            None => None,
        };

        debug!(skin = %self.skin(), timed = timer.is_some(), "indicator:mount");
        Ok(MountedIndicator {
            glyph: Arc::clone(&self.glyph),
            color: self.color.clone(),
            phase: phase_rx,
            timer,
        })
    }
}

/// A mounted indicator. Owns the skin's timer until unmounted or dropped.
pub struct MountedIndicator {
    glyph: Arc<dyn Glyph>,
    color: ThemeColor,
    phase: watch::Receiver<usize>,
    timer: Option<RepeatingTimer>,
}

impl MountedIndicator {
    pub fn skin(&self) -> Skin {
        self.glyph.skin()
    }

    /// Current phase index. Always 0 for CSS-only skins.
    pub fn phase(&self) -> usize {
        *self.phase.borrow()
    }

    /// Receiver that changes whenever the phase advances; use it to trigger
    /// re-renders.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.phase.clone()
    }

    /// Render the current frame.
    pub fn render(&self) -> Rendered {
        self.glyph.render(&self.color, self.phase())
    }

    /// Probe of the owned timer, if the skin uses one.
    pub fn timer_probe(&self) -> Option<TimerProbe> {
        self.timer.as_ref().map(RepeatingTimer::probe)
    }

    /// Number of timers this indicator currently has scheduled.
    pub fn pending_timers(&self) -> usize {
        self.timer
            .as_ref()
            .map_or(0, |t| usize::from(t.probe().is_active()))
    }

    /// Unmount, cancelling the timer if any.
    pub fn unmount(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
            debug!(skin = %self.skin(), "indicator:unmount");
        }
    }
}

impl Drop for MountedIndicator {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skin::HOURGLASS_GLYPHS;
    use crate::theme::FALLBACK_FADED_TEXT_60;
    use std::time::Duration;

    async fn advance(d: Duration) {
        tokio::time::advance(d).await;
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn hourglass_advances_three_phases_in_1800ms() {
        let indicator = RunningIndicator::new(Skin::Hourglass, &Theme::default());
        let mounted = indicator.mount().unwrap();
        let probe = mounted.timer_probe().unwrap();
        assert!(
            mounted
                .render()
                .markup_html()
                .ends_with(&format!(">{}</span>", HOURGLASS_GLYPHS[0]))
        );

        advance(Duration::from_millis(1800)).await;

        assert_eq!(probe.ticks(), 3);
        assert_eq!(mounted.phase(), 3 % 2);
        assert!(
            mounted
                .render()
                .markup_html()
                .ends_with(&format!(">{}</span>", HOURGLASS_GLYPHS[1]))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn hourglass_phase_is_ticks_mod_two() {
        let indicator = RunningIndicator::new(Skin::Hourglass, &Theme::default());
        let mounted = indicator.mount().unwrap();
        let probe = mounted.timer_probe().unwrap();

        for n in 1..=20u64 {
            advance(Duration::from_millis(600)).await;
            assert_eq!(probe.ticks(), n);
            assert_eq!(mounted.phase() as u64, n % 2);
            assert!(mounted.phase() < HOURGLASS_GLYPHS.len());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn subscriber_sees_phase_changes() {
        let indicator = RunningIndicator::new(Skin::Hourglass, &Theme::default());
        let mounted = indicator.mount().unwrap();
        let mut rx = mounted.subscribe();

        advance(Duration::from_millis(600)).await;
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_cancels_timer_once_and_freezes_ticks() {
        let indicator = RunningIndicator::new(Skin::Hourglass, &Theme::default());
        let mounted = indicator.mount().unwrap();
        let probe = mounted.timer_probe().unwrap();
        assert_eq!(mounted.pending_timers(), 1);
        assert_eq!(probe.cancellations(), 0);

        advance(Duration::from_millis(1200)).await;
        assert_eq!(probe.ticks(), 2);

        mounted.unmount();
        assert_eq!(probe.cancellations(), 1);
        assert!(!probe.is_active());

        advance(Duration::from_secs(10)).await;
        assert_eq!(probe.ticks(), 2);
        assert_eq!(probe.cancellations(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_releases_timer() {
        let indicator = RunningIndicator::new(Skin::Hourglass, &Theme::default());
        let probe = {
            let mounted = indicator.mount().unwrap();
            mounted.timer_probe().unwrap()
        };
        assert_eq!(probe.cancellations(), 1);
        advance(Duration::from_secs(5)).await;
        assert_eq!(probe.ticks(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn each_mount_owns_its_own_timer() {
        let indicator = RunningIndicator::new(Skin::Hourglass, &Theme::default());
        let first = indicator.mount().unwrap();
        advance(Duration::from_millis(600)).await;
        let second = indicator.mount().unwrap();

        assert_eq!(first.phase(), 1);
        assert_eq!(second.phase(), 0);

        let first_probe = first.timer_probe().unwrap();
        drop(first);
        advance(Duration::from_millis(600)).await;
        assert_eq!(first_probe.ticks(), 1);
        assert_eq!(second.phase(), 1);
    }

    #[tokio::test]
    async fn css_skins_mount_without_timers() {
        for skin in Skin::ALL.into_iter().filter(|s| *s != Skin::Hourglass) {
            let indicator = RunningIndicator::new(skin, &Theme::default());
            let mounted = indicator.mount().unwrap();
            assert_eq!(mounted.pending_timers(), 0, "{skin}");
            assert!(mounted.timer_probe().is_none());
            mounted.unmount();
        }
    }

    #[test]
    fn css_skins_mount_outside_runtime() {
        let indicator = RunningIndicator::new(Skin::Spin, &Theme::default());
        let mounted = indicator.mount().unwrap();
        assert_eq!(mounted.render(), indicator.render());
    }

    #[test]
    fn hourglass_mount_outside_runtime_fails() {
        let indicator = RunningIndicator::new(Skin::Hourglass, &Theme::default());
        let err = indicator.mount().err().unwrap();
        assert!(matches!(err, IndicatorError::NoRuntime(Skin::Hourglass)));
    }

    #[test]
    fn missing_theme_color_renders_with_fallback() {
        let indicator = RunningIndicator::new(Skin::Ring, &Theme::default());
        assert_eq!(indicator.color().as_str(), FALLBACK_FADED_TEXT_60);
        let rendered = indicator.render();
        assert!(
            rendered
                .style
                .css
                .contains(&format!("stroke: {};", FALLBACK_FADED_TEXT_60))
        );
    }
}
