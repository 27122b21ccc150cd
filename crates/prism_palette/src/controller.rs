//! Playground controller.
//!
//! Owns the configuration record. Every derived output (preview element,
//! generated code, form controls) is computed from a single borrow of that
//! record, so consumers never see two different snapshots.

use std::time::{Duration, Instant};

use prism_easel::{Button, Element};

use crate::clipboard::{Clipboard, ClipboardError};
use crate::codegen::generate_code;
use crate::controls::playground_controls;
use crate::timer::{AckTimer, Clock, SystemClock};
use crate::types::{PaletteError, ParameterField, ParameterUpdate, PlaygroundConfig};
use crate::view::PlaygroundView;

/// Result of a copy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The code was written and the acknowledgement is showing.
    Copied,
    /// The clipboard refused the write; no acknowledgement is shown.
    Rejected(ClipboardError),
}

impl CopyOutcome {
    #[inline]
    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied)
    }
}

/// Interactive button configurator.
#[derive(Debug)]
pub struct PlaygroundController<C, K = SystemClock> {
    config: PlaygroundConfig,
    clipboard: C,
    clock: K,
    ack_timer: AckTimer,
    copied: bool,
}

impl<C: Clipboard> PlaygroundController<C, SystemClock> {
    /// Controller with the default configuration and the system clock.
    pub fn new(clipboard: C) -> Self {
        Self {
            config: PlaygroundConfig::default(),
            clipboard,
            clock: SystemClock,
            ack_timer: AckTimer::default(),
            copied: false,
        }
    }
}

impl<C: Clipboard, K: Clock> PlaygroundController<C, K> {
    /// Replace the initial configuration.
    pub fn with_config(mut self, config: PlaygroundConfig) -> Self {
        self.config = config;
        self
    }

    /// Change the acknowledgement window.
    pub fn with_ack_window(mut self, window: Duration) -> Self {
        self.ack_timer = AckTimer::new(window);
        self
    }

    /// Swap the time source.
    pub fn with_clock<K2: Clock>(self, clock: K2) -> PlaygroundController<C, K2> {
        PlaygroundController {
            config: self.config,
            clipboard: self.clipboard,
            clock,
            ack_timer: self.ack_timer,
            copied: self.copied,
        }
    }

    #[inline]
    pub fn config(&self) -> &PlaygroundConfig {
        &self.config
    }

    #[inline]
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Replace exactly one field of the configuration.
    pub fn update_parameter(&mut self, update: ParameterUpdate) {
        tracing::debug!(field = %update.field(), ?update, "playground: updating parameter");
        self.config = self.config.with_update(update);
    }

    /// Replace one field given its name and textual value.
    ///
    /// Unknown fields and unsupported option values are rejected and leave
    /// the configuration untouched.
    pub fn update_field(&mut self, field: &str, value: &str) -> Result<(), PaletteError> {
        let update = field.parse::<ParameterField>()?.parse_value(value)?;
        self.update_parameter(update);
        Ok(())
    }

    /// Code for the current configuration.
    #[inline]
    pub fn generate_code(&self) -> String {
        generate_code(&self.config)
    }

    /// Live preview of the current configuration.
    pub fn preview(&self) -> Element {
        preview_button(&self.config)
    }

    /// Write the current code to the clipboard and show the acknowledgement.
    ///
    /// A copy inside the acknowledgement window restarts the window. A
    /// rejected write is logged and hides any acknowledgement still showing.
    pub fn copy_code(&mut self) -> CopyOutcome {
        let code = self.generate_code();
        match self.clipboard.write_text(&code) {
            Ok(()) => {
                let generation = self.ack_timer.schedule(self.clock.now());
                self.copied = true;
                tracing::debug!(generation, bytes = code.len(), "playground: code copied");
                CopyOutcome::Copied
            }
            Err(err) => {
                tracing::warn!("playground: clipboard write failed: {err}");
                self.ack_timer.cancel();
                self.copied = false;
                CopyOutcome::Rejected(err)
            }
        }
    }

    /// Run the acknowledgement timer if it is due. Returns whether the
    /// acknowledgement was cleared.
    pub fn poll(&mut self) -> bool {
        match self.ack_timer.fire_if_due(self.clock.now()) {
            Some(generation) => {
                tracing::debug!(generation, "playground: acknowledgement cleared");
                self.copied = false;
                true
            }
            None => false,
        }
    }

    /// Whether the "copied" acknowledgement is showing.
    ///
    /// Reads the clock, so the answer turns false once the window has
    /// passed even if [`poll`](Self::poll) has not run yet.
    pub fn is_copied(&self) -> bool {
        self.copied
            && self
                .ack_timer
                .due()
                .is_some_and(|due| self.clock.now() < due)
    }

    /// When the host should next call [`poll`](Self::poll).
    #[inline]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.ack_timer.due()
    }

    /// Everything a host displays, derived from one configuration snapshot.
    pub fn view(&mut self) -> PlaygroundView {
        self.poll();
        let config = &self.config;
        PlaygroundView {
            config: config.clone(),
            preview: preview_button(config),
            code: generate_code(config),
            controls: playground_controls(config),
            copied: self.copied,
        }
    }
}

fn preview_button(config: &PlaygroundConfig) -> Element {
    Button::from_params(config.params).render(config.text.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::timer::ManualClock;
    use prism_pigment::{ColorOption, SizeOption, StyleParameters, VariantOption};

    struct DeniedClipboard;

    impl Clipboard for DeniedClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Denied("permission denied".to_string()))
        }
    }

    fn controller() -> (PlaygroundController<MemoryClipboard, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let controller = PlaygroundController::new(MemoryClipboard::new()).with_clock(clock.clone());
        (controller, clock)
    }

    #[test]
    fn test_update_replaces_one_field() {
        let (mut playground, _) = controller();
        playground.update_parameter(ParameterUpdate::Size(SizeOption::Lg));
        assert_eq!(
            playground.config(),
            &PlaygroundConfig {
                params: StyleParameters::new(ColorOption::Primary, SizeOption::Lg, VariantOption::Solid),
                text: "Click Me".to_string(),
            }
        );
    }

    #[test]
    fn test_update_field_rejects_bad_input() {
        let (mut playground, _) = controller();
        assert!(playground.update_field("color", "chartreuse").is_err());
        assert!(playground.update_field("font", "serif").is_err());
        assert_eq!(playground.config(), &PlaygroundConfig::default());

        playground.update_field("text", "Delete").unwrap();
        assert_eq!(playground.config().text, "Delete");
    }

    #[test]
    fn test_copy_writes_generated_code() {
        let (mut playground, _) = controller();
        playground.update_field("variant", "ghost").unwrap();
        assert_eq!(playground.copy_code(), CopyOutcome::Copied);
        assert_eq!(
            playground.clipboard().contents(),
            Some(playground.generate_code().as_str())
        );
        assert!(playground.clipboard().contents().unwrap().contains("variant=\"ghost\""));
    }

    #[test]
    fn test_acknowledgement_clears_after_window() {
        let (mut playground, clock) = controller();
        assert!(!playground.is_copied());

        playground.copy_code();
        assert!(playground.is_copied());

        clock.advance(Duration::from_millis(1500));
        assert!(!playground.poll());
        assert!(playground.is_copied());

        clock.advance(Duration::from_millis(500));
        assert!(playground.poll());
        assert!(!playground.is_copied());
        assert_eq!(playground.next_deadline(), None);
    }

    #[test]
    fn test_acknowledgement_expires_without_poll() {
        let (mut playground, clock) = controller();
        playground.copy_code();

        clock.advance(Duration::from_millis(1999));
        assert!(playground.is_copied());

        clock.advance(Duration::from_secs(3));
        assert!(!playground.is_copied());
        // The timer itself is only consumed by the next poll.
        assert!(playground.next_deadline().is_some());
        assert!(playground.poll());
        assert!(!playground.is_copied());
    }

    #[test]
    fn test_second_copy_restarts_window() {
        let (mut playground, clock) = controller();
        playground.copy_code();

        clock.advance(Duration::from_millis(1500));
        playground.copy_code();
        let restarted_at = clock.now();
        assert_eq!(
            playground.next_deadline(),
            Some(restarted_at + Duration::from_secs(2))
        );

        // The first window would have ended here.
        clock.advance(Duration::from_millis(600));
        assert!(!playground.poll());
        assert!(playground.is_copied());

        clock.advance(Duration::from_millis(1400));
        assert!(playground.poll());
        assert!(!playground.is_copied());
    }

    #[test]
    fn test_custom_ack_window() {
        let (playground, clock) = controller();
        let mut playground = playground.with_ack_window(Duration::from_millis(300));
        playground.copy_code();
        clock.advance(Duration::from_millis(300));
        assert!(!playground.view().copied);
    }

    #[test]
    fn test_rejected_copy_shows_no_acknowledgement() {
        let clock = ManualClock::new();
        let mut playground = PlaygroundController::new(DeniedClipboard).with_clock(clock);
        let outcome = playground.copy_code();
        assert!(matches!(outcome, CopyOutcome::Rejected(ClipboardError::Denied(_))));
        assert!(!playground.is_copied());
        assert_eq!(playground.next_deadline(), None);
    }

    #[test]
    fn test_view_is_one_snapshot() {
        let (mut playground, _) = controller();
        playground.update_field("color", "success").unwrap();
        playground.update_field("text", "Ship it").unwrap();

        let view = playground.view();
        assert_eq!(view.config, *playground.config());
        assert_eq!(view.code, generate_code(&view.config));
        assert_eq!(view.preview.text_content(), "Ship it");
        assert!(view.preview.class_name().contains("bg-green-600"));
        assert_eq!(view.controls[0].value, "success");
    }
}
