//! Debounced toggling of the panel state shared between the button tasks and the main loop.
//!
//! Both buttons feed one [`PanelState`]. A press is accepted only if more than
//! [`DEBOUNCE_WINDOW`] has passed since the last accepted press of *either*
//! button. Every accepted press flips the "LEDs active" flag exactly once.
//!
//! # Example
//!
//! ```rust
//! use embassy_time::Instant;
//! use joystick_panel::toggle::{PanelState, ToggleButton};
//!
//! static PANEL_STATE: PanelState = PanelState::new();
//!
//! assert!(PANEL_STATE.is_active());
//! let toggle = PANEL_STATE.press(ToggleButton::A, Instant::from_millis(500));
//! assert!(toggle.is_some());
//! assert!(!PANEL_STATE.is_active());
//!
//! // A bounce 20 ms later is ignored.
//! assert!(PANEL_STATE.press(ToggleButton::A, Instant::from_millis(520)).is_none());
//! ```

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant};
use portable_atomic::{AtomicBool, AtomicU64, Ordering};

// ============================================================================
// Constants
// ============================================================================

/// Presses closer together than this (measured from the last accepted press) are bounce.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(200);

// ============================================================================
// Debouncer
// ============================================================================

/// Time-based debounce shared by several inputs.
///
/// The last accepted timestamp starts at boot (`0`), so presses during the first
/// window after power-up are ignored.
pub struct Debouncer {
    window: Duration,
    last_accepted_us: AtomicU64,
}

impl Debouncer {
    /// A debouncer with the given window.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted_us: AtomicU64::new(0),
        }
    }

    /// Returns `true` and records `now` if more than the window has passed since
    /// the last accepted event. Otherwise leaves the state untouched.
    pub fn accept(&self, now: Instant) -> bool {
        let now_us = now.as_micros();
        let window_us = self.window.as_micros();
        self.last_accepted_us
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last_us| {
                (now_us.saturating_sub(last_us) > window_us).then_some(now_us)
            })
            .is_ok()
    }
}

// ============================================================================
// ToggleButton / Toggle
// ============================================================================

/// The two inputs that toggle the panel.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, defmt::Format)]
pub enum ToggleButton {
    /// The joystick's push switch. Also toggles the green LED.
    Joystick,
    /// Button A. Blanks the deflection LEDs when it turns them off.
    A,
}

/// What an accepted press changed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub struct Toggle {
    /// The button that was pressed.
    pub button: ToggleButton,
    /// New value of the "LEDs active" flag.
    pub active: bool,
    /// New green LED state, if this press toggled it.
    pub green_on: Option<bool>,
    /// Whether the main loop was asked to turn the deflection LEDs off.
    pub blank_leds: bool,
}

// ============================================================================
// PanelState
// ============================================================================

/// The flags written by the button tasks and read by the main loop.
///
/// Place one in a `static`; [`PanelState::new`] is `const`.
pub struct PanelState {
    active: AtomicBool,
    green_on: AtomicBool,
    debouncer: Debouncer,
    blank_request: Signal<CriticalSectionRawMutex, ()>,
}

impl PanelState {
    /// LEDs active, green LED off, debounce window [`DEBOUNCE_WINDOW`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_window(DEBOUNCE_WINDOW)
    }

    /// Same as [`PanelState::new`] with a custom debounce window.
    #[must_use]
    pub const fn with_window(window: Duration) -> Self {
        Self {
            active: AtomicBool::new(true),
            green_on: AtomicBool::new(false),
            debouncer: Debouncer::new(window),
            blank_request: Signal::new(),
        }
    }

    /// Handles a press edge from `button` observed at `now`.
    ///
    /// Returns `None` if the press falls inside the debounce window.
    pub fn press(&self, button: ToggleButton, now: Instant) -> Option<Toggle> {
        if !self.debouncer.accept(now) {
            return None;
        }

        let active = !self.active.fetch_xor(true, Ordering::AcqRel);
        let green_on = match button {
            ToggleButton::Joystick => Some(!self.green_on.fetch_xor(true, Ordering::AcqRel)),
            ToggleButton::A => None,
        };
        let blank_leds = button == ToggleButton::A && !active;
        if blank_leds {
            self.blank_request.signal(());
        }

        Some(Toggle {
            button,
            active,
            green_on,
            blank_leds,
        })
    }

    /// Whether the deflection LEDs follow the stick. When `false` the border is drawn.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Whether the green status LED should be lit.
    #[must_use]
    pub fn is_green_on(&self) -> bool {
        self.green_on.load(Ordering::Acquire)
    }

    /// Consumes a pending "turn the deflection LEDs off" request.
    pub fn take_blank_request(&self) -> bool {
        self.blank_request.try_take().is_some()
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}
