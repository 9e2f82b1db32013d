//! Application state
//!
//! All state transitions happen through the reducer (see `reducer.rs`).

use libkeycalc::{CalcError, Calculator, Config, KeyBindings, Readout, Session};

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Calculator session
    pub session: Session,

    /// Status bar state
    pub status: StatusBarState,

    /// Error overlay state
    pub error: Option<String>,

    /// Sequencing defect reported by the calculator; ends the session
    pub fault: Option<CalcError>,

    /// UI configuration
    pub config: UiConfig,
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Show the running result while typing?
    pub preview_enabled: bool,

    /// Ctrl+letter gestures for reset and quit
    pub keys: KeyBindings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(UiConfig::default())
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl UiConfig {
    /// Derive UI settings from the loaded configuration and the environment
    pub fn from_config(config: &Config) -> Self {
        let colors_enabled = config.display.colors
            && std::env::var("NO_COLOR").is_err()
            && std::env::var("KEYCALC_NO_COLOR").is_err();

        Self {
            colors_enabled,
            preview_enabled: config.display.preview,
            keys: config.keys,
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: UiConfig) -> Self {
        Self {
            session: Session::new(),
            status: StatusBarState::default(),
            error: None,
            fault: None,
            config,
        }
    }

    /// Has the quit gesture been pressed?
    pub fn should_quit(&self) -> bool {
        self.session.exit_requested()
    }

    /// Current display text, honouring the preview setting
    pub fn readout(&self, engine: &Calculator) -> Readout {
        let readout = Readout::of(&self.session, engine, &self.config.keys);
        if self.config.preview_enabled {
            readout
        } else {
            readout.without_preview()
        }
    }
}
