//! Constants for the interactive TUI module
//!
//! Timing values, layout sizes and fixed strings shared by the runtime
//! and the components.

// Timing constants
/// Message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

// Window title
/// Terminal title while no movie detail is loaded
pub const DEFAULT_WINDOW_TITLE: &str = "usePopcorn";

/// Prefix of the terminal title while a movie detail is shown
pub const MOVIE_TITLE_PREFIX: &str = "Movie | ";

// UI Layout constants
/// Height of the navigation bar (logo, search box, result count)
pub const NAV_BAR_HEIGHT: u16 = 3;

/// Height of the key hint bar at the bottom
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the watched summary block
pub const WATCHED_SUMMARY_HEIGHT: u16 = 4;

/// Width of a collapsed box
pub const COLLAPSED_BOX_WIDTH: u16 = 16;

/// Page size for PageUp/PageDown navigation
pub const PAGE_SIZE: usize = 10;

// Help dialog dimensions
/// Maximum width for help dialog
pub const HELP_DIALOG_MAX_WIDTH: u16 = 70;

/// Minimum margin around help dialog
pub const HELP_DIALOG_MARGIN: u16 = 4;

/// Shown in the status line after the first Ctrl+C
pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";
