//! Input Events
//!
//! Events sent from a surface to the engine. Surfaces are dumb renderers:
//! they report what the user did and let the engine decide what it means.
//!
//! Events that arrive while the session is non-interactive (boot, a prompt
//! reveal, an in-flight submission) are discarded by the engine, never
//! replayed into the next answer window.

use serde::{Deserialize, Serialize};

/// Events from a surface to the engine
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum InputEvent {
    /// User confirmed a line of free text
    SubmitText {
        /// The raw input; the engine trims it
        text: String,
    },

    /// User toggled one choice value of the current choice question
    ToggleChoice {
        /// The choice's stored value
        value: String,
    },

    /// User confirmed the pending choice selection
    ConfirmSelection,
}
