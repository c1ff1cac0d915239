mod blur_timer;
mod controller_state;
mod selection;

pub use blur_timer::{BlurTimer, DEFAULT_BLUR_DELAY_MS};
pub use controller_state::{ControlKey, ControllerPhase, InputController, KeyOutcome};
pub use selection::{apply_suggestion, replace_trailing_word};
