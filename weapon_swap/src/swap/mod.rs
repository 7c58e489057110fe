//! Visual substitution module
//!
//! Attach-point resolution, scene-wide discovery, the substitution
//! controller with its swing classifier, and the frame driver tying them
//! together.

mod auto_binder;
mod binding;
mod classifier;
mod config;
mod controller;
mod resolver;
mod search;
mod session;

pub use auto_binder::AutoBinder;
pub use binding::AttachmentBinding;
pub use classifier::{SwingClassifier, SwingState, MIN_FRAME_DELTA};
pub use config::{SwapConfig, SearchConfig, RoleKeys, AutoBindConfig};
pub use controller::{VisualSwapController, ControllerState, SubstitutePair, effects_enabled};
pub use resolver::{PathResolver, NameTokens, contains_ignore_case};
pub use search::{CandidateSearch, SearchAccumulator, SearchStatus, Role, find_candidate};
pub use session::{SwapSession, Discovery};
