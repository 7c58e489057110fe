/*!
# Weapon Swap

Runtime visual substitution for live weapon instances.

Given a weapon instance living in a host scene graph, this crate locates the
handle and striking-mass attachment points by heuristic name/material
matching, hides the original visuals, spawns two substitute models and
toggles them every frame from a motion-derived swing signal.

## Architecture

- **SceneGraph**: Trait the host scene implements (nodes, components, instantiation)
- **Scene**: In-memory SceneGraph implementation (tests, demos, headless hosts)
- **PathResolver**: Explicit path / preferred names / predicate attach lookup
- **CandidateSearch**: Time-sliced scene-wide discovery of handle and mass nodes
- **AutoBinder**: Direct binder polling a player hierarchy for the weapon root
- **VisualSwapController**: Hide-and-spawn setup plus per-frame swing classification
- **SwapSession**: Frame driver wiring discovery into the controller

Everything runs on the caller's frame tick. Components hold `NodeKey`s,
never references into the scene, and borrow the graph per call.
*/

// Internal modules
mod error;
mod runtime;
pub mod log;
pub mod scene;
pub mod swap;
pub mod time;

// Main weapon_swap namespace module
pub mod prelude {
    // Error types
    pub use crate::error::{Error, Result};

    // Runtime singleton (logger slot)
    pub use crate::runtime::Runtime;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Substitution sub-module
    pub mod swap {
        pub use crate::swap::*;
    }

    // Frame clock
    pub use crate::time::{FrameClock, ManualClock};
}

// Re-export math library at crate root
pub use glam;

