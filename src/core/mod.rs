//! Platform-independent effect state and math.
//!
//! Nothing in here touches `web_sys`; the wasm front-end feeds these types
//! with DOM input and writes their results back to the page.

pub mod cursor;
pub mod gate;
pub mod hover;
pub mod interp;
pub mod konami;
pub mod particles;
pub mod reveal;
pub mod scheduler;
pub mod scroll;
pub mod starfield;
pub mod tracker;

pub use cursor::*;
pub use gate::*;
pub use hover::*;
pub use interp::*;
pub use konami::*;
pub use particles::*;
pub use reveal::*;
pub use scheduler::*;
pub use scroll::*;
pub use starfield::*;
pub use tracker::*;
