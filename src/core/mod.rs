pub mod config;
pub mod decode;
pub mod ease;
pub mod links;
pub mod loader;
pub mod markup;
pub mod nav;
pub mod newsletter;
pub mod page;
pub mod reveal;
pub mod scroll;
pub mod tilt;
pub mod timers;
