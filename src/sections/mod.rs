pub mod buttons;
pub mod hero;
pub mod showcase;

pub use buttons::FloatingButtons;
pub use hero::Hero;
pub use showcase::Showcase;
