pub mod cursor;
pub mod forms;
pub mod hover;
pub mod parallax;
pub mod particles;
pub mod reveal;
pub mod stars;
