// Host UI facing pieces: property descriptors and localized strings

pub mod locale;
pub mod properties;

pub use locale::translate;
pub use properties::{ComboFormat, ComboType, ListItem, ListProperty, Properties};
