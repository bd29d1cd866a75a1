mod clock;
mod directory;
mod root;
mod value_object;

pub use clock::*;
pub use directory::*;
pub use root::*;
pub use value_object::*;

pub use bindisa_shared::contact::{ContactForm, Field};
