mod product;
mod ticker;

pub use product::*;
pub use ticker::*;
