//! Section renderers for the review page.

mod bonuses;
mod catalog;
mod cta;
mod main;
mod nav;
mod payment_methods;
mod rating_box;
mod selection;

pub use bonuses::*;
pub use catalog::*;
pub use cta::*;
pub use main::*;
pub use nav::*;
pub use payment_methods::*;
pub use rating_box::*;
pub use selection::*;
