//! Reusable UI components
//!
//! All components render plain markup with class names defined in the
//! application's global stylesheet.

mod button;
mod icon;
mod preloader;
mod section_header;

pub use button::*;
pub use icon::*;
pub use preloader::*;
pub use section_header::*;
