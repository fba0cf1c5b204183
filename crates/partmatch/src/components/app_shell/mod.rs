//! App shell components: AppBar, TabBar, Footer
//!
//! These components form the persistent UI framework around the main
//! content area.

mod appbar;
mod footer;
mod tab_bar;

pub use appbar::AppBar;
pub use footer::Footer;
pub use tab_bar::TabBar;
