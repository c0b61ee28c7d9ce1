mod back_to_top;
mod categories;
mod contact_form;
mod footer;
mod hero;
mod navbar;
mod reveal;
mod spinner;
mod stat_counter;

pub use back_to_top::BackToTop;
pub use categories::Categories;
pub use contact_form::ContactForm;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use reveal::Reveal;
pub use spinner::Spinner;
pub use stat_counter::StatCounter;
