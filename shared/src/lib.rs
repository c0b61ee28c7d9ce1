mod contact;
mod counter;
mod flags;
mod scroll;
mod validation;

pub use contact::{
    ContactForm, SubmissionStatus, SubmitOutcome, SHAKE_MS, SUBMIT_DELAY_MS, SUCCESS_DISPLAY_MS,
};
pub use counter::{
    parse_target, CounterAnimation, COUNTER_DURATION_MS, COUNTER_FRAME_MS, HERO_VISIBLE_THRESHOLD,
};
pub use flags::ScrollFlags;
pub use scroll::{
    active_section, anchor_scroll_top, anchor_target, parallax_offset, SectionBounds,
    ACTIVE_SECTION_DEBOUNCE_MS, BACK_TO_TOP_OFFSET, NAVBAR_SCROLLED_OFFSET, NAV_ANCHOR_OFFSET,
    PARALLAX_SPEED, SECTION_ACTIVATION_OFFSET,
};
pub use validation::{
    contact_validation::{
        ContactValidation, EmailError, Field, MessageError, NameError, PhoneError,
        MESSAGE_TRIMMED_MIN_LEN, NAME_TRIMMED_MIN_LEN, PHONE_MIN_DIGITS,
    },
    ValidationState,
};

/// fraction of a `data-aos` element that has to be visible before it reveals
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// reveal slightly before the element's bottom edge enters the viewport
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
/// delay before the hero content fades in after mount
pub const HERO_ENTRANCE_DELAY_MS: u32 = 100;
