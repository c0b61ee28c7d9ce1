#![allow(unknown_lints, clippy::iter_without_into_iter)]

use bitflags::bitflags;

bitflags! {
    /// page chrome toggled purely by the window scroll offset
    #[derive(Clone, Debug, Copy, Eq, PartialEq, Default)]
    pub struct ScrollFlags: u8 {
        const NAVBAR_SCROLLED = 1 << 0;
        const BACK_TO_TOP = 1 << 1;
    }
}
