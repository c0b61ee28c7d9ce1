use crate::flags::ScrollFlags;

/// navbar switches to its compact style past this offset
pub const NAVBAR_SCROLLED_OFFSET: f64 = 50.0;
/// back to top button appears past this offset
pub const BACK_TO_TOP_OFFSET: f64 = 300.0;
/// height of the fixed navbar, anchors land this far below the top
pub const NAV_ANCHOR_OFFSET: i32 = 80;
/// a section counts as active this far before its top reaches the viewport
pub const SECTION_ACTIVATION_OFFSET: i32 = 100;
/// quiet period before the active section is recomputed
pub const ACTIVE_SECTION_DEBOUNCE_MS: u32 = 10;
pub const PARALLAX_SPEED: f64 = 0.5;

impl ScrollFlags {
    #[must_use]
    pub fn from_offset(scroll_y: f64) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::NAVBAR_SCROLLED, scroll_y > NAVBAR_SCROLLED_OFFSET);
        flags.set(Self::BACK_TO_TOP, scroll_y > BACK_TO_TOP_OFFSET);
        flags
    }
}

/// Vertical background shift of the hero while it is still on screen.
///
/// `None` means the hero is scrolled out and keeps its last transform.
#[must_use]
pub fn parallax_offset(scroll_y: f64, viewport_height: f64) -> Option<f64> {
    (scroll_y < viewport_height).then(|| scroll_y * PARALLAX_SPEED)
}

/// top offset to scroll to so an anchor target is not hidden under the navbar
#[must_use]
pub const fn anchor_scroll_top(target_offset_top: i32) -> i32 {
    target_offset_top - NAV_ANCHOR_OFFSET
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub offset_top: i32,
    pub offset_height: i32,
}

/// Picks the section the viewport is currently in.
///
/// Sections are expected in document order, the last one matching wins.
#[must_use]
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| {
            let top = f64::from(section.offset_top - SECTION_ACTIVATION_OFFSET);
            let bottom = top + f64::from(section.offset_height);
            scroll_y > top && scroll_y <= bottom
        })
        .map(|section| section.id.as_str())
}

/// `href` of an in-page link without its leading `#`
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn section(id: &str, offset_top: i32, offset_height: i32) -> SectionBounds {
        SectionBounds {
            id: id.into(),
            offset_top,
            offset_height,
        }
    }

    #[test]
    fn test_scroll_flags() {
        assert_eq!(ScrollFlags::from_offset(0.0), ScrollFlags::empty());
        assert_eq!(ScrollFlags::from_offset(50.0), ScrollFlags::empty());
        assert_eq!(ScrollFlags::from_offset(51.0), ScrollFlags::NAVBAR_SCROLLED);
        assert_eq!(
            ScrollFlags::from_offset(300.0),
            ScrollFlags::NAVBAR_SCROLLED
        );
        assert_eq!(ScrollFlags::from_offset(301.0), ScrollFlags::all());
    }

    #[test]
    fn test_parallax() {
        assert_eq!(parallax_offset(0.0, 800.0), Some(0.0));
        assert_eq!(parallax_offset(200.0, 800.0), Some(100.0));
        assert_eq!(parallax_offset(800.0, 800.0), None);
        assert_eq!(parallax_offset(1200.0, 800.0), None);
    }

    #[test]
    fn test_anchor_helpers() {
        assert_eq!(anchor_scroll_top(680), 600);
        assert_eq!(anchor_target("#contact"), Some("contact"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/privacy"), None);
    }

    #[test]
    fn test_active_section() {
        let sections = vec![
            section("home", 0, 700),
            section("products", 700, 900),
            section("contact", 1600, 600),
        ];

        // the first section starts at -100 so any positive offset is inside
        assert_eq!(active_section(0.0, &sections), Some("home"));
        assert_eq!(active_section(10.0, &sections), Some("home"));
        assert_eq!(active_section(600.0, &sections), Some("home"));
        assert_eq!(active_section(601.0, &sections), Some("products"));
        assert_eq!(active_section(1550.0, &sections), Some("contact"));
        assert_eq!(active_section(2200.0, &sections), None);
    }

    #[test]
    fn test_overlapping_sections_pick_last() {
        let sections = vec![section("a", 0, 1000), section("b", 200, 400)];
        assert_eq!(active_section(300.0, &sections), Some("b"));
        assert_eq!(active_section(800.0, &sections), Some("a"));
    }
}
