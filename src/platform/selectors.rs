//! Page markup contract
//!
//! CSS selectors and transforms the renderer uses to find and position overlays.

use crate::deck::Section;

/// Story timeline items, in reveal order
pub const STORY_ITEMS: &str = ".timeline-item";

/// Selector of the overlay element for `section`
pub fn selector(section: Section) -> &'static str {
    match section {
        Section::Text1 => ".text-content-1",
        Section::Text2 => ".text-content-2",
        Section::DateBackground => ".date-background",
        Section::Quote => ".section-2-quote-overlay",
        Section::Bride => ".section-3-bride-overlay",
        Section::Groom => ".section-4-groom-overlay",
        Section::Akad => ".section-5-akad-overlay",
        Section::Resepsi => ".section-6-resepsi-overlay",
        Section::Story => ".section-7-story-overlay",
        Section::Invitation => ".section-8-invitation-overlay",
        Section::Gifts => ".section-9-gifts-overlay",
    }
}

/// Class toggled to reflect a section's state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateClass {
    /// `active` present while the section is active
    Active,
    /// `hidden` present while the section is not visible
    Hidden,
}

/// `None` for the first opening text, whose class list the page owns
pub fn state_class(section: Section) -> Option<StateClass> {
    match section {
        Section::Text1 => None,
        Section::DateBackground => Some(StateClass::Hidden),
        _ => Some(StateClass::Active),
    }
}

/// CSS transform for sections that slide, `None` for the rest
///
/// Both opening texts are centered with `translate(-50%, ..)`; the vertical
/// anchor differs per block.
pub fn transform(section: Section, shift_y: f32) -> Option<String> {
    let anchor = match section {
        Section::Text1 => "-35%",
        Section::Text2 => "-50%",
        _ => return None,
    };
    if shift_y == 0.0 {
        return Some(format!("translate(-50%, {anchor})"));
    }
    let sign = if shift_y < 0.0 { '-' } else { '+' };
    Some(format!(
        "translate(-50%, calc({anchor} {sign} {}px))",
        shift_y.abs()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_has_a_distinct_selector() {
        let mut seen: Vec<&str> = Section::ALL.iter().map(|s| selector(*s)).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), Section::COUNT);
    }

    #[test]
    fn test_state_classes() {
        for section in Section::ALL {
            let expected = match section {
                Section::Text1 => None,
                Section::DateBackground => Some(StateClass::Hidden),
                _ => Some(StateClass::Active),
            };
            assert_eq!(state_class(section), expected);
        }
    }

    #[test]
    fn test_text_transforms() {
        assert_eq!(
            transform(Section::Text1, 0.0).as_deref(),
            Some("translate(-50%, -35%)")
        );
        assert_eq!(
            transform(Section::Text1, -20.0).as_deref(),
            Some("translate(-50%, calc(-35% - 20px))")
        );
        assert_eq!(
            transform(Section::Text2, 10.0).as_deref(),
            Some("translate(-50%, calc(-50% + 10px))")
        );
        assert_eq!(transform(Section::Quote, 5.0), None);
    }
}
