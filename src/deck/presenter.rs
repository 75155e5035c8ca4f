//! Section presenter
//!
//! Maps progress to the visual state of every overlay. The progress range is
//! split into phases, each cross-fading one outgoing section into one incoming
//! section. Every render starts from an all-hidden frame and applies only the
//! active phase, so a discontinuous jump in progress can never leave a stale
//! section on screen.

use crate::consts::*;

/// Content overlays, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Text1,
    Text2,
    DateBackground,
    Quote,
    Bride,
    Groom,
    Akad,
    Resepsi,
    Story,
    Invitation,
    Gifts,
}

impl Section {
    pub const COUNT: usize = 11;

    pub const ALL: [Section; Self::COUNT] = [
        Section::Text1,
        Section::Text2,
        Section::DateBackground,
        Section::Quote,
        Section::Bride,
        Section::Groom,
        Section::Akad,
        Section::Resepsi,
        Section::Story,
        Section::Invitation,
        Section::Gifts,
    ];

    /// Identifier used at the render boundary
    pub fn id(&self) -> &'static str {
        match self {
            Section::Text1 => "text-1",
            Section::Text2 => "text-2",
            Section::DateBackground => "date-bg",
            Section::Quote => "quote",
            Section::Bride => "bride",
            Section::Groom => "groom",
            Section::Akad => "akad",
            Section::Resepsi => "resepsi",
            Section::Story => "story",
            Section::Invitation => "invitation",
            Section::Gifts => "gifts",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Desired visual state of one overlay
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SectionVisual {
    /// 0.0 (transparent) to 1.0 (opaque)
    pub opacity: f32,
    pub visible: bool,
    /// Carries the `active` class (enables pointer events / entry animations)
    pub active: bool,
    /// Extra vertical offset in CSS px (opening text blocks only)
    pub shift_y: f32,
}

impl SectionVisual {
    pub const HIDDEN: SectionVisual = SectionVisual {
        opacity: 0.0,
        visible: false,
        active: false,
        shift_y: 0.0,
    };
}

/// Visual state of every overlay for one progress value
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    sections: [SectionVisual; Section::COUNT],
    story_items: [SectionVisual; STORY_ITEM_COUNT],
}

impl Frame {
    fn hidden() -> Self {
        Self {
            sections: [SectionVisual::HIDDEN; Section::COUNT],
            story_items: [SectionVisual::HIDDEN; STORY_ITEM_COUNT],
        }
    }

    pub fn get(&self, section: Section) -> &SectionVisual {
        &self.sections[section.slot()]
    }

    fn get_mut(&mut self, section: Section) -> &mut SectionVisual {
        &mut self.sections[section.slot()]
    }

    /// Story timeline item `index` (0-based)
    pub fn story_item(&self, index: usize) -> Option<&SectionVisual> {
        self.story_items.get(index)
    }

    pub fn story_items(&self) -> &[SectionVisual] {
        &self.story_items
    }

    pub fn iter(&self) -> impl Iterator<Item = (Section, &SectionVisual)> {
        Section::ALL.iter().copied().zip(self.sections.iter())
    }

    /// Number of sections currently carrying the active flag
    pub fn active_count(&self) -> usize {
        self.sections.iter().filter(|v| v.active).count()
    }
}

/// Special behavior layered on top of the plain cross-fade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PhaseRule {
    Crossfade,
    /// Opening texts slide while the date background fades out
    Opening,
    /// Story shown at once under the outgoing resepsi; items appear one per
    /// unit of progress
    StoryReveal,
    /// Story fades out with its revealed items still shown
    StoryExit,
}

#[derive(Debug, Clone, Copy)]
struct Phase {
    start: f32,
    end: f32,
    outgoing: Section,
    incoming: Section,
    rule: PhaseRule,
}

const fn phase(start: f32, end: f32, outgoing: Section, incoming: Section, rule: PhaseRule) -> Phase {
    Phase {
        start,
        end,
        outgoing,
        incoming,
        rule,
    }
}

const PHASES: [Phase; 9] = [
    phase(0.0, 1.0, Section::Text1, Section::Text2, PhaseRule::Opening),
    phase(1.0, 2.0, Section::Text2, Section::Quote, PhaseRule::Crossfade),
    phase(2.0, 3.0, Section::Quote, Section::Bride, PhaseRule::Crossfade),
    phase(3.0, 4.0, Section::Bride, Section::Groom, PhaseRule::Crossfade),
    phase(4.0, 5.0, Section::Groom, Section::Akad, PhaseRule::Crossfade),
    phase(5.0, 6.0, Section::Akad, Section::Resepsi, PhaseRule::Crossfade),
    phase(6.0, 10.0, Section::Resepsi, Section::Story, PhaseRule::StoryReveal),
    phase(10.0, 11.0, Section::Story, Section::Invitation, PhaseRule::StoryExit),
    phase(11.0, MAX_PROGRESS, Section::Invitation, Section::Gifts, PhaseRule::Crossfade),
];

/// Phase governing `current`: the first whose end is not behind it
fn phase_at(current: f32) -> &'static Phase {
    PHASES
        .iter()
        .find(|ph| current <= ph.end)
        .unwrap_or(&PHASES[PHASES.len() - 1])
}

/// Position within the first unit of a phase, in [0, 1]
fn local_progress(current: f32, start: f32) -> f32 {
    let p = current - start;
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}

/// Compute the visual state of every overlay at `current`
pub fn render(current: f32) -> Frame {
    let mut frame = Frame::hidden();
    let phase = phase_at(current);
    let p = local_progress(current, phase.start);

    // Sections reveal earlier than they hide, so both are briefly visible
    let leaving = p <= HIDE_THRESHOLD;
    *frame.get_mut(phase.outgoing) = SectionVisual {
        opacity: 1.0 - p,
        visible: leaving,
        active: leaving,
        shift_y: 0.0,
    };

    let arriving = p > SHOW_THRESHOLD;
    *frame.get_mut(phase.incoming) = SectionVisual {
        opacity: p,
        visible: arriving,
        active: arriving,
        shift_y: 0.0,
    };

    match phase.rule {
        PhaseRule::Crossfade => {}
        PhaseRule::Opening => {
            frame.get_mut(Section::Text1).shift_y = -p * TEXT_SHIFT_PX;
            frame.get_mut(Section::Text2).shift_y = (1.0 - p) * TEXT_SHIFT_PX;
            *frame.get_mut(Section::DateBackground) = SectionVisual {
                opacity: DATE_BG_OPACITY * (1.0 - p),
                visible: leaving,
                active: false,
                shift_y: 0.0,
            };
        }
        PhaseRule::StoryReveal => {
            // The story sits fully opaque behind the fading resepsi
            *frame.get_mut(Section::Story) = SectionVisual {
                opacity: 1.0,
                visible: true,
                active: true,
                shift_y: 0.0,
            };
            reveal_story_items(&mut frame, current);
        }
        PhaseRule::StoryExit => reveal_story_items(&mut frame, current),
    }

    frame
}

/// Monotonic staircase: item `i` shows once progress reaches `7 + i`
fn reveal_story_items(frame: &mut Frame, current: f32) {
    for (i, item) in frame.story_items.iter_mut().enumerate() {
        if current >= STORY_FIRST_ITEM_AT + i as f32 {
            *item = SectionVisual {
                opacity: 1.0,
                visible: true,
                active: false,
                shift_y: 0.0,
            };
        }
    }
}
