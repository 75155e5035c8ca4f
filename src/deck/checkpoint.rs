//! Fixed checkpoint table
//!
//! Each checkpoint is a resting position of the deck, one per content section.

/// A named resting position, ordered by index
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Checkpoint {
    TextContent1,
    TextContent2,
    QuoteSection,
    BrideSection,
    GroomSection,
    AkadSection,
    ResepsiSection,
    Story1,
    Story2,
    Story3,
    Story4,
    InvitationSection,
    GiftsSection,
}

impl Checkpoint {
    /// All checkpoints in ascending order
    pub const ALL: [Checkpoint; 13] = [
        Checkpoint::TextContent1,
        Checkpoint::TextContent2,
        Checkpoint::QuoteSection,
        Checkpoint::BrideSection,
        Checkpoint::GroomSection,
        Checkpoint::AkadSection,
        Checkpoint::ResepsiSection,
        Checkpoint::Story1,
        Checkpoint::Story2,
        Checkpoint::Story3,
        Checkpoint::Story4,
        Checkpoint::InvitationSection,
        Checkpoint::GiftsSection,
    ];

    pub const FIRST: Checkpoint = Checkpoint::TextContent1;
    pub const LAST: Checkpoint = Checkpoint::GiftsSection;

    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up by index, `None` past the last checkpoint
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Progress value at which this checkpoint rests
    pub fn progress(self) -> f32 {
        self.index() as f32
    }

    /// Following checkpoint, staying put at the end
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or(Self::LAST)
    }

    /// Preceding checkpoint, staying put at the start
    pub fn prev(self) -> Self {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_index)
            .unwrap_or(Self::FIRST)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Checkpoint::TextContent1 => "TEXT_CONTENT_1",
            Checkpoint::TextContent2 => "TEXT_CONTENT_2",
            Checkpoint::QuoteSection => "QUOTE_SECTION",
            Checkpoint::BrideSection => "BRIDE_SECTION",
            Checkpoint::GroomSection => "GROOM_SECTION",
            Checkpoint::AkadSection => "AKAD_SECTION",
            Checkpoint::ResepsiSection => "RESEPSI_SECTION",
            Checkpoint::Story1 => "STORY_1",
            Checkpoint::Story2 => "STORY_2",
            Checkpoint::Story3 => "STORY_3",
            Checkpoint::Story4 => "STORY_4",
            Checkpoint::InvitationSection => "INVITATION_SECTION",
            Checkpoint::GiftsSection => "GIFTS_SECTION",
        }
    }
}
