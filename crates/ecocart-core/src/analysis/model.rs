//! Analysis domain models.

use serde::{Deserialize, Serialize};

/// The labeled sections an AI product analysis can contain, in display
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Components,
    EcoFeatures,
    Recycling,
    Impact,
    Score,
}

impl SectionKind {
    /// All kinds in canonical display order.
    pub const ALL: [SectionKind; 5] = [
        Self::Components,
        Self::EcoFeatures,
        Self::Recycling,
        Self::Impact,
        Self::Score,
    ];

    /// Human-readable section heading.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Components => "Components & Materials",
            Self::EcoFeatures => "Eco-Friendly Features",
            Self::Recycling => "Recycling Instructions",
            Self::Impact => "Environmental Impact",
            Self::Score => "Sustainability Score",
        }
    }
}

/// One block of analysis content.
///
/// `kind` is `None` for the verbatim passthrough block emitted when no
/// content could be attributed to any known section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub kind: Option<SectionKind>,
    pub content: String,
}

/// A product analysis split into display sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductAnalysis {
    pub sections: Vec<Section>,
    /// Star rating extracted from the Score section, when one exists.
    pub score: Option<u8>,
}

impl ProductAnalysis {
    /// Consume the analysis as an ordered, single-pass sequence of
    /// sections.
    pub fn into_sections(self) -> std::vec::IntoIter<Section> {
        self.sections.into_iter()
    }
}
