/// Filter presets
///
/// Filters are style descriptors in CSS filter syntax. They are stored on
/// each image and never applied to pixel data.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPreset {
    None,
    Noir,
    Retro,
    Fade,
    Glow,
    Cool,
}

impl FilterPreset {
    pub const ALL: [FilterPreset; 6] = [
        FilterPreset::None,
        FilterPreset::Noir,
        FilterPreset::Retro,
        FilterPreset::Fade,
        FilterPreset::Glow,
        FilterPreset::Cool,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FilterPreset::None => "None",
            FilterPreset::Noir => "Noir",
            FilterPreset::Retro => "Retro",
            FilterPreset::Fade => "Fade",
            FilterPreset::Glow => "Glow",
            FilterPreset::Cool => "Cool",
        }
    }

    pub fn descriptor(self) -> &'static str {
        match self {
            FilterPreset::None => "none",
            FilterPreset::Noir => "grayscale(100%)",
            FilterPreset::Retro => "sepia(60%)",
            FilterPreset::Fade => "brightness(110%) saturate(70%)",
            FilterPreset::Glow => "saturate(160%) contrast(110%)",
            FilterPreset::Cool => "hue-rotate(180deg) brightness(105%)",
        }
    }

    /// Look up the preset that produced a descriptor
    pub fn from_descriptor(descriptor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.descriptor() == descriptor)
    }

    pub fn is_identity(self) -> bool {
        self == FilterPreset::None
    }
}
