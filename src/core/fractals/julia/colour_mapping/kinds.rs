use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JuliaColourMapKinds {
    #[default]
    Dusk,
    BlueWhiteGradient,
    FireGradient,
}

impl JuliaColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::Dusk, Self::BlueWhiteGradient, Self::FireGradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Dusk => "Dusk",
            Self::BlueWhiteGradient => "Blue-white gradient",
            Self::FireGradient => "Fire gradient",
        }
    }
}

impl std::fmt::Display for JuliaColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
