//! Built-in catalogue of classic Google Fonts pairings

use serde::Serialize;

/// A named stylesheet URL worth previewing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

/// URL offered when the user just wants to see something.
pub const EXAMPLE_URL: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&family=Merriweather:wght@300;400;700&display=swap";

const PRESETS: &[Preset] = &[
    Preset {
        name: "Playfair Display + Source Sans Pro",
        url: "https://fonts.googleapis.com/css2?family=Playfair+Display:wght@400;500;600;700&family=Source+Sans+Pro:wght@300;400;600&display=swap",
        description: "Classic serif + sans-serif pairing for editorial design",
    },
    Preset {
        name: "Roboto + Roboto Mono",
        url: "https://fonts.googleapis.com/css2?family=Roboto:wght@300;400;500;700&family=Roboto+Mono:wght@400;500&display=swap",
        description: "Modern sans-serif with matching monospace for technical content",
    },
    Preset {
        name: "Lora + Open Sans",
        url: "https://fonts.googleapis.com/css2?family=Lora:wght@400;500;600;700&family=Open+Sans:wght@300;400;600&display=swap",
        description: "Elegant serif + readable sans-serif for long-form content",
    },
    Preset {
        name: "Montserrat + Merriweather",
        url: "https://fonts.googleapis.com/css2?family=Montserrat:wght@400;500;600;700&family=Merriweather:wght@300;400;700&display=swap",
        description: "Bold sans-serif headers with traditional serif body",
    },
    Preset {
        name: "Poppins + Inter",
        url: "https://fonts.googleapis.com/css2?family=Poppins:wght@400;500;600;700&family=Inter:wght@300;400;500;600&display=swap",
        description: "Modern geometric sans-serif pairing for clean interfaces",
    },
    Preset {
        name: "DM Serif Display + DM Sans",
        url: "https://fonts.googleapis.com/css2?family=DM+Serif+Display&family=DM+Sans:wght@400;500;700&display=swap",
        description: "Contemporary serif + sans-serif from the same family",
    },
    Preset {
        name: "Crimson Pro + Work Sans",
        url: "https://fonts.googleapis.com/css2?family=Crimson+Pro:wght@400;500;600&family=Work+Sans:wght@300;400;500;600&display=swap",
        description: "Refined serif + geometric sans-serif for professional design",
    },
    Preset {
        name: "Space Grotesk + IBM Plex Sans",
        url: "https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600;700&family=IBM+Plex+Sans:wght@300;400;500&display=swap",
        description: "Modern tech-inspired sans-serif combination",
    },
    Preset {
        name: "Fraunces + Outfit",
        url: "https://fonts.googleapis.com/css2?family=Fraunces:wght@400;500;600;700&family=Outfit:wght@300;400;500;600&display=swap",
        description: "Quirky serif + clean sans-serif for creative projects",
    },
    Preset {
        name: "Libre Franklin + Libre Baskerville",
        url: "https://fonts.googleapis.com/css2?family=Libre+Franklin:wght@300;400;500;600&family=Libre+Baskerville:wght@400;700&display=swap",
        description: "Classic American type pairing",
    },
    Preset {
        name: "Raleway + Lato",
        url: "https://fonts.googleapis.com/css2?family=Raleway:wght@300;400;500;600;700&family=Lato:wght@300;400;700&display=swap",
        description: "Elegant sans-serif combination for modern websites",
    },
    Preset {
        name: "Josefin Sans + Alegreya",
        url: "https://fonts.googleapis.com/css2?family=Josefin+Sans:wght@300;400;500;600&family=Alegreya:wght@400;500;600&display=swap",
        description: "Distinctive sans-serif + warm serif for unique designs",
    },
    Preset {
        name: "Spectral + Karla",
        url: "https://fonts.googleapis.com/css2?family=Spectral:wght@400;500;600;700&family=Karla:wght@300;400;500;600&display=swap",
        description: "Modern serif + grotesque sans for contemporary layouts",
    },
    Preset {
        name: "Manrope + Source Serif Pro",
        url: "https://fonts.googleapis.com/css2?family=Manrope:wght@300;400;500;600;700&family=Source+Serif+Pro:wght@400;600;700&display=swap",
        description: "Geometric sans-serif + traditional serif balance",
    },
    Preset {
        name: "Syne + Sora",
        url: "https://fonts.googleapis.com/css2?family=Syne:wght@400;500;600;700&family=Sora:wght@300;400;500;600&display=swap",
        description: "Contemporary sans-serif pairing for modern aesthetics",
    },
    Preset {
        name: "Urbanist + Newsreader",
        url: "https://fonts.googleapis.com/css2?family=Urbanist:wght@300;400;500;600;700&family=Newsreader:wght@400;500;600&display=swap",
        description: "Modern sans-serif + news-style serif for editorial",
    },
    Preset {
        name: "Plus Jakarta Sans + Bitter",
        url: "https://fonts.googleapis.com/css2?family=Plus+Jakarta+Sans:wght@300;400;500;600;700&family=Bitter:wght@400;500;600&display=swap",
        description: "Contemporary sans-serif + slab serif contrast",
    },
    Preset {
        name: "Cabinet Grotesk + Petrona",
        url: "https://fonts.googleapis.com/css2?family=Cabinet+Grotesk:wght@400;500;600;700&family=Petrona:wght@400;500;600&display=swap",
        description: "Modern grotesk + humanist serif for versatile design",
    },
    Preset {
        name: "Instrument Sans + Instrument Serif",
        url: "https://fonts.googleapis.com/css2?family=Instrument+Sans:wght@400;500;600;700&family=Instrument+Serif:wght@400&display=swap",
        description: "Matching sans-serif and serif family for cohesive design",
    },
    Preset {
        name: "Albert Sans + Fraunces",
        url: "https://fonts.googleapis.com/css2?family=Albert+Sans:wght@300;400;500;600;700&family=Fraunces:wght@400;500;600&display=swap",
        description: "Clean sans-serif + expressive serif for creative contrast",
    },
];

pub fn presets() -> &'static [Preset] {
    PRESETS
}

/// Look a preset up by name, ignoring case and surrounding whitespace.
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    let wanted = name.trim();
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(wanted))
}
