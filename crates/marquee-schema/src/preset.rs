use crate::deck::{parse_deck_str, DeckError, DeckV1};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub deck: &'static str,
}

impl Preset {
    pub fn parse(&self) -> Result<DeckV1, DeckError> {
        parse_deck_str(self.deck)
    }
}

pub const BUILTIN_PRESETS: &[Preset] = &[
    Preset {
        name: "banking",
        description: "Service point highlights: security, support, awards, customers",
        deck: r#"deck_version = 1

[carousel]
autoplay = true
interval_ms = 5000

[[slides]]
title = "Secure Banking Solutions"
description = "Your trusted partner for all banking needs with advanced security measures."
icon = "shield"

[slides.action]
label = "Learn More"
target = "learn-more"

[[slides]]
title = "24/7 Customer Support"
description = "Round-the-clock assistance for all your banking queries and concerns."
icon = "clock"

[slides.action]
label = "Contact Us"
target = "contact"

[[slides]]
title = "Award-Winning Services"
description = "Recognized for excellence in customer service and innovative banking solutions."
icon = "award"

[slides.action]
label = "View Awards"
target = "awards"

[[slides]]
title = "Serving 5000+ Customers"
description = "Join thousands of satisfied customers who trust us with their banking needs."
icon = "users"

[slides.action]
label = "Join Us"
target = "join"
"#,
    },
    Preset {
        name: "announcements",
        description: "Slow-rotating notices without call-to-action buttons",
        deck: r#"deck_version = 1

[carousel]
autoplay = true
interval_ms = 8000

[[slides]]
title = "Extended Hours"
description = "The service point is open until 7 PM on weekdays."
icon = "clock"

[[slides]]
title = "Doorstep Services"
description = "Cash withdrawal and deposit at your doorstep for senior citizens."
icon = "users"

[[slides]]
title = "Aadhaar-Enabled Payments"
description = "Withdraw cash with just your Aadhaar number and fingerprint."
icon = "shield"
"#,
    },
    Preset {
        name: "minimal",
        description: "Single slide, autoplay off",
        deck: r#"deck_version = 1

[carousel]
autoplay = false

[[slides]]
title = "Welcome"
description = "Edit marquee.toml to add more slides."
"#,
    },
];

pub fn get_preset(name: &str) -> Option<&'static Preset> {
    BUILTIN_PRESETS.iter().find(|p| p.name == name)
}

pub fn list_presets() -> &'static [Preset] {
    BUILTIN_PRESETS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_presets_parse() {
        for preset in BUILTIN_PRESETS {
            let result = preset.parse();
            assert!(
                result.is_ok(),
                "preset '{}' failed to parse: {:?}",
                preset.name,
                result.err()
            );
        }
    }

    #[test]
    fn banking_preset_has_four_actionable_slides() {
        let deck = get_preset("banking").unwrap().parse().unwrap();
        assert_eq!(deck.slides.len(), 4);
        assert_eq!(deck.carousel.interval_ms, 5000);
        assert!(deck.slides.iter().all(|s| s.action.is_some()));
        assert_eq!(deck.slides[3].title, "Serving 5000+ Customers");
    }

    #[test]
    fn get_preset_by_name() {
        assert!(get_preset("minimal").is_some());
        assert!(get_preset("nonexistent").is_none());
    }

    #[test]
    fn all_presets_have_unique_names() {
        let mut names: Vec<&str> = BUILTIN_PRESETS.iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BUILTIN_PRESETS.len());
    }
}
