use serde::{Deserialize, Serialize};

/// Accent colors used by the service, skill and badge cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Purple,
    Green,
}

/// Complete class strings for one accent. Tailwind only picks up literal
/// class names, so every variant spells out its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentTokens {
    pub text: &'static str,
    pub icon_bg: &'static str,
    pub badge: &'static str,
    pub soft_bg: &'static str,
    pub glow: [&'static str; 3],
    pub ring: &'static str,
}

const BLUE: AccentTokens = AccentTokens {
    text: "text-blue-400",
    icon_bg: "bg-blue-600/20",
    badge: "bg-blue-900/20 text-blue-300 border-blue-400/30",
    soft_bg: "bg-blue-400/10",
    glow: ["bg-blue-600/20", "bg-blue-500/30", "bg-blue-400/40"],
    ring: "focus:ring-blue-500/50",
};

const PURPLE: AccentTokens = AccentTokens {
    text: "text-purple-400",
    icon_bg: "bg-purple-600/20",
    badge: "bg-purple-900/20 text-purple-300 border-purple-400/30",
    soft_bg: "bg-purple-400/10",
    glow: ["bg-purple-600/20", "bg-purple-500/30", "bg-purple-400/40"],
    ring: "focus:ring-purple-500/50",
};

const GREEN: AccentTokens = AccentTokens {
    text: "text-green-400",
    icon_bg: "bg-green-600/20",
    badge: "bg-green-900/20 text-green-300 border-green-400/30",
    soft_bg: "bg-green-400/10",
    glow: ["bg-green-600/20", "bg-green-500/30", "bg-green-400/40"],
    ring: "focus:ring-green-500/50",
};

impl Accent {
    pub const ALL: [Accent; 3] = [Accent::Blue, Accent::Purple, Accent::Green];

    pub fn tokens(self) -> &'static AccentTokens {
        match self {
            Accent::Blue => &BLUE,
            Accent::Purple => &PURPLE,
            Accent::Green => &GREEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_distinct_per_accent() {
        let texts = Accent::ALL.map(|a| a.tokens().text);
        assert_ne!(texts[0], texts[1]);
        assert_ne!(texts[1], texts[2]);
        assert_ne!(texts[0], texts[2]);
    }

    #[test]
    fn test_tokens_only_reference_their_own_color() {
        for (accent, color) in Accent::ALL.into_iter().zip(["blue", "purple", "green"]) {
            let t = accent.tokens();
            let all = [t.text, t.icon_bg, t.badge, t.soft_bg, t.ring]
                .into_iter()
                .chain(t.glow);
            for class in all {
                assert!(
                    class.contains(color),
                    "{class} should belong to the {color} accent"
                );
            }
        }
    }

    #[test]
    fn test_accent_deserializes_lowercase() {
        let a: Accent = serde_json::from_str("\"purple\"").unwrap();
        assert_eq!(a, Accent::Purple);
        assert!(serde_json::from_str::<Accent>("\"Purple\"").is_err());
    }
}
