/// A public figure card in the VIP quotes section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Figure {
    pub name: &'static str,
    pub role: &'static str,
    /// Initials shown in the avatar bubble.
    pub avatar: &'static str,
}

pub const VIP_FIGURES: [Figure; 4] = [
    Figure { name: "Sam Altman", role: "OpenAI CEO", avatar: "SA" },
    Figure { name: "Jensen Huang", role: "NVIDIA CEO", avatar: "JH" },
    Figure { name: "Sundar Pichai", role: "Google CEO", avatar: "SP" },
    Figure { name: "Satya Nadella", role: "Microsoft CEO", avatar: "SN" },
];
