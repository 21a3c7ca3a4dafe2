//! Fixed copy for every block of the page. Nothing here is loaded at runtime.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Heart,
    Globe,
    Users,
    BookOpen,
    MessageCircle,
    Shield,
    Dove,
    PeaceSign,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Heart => "♥",
            Icon::Globe => "🌍",
            Icon::Users => "👥",
            Icon::BookOpen => "📖",
            Icon::MessageCircle => "💬",
            Icon::Shield => "🛡️",
            Icon::Dove => "🕊️",
            Icon::PeaceSign => "☮️",
        }
    }
}

pub const HERO_TITLE: &str = "Peace is the Only Solution";
pub const HERO_SUBTITLE: &str =
    "For Humanity to Thrive, We Must Choose Peace Over Conflict, Love Over Hate, Unity Over Division";

pub struct Stat {
    pub icon: Icon,
    pub value: &'static str,
    pub label: &'static str,
}

pub static STATS: [Stat; 4] = [
    Stat { icon: Icon::Globe, value: "195+", label: "Countries Need Peace" },
    Stat { icon: Icon::Users, value: "8B+", label: "People Deserve Peace" },
    Stat { icon: Icon::Heart, value: "100%", label: "Commitment to Unity" },
    Stat { icon: Icon::Shield, value: "∞", label: "Peaceful Future" },
];

/// Icon, title and body. Shared by the mission and principle cards.
pub struct Card {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub static MISSIONS: [Card; 2] = [
    Card {
        icon: Icon::Globe,
        title: "Global Unity",
        description: "We believe that despite our differences in culture, religion, and nationality, humanity shares a common destiny. Peace is not just the absence of war, but the presence of justice, equality, and mutual respect among all people.",
    },
    Card {
        icon: Icon::Heart,
        title: "Compassionate Action",
        description: "True peace requires action. Through education, dialogue, and community building, we work to transform hearts and minds. Every act of kindness, every bridge built between communities, brings us closer to a peaceful world.",
    },
];

pub static PRINCIPLES: [Card; 6] = [
    Card {
        icon: Icon::Shield,
        title: "Non-Violence",
        description: "Resolving conflicts through dialogue, understanding, and peaceful means",
    },
    Card {
        icon: Icon::Users,
        title: "Equality",
        description: "Recognizing the inherent dignity and equal rights of all human beings",
    },
    Card {
        icon: Icon::Heart,
        title: "Justice",
        description: "Ensuring fairness, accountability, and respect for human rights globally",
    },
    Card {
        icon: Icon::BookOpen,
        title: "Education",
        description: "Teaching peace, tolerance, and understanding from an early age",
    },
    Card {
        icon: Icon::MessageCircle,
        title: "Dialogue",
        description: "Creating spaces for honest conversation between diverse communities",
    },
    Card {
        icon: Icon::Globe,
        title: "Unity",
        description: "Building bridges that connect humanity across all divides",
    },
];

pub struct Resource {
    pub title: &'static str,
    pub content: &'static str,
    pub tag: &'static str,
}

pub static RESOURCES: [Resource; 6] = [
    Resource {
        title: "Understanding Conflict",
        content: "Learn about the root causes of conflicts and how to address them constructively",
        tag: "Foundation",
    },
    Resource {
        title: "Mediation Skills",
        content: "Develop the ability to facilitate peaceful resolution between conflicting parties",
        tag: "Skills",
    },
    Resource {
        title: "Cultural Sensitivity",
        content: "Appreciate diversity and learn to navigate cross-cultural interactions with respect",
        tag: "Cultural",
    },
    Resource {
        title: "Emotional Intelligence",
        content: "Build empathy, self-awareness, and the ability to manage emotions peacefully",
        tag: "Personal",
    },
    Resource {
        title: "Nonviolent Communication",
        content: "Master techniques for expressing needs and resolving differences without aggression",
        tag: "Communication",
    },
    Resource {
        title: "Peace History",
        content: "Study successful peace movements and leaders who changed the world through nonviolence",
        tag: "History",
    },
];

pub struct ActionItem {
    pub title: &'static str,
    pub description: &'static str,
    pub steps: [&'static str; 4],
}

pub static ACTIONS: [ActionItem; 4] = [
    ActionItem {
        title: "Start in Your Community",
        description: "Organize local peace circles, interfaith dialogues, or community service projects",
        steps: ["Identify Issues", "Gather Voices", "Create Plan", "Build Coalitions"],
    },
    ActionItem {
        title: "Educate Yourself and Others",
        description: "Learn about conflict resolution, share knowledge, and mentor the next generation",
        steps: ["Read Literature", "Attend Workshops", "Share Online", "Teach Children"],
    },
    ActionItem {
        title: "Practice Peace Daily",
        description: "Make conscious choices in your daily life that promote peace and understanding",
        steps: ["Listen Actively", "Show Empathy", "Challenge Prejudice", "Choose Kindness"],
    },
    ActionItem {
        title: "Support Peace Organizations",
        description: "Volunteer, donate, or amplify the work of groups dedicated to peacebuilding",
        steps: ["Research Groups", "Volunteer Time", "Donate Resources", "Spread Awareness"],
    },
];

pub const FOOTER_TAGLINE: &str = "Building a peaceful world, one action at a time";
pub static FOOTER_LINKS: [&str; 5] = ["About", "Mission", "Resources", "Contact", "Donate"];
pub const FOOTER_QUOTE: &str =
    "Peace is not merely a distant goal that we seek, but a means by which we arrive at that goal.";
pub const FOOTER_QUOTE_AUTHOR: &str = "Martin Luther King Jr.";
pub const COPYRIGHT: &str = "© 2025 Peace Initiative. All rights reserved. Together for humanity.";

pub const THANK_YOU: &str =
    "Thank you for your message of peace! Together we can make a difference.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_action_has_four_distinct_steps() {
        for item in &ACTIONS {
            let mut steps = item.steps.to_vec();
            steps.sort_unstable();
            steps.dedup();
            assert_eq!(steps.len(), 4, "{}", item.title);
        }
    }

    #[test]
    fn resource_tags_are_unique() {
        let mut tags: Vec<&str> = RESOURCES.iter().map(|r| r.tag).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), RESOURCES.len());
    }
}
