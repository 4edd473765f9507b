use std::f64::consts::PI;

pub const SITE_OWNER: &str = "John Doe";
pub const SITE_ROLE: &str = "Frontend Engineer";

/// Radius of the skill progress ring, in SVG user units.
pub const RING_RADIUS: f64 = 54.0;

pub fn ring_circumference() -> f64 {
    2.0 * PI * RING_RADIUS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section_id: &'static str,
}

pub static NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Home",
        section_id: "home",
    },
    NavItem {
        label: "Projects",
        section_id: "projects",
    },
    NavItem {
        label: "Skills",
        section_id: "skills",
    },
    NavItem {
        label: "Contact",
        section_id: "contact",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
    pub featured: bool,
    pub live_url: Option<&'static str>,
    pub code_url: Option<&'static str>,
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Quickshow Movie App",
        description: "A modern movie streaming platform with real-time search, personalized recommendations, and seamless playback. Built with React and integrated with TMDB API for comprehensive movie data.",
        image: "https://images.unsplash.com/photo-1536440136628-849c177e76a1?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
        tech: &["React", "TypeScript", "Tailwind CSS", "React Query", "Zustand", "Framer Motion"],
        featured: true,
        live_url: Some("#"),
        code_url: Some("#"),
    },
    Project {
        title: "E-Commerce Dashboard",
        description: "Admin dashboard for managing products, orders, and analytics with real-time updates and interactive charts.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=500",
        tech: &["Next.js", "Chart.js", "PostgreSQL"],
        featured: false,
        live_url: Some("#"),
        code_url: Some("#"),
    },
    Project {
        title: "Task Flow Pro",
        description: "Collaborative task management tool with drag-and-drop functionality, real-time collaboration, and team analytics.",
        image: "https://images.unsplash.com/photo-1557804506-669a67965ba0?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=500",
        tech: &["React", "DnD Kit", "Socket.io"],
        featured: false,
        live_url: Some("#"),
        code_url: Some("#"),
    },
    Project {
        title: "SocialHub Connect",
        description: "Modern social platform with real-time messaging, stories feature, and advanced content recommendation algorithm.",
        image: "https://images.unsplash.com/photo-1611162617474-5b21e879e113?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=500",
        tech: &["Vue.js", "Firebase", "WebRTC"],
        featured: false,
        live_url: Some("#"),
        code_url: Some("#"),
    },
    Project {
        title: "WeatherWise",
        description: "Beautiful weather application with location-based forecasts, interactive maps, and weather alerts.",
        image: "https://images.unsplash.com/photo-1592210454359-9043f067919b?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=500",
        tech: &["React Native", "Expo", "OpenWeather API"],
        featured: false,
        live_url: Some("#"),
        code_url: Some("#"),
    },
];

pub fn featured_project() -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.featured)
}

pub fn other_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| !p.featured)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillTier {
    Expert,
    Advanced,
    Intermediate,
}

impl SkillTier {
    pub fn label(self) -> &'static str {
        match self {
            SkillTier::Expert => "Expert",
            SkillTier::Advanced => "Advanced",
            SkillTier::Intermediate => "Intermediate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0 to 100.
    pub level: u8,
    pub icon: &'static str,
}

impl Skill {
    pub fn tier(&self) -> SkillTier {
        match self.level {
            90.. => SkillTier::Expert,
            80..=89 => SkillTier::Advanced,
            _ => SkillTier::Intermediate,
        }
    }

    /// Stroke offset that leaves `level` percent of the ring drawn.
    pub fn dash_offset(&self) -> f64 {
        let circumference = ring_circumference();
        circumference - f64::from(self.level.min(100)) / 100.0 * circumference
    }
}

pub static SKILLS: &[Skill] = &[
    Skill {
        name: "React.js",
        level: 90,
        icon: "⚛️",
    },
    Skill {
        name: "TypeScript",
        level: 85,
        icon: "📘",
    },
    Skill {
        name: "Next.js",
        level: 88,
        icon: "▲",
    },
    Skill {
        name: "Tailwind CSS",
        level: 92,
        icon: "🎨",
    },
    Skill {
        name: "Vue.js",
        level: 75,
        icon: "💚",
    },
    Skill {
        name: "Git & GitHub",
        level: 85,
        icon: "🔧",
    },
    Skill {
        name: "Figma",
        level: 80,
        icon: "🎨",
    },
    Skill {
        name: "Responsive Design",
        level: 95,
        icon: "📱",
    },
];

pub static ADDITIONAL_TECHS: &[&str] = &[
    "Redux",
    "GraphQL",
    "REST APIs",
    "Webpack",
    "Vite",
    "Jest",
    "Cypress",
    "Docker",
    "MongoDB",
    "PostgreSQL",
    "Firebase",
    "Vercel",
    "AWS",
    "CI/CD",
    "Storybook",
    "Framer Motion",
];

/// `"REST APIs"` -> `"rest-apis"`
pub fn tech_slug(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub link: Option<&'static str>,
}

pub static CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        icon: "✉️",
        title: "Email",
        value: "hello@johndoe.dev",
        link: Some("mailto:hello@johndoe.dev"),
    },
    ContactInfo {
        icon: "📍",
        title: "Location",
        value: "San Francisco, CA",
        link: None,
    },
    ContactInfo {
        icon: "📞",
        title: "Phone",
        value: "+1 (234) 567-890",
        link: Some("tel:+1234567890"),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    /// devicon class
    pub icon_class: &'static str,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "#",
        icon_class: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn",
        href: "#",
        icon_class: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "Twitter",
        href: "#",
        icon_class: "devicon-twitter-original",
    },
    SocialLink {
        label: "Portfolio",
        href: "#",
        icon_class: "devicon-chrome-plain",
    },
    SocialLink {
        label: "Discord",
        href: "#",
        icon_class: "devicon-discordjs-plain",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_featured_project() {
        assert_eq!(PROJECTS.iter().filter(|p| p.featured).count(), 1);
        let featured = featured_project().expect("a featured project");
        assert_eq!(featured.title, "Quickshow Movie App");
        assert_eq!(other_projects().count(), PROJECTS.len() - 1);
        assert!(other_projects().all(|p| p.title != featured.title));
    }

    #[test]
    fn test_projects_have_tech_tags() {
        for project in PROJECTS {
            assert!(!project.tech.is_empty(), "{} has no tags", project.title);
        }
    }

    #[test]
    fn test_skill_levels_in_range() {
        for skill in SKILLS {
            assert!(skill.level <= 100, "{} out of range", skill.name);
        }
    }

    #[test]
    fn test_skill_tiers() {
        let skill = |level| Skill {
            name: "x",
            level,
            icon: "",
        };
        assert_eq!(skill(95).tier(), SkillTier::Expert);
        assert_eq!(skill(90).tier(), SkillTier::Expert);
        assert_eq!(skill(89).tier(), SkillTier::Advanced);
        assert_eq!(skill(80).tier(), SkillTier::Advanced);
        assert_eq!(skill(79).tier(), SkillTier::Intermediate);
        assert_eq!(skill(0).tier().label(), "Intermediate");
    }

    #[test]
    fn test_dash_offset() {
        let circumference = ring_circumference();
        let skill = |level| Skill {
            name: "x",
            level,
            icon: "",
        };
        assert!((skill(0).dash_offset() - circumference).abs() < 1e-9);
        assert!(skill(100).dash_offset().abs() < 1e-9);
        assert!((skill(75).dash_offset() - circumference * 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_tech_slug() {
        assert_eq!(tech_slug("REST APIs"), "rest-apis");
        assert_eq!(tech_slug("Framer  Motion"), "framer-motion");
        assert_eq!(tech_slug("CI/CD"), "ci/cd");
    }

    #[test]
    fn test_nav_items_point_at_sections() {
        let ids = NAV_ITEMS.iter().map(|i| i.section_id).collect::<Vec<_>>();
        assert_eq!(ids, vec!["home", "projects", "skills", "contact"]);
    }
}
