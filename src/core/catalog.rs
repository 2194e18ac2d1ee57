//! Static site content.
//!
//! Everything here is defined once and never mutated. The web app renders it
//! directly; the CLI prints it.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Icon hint for a skill card. The web app maps these to glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SkillIcon {
    Code,
    Database,
    Cog,
    Brain,
    Cpu,
    Message,
    Eye,
    Chart,
    Workflow,
    Layers,
    Cloud,
    Branch,
    Terminal,
    Bot,
}

impl SkillIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            SkillIcon::Code => "</>",
            SkillIcon::Database => "🗄️",
            SkillIcon::Cog => "⚙️",
            SkillIcon::Brain => "🧠",
            SkillIcon::Cpu => "🖥️",
            SkillIcon::Message => "💬",
            SkillIcon::Eye => "👁️",
            SkillIcon::Chart => "📊",
            SkillIcon::Workflow => "🔀",
            SkillIcon::Layers => "🧩",
            SkillIcon::Cloud => "☁️",
            SkillIcon::Branch => "🌿",
            SkillIcon::Terminal => "⌨️",
            SkillIcon::Bot => "🤖",
        }
    }
}

/// One card in the skills grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SkillItem {
    pub name: &'static str,
    pub icon: SkillIcon,
    /// Proficiency in `0..=100`.
    pub level: u8,
    pub category: &'static str,
}

impl SkillItem {
    pub const fn new(
        name: &'static str,
        icon: SkillIcon,
        level: u8,
        category: &'static str,
    ) -> Self {
        Self {
            name,
            icon,
            level,
            category,
        }
    }
}

const SKILLS: &[SkillItem] = &[
    SkillItem::new("Python", SkillIcon::Code, 100, "Linguaggi"),
    SkillItem::new("JavaScript", SkillIcon::Code, 60, "Linguaggi"),
    SkillItem::new("SQL", SkillIcon::Database, 90, "Linguaggi"),
    SkillItem::new("C", SkillIcon::Code, 70, "Linguaggi"),
    SkillItem::new("Rust", SkillIcon::Cog, 40, "Linguaggi"),
    SkillItem::new("TensorFlow", SkillIcon::Brain, 90, "ML/AI"),
    SkillItem::new("PyTorch", SkillIcon::Cpu, 90, "ML/AI"),
    SkillItem::new("NLP", SkillIcon::Message, 90, "AI"),
    SkillItem::new("Computer Vision", SkillIcon::Eye, 80, "AI"),
    SkillItem::new("Power BI", SkillIcon::Chart, 90, "Analytics"),
    SkillItem::new("Apache Airflow", SkillIcon::Workflow, 80, "Orchestration"),
    SkillItem::new("API Integration", SkillIcon::Layers, 70, "Dev"),
    SkillItem::new("Cloud Deployment", SkillIcon::Cloud, 80, "DevOps"),
    SkillItem::new("PostgreSQL", SkillIcon::Database, 70, "Database"),
    SkillItem::new("Git", SkillIcon::Branch, 100, "Tools"),
    SkillItem::new("Docker", SkillIcon::Terminal, 90, "DevOps"),
    SkillItem::new("Scikit-learn", SkillIcon::Brain, 90, "ML/AI"),
    SkillItem::new("RAG", SkillIcon::Eye, 80, "AI"),
    SkillItem::new("BigQuery", SkillIcon::Database, 90, "Database"),
];

/// Built-in skills in display order.
pub fn skills() -> Vec<SkillItem> {
    SKILLS.to_vec()
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub icon: SkillIcon,
    pub demo_href: &'static str,
    pub code_href: &'static str,
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Assistente Virtuale Enterprise",
            description: "Un assistente AI avanzato per grandi aziende, capace di gestire richieste complesse, integrarsi con sistemi CRM esistenti e fornire supporto 24/7 in multiple lingue.",
            image: "/project-1.jpg",
            tags: &["Python", "OpenAI", "FastAPI", "PostgreSQL"],
            icon: SkillIcon::Bot,
            demo_href: "#",
            code_href: "#",
        },
        Project {
            id: 2,
            title: "Sistema di Raccomandazione",
            description: "Motore di raccomandazione basato su machine learning che analizza il comportamento degli utenti per suggerire prodotti e contenuti personalizzati in tempo reale.",
            image: "/project-2.jpg",
            tags: &["TensorFlow", "PyTorch", "Redis", "AWS"],
            icon: SkillIcon::Brain,
            demo_href: "#",
            code_href: "#",
        },
        Project {
            id: 3,
            title: "Chatbot Multilingue",
            description: "Chatbot intelligente con supporto per 20+ lingue, capace di comprendere il contesto culturale e fornire risposte naturali e pertinenti.",
            image: "/project-3.jpg",
            tags: &["NLP", "Transformers", "Docker", "Kubernetes"],
            icon: SkillIcon::Message,
            demo_href: "#",
            code_href: "#",
        },
    ]
}

/// Page anchors, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Section {
    Home,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    pub fn all() -> &'static [Section] {
        &[
            Section::Home,
            Section::Projects,
            Section::Skills,
            Section::Contact,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: Section,
}

pub fn nav_links() -> &'static [NavLink] {
    &[
        NavLink {
            label: "Home",
            target: Section::Home,
        },
        NavLink {
            label: "Progetti",
            target: Section::Projects,
        },
        NavLink {
            label: "Competenze",
            target: Section::Skills,
        },
        NavLink {
            label: "Contatti",
            target: Section::Contact,
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub glyph: &'static str,
}

pub fn contact_info() -> &'static [ContactInfo] {
    &[
        ContactInfo {
            label: "Email",
            value: "simone.torrengo1@gmail.com",
            href: "mailto:simone.torrengo1@gmail.com",
            glyph: "✉️",
        },
        ContactInfo {
            label: "Location",
            value: "Torino, Italia",
            href: "#",
            glyph: "📍",
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub glyph: &'static str,
}

pub fn social_links() -> &'static [SocialLink] {
    &[
        SocialLink {
            label: "LinkedIn",
            href: "https://www.linkedin.com/in/simone-torrengo",
            glyph: "in",
        },
        SocialLink {
            label: "GitHub",
            href: "https://github.com/SIMONE010afk",
            glyph: "gh",
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

pub fn footer_columns() -> &'static [FooterColumn] {
    &[
        FooterColumn {
            title: "Navigazione",
            links: &[
                FooterLink {
                    label: "Home",
                    href: "#home",
                },
                FooterLink {
                    label: "Progetti",
                    href: "#projects",
                },
                FooterLink {
                    label: "Competenze",
                    href: "#skills",
                },
                FooterLink {
                    label: "Contatti",
                    href: "#contact",
                },
            ],
        },
        FooterColumn {
            title: "Servizi",
            links: &[
                FooterLink {
                    label: "AI Agents",
                    href: "#",
                },
                FooterLink {
                    label: "Chatbot",
                    href: "#",
                },
                FooterLink {
                    label: "NLP Solutions",
                    href: "#",
                },
                FooterLink {
                    label: "Consulting",
                    href: "#",
                },
            ],
        },
        FooterColumn {
            title: "Risorse",
            links: &[
                FooterLink {
                    label: "Blog",
                    href: "#",
                },
                FooterLink {
                    label: "Case Studies",
                    href: "#",
                },
                FooterLink {
                    label: "Documentazione",
                    href: "#",
                },
                FooterLink {
                    label: "GitHub",
                    href: "https://github.com/SIMONE010afk",
                },
            ],
        },
    ]
}

/// Copy for the hero banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroCopy {
    pub badge: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub portrait: &'static str,
    pub card_heading: &'static str,
    pub card_caption: &'static str,
}

pub fn hero() -> HeroCopy {
    HeroCopy {
        badge: "Disponibile per nuovi progetti",
        title: "Sono un AI Agent Developer",
        subtitle: "Creo agenti che trasformano il modo in cui interagisci con la tecnologia su Azure. Specializzato in NLP, LLM e architetture AI avanzate.",
        portrait: "/Cropped.jpg",
        card_heading: "Data Analyst & AI Specialist",
        card_caption: "Certificato",
    }
}

pub const BRAND: &str = "AI Agent Dev";
pub const OWNER: &str = "Simone Torrengo";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_inventory_is_stable() {
        let all = skills();
        assert_eq!(all.len(), 19);

        let mut names: Vec<&'static str> = all.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 19);

        for s in &all {
            assert!(s.level <= 100, "{} level out of range", s.name);
            assert!(!s.category.trim().is_empty());
        }
    }

    #[test]
    fn nav_links_cover_every_section_once() {
        let targets: Vec<Section> = nav_links().iter().map(|l| l.target).collect();
        assert_eq!(targets, Section::all());
        assert_eq!(Section::Skills.href(), "#skills");
    }

    #[test]
    fn projects_have_unique_ids_and_tags() {
        let all = projects();
        assert_eq!(all.len(), 3);
        let mut ids: Vec<u32> = all.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
        assert!(all.iter().all(|p| !p.tags.is_empty()));
    }

    #[test]
    fn footer_navigation_matches_nav_links() {
        let nav = footer_columns()
            .iter()
            .find(|c| c.title == "Navigazione")
            .expect("navigation column");
        let hrefs: Vec<String> = nav.links.iter().map(|l| l.href.to_string()).collect();
        let expected: Vec<String> = nav_links().iter().map(|l| l.target.href()).collect();
        assert_eq!(hrefs, expected);
    }
}
