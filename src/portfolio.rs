//! Static content of the portfolio page.

pub const OWNER: &str = "Ayush Kamani";
pub const HEADLINE: &str = "Full Stack Developer";
pub const TAGLINE: &str = "Building scalable web applications with Python, Django, React & PostgreSQL";

/// Page sections in display order. The id doubles as the element id used for
/// in-page navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubProject {
    pub name: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub link: Option<&'static str>,
    pub sub_projects: &'static [SubProject],
    pub features: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "AnkiMaster",
        subtitle: "English & Spanish Learning Platform",
        description: "Developed a bilingual learning platform with step-by-step modules for improving speaking, vocabulary, and grammar.",
        tech: &["Python", "Django", "Html", "Css", "JavaScript", "PostgreSQL"],
        link: Some("https://ankimasterflashcards.com/"),
        sub_projects: &[],
        features: &[
            "Flashcard-based learning with browse and study functionality",
            "User authentication & profiles with progress tracking",
            "Interactive flashcards with translations, images, and audio",
            "Content management for teachers to upload lessons",
            "Multilingual learning history storage",
        ],
    },
    Project {
        title: "Edjobster",
        subtitle: "Job, Candidate & Interview Management Suite",
        description: "A multi-product platform for managing job postings, applications, resume parsing, and interview workflows.",
        tech: &["React.js", "Python", "Django REST", "PostgreSQL"],
        link: None,
        sub_projects: &[
            SubProject {
                name: "Main App",
                link: "https://app.edjobster.com",
            },
            SubProject {
                name: "Job Board",
                link: "https://jobs.edjobster.com",
            },
            SubProject {
                name: "Website",
                link: "https://edjobster.com",
            },
            SubProject {
                name: "CV Tuner",
                link: "https://cvtuner.edjobster.com",
            },
        ],
        features: &[
            "React.js frontends backed by Django REST APIs",
            "Job postings, applications, and resume parsing",
            "Secure API authentication with role-based access",
            "Advanced search/filters for jobs and candidates",
            "Comprehensive interview workflow management",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Languages & Technologies",
        skills: &["Python", "JavaScript", "HTML", "CSS"],
    },
    SkillCategory {
        name: "Databases",
        skills: &["PostgreSQL", "SQLite"],
    },
    SkillCategory {
        name: "UI & Design System",
        skills: &["Material-UI", "Tailwind CSS"],
    },
    SkillCategory {
        name: "Libraries & Frameworks",
        skills: &["Django REST Framework", "ReactJS"],
    },
    SkillCategory {
        name: "Tools & Platforms",
        skills: &["Postman", "GitHub"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Email,
    Phone,
    Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub kind: ChannelKind,
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        kind: ChannelKind::Email,
        label: "Email",
        value: "ayushkamani2004@gmail.com",
    },
    ContactChannel {
        kind: ChannelKind::Phone,
        label: "Phone",
        value: "+91 6355826374",
    },
    ContactChannel {
        kind: ChannelKind::Location,
        label: "Location",
        value: "Available Remotely",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub external: bool,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/ayush22-04",
        icon: "devicon-github-plain",
        external: true,
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com/in/ayush-kamani",
        icon: "devicon-linkedin-plain",
        external: true,
    },
    SocialLink {
        label: "Email",
        href: "mailto:ayushkamani2004@gmail.com",
        icon: "extra-email",
        external: false,
    },
];

/// Copyright year, stamped by the build script.
pub fn copyright_year() -> &'static str {
    env!("BUILD_YEAR")
}
