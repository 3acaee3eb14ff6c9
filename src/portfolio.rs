use chrono::{DateTime, Datelike, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    GraduationCap,
    TrendingUp,
    Paperclip,
    Bot,
    BarChart,
    ExternalLink,
    Mail,
    Phone,
    Github,
    Linkedin,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::GraduationCap => "🎓",
            Self::TrendingUp => "📈",
            Self::Paperclip => "📎",
            Self::Bot => "🤖",
            Self::BarChart => "📊",
            Self::ExternalLink => "↗",
            Self::Mail => "✉️",
            Self::Phone => "📞",
            Self::Github => "",
            Self::Linkedin => "",
        }
    }

    /// Icon font class for brand icons that have no emoji.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Github => Some("devicon-github-plain"),
            Self::Linkedin => Some("devicon-linkedin-plain"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub tech: &'static [&'static str],
    pub gradient: &'static str,
    pub demo: &'static str,
    pub source: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: &'static str,
    pub href: &'static str,
    pub gradient: &'static str,
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Web Developer Intern",
        company: "StatixPro",
        period: "November 2023 – September 2024",
        description: "Maintained and improved frontend features, fixed bugs, and supported digital marketing with responsive web pages. Worked with React, HTML, CSS, JavaScript, and Java to deliver optimized UI/UX performance.",
        icon: Icon::GraduationCap,
        skills: &["React.js", "HTML", "CSS", "Java"],
    },
    Experience {
        title: "AI Engineer",
        company: "NexNora Technologies",
        period: "October 2024 - Present",
        description: "Working on end-to-end AI pipelines including data preprocessing, cleaning, model evaluation, and debugging ML workflows. Contributing to NLP and deep learning model development to improve system performance.",
        icon: Icon::TrendingUp,
        skills: &["Python", "Machine Learning", "Deep Learning", "NLP"],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "PaperParse",
        description: "PaperParse is an AI tool designed to help developers, students, and researchers quickly understand complex research papers.",
        icon: Icon::Paperclip,
        tech: &["Python", "NLP", "Render", "OpenAI"],
        gradient: "from-orange-400 to-red-500",
        demo: "https://ai-research-paper-assistant.vercel.app/",
        source: "https://github.com/SIBIHARANSARAVANAN/ai-research-paper-assistant",
    },
    Project {
        title: "PrepBot",
        description: "PrepBot is an intelligent interview practice tool that helps users improve their communication and confidence.",
        icon: Icon::Bot,
        tech: &["Python", "Render", "Groq"],
        gradient: "from-blue-400 to-purple-500",
        demo: "https://ai-nlp-chatbot.vercel.app/",
        source: "https://github.com/SIBIHARANSARAVANAN/chat_bot",
    },
    Project {
        title: "Recommendation System Project",
        description: "An intelligent Recommendation System designed to deliver personalized suggestions based on user preferences, behavior, and interaction history.",
        icon: Icon::BarChart,
        tech: &["Power BI", "Python", "Pandas", "Data Viz"],
        gradient: "from-green-400 to-blue-500",
        demo: "https://your-demo-link.com",
        source: "https://github.com/SIBIHARANSARAVANAN/Recommendation-System",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: Icon::Mail,
        label: "sibiharansaravanan2002@gmail.com",
        href: "mailto:sibiharansaravanan2002@gmail.com",
        gradient: "from-red-400 to-pink-400",
    },
    SocialLink {
        icon: Icon::Phone,
        label: "+91 84899 41515",
        href: "tel:+918489941515",
        gradient: "from-green-400 to-blue-400",
    },
    SocialLink {
        icon: Icon::Github,
        label: "GitHub Profile",
        href: "https://github.com/SIBIHARANSARAVANAN",
        gradient: "from-gray-400 to-gray-600",
    },
    SocialLink {
        icon: Icon::Linkedin,
        label: "LinkedIn Profile",
        href: "https://www.linkedin.com/in/sibiharan-s-86087b358/",
        gradient: "from-blue-400 to-blue-600",
    },
];

/// Which side of the timeline spine an entry sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineSide {
    Left,
    Right,
}

impl TimelineSide {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Left
        } else {
            Self::Right
        }
    }
}

pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// Year shown in the footer copyright line.
pub fn copyright_year() -> i32 {
    year_of(BUILD_TIME).unwrap_or_else(|| Utc::now().year())
}

fn year_of(timestamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|t| t.year())
}
