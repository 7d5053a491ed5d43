//! Fixed page content: landmarks, service cards, project cards, and
//! contact channels. Enumerated once, never computed.

/// Named page sections used as navigation targets and as intersection
/// observation subjects.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    Home,
    Services,
    Projects,
    Degree,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Services,
        Section::Projects,
        Section::Degree,
        Section::Contact,
    ];

    /// DOM id of the landmark element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "services",
            Section::Projects => "personal-projects",
            Section::Degree => "degree-projects",
            Section::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Services => "Services",
            Section::Projects => "Personal Projects",
            Section::Degree => "Bachelor's Degree",
            Section::Contact => "Contact",
        }
    }
}

/// The supported accent colors. Per-item styling is picked from this
/// closed set rather than built out of runtime strings.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Accent {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Gray,
}

impl Accent {
    /// Class applied to icon badges and card media strips.
    pub fn class(self) -> &'static str {
        match self {
            Accent::Red => "accent-red",
            Accent::Orange => "accent-orange",
            Accent::Yellow => "accent-yellow",
            Accent::Green => "accent-green",
            Accent::Blue => "accent-blue",
            Accent::Gray => "accent-gray",
        }
    }
}

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub accent: Accent,
}

pub const SERVICES: [Service; 6] = [
    Service {
        icon: "🎨",
        title: "Custom Design",
        desc: "Tailored to your brand identity",
        accent: Accent::Red,
    },
    Service {
        icon: "📱",
        title: "Mobile-First",
        desc: "Looks great on any device",
        accent: Accent::Green,
    },
    Service {
        icon: "🎧",
        title: "Ongoing Support",
        desc: "For updates and maintenance",
        accent: Accent::Blue,
    },
    Service {
        icon: "🎬",
        title: "Video Editing",
        desc: "Entire video editing solutions",
        accent: Accent::Blue,
    },
    Service {
        icon: "🔍",
        title: "SEO-Optimized",
        desc: "Helps you get found online",
        accent: Accent::Yellow,
    },
    Service {
        icon: "🖥️",
        title: "PC Repairs & Upgrades",
        desc: "Repair PCs & upgrade existing systems",
        accent: Accent::Red,
    },
];

/// A project card. `link` of `None` renders a disabled "In Development"
/// button instead of an external link.
pub struct Project {
    pub title: &'static str,
    pub desc: &'static str,
    pub tags: &'static [&'static str],
    pub link: Option<&'static str>,
    pub accent: Accent,
}

pub const PERSONAL_PROJECTS: [Project; 3] = [
    Project {
        title: "Next.js Full-Stack Auth Boilerplate",
        desc: "A production-ready full-stack boilerplate featuring secure \
               authentication, JWT-based sessions, role-based access control, \
               email verification, password resets, and a modular architecture \
               for rapid project startup. Includes a CI workflow and a full \
               test suite.",
        tags: &["React", "TypeScript", "JWT", "REST API"],
        link: Some("https://next-js-authentication-boilerplate.vercel.app/"),
        accent: Accent::Blue,
    },
    Project {
        title: "BetWise (Work in Progress)",
        desc: "A football betting platform where users can place bets on \
               games. Built with a .NET backend and a microservices \
               architecture: 3 APIs, a Gateway API, and 3 workers connected \
               through event-driven messaging with RabbitMQ.",
        tags: &[".NET", "Microservices", "RabbitMQ", "Gateway API", "React.js"],
        link: None,
        accent: Accent::Orange,
    },
    Project {
        title: "Portfolio Website",
        desc: "This site: a personal portfolio showcasing projects, services, \
               and a contact flow, focused on performance, SEO, and a clean UI.",
        tags: &["Rust", "Yew", "WebAssembly", "SEO"],
        link: None,
        accent: Accent::Red,
    },
];

/// A graded degree project. Same card shape as [`Project`] plus the
/// outcome line and grades.
pub struct DegreeProject {
    pub title: &'static str,
    pub desc: &'static str,
    pub result: &'static str,
    pub grade: &'static str,
    pub module_grade: &'static str,
    pub tags: &'static [&'static str],
    pub link: Option<&'static str>,
    pub accent: Accent,
}

pub const DEGREE_PROJECTS: [DegreeProject; 3] = [
    DegreeProject {
        title: "Carrozza App",
        desc: "Car management platform with manufacturer database, car \
               listings, and salesperson assignments.",
        result: "Increased car management efficiency by 70%",
        grade: "66/66 (100%) (A*)",
        module_grade: "83/100 (A*)",
        tags: &["Laravel", "PostgreSQL", "Bootstrap"],
        link: Some("https://carrozzaapp.koyeb.app/"),
        accent: Accent::Red,
    },
    DegreeProject {
        title: "Cloud Ticket App",
        desc: "Cloud helpdesk where users submit tickets with file uploads \
               and technicians manage them. Built on GCP with serverless \
               processing and secure storage.",
        result: "Automated attachment handling and technician notifications",
        grade: "56/56 (100%) (A*)",
        module_grade: "86/100 (A*)",
        tags: &[".NET MVC", "Cloud Functions", "Cloud Storage", "Redis"],
        link: Some("https://maintenance-page-gray-mu.vercel.app/"),
        accent: Accent::Orange,
    },
    DegreeProject {
        title: "CabGo — Microservices Cab Booking",
        desc: "A distributed, event-driven cab booking system built with a \
               microservices architecture in .NET. Location-based fare \
               calculation, real-time weather integration, and discounts on \
               every 3rd booking. Deployed on Azure with a Gateway API and \
               RabbitMQ messaging.",
        result: "Scalable booking platform with event-driven notifications",
        grade: "55/61 (90.16%) (A*)",
        module_grade: "79/100 (A*)",
        tags: &[".NET 6/7", "Microservices", "RabbitMQ", "MongoDB Atlas", "Azure"],
        link: Some("https://cabbookingfrontendkc.azurewebsites.net/"),
        accent: Accent::Yellow,
    },
];

pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub accent: Accent,
}

pub const CONTACT_CHANNELS: [ContactChannel; 6] = [
    ContactChannel {
        icon: "✉️",
        title: "Email",
        value: "kyle@webdev.com",
        href: "mailto:kyle@webdev.com",
        accent: Accent::Red,
    },
    ContactChannel {
        icon: "📞",
        title: "Phone",
        value: "+356 79264233",
        href: "tel:+35679264233",
        accent: Accent::Orange,
    },
    ContactChannel {
        icon: "💬",
        title: "Messenger",
        value: "Chat on Messenger",
        href: "https://m.me/@Kyle.Cachia",
        accent: Accent::Blue,
    },
    ContactChannel {
        icon: "💬",
        title: "WhatsApp",
        value: "Message on WhatsApp",
        href: "https://wa.me/35679264233",
        accent: Accent::Green,
    },
    ContactChannel {
        icon: "💼",
        title: "LinkedIn",
        value: "Connect on LinkedIn",
        href: "https://www.linkedin.com/in/kyle-cachia-41bbb8252/",
        accent: Accent::Blue,
    },
    ContactChannel {
        icon: "🐙",
        title: "GitHub",
        value: "GitHub",
        href: "https://www.github.com/Cachia36",
        accent: Accent::Gray,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_are_unique() {
        for (i, a) in Section::ALL.iter().enumerate() {
            for b in &Section::ALL[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }

    #[test]
    fn accent_classes_come_from_a_fixed_set() {
        let accents = [
            Accent::Red,
            Accent::Orange,
            Accent::Yellow,
            Accent::Green,
            Accent::Blue,
            Accent::Gray,
        ];
        for accent in accents {
            assert!(accent.class().starts_with("accent-"));
        }
    }

    #[test]
    fn linkless_projects_render_as_in_development() {
        assert!(PERSONAL_PROJECTS.iter().any(|p| p.link.is_none()));
        // every degree project currently links out
        assert!(DEGREE_PROJECTS.iter().all(|p| p.link.is_some()));
    }
}
