//! Content store - the single source of truth for everything rendered
//!
//! One frozen [`Content`] value, built once and shared for the life of the
//! process. There is no partial-load or error state; a missing required
//! field simply does not compile.

use std::sync::LazyLock;

use super::model::*;

static CONTENT: LazyLock<Content> = LazyLock::new(build_content);

/// The site content, available synchronously before any renderer runs
pub fn content() -> &'static Content {
    &CONTENT
}

fn s(value: &str) -> String {
    value.to_string()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn build_content() -> Content {
    Content {
        personal: PersonalInfo {
            name: s("Ruth Ezeh"),
            title: s("Senior Software Engineer"),
            tagline: s("Building scalable solutions with modern technologies"),
            email: s("ruth.codes@gmail.com"),
            phone: Some(s("+234 (906) 488-2273")),
            location: s("Lagos, Nigeria"),
            website: Some(s("https://ruth.codes")),
            avatar: s("assets/images/profile-avatar.jpg"),
            resume: Some(s("/resume.html")),
        },

        social_links: vec![
            SocialLink {
                id: s("github"),
                name: s("GitHub"),
                url: s("https://github.com/rutechh"),
                icon: s("github"),
                username: Some(s("rutechh")),
            },
            SocialLink {
                id: s("email"),
                name: s("Email"),
                url: s("mailto:ruth.codes@gmail.com"),
                icon: s("mail"),
                username: None,
            },
        ],

        about: AboutProfile {
            summary: s(
                "Passionate software engineer with 5+ years of experience building scalable \
                 web applications and distributed systems. I specialize in React, TypeScript \
                 and Next.js, with a strong focus on clean code, performance optimization, \
                 and user experience.",
            ),
            detailed_bio: s(
                "I'm a senior software engineer who loves turning complex problems into \
                 elegant solutions. My journey in tech started with a Computer Science \
                 degree, and I've since worked with startups and established companies to \
                 build products that serve millions of users. I'm passionate about mentoring \
                 junior developers, contributing to open source, and staying up-to-date with \
                 the latest technologies. When I'm not coding, you'll find me hiking, \
                 reading tech blogs, or experimenting with new frameworks.",
            ),
            interests: strings(&[
                "Web Development",
                "Cloud Architecture",
                "Open Source",
                "Tech Mentoring",
                "Photography",
            ]),
            values: strings(&[
                "Clean, maintainable code",
                "Continuous learning",
                "Team collaboration",
                "User-first thinking",
                "Innovation",
                "Mentorship",
            ]),
            fun_facts: strings(&[
                "Can solve a Rubik's cube in under 2 minutes",
                "Fluent in JavaScript, TypeScript Programming Languages and 2 human languages",
            ]),
        },

        skills: vec![
            SkillCategory {
                id: s("frontend"),
                name: s("Frontend Development"),
                description: Some(s("Building responsive and interactive user interfaces")),
                skills: vec![
                    skill("react", "React", "frontend", SkillLevel::Expert, 5, "atom"),
                    skill("angular", "Angular", "frontend", SkillLevel::Advanced, 5, "atom"),
                    skill("typescript", "TypeScript", "frontend", SkillLevel::Expert, 5, "code"),
                    skill("javascript", "JavaScript", "frontend", SkillLevel::Expert, 6, "code"),
                    skill("nextjs", "Next.js", "frontend", SkillLevel::Advanced, 3, "code"),
                    skill("tailwind", "Tailwind CSS", "frontend", SkillLevel::Advanced, 5, "palette"),
                    skill("chakra", "Chakra UI", "frontend", SkillLevel::Advanced, 3, "palette"),
                    skill("html", "HTML5", "frontend", SkillLevel::Expert, 6, "code"),
                    skill("css", "CSS3", "frontend", SkillLevel::Expert, 6, "palette"),
                ],
            },
            SkillCategory {
                id: s("backend"),
                name: s("Backend Development"),
                description: Some(s("Server-side development and API design")),
                skills: vec![
                    skill("nestjs", "NestJS", "backend", SkillLevel::Advanced, 3, "server"),
                    skill("rest", "REST APIs", "backend", SkillLevel::Advanced, 3, "network"),
                ],
            },
            SkillCategory {
                id: s("database"),
                name: s("Database & Storage"),
                description: Some(s("Data modeling and database management")),
                skills: vec![
                    skill("postgresql", "PostgreSQL", "database", SkillLevel::Advanced, 3, "database"),
                    skill("mysql", "MySQL", "database", SkillLevel::Advanced, 3, "database"),
                ],
            },
            SkillCategory {
                id: s("cloud"),
                name: s("Cloud & DevOps"),
                description: Some(s("Cloud platforms and deployment automation")),
                skills: vec![skill("cicd", "CI/CD", "cloud", SkillLevel::Advanced, 3, "git-branch")],
            },
            SkillCategory {
                id: s("tools"),
                name: s("Tools & Methodologies"),
                description: Some(s("Development tools and practices")),
                skills: vec![
                    skill("git", "Git", "tools", SkillLevel::Expert, 6, "git-branch"),
                    skill("agile", "Agile/Scrum", "tools", SkillLevel::Advanced, 5, "users"),
                    skill(
                        "testing",
                        "Testing (Jest, Cypress)",
                        "tools",
                        SkillLevel::Intermediate,
                        2,
                        "check-circle",
                    ),
                    skill("figma", "Figma", "tools", SkillLevel::Intermediate, 5, "figma"),
                ],
            },
        ],

        experience: vec![
            Experience {
                id: s("senior-engineer-techcorp"),
                company: s("Todo Toronto"),
                position: s("Senior Software Engineer"),
                location: s("Toronto, Canada"),
                start: s("2024-08"),
                end: None,
                description: s(
                    "Contributed to development of a multi tenant application for a booking \
                     and invoicing system.",
                ),
                achievements: strings(&[
                    "Designed and built multi tenant application for a booking an invoicing system",
                    "Designed and built real-time notification system",
                ]),
                technologies: strings(&["React", "TypeScript", "Next.js", "PostgreSQL", "Chakra UI"]),
                company_logo: None,
                company_url: None,
            },
            Experience {
                id: s("fullstack-developer-innovate"),
                company: s("Mojec International"),
                position: s("Software Engineer"),
                location: s("Lagos, Nigeria"),
                start: s("2022-08"),
                end: Some(s("2024-07")),
                description: s(
                    "Developed and maintained multiple client-facing applications using modern \
                     web technologies. Collaborated with design and product teams to deliver \
                     exceptional user experiences.",
                ),
                achievements: strings(&[
                    "Built 8 production applications from scratch using React and Angular",
                    "Improved application performance by 60% through code optimization",
                    "Collaborated with UX team to increase user engagement by 45%",
                ]),
                technologies: strings(&["React", "JavaScript", "Angular", "Git"]),
                company_logo: None,
                company_url: None,
            },
            Experience {
                id: s("junior-developer-startup"),
                company: s("Pharez Technologies"),
                position: s("Junior Software Developer"),
                location: s("Lagos, Nigeria"),
                start: s("2021-06"),
                end: Some(s("2022-07")),
                description: s(
                    "Started as an intern and quickly became a full-time developer. Worked on \
                     various features for the company's main product while learning modern \
                     development practices.",
                ),
                achievements: strings(&[
                    "Developed responsive frontend components",
                    "Built a web application for a client to manage their expenses and income",
                ]),
                technologies: strings(&["JavaScript", "TypeScript", "Angular", "Tailwind CSS", "Git"]),
                company_logo: None,
                company_url: None,
            },
        ],

        projects: vec![
            ProjectCategory {
                id: s("web-apps"),
                name: s("Web Applications"),
                description: Some(s("Full-stack web applications and platforms")),
                projects: vec![
                    Project {
                        id: s("soap-notes"),
                        name: s("Soap Notes"),
                        description: s(
                            "A comprehensive SOAP Notes platform built with React, Next.js, and \
                             PostgreSQL(Supabase). Features include user authentication, booking \
                             and invoicing system, and admin dashboard.",
                        ),
                        short_description: s("Full-featured SOAP Notes platform"),
                        technologies: strings(&[
                            "React",
                            "TypeScript",
                            "Next.js",
                            "PostgreSQL",
                            "Supabase",
                            "AWS S3",
                            "Redis",
                        ]),
                        features: strings(&[
                            "Booking and invoicing system",
                            "Admin dashboard with analytics",
                            "Secure payment processing",
                            "Order tracking and management",
                            "Mobile-responsive design",
                        ]),
                        challenges: strings(&[
                            "Handling concurrent booking and invoicing",
                            "Implementing complex pricing rules",
                            "Optimizing search performance",
                        ]),
                        solutions: strings(&[
                            "Used database transactions and locks for booking and invoicing",
                            "Created flexible pricing engine with rule builder",
                            "Implemented Elasticsearch for fast search",
                        ]),
                        images: strings(&["assets/images/speakfluent.png"]),
                        demo_url: Some(s("https://www.speakfluent.ca/")),
                        source_url: None,
                        category: s("web-apps"),
                        status: ProjectStatus::Completed,
                        start: s("2023-01"),
                        end: Some(s("2023-06")),
                        team_size: Some(4),
                        role: Some(s("Full Stack Developer")),
                        featured: true,
                    },
                    Project {
                        id: s("invoice-management"),
                        name: s("Quality Signs and Marquee"),
                        description: s(
                            "A website for a movie poster company built with React and Tailwind CSS.",
                        ),
                        short_description: s("Movie poster company website"),
                        technologies: strings(&["React", "Tailwind CSS"]),
                        features: strings(&[
                            "Admin dashboard with with order processing",
                            "Order tracking and management",
                            "Mobile-responsive design",
                        ]),
                        challenges: vec![],
                        solutions: vec![],
                        images: strings(&[
                            "assets/images/qsm-splash.png",
                            "assets/images/qsm-inventory.png",
                        ]),
                        demo_url: Some(s("https://app.qsmfulfillment.com/user/login")),
                        source_url: None,
                        category: s("web-apps"),
                        status: ProjectStatus::Completed,
                        start: s("2022-08"),
                        end: Some(s("2022-11")),
                        team_size: Some(2),
                        role: Some(s("Lead Developer")),
                        featured: true,
                    },
                    Project {
                        id: s("primede-health"),
                        name: s("Primed E-Health"),
                        description: s(
                            "Smart Clinic - Hospital Management Solution Smart Clinic is a \
                             comprehensive hospital management solution designed to facilitate \
                             the day-to-day operations of healthcare organizations. This advanced \
                             software platform integrates various functionalities to streamline \
                             administrative tasks, enhance patient care, and optimize overall \
                             efficiency within the healthcare facility.",
                        ),
                        short_description: s("Health and fitness platform"),
                        technologies: strings(&["React", "TypeScript", "Tailwind CSS"]),
                        features: strings(&[
                            "Health and fitness tracking",
                            "Nutrition logging",
                            "Progress analytics",
                            "Mobile-responsive design",
                        ]),
                        challenges: vec![],
                        solutions: vec![],
                        images: strings(&["assets/images/primed-e-health.png"]),
                        demo_url: Some(s("https://primedehealth.com/")),
                        source_url: None,
                        category: s("web-apps"),
                        status: ProjectStatus::Completed,
                        start: s("2022-03"),
                        end: Some(s("2022-07")),
                        team_size: Some(3),
                        role: None,
                        featured: false,
                    },
                ],
            },
            ProjectCategory {
                id: s("mobile-apps"),
                name: s("Mobile Applications"),
                description: Some(s("React Native and Progressive Web Apps")),
                projects: vec![],
            },
            ProjectCategory {
                id: s("open-source"),
                name: s("Open Source"),
                description: Some(s("Contributions to open source projects and libraries")),
                projects: vec![],
            },
        ],

        certifications: vec![
            Certification {
                id: s("react-developer"),
                name: s("React Developer"),
                issuer: s("Udemy"),
                issue_date: s("2021-09"),
                expiry_date: None,
                credential_id: None,
                credential_url: None,
                description: None,
            },
            Certification {
                id: s("angular-developer"),
                name: s("Angular Developer"),
                issuer: s("Udemy"),
                issue_date: s("2022-06"),
                expiry_date: Some(s("2025-06")),
                credential_id: None,
                credential_url: None,
                description: None,
            },
        ],

        contact: ContactInfo {
            email: s("ruth.codes@gmail.com"),
            phone: Some(s("+234 (906) 488-2273")),
            location: s("Lagos, Nigeria"),
            availability: s("Available for new opportunities"),
            preferred_contact_method: s("Email"),
        },

        navigation: vec![
            nav_item("hero", "Home"),
            nav_item("about", "About"),
            nav_item("skills", "Skills"),
            nav_item("experience", "Experience"),
            nav_item("projects", "Projects"),
            nav_item("contact", "Contact"),
        ],

        seo: SeoMeta {
            title: s("Ruth Ezeh - Senior Software Engineer"),
            description: s(
                "Senior Software Engineer specializing in React, TypeScript, Angular, and \
                 Next.js technologies. Building scalable solutions with modern technologies.",
            ),
            keywords: strings(&[
                "software engineer",
                "full stack developer",
                "react developer",
                "typescript",
                "node.js",
                "angular",
                "nestjs",
                "postgresql",
                "mysql",
                "cicd",
                "git",
                "agile",
                "aws",
                "portfolio",
            ]),
            author: s("Ruth Ezeh"),
            og_image: Some(s("/og-image.jpg")),
        },
    }
}

fn skill(id: &str, name: &str, category: &str, level: SkillLevel, years: u32, icon: &str) -> Skill {
    Skill {
        id: s(id),
        name: s(name),
        category: s(category),
        level,
        years_of_experience: Some(years),
        icon: Some(s(icon)),
    }
}

fn nav_item(section: &str, name: &str) -> NavigationItem {
    NavigationItem {
        id: s(section),
        name: s(name),
        anchor: format!("#{section}"),
        section: s(section),
    }
}
