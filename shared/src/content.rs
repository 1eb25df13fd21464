use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Icon shown beside a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconSort {
    Github,
    Linkedin,
    Mail,
}

/// An outbound link rendered as an icon button.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: IconSort,
    pub label: String,
    pub url: String,
}

/// Identity and introduction copy for the page owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub email: String,
    pub cv_url: String,
    pub portrait: String,
    pub workspace_photo: String,
    pub socials: Vec<SocialLink>,
}

/// The two badge rows of the skills section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillSet {
    pub in_use: Vec<String>,
    pub learning: Vec<String>,
}

/// A portfolio project card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub live_url: String,
    pub repo_url: String,
}

/// A blog post teaser. Exactly one post per catalog carries `featured`,
/// which the blog section renders as its large two-column card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub category: String,
    pub date: String,
    pub read_time: String,
    pub featured: bool,
}

/// One of the ways to reach the page owner, with its hover glow colour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactChannel {
    pub icon: IconSort,
    pub label: String,
    pub detail: String,
    pub url: String,
    pub glow: (u8, u8, u8),
}

/// Everything the page renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub profile: Profile,
    pub skills: SkillSet,
    pub projects: Vec<Project>,
    pub posts: Vec<BlogPost>,
    pub channels: Vec<ContactChannel>,
}

impl Content {
    /// The built-in page content. The client renders this immediately and
    /// swaps in the server's copy once `/api/content` answers.
    pub fn catalog() -> Content {
        Content {
            profile: Profile {
                name: "Alex Johnson".to_string(),
                tagline: "Front-End Developer growing into Full-Stack".to_string(),
                about: vec![
                    "I'm Alex Johnson, a web developer passionate about creating sleek, \
                     interactive frontends and building robust backend APIs. I've completed \
                     several REST API projects, strengthening my skills in designing \
                     full-stack applications that are both functional and user-friendly. \
                     I enjoy turning ideas into practical solutions that deliver real value."
                        .to_string(),
                    "I'm always pushing my boundaries, learning advanced backend \
                     technologies, and experimenting with new tools. I aim to craft \
                     applications that are efficient, scalable, and elegantly designed, \
                     bridging the gap between frontend and backend seamlessly, while \
                     continuously improving and solving challenges along the way."
                        .to_string(),
                ],
                email: "alex.johnson@example.com".to_string(),
                cv_url: "/static/cv.pdf".to_string(),
                portrait: "/img/portrait.jpg".to_string(),
                workspace_photo: "/img/workspace.jpg".to_string(),
                socials: vec![
                    SocialLink {
                        icon: IconSort::Github,
                        label: "GitHub".to_string(),
                        url: "https://github.com/alexjohnson".to_string(),
                    },
                    SocialLink {
                        icon: IconSort::Linkedin,
                        label: "LinkedIn".to_string(),
                        url: "https://linkedin.com/in/alexjohnson".to_string(),
                    },
                    SocialLink {
                        icon: IconSort::Mail,
                        label: "Email".to_string(),
                        url: "mailto:alex.johnson@example.com".to_string(),
                    },
                ],
            },
            skills: SkillSet {
                in_use: [
                    "React",
                    "TypeScript",
                    "Node.js",
                    "JavaScript",
                    "Tailwind CSS",
                    "MongoDB",
                    "Git",
                    "Express.js",
                    "Firebase",
                ]
                .map(str::to_string)
                .to_vec(),
                learning: [
                    "Next.js",
                    "Redux",
                    "DBMS",
                    "SQL",
                    "PostgreSQL",
                    "Prisma",
                    "Docker",
                    "AWS",
                    "Vitest",
                    "Jest",
                    "GraphQL",
                ]
                .map(str::to_string)
                .to_vec(),
            },
            projects: vec![
                Project {
                    title: "Modern Web Dashboard".to_string(),
                    description: "A comprehensive analytics dashboard built with React and \
                                  TypeScript, featuring real-time data visualization and \
                                  responsive design."
                        .to_string(),
                    image: "/img/project_dashboard.jpg".to_string(),
                    technologies: ["React", "TypeScript", "Tailwind CSS", "Chart.js"]
                        .map(str::to_string)
                        .to_vec(),
                    live_url: "https://example.com/dashboard".to_string(),
                    repo_url: "https://github.com/alexjohnson/dashboard".to_string(),
                },
                Project {
                    title: "Mobile-First E-commerce App".to_string(),
                    description: "A responsive e-commerce platform with modern UI/UX, payment \
                                  integration, and inventory management system."
                        .to_string(),
                    image: "/img/project_commerce.jpg".to_string(),
                    technologies: ["Next.js", "Stripe", "MongoDB", "Node.js"]
                        .map(str::to_string)
                        .to_vec(),
                    live_url: "https://example.com/shop".to_string(),
                    repo_url: "https://github.com/alexjohnson/shop".to_string(),
                },
                Project {
                    title: "Data Analytics Platform".to_string(),
                    description: "Advanced data visualization platform with machine learning \
                                  insights, custom reporting, and real-time analytics."
                        .to_string(),
                    image: "/img/project_analytics.jpg".to_string(),
                    technologies: ["Python", "React", "D3.js", "PostgreSQL"]
                        .map(str::to_string)
                        .to_vec(),
                    live_url: "https://example.com/analytics".to_string(),
                    repo_url: "https://github.com/alexjohnson/analytics".to_string(),
                },
            ],
            posts: vec![
                BlogPost {
                    title: "Building Modern Web Applications with React and TypeScript"
                        .to_string(),
                    excerpt: "Discover best practices for creating scalable, maintainable \
                              applications using React and TypeScript. Learn about advanced \
                              patterns and techniques."
                        .to_string(),
                    image: "/img/blog_react.jpg".to_string(),
                    category: "Tutorial".to_string(),
                    date: "Dec 15, 2024".to_string(),
                    read_time: "8 min read".to_string(),
                    featured: true,
                },
                BlogPost {
                    title: "Advanced JavaScript Techniques Every Developer Should Know"
                        .to_string(),
                    excerpt: "Explore advanced JavaScript concepts including closures, \
                              prototypes, async patterns, and modern ES6+ features that will \
                              level up your coding skills."
                        .to_string(),
                    image: "/img/blog_js.jpg".to_string(),
                    category: "Guide".to_string(),
                    date: "Dec 10, 2024".to_string(),
                    read_time: "12 min read".to_string(),
                    featured: false,
                },
                BlogPost {
                    title: "Optimizing Web Performance: Tips and Best Practices".to_string(),
                    excerpt: "Learn how to optimize your web applications for better \
                              performance, including code splitting, lazy loading, and \
                              efficient state management."
                        .to_string(),
                    image: "/img/blog_perf.jpg".to_string(),
                    category: "Performance".to_string(),
                    date: "Dec 5, 2024".to_string(),
                    read_time: "6 min read".to_string(),
                    featured: false,
                },
            ],
            channels: vec![
                ContactChannel {
                    icon: IconSort::Mail,
                    label: "Email".to_string(),
                    detail: "alex.johnson@example.com".to_string(),
                    url: "mailto:alex.johnson@example.com".to_string(),
                    glow: (34, 197, 94),
                },
                ContactChannel {
                    icon: IconSort::Linkedin,
                    label: "LinkedIn".to_string(),
                    detail: "linkedin.com/in/alexjohnson".to_string(),
                    url: "https://linkedin.com/in/alexjohnson".to_string(),
                    glow: (59, 130, 246),
                },
                ContactChannel {
                    icon: IconSort::Github,
                    label: "GitHub".to_string(),
                    detail: "github.com/alexjohnson".to_string(),
                    url: "https://github.com/alexjohnson".to_string(),
                    glow: (147, 51, 234),
                },
            ],
        }
    }

    /// The single post the blog section renders large, if the catalog is
    /// well-formed.
    pub fn featured_post(&self) -> Option<&BlogPost> {
        self.posts.iter().filter(|post| post.featured).exactly_one().ok()
    }

    /// Every post except the featured one, in catalog order.
    pub fn regular_posts(&self) -> impl Iterator<Item = &BlogPost> {
        self.posts.iter().filter(|post| !post.featured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_features_exactly_one_post() {
        let content = Content::catalog();

        assert!(content.featured_post().is_some());
        assert_eq!(
            content.regular_posts().count(),
            content.posts.len() - 1
        );
    }

    #[test]
    fn catalog_sections_are_populated() {
        let content = Content::catalog();

        assert!(!content.profile.about.is_empty());
        assert!(!content.skills.in_use.is_empty());
        assert!(!content.skills.learning.is_empty());
        assert!(!content.projects.is_empty());
        assert_eq!(content.channels.len(), 3);

        for project in &content.projects {
            assert!(!project.technologies.is_empty());
        }
    }

    #[test]
    fn ambiguous_featured_posts_resolve_to_none() {
        let mut content = Content::catalog();

        for post in content.posts.iter_mut() {
            post.featured = true;
        }

        assert!(content.featured_post().is_none());
    }
}
