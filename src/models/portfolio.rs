//! Portfolio content: profile, highlights, skills, projects and contact details.
//!
//! The built-in content is returned by [`Portfolio::builtin`]. The same shape
//! can be loaded from a TOML file with [`Portfolio::load`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::Icon;

/// Who the portfolio is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Full name shown in the hero title
    pub name: String,
    /// Job title shown under the name
    pub role: String,
    /// One-paragraph pitch under the role
    pub tagline: String,
    /// Biography paragraphs for the About section
    pub bio: Vec<String>,
    /// Footer line
    pub copyright: String,
}

/// External profile link in the hero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon drawn for the link
    pub icon: Icon,
    /// Accessible label
    pub label: String,
    /// Target URL (http(s) or mailto)
    pub url: String,
}

/// About-section card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// Card icon
    pub icon: Icon,
    /// Card title
    pub title: String,
    /// Card body
    pub description: String,
}

/// Skills-section card with an ordered tag list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    /// Category title
    pub title: String,
    /// Category icon
    pub icon: Icon,
    /// Skill tags in display order
    pub skills: Vec<String>,
}

/// Projects-section card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project name
    pub title: String,
    /// Short description
    pub description: String,
    /// Technology tags in display order
    pub tech: Vec<String>,
    /// Source code URL
    pub github_url: String,
    /// Live demo URL
    pub live_url: String,
    /// Preview image URL
    pub image_url: String,
}

/// Contact-section identifier (email, phone, location).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetail {
    /// Detail icon
    pub icon: Icon,
    /// Label, e.g. "Email"
    pub label: String,
    /// Value, e.g. the address itself
    pub value: String,
}

/// All content rendered by the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Hero and footer data
    pub profile: Profile,
    /// Hero social links
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    /// About cards
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    /// Skill categories
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    /// Project cards
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Contact identifiers
    #[serde(default)]
    pub contact_details: Vec<ContactDetail>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Portfolio {
    /// The content compiled into the binary.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            profile: Profile {
                name: "Emmanuel Lara".to_string(),
                role: "Full Stack Web Developer".to_string(),
                tagline: "I build exceptional digital experiences with modern web technologies. \
                          Specializing in React, Node.js, and cloud solutions."
                    .to_string(),
                bio: strings(&[
                    "I'm a passionate full stack developer with expertise in building modern web \
                     applications. With a strong foundation in both frontend and backend \
                     technologies, I create seamless digital experiences that solve real-world \
                     problems.",
                    "I'm constantly learning and adapting to new technologies, always striving to \
                     write clean, maintainable code and deliver exceptional user experiences.",
                ]),
                copyright: "© 2025 Emmanuel Lara . All rights reserved.".to_string(),
            },
            social_links: vec![
                SocialLink {
                    icon: Icon::Github,
                    label: "GitHub".to_string(),
                    url: "https://github.com/emmanuel-lara-dev".to_string(),
                },
                SocialLink {
                    icon: Icon::Mail,
                    label: "Email".to_string(),
                    url: "mailto:twilightlara2005@gmail.com".to_string(),
                },
            ],
            highlights: vec![
                Highlight {
                    icon: Icon::Code,
                    title: "Frontend Development".to_string(),
                    description: "Building responsive and interactive UIs with React, \
                                  TypeScript, and modern CSS frameworks"
                        .to_string(),
                },
                Highlight {
                    icon: Icon::Server,
                    title: "Backend Development".to_string(),
                    description: "Creating robust APIs and server-side applications with \
                                  Node.js, Express, and Python"
                        .to_string(),
                },
                Highlight {
                    icon: Icon::Database,
                    title: "Database Design".to_string(),
                    description: "Designing and optimizing databases with SQL and NoSQL solutions"
                        .to_string(),
                },
                Highlight {
                    icon: Icon::Globe,
                    title: "Full Stack Solutions".to_string(),
                    description: "End-to-end development from concept to deployment".to_string(),
                },
            ],
            skills: vec![
                SkillCategory {
                    title: "Frontend".to_string(),
                    icon: Icon::Code,
                    skills: strings(&[
                        "React",
                        "TypeScript",
                        "Next.js",
                        "TailwindCSS",
                        "HTML/CSS",
                        "JavaScript",
                        "Redux",
                        "Vue.js",
                    ]),
                },
                SkillCategory {
                    title: "Backend".to_string(),
                    icon: Icon::Server,
                    skills: strings(&[
                        "Node.js",
                        "Express",
                        "Python",
                        "Django",
                        "Flask",
                        "REST APIs",
                        "GraphQL",
                        "Microservices",
                    ]),
                },
                SkillCategory {
                    title: "Database".to_string(),
                    icon: Icon::Database,
                    skills: strings(&[
                        "PostgreSQL",
                        "MongoDB",
                        "MySQL",
                        "Redis",
                        "Firebase",
                        "Prisma",
                        "Mongoose",
                    ]),
                },
                SkillCategory {
                    title: "DevOps & Tools".to_string(),
                    icon: Icon::Wrench,
                    skills: strings(&[
                        "Git", "Docker", "AWS", "CI/CD", "Linux", "Nginx", "Jest", "Webpack",
                    ]),
                },
            ],
            projects: vec![Project {
                title: "AI Financial Fraud Detection System".to_string(),
                description: "Advanced machine learning system for detecting fraudulent \
                              transactions in real-time. Features include anomaly detection, \
                              predictive analytics, risk scoring, and comprehensive visualization \
                              dashboard with SHAP explainability."
                    .to_string(),
                tech: strings(&[
                    "Python",
                    "Scikit-learn",
                    "XGBoost",
                    "Streamlit",
                    "Pandas",
                    "SHAP",
                    "Machine Learning",
                ]),
                github_url: "https://github.com/emmanuel-lara-dev/portfolio".to_string(),
                live_url: "https://portfolio-beige-nine-ceavcrwpbb.vercel.app".to_string(),
                image_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=600&fit=crop"
                    .to_string(),
            }],
            contact_details: vec![
                ContactDetail {
                    icon: Icon::Mail,
                    label: "Email".to_string(),
                    value: "twilightlara2005@gmail.com".to_string(),
                },
                ContactDetail {
                    icon: Icon::Phone,
                    label: "Phone".to_string(),
                    value: "+91-9980519973".to_string(),
                },
                ContactDetail {
                    icon: Icon::MapPin,
                    label: "Location".to_string(),
                    value: "Bengaluru, India".to_string(),
                },
            ],
        }
    }

    /// Loads content from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse content file: {}", path.display()))
    }

    /// Parses content from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads `path` if given, otherwise returns the built-in content.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_counts() {
        let portfolio = Portfolio::builtin();
        assert_eq!(portfolio.highlights.len(), 4);
        assert_eq!(portfolio.skills.len(), 4);
        assert_eq!(portfolio.projects.len(), 1);
        assert_eq!(portfolio.contact_details.len(), 3);
        assert_eq!(portfolio.social_links.len(), 2);
        assert_eq!(portfolio.profile.bio.len(), 2);
    }

    #[test]
    fn test_skill_order_is_declaration_order() {
        let portfolio = Portfolio::builtin();
        let titles: Vec<&str> = portfolio.skills.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Frontend", "Backend", "Database", "DevOps & Tools"]);
        assert_eq!(portfolio.skills[0].skills[0], "React");
        assert_eq!(portfolio.skills[3].skills.last().map(String::as_str), Some("Webpack"));
    }

    #[test]
    fn test_skill_tags_unique_within_category() {
        for category in Portfolio::builtin().skills {
            let mut seen = std::collections::HashSet::new();
            for skill in &category.skills {
                assert!(seen.insert(skill), "duplicate {skill} in {}", category.title);
            }
        }
    }

    #[test]
    fn test_toml_roundtrip_preserves_order() {
        let portfolio = Portfolio::builtin();
        let text = toml::to_string(&portfolio).unwrap();
        let parsed = Portfolio::from_toml(&text).unwrap();
        assert_eq!(parsed, portfolio);
    }

    #[test]
    fn test_from_toml_minimal() {
        let content = r#"
[profile]
name = "Ada"
role = "Engineer"
tagline = "Analytical engines"
bio = ["One", "Two"]
copyright = "(c) Ada"

[[projects]]
title = "Engine"
description = "Difference engine notes"
tech = ["Brass"]
github_url = "https://example.com/src"
live_url = "https://example.com"
image_url = "https://example.com/img.png"
"#;
        let portfolio = Portfolio::from_toml(content).unwrap();
        assert_eq!(portfolio.profile.name, "Ada");
        assert_eq!(portfolio.projects.len(), 1);
        assert!(portfolio.skills.is_empty());
        assert!(portfolio.highlights.is_empty());
    }

    #[test]
    fn test_load_missing_file_has_context() {
        let err = Portfolio::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read content file"));
    }

    #[test]
    fn test_load_or_builtin_without_path() {
        assert_eq!(Portfolio::load_or_builtin(None).unwrap(), Portfolio::builtin());
    }
}
