//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use devfolio::contact::{Ack, ContactBackend, ContactError, ContactMessage};
use devfolio::models::{
    ContactDetail, Highlight, Icon, Portfolio, Profile, Project, SkillCategory, SocialLink,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Small deterministic portfolio, distinct from the built-in content.
pub fn test_portfolio() -> Portfolio {
    Portfolio {
        profile: Profile {
            name: "Test Person".to_string(),
            role: "Systems Engineer".to_string(),
            tagline: "Builds things that stay up.".to_string(),
            bio: vec!["First paragraph.".to_string(), "Second paragraph.".to_string()],
            copyright: "© 2025 Test Person".to_string(),
        },
        social_links: vec![SocialLink {
            icon: Icon::Github,
            label: "GitHub".to_string(),
            url: "https://github.com/test-person".to_string(),
        }],
        highlights: vec![Highlight {
            icon: Icon::Code,
            title: "Clean Code".to_string(),
            description: "Readable and tested.".to_string(),
        }],
        skills: vec![SkillCategory {
            title: "Languages".to_string(),
            icon: Icon::Wrench,
            skills: vec!["Rust".to_string(), "Go".to_string()],
        }],
        projects: vec![Project {
            title: "Widget".to_string(),
            description: "A widget.".to_string(),
            tech: vec!["Rust".to_string()],
            github_url: "https://github.com/test-person/widget".to_string(),
            live_url: "https://widget.example.com".to_string(),
            image_url: "https://example.com/widget.png".to_string(),
        }],
        contact_details: vec![ContactDetail {
            icon: Icon::Mail,
            label: "Email".to_string(),
            value: "test@example.com".to_string(),
        }],
    }
}

/// Writes `portfolio` as TOML into `dir` and returns the path.
pub fn write_content_file(dir: &Path, portfolio: &Portfolio) -> PathBuf {
    let path = dir.join("content.toml");
    let content = toml::to_string_pretty(portfolio).expect("Failed to serialize portfolio");
    fs::write(&path, content).expect("Failed to write content file");
    path
}

/// Backend that records messages and answers with a fixed result.
pub struct RecordingBackend {
    pub received: Mutex<Vec<ContactMessage>>,
    result: Result<Ack, ContactError>,
}

impl RecordingBackend {
    /// Backend that accepts every message with `reference`.
    pub fn accepting(reference: &str) -> Self {
        Self {
            received: Mutex::new(Vec::new()),
            result: Ok(Ack {
                reference: Some(reference.to_string()),
            }),
        }
    }

    /// Backend that fails every message with `error`.
    pub fn failing(error: ContactError) -> Self {
        Self {
            received: Mutex::new(Vec::new()),
            result: Err(error),
        }
    }
}

impl ContactBackend for RecordingBackend {
    fn submit(&self, message: &ContactMessage) -> Result<Ack, ContactError> {
        self.received
            .lock()
            .expect("poisoned")
            .push(message.clone());
        self.result.clone()
    }
}
