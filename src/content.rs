use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{ProjectRecord, TestimonialRecord};
use crate::theme::Accent;

pub static PROJECTS: LazyLock<Vec<ProjectRecord>> = LazyLock::new(|| load_or_empty("projects.json"));
pub static TESTIMONIALS: LazyLock<Vec<TestimonialRecord>> =
    LazyLock::new(|| load_or_empty("testimonials.json"));
pub static SERVICES: LazyLock<Vec<ServiceCard>> = LazyLock::new(|| load_or_empty("services.json"));
pub static SKILL_GROUPS: LazyLock<Vec<SkillGroup>> = LazyLock::new(|| load_or_empty("skills.json"));
pub static SKILL_BADGES: LazyLock<Vec<SkillBadge>> = LazyLock::new(|| load_or_empty("badges.json"));

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCard {
    pub title: String,
    pub description: String,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub accent: Accent,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillBadge {
    pub label: String,
    pub accent: Accent,
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    Missing(&'static str),
    #[error("Couldn't parse {name}: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub fn load<T: DeserializeOwned>(name: &'static str) -> Result<T, ContentError> {
    let file = Content::get(name).ok_or(ContentError::Missing(name))?;
    serde_json::from_slice(&file.data).map_err(|source| ContentError::Parse { name, source })
}

fn load_or_empty<T: DeserializeOwned>(name: &'static str) -> Vec<T> {
    match load(name) {
        Ok(items) => items,
        Err(e) => {
            log::error!("{e}");
            Vec::new()
        }
    }
}
