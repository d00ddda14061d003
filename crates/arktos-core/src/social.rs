//! Social links registry

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::adapter::Adapter;

const SOCIAL_ADAPTER_NAME: &str = "social";
const SOCIALS_DATA: &str = include_str!("../data/socials.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    pub id: String,
    pub name: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Deserialize)]
struct SocialsData {
    socials: Vec<Social>,
}

fn registry() -> &'static [Social] {
    static SOCIALS: OnceLock<Vec<Social>> = OnceLock::new();
    SOCIALS.get_or_init(|| match serde_json::from_str::<SocialsData>(SOCIALS_DATA) {
        Ok(data) => data.socials,
        Err(e) => {
            tracing::warn!(error = %e, "invalid socials data");
            Vec::new()
        }
    })
}

/// Read access to the bundled social links
#[derive(Debug, Clone)]
pub struct SocialAdapter {
    adapter: Adapter,
}

impl Default for SocialAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl SocialAdapter {
    pub fn new() -> Self {
        SocialAdapter {
            adapter: Adapter::new(SOCIAL_ADAPTER_NAME),
        }
    }

    pub fn id(&self) -> &str {
        self.adapter.id()
    }

    /// Every social link, in registry order
    pub fn all(&self) -> &'static [Social] {
        registry()
    }

    pub fn find(&self, id: &str) -> Option<&'static Social> {
        registry().iter().find(|social| social.id == id)
    }
}
