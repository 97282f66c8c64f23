use std::sync::OnceLock;

use regex::Regex;

use super::domain::CandidateProfile;

/// Known-skill vocabulary used for substring lookup in candidate messages.
const SKILL_VOCABULARY: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "go",
    "rust",
    "react",
    "vue",
    "angular",
    "django",
    "flask",
    "fastapi",
    "docker",
    "kubernetes",
    "aws",
    "gcp",
    "azure",
    "sql",
    "postgresql",
    "mongodb",
    "redis",
    "machine learning",
    "ai",
    "ml",
    "nlp",
    "computer vision",
];

const ROLE_MARKERS: &[&str] = &["i work as a ", "i work as an ", "my current role is "];

const MAX_ROLE_LEN: usize = 60;

/// Facts extracted from a single candidate message. Absent fields mean the
/// message carried no usable signal, not that a previous value should be
/// cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFacts {
    pub years_of_experience: Option<u8>,
    pub current_role: Option<String>,
    pub skills: Vec<String>,
}

impl ProfileFacts {
    pub fn is_empty(&self) -> bool {
        self.years_of_experience.is_none() && self.current_role.is_none() && self.skills.is_empty()
    }

    /// Merge into the profile with an overwrite-if-present policy.
    pub fn merge_into(&self, profile: &mut CandidateProfile) {
        if let Some(years) = self.years_of_experience {
            profile.years_of_experience = Some(years);
        }
        if let Some(role) = &self.current_role {
            profile.current_role = Some(role.clone());
        }
        for skill in &self.skills {
            profile.skills.insert(skill.clone());
        }
    }
}

fn years_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d+)\s*(?:years?|yrs?)").expect("valid years pattern"))
}

/// Extract profile facts from a raw candidate message.
///
/// Years are detected via a numeric pattern; when a message names two
/// conflicting figures the extraction is ambiguous and the field is left
/// unset rather than guessing. Skills come from the vocabulary lookup.
pub fn extract_facts(message: &str) -> ProfileFacts {
    let lowered = message.to_lowercase();

    ProfileFacts {
        years_of_experience: extract_years(&lowered),
        current_role: extract_role(&lowered),
        skills: extract_skills(&lowered),
    }
}

fn extract_years(lowered: &str) -> Option<u8> {
    let mut found: Option<u8> = None;

    for capture in years_pattern().captures_iter(lowered) {
        let Ok(years) = capture[1].parse::<u8>() else {
            continue;
        };
        match found {
            None => found = Some(years),
            // Conflicting figures in one message: ambiguous, leave unset.
            Some(existing) if existing != years => return None,
            Some(_) => {}
        }
    }

    found
}

fn extract_role(lowered: &str) -> Option<String> {
    for marker in ROLE_MARKERS {
        if let Some(start) = lowered.find(marker) {
            let tail = &lowered[start + marker.len()..];
            let end = tail
                .find(['.', ',', ';', '!', '?', '\n'])
                .unwrap_or(tail.len());
            let role = tail[..end].trim();
            if !role.is_empty() && role.len() <= MAX_ROLE_LEN {
                return Some(role.to_string());
            }
        }
    }

    None
}

fn extract_skills(lowered: &str) -> Vec<String> {
    SKILL_VOCABULARY
        .iter()
        .filter(|skill| lowered.contains(*skill))
        .map(|skill| skill.to_string())
        .collect()
}
