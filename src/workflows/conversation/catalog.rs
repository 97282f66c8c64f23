use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{QuestionId, ScreeningQuestion};

/// Static company facts referenced by company-question replies. The core
/// treats the content as opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub company_id: String,
    pub company_name: String,
    pub mission: String,
    pub culture: String,
    pub benefits: Vec<String>,
    pub size: String,
    pub industry: String,
    pub website: String,
}

/// Static job posting referenced by job-question replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOffer {
    pub job_id: String,
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub nice_to_have: Vec<String>,
    pub salary_range: String,
    pub location: String,
    pub remote_policy: String,
    pub team_size: u8,
}

/// Lookup failures for the read-only content stores.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown job id: {0}")]
    UnknownJob(String),
    #[error("unknown company id: {0}")]
    UnknownCompany(String),
}

/// Read-only lookup from a job id to its ordered screening questions. The
/// returned order is the canonical asking order.
pub trait ScreeningQuestionBank: Send + Sync {
    fn questions_for(&self, job_id: &str) -> Result<Vec<ScreeningQuestion>, CatalogError>;
}

/// Read-only company content source.
pub trait CompanyInfoStore: Send + Sync {
    fn company(&self, company_id: &str) -> Result<CompanyInfo, CatalogError>;
}

/// Read-only job posting source.
pub trait JobOfferStore: Send + Sync {
    fn job_offer(&self, job_id: &str) -> Result<JobOffer, CatalogError>;
}

/// Convenience supertrait for injecting all three content sources at once.
/// Any of them can be swapped for a real data source without touching the
/// state machine.
pub trait RecruitingDirectory: ScreeningQuestionBank + CompanyInfoStore + JobOfferStore {}

impl<T> RecruitingDirectory for T where T: ScreeningQuestionBank + CompanyInfoStore + JobOfferStore {}

/// In-memory catalog seeded with the standard screening content.
#[derive(Debug, Clone)]
pub struct StandardCatalog {
    companies: BTreeMap<String, CompanyInfo>,
    offers: BTreeMap<String, JobOffer>,
    question_banks: BTreeMap<String, Vec<ScreeningQuestion>>,
}

impl StandardCatalog {
    pub fn standard() -> Self {
        let mut companies = BTreeMap::new();
        companies.insert("tech_innovators".to_string(), tech_innovators());

        let mut offers = BTreeMap::new();
        let mut question_banks = BTreeMap::new();
        for (offer, questions) in [senior_python_dev(), ml_engineer()] {
            question_banks.insert(offer.job_id.clone(), questions);
            offers.insert(offer.job_id.clone(), offer);
        }

        Self {
            companies,
            offers,
            question_banks,
        }
    }

    pub fn job_ids(&self) -> Vec<String> {
        self.offers.keys().cloned().collect()
    }
}

impl ScreeningQuestionBank for StandardCatalog {
    fn questions_for(&self, job_id: &str) -> Result<Vec<ScreeningQuestion>, CatalogError> {
        self.question_banks
            .get(job_id)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownJob(job_id.to_string()))
    }
}

impl CompanyInfoStore for StandardCatalog {
    fn company(&self, company_id: &str) -> Result<CompanyInfo, CatalogError> {
        self.companies
            .get(company_id)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownCompany(company_id.to_string()))
    }
}

impl JobOfferStore for StandardCatalog {
    fn job_offer(&self, job_id: &str) -> Result<JobOffer, CatalogError> {
        self.offers
            .get(job_id)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownJob(job_id.to_string()))
    }
}

fn question(
    id: &str,
    prompt: &str,
    keywords: &[&str],
    weight: f64,
) -> ScreeningQuestion {
    ScreeningQuestion {
        question_id: QuestionId(id.to_string()),
        prompt: prompt.to_string(),
        expected_keywords: keywords.iter().map(|k| k.to_string()).collect(),
        weight,
    }
}

fn tech_innovators() -> CompanyInfo {
    CompanyInfo {
        company_id: "tech_innovators".to_string(),
        company_name: "Tech Innovators Inc.".to_string(),
        mission: "Transform businesses through cutting-edge AI and cloud solutions".to_string(),
        culture: "We foster innovation, collaboration, and continuous learning. Our culture \
                  emphasizes work-life balance and professional growth."
            .to_string(),
        benefits: vec![
            "Competitive salary and equity options".to_string(),
            "Flexible remote work policy".to_string(),
            "Health insurance (medical, dental, vision)".to_string(),
            "Annual learning budget of $3,000".to_string(),
            "Unlimited PTO policy".to_string(),
            "Parental leave: 16 weeks".to_string(),
            "Home office stipend".to_string(),
            "Annual company retreats".to_string(),
        ],
        size: "150-200 employees".to_string(),
        industry: "Technology / AI Solutions".to_string(),
        website: "https://techinnovators.example.com".to_string(),
    }
}

fn senior_python_dev() -> (JobOffer, Vec<ScreeningQuestion>) {
    let offer = JobOffer {
        job_id: "senior_python_dev".to_string(),
        title: "Senior Python Developer".to_string(),
        description: "We're looking for a Senior Python Developer to join our AI Platform team. \
                      You'll work on building scalable microservices and ML pipelines using \
                      modern Python frameworks."
            .to_string(),
        requirements: vec![
            "5+ years of Python development experience".to_string(),
            "Strong experience with FastAPI, Django, or Flask".to_string(),
            "Experience with cloud platforms (GCP, AWS, or Azure)".to_string(),
            "Proficiency in containerization (Docker, Kubernetes)".to_string(),
            "Strong understanding of microservices architecture".to_string(),
            "Experience with SQL and NoSQL databases".to_string(),
            "Excellent problem-solving skills".to_string(),
        ],
        nice_to_have: vec![
            "Machine Learning/AI experience".to_string(),
            "Experience with CI/CD pipelines".to_string(),
            "Contributions to open-source projects".to_string(),
            "Experience with event-driven architectures".to_string(),
        ],
        salary_range: "$120,000 - $160,000 USD + equity".to_string(),
        location: "Remote (US/Europe) or Hybrid in San Francisco".to_string(),
        remote_policy: "Remote-first with optional office access".to_string(),
        team_size: 8,
    };

    let questions = vec![
        question(
            "python_exp",
            "Could you tell me about your experience with Python? How many years have you \
             worked with it professionally?",
            &["5 years", "senior", "lead", "architect", "production", "scale"],
            0.3,
        ),
        question(
            "microservices",
            "Have you designed and built microservices architectures before? Can you describe \
             a project where you implemented this?",
            &["microservices", "docker", "kubernetes", "api", "distributed", "scalable"],
            0.25,
        ),
        question(
            "cloud_experience",
            "What's your experience with cloud platforms like GCP, AWS, or Azure? Which \
             services have you worked with?",
            &["gcp", "aws", "azure", "cloud run", "lambda", "kubernetes", "deployment"],
            0.25,
        ),
        question(
            "availability",
            "When would you be available to start if we move forward with an offer?",
            &["immediately", "2 weeks", "notice", "available", "month"],
            0.2,
        ),
    ];

    (offer, questions)
}

fn ml_engineer() -> (JobOffer, Vec<ScreeningQuestion>) {
    let offer = JobOffer {
        job_id: "ml_engineer".to_string(),
        title: "Machine Learning Engineer".to_string(),
        description: "Join our ML team to build and deploy production ML models that power our \
                      AI products."
            .to_string(),
        requirements: vec![
            "3+ years of ML engineering experience".to_string(),
            "Strong Python and ML frameworks (PyTorch, TensorFlow)".to_string(),
            "Experience deploying ML models to production".to_string(),
            "Understanding of MLOps practices".to_string(),
            "Experience with cloud ML platforms".to_string(),
        ],
        nice_to_have: vec![
            "Experience with LLMs and NLP".to_string(),
            "Research publications".to_string(),
            "Experience with A/B testing".to_string(),
        ],
        salary_range: "$130,000 - $180,000 USD + equity".to_string(),
        location: "Remote (Global)".to_string(),
        remote_policy: "Fully remote".to_string(),
        team_size: 6,
    };

    let questions = vec![
        question(
            "ml_experience",
            "Tell me about your ML engineering experience. What types of models have you \
             deployed to production?",
            &["production", "deploy", "mlops", "model", "pytorch", "tensorflow"],
            0.35,
        ),
        question(
            "frameworks",
            "Which ML frameworks are you most comfortable with and why?",
            &["pytorch", "tensorflow", "scikit", "keras", "transformers"],
            0.3,
        ),
        question(
            "availability",
            "When would you be available to start?",
            &["immediately", "2 weeks", "notice", "available"],
            0.35,
        ),
    ];

    (offer, questions)
}
