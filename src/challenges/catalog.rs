use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

use super::domain::{
    Challenge, ChallengeAttempt, ChallengeDifficulty, ChallengeId, ChallengeProgress,
    ChallengeType,
};

/// Errors raised while loading a challenge catalog from disk or JSON.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read challenge catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("challenge catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("challenge id {0} appears more than once")]
    DuplicateId(ChallengeId),
    #[error("challenge at position {0} has a blank id")]
    BlankId(usize),
}

/// Immutable, read-only set of challenges shared by grading and listing.
#[derive(Debug, Clone)]
pub struct ChallengeCatalog {
    challenges: Vec<Challenge>,
}

impl ChallengeCatalog {
    pub fn new(challenges: Vec<Challenge>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (position, challenge) in challenges.iter().enumerate() {
            if challenge.id.as_str().trim().is_empty() {
                return Err(CatalogError::BlankId(position));
            }
            if !seen.insert(&challenge.id) {
                return Err(CatalogError::DuplicateId(challenge.id.clone()));
            }
        }
        Ok(Self { challenges })
    }

    pub fn standard() -> Self {
        Self {
            challenges: standard_challenges(),
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let challenges: Vec<Challenge> = serde_json::from_str(raw)?;
        Self::new(challenges)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn get(&self, id: &ChallengeId) -> Option<&Challenge> {
        self.challenges.iter().find(|challenge| &challenge.id == id)
    }

    pub fn by_difficulty(&self, difficulty: ChallengeDifficulty) -> Vec<&Challenge> {
        self.challenges
            .iter()
            .filter(|challenge| challenge.difficulty == difficulty)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Challenge> {
        self.challenges.iter()
    }

    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }

    /// Points for every challenge with at least one passed attempt, each counted once.
    ///
    /// Attempts referring to challenges outside this catalog are ignored.
    pub fn earned_points(&self, attempts: &[ChallengeAttempt]) -> u32 {
        self.completed_ids(attempts)
            .iter()
            .filter_map(|id| self.get(id))
            .map(|challenge| challenge.points)
            .sum()
    }

    pub fn progress(&self, attempts: &[ChallengeAttempt]) -> ChallengeProgress {
        let completed_challenges = self
            .completed_ids(attempts)
            .iter()
            .filter(|id| self.get(id).is_some())
            .count();

        ChallengeProgress {
            total_challenges: self.len(),
            completed_challenges,
            total_points: self.challenges.iter().map(|challenge| challenge.points).sum(),
            earned_points: self.earned_points(attempts),
        }
    }

    fn completed_ids<'a>(&self, attempts: &'a [ChallengeAttempt]) -> BTreeSet<&'a ChallengeId> {
        attempts
            .iter()
            .filter(|attempt| attempt.passed)
            .map(|attempt| &attempt.challenge_id)
            .collect()
    }
}

struct ChallengeTemplate {
    id: &'static str,
    title: &'static str,
    difficulty: ChallengeDifficulty,
    kind: ChallengeType,
    description: &'static str,
    scenario: &'static str,
    broken_prompt: &'static str,
    target_output: &'static str,
    hints: [&'static str; 3],
    success_criteria: [&'static str; 3],
    points: u32,
}

impl ChallengeTemplate {
    fn build(self) -> Challenge {
        Challenge {
            id: ChallengeId::from(self.id),
            title: self.title.to_string(),
            difficulty: self.difficulty,
            kind: self.kind,
            description: self.description.to_string(),
            scenario: self.scenario.to_string(),
            broken_prompt: Some(self.broken_prompt.to_string()),
            target_output: self.target_output.to_string(),
            hints: self.hints.iter().map(|hint| hint.to_string()).collect(),
            success_criteria: self
                .success_criteria
                .iter()
                .map(|criterion| criterion.to_string())
                .collect(),
            points: self.points,
        }
    }
}

fn standard_challenges() -> Vec<Challenge> {
    use ChallengeDifficulty::{Advanced, Beginner, Intermediate};

    vec![
        ChallengeTemplate {
            id: "beginner-1",
            title: "Fix the Vague Prompt",
            difficulty: Beginner,
            kind: ChallengeType::FixPrompt,
            description: "A user wrote a vague prompt. Make it specific and clear.",
            scenario: "The AI keeps giving generic responses because the prompt is too vague.",
            broken_prompt: "Tell me about AI",
            target_output: "A focused, detailed explanation about a specific AI topic",
            hints: [
                "What specific aspect of AI are you interested in?",
                "Add context about the audience or use case",
                "Specify the desired format or length",
            ],
            success_criteria: [
                "Prompt specifies a particular AI topic",
                "Includes context or audience",
                "Has clear output requirements",
            ],
            points: 10,
        },
        ChallengeTemplate {
            id: "beginner-2",
            title: "Add Output Constraints",
            difficulty: Beginner,
            kind: ChallengeType::AddConstraints,
            description: "The AI gives answers that are too long. Add constraints.",
            scenario: "You need a concise answer, but the AI keeps writing essays.",
            broken_prompt: "Explain machine learning",
            target_output: "A brief, constrained explanation",
            hints: [
                "Specify the maximum length (words, sentences, or paragraphs)",
                "Define the format (bullet points, single paragraph, etc.)",
                "Add audience level constraints",
            ],
            success_criteria: [
                "Includes length constraint",
                "Specifies output format",
                "Defines target audience",
            ],
            points: 10,
        },
        ChallengeTemplate {
            id: "beginner-3",
            title: "Request Examples",
            difficulty: Beginner,
            kind: ChallengeType::ImproveClarity,
            description: "Make the AI provide concrete examples.",
            scenario: "User wants examples but the prompt doesn't ask for them.",
            broken_prompt: "What are good coding practices?",
            target_output: "Coding practices with specific examples",
            hints: [
                "Explicitly ask for examples",
                "Specify how many examples you want",
                "Request code snippets or real-world cases",
            ],
            success_criteria: [
                "Explicitly requests examples",
                "Specifies number of examples",
                "Mentions format for examples",
            ],
            points: 10,
        },
        ChallengeTemplate {
            id: "beginner-4",
            title: "Use Few-Shot Examples",
            difficulty: Beginner,
            kind: ChallengeType::ImproveClarity,
            description: "Show the AI what you want with examples.",
            scenario: "The AI isn't formatting output the way you want.",
            broken_prompt: "Convert these to markdown",
            target_output: "Prompt with example input-output pairs",
            hints: [
                "Provide 2-3 example conversions",
                "Show the exact format you want",
                "Use consistent pattern across examples",
            ],
            success_criteria: [
                "Includes 2+ examples",
                "Examples show input → output",
                "Pattern is clear and consistent",
            ],
            points: 10,
        },
        ChallengeTemplate {
            id: "intermediate-1",
            title: "Enforce JSON Output",
            difficulty: Intermediate,
            kind: ChallengeType::EnforceJson,
            description: "Make the AI return valid JSON with a specific schema.",
            scenario: "You need structured data but keep getting plain text.",
            broken_prompt: "List popular programming languages",
            target_output: "Valid JSON array with structured language data",
            hints: [
                "Explicitly request JSON format",
                "Define the exact schema/structure",
                "Specify required fields",
            ],
            success_criteria: [
                "Requests JSON format explicitly",
                "Defines schema with field names",
                "Specifies data types",
            ],
            points: 20,
        },
        ChallengeTemplate {
            id: "intermediate-2",
            title: "Reduce Hallucination",
            difficulty: Intermediate,
            kind: ChallengeType::ReduceHallucination,
            description: "Prevent the AI from making up facts.",
            scenario: "The AI is confidently stating incorrect facts.",
            broken_prompt: "Tell me about the history of quantum computing",
            target_output: "Accurate, fact-based response with caveats",
            hints: [
                "Ask the AI to cite sources or admit uncertainty",
                "Request only well-documented facts",
                "Add instructions about what to do when unsure",
            ],
            success_criteria: [
                "Instructs to admit uncertainty",
                "Requests source citations or verification",
                "Emphasizes accuracy over completeness",
            ],
            points: 20,
        },
        ChallengeTemplate {
            id: "intermediate-3",
            title: "Extract Structured Data",
            difficulty: Intermediate,
            kind: ChallengeType::ExtractData,
            description: "Extract specific information from unstructured text.",
            scenario: "You have text and need to extract key details in a structured way.",
            broken_prompt: "Read this text and tell me about it",
            target_output: "Extracted data in a specific format",
            hints: [
                "Specify exactly what data to extract",
                "Define the output structure",
                "Provide an example of the desired output",
            ],
            success_criteria: [
                "Lists specific data fields to extract",
                "Defines output format",
                "Includes example output",
            ],
            points: 20,
        },
        ChallengeTemplate {
            id: "intermediate-4",
            title: "Memory Management",
            difficulty: Intermediate,
            kind: ChallengeType::ImproveClarity,
            description: "Manage conversation context efficiently.",
            scenario: "Long conversations are getting expensive and losing context.",
            broken_prompt: "Remember everything I said and help me",
            target_output: "Efficient context management strategy",
            hints: [
                "Specify what to remember vs forget",
                "Define key facts to track",
                "Add instructions for context summarization",
            ],
            success_criteria: [
                "Specifies what context to retain",
                "Includes summarization instructions",
                "Defines memory priorities",
            ],
            points: 20,
        },
        ChallengeTemplate {
            id: "advanced-1",
            title: "Chain of Thought",
            difficulty: Advanced,
            kind: ChallengeType::ImproveClarity,
            description: "Get the AI to show its reasoning step-by-step.",
            scenario: "You want to understand how the AI arrives at conclusions.",
            broken_prompt: "Solve this math problem: If a train leaves at 2pm going 60mph...",
            target_output: "Solution with explicit step-by-step reasoning",
            hints: [
                "Ask for step-by-step explanation",
                "Request the AI to show its work",
                "Define the format for the reasoning",
            ],
            success_criteria: [
                "Explicitly requests step-by-step reasoning",
                "Asks AI to show calculations/logic",
                "Specifies format for steps",
            ],
            points: 30,
        },
        ChallengeTemplate {
            id: "advanced-2",
            title: "Multi-Step Task",
            difficulty: Advanced,
            kind: ChallengeType::ImproveClarity,
            description: "Create a prompt that guides the AI through multiple steps.",
            scenario: "Complex task requiring multiple steps in sequence.",
            broken_prompt: "Help me write and test some code",
            target_output: "Clear multi-step guidance with order and dependencies",
            hints: [
                "Break down into numbered steps",
                "Specify order and dependencies",
                "Define input/output for each step",
            ],
            success_criteria: [
                "Lists steps in numbered order",
                "Specifies what each step does",
                "Defines expected output for each",
            ],
            points: 30,
        },
        ChallengeTemplate {
            id: "advanced-3",
            title: "Role with Constraints",
            difficulty: Advanced,
            kind: ChallengeType::AddConstraints,
            description: "Assign the AI a specific role with detailed constraints.",
            scenario: "You need expert-level responses with specific boundaries.",
            broken_prompt: "Act as a expert and help me",
            target_output: "Well-defined role with expertise boundaries and rules",
            hints: [
                "Define the expert role clearly",
                "Specify what the expert should/shouldn't do",
                "Add personality or communication style guidelines",
            ],
            success_criteria: [
                "Clearly defines expert role",
                "Lists specific do's and don'ts",
                "Includes communication style",
            ],
            points: 30,
        },
        ChallengeTemplate {
            id: "advanced-4",
            title: "Prevent Prompt Injection",
            difficulty: Advanced,
            kind: ChallengeType::AddConstraints,
            description: "Protect your prompt from malicious user inputs.",
            scenario: "Users might try to override your system instructions.",
            broken_prompt: "You are a customer service bot. User says: {user_input}",
            target_output: "Secure prompt with injection protection",
            hints: [
                "Add delimiters around user input",
                "Warn AI about ignoring override attempts",
                "Define what should happen if injection detected",
            ],
            success_criteria: [
                "Uses clear delimiters for user input",
                "Includes security warnings",
                "Specifies response to injection attempts",
            ],
            points: 30,
        },
        ChallengeTemplate {
            id: "advanced-5",
            title: "Optimize for Cost",
            difficulty: Advanced,
            kind: ChallengeType::AddConstraints,
            description: "Reduce token usage while maintaining quality.",
            scenario: "You need to minimize API costs without losing output quality.",
            broken_prompt:
                "Explain everything about cloud computing in detail with lots of examples",
            target_output: "Cost-optimized prompt with concise requirements",
            hints: [
                "Set strict length limits",
                "Request concise format (bullets, tables)",
                "Be specific about what you actually need",
            ],
            success_criteria: [
                "Includes token/length constraints",
                "Specifies concise format",
                "Focuses on essentials only",
            ],
            points: 30,
        },
    ]
    .into_iter()
    .map(ChallengeTemplate::build)
    .collect()
}
