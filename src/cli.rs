use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use prompt_coach::challenges::{
    AttemptRequest, Challenge, ChallengeAttempt, ChallengeDifficulty, ChallengeService,
    ChallengeSummary,
};
use prompt_coach::config::AppConfig;
use prompt_coach::error::AppError;
use prompt_coach::evaluation::{EvaluationResult, PromptEvaluator};
use prompt_coach::telemetry;
use tracing::debug;

use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "Prompt Coach",
    about = "Score prompts and grade prompt-engineering challenges",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a prompt on clarity, specificity and structure
    Evaluate(EvaluateArgs),
    /// Browse the challenge catalog and grade rewrites
    Challenges {
        #[command(subcommand)]
        command: ChallengeCommand,
    },
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
struct PromptSource {
    /// Prompt text (read from stdin when neither this nor --file is given)
    #[arg(conflicts_with = "file")]
    prompt: Option<String>,
    /// Read the prompt from a file
    #[arg(long)]
    file: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    #[command(flatten)]
    source: PromptSource,
    /// Print the evaluation as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum ChallengeCommand {
    /// List challenges, optionally filtered by difficulty
    List {
        /// beginner, intermediate or advanced
        #[arg(long, value_parser = parse_difficulty)]
        difficulty: Option<ChallengeDifficulty>,
    },
    /// Grade a rewrite against one challenge
    Attempt(AttemptArgs),
}

#[derive(Args, Debug)]
struct AttemptArgs {
    /// Challenge identifier, e.g. beginner-1
    #[arg(long)]
    id: String,
    #[command(flatten)]
    source: PromptSource,
    /// Print the graded attempt as JSON
    #[arg(long)]
    json: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Serve(args) => server::run(config, args).await,
        Command::Evaluate(args) => run_evaluate(&config, args),
        Command::Challenges {
            command: ChallengeCommand::List { difficulty },
        } => run_list(&config, difficulty),
        Command::Challenges {
            command: ChallengeCommand::Attempt(args),
        } => run_attempt(&config, args),
    }
}

fn parse_difficulty(raw: &str) -> Result<ChallengeDifficulty, String> {
    ChallengeDifficulty::parse(raw).ok_or_else(|| {
        format!("unknown difficulty '{raw}' (expected beginner, intermediate or advanced)")
    })
}

fn read_prompt(source: PromptSource) -> Result<String, AppError> {
    match (source.prompt, source.file) {
        (_, Some(path)) => Ok(std::fs::read_to_string(path)?),
        (Some(prompt), None) => Ok(prompt),
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn challenge_service(config: &AppConfig) -> Result<ChallengeService, AppError> {
    let catalog = config.prompts.catalog()?;
    Ok(ChallengeService::new(
        Arc::new(catalog),
        config.prompts.limits(),
    ))
}

fn run_evaluate(config: &AppConfig, args: EvaluateArgs) -> Result<(), AppError> {
    let prompt = read_prompt(args.source)?;
    let prompt = config.prompts.limits().validate(&prompt)?;

    let result = PromptEvaluator::new().evaluate(prompt);
    debug!(overall = result.overall_score, "evaluated prompt");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render_evaluation(&result));
    }
    Ok(())
}

fn run_list(config: &AppConfig, difficulty: Option<ChallengeDifficulty>) -> Result<(), AppError> {
    let service = challenge_service(config)?;
    println!("{}", render_challenge_list(&service.list(difficulty)));
    Ok(())
}

fn run_attempt(config: &AppConfig, args: AttemptArgs) -> Result<(), AppError> {
    let service = challenge_service(config)?;
    let user_prompt = read_prompt(args.source)?;
    let attempt = service.attempt(AttemptRequest {
        challenge_id: args.id,
        user_prompt,
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&attempt)?);
    } else {
        let challenge = service.get(&attempt.challenge_id)?;
        println!("{}", render_attempt(challenge, &attempt));
    }
    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn render_evaluation(result: &EvaluationResult) -> String {
    let mut lines = vec![
        "Prompt evaluation".to_string(),
        format!("Overall score: {}/100", result.overall_score),
        String::new(),
        format!("- Clarity: {}", result.clarity),
        format!("- Specificity: {}", result.specificity),
        format!("- Structure: {}", result.structure),
        format!("- Examples: {}", yes_no(result.has_examples)),
        format!("- Constraints: {}", yes_no(result.has_constraints)),
    ];

    if result.suggestions.is_empty() {
        lines.push("\nSuggestions: none".to_string());
    } else {
        lines.push("\nSuggestions".to_string());
        lines.extend(
            result
                .suggestions
                .iter()
                .map(|suggestion| format!("- {suggestion}")),
        );
    }

    lines.join("\n")
}

fn render_challenge_list(challenges: &[ChallengeSummary]) -> String {
    if challenges.is_empty() {
        return "No challenges found".to_string();
    }

    let mut lines = Vec::new();
    for difficulty in ChallengeDifficulty::ordered() {
        let group: Vec<_> = challenges
            .iter()
            .filter(|challenge| challenge.difficulty == difficulty)
            .collect();
        if group.is_empty() {
            continue;
        }

        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(difficulty.label().to_string());
        for challenge in group {
            lines.push(format!(
                "- {} | {} | {} | {} pts",
                challenge.id,
                challenge.title,
                challenge.kind.label(),
                challenge.points
            ));
        }
    }

    lines.join("\n")
}

fn render_attempt(challenge: &Challenge, attempt: &ChallengeAttempt) -> String {
    let mut lines = vec![
        format!("{} ({})", challenge.title, challenge.id),
        format!(
            "Score: {}% ({})",
            attempt.score,
            if attempt.passed { "passed" } else { "not passed" }
        ),
        String::new(),
    ];
    lines.extend(attempt.feedback.iter().cloned());

    if !attempt.passed && !challenge.hints.is_empty() {
        lines.push("\nHints".to_string());
        lines.extend(challenge.hints.iter().map(|hint| format!("- {hint}")));
    }

    lines.join("\n")
}
