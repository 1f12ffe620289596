use anyhow::Result;
use chrono::Local;
use clap::Parser;
use dotenvy::dotenv;
use log::{error, info};

use debaters::core::{Config, RunConfig};
use debaters::features::debate::{
    Agent, Message, OpenAiGenerator, PromptTemplate, ResponseAction, RoundScheduler, TurnRecord,
};
use debaters::features::participants::ParticipantRoster;

/// Run a turn-taking debate between two AI participants
#[derive(Parser, Debug)]
#[command(name = "debate")]
#[command(version, about, long_about = None)]
struct Cli {
    /// The topic of the debate
    idea: String,

    /// Budget (USD) invested in generation for this debate
    #[arg(long, default_value_t = 3.0)]
    investment: f64,

    /// Number of rounds; each participant speaks once per round
    #[arg(long, default_value_t = 10)]
    n_round: u32,

    /// Participants JSON file (overrides PARTICIPANTS_PATH)
    #[arg(long)]
    participants: Option<String>,

    /// Prompt template YAML file (overrides PROMPT_TEMPLATE_PATH)
    #[arg(long)]
    prompt_template: Option<String>,

    /// Chat model
    #[arg(long, env = "OPENAI_MODEL")]
    model: Option<String>,
}

fn print_message(msg: &Message) {
    let stamp = msg.timestamp().with_timezone(&Local).format("%Y-%m-%d %H:%M:%S");
    println!("-------------------");
    println!("[{stamp}] {}: {}", msg.sender(), msg.content());
}

fn print_turn(msg: &Message, turn: &TurnRecord) {
    print_message(msg);
    println!(
        "{} spoke for {:.2} seconds",
        turn.speaker,
        turn.elapsed.as_secs_f64()
    );
}

fn load_template(path: &str, explicit: bool) -> Result<PromptTemplate> {
    if explicit || std::path::Path::new(path).exists() {
        return Ok(PromptTemplate::load(path)?);
    }
    info!("No prompt template at {path}, using the built-in template");
    Ok(PromptTemplate::builtin()?)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    // The openai crate reads credentials from the environment
    let api_key = config.require_api_key()?.to_string();
    std::env::set_var("OPENAI_API_KEY", &api_key);
    std::env::set_var("OPENAI_KEY", &api_key);

    let run_config = RunConfig::new(cli.idea, cli.n_round, cli.investment)?;

    let participants_path = cli
        .participants
        .unwrap_or_else(|| config.participants_path.clone());
    let roster = ParticipantRoster::load(&participants_path)?;

    let template = match cli.prompt_template {
        Some(path) => load_template(&path, true)?,
        None => load_template(&config.prompt_template_path, false)?,
    };

    let model = cli.model.unwrap_or_else(|| config.openai_model.clone());
    info!("Using model {model}");

    let action = ResponseAction::new(template);
    let mut first = Agent::new(roster.debator1, action.clone());
    let mut second = Agent::new(roster.debator2, action);

    let mut scheduler = RoundScheduler::new(run_config, OpenAiGenerator::new(model));

    print_message(&Message::seed(scheduler.config().topic.clone(), first.name()));

    match scheduler.run_with(&mut first, &mut second, print_turn).await {
        Ok(transcript) => {
            println!("-------------------");
            println!(
                "{} spoke for {:.2}s, {} spoke for {:.2}s, total cost ${:.4}",
                first.name(),
                transcript.speaking_time(first.name()).as_secs_f64(),
                second.name(),
                transcript.speaking_time(second.name()).as_secs_f64(),
                transcript.total_cost()
            );
            Ok(())
        }
        Err(aborted) => {
            error!("{aborted}");
            Err(aborted.error.into())
        }
    }
}
