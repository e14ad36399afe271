use guidance_engine::config::init_config;
use guidance_engine::services::scholarship_service::{days_remaining, StatusFilter};
use guidance_engine::utils::time;
use guidance_engine::AppState;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;

    let state = AppState::new();
    info!(
        scholarships = state.scholarship_service.list().len(),
        quests = state.quest_service.list().len(),
        career_paths = state.navigator_service.career_paths().len(),
        "catalogs seeded"
    );

    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt()?;
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "help" => print_help(),
            "scholarships" => print_scholarships(&state, rest),
            "chat" => {
                if let Some(handle) = state.chat_service.submit(rest) {
                    let reply = handle.await?;
                    println!("[{}] counselor:", time::format_clock(reply.created_at));
                    println!("{}\n", reply.content);
                }
            }
            "voice" => {
                if let Some(handle) = state.chat_service.toggle_voice_capture() {
                    println!("listening...");
                    handle.await?;
                    println!("captured: {}\n", state.chat_service.input_buffer());
                }
            }
            "transcript" => print_transcript(&state),
            "quests" => print_quests(&state),
            "quest" => print_quest(&state, rest),
            "paths" => print_career_paths(&state),
            "export" => println!(
                "{}",
                serde_json::to_string_pretty(state.scholarship_service.list())?
            ),
            "quit" | "exit" => break,
            other => println!("unknown command: {} (try `help`)", other),
        }
        prompt()?;
    }

    Ok(())
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}

fn print_help() {
    println!("commands:");
    println!("  scholarships [all|open|closing-soon|closed|applied] [search term]");
    println!("  chat <message>        ask the scripted counselor");
    println!("  voice                 toggle the simulated voice capture");
    println!("  transcript            show the full chat transcript");
    println!("  quests                list career quests");
    println!("  quest <id>            show one quest with its steps");
    println!("  paths                 list career-path quiz results");
    println!("  export                dump the scholarship catalog as JSON");
    println!("  quit");
}

fn print_scholarships(state: &AppState, args: &str) {
    let (filter, term) = match args.split_once(char::is_whitespace) {
        Some((first, rest)) => match StatusFilter::parse(first) {
            Some(filter) => (filter, rest.trim().to_string()),
            None => (StatusFilter::All, args.to_string()),
        },
        None => match StatusFilter::parse(args) {
            Some(filter) => (filter, String::new()),
            None => (StatusFilter::All, args.to_string()),
        },
    };

    let now = time::now();
    let results = state.scholarship_service.filter(filter, &term);
    for record in &results {
        let days = days_remaining(record.deadline, now);
        println!(
            "[{}] {} — {} ({})",
            record.status, record.name, record.provider, record.amount
        );
        println!(
            "      deadline {} ({} days), {} beneficiaries/year",
            time::format_deadline(record.deadline),
            days,
            record.beneficiaries
        );
        if let Some(progress) = record.application_progress {
            println!("      application progress: {}%", progress);
        }
    }
    println!("{} of {} scholarships\n", results.len(), state.scholarship_service.list().len());
}

fn print_transcript(state: &AppState) {
    for message in state.chat_service.transcript() {
        let who = if message.is_user() { "you" } else { "counselor" };
        println!("[{}] {}: {}", time::format_clock(message.created_at), who, message.content);
    }
    println!();
}

fn print_quests(state: &AppState) {
    for quest in state.quest_service.list() {
        let lock = if quest.is_unlocked { quest.badge.as_str() } else { "🔒" };
        println!(
            "{} {} ({:?}) — {}/{} steps, {}% complete, {}",
            lock,
            quest.title,
            quest.difficulty,
            quest.completed_steps,
            quest.total_steps,
            quest.progress,
            quest.estimated_duration
        );
    }
    println!();
}

fn print_quest(state: &AppState, id: &str) {
    match state.quest_service.get(id) {
        Some(quest) => {
            println!("{} {} — {}", quest.badge, quest.title, quest.description);
            for (index, step) in quest.steps.iter().enumerate() {
                let mark = if step.is_completed { "✓" } else { " " };
                println!(
                    "  [{}] {}. {} ({}, {})",
                    mark,
                    index + 1,
                    step.title,
                    step.reward,
                    step.estimated_time
                );
            }
            println!();
        }
        None => println!("no quest with id: {}\n", id),
    }
}

fn print_career_paths(state: &AppState) {
    for path in state.navigator_service.career_paths() {
        println!(
            "{} ({}) — {}% match, {} colleges, fees {}",
            path.title, path.field, path.match_score, path.colleges, path.average_fees
        );
        println!("      {}", path.job_prospects);
    }
    println!();
}
