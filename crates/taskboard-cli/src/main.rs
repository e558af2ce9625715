mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use taskboard_core::AppConfig;
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TASKBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.effective_log_level()));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

fn run(cli: Cli, config: AppConfig) -> anyhow::Result<()> {
    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "taskboard", &mut std::io::stdout());
        return Ok(());
    }

    let today = cli
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let tasks_file = cli.tasks.or(config.tasks_file);
    let mut ctx = CliContext::load(tasks_file.as_deref(), today)?;

    if let Some(email) = cli.email.as_deref() {
        ctx.login(email, cli.password.as_deref().unwrap_or_default())?;
    }

    match cli.command {
        Commands::Board(args) => handlers::board::handle(&ctx, args)?,
        Commands::Show { task } => handlers::board::handle_show(&ctx, task)?,
        Commands::Move { task, from, to } => {
            handlers::task::handle_move(&mut ctx, task, from, to)?
        }
        Commands::Drag(args) => handlers::drag::handle(&mut ctx, args)?,
        Commands::Replay { file } => handlers::drag::handle_replay(&mut ctx, &file)?,
        Commands::Add(args) => handlers::task::handle_add(&mut ctx, args)?,
        Commands::Edit(args) => handlers::task::handle_edit(&mut ctx, args)?,
        Commands::Remove { task } => handlers::task::handle_remove(&mut ctx, task)?,
        Commands::Comment { task, text } => handlers::task::handle_comment(&mut ctx, task, &text)?,
        Commands::Progress => handlers::board::handle_progress(&ctx)?,
        Commands::Team { search } => handlers::team::handle(&ctx, search)?,
        Commands::Whoami => handlers::team::handle_whoami(&ctx)?,
        Commands::Completions { .. } => {}
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load();
    init_tracing(&config)?;

    let cli = Cli::parse();
    if let Err(e) = run(cli, config) {
        output::output_error(&e.to_string());
    }
    Ok(())
}
