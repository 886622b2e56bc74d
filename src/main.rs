//! # chatreplay CLI
//!
//! Command-line interface for the chatreplay library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatreplay::ChatError;
use chatreplay::chat::ChatParser;
use chatreplay::cli::Args;
use chatreplay::format::write_to_format;
use chatreplay::session::ChatSession;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(&args);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(exit_code(&e));
    }
}

/// Logs go to stderr so they never mix with `--names` output.
fn init_logging(args: &Args) {
    let filter = match args.log_directive() {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_code(error: &ChatError) -> i32 {
    match error {
        ChatError::NotFound { .. } => 2,
        ChatError::TamperedInput { .. } => 3,
        _ => 1,
    }
}

fn run(args: &Args) -> Result<(), ChatError> {
    let total_start = Instant::now();
    let parser = ChatParser::with_config(args.chat_config());

    if args.names {
        let chat = parser.load(&args.dir)?;
        for name in chat.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let output_path = args.output_path();

    println!("💬 chatreplay v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Archive: {}", args.dir.display());
    println!("💾 Output:  {}", output_path);
    println!("📄 Format:  {}", args.format);
    if let Some(ref me) = args.me {
        println!("👤 Viewer:  {}", me);
    }
    println!();

    println!("⏳ Parsing transcript...");
    let parse_start = Instant::now();
    let chat = parser.load(&args.dir)?;
    println!(
        "   Found {} messages ({:.2}s)",
        chat.len(),
        parse_start.elapsed().as_secs_f64()
    );

    let mut session = ChatSession::new(chat);
    println!("👥 Participants: {}", session.names().join(", "));
    if let Some(ref me) = args.me {
        session.select_user(me.clone())?;
    }

    let output_config = args.output_config();
    println!("💾 Writing {}...", args.format);
    let write_start = Instant::now();
    write_to_format(
        session.chat().messages(),
        &output_path,
        args.format,
        &output_config,
    )?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    let messages = session.chat().messages();
    let attachments = messages.iter().filter(|m| m.is_attachment()).count();
    let notices = messages.iter().filter(|m| m.is_info()).count();

    println!();
    println!("✅ Done! Output saved to {}", output_path);
    println!();
    println!("📊 Summary:");
    println!("   Messages:     {}", messages.len());
    println!("   Attachments:  {}", attachments);
    println!("   Notices:      {}", notices);
    println!("   Total time:   {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}
