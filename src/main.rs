use std::io::{
    self,
    Write,
};

use suhwa::{
    FileBackend,
    PracticeSession,
    ProgressBackend,
    SuhwaError,
};
use tracing_subscriber::EnvFilter;

/// Terminal driver for the practice core. It plays the role of the web UI:
/// shows the current pair, takes the pass/fail judgment (normally produced by
/// the video inference service) from stdin, and prints the running summary.
fn main() -> Result<(), SuhwaError> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut session = PracticeSession::start(FileBackend::new());

    println!("suhwa: Korean Sign Language practice");
    println!("Commands: y (signed correctly), n (signed incorrectly),");
    println!("          next, prev, shuffle, reset, stats, quit");
    print_card(&session);

    let mut line = String::new();
    loop {
        prompt()?;
        line.clear();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        match line.trim() {
            "y" => {
                session.record_outcome(true);
                println!("Marked correct.");
                session.next();
                print_card(&session);
            }
            "n" => {
                session.record_outcome(false);
                println!("Marked incorrect, it will come back around.");
                session.next();
                print_card(&session);
            }
            "next" | "" => {
                session.next();
                print_card(&session);
            }
            "prev" => {
                session.previous();
                print_card(&session);
            }
            "shuffle" => {
                session.shuffle();
                println!("Reshuffled.");
                print_card(&session);
            }
            "reset" => {
                if confirm_reset()? {
                    session.reset();
                    println!("All progress cleared.");
                    print_card(&session);
                } else {
                    println!("Reset cancelled.");
                }
            }
            "stats" => print_stats(&session),
            "quit" | "q" => break,
            other => println!("Unknown command: {}", other),
        }
    }

    Ok(())
}

fn print_card<B: ProgressBackend>(session: &PracticeSession<B>) {
    let (position, total) = session.position();
    match session.current_entry() {
        Some(entry) => {
            println!();
            println!("[{} of {}] Sign this word: {} ({})", position, total, entry.english, entry.korean);
        }
        None => println!("No words to practice."),
    }
}

fn print_stats<B: ProgressBackend>(session: &PracticeSession<B>) {
    let summary = session.summary();
    println!(
        "Practiced {} of {} words, mastered {}.",
        summary.practiced, summary.total, summary.mastered
    );
}

fn confirm_reset() -> Result<bool, SuhwaError> {
    print!("Reset all progress? This cannot be undone. Type yes to confirm: ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}

fn prompt() -> Result<(), SuhwaError> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}
