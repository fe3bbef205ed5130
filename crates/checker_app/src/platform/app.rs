use std::io::{self, BufRead};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::time::Duration;

use checker_client::ClientSettings;
use checker_core::{update, AppState, CheckerViewModel, DocumentSlot, LevelSeverity, Msg};
use checker_logging::checker_info;

use super::effects::EffectRunner;
use super::logging::{initialize, LogDestination};

pub fn run_app() {
    initialize(LogDestination::File);
    checker_info!("checker_app starting");

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(ClientSettings::default(), msg_tx.clone());
    let quit = Arc::new(AtomicBool::new(false));

    spawn_stdin_reader(msg_tx, quit.clone());

    print_usage();
    let mut state = AppState::new();
    render(&state.view());

    while !quit.load(Ordering::Relaxed) {
        match msg_rx.recv_timeout(Duration::from_millis(50)) {
            Ok(msg) => {
                let (next, effects) = update(std::mem::take(&mut state), msg);
                state = next;
                runner.run(effects);
                if state.consume_dirty() {
                    render(&state.view());
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    checker_info!("checker_app exiting");
}

fn spawn_stdin_reader(msg_tx: mpsc::Sender<Msg>, quit: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            match parse_command(&line) {
                Some(Command::Choose { slot, path }) => {
                    if let Some(msg) = read_document(slot, &path) {
                        if msg_tx.send(msg).is_err() {
                            break;
                        }
                    }
                }
                Some(Command::Check) => {
                    if msg_tx.send(Msg::CheckClicked).is_err() {
                        break;
                    }
                }
                Some(Command::Quit) => {
                    quit.store(true, Ordering::Relaxed);
                    break;
                }
                None => {
                    if !line.trim().is_empty() {
                        print_usage();
                    }
                }
            }
        }
        quit.store(true, Ordering::Relaxed);
    });
}

enum Command {
    Choose { slot: DocumentSlot, path: String },
    Check,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if let Some(path) = trimmed.strip_prefix("reference ") {
        return Some(Command::Choose {
            slot: DocumentSlot::Reference,
            path: path.trim().to_string(),
        });
    }
    if let Some(path) = trimmed.strip_prefix("test ") {
        return Some(Command::Choose {
            slot: DocumentSlot::Test,
            path: path.trim().to_string(),
        });
    }
    match trimmed {
        "check" => Some(Command::Check),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

fn read_document(slot: DocumentSlot, path: &str) -> Option<Msg> {
    let file_name = Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());
    match std::fs::read(path) {
        Ok(bytes) => Some(Msg::DocumentChosen {
            slot,
            file_name,
            bytes,
        }),
        Err(err) => {
            eprintln!("Could not read {path}: {err}");
            None
        }
    }
}

fn print_usage() {
    println!("Commands:");
    println!("  reference <path>   upload a reference document");
    println!("  test <path>        upload a test document");
    println!("  check              run the plagiarism check");
    println!("  quit               exit");
}

fn render(view: &CheckerViewModel) {
    println!();
    println!("Reference document : {}", name_or_hint(&view.reference_name));
    println!("Test document      : {}", name_or_hint(&view.test_name));
    if view.loading {
        println!("Checking...");
    }
    if view.missing_files_alert {
        println!("Please upload both files first.");
    }
    if let Some(result) = &view.result {
        println!(
            "Similarity         : {} ({} vs {})",
            result.similarity_display, result.test_file, result.reference_file
        );
        println!(
            "Level              : {} [{}]",
            result.level,
            severity_tag(result.severity)
        );
    }
}

fn name_or_hint(name: &Option<String>) -> &str {
    name.as_deref().unwrap_or("(not uploaded)")
}

fn severity_tag(severity: LevelSeverity) -> &'static str {
    match severity {
        LevelSeverity::Safe => "ok",
        LevelSeverity::Low => "low",
        LevelSeverity::Medium => "medium",
        LevelSeverity::High => "high",
        LevelSeverity::Critical => "critical",
        LevelSeverity::Neutral => "unclassified",
    }
}
