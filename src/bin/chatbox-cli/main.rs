//! Chatbox CLI client
//!
//! A terminal front end for the chatbox relay. Lines are sent as chat
//! messages; keystrokes drive the typing indicator. Uses rustyline for
//! readline-style editing and history.

mod client;
mod debounce;
mod presets;

// Shared with the relay so both sides enforce the same limits
#[path = "../../state/mod.rs"]
#[allow(dead_code)]
mod state;

use clap::Parser;
use client::RelayClient;
use debounce::TypingDebouncer;
use state::{Message, MessageError};
use rustyline::history::FileHistory;
use rustyline::{
    Cmd, ConditionalEventHandler, Editor, Event, EventContext, EventHandler, KeyCode, KeyEvent,
    Modifiers, RepeatCount,
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::timeout;

/// CLI arguments
#[derive(Debug, Parser)]
#[command(name = "chatbox-cli")]
#[command(about = "Chatbox relay CLI client")]
struct Args {
    /// Relay base URL
    #[arg(short, long, default_value = "http://127.0.0.1:3000")]
    server: String,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "5")]
    timeout: u64,

    /// Milliseconds without keystrokes before typing is cleared
    #[arg(long, default_value = "2000")]
    idle_ms: u64,

    /// Start with the notification sound off
    #[arg(long)]
    no_sound: bool,

    /// History file path
    #[arg(long)]
    history_file: Option<PathBuf>,

    /// Presets TOML file path
    #[arg(long)]
    presets: Option<PathBuf>,
}

/// CLI configuration
#[derive(Debug, Clone)]
struct Config {
    server: String,
    request_timeout_secs: u64,
    idle_after: Duration,
    play_sound: bool,
    history_file: PathBuf,
    presets_file: PathBuf,
}

impl Config {
    fn from_args(args: Args) -> Self {
        let home = dirs::home_dir();
        let history_file = args.history_file.unwrap_or_else(|| {
            home.as_ref()
                .map(|p| p.join(".chatbox_history"))
                .unwrap_or_else(|| PathBuf::from(".chatbox_history"))
        });
        let presets_file = args.presets.unwrap_or_else(|| {
            home.as_ref()
                .map(|p| p.join(".chatbox").join("presets.toml"))
                .unwrap_or_else(|| PathBuf::from("presets.toml"))
        });

        Self {
            server: args.server,
            request_timeout_secs: args.timeout,
            idle_after: Duration::from_millis(args.idle_ms),
            play_sound: !args.no_sound,
            history_file,
            presets_file,
        }
    }
}

/// A parsed input line
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Send(String),
    Show(String),
    History,
    CopyEntry(usize),
    CopyText(String),
    Paste,
    Presets,
    Preset(usize),
    Sound(bool),
    Help,
    Unknown(String),
}

/// `\n` in typed input becomes a real newline
fn unescape(input: &str) -> String {
    input.replace("\\n", "\n")
}

/// Commands are recognized on the trimmed line; plain messages keep their spacing
fn parse_command(line: &str) -> Command {
    let input = line.trim();
    let Some(rest) = input.strip_prefix('/') else {
        return Command::Send(unescape(line));
    };
    // "//text" sends "/text"
    if rest.starts_with('/') {
        return Command::Send(unescape(rest));
    }

    let (name, arg) = match rest.split_once(' ') {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match (name, arg) {
        ("history", "") => Command::History,
        ("paste", "") => Command::Paste,
        ("presets", "") => Command::Presets,
        ("help", "") => Command::Help,
        ("sound", "on") => Command::Sound(true),
        ("sound", "off") => Command::Sound(false),
        ("show", text) if !text.is_empty() => Command::Show(unescape(text)),
        ("p", n) => match n.parse::<usize>() {
            Ok(n) if n > 0 => Command::Preset(n),
            _ => Command::Unknown(input.to_string()),
        },
        ("copy", arg) if !arg.is_empty() => match arg.parse::<usize>() {
            Ok(n) if n > 0 => Command::CopyEntry(n),
            _ => Command::CopyText(unescape(arg)),
        },
        _ => Command::Unknown(input.to_string()),
    }
}

/// Run the relay's own validation before sending
fn check_message(text: &str, check_lines: bool) -> Result<(), MessageError> {
    if check_lines {
        Message::new(text)?;
    } else {
        Message::display_only(text)?;
    }
    Ok(())
}

fn print_help() {
    println!("  <text>          send a message (\\n for a line break)");
    println!("  /show <text>    put text in the chatbox without sending");
    println!("  /history        list recent messages, newest first");
    println!("  /copy <n|text>  copy history entry n, or text, to the shared clipboard");
    println!("  /paste          load the shared clipboard into the prompt");
    println!("  /presets        list presets");
    println!("  /p <n>          load preset n into the prompt");
    println!("  /sound on|off   toggle the notification sound");
}

/// Feeds content-changing keystrokes to the debouncer
struct TypingKeyHandler {
    debouncer: TypingDebouncer,
}

impl ConditionalEventHandler for TypingKeyHandler {
    fn handle(&self, evt: &Event, _: RepeatCount, _: bool, _: &EventContext) -> Option<Cmd> {
        if let Some(KeyEvent(code, mods)) = evt.get(0) {
            let plain = *mods == Modifiers::NONE || *mods == Modifiers::SHIFT;
            let edits = matches!(code, KeyCode::Char(_) | KeyCode::Backspace | KeyCode::Delete);
            if plain && edits {
                self.debouncer.edit();
            }
        }
        // Fall through to the default binding
        None
    }
}

fn main() -> io::Result<()> {
    // Parse arguments
    let args = Args::parse();
    let config = Config::from_args(args);

    // Build runtime for async network operations
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async { run_client(config).await })
}

async fn run_client(mut config: Config) -> io::Result<()> {
    let client = RelayClient::new(
        &config.server,
        Duration::from_secs(config.request_timeout_secs),
    )
    .map_err(io::Error::other)?;

    let presets = presets::load_presets(&config.presets_file).unwrap_or_else(|e| {
        eprintln!("[warning] {}, using defaults", e);
        presets::default_presets()
    });

    let (debouncer, debounce_task) = TypingDebouncer::spawn(client.clone(), config.idle_after);

    // Initialize rustyline with history
    let mut rl: Editor<(), FileHistory> = Editor::new().map_err(io::Error::other)?;
    rl.bind_sequence(
        Event::Any,
        EventHandler::Conditional(Box::new(TypingKeyHandler {
            debouncer: debouncer.clone(),
        })),
    );

    if config.history_file.exists()
        && let Err(e) = rl.load_history(&config.history_file)
    {
        eprintln!("[warning] Failed to load history: {}", e);
    }

    println!("chatbox-cli v{}", env!("CARGO_PKG_VERSION"));
    println!("Relay: {}", client.base_url());
    println!("Type a message and press Enter. /help for commands, Ctrl+D to quit.");
    println!();

    // Text loaded by /paste or /p, offered as the next prompt's initial input
    let mut prefill = String::new();

    loop {
        let readline = rl.readline_with_initial("> ", (prefill.as_str(), ""));
        prefill.clear();

        match readline {
            Ok(line) => {
                // Enter ends the composition whatever the line holds
                debouncer.submit();

                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());

                match parse_command(&line) {
                    Command::Send(text) => {
                        if let Err(reason) = check_message(&text, true) {
                            println!("[error] {}", reason);
                            prefill = text.replace('\n', "\\n");
                            continue;
                        }
                        if let Err(e) = client.send(&text, config.play_sound).await {
                            println!("[error] {}", e);
                        }
                    }
                    Command::Show(text) => {
                        if let Err(reason) = check_message(&text, false) {
                            println!("[error] {}", reason);
                            continue;
                        }
                        if let Err(e) = client.send_copy(&text).await {
                            println!("[error] {}", e);
                        }
                    }
                    Command::History => match client.history().await {
                        Ok(history) if history.is_empty() => println!("(no messages yet)"),
                        Ok(history) => {
                            for (i, msg) in history.iter().rev().enumerate() {
                                println!("{:>2}. {}", i + 1, msg.replace('\n', "\\n"));
                            }
                        }
                        Err(e) => println!("[error] {}", e),
                    },
                    Command::CopyEntry(n) => {
                        let entry = match client.history().await {
                            Ok(history) => history.into_iter().rev().nth(n - 1),
                            Err(e) => {
                                println!("[error] {}", e);
                                continue;
                            }
                        };
                        match entry {
                            Some(msg) => match client.copy(&msg).await {
                                Ok(()) => println!("[copied] {}", msg.replace('\n', "\\n")),
                                Err(e) => println!("[error] {}", e),
                            },
                            None => println!("[error] No history entry {}", n),
                        }
                    }
                    Command::CopyText(text) => match client.copy(&text).await {
                        Ok(()) => println!("[copied]"),
                        Err(e) => println!("[error] {}", e),
                    },
                    Command::Paste => match client.paste().await {
                        Ok(text) => prefill = text.replace('\n', "\\n"),
                        Err(e) => println!("[error] {}", e),
                    },
                    Command::Presets => {
                        for (i, preset) in presets.iter().enumerate() {
                            println!("{:>2}. {}", i + 1, preset);
                        }
                    }
                    Command::Preset(n) => match presets.get(n - 1) {
                        Some(preset) => prefill = preset.clone(),
                        None => println!("[error] No preset {}", n),
                    },
                    Command::Sound(on) => {
                        config.play_sound = on;
                        println!("Notification sound {}", if on { "on" } else { "off" });
                    }
                    Command::Help => print_help(),
                    Command::Unknown(cmd) => {
                        println!("[error] Unknown command: {}", cmd);
                        print_help();
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                // Ctrl+C - cancel current input, continue
                println!("^C");
                debouncer.submit();
                continue;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                // Ctrl+D - exit
                break;
            }
            Err(e) => {
                eprintln!("[error] Readline error: {}", e);
                break;
            }
        }
    }

    // Save history
    if let Err(e) = rl.save_history(&config.history_file) {
        eprintln!("[warning] Failed to save history: {}", e);
    }

    // Closing every handle lets the debouncer clear the indicator and exit
    drop(rl);
    drop(debouncer);
    let _ = timeout(Duration::from_secs(2), debounce_task).await;

    println!("\nGoodbye!");
    Ok(())
}
