use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;

use parent_forum::{ForumConfig, ForumController, Screen, UnlockOutcome};

fn main() -> Result<()> {
    // Load environment variables from a .env file, if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut forum = ForumController::with_defaults(ForumConfig::from_env());

    println!("Curious Kids Parent Forum (demo). Threads live only in this process.");
    println!("Type 'help' for commands.");

    let mut rl = DefaultEditor::new()?;
    loop {
        let prompt = match forum.screen() {
            Screen::Browsing => format!("{}> ", forum.selected_category().id),
            Screen::AdminPanel => "admin> ".to_string(),
        };
        match rl.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;
                if !dispatch(&mut forum, line)? {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

/// Maps one input line onto the controller surface. Returns `false` when
/// the session should end.
fn dispatch(forum: &mut ForumController, line: &str) -> Result<bool> {
    let (command, rest) = match line.split_once(' ') {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };

    match command {
        "help" => print_help(),
        "rooms" => print_rooms(forum),
        "enter" => {
            forum.select_category(rest);
            print_message(forum);
            let category = forum.selected_category();
            println!("-- {} -- {}", category.name, category.description);
        }
        "threads" => print_threads(forum),
        "post" => {
            match rest.split_once("::") {
                Some((title, body)) => {
                    let _ = forum.create_thread(title.trim(), body.trim());
                }
                None => {
                    // Missing separator reads as an empty body.
                    let _ = forum.create_thread(rest, "");
                }
            }
            print_message(forum);
        }
        "upgrade" => {
            forum.upgrade_to_premium();
            print_message(forum);
        }
        "name" => {
            forum.change_display_name(rest);
            println!("You are posting as '{}'.", forum.session().display_name);
        }
        "logo" => {
            forum.tap_admin_logo();
            if forum.awaiting_admin_code() {
                println!("Enter admin code with: code <secret>");
            }
        }
        "code" => {
            match forum.submit_admin_code(rest) {
                UnlockOutcome::Ignored => {}
                UnlockOutcome::Granted | UnlockOutcome::Denied => print_message(forum),
            }
        }
        "panel" => match forum.enter_admin_panel() {
            Ok(()) => println!("Admin panel. {} thread(s) stored.", forum.thread_count()),
            Err(e) => println!("{e}"),
        },
        "back" => forum.return_to_forum(),
        "clear" => {
            let _ = forum.admin_clear_threads();
            print_message(forum);
        }
        "json" => {
            let threads = forum.visible_threads();
            println!("{}", serde_json::to_string_pretty(&threads)?);
        }
        "whoami" => {
            let session = forum.session();
            let badge = if session.is_premium {
                "Premium Parent"
            } else {
                "Free Parent"
            };
            let admin = if session.is_admin { " [Admin]" } else { "" };
            println!("{} ({badge}){admin}", session.display_name);
        }
        "quit" | "exit" => return Ok(false),
        _ => println!("Unknown command '{command}'. Type 'help' for commands."),
    }
    Ok(true)
}

fn print_message(forum: &ForumController) {
    if let Some(message) = forum.message() {
        println!("{message}");
    }
}

fn print_rooms(forum: &ForumController) {
    for category in forum.categories() {
        let tag = if forum.premium_locked(category) {
            "Premium Only (locked)"
        } else if category.tier.is_premium() {
            "Premium Only"
        } else {
            "Free"
        };
        println!("  {:<20} [{tag}] {}", category.id, category.name);
    }
}

fn print_threads(forum: &ForumController) {
    let threads = forum.visible_threads();
    if threads.is_empty() {
        println!("No topics here yet. Be the first to start a conversation.");
        return;
    }
    for thread in threads {
        let pill = if thread.is_premium_only {
            " [Premium Room]"
        } else {
            ""
        };
        println!("* {}{pill}", thread.title);
        println!("  by {} at {}", thread.author, thread.created_at.to_rfc3339());
        println!("  {}", thread.body);
    }
}

fn print_help() {
    println!("  rooms                 list all rooms");
    println!("  enter <room-id>       switch room");
    println!("  threads               show topics in the current room");
    println!("  post <title> :: <body>   start a new topic");
    println!("  upgrade               become a Premium Parent (simulation)");
    println!("  name <display name>   change how you appear");
    println!("  logo                  tap the logo");
    println!("  code <secret>         submit an admin code");
    println!("  panel                 open the admin panel (admins only)");
    println!("  clear                 clear all threads (admins only)");
    println!("  back                  leave the admin panel");
    println!("  json                  dump the current room's topics as JSON");
    println!("  whoami                show your session");
    println!("  quit                  leave the forum");
}
