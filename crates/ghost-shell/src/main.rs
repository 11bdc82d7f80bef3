//! Terminal shell for the GHOST client runtime.
//!
//! Boots the interface, then drops into a readline loop that drives the
//! session store through its operations: sign-in, guarded navigation, the
//! chat mock, the S.O.S. flow and the host window controls. The shell only
//! ever renders from store snapshots; every mutation goes through the
//! store.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing_subscriber::EnvFilter;

use ghost_application::auth::{AuthUseCase, SimulatedGoogleIdentity};
use ghost_application::boot::BootSequence;
use ghost_application::chat::{ChatSender, ChatService};
use ghost_application::panel::{AdminConsole, DashboardStats};
use ghost_application::settings::SettingsService;
use ghost_application::sos::SosUseCase;
use ghost_application::tutor;
use ghost_core::bridge::{ChannelBridge, DisconnectedBridge, HostBridge, HostCommand};
use ghost_core::config::AppConfig;
use ghost_core::route::{Route, RouteDecision, View, authorize};
use ghost_core::session::{Session, SessionStore};

#[derive(Parser)]
#[command(name = "ghost")]
#[command(about = "GHOST - Neural Assistant Interface", long_about = None)]
struct Cli {
    /// Path to the configuration file (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip every simulated delay
    #[arg(long)]
    fast: bool,
}

const COMMANDS: &[&str] = &[
    "/login", "/logout", "/go", "/chat", "/sos", "/sound", "/routes", "/status", "/window",
    "/contacts", "/notion", "/shutdown", "/restart", "/help", "/quit",
];

/// Readline helper providing completion, highlighting and hints for the
/// slash commands.
#[derive(Clone)]
struct ShellHelper {
    commands: Vec<String>,
}

impl ShellHelper {
    fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|cmd| cmd.to_string()).collect(),
        }
    }
}

impl Helper for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for ShellHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for ShellHelper {}

/// Picks the host bridge for this process.
///
/// When `GHOST_HOST_BRIDGE` is set a channel bridge is wired to an
/// in-process drain standing in for the native host; otherwise the shell
/// runs disconnected and commands are dropped with a trace.
fn compose_bridge() -> Arc<dyn HostBridge> {
    if std::env::var("GHOST_HOST_BRIDGE").is_ok() {
        let (bridge, mut rx) = ChannelBridge::new();
        tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                tracing::info!(command = %msg.command, payload = ?msg.payload, "host received command");
            }
        });
        Arc::new(bridge)
    } else {
        Arc::new(DisconnectedBridge)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = if cli.fast {
        AppConfig::instant()
    } else {
        AppConfig::load_or_default(cli.config.as_deref())
    };

    // Composition root
    let store = Arc::new(SessionStore::with_session(Session {
        sound_enabled: config.sound_enabled,
        ..Session::default()
    }));
    let bridge = compose_bridge();
    store.probe_host(bridge.as_ref());

    let auth = AuthUseCase::new(
        store.clone(),
        Arc::new(SimulatedGoogleIdentity::new(config.auth.sign_in_delay())),
    );
    let mut chat = ChatService::new(&config.chat);
    let mut settings = SettingsService::new();
    let sos = SosUseCase::new(&config.sos);
    let admin = AdminConsole::new(bridge.clone());

    // Boot printout
    BootSequence::new(store.clone(), &config.boot)
        .run(|line| {
            if line.contains("[OK]") {
                println!("{}", line.bright_cyan());
            } else {
                println!("{}", line.bright_black());
            }
        })
        .await;
    println!();

    // REPL setup
    let helper = ShellHelper::new();
    let mut rl: Editor<ShellHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== GHOST INTERFACE ===".bright_magenta().bold());
    println!(
        "{}",
        "Type '/login' to authenticate, '/help' for commands, '/quit' to exit.".bright_black()
    );
    println!();

    let mut current = Route::Login;

    loop {
        let readline = rl.readline(&prompt(&store.snapshot(), current));

        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                let (command, rest) = match trimmed.split_once(' ') {
                    Some((cmd, rest)) => (cmd, rest.trim()),
                    None => (trimmed, ""),
                };

                match command {
                    "/quit" | "/exit" => {
                        println!("{}", "Connection terminated.".bright_green());
                        break;
                    }
                    "/help" => print_help(),
                    "/login" => {
                        if store.snapshot().is_authenticated {
                            let name = store
                                .snapshot()
                                .user
                                .map(|u| u.name)
                                .unwrap_or_default();
                            println!("{}", format!("Already authenticated as {name}.").yellow());
                            continue;
                        }
                        println!("{}", "AUTHENTICATING...".bright_cyan());
                        match auth.sign_in().await {
                            Ok(user) => {
                                println!(
                                    "{}",
                                    format!("Access granted. Welcome, {}.", user.name)
                                        .bright_green()
                                );
                                current = navigate(&store, "/dashboard", &chat, &admin);
                            }
                            Err(e) => {
                                println!("{}", format!("Authentication failed: {e}").red());
                            }
                        }
                    }
                    "/logout" => {
                        auth.sign_out();
                        current = Route::Login;
                        println!("{}", "Signed out. Awaiting authentication.".bright_black());
                    }
                    "/go" => {
                        if rest.is_empty() {
                            println!("{}", "Usage: /go <path>".bright_black());
                            continue;
                        }
                        current = navigate(&store, rest, &chat, &admin);
                    }
                    "/chat" => {
                        let decision = authorize(&store.snapshot(), Route::Chat);
                        if !matches!(decision, RouteDecision::Grant(_)) {
                            println!("{}", "ACCESS DENIED - authenticate first.".red());
                            continue;
                        }
                        match chat.send(rest).await {
                            Some(reply) => {
                                println!("{}", format!("GHOST: {}", reply.text).bright_blue());
                            }
                            None => println!("{}", "Usage: /chat <message>".bright_black()),
                        }
                    }
                    "/sos" => {
                        println!(
                            "{}",
                            "S.O.S. ACTIVATED - capturing audio and location...".bright_red()
                        );
                        let outcome = sos.dispatch(settings.contacts()).await;
                        for contact in &outcome.notified {
                            println!(
                                "{}",
                                format!("  alert sent to {} ({})", contact.name, contact.phone)
                                    .red()
                            );
                        }
                        println!("{}", "Location ping attached.".bright_black());
                    }
                    "/sound" => {
                        store.toggle_sound();
                        let enabled = store.snapshot().sound_enabled;
                        println!(
                            "{}",
                            format!("Sound {}", if enabled { "ON" } else { "OFF" }).bright_cyan()
                        );
                    }
                    "/routes" => print_routes(),
                    "/status" => print_status(&store.snapshot(), current),
                    "/contacts" => match rest.split_once(' ') {
                        Some(("add", entry)) => match entry.split_once(';') {
                            Some((name, phone)) => match settings.add_contact(name, phone) {
                                Some(contact) => println!(
                                    "{}",
                                    format!("contact {} added ({})", contact.name, contact.id)
                                        .bright_green()
                                ),
                                None => println!("{}", "Name and phone required.".red()),
                            },
                            None => println!(
                                "{}",
                                "Usage: /contacts add <name>;<phone>".bright_black()
                            ),
                        },
                        Some(("rm", id)) => {
                            if settings.remove_contact(id) {
                                println!("{}", "Contact removed.".bright_green());
                            } else {
                                println!("{}", "No such contact.".red());
                            }
                        }
                        _ => {
                            for contact in settings.contacts() {
                                println!(
                                    "  {}  {:<24} {}",
                                    contact.id.bright_black(),
                                    contact.name,
                                    contact.phone.bright_blue()
                                );
                            }
                        }
                    },
                    "/notion" => {
                        if settings.connect_notion(rest) {
                            println!("{}", "Connected to Notion.".bright_green());
                        } else {
                            println!("{}", "Usage: /notion <page-id>".bright_black());
                        }
                    }
                    "/window" => {
                        let command = match rest {
                            "min" => Some(HostCommand::MinimizeWindow),
                            "max" => Some(HostCommand::MaximizeWindow),
                            "close" => Some(HostCommand::CloseWindow),
                            _ => None,
                        };
                        match command {
                            Some(command) => {
                                bridge.send(command, None);
                                if store.snapshot().host_bridge_available {
                                    println!("{}", format!("{command} sent.").bright_black());
                                } else {
                                    println!(
                                        "{}",
                                        format!("No native host; {command} dropped.")
                                            .bright_black()
                                    );
                                }
                            }
                            None => {
                                println!("{}", "Usage: /window <min|max|close>".bright_black());
                            }
                        }
                    }
                    "/shutdown" | "/restart" => {
                        let decision = authorize(&store.snapshot(), Route::Admin);
                        if !matches!(decision, RouteDecision::Grant(View::Admin)) {
                            println!("{}", "Unknown command".bright_black());
                            continue;
                        }
                        if command == "/shutdown" {
                            admin.shutdown_pc();
                            println!("{}", "SHUTDOWN_PC dispatched.".bright_red());
                        } else {
                            admin.restart_pc();
                            println!("{}", "RESTART_PC dispatched.".bright_red());
                        }
                    }
                    _ => println!("{}", "Unknown command".bright_black()),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("{}", "Connection terminated.".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Readline error: {err:?}").red());
                break;
            }
        }
    }

    Ok(())
}

fn prompt(session: &Session, current: Route) -> String {
    let who = session
        .user
        .as_ref()
        .map(|u| u.name.as_str())
        .unwrap_or("anonymous");
    format!("ghost:{}@{} >> ", who, current.path())
}

/// Resolves `path` through the guard, following a single redirect hop,
/// and renders the resulting view.
fn navigate(store: &SessionStore, path: &str, chat: &ChatService, admin: &AdminConsole) -> Route {
    let session = store.snapshot();
    let route = Route::from_path(path);

    match authorize(&session, route) {
        RouteDecision::Grant(view) => {
            render(view, &session, chat, admin);
            route
        }
        RouteDecision::Redirect(target) => {
            println!(
                "{}",
                format!("redirected to {}", target.path()).bright_black()
            );
            // Redirect targets are public, so rendering them needs no
            // second guard decision.
            render(target.view(), &session, chat, admin);
            target
        }
    }
}

fn render(view: View, session: &Session, chat: &ChatService, admin: &AdminConsole) {
    match view {
        View::Login => {
            println!("{}", "NEURAL INTERFACE ACCESS".bright_cyan().bold());
            println!("{}", "Awaiting authentication. Use /login.".bright_black());
        }
        View::Dashboard => {
            let stats = DashboardStats::for_user(session.user.as_ref());
            let name = session
                .user
                .as_ref()
                .map(|u| u.name.as_str())
                .unwrap_or("Operador");
            println!("{}", format!("Bem-vindo, {name}").bright_cyan().bold());
            println!(
                "{}",
                format!(
                    "  streak {} dias | xp {} | nivel {} | missoes {}",
                    stats.streak, stats.xp, stats.level, stats.missions
                )
                .bright_blue()
            );
        }
        View::Chat => {
            println!("{}", "Interface de Comunicação".bright_cyan().bold());
            for message in chat.messages() {
                match message.sender {
                    ChatSender::Ghost => {
                        println!("{}", format!("GHOST: {}", message.text).bright_blue());
                    }
                    ChatSender::User => println!("  you: {}", message.text),
                }
            }
            println!("{}", "Use /chat <message> to talk.".bright_black());
        }
        View::Tutor => {
            println!("{}", "TUTOR MODE".bright_cyan().bold());
            for course in tutor::catalog() {
                println!(
                    "{}",
                    format!(
                        "  {:<12} {:<24} {:>3} lessons  {:>3}%",
                        course.title, course.subtitle, course.lessons, course.progress
                    )
                    .bright_blue()
                );
            }
            println!(
                "{}",
                format!("Levels: {}", tutor::LEVELS.join(" / ")).bright_black()
            );
        }
        View::Admin => {
            println!("{}", "PAINEL ADMINISTRATIVO".bright_red().bold());
            println!(
                "{}",
                "ÁREA RESTRITA - ACESSO MONITORADO".red()
            );
            let metrics = admin.metrics();
            println!(
                "{}",
                format!(
                    "  active users {} | req/min {} | storage {} GB | alerts {}",
                    metrics.active_users,
                    metrics.requests_per_min,
                    metrics.database_gb,
                    metrics.alerts
                )
                .bright_blue()
            );
            println!(
                "{}",
                "System controls: /shutdown, /restart".bright_black()
            );
        }
        View::NotFound => {
            println!("{}", "404 // SIGNAL LOST".bright_red().bold());
        }
    }
}

fn print_routes() {
    use strum::IntoEnumIterator;

    for route in Route::iter() {
        let access = match route.access() {
            ghost_core::route::Access::Public => "public",
            ghost_core::route::Access::Authenticated => "authenticated",
            ghost_core::route::Access::Admin => "admin",
        };
        println!("  {:<28} {}", route.path(), access.bright_black());
    }
}

fn print_status(session: &Session, current: Route) {
    println!("  booted:        {}", session.is_booted);
    println!("  authenticated: {}", session.is_authenticated);
    if let Some(user) = &session.user {
        println!("  user:          {} <{}> ({:?})", user.name, user.email, user.role);
    }
    println!("  host bridge:   {}", session.host_bridge_available);
    println!("  sound:         {}", session.sound_enabled);
    println!("  route:         {}", current.path());
}

fn print_help() {
    println!("  /login             simulated sign-in");
    println!("  /logout            clear the session");
    println!("  /go <path>         navigate (see /routes)");
    println!("  /chat <message>    talk to the assistant");
    println!("  /sos               trigger the emergency alert");
    println!("  /sound             toggle the sound preference");
    println!("  /window <op>       min | max | close");
    println!("  /contacts          list, add <name>;<phone>, rm <id>");
    println!("  /notion <page-id>  link a Notion workspace");
    println!("  /status            session snapshot");
    println!("  /routes            route table");
    println!("  /quit              exit");
}
