//! messenger - console messenger over SQLite
//!
//! Interactive menu by default; every action is also available as a
//! non-interactive subcommand.
//!
//! CHANGELOG:
//! - 10/16/2026 - Subcommands for every console action
//! - 10/16/2026 - Initial scaffold with CLI skeleton

use clap::{Args, Parser, Subcommand};
use std::io;
use std::process::ExitCode;

use messenger::config::Config;
use messenger::output::{self, OutputControls};
use messenger::shell::Shell;
use messenger::{commands, Messenger};

/// Console messenger: users, contact/block lists, private chats.
#[derive(Parser, Debug)]
#[command(name = "messenger")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Database file (default: $MESSENGER_DB, then the user data dir)
    #[arg(long, global = true)]
    db: Option<String>,

    /// Output as JSON (non-interactive commands)
    #[arg(long, global = true)]
    json: bool,

    /// Compact JSON output (no whitespace)
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Credentials for user-scoped commands.
#[derive(Args, Debug)]
struct Credentials {
    /// Login of the acting user
    #[arg(short, long)]
    user: String,

    /// Password of the acting user
    #[arg(short, long)]
    password: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive menu (default)
    Shell,

    // =========================================================================
    // ACCOUNT COMMANDS
    // =========================================================================
    /// Create a user with empty contact and block lists
    CreateUser {
        login: String,
        password: String,
        phone: String,
    },

    /// Check credentials
    Login(Credentials),

    /// Show a user's phone and list ids
    Profile {
        login: String,
    },

    // =========================================================================
    // CONTACT COMMANDS
    // =========================================================================
    /// List contacts
    Contacts(Credentials),

    /// Add a contact (added on both sides)
    AddContact {
        #[command(flatten)]
        auth: Credentials,

        /// Login to add
        target: String,
    },

    /// Delete a contact (removed on both sides)
    DeleteContact {
        #[command(flatten)]
        auth: Credentials,

        /// Login to delete
        target: String,
    },

    // =========================================================================
    // BLOCK COMMANDS
    // =========================================================================
    /// List blocked users
    Blocked(Credentials),

    /// Block a user (removes them from your contacts)
    Block {
        #[command(flatten)]
        auth: Credentials,

        /// Login to block
        target: String,
    },

    /// Remove a user from your block list
    Unblock {
        #[command(flatten)]
        auth: Credentials,

        /// Login to unblock
        target: String,
    },

    // =========================================================================
    // CHAT COMMANDS
    // =========================================================================
    /// Send a message in a new private chat
    Send {
        #[command(flatten)]
        auth: Credentials,

        /// Recipient login
        recipient: String,

        /// Message to send
        message: Vec<String>,
    },

    /// Show your latest chats
    Chats(Credentials),

    /// Show all messages in your chats
    Messages(Credentials),
}

fn main() -> ExitCode {
    // Logs go to stderr so the console stays readable
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let output_controls = OutputControls {
        json: cli.json,
        compact: cli.compact,
    };

    let config = Config::resolve(cli.db.as_deref());
    let mut messenger = match Messenger::open(&config.db_path) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error - Unable to connect to database: {}", e);
            return ExitCode::from(1);
        }
    };

    let result = match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => run_shell(messenger),

        // Account commands
        Command::CreateUser { login, password, phone } => {
            commands::accounts::create_user(&mut messenger, &login, &password, &phone, &output_controls)
        }
        Command::Login(auth) => {
            commands::accounts::login(&messenger, &auth.user, &auth.password, &output_controls)
        }
        Command::Profile { login } => {
            commands::accounts::profile(&messenger, &login, &output_controls)
        }

        // Contact commands
        Command::Contacts(auth) => {
            commands::contacts::list(&messenger, &auth.user, &auth.password, &output_controls)
        }
        Command::AddContact { auth, target } => {
            commands::contacts::add(&mut messenger, &auth.user, &auth.password, &target, &output_controls)
        }
        Command::DeleteContact { auth, target } => {
            commands::contacts::delete(&mut messenger, &auth.user, &auth.password, &target, &output_controls)
        }

        // Block commands
        Command::Blocked(auth) => {
            commands::blocked::list(&messenger, &auth.user, &auth.password, &output_controls)
        }
        Command::Block { auth, target } => {
            commands::blocked::block(&mut messenger, &auth.user, &auth.password, &target, &output_controls)
        }
        Command::Unblock { auth, target } => {
            commands::blocked::unblock(&mut messenger, &auth.user, &auth.password, &target, &output_controls)
        }

        // Chat commands
        Command::Send { auth, recipient, message } => commands::chats::send(
            &mut messenger,
            &auth.user,
            &auth.password,
            &recipient,
            &message.join(" "),
            &output_controls,
        ),
        Command::Chats(auth) => {
            commands::chats::chats(&messenger, &auth.user, &auth.password, &output_controls)
        }
        Command::Messages(auth) => {
            commands::chats::messages(&messenger, &auth.user, &auth.password, &output_controls)
        }
    };

    match result {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            if output_controls.json {
                println!("{}", output::format_error(&e.to_string()));
            } else {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(1)
        }
    }
}

/// Interactive session on stdin/stdout, closing the database on the way out.
fn run_shell(mut messenger: Messenger) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&mut messenger, stdin.lock(), stdout.lock()).run()?;

    print!("Disconnecting from database...");
    messenger.close()?;
    println!("Done\n\nBye !");
    Ok(())
}
