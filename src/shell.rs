//! Interactive console: numbered menus over a `Messenger`.
//!
//! Works over any `BufRead`/`Write` pair so sessions can be scripted. End of
//! input ends the session from any prompt.
//!
//! CHANGELOG:
//! - 10/16/2026 - Initial implementation

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::error::MessengerError;
use crate::messenger::Messenger;

const GREETING: &str = "\n\n*******************************************************\n              User Interface      \t               \n*******************************************************\n";

const MAIN_MENU: &str = "MAIN MENU\n---------\n1. Create user\n2. Log in\n9. < EXIT";

const USER_MENU: &str = "MAIN MENU\n---------\n\
1. Add to contact list\n\
2. Browse contact list\n\
3. Delete from contact list\n\
4. Write a new message\n\
5. Browse chats\n\
6. Add to blocked list\n\
7. Browse blocked list\n\
8. Delete from blocked list\n\
.........................\n\
9. Log out";

/// Whether the session keeps going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell<'a, R, W> {
    messenger: &'a mut Messenger,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(messenger: &'a mut Messenger, input: R, out: W) -> Self {
        Self { messenger, input, out }
    }

    /// Run until the operator exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        write!(self.out, "{}", GREETING)?;
        loop {
            writeln!(self.out, "{}", MAIN_MENU)?;
            let Some(choice) = self.read_choice()? else {
                return Ok(());
            };
            let flow = match choice {
                1 => self.create_user()?,
                2 => match self.log_in()? {
                    Some(Some(user)) => self.user_session(&user)?,
                    Some(None) => Flow::Continue,
                    None => Flow::Quit,
                },
                9 => Flow::Quit,
                _ => {
                    writeln!(self.out, "Unrecognized choice!")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn user_session(&mut self, user: &str) -> io::Result<Flow> {
        debug!(user, "session started");
        loop {
            writeln!(self.out, "{}", USER_MENU)?;
            let Some(choice) = self.read_choice()? else {
                return Ok(Flow::Quit);
            };
            let flow = match choice {
                1 => self.add_contact(user)?,
                2 => self.list_contacts(user)?,
                3 => self.delete_contact(user)?,
                4 => self.new_message(user)?,
                5 => self.list_chats(user)?,
                6 => self.add_blocked(user)?,
                7 => self.list_blocked(user)?,
                8 => self.delete_blocked(user)?,
                9 => {
                    debug!(user, "logged out");
                    return Ok(Flow::Continue);
                }
                _ => {
                    writeln!(self.out, "Unrecognized choice!")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    // ========================================================================
    // Input
    // ========================================================================

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    /// Re-prompts until a number is entered. `None` at end of input.
    fn read_choice(&mut self) -> io::Result<Option<i32>> {
        loop {
            write!(self.out, "Please make your choice: ")?;
            self.out.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim().parse::<i32>() {
                Ok(choice) => return Ok(Some(choice)),
                Err(_) => writeln!(self.out, "Your input is invalid!")?,
            }
        }
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "\t{}: ", label)?;
        self.out.flush()?;
        self.read_line()
    }

    /// Prompt for a login; surrounding whitespace is dropped.
    fn prompt_login(&mut self, label: &str) -> io::Result<Option<String>> {
        Ok(self.prompt(label)?.map(|s| s.trim().to_string()))
    }

    /// One line per failure, then back to the menu.
    fn report(&mut self, err: MessengerError) -> io::Result<Flow> {
        if err.is_refusal() {
            writeln!(self.out, "\t{}", err)?;
        } else {
            warn!(error = %err, "handler failed");
            writeln!(self.out, "\tError: {}", err)?;
        }
        Ok(Flow::Continue)
    }

    fn print_members(&mut self, members: &[String]) -> io::Result<()> {
        for member in members {
            writeln!(self.out, "{}", member)?;
        }
        Ok(())
    }

    // ========================================================================
    // Main menu
    // ========================================================================

    fn create_user(&mut self) -> io::Result<Flow> {
        let Some(login) = self.prompt_login("Enter user login")? else {
            return Ok(Flow::Quit);
        };
        let Some(password) = self.prompt("Enter user password")? else {
            return Ok(Flow::Quit);
        };
        let Some(phone) = self.prompt("Enter user phone")? else {
            return Ok(Flow::Quit);
        };

        match self.messenger.create_account(&login, &password, &phone) {
            Ok(_) => {
                writeln!(self.out, "User successfully created!")?;
                Ok(Flow::Continue)
            }
            Err(e) => self.report(e),
        }
    }

    /// Outer `None` at end of input, inner `None` on a failed login.
    fn log_in(&mut self) -> io::Result<Option<Option<String>>> {
        let Some(login) = self.prompt_login("Enter user login")? else {
            return Ok(None);
        };
        let Some(password) = self.prompt("Enter user password")? else {
            return Ok(None);
        };

        match self.messenger.authenticate(&login, &password) {
            Ok(Some(user)) => Ok(Some(Some(user))),
            Ok(None) => {
                writeln!(self.out, "Login failed.")?;
                Ok(Some(None))
            }
            Err(e) => {
                self.report(e)?;
                Ok(Some(None))
            }
        }
    }

    // ========================================================================
    // User menu
    // ========================================================================

    fn add_contact(&mut self, user: &str) -> io::Result<Flow> {
        let Some(target) = self.prompt_login("Enter user")? else {
            return Ok(Flow::Quit);
        };
        match self.messenger.add_contact(user, &target) {
            Ok(()) => {
                writeln!(self.out, "\tContact added!")?;
                Ok(Flow::Continue)
            }
            Err(e) => self.report(e),
        }
    }

    fn list_contacts(&mut self, user: &str) -> io::Result<Flow> {
        writeln!(self.out, "\t---Contacts---")?;
        match self.messenger.list_contacts(user) {
            Ok(members) => {
                self.print_members(&members)?;
                Ok(Flow::Continue)
            }
            Err(e) => self.report(e),
        }
    }

    fn delete_contact(&mut self, user: &str) -> io::Result<Flow> {
        let Some(target) = self.prompt_login("Enter user")? else {
            return Ok(Flow::Quit);
        };
        match self.messenger.delete_contact(user, &target) {
            Ok(()) => {
                writeln!(self.out, "\tContact has been deleted from contact list!")?;
                Ok(Flow::Continue)
            }
            Err(e) => self.report(e),
        }
    }

    fn new_message(&mut self, user: &str) -> io::Result<Flow> {
        let Some(recipient) = self.prompt_login("Who do you want to send a message to")? else {
            return Ok(Flow::Quit);
        };
        let Some(text) = self.prompt("Enter message")? else {
            return Ok(Flow::Quit);
        };
        match self.messenger.new_message(user, &recipient, &text) {
            Ok(_) => {
                writeln!(self.out, "\tMessage sent!")?;
                Ok(Flow::Continue)
            }
            Err(e) => self.report(e),
        }
    }

    fn list_chats(&mut self, user: &str) -> io::Result<Flow> {
        writeln!(self.out, "\t----Chats----")?;
        match self.messenger.list_chats(user) {
            Ok(overview) => {
                self.print_members(&overview.members)?;
                if let Some(initiator) = overview.initiator {
                    writeln!(self.out, "{}", initiator)?;
                }
                Ok(Flow::Continue)
            }
            Err(e) => self.report(e),
        }
    }

    fn add_blocked(&mut self, user: &str) -> io::Result<Flow> {
        let Some(target) = self.prompt_login("Enter user")? else {
            return Ok(Flow::Quit);
        };
        match self.messenger.add_blocked(user, &target) {
            Ok(outcome) => {
                if outcome.removed_contact {
                    writeln!(self.out, "\tUser is in your contact list.")?;
                    writeln!(self.out, "\tContact has been deleted from contact list!")?;
                }
                writeln!(self.out, "\tContact added to blocked list!")?;
                Ok(Flow::Continue)
            }
            Err(e) => self.report(e),
        }
    }

    fn list_blocked(&mut self, user: &str) -> io::Result<Flow> {
        writeln!(self.out, "\t---Blocked---")?;
        match self.messenger.list_blocked(user) {
            Ok(members) => {
                self.print_members(&members)?;
                Ok(Flow::Continue)
            }
            Err(e) => self.report(e),
        }
    }

    fn delete_blocked(&mut self, user: &str) -> io::Result<Flow> {
        let Some(target) = self.prompt_login("Enter user")? else {
            return Ok(Flow::Quit);
        };
        match self.messenger.delete_blocked(user, &target) {
            Ok(()) => {
                writeln!(self.out, "\tContact has been deleted from block list!")?;
                Ok(Flow::Continue)
            }
            Err(e) => self.report(e),
        }
    }
}
