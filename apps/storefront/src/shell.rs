//! # Shell
//!
//! Line-oriented front end: each input line is one command, each reply is a
//! rendered page or a short message.
//!
//! ## Event Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         run_shell()                                     │
//! │                                                                         │
//! │   ┌──────────────────┐            ┌──────────────────────────────┐     │
//! │   │  fetch finished  │  (biased)  │  stdin line                  │     │
//! │   │  (mpsc)          │            │  "add 3" ──► ShellCommand    │     │
//! │   └────────┬─────────┘            └──────────────┬───────────────┘     │
//! │            │                                     │                      │
//! │            ▼                                     ▼                      │
//! │   re-render if on Home              Shell::handle() ──► Reply          │
//! │                                                                         │
//! │   Fetches run as spawned tasks on the same current-thread runtime,     │
//! │   so a slow product source never blocks input.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Commands
//! | Input              | Effect                                  |
//! |--------------------|-----------------------------------------|
//! | `home`, `/`        | Home page (opening it loads products)   |
//! | `cart`, `/cart`    | Cart page                               |
//! | `goto <path>`      | Any route, case-insensitive             |
//! | `add <id>`         | Add a loaded product to the cart        |
//! | `remove <id>`      | Remove every entry for that product     |
//! | `clear`            | Empty the cart                          |
//! | `fetch`            | Reload products                         |
//! | `show`             | Redraw the current page                 |
//! | `help`             | List commands                           |
//! | `quit`             | Exit                                    |

use std::str::FromStr;

use storefront_core::{ProductId, Resolution};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::commands;
use crate::error::ApiError;
use crate::state::{CartState, CatalogState, ConfigState};
use crate::view::{self, Route};

// =============================================================================
// Command Parsing
// =============================================================================

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Goto(Route),
    Add(ProductId),
    Remove(ProductId),
    Clear,
    Fetch,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("No page at {0}")]
    UnknownRoute(String),

    #[error("{command} needs a product id")]
    MissingId { command: &'static str },

    #[error("Invalid product id: {0}")]
    InvalidId(String),

    #[error("goto needs a path")]
    MissingPath,
}

impl FromStr for ShellCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(ShellCommand::Show);
        };
        let arg = words.next();

        if head.starts_with('/') {
            return parse_route(head);
        }

        match head.to_ascii_lowercase().as_str() {
            "home" => Ok(ShellCommand::Goto(Route::Home)),
            "cart" => Ok(ShellCommand::Goto(Route::Cart)),
            "goto" | "go" => parse_route(arg.ok_or(ParseCommandError::MissingPath)?),
            "add" => parse_id("add", arg).map(ShellCommand::Add),
            "remove" | "rm" => parse_id("remove", arg).map(ShellCommand::Remove),
            "clear" => Ok(ShellCommand::Clear),
            "fetch" | "reload" => Ok(ShellCommand::Fetch),
            "show" => Ok(ShellCommand::Show),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
            _ => Err(ParseCommandError::Unknown(head.to_string())),
        }
    }
}

fn parse_route(path: &str) -> Result<ShellCommand, ParseCommandError> {
    Route::from_path(path)
        .map(ShellCommand::Goto)
        .ok_or_else(|| ParseCommandError::UnknownRoute(path.to_string()))
}

fn parse_id(command: &'static str, arg: Option<&str>) -> Result<ProductId, ParseCommandError> {
    let arg = arg.ok_or(ParseCommandError::MissingId { command })?;
    arg.parse()
        .map_err(|_| ParseCommandError::InvalidId(arg.to_string()))
}

pub const HELP: &str = "\
Commands:
  home | /            show products
  cart | /cart        show the cart
  goto <path>         open a page
  add <id>            add a product to the cart
  remove <id>         remove a product from the cart
  clear               empty the cart
  fetch               reload products
  show                redraw the page
  help                this list
  quit                exit
";

// =============================================================================
// Shell
// =============================================================================

/// What the shell wants printed after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Page(String),
    Message(String),
    Quit,
}

/// The view layer's state: the current route plus handles to the stores.
#[derive(Debug)]
pub struct Shell {
    config: ConfigState,
    catalog: CatalogState,
    cart: CartState,
    route: Route,
    auto_fetch: bool,
    home_mounted: bool,
    fetch_done: mpsc::UnboundedSender<Resolution>,
}

impl Shell {
    /// Creates a shell that has not shown a page yet. The receiver yields
    /// one value per finished background fetch.
    ///
    /// With `auto_fetch` off, opening Home does not load products.
    pub fn new(
        config: ConfigState,
        catalog: CatalogState,
        cart: CartState,
        auto_fetch: bool,
    ) -> (Self, mpsc::UnboundedReceiver<Resolution>) {
        let (fetch_done, fetches) = mpsc::unbounded_channel();
        let shell = Shell {
            config,
            catalog,
            cart,
            route: Route::Home,
            auto_fetch,
            home_mounted: false,
            fetch_done,
        };
        (shell, fetches)
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Renders the current page.
    pub fn render(&self) -> String {
        view::render_page(
            self.route,
            &self.config,
            &commands::product::get_products(&self.catalog),
            &commands::cart::get_cart(&self.cart),
        )
    }

    /// Switches page and renders it.
    ///
    /// Opening Home from another page (or at startup) starts a load.
    /// Navigating to Home while it is already shown does not.
    pub fn navigate(&mut self, route: Route) -> String {
        debug!(route = %route, "navigate");
        self.route = route;

        let mounting_home = route == Route::Home && !self.home_mounted;
        self.home_mounted = route == Route::Home;
        if mounting_home && self.auto_fetch {
            self.spawn_fetch();
        }

        self.render()
    }

    /// Starts a background load. The store is `loading` when this returns.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn_fetch(&self) {
        let store = self.catalog.store().clone();
        let ticket = store.begin_fetch();
        let done = self.fetch_done.clone();

        tokio::spawn(async move {
            let resolution = store.finish_fetch(ticket).await;
            // The receiver is gone only when the shell loop has exited.
            let _ = done.send(resolution);
        });
    }

    pub fn handle(&mut self, command: ShellCommand) -> Reply {
        match command {
            ShellCommand::Goto(route) => Reply::Page(self.navigate(route)),
            ShellCommand::Add(id) => {
                match commands::cart::add_to_cart(&self.catalog, &self.cart, id) {
                    Ok(_) => Reply::Page(self.render()),
                    Err(e) => error_reply(e),
                }
            }
            ShellCommand::Remove(id) => {
                commands::cart::remove_from_cart(&self.cart, id);
                Reply::Page(self.render())
            }
            ShellCommand::Clear => {
                commands::cart::clear_cart(&self.cart);
                Reply::Page(self.render())
            }
            ShellCommand::Fetch => {
                self.spawn_fetch();
                Reply::Page(self.render())
            }
            ShellCommand::Show => Reply::Page(self.render()),
            ShellCommand::Help => Reply::Message(format!(
                "{}\nProducts are loaded from {}\n",
                HELP, self.config.source
            )),
            ShellCommand::Quit => Reply::Quit,
        }
    }

    /// Parses and handles one input line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match line.parse::<ShellCommand>() {
            Ok(command) => self.handle(command),
            Err(e) => error_reply(ApiError::from(e)),
        }
    }
}

fn error_reply(err: ApiError) -> Reply {
    Reply::Message(format!("Error: {}\n", err.message))
}

// =============================================================================
// Event Loop
// =============================================================================

/// Runs the shell until `quit` or end of input.
///
/// Opens on the Home page. Blank lines are ignored.
pub async fn run_shell<R, W>(
    mut shell: Shell,
    mut fetches: mpsc::UnboundedReceiver<Resolution>,
    input: R,
    output: &mut W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let first = shell.navigate(Route::Home);
    write_block(output, &first).await?;

    let mut lines = input.lines();
    loop {
        tokio::select! {
            biased;

            Some(resolution) = fetches.recv() => {
                debug!(?resolution, "background fetch finished");
                if matches!(resolution, Resolution::Applied(_)) && shell.route() == Route::Home {
                    write_block(output, &shell.render()).await?;
                }
            }

            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("input closed");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }

                match shell.handle_line(&line) {
                    Reply::Quit => break,
                    Reply::Page(text) | Reply::Message(text) => write_block(output, &text).await?,
                }
            }
        }
    }

    info!("Shell closed");
    Ok(())
}

async fn write_block<W>(output: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    if !text.ends_with('\n') {
        output.write_all(b"\n").await?;
    }
    output.write_all(b"\n").await?;
    output.flush().await
}
