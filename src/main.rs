use clap::Parser;
use log::debug;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use recipe_browser::{
    control_like, control_list, control_list_count, control_list_delete, control_recipe,
    control_search, control_servings, load_config, view, BrowserError, LikeToggle,
    RecipeBrowser, ServingsDirection,
};

/// Search recipes, scale servings, build a shopping list and keep favourites
#[derive(Parser, Debug)]
#[command(name = "recipe-browser", version)]
struct Cli {
    /// Configuration file (defaults to ./config.toml when present)
    #[arg(long)]
    config: Option<String>,

    /// Recipe API base URL
    #[arg(long)]
    api_url: Option<String>,

    /// Directory where liked recipes are stored
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log debug output (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

/// One line of user input
#[derive(Debug, PartialEq)]
enum Command {
    Search(String),
    Page(usize),
    Open(String),
    Servings(ServingsDirection),
    AddToList,
    Like,
    Likes,
    List,
    Delete(String),
    Count(String, f64),
    Help,
    Quit,
}

const HELP: &str = "\
Commands:
  search <query>      search recipes
  page <n>            show another page of results
  open <id>           open a recipe
  + / -               more or fewer servings
  add                 add the open recipe's ingredients to the shopping list
  like                like or unlike the open recipe
  likes               show liked recipes
  list                show the shopping list
  del <item>          remove a shopping list item
  count <item> <n>    change a shopping list item's count
  help                show this help
  quit                exit";

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let command = match word {
        "search" | "s" => Command::Search(rest.to_string()),
        "page" | "p" => Command::Page(
            rest.parse()
                .map_err(|_| format!("'{}' is not a page number", rest))?,
        ),
        "open" | "o" if !rest.is_empty() => Command::Open(rest.to_string()),
        "+" => Command::Servings(ServingsDirection::Increment),
        "-" => Command::Servings(ServingsDirection::Decrement),
        "add" => Command::AddToList,
        "like" => Command::Like,
        "likes" => Command::Likes,
        "list" => Command::List,
        "del" if !rest.is_empty() => Command::Delete(rest.to_string()),
        "count" => {
            let (id, value) = rest
                .split_once(char::is_whitespace)
                .ok_or("usage: count <item> <n>")?;
            let value: f64 = value
                .trim()
                .parse()
                .map_err(|_| format!("'{}' is not a number", value.trim()))?;
            Command::Count(id.to_string(), value)
        }
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(format!("Unknown command '{}'. Type 'help'.", line)),
    };
    Ok(command)
}

/// Apply one command. Returns the text to show, or `None` to exit.
async fn handle(
    browser: &mut RecipeBrowser,
    command: Command,
) -> Result<Option<String>, BrowserError> {
    let per_page = browser.results_per_page;
    let state = &mut browser.state;
    let api = browser.api.as_ref();

    let output = match command {
        Command::Search(query) => match control_search(state, api, &query).await? {
            Some(search) => view::render_results(search, 1, per_page),
            None => "Type something to search for.".to_string(),
        },
        Command::Page(page) => match &state.search {
            Some(search) => view::render_results(search, page, per_page),
            None => "Search first.".to_string(),
        },
        Command::Open(id) => {
            let (recipe, liked) = control_recipe(state, api, &id).await?;
            view::render_recipe(recipe, liked)
        }
        Command::Servings(direction) => {
            if !control_servings(state, direction)? {
                return Ok(Some("Cannot go below one serving.".to_string()));
            }
            let recipe = state.recipe.as_ref().ok_or(BrowserError::NoRecipeLoaded)?;
            let liked = state.likes.is_liked(&recipe.id);
            view::render_recipe(recipe, liked)
        }
        Command::AddToList => control_list(state)?
            .iter()
            .map(view::render_item)
            .collect::<Vec<_>>()
            .join("\n"),
        Command::Like => {
            let message = match control_like(state)? {
                LikeToggle::Liked(like) => format!("Liked '{}'.", like.title),
                LikeToggle::Unliked(id) => format!("Removed {} from likes.", id),
            };
            format!("{} ({} liked)", message, state.likes.num_likes())
        }
        Command::Likes => view::render_likes(state.likes.likes()),
        Command::List => view::render_list(state.list.as_ref()),
        Command::Delete(id) => {
            let item = control_list_delete(state, &id)?;
            format!("Removed {}.", item.ingredient)
        }
        Command::Count(id, value) => {
            control_list_count(state, &id, value)?;
            view::render_list(state.list.as_ref())
        }
        Command::Help => HELP.to_string(),
        Command::Quit => return Ok(None),
    };
    Ok(Some(output))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = load_config(cli.config.as_deref())?;
    let mut builder = RecipeBrowser::builder().config(config);
    if let Some(url) = cli.api_url {
        builder = builder.base_url(url);
    }
    if let Some(dir) = cli.data_dir {
        builder = builder.data_dir(dir);
    }
    let mut browser = builder.build()?;

    println!(
        "{} liked recipes. Type 'help' for commands.",
        browser.state.likes.num_likes()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };
        debug!("Handling {:?}", command);

        match handle(&mut browser, command).await {
            Ok(Some(output)) => println!("{}", output.trim_end()),
            Ok(None) => break,
            Err(e) => println!("Something went wrong: {}", e),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_command("search  pizza dip ").unwrap(),
            Command::Search("pizza dip".to_string())
        );
        assert_eq!(parse_command("page 2").unwrap(), Command::Page(2));
        assert_eq!(
            parse_command("open 47746").unwrap(),
            Command::Open("47746".to_string())
        );
        assert_eq!(
            parse_command("-").unwrap(),
            Command::Servings(ServingsDirection::Decrement)
        );
        assert_eq!(
            parse_command("count item-1 2.5").unwrap(),
            Command::Count("item-1".to_string(), 2.5)
        );
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("page two").is_err());
        assert!(parse_command("count item-1").is_err());
        assert!(parse_command("count item-1 lots").is_err());
        assert!(parse_command("open").is_err());
        assert!(parse_command("dance").is_err());
    }
}
