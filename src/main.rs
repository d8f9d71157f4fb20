use {
  anyhow::Context,
  clap::{Parser, Subcommand},
  crossterm::style::Stylize,
  haxor::{Category, Config, HackerNews, Item, Relation, User},
  std::{
    backtrace::BacktraceStatus,
    io::{self, IsTerminal},
    num::NonZeroUsize,
    process,
    time::Duration,
  },
  tracing_subscriber::EnvFilter,
};

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

#[derive(Parser)]
#[command(version, about = "Query the Hacker News API")]
struct Arguments {
  #[arg(long, help = "API version to query")]
  api_version: Option<String>,
  #[command(subcommand)]
  command: Command,
  #[arg(long, help = "Maximum number of in-flight requests")]
  concurrency: Option<NonZeroUsize>,
  #[arg(long, help = "Per-request timeout in seconds")]
  timeout: Option<u64>,
}

impl Arguments {
  fn config(&self) -> Result<Config> {
    let mut config =
      Config::from_env().context("could not read configuration")?;

    if let Some(version) = &self.api_version {
      config.api_version.clone_from(version);
    }

    if let Some(concurrency) = self.concurrency {
      config.concurrency = concurrency.get();
    }

    if let Some(seconds) = self.timeout {
      config.timeout = Some(Duration::from_secs(seconds));
    }

    Ok(config)
  }
}

#[derive(Subcommand)]
enum Command {
  #[command(about = "Fetch every item ever posted")]
  All,
  #[command(about = "Fetch a single item")]
  Item {
    id: u64,
    #[arg(long, help = "Resolve author, parent, poll and children")]
    expand: bool,
    #[arg(long, help = "Print the JSON payload")]
    raw: bool,
  },
  #[command(about = "Fetch the most recent items")]
  Last { count: u64 },
  #[command(about = "Print the highest item identifier")]
  MaxItem {
    #[arg(long, help = "Fetch and print the item itself")]
    expand: bool,
  },
  #[command(about = "Fetch a story feed: top, new, ask, show or job")]
  Stories {
    category: Category,
    #[arg(long, help = "Return at most this many stories")]
    limit: Option<usize>,
    #[arg(long, help = "Print the JSON payloads")]
    raw: bool,
  },
  #[command(about = "Fetch recently changed items and profiles")]
  Updates,
  #[command(about = "Fetch a single user")]
  User {
    id: String,
    #[arg(long, help = "Fetch the user's submissions")]
    expand: bool,
    #[arg(long, help = "Print the JSON payload")]
    raw: bool,
  },
}

fn print_items(items: &[Item]) {
  for item in items {
    println!("{item}");
  }
}

fn print_user(user: &User, raw: bool) {
  if raw {
    println!("{}", user.raw_json());
    return;
  }

  println!("{user}");

  if let Some(Relation::Resolved(items)) = &user.submitted {
    println!("submitted: {}", items.len());
  }

  if let Some(submissions) = &user.submissions {
    for (label, items) in [
      ("stories", &submissions.stories),
      ("comments", &submissions.comments),
      ("jobs", &submissions.jobs),
      ("polls", &submissions.polls),
      ("pollopts", &submissions.pollopts),
    ] {
      println!("{label}: {}", items.len());
    }
  }
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  let hn = HackerNews::from_config(&arguments.config()?)?;

  match arguments.command {
    Command::All => print_items(&hn.get_all().await?),
    Command::Item { id, expand, raw } => {
      let item = hn
        .get_item(id, expand)
        .await
        .with_context(|| format!("failed to fetch item {id}"))?;

      if raw {
        println!("{}", item.raw_json());
      } else {
        println!("{item}");

        if let Some(text) = item.plain_text() {
          println!("{text}");
        }
      }
    }
    Command::Last { count } => print_items(&hn.get_last(count).await?),
    Command::MaxItem { expand } => {
      if expand {
        println!("{}", hn.get_max_item(true).await?);
      } else {
        println!("{}", hn.max_item_id().await?);
      }
    }
    Command::Stories {
      category,
      limit,
      raw,
    } => {
      if raw {
        for payload in hn.stories_raw(category, limit).await? {
          println!("{payload}");
        }
      } else {
        print_items(
          &hn
            .stories(category, limit)
            .await
            .with_context(|| format!("failed to load {category} stories"))?,
        );
      }
    }
    Command::Updates => {
      let updates = hn.updates().await?;

      print_items(&updates.items);

      for user in &updates.profiles {
        print_user(user, false);
      }
    }
    Command::User { id, expand, raw } => {
      let user = hn
        .get_user(&id, expand)
        .await
        .with_context(|| format!("failed to fetch user {id}"))?;

      print_user(&user, raw);
    }
  }

  Ok(())
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(io::stderr)
    .init();

  if let Err(error) = run().await {
    report(&error);
    process::exit(1);
  }
}

fn report(error: &anyhow::Error) {
  let color = io::stderr().is_terminal();

  let label = |text: &'static str| {
    if color {
      text.bold().red().to_string()
    } else {
      text.to_string()
    }
  };

  eprintln!("{} {error}", label("error:"));

  let mut causes = error.chain().skip(1).peekable();

  if causes.peek().is_some() {
    eprintln!("\n{}", label("because:"));
    for cause in causes {
      eprintln!("{} {cause}", label("-"));
    }
  }

  let backtrace = error.backtrace();

  if backtrace.status() == BacktraceStatus::Captured {
    eprintln!("{}\n{backtrace}", label("backtrace:"));
  }
}
