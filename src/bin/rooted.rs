//! Command-line front-end for the blog client.

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use env_logger::Env;

use rooted_risen::client::{BlogSession, ClientError, FileStore, HttpPostApi, PostApi, PublishOutcome};
use rooted_risen::config::{ClientConfig, DEMO_PASSWORD, DEMO_USERNAME};
use rooted_risen::post::post_model::{Category, Post, PostDraft};

#[derive(Parser)]
#[command(name = "rooted", about = "Rooted & Risen: writing for the ones learning to rise again.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show every post, newest first
    List,
    /// Browse posts grouped by category
    Categories {
        /// Only show this category
        #[arg(long)]
        category: Option<Category>,
    },
    /// Write a new story
    Publish {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long, default_value = "Reflection")]
        category: Category,
        /// Image as a data URL
        #[arg(long)]
        image: Option<String>,
    },
    /// Author login against the configured backend
    Login {
        #[arg(long, default_value = DEMO_USERNAME)]
        username: String,
        #[arg(long, default_value = DEMO_PASSWORD)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), ClientError> {
    let config = ClientConfig::from_env();
    let remote = config
        .api_base
        .as_deref()
        .map(|base| Box::new(HttpPostApi::new(base)) as Box<dyn PostApi>);
    let mut session = BlogSession::start(remote, FileStore::new(&config.data_dir)).await?;

    match cli.command {
        Command::List => {
            if session.posts().is_empty() {
                println!("No posts yet.");
            }
            for post in session.posts() {
                print_post(post, true);
            }
        }
        Command::Categories { category } => {
            for (group, posts) in session.categories() {
                if category.is_some_and(|wanted| wanted != group) {
                    continue;
                }
                println!("== {} ==", group);
                if posts.is_empty() {
                    println!("No posts in this category yet.\n");
                }
                for post in posts {
                    print_post(post, false);
                }
            }
        }
        Command::Publish {
            title,
            content,
            category,
            image,
        } => {
            let mut draft = PostDraft::new(title, content, category);
            draft.image = image;
            *session.draft_mut() = draft;

            let remote_mode = session.is_remote();
            let outcome = session.publish().await?;
            println!("{}", publish_message(&outcome, remote_mode));
        }
        Command::Login { username, password } => {
            session.login(&username, &password).await?;
            println!("Logged in (demo). You can now publish to backend.");
        }
    }

    Ok(())
}

/// What the author is told about where the post ended up. Remote sessions don't
/// mirror to disk, so anything not accepted by the backend lives only as long as the process.
fn publish_message(outcome: &PublishOutcome, remote_mode: bool) -> String {
    match outcome {
        PublishOutcome::Remote(post) => format!("Published \"{}\".", post.title),
        PublishOutcome::Local(post) if !remote_mode => format!("Saved \"{}\".", post.title),
        PublishOutcome::Local(post) => format!(
            "Not logged in, so \"{}\" was not sent to the backend. \
             It is kept for this run only; use `rooted login` to publish.",
            post.title
        ),
        PublishOutcome::LocalFallback(post) => format!(
            "Network error. \"{}\" is kept for this run only.",
            post.title
        ),
    }
}

fn print_post(post: &Post, with_category: bool) {
    println!("{}", post.title);
    println!("{}", post.date);
    if with_category {
        println!("[{}]", post.category);
    }
    if post.image.is_some() {
        println!("(image attached)");
    }
    println!("{}\n", post.content);
}
